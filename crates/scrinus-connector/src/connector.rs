//! Resource wrappers over the signed client
//!
//! Thin pass-through methods for the device, playlist and flash-message
//! endpoints. Every wrapper issues exactly one call and unwraps the
//! `{success, data}` envelope: `success: false` or absent `data` means
//! "no result" (an empty collection), never an error. Protocol and
//! transport failures from the core client still propagate.

use serde_json::Value;

use crate::error::Result;
use crate::http::client::ScrinusClient;

/// High-level access to the Scrinus resource endpoints.
#[derive(Debug)]
pub struct Connector {
    api: ScrinusClient,
}

impl Connector {
    pub fn new(api: ScrinusClient) -> Self {
        Self { api }
    }

    /// The underlying client, for calls outside the wrapped endpoints.
    pub fn client(&self) -> &ScrinusClient {
        &self.api
    }

    /// All devices available for the current user.
    pub async fn list_devices(&self) -> Result<Value> {
        Ok(unwrap_envelope(self.api.get("/device", None).await?))
    }

    /// A specific device by identity.
    pub async fn read_device(&self, identity: &str) -> Result<Value> {
        let response = self.api.get(&format!("/device/{identity}"), None).await?;
        Ok(unwrap_envelope(response))
    }

    /// Update a specific device.
    pub async fn update_device(&self, identity: &str, device: &Value) -> Result<Value> {
        let params = serde_json::json!({ "device": device });
        let response = self
            .api
            .put(&format!("/device/{identity}"), Some(&params))
            .await?;
        Ok(unwrap_envelope(response))
    }

    /// Trigger a reload on a device.
    pub async fn reload_device(&self, identity: &str) -> Result<Value> {
        let response = self
            .api
            .get(&format!("/device/reload/{identity}"), None)
            .await?;
        Ok(unwrap_envelope(response))
    }

    /// All playlists available for the current user.
    pub async fn list_playlists(&self) -> Result<Value> {
        Ok(unwrap_envelope(self.api.get("/playlist", None).await?))
    }

    /// A specific playlist by identity.
    pub async fn read_playlist(&self, identity: &str) -> Result<Value> {
        let response = self.api.get(&format!("/playlist/{identity}"), None).await?;
        Ok(unwrap_envelope(response))
    }

    /// Create a new playlist.
    pub async fn create_playlist(&self, playlist: &Value) -> Result<Value> {
        let params = serde_json::json!({ "playlist": playlist });
        let response = self.api.post("/playlist", Some(&params)).await?;
        Ok(unwrap_envelope(response))
    }

    /// Update a specific playlist.
    pub async fn update_playlist(&self, identity: &str, playlist: &Value) -> Result<Value> {
        let params = serde_json::json!({ "playlist": playlist });
        let response = self
            .api
            .put(&format!("/playlist/{identity}"), Some(&params))
            .await?;
        Ok(unwrap_envelope(response))
    }

    /// Send a flash message. The target device is addressed through the
    /// message payload itself.
    pub async fn send_message(&self, message: &Value) -> Result<Value> {
        let params = serde_json::json!({ "message": message });
        let response = self.api.post("/flashmessage", Some(&params)).await?;
        Ok(unwrap_envelope(response))
    }
}

/// `data` when `success` is true and `data` is present, otherwise an empty
/// array.
fn unwrap_envelope(response: Value) -> Value {
    let success = response
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if success {
        match response.get("data") {
            Some(Value::Null) | None => Value::Array(Vec::new()),
            Some(data) => data.clone(),
        }
    } else {
        Value::Array(Vec::new())
    }
}
