use serde::Deserialize;

use super::ApiClient;
use crate::error::ClientError;
use crate::session::Session;

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    role: String,
    name: String,
}

impl ApiClient {
    /// Exchange a PIN for an authenticated session.
    pub async fn login(&self, pin: &str) -> Result<Session, ClientError> {
        let pin = pin.trim();
        if pin.is_empty() {
            return Err(ClientError::Invalid("PIN must not be empty".to_string()));
        }

        let resp: LoginResponse = self.get("login", None, &[("pin", pin.to_string())]).await?;
        Ok(Session {
            token: resp.token,
            role: resp.role,
            name: resp.name,
        })
    }
}
