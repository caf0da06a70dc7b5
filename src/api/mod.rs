pub mod admin;
pub mod attendance;
pub mod auth;
pub mod groups;
pub mod reports;

pub use attendance::ApiBackend;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Thin wrapper over the backend's single-endpoint action protocol: reads are
/// GET with `action`/`token` query parameters, writes are POST of a JSON body
/// carrying the same fields. Every response is a JSON object with `ok`; on
/// failure it carries `error`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(ApiClient {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Reachability probe: any HTTP response at all counts as reachable.
    pub async fn probe(&self) -> bool {
        self.http.get(&self.base_url).send().await.is_ok()
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        action: &str,
        token: Option<&str>,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let mut query: Vec<(&str, String)> = vec![("action", action.to_string())];
        if let Some(token) = token {
            query.push(("token", token.to_string()));
        }
        query.extend(params.iter().cloned());

        let resp = self.http.get(&self.base_url).query(&query).send().await?;
        unwrap_envelope(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<T, ClientError> {
        let mut payload = match body {
            Value::Object(map) => map,
            other => {
                return Err(ClientError::Invalid(format!(
                    "Request body must be a JSON object, got {other}"
                )));
            }
        };
        payload.insert("action".to_string(), Value::String(action.to_string()));
        if let Some(token) = token {
            payload.insert("token".to_string(), Value::String(token.to_string()));
        }

        let resp = self
            .http
            .post(&self.base_url)
            .json(&Value::Object(payload))
            .send()
            .await?;
        unwrap_envelope(resp).await
    }
}

/// Check the `ok` envelope, then decode the remaining top-level fields into
/// the expected response shape. The backend reports errors in the body, not
/// via HTTP status.
async fn unwrap_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let value: Value = resp
        .json()
        .await
        .map_err(|e| ClientError::Transport(format!("Malformed backend response: {e}")))?;

    if value.get("ok").and_then(Value::as_bool) != Some(true) {
        let reason = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Backend reported failure")
            .to_string();
        return Err(ClientError::Rejected(reason));
    }

    serde_json::from_value(value)
        .map_err(|e| ClientError::Transport(format!("Unexpected backend response shape: {e}")))
}
