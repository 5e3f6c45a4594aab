use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// Three-way confidence distribution as returned by the model server,
/// in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub r#true: f64,
    pub r#false: f64,
    pub misleading: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_label: String,
    pub probabilities: Probabilities,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("server error: {0}")]
    Transport(String),
    #[error("unable to classify: response is missing probabilities")]
    Malformed,
}

#[derive(Clone, Debug)]
pub struct PredictClient {
    base_url: String,
}

impl PredictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Single blocking POST to `/predict`. No retries and no deadline beyond
    /// what the transport itself enforces.
    pub fn classify(&self, text: &str) -> Result<Prediction, ClientError> {
        let url = format!("{}/predict", self.base_url.trim_end_matches('/'));
        let body = serde_json::to_string(&PredictRequest { text })
            .map_err(|e| ClientError::Transport(format!("encode request failed: {e}")))?;

        tracing::debug!("POST {url}");
        let response = ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(|e| ClientError::Transport(format!("POST {url} failed: {e}")))?;
        let raw = response
            .into_string()
            .map_err(|e| ClientError::Transport(format!("read response body failed: {e}")))?;

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| ClientError::Transport(format!("parse json failed: {e}")))?;
        if value.get("probabilities").is_none() {
            return Err(ClientError::Malformed);
        }
        serde_json::from_value(value).map_err(|_| ClientError::Malformed)
    }

    /// Fetches the server's root banner (the model API answers GET / with
    /// usage instructions).
    pub fn probe(&self) -> Result<Value, ClientError> {
        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        let response = ureq::get(&url)
            .call()
            .map_err(|e| ClientError::Transport(format!("GET {url} failed: {e}")))?;
        let raw = response
            .into_string()
            .map_err(|e| ClientError::Transport(format!("read response body failed: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| ClientError::Transport(format!("parse json failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/client/tests.rs"]
mod tests;
