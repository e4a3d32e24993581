use serde::{Deserialize, Serialize};

/// Body of a non-2xx response. The service usually answers with an envelope,
/// but only the `message` field is relied upon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort parse of an error response body. Non-JSON bodies and bodies
    /// without a string `message` yield an empty `ErrorBody`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) else {
            return Self::default();
        };
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string);
        Self { message }
    }
}
