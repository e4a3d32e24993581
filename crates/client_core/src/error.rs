use shared::error::ErrorBody;
use thiserror::Error;
use tracing::error;

pub const SEARCH_FALLBACK_MESSAGE: &str =
    "We ran into a problem fetching search results. Please try again.";
pub const HISTORY_FALLBACK_MESSAGE: &str = "Its not you, its us. Please try again.";
pub const SERVER_ERROR_PREFIX: &str = "Server Error:";
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error: Unable to reach the server.";
pub const GENERIC_ERROR_MESSAGE: &str = "Error: Something went wrong. Please try again.";

/// Raw failure of a movie service request. The detail carried here is for
/// logs only; [`ServiceError::classify`] is the single path to user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("movie service responded with status {status}")]
    ServerStatus {
        status: u16,
        body: ErrorBody,
        raw_body: String,
    },
    #[error("no response from movie service: {detail}")]
    NoResponse { detail: String },
    #[error("request to movie service was not sent: {detail}")]
    RequestNotSent { detail: String },
    #[error("malformed response envelope: {detail}")]
    MalformedEnvelope { detail: String },
}

impl ServiceError {
    pub fn from_send_error(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::RequestNotSent {
                detail: err.to_string(),
            }
        } else {
            Self::NoResponse {
                detail: err.to_string(),
            }
        }
    }

    /// Collapse this failure into the message shown to the user, recording the
    /// raw detail as a diagnostic.
    ///
    /// `default_message` is only consulted for server error responses without a
    /// body message and for malformed envelopes; the network and
    /// request-construction branches always use their fixed text.
    pub fn classify(&self, default_message: &str) -> String {
        match self {
            Self::ServerStatus {
                status,
                body,
                raw_body,
            } => {
                error!(status, body = %raw_body, "movie service error response");
                let message = body.message.as_deref().unwrap_or(default_message);
                format!("{SERVER_ERROR_PREFIX} {message}")
            }
            Self::NoResponse { detail } => {
                error!(%detail, "movie service request got no response");
                NETWORK_ERROR_MESSAGE.to_string()
            }
            Self::RequestNotSent { detail } => {
                error!(%detail, "movie service request could not be sent");
                GENERIC_ERROR_MESSAGE.to_string()
            }
            Self::MalformedEnvelope { detail } => {
                error!(%detail, "movie service returned an unreadable envelope");
                default_message.to_string()
            }
        }
    }
}
