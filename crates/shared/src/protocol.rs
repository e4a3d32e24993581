use serde::{Deserialize, Serialize};

use crate::domain::Movie;

/// Path prefix shared by every movie service endpoint.
pub const MOVIE_API_PREFIX: &[&str] = &["api", "Movie"];
pub const SEARCH_SEGMENT: &str = "search";
pub const SEARCH_HISTORY_SEGMENT: &str = "searchHistory";

/// Uniform response wrapper returned by both movie service endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub succeeded: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: Option<T>) -> Self {
        Self {
            succeeded: true,
            data,
            message: None,
        }
    }

    pub fn failure(message: Option<String>) -> Self {
        Self {
            succeeded: false,
            data: None,
            message,
        }
    }

    /// The envelope message when it carries text, else `fallback`.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

pub type SearchEnvelope = Envelope<Movie>;
pub type HistoryEnvelope = Envelope<Vec<String>>;
