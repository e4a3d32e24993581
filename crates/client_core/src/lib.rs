use std::{sync::Arc, time::Duration};

use anyhow::Result;
use shared::domain::ImdbId;
use tokio::sync::Mutex;
use tracing::info;

pub mod error;
pub mod state;
pub mod transport;

pub use error::ServiceError;
pub use state::{Completion, FailurePolicy, RequestTicket, SearchState};
pub use transport::{HttpMovieApi, MovieApi};

pub const DEFAULT_API_BASE_URL: &str = "https://otonomovieapptask.onrender.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl ClientSettings {
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }
}

/// Owns the search state and drives the movie service.
///
/// `search` and `fetch_history` may run concurrently on the same controller.
/// The state lock is never held across a request, so neither operation waits
/// on the other; completions are sequenced through [`RequestTicket`]s.
pub struct SearchController {
    api: Arc<dyn MovieApi>,
    state: Mutex<SearchState>,
}

impl SearchController {
    pub fn new(api: Arc<dyn MovieApi>, failure_policy: FailurePolicy) -> Self {
        Self {
            api,
            state: Mutex::new(SearchState::new(failure_policy)),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        let api = HttpMovieApi::new(settings)?;
        info!(base_url = %api.base_url(), "movie search client ready");
        Ok(Self::new(Arc::new(api), settings.failure_policy))
    }

    pub async fn set_query(&self, query: impl Into<String>) {
        self.state.lock().await.set_query(query);
    }

    pub async fn search(&self, query: impl Into<String>) -> Completion {
        let (ticket, query) = {
            let mut state = self.state.lock().await;
            state.set_query(query);
            (state.begin_search(), state.query().to_string())
        };
        info!(ticket = ticket.sequence(), query = %query, "search started");

        let outcome = self.api.search_movie(&query).await;
        self.state.lock().await.apply_search(ticket, outcome)
    }

    pub async fn fetch_history(&self) -> Completion {
        let ticket = self.state.lock().await.begin_history();
        info!(ticket = ticket.sequence(), "history fetch started");

        let outcome = self.api.search_history().await;
        self.state.lock().await.apply_history(ticket, outcome)
    }

    pub async fn toggle_details(&self) -> bool {
        self.state.lock().await.toggle_details()
    }

    pub async fn select_movie(&self, imdb_id: &ImdbId) -> bool {
        self.state.lock().await.select_movie(imdb_id)
    }

    pub async fn snapshot(&self) -> SearchState {
        self.state.lock().await.clone()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
