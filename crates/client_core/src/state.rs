//! Search state container and its transitions.

use serde::Serialize;
use shared::{
    domain::{ImdbId, Movie},
    protocol::{HistoryEnvelope, SearchEnvelope},
};
use tracing::debug;

use crate::error::{ServiceError, HISTORY_FALLBACK_MESSAGE, SEARCH_FALLBACK_MESSAGE};

/// What happens to previously displayed data when an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Keep the last successful result next to the new error message.
    #[default]
    RetainResult,
    /// Drop the last successful result when an error is shown.
    ClearResult,
}

/// Sequence number handed out when an operation starts. Only the completion
/// carrying the latest ticket of its kind is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request of the same kind was started; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchState {
    query: String,
    result: Option<Movie>,
    selected_movie: Option<ImdbId>,
    history: Vec<String>,
    error: Option<String>,
    show_details: bool,
    #[serde(skip)]
    failure_policy: FailurePolicy,
    #[serde(skip)]
    latest_search: u64,
    #[serde(skip)]
    latest_history: u64,
}

impl SearchState {
    pub fn new(failure_policy: FailurePolicy) -> Self {
        Self {
            failure_policy,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> Option<&Movie> {
        self.result.as_ref()
    }

    pub fn selected_movie(&self) -> Option<&ImdbId> {
        self.selected_movie.as_ref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle_details(&mut self) -> bool {
        self.show_details = !self.show_details;
        self.show_details
    }

    /// Mark the displayed movie as selected. Ids that do not belong to the
    /// current result are ignored.
    pub fn select_movie(&mut self, imdb_id: &ImdbId) -> bool {
        let displayed = self
            .result
            .as_ref()
            .and_then(|movie| movie.imdb_id.as_ref())
            .is_some_and(|id| id == imdb_id);
        if displayed {
            self.selected_movie = Some(imdb_id.clone());
        }
        displayed
    }

    pub fn begin_search(&mut self) -> RequestTicket {
        self.latest_search += 1;
        RequestTicket(self.latest_search)
    }

    pub fn begin_history(&mut self) -> RequestTicket {
        self.latest_history += 1;
        RequestTicket(self.latest_history)
    }

    /// Withdraw a search ticket whose request was never sent, so the search
    /// that was in flight before it is current again. Only the most recently
    /// issued ticket can be withdrawn.
    pub fn abandon_search(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 != self.latest_search || ticket.0 == 0 {
            return false;
        }
        self.latest_search -= 1;
        true
    }

    pub fn abandon_history(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 != self.latest_history || ticket.0 == 0 {
            return false;
        }
        self.latest_history -= 1;
        true
    }

    pub fn apply_search(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SearchEnvelope, ServiceError>,
    ) -> Completion {
        if ticket.0 != self.latest_search {
            debug!(
                ticket = ticket.0,
                latest = self.latest_search,
                "dropping stale search response"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(envelope) if envelope.succeeded => {
                self.result = envelope.data;
                self.selected_movie = None;
                self.error = None;
            }
            Ok(envelope) => {
                let message = envelope.message_or(SEARCH_FALLBACK_MESSAGE).to_string();
                self.fail_search(message);
            }
            Err(err) => {
                let message = err.classify(SEARCH_FALLBACK_MESSAGE);
                self.fail_search(message);
            }
        }
        Completion::Applied
    }

    pub fn apply_history(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<HistoryEnvelope, ServiceError>,
    ) -> Completion {
        if ticket.0 != self.latest_history {
            debug!(
                ticket = ticket.0,
                latest = self.latest_history,
                "dropping stale history response"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(envelope) if envelope.succeeded => {
                self.history = envelope.data.unwrap_or_default();
                self.error = None;
            }
            Ok(envelope) => {
                let message = envelope.message_or(HISTORY_FALLBACK_MESSAGE).to_string();
                self.fail_history(message);
            }
            Err(err) => {
                let message = err.classify(HISTORY_FALLBACK_MESSAGE);
                self.fail_history(message);
            }
        }
        Completion::Applied
    }

    fn fail_search(&mut self, message: String) {
        if self.failure_policy == FailurePolicy::ClearResult {
            self.result = None;
            self.selected_movie = None;
        }
        self.error = Some(message);
    }

    fn fail_history(&mut self, message: String) {
        if self.failure_policy == FailurePolicy::ClearResult {
            self.history.clear();
        }
        self.error = Some(message);
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
