//! Applies backend completions to the UI-owned search state.

use client_core::{Completion, SearchState};

use crate::controller::events::UiEvent;

pub fn apply_ui_event(state: &mut SearchState, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::SearchFinished { ticket, outcome } => {
            match state.apply_search(ticket, outcome) {
                Completion::Applied => *status = "Ready".to_string(),
                Completion::Stale => {
                    tracing::debug!(ticket = ticket.sequence(), "ignored outdated search response");
                }
            }
        }
        UiEvent::HistoryFinished { ticket, outcome } => {
            match state.apply_history(ticket, outcome) {
                Completion::Applied => *status = "Ready".to_string(),
                Completion::Stale => {
                    tracing::debug!(ticket = ticket.sequence(), "ignored outdated history response");
                }
            }
        }
        UiEvent::BackendUnavailable(message) => {
            *status = message;
        }
    }
}
