//! Backend completions delivered to the UI thread.

use client_core::{RequestTicket, ServiceError};
use shared::protocol::{HistoryEnvelope, SearchEnvelope};

#[derive(Debug)]
pub enum UiEvent {
    SearchFinished {
        ticket: RequestTicket,
        outcome: Result<SearchEnvelope, ServiceError>,
    },
    HistoryFinished {
        ticket: RequestTicket,
        outcome: Result<HistoryEnvelope, ServiceError>,
    },
    BackendUnavailable(String),
}
