//! Backend commands queued from UI to backend worker.

use client_core::RequestTicket;

#[derive(Debug)]
pub enum BackendCommand {
    Search {
        ticket: RequestTicket,
        query: String,
    },
    FetchHistory {
        ticket: RequestTicket,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Search { .. } => "search",
            BackendCommand::FetchHistory { .. } => "fetch_history",
        }
    }
}
