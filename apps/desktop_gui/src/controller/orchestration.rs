//! Command orchestration helpers from UI actions to backend command queue.

use client_core::SearchState;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend command processor disconnected; restart the app".to_string();
            false
        }
    }
}

/// Start a search for the current query. Any search still in flight becomes
/// stale once the new ticket is queued; if it cannot be queued the ticket is
/// withdrawn and the earlier search stays current.
pub fn request_search(
    state: &mut SearchState,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) -> bool {
    let ticket = state.begin_search();
    let query = state.query().to_string();
    let queued = dispatch_backend_command(cmd_tx, BackendCommand::Search { ticket, query }, status);
    if queued {
        *status = "Searching...".to_string();
    } else {
        state.abandon_search(ticket);
    }
    queued
}

pub fn request_history(
    state: &mut SearchState,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) -> bool {
    let ticket = state.begin_history();
    let queued = dispatch_backend_command(cmd_tx, BackendCommand::FetchHistory { ticket }, status);
    if queued {
        *status = "Loading search history...".to_string();
    } else {
        state.abandon_history(ticket);
    }
    queued
}
