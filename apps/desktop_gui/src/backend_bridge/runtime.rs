//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ClientSettings, HttpMovieApi, MovieApi};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Start the backend worker thread. Every command runs as its own task, so a
/// slow search never holds up a history fetch (or a newer search).
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let api: Arc<dyn MovieApi> = match HttpMovieApi::new(&settings) {
                Ok(api) => {
                    tracing::info!(base_url = %api.base_url(), "backend worker ready");
                    Arc::new(api)
                }
                Err(err) => {
                    tracing::error!("failed to build movie service client: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                        "backend worker startup failure: {err:#}"
                    )));
                    return;
                }
            };

            while let Ok(cmd) = cmd_rx.recv() {
                let api = Arc::clone(&api);
                let ui_tx = ui_tx.clone();
                match cmd {
                    BackendCommand::Search { ticket, query } => {
                        tracing::info!(ticket = ticket.sequence(), query = %query, "backend: search");
                        tokio::spawn(async move {
                            let outcome = api.search_movie(&query).await;
                            deliver(&ui_tx, UiEvent::SearchFinished { ticket, outcome });
                        });
                    }
                    BackendCommand::FetchHistory { ticket } => {
                        tracing::info!(ticket = ticket.sequence(), "backend: fetch_history");
                        tokio::spawn(async move {
                            let outcome = api.search_history().await;
                            deliver(&ui_tx, UiEvent::HistoryFinished { ticket, outcome });
                        });
                    }
                }
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}

/// Hand a completion to the UI thread, waiting for room when the queue is
/// full. Must run on the multi-thread runtime.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match tokio::task::block_in_place(|| ui_tx.send(event)) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(event = ?err.into_inner(), "ui event queue closed; dropping completion");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use client_core::SearchState;
    use crossbeam_channel::bounded;
    use shared::protocol::HistoryEnvelope;

    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn completion_waits_for_room_in_full_ui_queue() {
        let (ui_tx, ui_rx) = bounded(1);
        ui_tx
            .try_send(UiEvent::BackendUnavailable("earlier event".into()))
            .expect("fill queue");
        let ticket = SearchState::default().begin_history();

        let drain = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            ui_rx.iter().take(2).collect::<Vec<_>>()
        });
        let delivered = tokio::spawn(async move {
            deliver(
                &ui_tx,
                UiEvent::HistoryFinished {
                    ticket,
                    outcome: Ok(HistoryEnvelope::success(Some(vec!["Heat".into()]))),
                },
            )
        })
        .await
        .expect("delivery task");

        assert!(delivered);
        let events = drain.join().expect("drain thread");
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], UiEvent::BackendUnavailable(_)));
        assert!(matches!(
            &events[1],
            UiEvent::HistoryFinished { ticket: received, outcome: Ok(_) } if *received == ticket
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn completion_for_closed_ui_is_dropped() {
        let (ui_tx, ui_rx) = bounded(1);
        drop(ui_rx);
        assert!(!deliver(&ui_tx, UiEvent::BackendUnavailable("gone".into())));
    }
}
