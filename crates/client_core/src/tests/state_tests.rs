use super::*;
use shared::error::ErrorBody;

use crate::error::{GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};

fn inception() -> Movie {
    Movie {
        imdb_id: Some(ImdbId::new("tt1375666")),
        title: Some("Inception".into()),
        plot: Some("A thief who steals corporate secrets...".into()),
        ..Movie::default()
    }
}

fn heat() -> Movie {
    Movie {
        imdb_id: Some(ImdbId::new("tt0113277")),
        title: Some("Heat".into()),
        ..Movie::default()
    }
}

fn searched(state: &mut SearchState, movie: Movie) {
    let ticket = state.begin_search();
    let completion = state.apply_search(ticket, Ok(SearchEnvelope::success(Some(movie))));
    assert_eq!(completion, Completion::Applied);
}

#[test]
fn successful_search_replaces_result_and_clears_error() {
    let mut state = SearchState::default();
    state.set_query("Inception");

    let ticket = state.begin_search();
    state.apply_search(
        ticket,
        Err(ServiceError::NoResponse {
            detail: "connection refused".into(),
        }),
    );
    assert_eq!(state.error(), Some(NETWORK_ERROR_MESSAGE));

    searched(&mut state, inception());
    assert_eq!(state.result(), Some(&inception()));
    assert_eq!(state.error(), None);
    assert_eq!(state.query(), "Inception");
}

#[test]
fn successful_search_without_data_clears_result() {
    let mut state = SearchState::default();
    searched(&mut state, inception());

    let ticket = state.begin_search();
    state.apply_search(ticket, Ok(SearchEnvelope::success(None)));
    assert!(state.result().is_none());
    assert!(state.error().is_none());
}

#[test]
fn application_failure_uses_envelope_message() {
    let mut state = SearchState::default();
    state.set_query("");
    let ticket = state.begin_search();
    state.apply_search(
        ticket,
        Ok(SearchEnvelope::failure(Some("Title required".into()))),
    );
    assert_eq!(state.error(), Some("Title required"));
}

#[test]
fn application_failure_without_message_uses_search_fallback() {
    let mut state = SearchState::default();
    let ticket = state.begin_search();
    state.apply_search(ticket, Ok(SearchEnvelope::failure(None)));
    assert_eq!(state.error(), Some(SEARCH_FALLBACK_MESSAGE));
}

#[test]
fn failed_search_retains_previous_result_by_default() {
    let mut state = SearchState::default();
    searched(&mut state, inception());

    let ticket = state.begin_search();
    state.apply_search(
        ticket,
        Ok(SearchEnvelope::failure(Some("Movie not found".into()))),
    );
    assert_eq!(state.result(), Some(&inception()));
    assert_eq!(state.error(), Some("Movie not found"));
}

#[test]
fn clear_policy_drops_previous_result_on_failure() {
    let mut state = SearchState::new(FailurePolicy::ClearResult);
    searched(&mut state, inception());
    assert!(state.select_movie(&ImdbId::new("tt1375666")));

    let ticket = state.begin_search();
    state.apply_search(
        ticket,
        Err(ServiceError::ServerStatus {
            status: 500,
            body: ErrorBody::default(),
            raw_body: String::new(),
        }),
    );
    assert!(state.result().is_none());
    assert!(state.selected_movie().is_none());
    assert_eq!(
        state.error(),
        Some("Server Error: We ran into a problem fetching search results. Please try again.")
    );
}

#[test]
fn successful_search_resets_selection() {
    let mut state = SearchState::default();
    searched(&mut state, inception());
    assert!(state.select_movie(&ImdbId::new("tt1375666")));
    assert_eq!(state.selected_movie(), Some(&ImdbId::new("tt1375666")));

    searched(&mut state, heat());
    assert!(state.selected_movie().is_none());
}

#[test]
fn selecting_an_undisplayed_movie_is_ignored() {
    let mut state = SearchState::default();
    assert!(!state.select_movie(&ImdbId::new("tt1375666")));

    searched(&mut state, heat());
    assert!(!state.select_movie(&ImdbId::new("tt1375666")));
    assert!(state.selected_movie().is_none());
}

#[test]
fn stale_search_response_is_dropped() {
    let mut state = SearchState::default();
    let first = state.begin_search();
    let second = state.begin_search();

    assert_eq!(
        state.apply_search(second, Ok(SearchEnvelope::success(Some(heat())))),
        Completion::Applied
    );
    assert_eq!(
        state.apply_search(first, Ok(SearchEnvelope::success(Some(inception())))),
        Completion::Stale
    );
    assert_eq!(state.result(), Some(&heat()));
    assert!(first < second);
}

#[test]
fn abandoned_search_ticket_keeps_earlier_search_current() {
    let mut state = SearchState::default();
    let in_flight = state.begin_search();
    let unsent = state.begin_search();

    assert!(state.abandon_search(unsent));
    assert!(!state.abandon_search(unsent));
    assert_eq!(
        state.apply_search(in_flight, Ok(SearchEnvelope::success(Some(heat())))),
        Completion::Applied
    );
    assert_eq!(state.result(), Some(&heat()));
}

#[test]
fn only_the_latest_ticket_can_be_abandoned() {
    let mut state = SearchState::default();
    let older = state.begin_history();
    let newer = state.begin_history();

    assert!(!state.abandon_history(older));
    assert_eq!(
        state.apply_history(older, Ok(HistoryEnvelope::success(Some(vec!["Heat".into()])))),
        Completion::Stale
    );
    assert!(state.abandon_history(newer));
    assert_eq!(
        state.apply_history(older, Ok(HistoryEnvelope::success(Some(vec!["Heat".into()])))),
        Completion::Applied
    );
}

#[test]
fn search_and_history_tickets_are_independent() {
    let mut state = SearchState::default();
    let search = state.begin_search();
    let history = state.begin_history();
    assert_eq!(search.sequence(), 1);
    assert_eq!(history.sequence(), 1);

    assert_eq!(
        state.apply_history(history, Ok(HistoryEnvelope::success(Some(vec!["Heat".into()])))),
        Completion::Applied
    );
    assert_eq!(
        state.apply_search(search, Ok(SearchEnvelope::success(Some(heat())))),
        Completion::Applied
    );
    assert_eq!(state.history(), ["Heat".to_string()]);
}

#[test]
fn history_success_replaces_list_and_defaults_to_empty() {
    let mut state = SearchState::default();
    let ticket = state.begin_history();
    state.apply_history(
        ticket,
        Ok(HistoryEnvelope::success(Some(vec![
            "Inception".into(),
            "Heat".into(),
        ]))),
    );
    assert_eq!(state.history().len(), 2);

    let ticket = state.begin_history();
    state.apply_history(ticket, Ok(HistoryEnvelope::success(None)));
    assert!(state.history().is_empty());
    assert!(state.error().is_none());
}

#[test]
fn history_failure_uses_history_fallback() {
    let mut state = SearchState::default();
    let ticket = state.begin_history();
    state.apply_history(ticket, Ok(HistoryEnvelope::failure(None)));
    assert_eq!(state.error(), Some(HISTORY_FALLBACK_MESSAGE));
}

#[test]
fn history_network_failure_overrides_history_fallback() {
    let mut state = SearchState::default();
    let ticket = state.begin_history();
    state.apply_history(
        ticket,
        Err(ServiceError::NoResponse {
            detail: "operation timed out".into(),
        }),
    );
    assert_eq!(state.error(), Some(NETWORK_ERROR_MESSAGE));
}

#[test]
fn error_state_is_last_write_wins_across_operations() {
    let mut state = SearchState::default();
    let search = state.begin_search();
    let history = state.begin_history();

    state.apply_search(
        search,
        Err(ServiceError::RequestNotSent {
            detail: "bad url".into(),
        }),
    );
    assert_eq!(state.error(), Some(GENERIC_ERROR_MESSAGE));

    state.apply_history(history, Ok(HistoryEnvelope::success(Some(Vec::new()))));
    assert!(state.error().is_none());
}

#[test]
fn toggling_details_twice_restores_flag() {
    let mut state = SearchState::default();
    assert!(!state.show_details());
    assert!(state.toggle_details());
    assert!(!state.toggle_details());
    assert!(!state.show_details());
}

#[test]
fn details_flag_survives_new_results() {
    let mut state = SearchState::default();
    state.toggle_details();
    searched(&mut state, inception());
    assert!(state.show_details());
}

#[test]
fn snapshot_serializes_without_bookkeeping() {
    let mut state = SearchState::default();
    state.set_query("Inception");
    searched(&mut state, inception());

    let value = serde_json::to_value(&state).expect("serialize");
    assert_eq!(value["query"], "Inception");
    assert_eq!(value["result"]["imdbID"], "tt1375666");
    assert!(value.get("latest_search").is_none());
    assert!(value.get("failure_policy").is_none());
}
