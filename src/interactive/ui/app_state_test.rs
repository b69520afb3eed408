#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::api::HttpError;
    use crate::handoff::HostStatus;
    use crate::interactive::constants::{
        HANDOFF_UNAVAILABLE, MESSAGE_CLEAR_DELAY_MS, SEARCH_DEBOUNCE_MS,
    };
    use crate::selection::DetailResponse;
    use crate::session::{PageRequest, PageResponse, SessionStatus};
    use crate::testing::{detail_for, page, summaries, summary};

    fn create_test_state() -> AppState {
        AppState::new(HostStatus::Absent)
    }

    fn expect_page_request(command: Command) -> PageRequest {
        match command {
            Command::FetchPage(request) => request,
            other => panic!("Expected FetchPage, got {other:?}"),
        }
    }

    /// Type a query and let the debounce fire.
    fn search(state: &mut AppState, query: &str) -> PageRequest {
        state.update(Message::QueryChanged(query.to_string()));
        expect_page_request(state.update(Message::SearchRequested))
    }

    fn deliver(state: &mut AppState, request: &PageRequest, count: usize, page_count: u64) {
        state.update(Message::PageLoaded(PageResponse {
            session: request.session,
            page: request.page,
            result: Ok(page(
                summaries(&format!("p{}-", request.page), count),
                request.page,
                page_count,
            )),
        }));
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.mode, Mode::Search);
        assert_eq!(state.search.query, "");
        assert!(state.current_session().is_none());
        assert!(state.results().is_empty());
        assert_eq!(state.ui.message, None);
    }

    #[test]
    fn test_query_changed_schedules_search() {
        let mut state = create_test_state();

        let command = state.update(Message::QueryChanged("moon".to_string()));

        assert_eq!(state.search.query, "moon");
        assert_eq!(command, Command::ScheduleSearch(SEARCH_DEBOUNCE_MS));
        assert_eq!(state.ui.message, Some("typing...".to_string()));
        assert!(state.current_session().is_none());
    }

    #[test]
    fn test_search_requested_starts_session() {
        let mut state = create_test_state();

        let request = search(&mut state, "  moon ");

        assert_eq!(request.query, "moon");
        assert_eq!(request.page, 1);
        assert_eq!(state.ui.message, None);
        let session = state.current_session().unwrap();
        assert_eq!(session.status(), &SessionStatus::Starting);
        assert!(session.is_loading());
    }

    #[test]
    fn test_same_query_does_not_restart_session() {
        let mut state = create_test_state();
        let request = search(&mut state, "moon");

        state.update(Message::QueryChanged("moon ".to_string()));
        let command = state.update(Message::SearchRequested);

        assert_eq!(command, Command::None);
        assert_eq!(state.current_session().unwrap().id(), request.session);
    }

    #[test]
    fn test_clearing_query_shows_welcome() {
        let mut state = create_test_state();
        search(&mut state, "moon");

        let command = state.update(Message::QueryChanged("   ".to_string()));

        assert_eq!(command, Command::None);
        assert!(state.current_session().is_none());
    }

    #[test]
    fn test_page_loaded_fills_results() {
        let mut state = create_test_state();
        let request = search(&mut state, "moon");

        deliver(&mut state, &request, 25, 2);

        assert_eq!(state.results().len(), 25);
        assert!(state.current_session().unwrap().has_more());
    }

    #[test]
    fn test_stale_page_after_query_change() {
        let mut state = create_test_state();
        let old = search(&mut state, "moon");
        let new = search(&mut state, "rover");

        deliver(&mut state, &old, 25, 2);
        assert!(state.results().is_empty());

        deliver(&mut state, &new, 3, 1);
        assert_eq!(state.results().len(), 3);
        assert_eq!(state.current_session().unwrap().query(), "rover");
    }

    #[test]
    fn test_scrolling_near_end_loads_more() {
        let mut state = create_test_state();
        let first = search(&mut state, "moon");
        deliver(&mut state, &first, 25, 2);

        // Far from the end: nothing to fetch
        assert_eq!(state.update(Message::SelectResult(10)), Command::None);
        assert_eq!(state.search.selected_index, 10);

        let second = expect_page_request(state.update(Message::SelectResult(20)));
        assert_eq!(second.page, 2);
        assert_eq!(second.session, first.session);

        // Already fetching page 2
        assert_eq!(state.update(Message::SelectResult(21)), Command::None);

        deliver(&mut state, &second, 10, 2);
        assert_eq!(state.results().len(), 35);
        assert!(!state.current_session().unwrap().has_more());
        assert_eq!(state.update(Message::SelectResult(34)), Command::None);
    }

    #[test]
    fn test_short_page_on_screen_loads_more() {
        let mut state = create_test_state();
        let first = search(&mut state, "moon");

        // Nothing loaded yet
        assert_eq!(state.update(Message::ResultsEndVisible), Command::None);

        deliver(&mut state, &first, 3, 2);
        let second = expect_page_request(state.update(Message::ResultsEndVisible));
        assert_eq!(second.page, 2);
        assert_eq!(state.update(Message::ResultsEndVisible), Command::None);

        deliver(&mut state, &second, 3, 2);
        assert_eq!(state.results().len(), 6);
        assert_eq!(state.update(Message::ResultsEndVisible), Command::None);
    }

    #[test]
    fn test_select_result_out_of_range() {
        let mut state = create_test_state();
        let request = search(&mut state, "moon");
        deliver(&mut state, &request, 3, 1);

        state.update(Message::SelectResult(2));
        state.update(Message::SelectResult(99));

        assert_eq!(state.search.selected_index, 2);
    }

    #[test]
    fn test_retry_after_error() {
        let mut state = create_test_state();
        let request = search(&mut state, "moon");
        state.update(Message::PageLoaded(PageResponse {
            session: request.session,
            page: 1,
            result: Err(HttpError::Status(500)),
        }));
        assert_eq!(
            state.current_session().unwrap().error_message(),
            Some("HTTP 500")
        );

        let retry = expect_page_request(state.update(Message::RetrySearch));
        assert_eq!(retry.page, 1);
        assert_eq!(retry.session, request.session);

        // Nothing to retry while the retry is in flight
        assert_eq!(state.update(Message::RetrySearch), Command::None);
    }

    #[test]
    fn test_suggestions_cycle() {
        let mut state = create_test_state();

        let first = expect_page_request(state.update(Message::NextSuggestion));
        assert_eq!(first.query, "Moon");
        assert_eq!(state.search.query, "Moon");

        let second = expect_page_request(state.update(Message::NextSuggestion));
        assert_eq!(second.query, "Rover");

        let third = expect_page_request(state.update(Message::NextSuggestion));
        assert_eq!(third.query, "Rocket");

        let fourth = expect_page_request(state.update(Message::NextSuggestion));
        assert_eq!(fourth.query, "Moon");
    }

    #[test]
    fn test_suggestion_ignored_for_typed_query() {
        let mut state = create_test_state();
        search(&mut state, "lighthouse");

        assert_eq!(state.update(Message::NextSuggestion), Command::None);
        assert_eq!(state.search.query, "lighthouse");
    }

    #[test]
    fn test_enter_selection_fetches_detail() {
        let mut state = create_test_state();
        let request = search(&mut state, "moon");
        deliver(&mut state, &request, 3, 1);
        state.update(Message::SelectResult(1));

        let command = state.update(Message::EnterSelection);

        match command {
            Command::FetchDetail(detail) => {
                assert_eq!(detail.id, "p1-1");
                assert_eq!(detail.secret, "secretp1-1");
            }
            other => panic!("Expected FetchDetail, got {other:?}"),
        }
        assert_eq!(state.mode, Mode::Selection);
        assert!(state.selection.current().is_some());
    }

    #[test]
    fn test_enter_selection_without_results() {
        let mut state = create_test_state();

        assert_eq!(state.update(Message::EnterSelection), Command::None);
        assert_eq!(state.mode, Mode::Search);
    }

    #[test]
    fn test_confirm_after_detail_hands_off() {
        let mut state = create_test_state();
        let photo = summary("1");
        state.search.query = "moon".to_string();
        let request = expect_page_request(state.update(Message::SearchRequested));
        state.update(Message::PageLoaded(PageResponse {
            session: request.session,
            page: 1,
            result: Ok(page(vec![photo.clone()], 1, 1)),
        }));

        let Command::FetchDetail(detail_request) = state.update(Message::EnterSelection) else {
            panic!("Expected FetchDetail");
        };

        // Too early
        let command = state.update(Message::ConfirmSelection);
        assert_eq!(command, Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
        assert_eq!(
            state.ui.message,
            Some("Image details have not loaded yet".to_string())
        );

        state.update(Message::DetailLoaded(DetailResponse {
            selection: detail_request.selection,
            result: Ok(detail_for(&photo)),
        }));

        match state.update(Message::ConfirmSelection) {
            Command::Handoff(payload) => {
                assert_eq!(
                    payload.download_url,
                    "https://farm66.static.flickr.com/65535/1_orig1_o.jpg"
                );
                assert_eq!(payload.title, "Photo 1");
            }
            other => panic!("Expected Handoff, got {other:?}"),
        }
    }

    #[test]
    fn test_confirm_refused_for_incompatible_host() {
        let mut state = AppState::new(HostStatus::Incompatible);
        assert!(!state.can_hand_off());
        let request = search(&mut state, "moon");
        deliver(&mut state, &request, 1, 1);
        let Command::FetchDetail(detail_request) = state.update(Message::EnterSelection) else {
            panic!("Expected FetchDetail");
        };
        state.update(Message::DetailLoaded(DetailResponse {
            selection: detail_request.selection,
            result: Ok(detail_for(&summary("p1-0"))),
        }));

        let command = state.update(Message::ConfirmSelection);

        assert_eq!(command, Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
        assert_eq!(state.ui.message.as_deref(), Some(HANDOFF_UNAVAILABLE));
        // The user can still go back or cancel
        assert!(state.selection.current().unwrap().can_confirm());
    }

    #[test]
    fn test_exit_selection_drops_late_detail() {
        let mut state = create_test_state();
        let request = search(&mut state, "moon");
        deliver(&mut state, &request, 2, 1);

        let Command::FetchDetail(first) = state.update(Message::EnterSelection) else {
            panic!("Expected FetchDetail");
        };
        state.update(Message::ExitSelection);
        assert_eq!(state.mode, Mode::Search);
        assert!(state.selection.current().is_none());

        state.update(Message::SelectResult(1));
        let Command::FetchDetail(second) = state.update(Message::EnterSelection) else {
            panic!("Expected FetchDetail");
        };

        state.update(Message::DetailLoaded(DetailResponse {
            selection: first.selection,
            result: Ok(detail_for(&summary("p1-0"))),
        }));

        let selection = state.selection.current().unwrap();
        assert_eq!(selection.id(), second.selection);
        assert!(!selection.can_confirm());
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let mut state = create_test_state();
        state.mode = Mode::Selection;

        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Help);
        state.update(Message::ShowHelp);
        assert_eq!(state.ui.previous_mode, Mode::Selection);

        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::Selection);
    }

    #[test]
    fn test_cancel_and_close() {
        let mut state = create_test_state();
        let request = search(&mut state, "moon");
        deliver(&mut state, &request, 1, 1);
        state.update(Message::EnterSelection);

        assert_eq!(state.update(Message::CancelAndClose), Command::Close);
        assert!(state.selection.current().is_none());
    }
}
