#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::*;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        create_key_event_with_modifiers(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn assert_query_changed(msg: Option<Message>, expected: &str) {
        match msg {
            Some(Message::QueryChanged(q)) => assert_eq!(q, expected),
            other => panic!("Expected QueryChanged({expected:?}), got {other:?}"),
        }
    }

    #[test]
    fn test_character_input() {
        let mut search_bar = SearchBar::new();

        assert_query_changed(search_bar.handle_key(create_key_event(KeyCode::Char('h'))), "h");
        assert_query_changed(search_bar.handle_key(create_key_event(KeyCode::Char('i'))), "hi");

        assert_eq!(search_bar.get_query(), "hi");
        assert_eq!(search_bar.cursor_position(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("hello");

        assert_query_changed(search_bar.handle_key(create_key_event(KeyCode::Backspace)), "hell");

        // Backspace at beginning should do nothing
        search_bar.handle_key(create_key_event(KeyCode::Home));
        assert!(
            search_bar
                .handle_key(create_key_event(KeyCode::Backspace))
                .is_none()
        );
    }

    #[test]
    fn test_insert_in_middle() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("mon");
        search_bar.handle_key(create_key_event(KeyCode::Left));

        assert_query_changed(search_bar.handle_key(create_key_event(KeyCode::Char('o'))), "moon");
        assert_eq!(search_bar.cursor_position(), 3);
    }

    #[test]
    fn test_set_query_keeps_cursor_for_same_text() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("rover");
        search_bar.handle_key(create_key_event(KeyCode::Home));

        search_bar.set_query("rover");
        assert_eq!(search_bar.cursor_position(), 0);

        search_bar.set_query("Rocket");
        assert_eq!(search_bar.cursor_position(), 6);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("月面");

        assert_query_changed(search_bar.handle_key(create_key_event(KeyCode::Backspace)), "月");
        assert_query_changed(search_bar.handle_key(create_key_event(KeyCode::Char('球'))), "月球");

        search_bar.handle_key(create_key_event(KeyCode::Home));
        assert_query_changed(search_bar.handle_key(create_key_event(KeyCode::Delete)), "球");
    }

    #[test]
    fn test_delete_at_end_does_nothing() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("moon");

        assert!(
            search_bar
                .handle_key(create_key_event(KeyCode::Delete))
                .is_none()
        );
        assert!(
            search_bar
                .handle_key(create_key_event_with_modifiers(
                    KeyCode::Char('d'),
                    KeyModifiers::CONTROL
                ))
                .is_none()
        );
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("apollo moon landing");

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
        ));

        assert_query_changed(msg, "apollo moon ");
    }

    #[test]
    fn test_ctrl_u_and_ctrl_k() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("mars rover");
        for _ in 0..5 {
            search_bar.handle_key(create_key_event(KeyCode::Left));
        }

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL,
        ));
        assert_query_changed(msg, "mars ");

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        ));
        assert_query_changed(msg, "");
    }

    #[test]
    fn test_alt_word_movement() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("saturn v rocket");

        search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('b'),
            KeyModifiers::ALT,
        ));
        assert_eq!(search_bar.cursor_position(), 9);

        search_bar.handle_key(create_key_event(KeyCode::Home));
        search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('f'),
            KeyModifiers::ALT,
        ));
        assert_eq!(search_bar.cursor_position(), 7);
    }

    #[test]
    fn test_unhandled_control_keys_do_not_type() {
        let mut search_bar = SearchBar::new();

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL,
        ));

        assert!(msg.is_none());
        assert_eq!(search_bar.get_query(), "");
    }
}
