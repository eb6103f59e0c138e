use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Char('{') | KeyCode::Left => state.prev_month(),
        KeyCode::Char('l') | KeyCode::Char('}') | KeyCode::Right => state.next_month(),
        KeyCode::Char('t') => state.jump_to_today(),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => show_help(state),
        KeyCode::Char(c) => {
            if let Some(month) = month_for_key(c) {
                state.select_month(month);
            }
        }
        _ => {}
    }
}

/// `1`..`9` select January..September, `0` October, `-` November, `=` December.
fn month_for_key(c: char) -> Option<u32> {
    match c {
        '1'..='9' => c.to_digit(10).map(|d| d - 1),
        '0' => Some(9),
        '-' => Some(10),
        '=' => Some(11),
        _ => None,
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
    state.status = None;
}

fn show_help(state: &mut AppState) {
    state.show_help = true;
    state.help_scroll = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_state;
    use crate::calendar::CalendarCursor;

    #[test]
    fn h_moves_to_previous_month() {
        let mut state = test_state(2025, 1, 15);
        handle_key(KeyCode::Char('h'), &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2024, 11));
    }

    #[test]
    fn arrow_keys_navigate_months() {
        let mut state = test_state(2025, 6, 1);
        handle_key(KeyCode::Right, &mut state);
        handle_key(KeyCode::Right, &mut state);
        handle_key(KeyCode::Left, &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2025, 6));
    }

    #[test]
    fn braces_navigate_months() {
        let mut state = test_state(2025, 12, 1);
        handle_key(KeyCode::Char('}'), &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2026, 0));
        handle_key(KeyCode::Char('{'), &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2025, 11));
    }

    #[test]
    fn t_jumps_back_to_today() {
        let mut state = test_state(2025, 3, 4);
        handle_key(KeyCode::Char('l'), &mut state);
        handle_key(KeyCode::Char('l'), &mut state);
        handle_key(KeyCode::Char('t'), &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2025, 2));
    }

    #[test]
    fn digit_keys_select_month() {
        let mut state = test_state(2025, 3, 4);

        handle_key(KeyCode::Char('2'), &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2025, 1));

        handle_key(KeyCode::Char('0'), &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2025, 9));

        handle_key(KeyCode::Char('='), &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2025, 11));
        assert_eq!(state.screen.month_selector, 11);
    }

    #[test]
    fn colon_enters_command_mode() {
        let mut state = test_state(2025, 1, 1);
        handle_key(KeyCode::Char(':'), &mut state);
        assert_eq!(state.mode, Mode::Command);
        assert_eq!(state.command_buffer, ":");
    }

    #[test]
    fn question_mark_opens_help() {
        let mut state = test_state(2025, 1, 1);
        handle_key(KeyCode::Char('?'), &mut state);
        assert!(state.show_help);
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let mut state = test_state(2025, 1, 1);
        handle_key(KeyCode::Char('z'), &mut state);
        handle_key(KeyCode::Tab, &mut state);
        assert_eq!(state.cursor(), CalendarCursor::new(2025, 0));
        assert_eq!(state.mode, Mode::Normal);
    }
}
