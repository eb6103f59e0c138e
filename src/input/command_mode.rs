use std::path::PathBuf;

use crossterm::event::KeyCode;
use tracing::{info, warn};

use crate::app::{AppState, Mode};
use crate::calendar::{CalendarCursor, month_index};
use crate::ui::{HtmlPage, MountPoints, theme::Theme};

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Month(u32),
    Goto(CalendarCursor),
    Theme(String),
    Export(PathBuf),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "month" | "m" => {
            if parts.len() < 2 {
                Command::Error("month requires a month number or name".to_string())
            } else if let Some(month) = month_index(parts[1]) {
                Command::Month(month)
            } else {
                Command::Error(format!("Invalid month: {}", parts[1]))
            }
        }
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a YYYY-MM argument".to_string())
            } else {
                match parts[1].parse::<CalendarCursor>() {
                    Ok(cursor) => Command::Goto(cursor),
                    Err(e) => Command::Error(e),
                }
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        "export" => {
            if parts.len() < 2 {
                Command::Error("export requires a file path".to_string())
            } else {
                Command::Export(PathBuf::from(parts[1..].join(" ")))
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Handles a key while in command mode. Returns `true` when the app should quit.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Esc => {
            leave_command_mode(state);
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                leave_command_mode(state);
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            leave_command_mode(state);
            execute(command, state)
        }
        _ => false,
    }
}

fn leave_command_mode(state: &mut AppState) {
    state.mode = Mode::Normal;
    state.command_buffer.clear();
}

pub fn execute(command: Command, state: &mut AppState) -> bool {
    match command {
        Command::Quit => return true,
        Command::Help => {
            state.show_help = true;
            state.help_scroll = 0;
        }
        Command::Month(month) => state.select_month(month),
        Command::Goto(cursor) => state.goto(cursor),
        Command::Theme(name) => match Theme::get_by_name(&name) {
            Some(theme) => {
                state.set_info(format!("Theme set to {}", theme.name));
                state.theme = theme;
            }
            None => state.set_error(format!(
                "Unknown theme '{}'. Available: {}",
                name,
                Theme::available_themes().join(", ")
            )),
        },
        Command::Export(path) => export_page(&path, state),
        Command::Error(message) => state.set_error(message),
    }
    false
}

fn export_page(path: &std::path::Path, state: &mut AppState) {
    let mut page = HtmlPage::complete();
    page.sync_month_selector(state.cursor().month());
    state.calendar.render(&mut page);

    match std::fs::write(path, page.document().into_string()) {
        Ok(()) => {
            info!(path = %path.display(), cursor = %state.cursor(), "exported calendar page");
            state.set_info(format!("Exported {} to {}", state.screen.title, path.display()));
        }
        Err(e) => {
            warn!(path = %path.display(), "export failed: {}", e);
            state.set_error(format!("Export failed: {}", e));
        }
    }
}
