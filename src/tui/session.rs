use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use nexus_cal::{
    app::{AppState, Mode},
    calendar::{CalendarCursor, HolidayTable},
    input::{command_mode, normal_mode},
    storage::config::Config,
    ui::{CalendarView, theme::Theme},
};
use crate::tui::presentation::ui;

pub fn run_tui(config: &Config, holidays: HolidayTable, start: Option<CalendarCursor>) -> Result<(), io::Error> {
    let theme = Theme::get_by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme '{}', using default", config.ui.theme);
        Theme::default()
    });

    let calendar = CalendarView::new(holidays);
    let mut app = AppState::new(calendar).with_theme(theme);
    if let Some(cursor) = start {
        app.goto(cursor);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("TUI exited with error: {}", err);
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        app.refresh();
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            _ => normal_mode::handle_key(key.code, app),
                        }
                    }
                }
                Mode::Command => {
                    if command_mode::handle_key(key.code, app) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
