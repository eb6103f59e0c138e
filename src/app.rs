use crate::calendar::{CalendarCursor, HolidayTable};
use crate::ui::{
    CalendarView, GridTarget, Legend, LegendTarget, MonthLayout, MountPoints,
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridPane {
    pub layout: Option<MonthLayout>,
}

impl GridTarget for GridPane {
    fn show_grid(&mut self, layout: &MonthLayout) {
        self.layout = Some(layout.clone());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendPane {
    pub legend: Option<Legend>,
}

impl LegendTarget for LegendPane {
    fn show_legend(&mut self, legend: &Legend) {
        self.legend = Some(legend.clone());
    }
}

/// Terminal mount points. Every target is always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub month_selector: u32,
    pub title: String,
    pub grid: GridPane,
    pub legend: LegendPane,
}

impl MountPoints for Screen {
    fn sync_month_selector(&mut self, month: u32) {
        self.month_selector = month;
    }

    fn title(&mut self) -> Option<&mut String> {
        Some(&mut self.title)
    }

    fn grid(&mut self) -> Option<&mut dyn GridTarget> {
        Some(&mut self.grid)
    }

    fn legend(&mut self) -> Option<&mut dyn LegendTarget> {
        Some(&mut self.legend)
    }
}

pub struct AppState {
    pub mode: Mode,
    pub calendar: CalendarView,
    pub screen: Screen,
    pub command_buffer: String,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
}

impl AppState {
    pub fn new(calendar: CalendarView) -> Self {
        let mut state = Self {
            mode: Mode::Normal,
            calendar,
            screen: Screen::default(),
            command_buffer: String::new(),
            status: None,
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
        };
        state.calendar.initialize(&mut state.screen);
        state
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.calendar.cursor()
    }

    pub fn holidays(&self) -> &HolidayTable {
        self.calendar.holidays()
    }

    pub fn layout(&self) -> Option<&MonthLayout> {
        self.screen.grid.layout.as_ref()
    }

    /// Re-renders the current month so the today marker follows the clock.
    pub fn refresh(&mut self) {
        self.calendar.render(&mut self.screen);
    }

    pub fn prev_month(&mut self) {
        self.calendar.on_prev(&mut self.screen);
    }

    pub fn next_month(&mut self) {
        self.calendar.on_next(&mut self.screen);
    }

    pub fn select_month(&mut self, month: u32) {
        self.calendar.on_month_select(month, &mut self.screen);
    }

    pub fn jump_to_today(&mut self) {
        self.calendar.on_today(&mut self.screen);
    }

    pub fn goto(&mut self, cursor: CalendarCursor) {
        self.calendar.show(cursor, &mut self.screen);
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Error(message.into()));
    }
}

#[cfg(test)]
pub(crate) fn test_state(year: i32, month: u32, day: u32) -> AppState {
    use crate::calendar::FixedClock;
    let today = chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap();
    AppState::new(CalendarView::with_clock(HolidayTable::builtin(), Box::new(FixedClock(today))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_in_normal_mode() {
        let app = test_state(2025, 1, 1);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.show_help);
    }

    #[test]
    fn new_app_renders_current_month() {
        let app = test_state(2025, 4, 18);

        assert_eq!(app.cursor(), CalendarCursor::new(2025, 3));
        assert_eq!(app.screen.month_selector, 3);
        assert_eq!(app.screen.title, "Abril 2025");
        let layout = app.layout().unwrap();
        assert_eq!(layout.holiday_days(), vec![18, 20, 21]);
        assert_eq!(app.screen.legend.legend.as_ref().map(Legend::row_count), Some(3));
    }

    #[test]
    fn navigation_updates_screen() {
        let mut app = test_state(2025, 1, 1);

        app.prev_month();
        assert_eq!(app.screen.title, "Dezembro 2024");
        assert_eq!(app.screen.legend.legend, Some(Legend::NoHolidays));

        app.next_month();
        app.next_month();
        assert_eq!(app.screen.title, "Fevereiro 2025");
        assert_eq!(app.screen.month_selector, 1);
    }

    #[test]
    fn select_month_keeps_year() {
        let mut app = test_state(2025, 1, 1);
        app.goto(CalendarCursor::new(2030, 0));

        app.select_month(8);

        assert_eq!(app.cursor(), CalendarCursor::new(2030, 8));
    }

    #[test]
    fn refresh_keeps_screen_stable() {
        let mut app = test_state(2025, 6, 19);
        let before = app.screen.clone();

        app.refresh();

        assert_eq!(app.screen, before);
    }
}
