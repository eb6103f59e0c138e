pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, Mode, StatusMessage};
pub use calendar::{CalendarCursor, Holiday, HolidayTable};
pub use ui::{CalendarView, HtmlPage, MonthLayout};

pub use input::{command_mode, normal_mode};
