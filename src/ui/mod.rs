pub mod calendar_view;
pub mod markup;
pub mod month_view;
pub mod mount;
pub mod theme;

pub use calendar_view::CalendarView;
pub use markup::{Container, HtmlPage};
pub use month_view::{DayCell, Legend, LegendEntry, MonthLayout};
pub use mount::{GridTarget, LegendTarget, MountPoints};
