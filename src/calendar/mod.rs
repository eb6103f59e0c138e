pub mod clock;
pub mod cursor;
pub mod holiday;

pub use clock::{Clock, FixedClock, LocalClock};
pub use cursor::{CalendarCursor, MONTH_NAMES, month_index};
pub use holiday::{Holiday, HolidayError, HolidayTable, holiday_key};
