use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// The (year, month) pair the calendar is showing. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    /// Months past December are clamped to December.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month: month.min(11) }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn with_month(self, month: u32) -> Self {
        Self::new(self.year, month)
    }

    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self { year: self.year.saturating_sub(1), month: 11 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 11 {
            Self { year: self.year.saturating_add(1), month: 0 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// `None` when the year lies outside the range chrono can represent.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

impl fmt::Display for CalendarCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

impl FromStr for CalendarCursor {
    type Err = String;

    /// Parses `YYYY-MM` with a one-based month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{}'. Use YYYY-MM.", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self::new(year, month - 1))
    }
}

/// Resolves a one-based month number or a Portuguese month name to a
/// zero-based month index. Names match case-insensitively.
pub fn month_index(input: &str) -> Option<u32> {
    let input = input.trim();
    if let Ok(number) = input.parse::<u32>() {
        return (1..=12).contains(&number).then(|| number - 1);
    }
    let lowered = input.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase() == lowered)
        .map(|index| index as u32)
}
