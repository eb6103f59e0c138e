use std::collections::HashMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::CalendarCursor;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("Failed to read holiday table: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse holiday table: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Holiday table is empty")]
    Empty,
    #[error("Duplicate holiday on {0}")]
    DuplicateDate(String),
    #[error("Holiday on {found} lies outside {expected}; a table covers a single year")]
    MixedYears { expected: i32, found: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "color")]
    pub color_tag: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self { date, name: name.into(), color_tag: color_tag.into() }
    }

    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Builds the `YYYY-MM-DD` lookup key for a zero-based month.
pub fn holiday_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month + 1, day)
}

#[derive(Debug, Deserialize)]
struct HolidayFile {
    #[serde(default)]
    holiday: Vec<Holiday>,
}

/// Read-only holiday set for one calendar year, keyed by ISO date string.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayTable {
    year: i32,
    by_date: HashMap<String, Holiday>,
}

const SAO_PAULO_2025: [(u32, u32, &str, &str); 15] = [
    (1, 1, "Ano Novo", "#003366"),
    (1, 25, "Aniversário de São Paulo", "#5DADE2"),
    (2, 12, "Início do Carnaval", "#FF6B9D"),
    (3, 4, "Quarta-feira de Cinzas", "#003366"),
    (4, 18, "Sexta-feira Santa", "#5DADE2"),
    (4, 20, "Páscoa", "#FF6B9D"),
    (4, 21, "Tiradentes", "#003366"),
    (5, 1, "Dia do Trabalho", "#5DADE2"),
    (6, 19, "Corpus Christi", "#FF6B9D"),
    (9, 7, "Independência do Brasil", "#003366"),
    (10, 12, "Nossa Senhora Aparecida", "#5DADE2"),
    (11, 2, "Finados", "#FF6B9D"),
    (11, 15, "Proclamação da República", "#003366"),
    (11, 20, "Consciência Negra", "#5DADE2"),
    (12, 25, "Natal", "#FF6B9D"),
];

impl HolidayTable {
    pub fn from_holidays(holidays: Vec<Holiday>) -> Result<Self, HolidayError> {
        let year = holidays.first().map(|h| h.date.year()).ok_or(HolidayError::Empty)?;

        let mut by_date = HashMap::with_capacity(holidays.len());
        for holiday in holidays {
            let key = holiday.key();
            if holiday.date.year() != year {
                return Err(HolidayError::MixedYears { expected: year, found: key });
            }
            if by_date.contains_key(&key) {
                return Err(HolidayError::DuplicateDate(key));
            }
            by_date.insert(key, holiday);
        }

        Ok(Self { year, by_date })
    }

    /// São Paulo school holidays for 2025.
    pub fn builtin() -> Self {
        let by_date = SAO_PAULO_2025
            .iter()
            .filter_map(|&(month, day, name, color)| {
                NaiveDate::from_ymd_opt(2025, month, day).map(|date| Holiday::new(date, name, color))
            })
            .map(|holiday| (holiday.key(), holiday))
            .collect();
        Self { year: 2025, by_date }
    }

    pub fn from_toml(content: &str) -> Result<Self, HolidayError> {
        let file: HolidayFile = toml::from_str(content)?;
        Self::from_holidays(file.holiday)
    }

    pub fn load(path: &Path) -> Result<Self, HolidayError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Exact-match probe on a `YYYY-MM-DD` key.
    pub fn get(&self, key: &str) -> Option<&Holiday> {
        self.by_date.get(key)
    }

    /// Holidays inside the cursor's month, ordered by day.
    pub fn in_month(&self, cursor: CalendarCursor) -> Vec<&Holiday> {
        let mut holidays: Vec<&Holiday> = self
            .by_date
            .values()
            .filter(|holiday| cursor.contains(holiday.date))
            .collect();
        holidays.sort_by_key(|holiday| holiday.date);
        holidays
    }
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::builtin()
    }
}
