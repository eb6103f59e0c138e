use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{CalendarCursor, Holiday, HolidayTable, holiday_key};

pub const NO_HOLIDAYS_LABEL: &str = "Nenhum feriado neste mês";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLayout {
    pub cursor: CalendarCursor,
    pub title: String,
    pub placeholders: u32,
    pub days: Vec<DayCell>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub is_today: bool,
    pub holiday: Option<Holiday>,
}

impl DayCell {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    /// Tooltip text: the holiday name, or empty.
    pub fn title(&self) -> &str {
        self.holiday.as_ref().map(|h| h.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub day: u32,
    pub name: String,
    pub color_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum Legend {
    NoHolidays,
    Entries(Vec<LegendEntry>),
}

impl Legend {
    /// Number of rendered legend rows. The placeholder counts as one.
    pub fn row_count(&self) -> usize {
        match self {
            Legend::NoHolidays => 1,
            Legend::Entries(entries) => entries.len(),
        }
    }
}

/// Weekday of the first of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(cursor: CalendarCursor) -> u32 {
    cursor
        .first_day()
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn days_in_month(cursor: CalendarCursor) -> u32 {
    if cursor.first_day().is_none() {
        return 0;
    }
    let next = cursor.next();
    NaiveDate::from_ymd_opt(next.year(), next.month() + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|last| last.day())
        // only December of the last representable year has no successor month
        .unwrap_or(31)
}

pub fn calculate_layout(cursor: CalendarCursor, holidays: &HolidayTable, today: NaiveDate) -> MonthLayout {
    let year = cursor.year();
    let month = cursor.month();

    let days = (1..=days_in_month(cursor))
        .map(|day| {
            let key = holiday_key(year, month, day);
            DayCell {
                day,
                is_today: today.year() == year && today.month0() == month && today.day() == day,
                holiday: holidays.get(&key).cloned(),
            }
        })
        .collect::<Vec<_>>();

    let entries: Vec<LegendEntry> = holidays
        .in_month(cursor)
        .into_iter()
        .map(|holiday| LegendEntry {
            day: holiday.date.day(),
            name: holiday.name.clone(),
            color_tag: holiday.color_tag.clone(),
        })
        .collect();

    let legend = if entries.is_empty() {
        Legend::NoHolidays
    } else {
        Legend::Entries(entries)
    };

    MonthLayout {
        cursor,
        title: cursor.title(),
        placeholders: if days.is_empty() { 0 } else { first_weekday(cursor) },
        days,
        legend,
    }
}

impl MonthLayout {
    pub fn cell_count(&self) -> usize {
        self.placeholders as usize + self.days.len()
    }

    /// Rows of seven, `None` for leading placeholders. The last row is not padded.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let cells: Vec<Option<&DayCell>> = std::iter::repeat(None)
            .take(self.placeholders as usize)
            .chain(self.days.iter().map(Some))
            .collect();
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }

    pub fn holiday_days(&self) -> Vec<u32> {
        self.days.iter().filter(|cell| cell.is_holiday()).map(|cell| cell.day).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn layout(year: i32, month: u32) -> MonthLayout {
        calculate_layout(CalendarCursor::new(year, month), &HolidayTable::builtin(), date(2025, 6, 15))
    }

    #[test]
    fn january_2025_starts_on_wednesday() {
        let layout = layout(2025, 0);

        assert_eq!(layout.placeholders, 3);
        assert_eq!(layout.days.len(), 31);
        assert_eq!(layout.title, "Janeiro 2025");
    }

    #[test]
    fn january_2025_holidays_are_marked() {
        let layout = layout(2025, 0);

        assert_eq!(layout.holiday_days(), vec![1, 25]);
        assert_eq!(layout.days[0].title(), "Ano Novo");
        assert_eq!(layout.days[24].title(), "Aniversário de São Paulo");
        assert_eq!(layout.days[24].holiday.as_ref().unwrap().color_tag, "#5DADE2");
        assert!(!layout.days[1].is_holiday());
        assert_eq!(layout.days[1].title(), "");
    }

    #[test]
    fn january_2025_legend_lists_both_holidays_in_order() {
        let layout = layout(2025, 0);

        assert_eq!(
            layout.legend,
            Legend::Entries(vec![
                LegendEntry { day: 1, name: "Ano Novo".to_string(), color_tag: "#003366".to_string() },
                LegendEntry { day: 25, name: "Aniversário de São Paulo".to_string(), color_tag: "#5DADE2".to_string() },
            ])
        );
    }

    #[test]
    fn february_2025_has_carnaval() {
        let layout = layout(2025, 1);

        assert_eq!(layout.days.len(), 28);
        assert_eq!(layout.holiday_days(), vec![12]);
        assert_eq!(layout.days[11].title(), "Início do Carnaval");
        assert_eq!(layout.legend.row_count(), 1);
        assert!(matches!(layout.legend, Legend::Entries(ref e) if e.len() == 1));
    }

    #[test]
    fn month_without_holidays_has_placeholder_legend() {
        let layout = layout(2025, 7);

        assert_eq!(layout.legend, Legend::NoHolidays);
        assert_eq!(layout.legend.row_count(), 1);
        assert!(layout.holiday_days().is_empty());
    }

    #[test]
    fn holidays_of_other_years_are_not_marked() {
        let layout = layout(2026, 0);

        assert!(layout.holiday_days().is_empty());
        assert_eq!(layout.legend, Legend::NoHolidays);
    }

    #[test]
    fn today_is_marked_once() {
        let today = date(2025, 1, 25);
        let layout = calculate_layout(CalendarCursor::new(2025, 0), &HolidayTable::builtin(), today);

        let marked: Vec<u32> = layout.days.iter().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(marked, vec![25]);
    }

    #[test]
    fn today_in_another_month_marks_nothing() {
        let today = date(2025, 2, 1);
        let layout = calculate_layout(CalendarCursor::new(2025, 0), &HolidayTable::builtin(), today);

        assert!(layout.days.iter().all(|c| !c.is_today));
    }

    #[test]
    fn february_in_leap_year_has_29_days() {
        assert_eq!(days_in_month(CalendarCursor::new(2024, 1)), 29);
        assert_eq!(days_in_month(CalendarCursor::new(1900, 1)), 28);
        assert_eq!(days_in_month(CalendarCursor::new(2000, 1)), 29);
    }

    #[test]
    fn weeks_are_not_padded_at_the_end() {
        let layout = layout(2025, 0);
        let weeks = layout.weeks();

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].iter().filter(|c| c.is_none()).count(), 3);
        assert_eq!(weeks[0][3].map(|c| c.day), Some(1));
        assert_eq!(weeks[4].len(), 34 - 28);
    }

    #[test]
    fn layout_serializes_to_json() {
        let json = serde_json::to_value(layout(2025, 1)).unwrap();

        assert_eq!(json["cursor"]["month"], 1);
        assert_eq!(json["placeholders"], 6);
        assert_eq!(json["legend"]["kind"], "entries");
        assert_eq!(json["days"][11]["holiday"]["name"], "Início do Carnaval");
    }

    proptest! {
        #[test]
        fn grid_has_placeholders_then_every_day(year in 1600i32..2400, month in 0u32..12) {
            let cursor = CalendarCursor::new(year, month);
            let layout = calculate_layout(cursor, &HolidayTable::builtin(), date(2025, 1, 1));

            let first = cursor.first_day().unwrap();
            prop_assert_eq!(layout.placeholders, first.weekday().num_days_from_sunday());
            prop_assert_eq!(layout.days.len() as u32, days_in_month(cursor));
            prop_assert!((28..=31).contains(&layout.days.len()));
            let numbers: Vec<u32> = layout.days.iter().map(|c| c.day).collect();
            prop_assert_eq!(numbers, (1..=days_in_month(cursor)).collect::<Vec<_>>());
        }

        #[test]
        fn layout_is_idempotent(year in 1600i32..2400, month in 0u32..12) {
            let cursor = CalendarCursor::new(year, month);
            let table = HolidayTable::builtin();
            let today = date(2025, 4, 21);

            let first = calculate_layout(cursor, &table, today);
            let second = calculate_layout(cursor, &table, today);

            prop_assert_eq!(first.cell_count(), second.cell_count());
            prop_assert_eq!(first, second);
        }
    }
}
