use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::calendar::MONTH_NAMES;
use crate::ui::month_view::{Legend, MonthLayout, NO_HOLIDAYS_LABEL};
use crate::ui::mount::{GridTarget, LegendTarget, MountPoints};

pub fn grid_markup(layout: &MonthLayout) -> Markup {
    html! {
        @for _ in 0..layout.placeholders {
            div.calendar-day.empty {}
        }
        @for cell in &layout.days {
            @let accent = cell.holiday.as_ref().map(|h| format!("border-left: 4px solid {}", h.color_tag));
            div.calendar-day.today[cell.is_today].holiday[cell.is_holiday()] style=[accent] title=(cell.title()) {
                (cell.day)
            }
        }
    }
}

pub fn legend_markup(legend: &Legend) -> Markup {
    html! {
        @match legend {
            Legend::NoHolidays => {
                div.legend-item-cal { span { (NO_HOLIDAYS_LABEL) } }
            }
            Legend::Entries(entries) => {
                @for entry in entries {
                    div.legend-item-cal {
                        div.legend-dot style={ "background-color: " (entry.color_tag) ";" } {}
                        span { (entry.day) " - " (entry.name) }
                    }
                }
            }
        }
    }
}

/// A container element whose inner HTML the view replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub inner_html: String,
}

impl GridTarget for Container {
    fn show_grid(&mut self, layout: &MonthLayout) {
        self.inner_html = grid_markup(layout).into_string();
    }
}

impl LegendTarget for Container {
    fn show_legend(&mut self, legend: &Legend) {
        self.inner_html = legend_markup(legend).into_string();
    }
}

/// Portal page with the calendar mount points. Absent elements are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlPage {
    pub month_selector: Option<u32>,
    pub title: Option<String>,
    pub grid: Option<Container>,
    pub legend: Option<Container>,
}

impl HtmlPage {
    pub fn complete() -> Self {
        Self {
            month_selector: Some(0),
            title: Some(String::new()),
            grid: Some(Container::default()),
            legend: Some(Container::default()),
        }
    }

    pub fn document(&self) -> Markup {
        let selected = self.month_selector.unwrap_or(0);
        let title = self.title.as_deref().unwrap_or("");
        let grid = self.grid.as_ref().map(|c| c.inner_html.as_str()).unwrap_or("");
        let legend = self.legend.as_ref().map(|c| c.inner_html.as_str()).unwrap_or("");

        html! {
            (DOCTYPE)
            html lang="pt-BR" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { "Calendário - " (title) }
                }
                body {
                    div.calendar-header {
                        button #prevMonth type="button" { "‹" }
                        h2 #calendarMonthYear { (title) }
                        button #nextMonth type="button" { "›" }
                        select #monthSelector {
                            @for (index, name) in MONTH_NAMES.iter().enumerate() {
                                option value=(index) selected[index as u32 == selected] { (name) }
                            }
                        }
                    }
                    div.calendar-weekdays {
                        @for weekday in ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"] {
                            div.weekday { (weekday) }
                        }
                    }
                    div.calendar-grid #calendarGrid { (PreEscaped(grid)) }
                    div.holiday-legends #holidayLegends { (PreEscaped(legend)) }
                }
            }
        }
    }
}

impl MountPoints for HtmlPage {
    fn sync_month_selector(&mut self, month: u32) {
        if let Some(selector) = self.month_selector.as_mut() {
            *selector = month;
        }
    }

    fn title(&mut self) -> Option<&mut String> {
        self.title.as_mut()
    }

    fn grid(&mut self) -> Option<&mut dyn GridTarget> {
        self.grid.as_mut().map(|c| c as &mut dyn GridTarget)
    }

    fn legend(&mut self) -> Option<&mut dyn LegendTarget> {
        self.legend.as_mut().map(|c| c as &mut dyn LegendTarget)
    }
}
