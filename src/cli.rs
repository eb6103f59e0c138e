use std::{env, path::PathBuf};

use anyhow::Context;

use nexus_cal::{
    calendar::{CalendarCursor, HolidayTable},
    storage::config::Config,
    ui::{CalendarView, HtmlPage},
};

pub const USAGE: &str = "Usage: nexus-cal [--month YYYY-MM] [--html | --json] [--holidays PATH]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliMode {
    Interactive,
    Html,
    Json,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub mode: CliMode,
    pub month: Option<CalendarCursor>,
    pub holidays: Option<PathBuf>,
}

pub fn parse_cli_mode() -> Result<CliOptions, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions { mode: CliMode::Interactive, month: None, holidays: None };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" | "--json" => {
                if options.mode != CliMode::Interactive {
                    return Err("--html and --json are mutually exclusive".to_string());
                }
                options.mode = if arg == "--html" { CliMode::Html } else { CliMode::Json };
            }
            "--month" => {
                let value = args.next().ok_or("--month requires YYYY-MM")?;
                options.month = Some(value.parse()?);
            }
            "--holidays" => {
                let value = args.next().ok_or("--holidays requires a path")?;
                options.holidays = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                options.mode = CliMode::Help;
                return Ok(options);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(options)
}

/// An explicit `--holidays` file must load; the configured one falls back
/// to the built-in table.
pub fn resolve_holidays(options: &CliOptions, config: &Config) -> anyhow::Result<HolidayTable> {
    match &options.holidays {
        Some(path) => HolidayTable::load(path)
            .with_context(|| format!("loading holiday table {}", path.display())),
        None => Ok(config.holiday_table()),
    }
}

fn mounted_view(holidays: HolidayTable, month: Option<CalendarCursor>) -> (CalendarView, HtmlPage) {
    let mut view = CalendarView::new(holidays);
    let mut page = HtmlPage::complete();
    view.initialize(&mut page);
    if let Some(cursor) = month {
        view.show(cursor, &mut page);
    }
    (view, page)
}

pub fn render_html(holidays: HolidayTable, month: Option<CalendarCursor>) -> String {
    let (_, page) = mounted_view(holidays, month);
    page.document().into_string()
}

pub fn render_json(holidays: HolidayTable, month: Option<CalendarCursor>) -> anyhow::Result<String> {
    let (view, _) = mounted_view(holidays, month);
    serde_json::to_string_pretty(&view.layout()).context("serializing month layout")
}
