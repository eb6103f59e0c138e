use anyhow::Context;
use tracing_subscriber::EnvFilter;

use nexus_cal::storage::config::Config;

mod cli;
use cli::{CliMode, USAGE, parse_cli_mode, render_html, render_json, resolve_holidays};
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let options = match parse_cli_mode() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if options.mode == CliMode::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::load_or_create().context("loading configuration")?;
    let holidays = resolve_holidays(&options, &config)?;

    match options.mode {
        CliMode::Html => print!("{}", render_html(holidays, options.month)),
        CliMode::Json => println!("{}", render_json(holidays, options.month)?),
        CliMode::Interactive => run_tui(&config, holidays, options.month)?,
        CliMode::Help => unreachable!("handled above"),
    }

    Ok(())
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "nexus-cal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("nexus-cal started");
}
