//! Logger initialization.
//!
//! Logs go to stderr so exports written to stdout stay clean.

use std::io::Write;

use colored::{Color, Colorize};
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Third-party modules held at `warn` regardless of the requested level.
const QUIET_MODULES: [&str; 2] = ["calamine", "zip"];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and `level` overrides it, so `--log-level` always
/// wins over the environment.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug site_tracker reports list
/// site_tracker --log-format json reports import sheet.xlsx --yes
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(std::io::IsTerminal::is_terminal(&std::io::stderr()));

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in QUIET_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.filter_module("site_tracker", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(
                chrono::Utc::now().timestamp_millis(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let line = plain_line(record.level(), record.target(), &record.args().to_string());
            writeln!(buf, "{}", line)
        }),
    };

    builder.try_init().map_err(InitializationError::from)
}

fn level_marker(level: Level) -> (&'static str, Color) {
    match level {
        Level::Error => ("❌", Color::Red),
        Level::Warn => ("⚠️", Color::Yellow),
        Level::Info => ("✔️", Color::Green),
        Level::Debug => ("🔍", Color::Blue),
        Level::Trace => ("🔬", Color::Magenta),
    }
}

fn plain_line(level: Level, target: &str, msg: &str) -> String {
    let (emoji, color) = level_marker(level);
    format!(
        "{} {} [{}] {}",
        emoji,
        target.cyan(),
        level.as_str().color(color),
        msg
    )
}

fn json_line(ts: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}
