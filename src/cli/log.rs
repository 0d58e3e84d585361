//! Logging setup.
//!
//! General verbosity comes from `-v` (repeatable). Components can be given
//! their own level with `-l COMPONENT[=LEVEL]`, where COMPONENT is a module
//! path inside this crate (`yaml::scan`, `yaml.resolver`, `cli`). A
//! component without a level logs everything.

use colored::*;
use log::{Level, LevelFilter};
use regex::Regex;
use std::str::FromStr;

const COMPONENT_PATTERN: &str = r"^(?P<component>[A-Za-z_][A-Za-z0-9_.:]*)(?:=(?P<level>[A-Za-z]+))?$";

fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".bright_red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".bright_black(),
    }
}

fn timestamp() -> String {
    let format = time::macros::format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    );
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .format(format)
        .unwrap_or_default()
}

/// Parse a `COMPONENT[=LEVEL]` spec into a log target and its level.
fn parse_component(spec: &str, pattern: &Regex) -> Result<(String, LevelFilter), String> {
    let caps = pattern
        .captures(spec)
        .ok_or_else(|| format!("Invalid log component '{}'", spec))?;
    let component = caps["component"].replace('.', "::");
    let level = match caps.name("level") {
        Some(level) => LevelFilter::from_str(level.as_str())
            .map_err(|_| format!("Invalid log level '{}' in '{}'", level.as_str(), spec))?,
        None => LevelFilter::Trace,
    };
    let krate = env!("CARGO_CRATE_NAME");
    let target = if component == krate || component.starts_with(&format!("{}::", krate)) {
        component
    } else {
        format!("{}::{}", krate, component)
    };
    Ok((target, level))
}

pub fn setup(verbose: u8, components: Vec<&str>, log_time: bool) -> Result<(), String> {
    let pattern = Regex::new(COMPONENT_PATTERN).map_err(|e| e.to_string())?;

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let prefix = if log_time {
                format!("{} ", timestamp().as_str().bright_black())
            } else {
                String::new()
            };
            out.finish(format_args!(
                "{}{} [{}] {}",
                prefix,
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .level(verbosity_level(verbose));

    for spec in components {
        let (target, level) = parse_component(spec, &pattern)?;
        dispatch = dispatch.level_for(target, level);
    }

    dispatch
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| format!("Cannot set up logging: {}", e))
}
