//! Picker library exports: the selection overlay, its host state, and the TUI.

use clap::ValueEnum;
use simplelog::LevelFilter;

use crate::core::state::Choice;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the confirmed choice is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Just the chosen value
    #[default]
    Plain,
    /// `{"menu": ..., "value": ...}`
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a choice for stdout.
pub fn format_choice(choice: &Choice, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(choice.value.clone()),
        OutputFormat::Json => serde_json::to_string(choice),
    }
}

/// Split piped input into options, skipping blank lines.
pub fn parse_options(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice() -> Choice {
        Choice {
            menu: "Tools".to_string(),
            value: "saw".to_string(),
        }
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_choice(&choice(), OutputFormat::Plain).unwrap(), "saw");
    }

    #[test]
    fn test_format_json() {
        let json = format_choice(&choice(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["menu"], "Tools");
        assert_eq!(value["value"], "saw");
    }

    #[test]
    fn test_parse_options_skips_blank_lines() {
        let options = parse_options("alpha\n\n  \nbeta  \r\ngamma\n");
        assert_eq!(options, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::Info);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
