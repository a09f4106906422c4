//! Command-line arguments for the editor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "i18n-editor",
    version,
    about = "i18n Editor - Edit JSON and ES6 translation resources",
    long_about = "Desktop editor for translation resource folders.\n\n\
                  Opens a folder of locale bundles (JSON files or ES6 modules)."
)]
pub struct Cli {
    /// Resource folder to open at startup.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Settings file (default: settings.toml in the platform config directory).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Explicit log level (overrides -v/-q flags and the settings file).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (overrides the settings file).
    #[arg(long = "log-format", value_enum)]
    pub log_format: Option<LogFormatArg>,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn to_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dir_and_overrides() {
        let cli = Cli::try_parse_from([
            "i18n-editor",
            "/srv/locales",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.dir, Some(PathBuf::from("/srv/locales")));
        assert_eq!(cli.log_level, Some(LogLevelArg::Debug));
        assert_eq!(cli.log_format, Some(LogFormatArg::Json));
        assert!(cli.config.is_none());
    }

    #[test]
    fn everything_is_optional() {
        let cli = Cli::try_parse_from(["i18n-editor"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(cli.log_level.is_none());
    }
}
