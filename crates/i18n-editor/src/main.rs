//! i18n Editor - desktop editor for translation resource folders.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update,
//! View). The command menu is the platform-neutral `i18n-menu` crate; this
//! binary renders it and carries out what it requests.

mod app;
mod cli;
mod logging;
mod menu;
mod message;
mod settings;
mod shell;
mod theme;

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use iced::Size;
use iced::window;
use tracing::level_filters::LevelFilter;

use crate::app::App;
use crate::cli::Cli;
use crate::logging::{LogConfig, init_logging};
use crate::settings::{Settings, SettingsError};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let config_missing = !config_path.exists();
    let loaded = Settings::load_from(&config_path);
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&log_config(&cli, &settings)).context("failed to initialize logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting i18n Editor");

    report_settings(&config_path, loaded.as_ref().err());
    if config_missing && cli.config.is_none() {
        write_default_settings(&config_path, &settings);
    }

    let window_settings = window::Settings {
        size: Size::new(settings.window.width, settings.window.height),
        min_size: Some(Size::new(480.0, 320.0)),
        // Close requests go through the menu's close path.
        exit_on_close_request: false,
        ..Default::default()
    };

    let dir = cli.dir;
    iced::application(
        move || App::new(&settings, dir.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .subscription(App::subscription)
    .window(window_settings)
    .run()
    .map_err(|e| anyhow!("event loop failed: {e}"))
}

/// Build logging configuration.
///
/// Precedence for the level: `--log-level`, then `-v`/`-q`, then the
/// settings file. `RUST_LOG` is honored only when neither flag is given.
fn log_config(cli: &Cli, settings: &Settings) -> LogConfig {
    let flags_given = cli.verbosity.is_present() || cli.log_level.is_some();

    let level_filter = if let Some(level) = cli.log_level {
        LevelFilter::from_level(level.to_level())
    } else if cli.verbosity.is_present() {
        cli.verbosity.tracing_level_filter()
    } else {
        settings
            .logging
            .level_filter()
            .unwrap_or(LevelFilter::INFO)
    };

    LogConfig {
        level_filter,
        use_env_filter: !flags_given,
        with_ansi: cli.log_file.is_none() && io::stderr().is_terminal(),
        format: cli
            .log_format
            .map_or(settings.logging.format, Into::into),
        log_file: cli.log_file.clone(),
    }
}

/// Settings problems never stop the editor: log them and run on defaults.
fn report_settings(path: &Path, error: Option<&SettingsError>) {
    match error {
        None => tracing::debug!(path = %path.display(), "Settings loaded"),
        Some(e) => tracing::warn!(error = %e, "Using default settings"),
    }
}

fn write_default_settings(path: &Path, settings: &Settings) {
    match settings.save_to(path) {
        Ok(()) => tracing::info!(path = %path.display(), "Wrote default settings"),
        Err(e) => tracing::warn!(error = %e, "Could not write default settings"),
    }
}
