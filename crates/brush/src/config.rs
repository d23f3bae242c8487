//! Startup configuration read from the environment.

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use std::path::PathBuf;
use theme::Appearance;

pub const LOG_VAR: &str = "BRUSH_LOG";
pub const LOG_FILE_VAR: &str = "BRUSH_LOG_FILE";
pub const THEME_VAR: &str = "BRUSH_THEME";
pub const DEBUG_VAR: &str = "BRUSH_DEBUG";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Most verbose level that gets logged.
    pub log_level: LevelFilter,
    /// Also append log lines to this file.
    pub log_file: Option<PathBuf>,
    /// Window chrome colors.
    pub appearance: Appearance,
    /// Log the whole stroke list as JSON after every change.
    pub debug_dump: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: None,
            appearance: Appearance::Light,
            debug_dump: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from a variable lookup. Unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_VAR) {
            config.log_level = value
                .trim()
                .parse()
                .with_context(|| format!("invalid {LOG_VAR} value {value:?}"))?;
        }

        if let Some(value) = lookup(LOG_FILE_VAR) {
            let value = value.trim();
            if !value.is_empty() {
                config.log_file = Some(PathBuf::from(value));
            }
        }

        if let Some(value) = lookup(THEME_VAR) {
            config.appearance = parse_appearance(&value)
                .with_context(|| format!("invalid {THEME_VAR} value {value:?}"))?;
        }

        if let Some(value) = lookup(DEBUG_VAR) {
            config.debug_dump =
                parse_flag(&value).with_context(|| format!("invalid {DEBUG_VAR} value {value:?}"))?;
        }

        Ok(config)
    }
}

fn parse_appearance(value: &str) -> Result<Appearance> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Ok(Appearance::Light),
        "dark" => Ok(Appearance::Dark),
        other => Err(anyhow!("expected `light` or `dark`, got `{other}`")),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got `{other}`")),
    }
}
