//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <path>`, or `$XDG_CONFIG_HOME/muninflux/muninflux.toml`
//! 3. Environment variables: `MUNINFLUX_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::{ApplicationError, ApplicationResult};

/// Unified configuration for muninflux.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Account the import and fetch delegates run under
    pub service_user: String,
    /// External tool the subcommands are forwarded to
    pub program: String,
    /// Command string registered in the crontab
    /// (default: resolved path of this binary plus " fetch")
    pub schedule_command: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_user: "munin".into(),
            program: "munin-influxdb".into(),
            schedule_command: None,
        }
    }
}

/// Raw settings for intermediate parsing (all fields optional so a partial
/// file only overrides what it names).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub service_user: Option<String>,
    pub program: Option<String>,
    pub schedule_command: Option<String>,
}

/// Get the XDG config directory for muninflux.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "muninflux").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("muninflux.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            service_user: overlay
                .service_user
                .clone()
                .unwrap_or_else(|| self.service_user.clone()),
            program: overlay
                .program
                .clone()
                .unwrap_or_else(|| self.program.clone()),
            schedule_command: overlay
                .schedule_command
                .clone()
                .or_else(|| self.schedule_command.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// An explicitly named `config_file` must exist and parse; the global
    /// config file is optional and skipped silently when absent.
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(path) = global_config_path() {
                    if path.exists() {
                        let raw = load_raw_settings(&path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply MUNINFLUX_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let builder = Config::builder().add_source(Environment::with_prefix("MUNINFLUX"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("service_user") {
            settings.service_user = val;
        }
        if let Ok(val) = config.get_string("program") {
            settings.program = val;
        }
        if let Ok(val) = config.get_string("schedule_command") {
            settings.schedule_command = Some(val);
        }

        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings.service_user, "munin");
        assert_eq!(settings.program, "munin-influxdb");
        assert!(settings.schedule_command.is_none());
    }

    #[test]
    fn given_partial_overlay_when_merged_then_keeps_unnamed_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            service_user: Some("nobody".into()),
            program: None,
            schedule_command: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.service_user, "nobody");
        assert_eq!(merged.program, "munin-influxdb");
    }
}
