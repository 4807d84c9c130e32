//! Top-level envscan configuration with 4-layer resolution.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{GroupingSection, InventorySection};
use crate::errors::ConfigError;
use crate::tokens::split_comma_list;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "envscan.toml";

pub const ENV_PREFIX_DEPTH: &str = "ENVSCAN_GROUPING_PREFIX_DEPTH";
pub const ENV_PREFIX_GROUPS: &str = "ENVSCAN_GROUPING_PREFIX_GROUPS";
pub const ENV_SORT_DEFAULTS: &str = "ENVSCAN_INVENTORY_SORT_DEFAULTS";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ENVSCAN_*`)
/// 3. Project config (`envscan.toml` in project root)
/// 4. User config (`~/.envscan/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EnvScanConfig {
    pub grouping: GroupingSection,
    pub inventory: InventorySection,
}

/// Caller-supplied overrides, e.g. from a command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub prefix_depth: Option<usize>,
    pub prefix_groups: Option<Vec<String>>,
    pub sort_defaults: Option<bool>,
}

impl EnvScanConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        ::tracing::debug!(
            prefix_depth = config.grouping.effective_prefix_depth(),
            prefix_groups = config.grouping.prefix_groups.len(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &EnvScanConfig) -> Result<(), ConfigError> {
        if config.grouping.prefix_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.prefix_depth".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config
            .grouping
            .prefix_groups
            .iter()
            .any(|group| group.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.prefix_groups".to_string(),
                message: "entries must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.envscan/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut EnvScanConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: EnvScanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. `other` wins only where it sets a value.
    fn merge(base: &mut EnvScanConfig, other: &EnvScanConfig) {
        if other.grouping.prefix_depth.is_some() {
            base.grouping.prefix_depth = other.grouping.prefix_depth;
        }
        if !other.grouping.prefix_groups.is_empty() {
            base.grouping.prefix_groups = other.grouping.prefix_groups.clone();
        }
        if other.inventory.sort_defaults.is_some() {
            base.inventory.sort_defaults = other.inventory.sort_defaults;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut EnvScanConfig) {
        if let Ok(val) = std::env::var(ENV_PREFIX_DEPTH) {
            match parse_env_value::<usize>(ENV_PREFIX_DEPTH, &val) {
                Ok(v) => config.grouping.prefix_depth = Some(v),
                Err(err) => ::tracing::warn!(error = %err, "ignoring environment override"),
            }
        }
        if let Ok(val) = std::env::var(ENV_PREFIX_GROUPS) {
            let groups = split_comma_list(&val);
            if !groups.is_empty() {
                config.grouping.prefix_groups = groups;
            }
        }
        if let Ok(val) = std::env::var(ENV_SORT_DEFAULTS) {
            match parse_env_value::<bool>(ENV_SORT_DEFAULTS, &val) {
                Ok(v) => config.inventory.sort_defaults = Some(v),
                Err(err) => ::tracing::warn!(error = %err, "ignoring environment override"),
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut EnvScanConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.prefix_depth {
            config.grouping.prefix_depth = Some(v);
        }
        if let Some(ref v) = overrides.prefix_groups {
            config.grouping.prefix_groups = v.clone();
        }
        if let Some(v) = overrides.sort_defaults {
            config.inventory.sort_defaults = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse one `ENVSCAN_*` value, naming the variable on failure.
fn parse_env_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: var.to_string(),
        message: format!("{raw:?}: {e}"),
    })
}

/// Returns the user-level config directory: `~/.envscan/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".envscan"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
