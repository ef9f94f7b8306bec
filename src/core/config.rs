//! # Configuration
//!
//! Settings follow one override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.mototaxi/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.
//!
//! Logging is configured from CLI flags only, because the logger has to be up
//! before this file is read.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::profile::{
    DEFAULT_NAME, DEFAULT_PHONE_NUMBER, DEFAULT_VEHICLE_MODEL, Profile,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MotoTaxiConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Initial profile values. Edits made in the app are never written back.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub vehicle_model: Option<String>,
    pub phone_number: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub profile: Profile,
}

pub const ENV_NAME: &str = "MOTOTAXI_NAME";
pub const ENV_VEHICLE: &str = "MOTOTAXI_VEHICLE";
pub const ENV_PHONE: &str = "MOTOTAXI_PHONE";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mototaxi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mototaxi").join("config.toml"))
}

/// Load config from `explicit` if given, else from the default location.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error, as is a malformed one.
pub fn load_config(explicit: Option<&Path>) -> Result<MotoTaxiConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MotoTaxiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MotoTaxiConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<MotoTaxiConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MotoTaxiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# MotoTaxiApp Configuration
# All settings are optional; built-in defaults are used for anything not set.
# Override hierarchy: defaults → this file → env vars.

# [profile]
# name = "Juan Motero"               # Or set MOTOTAXI_NAME
# vehicle_model = "Honda XR 150"     # Or set MOTOTAXI_VEHICLE
# phone_number = "300 123 4567"      # Or set MOTOTAXI_PHONE
"#;

/// Writes the commented-out template to `path`. Failures are only logged.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config against the process environment.
pub fn resolve(config: &MotoTaxiConfig) -> ResolvedConfig {
    resolve_with_env(config, |key| std::env::var(key).ok())
}

/// Resolve the final config, reading env vars through `env`.
pub fn resolve_with_env(
    config: &MotoTaxiConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let pick = |key: &str, file: &Option<String>, default: &str| {
        env(key)
            .or_else(|| file.clone())
            .unwrap_or_else(|| default.to_string())
    };

    ResolvedConfig {
        profile: Profile {
            name: pick(ENV_NAME, &config.profile.name, DEFAULT_NAME),
            vehicle_model: pick(ENV_VEHICLE, &config.profile.vehicle_model, DEFAULT_VEHICLE_MODEL),
            phone_number: pick(ENV_PHONE, &config.profile.phone_number, DEFAULT_PHONE_NUMBER),
        },
    }
}
