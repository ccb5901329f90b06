//! Settings loaded from `settings.toml` in the platform config directory.
//!
//! ```toml
//! [store]
//! base_url = "https://rowstore.example.com/api"
//! document = "fleet_records"
//! credential_path = "~/.config/fleettui/credential.json"
//!
//! [auth]
//! passphrase_sha256 = "…"
//!
//! [normalize]        # optional threshold overrides
//! tenfold_limit = 300
//! ```

use anyhow::{Context, Result};
use config::{Config, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::normalize::CorrectionRules;

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub base_url: String,
    /// Title of the spreadsheet document holding both tabs.
    #[serde(default = "default_document")]
    pub document: String,
    /// Service-credential JSON blob; without it, no data operation runs.
    pub credential_path: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// SHA-256 hex digest of the shared passphrase.
    pub passphrase_sha256: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeSettings {
    pub wash_limit: Option<u32>,
    pub tenfold_limit: Option<u32>,
    pub hundredfold_limit: Option<u32>,
}

impl NormalizeSettings {
    pub fn rules(&self) -> CorrectionRules {
        let defaults = CorrectionRules::default();
        CorrectionRules {
            wash_limit: self.wash_limit.map(Decimal::from).unwrap_or(defaults.wash_limit),
            tenfold_limit: self
                .tenfold_limit
                .map(Decimal::from)
                .unwrap_or(defaults.tenfold_limit),
            hundredfold_limit: self
                .hundredfold_limit
                .map(Decimal::from)
                .unwrap_or(defaults.hundredfold_limit),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub store: StoreSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub normalize: NormalizeSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join("settings.toml");
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = Config::builder()
            .add_source(File::from(path))
            .build()
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let mut settings: Settings = raw
            .try_deserialize()
            .with_context(|| format!("parsing settings from {}", path.display()))?;
        settings.store.credential_path = shellexpand(&settings.store.credential_path);
        Ok(settings)
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fleettui", "FleetTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

pub fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fleettui", "FleetTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let dir = proj_dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(dir)
}

pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

fn default_document() -> String {
    "fleet_records".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_level() -> String {
    "info".into()
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
