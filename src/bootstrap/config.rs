//! # Host configuration
//!
//! Optional `config.toml` with host-level knobs. Engine settings do not
//! live here; they are part of the persisted history document.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use snip_platform::AppDirs;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DOCUMENT_FILE_NAME: &str = "data.json";
pub const DEFAULT_BUFFER_FILE_NAME: &str = "Clipboard History.md";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Overrides the per-user data directory.
    pub data_dir: Option<PathBuf>,
    pub buffer_file_name: Option<String>,
    /// Extra tracing directives appended to the defaults.
    pub log_filter: Option<String>,
}

/// Load configuration from a TOML file.
///
/// Pure data loading: unknown keys are ignored and missing keys stay `None`.
pub fn load_config(config_path: &Path) -> anyhow::Result<HostConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_optional_config(config_path: &Path) -> anyhow::Result<HostConfig> {
    if !config_path.exists() {
        return Ok(HostConfig::default());
    }
    load_config(config_path)
}

/// Every file location the host needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPaths {
    pub data_dir: PathBuf,
    pub document: PathBuf,
    pub buffer: PathBuf,
    pub logs_dir: PathBuf,
}

impl HostPaths {
    pub fn resolve(dirs: &AppDirs, config: &HostConfig) -> Self {
        let data_dir = config
            .data_dir
            .clone()
            .unwrap_or_else(|| dirs.data_root.clone());
        let buffer_name = config
            .buffer_file_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_BUFFER_FILE_NAME);

        Self {
            document: data_dir.join(DOCUMENT_FILE_NAME),
            buffer: data_dir.join(buffer_name),
            logs_dir: data_dir.join("logs"),
            data_dir,
        }
    }
}
