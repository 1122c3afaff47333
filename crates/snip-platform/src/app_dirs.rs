use std::path::PathBuf;

const APP_DIR_NAME: &str = "snipstack";

/// Environment variable that isolates data of parallel installs.
pub const PROFILE_ENV: &str = "SNIPSTACK_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// History document, buffer file and logs live here.
    pub data_root: PathBuf,
    /// Location of the optional `config.toml`.
    pub config_root: PathBuf,
}

impl AppDirs {
    pub fn logs_dir(&self) -> PathBuf {
        self.data_root.join("logs")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppDirsError {
    #[error("local data directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("config directory is unavailable")]
    ConfigDirUnavailable,
}

pub struct DirsAppDirs {
    base_override: Option<PathBuf>,
}

impl DirsAppDirs {
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Resolve every directory under `base` instead of the user's directories.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    pub fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let app_dir_name = resolved_app_dir_name();

        if let Some(base) = &self.base_override {
            let root = base.join(&app_dir_name);
            return Ok(AppDirs {
                data_root: root.clone(),
                config_root: root,
            });
        }

        let base_data = dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let base_config = dirs::config_dir().ok_or(AppDirsError::ConfigDirUnavailable)?;

        Ok(AppDirs {
            data_root: base_data.join(&app_dir_name),
            config_root: base_config.join(&app_dir_name),
        })
    }
}

impl Default for DirsAppDirs {
    fn default() -> Self {
        Self::new()
    }
}
