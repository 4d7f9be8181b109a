use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// `config.json` under the platform config dir, or the working directory
    /// when no home directory can be found.
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "surakh")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("surakh_config.json"))
    }
}
