use crate::app_dirs::AppDirs;
use crate::distractor::MONGOLIAN_CYRILLIC;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub clear_screen: bool,
    pub show_recap: bool,
    pub pause_between_entries: bool,
    /// Replacement letters for multiple-choice distractors
    pub alphabet: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_recap: true,
            pause_between_entries: true,
            alphabet: MONGOLIAN_CYRILLIC.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files fall back to [`Config::default`].
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) if cfg.alphabet.is_empty() => {
                warn!(path = %self.path.display(), "config alphabet is empty, using the default");
                Config {
                    alphabet: Config::default().alphabet,
                    ..cfg
                }
            }
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %self.path.display(), "ignoring unparsable config: {e}");
                Config::default()
            }
        }
    }
}
