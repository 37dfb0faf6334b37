use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "numguess";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    /// Stands in for the host's notification permission.
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,

    /// Where records.json lives; defaults to the data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

// Helper functions for default values
fn default_version() -> u32 {
    2
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            notifications_enabled: true,
            data_dir: None,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(e) => {
                    warn!(target: "settings", "Ignoring unreadable settings {:?}: {}", path, e)
                }
            }
        }
        let default = Settings::default();
        if let Err(e) = default.save_to(path) {
            debug!(target: "settings", "Could not write default settings {:?}: {}", path, e);
        }
        default
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    fn settings_path() -> PathBuf {
        default_data_dir().join("settings.json")
    }

    /// Directory for the records file, honouring the override in settings.
    pub fn records_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    fn migrate(&mut self) {
        match self.version {
            // v1 had no notification toggle; anything it stored is still valid
            0 | 1 => {
                self.version = 2;
            }
            _ => (),
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}

/// `NUMGUESS_DATA_DIR`, else the XDG data home, else `~/.local/share`.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("NUMGUESS_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(dir) = std::env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(dir).join(APP_DIR_NAME);
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR_NAME);
    }
    PathBuf::from(format!(".{}", APP_DIR_NAME))
}
