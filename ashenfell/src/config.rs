//! Environment-driven client configuration.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Paths the client reads and writes.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the save file lives.
    pub save_file: PathBuf,

    /// Directory for log output.
    pub log_dir: PathBuf,
}

impl Config {
    /// Build from the environment, falling back to the per-OS project
    /// directories.
    ///
    /// - `ASHENFELL_SAVE_FILE` overrides the save file path.
    /// - `ASHENFELL_LOG_DIR` overrides the log directory.
    pub fn from_env() -> Self {
        let dirs = ProjectDirs::from("", "", "ashenfell");

        let save_file = std::env::var_os("ASHENFELL_SAVE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| match &dirs {
                Some(dirs) => dirs.data_dir().join("save.bin"),
                None => PathBuf::from("ashenfell-save.bin"),
            });

        let log_dir = std::env::var_os("ASHENFELL_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| match &dirs {
                Some(dirs) => dirs.data_dir().join("logs"),
                None => PathBuf::from("logs"),
            });

        Self { save_file, log_dir }
    }
}
