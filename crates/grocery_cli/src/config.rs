//! Runtime settings resolved from flags, environment and platform defaults.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "grocery-list";
const DB_FILE_NAME: &str = "grocery.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Settings {
    /// Fills unset values from the per-user data directory.
    ///
    /// Relative paths are anchored at `cwd` because the logger only accepts
    /// absolute directories.
    pub fn resolve(
        db_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
        cwd: &Path,
    ) -> Self {
        let data_dir = default_data_dir();
        Self {
            db_path: absolutize(db_path.unwrap_or_else(|| data_dir.join(DB_FILE_NAME)), cwd),
            log_dir: absolutize(log_dir.unwrap_or_else(|| data_dir.join(LOG_DIR_NAME)), cwd),
            log_level: log_level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| grocery_core::default_log_level().to_string()),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
