//! Path Utilities
//!
//! Resolves where the registry's backing file lives. Hosts call
//! [`ensure_storage_path`] once at startup and hand the result to
//! [`BaseDirRegistry::initialize`](crate::BaseDirRegistry::initialize).

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

/// Environment variable overriding the application config directory
pub const CONFIG_DIR_ENV: &str = "STYR_CONFIG_DIR";

/// Name of the backing file inside the config directory
pub const STORAGE_FILE_NAME: &str = "basedirs.json";

const APP_DIR_NAME: &str = "styr";

/// Get the Styr config directory (`<user config dir>/styr/`)
///
/// `STYR_CONFIG_DIR` wins when set. Without a platform config directory the
/// current directory is used instead.
pub fn styr_dir() -> PathBuf {
    resolve_styr_dir(std::env::var_os(CONFIG_DIR_ENV), dirs::config_dir())
}

fn resolve_styr_dir(env_override: Option<OsString>, config_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    config_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Get the backing file path without touching the filesystem
pub fn storage_path() -> PathBuf {
    styr_dir().join(STORAGE_FILE_NAME)
}

/// Create the config directory if needed and return the backing file path.
///
/// A directory that cannot be created is logged and otherwise ignored; the
/// registry will report the failure on its first write.
pub fn ensure_storage_path() -> PathBuf {
    let dir = styr_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        warn!("Failed to create config directory {:?}: {}", dir, e);
    }
    dir.join(STORAGE_FILE_NAME)
}
