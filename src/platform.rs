//! Where TabStash keeps its settings file and stash database.

use std::env;
use std::path::PathBuf;

/// Kind of per-user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    Config,
    Data,
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var(var).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn home_dir() -> PathBuf {
    env_path("HOME").unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// XDG base directories: `$XDG_CONFIG_HOME/tabstash` and
/// `$XDG_DATA_HOME/tabstash`, falling back to `~/.config` and `~/.local/share`.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn app_dir(kind: AppDir) -> PathBuf {
    let base = match kind {
        AppDir::Config => env_path("XDG_CONFIG_HOME").unwrap_or_else(|| home_dir().join(".config")),
        AppDir::Data => {
            env_path("XDG_DATA_HOME").unwrap_or_else(|| home_dir().join(".local").join("share"))
        }
    };
    base.join("tabstash")
}

/// Settings and data share `~/Library/Application Support/TabStash`.
#[cfg(target_os = "macos")]
pub fn app_dir(_kind: AppDir) -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("TabStash")
}

/// Settings and data share `%APPDATA%/TabStash`.
#[cfg(target_os = "windows")]
pub fn app_dir(_kind: AppDir) -> PathBuf {
    env_path("APPDATA")
        .unwrap_or_else(|| home_dir().join("AppData").join("Roaming"))
        .join("TabStash")
}
