//! XDG directory helpers for config/data locations.

use std::path::PathBuf;

/// Base directory for persistent data (contacts file, exports).
///
/// Uses `TAC_DATA_DIR` if set, otherwise `$XDG_DATA_HOME/taconnect` or
/// `~/.local/share/taconnect`.
pub(crate) fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TAC_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_DATA_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".local")
                .join("share")
        })
        .join("taconnect")
}

/// Base directory for configuration.
///
/// Uses `TAC_CONFIG_DIR` if set, otherwise `$XDG_CONFIG_HOME/taconnect` or
/// `~/.config/taconnect`.
pub(crate) fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TAC_CONFIG_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".config")
        })
        .join("taconnect")
}

pub(crate) fn default_data_file() -> PathBuf {
    data_dir().join("contacts.json")
}

pub(crate) fn default_export_dir() -> PathBuf {
    data_dir().join("exports")
}
