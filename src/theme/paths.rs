//! Path resolution for the config and log directories.

use std::env;
use std::path::{Path, PathBuf};

/// What: Resolve an XDG base directory from environment or `$HOME` segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g. `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback segments relative to `$HOME`.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Config directory `~/.config/blossi`, ensured to exist.
///
/// Inputs: none
///
/// Output: Directory path; creation failures are ignored so startup never
/// blocks on an unwritable home.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("blossi");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("blossi");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Logs directory under config, ensured to exist.
///
/// Inputs: none
///
/// Output: `~/.config/blossi/logs`.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Location of the settings file, whether or not it exists yet.
///
/// Inputs: none
///
/// Output: `~/.config/blossi/settings.conf`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}
