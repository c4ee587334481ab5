//! Where lined keeps its per-user files
//!
//! ```text
//! <config dir>/lined/
//!     config.yaml    editor settings, see `EditorConfig`
//!     init.lua       evaluated before the first prompt when present
//!     logs/          daily `lined.log` files
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` or `~/.config`, `%APPDATA%` on Windows.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "lined";
const CONFIG_FILE: &str = "config.yaml";
const INIT_SCRIPT: &str = "init.lua";
const LOGS_DIR: &str = "logs";

/// Root of lined's files, `None` when no home or config dir is known
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|base| base.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Default init script; only run if it exists
pub fn init_script() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(INIT_SCRIPT))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
