//! Editor configuration
//!
//! Read from `~/.config/lined/config.yaml`. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_SUCCESS_MARKER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Diagnostics on stderr at startup
    #[serde(default)]
    pub log: bool,

    /// Print the startup banner
    #[serde(default = "default_banner")]
    pub banner: bool,

    /// Script evaluated before the first prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_script: Option<PathBuf>,

    /// Acknowledgement printed after each successful command
    #[serde(default = "default_success_marker")]
    pub success_marker: String,
}

fn default_banner() -> bool {
    true
}

fn default_success_marker() -> String {
    DEFAULT_SUCCESS_MARKER.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log: false,
            banner: default_banner(),
            init_script: None,
            success_marker: default_success_marker(),
        }
    }
}

impl EditorConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            Self::default()
        })
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config = Self::parse(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// The init script to run: the configured one, else `init.lua` in the
    /// config dir if it exists
    pub fn init_script_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.init_script {
            return Some(path.clone());
        }
        crate::config_paths::init_script().filter(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(EditorConfig::parse("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = EditorConfig::parse("log: true\n").unwrap();
        assert!(config.log);
        assert!(config.banner);
        assert_eq!(config.success_marker, "!");
        assert_eq!(config.init_script, None);
    }

    #[test]
    fn test_full_config() {
        let yaml = "log: false\nbanner: false\ninit_script: /tmp/rc.lua\nsuccess_marker: ok\n";
        let config = EditorConfig::parse(yaml).unwrap();
        assert!(!config.banner);
        assert_eq!(config.init_script, Some(PathBuf::from("/tmp/rc.lua")));
        assert_eq!(config.success_marker, "ok");
        assert_eq!(config.init_script_path(), Some(PathBuf::from("/tmp/rc.lua")));
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(EditorConfig::parse("log: [not, a, bool]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "banner: false\n").unwrap();
        let config = EditorConfig::load_from(&path).unwrap();
        assert!(!config.banner);

        assert!(EditorConfig::load_from(&dir.path().join("missing.yaml")).is_err());
    }
}
