//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file at startup
//! - Turning diagnostics on from the start
//! - Choosing the init script and config file

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;

/// A line editor extensible by scripts
#[derive(Parser, Debug)]
#[command(name = "lined", version, about = "A line editor extensible by scripts")]
pub struct CliArgs {
    /// File to open at startup
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Print diagnostics on stderr from the start (same as `log on`)
    #[arg(short = 'l', long)]
    pub log: bool,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Script to evaluate before the first prompt (overrides the config)
    #[arg(short = 's', long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub open: Option<PathBuf>,
    pub log: bool,
    pub banner: bool,
    pub script: Option<PathBuf>,
    pub success_marker: String,
}

impl CliArgs {
    /// Merge with the loaded config; flags win
    pub fn into_config(self, config: &EditorConfig) -> StartupConfig {
        StartupConfig {
            open: self.path,
            log: self.log || config.log,
            banner: config.banner && !self.no_banner,
            script: self.script.or_else(|| config.init_script_path()),
            success_marker: config.success_marker.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("lined").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args() {
        let parsed = args(&[]);
        assert_eq!(parsed.path, None);
        assert!(!parsed.log);
    }

    #[test]
    fn test_positional_path() {
        let parsed = args(&["notes.txt"]);
        assert_eq!(parsed.path, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_only_one_path() {
        let argv = ["lined", "a.txt", "b.txt"];
        assert!(CliArgs::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = EditorConfig {
            init_script: Some(PathBuf::from("/cfg/init.lua")),
            ..EditorConfig::default()
        };
        let startup = args(&["--log", "--no-banner", "--script", "x.lua"]).into_config(&config);
        assert!(startup.log);
        assert!(!startup.banner);
        assert_eq!(startup.script, Some(PathBuf::from("x.lua")));
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = EditorConfig {
            log: true,
            init_script: Some(PathBuf::from("/cfg/init.lua")),
            success_marker: "ok".to_string(),
            ..EditorConfig::default()
        };
        let startup = args(&[]).into_config(&config);
        assert!(startup.log);
        assert!(startup.banner);
        assert_eq!(startup.script, Some(PathBuf::from("/cfg/init.lua")));
        assert_eq!(startup.success_marker, "ok");
    }
}
