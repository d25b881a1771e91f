//! Configuration file support for the code generator.
//!
//! This module handles loading and discovering `.attest.yaml` configuration
//! files describing codegen targets.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default configuration embedded at compile time.
const DEFAULT_CONFIG_STR: &str = include_str!("../default.attest.yaml");

/// Parsed default config, initialized once on first access.
fn default_config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        serde_yaml::from_str(DEFAULT_CONFIG_STR)
            .expect("embedded default.attest.yaml should be valid YAML")
    })
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Code generation settings.
    pub codegen: CodegenConfig,
}

/// Code generation settings.
#[derive(Debug, Deserialize, Clone)]
pub struct CodegenConfig {
    /// Generation targets, run in order.
    pub targets: Vec<TargetConfig>,

    /// File or directory names skipped while scanning for interface files.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// One generation target.
#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    /// Target kind; see `codegen::TargetKind` for the supported names.
    pub kind: String,

    /// Directory holding the `*_assertions.rs` interface files.
    pub logic_dir: PathBuf,

    /// Directory the generated files are written to.
    pub gen_dir: PathBuf,

    /// Package sub-directories of `logic_dir` scanned in addition to its
    /// top level.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        default_config().clone()
    }
}

impl Config {
    /// Discover config by searching from start_dir upward.
    /// Returns (config, config_dir) for relative path resolution.
    pub fn discover(start_dir: &Path) -> Option<(Self, PathBuf)> {
        let config_path = find_config_file(start_dir)?;
        let config_dir = config_path.parent()?.to_path_buf();
        let config = load_config(&config_path).ok()?;
        Some((config, config_dir))
    }

    /// Load config from explicit path.
    pub fn load(path: &Path) -> Result<(Self, PathBuf)> {
        let config_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let config = load_config(path)?;
        Ok((config, config_dir))
    }

    /// Merge CLI overrides into this config. Overrides apply to every
    /// target.
    pub fn with_overrides(
        mut self,
        logic_dir: Option<PathBuf>,
        gen_dir: Option<PathBuf>,
    ) -> Self {
        for target in &mut self.codegen.targets {
            if let Some(dir) = &logic_dir {
                target.logic_dir = dir.clone();
            }
            if let Some(dir) = &gen_dir {
                target.gen_dir = dir.clone();
            }
        }
        self
    }

    /// Resolve a target directory, relative to config_dir if the config
    /// came from a file, else relative to base_dir.
    pub fn resolve_dir(dir: &Path, base_dir: &Path, config_dir: Option<&Path>) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            config_dir.unwrap_or(base_dir).join(dir)
        }
    }
}

/// Search for a config file starting from start_dir and walking up to root.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.canonicalize().ok()?;

    loop {
        let candidate = current.join(".attest.yaml");
        if candidate.exists() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load and parse a config file.
fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.codegen.targets.len(), 1);

        let target = &config.codegen.targets[0];
        assert_eq!(target.kind, "lib");
        assert_eq!(target.logic_dir, PathBuf::from("src/logic"));
        assert_eq!(target.gen_dir, PathBuf::from("src/logic/gen"));
        assert!(target.packages.is_empty());
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("logic")), None);
        assert_eq!(config.codegen.targets[0].logic_dir, PathBuf::from("logic"));
        assert_eq!(
            config.codegen.targets[0].gen_dir,
            PathBuf::from("src/logic/gen")
        );
    }

    #[test]
    fn test_resolve_dir_prefers_config_dir() {
        let resolved = Config::resolve_dir(
            Path::new("src/logic"),
            Path::new("/base"),
            Some(Path::new("/project")),
        );
        assert_eq!(resolved, PathBuf::from("/project/src/logic"));
    }

    #[test]
    fn test_resolve_dir_without_config_dir() {
        let resolved = Config::resolve_dir(Path::new("src/logic"), Path::new("/base"), None);
        assert_eq!(resolved, PathBuf::from("/base/src/logic"));
    }

    #[test]
    fn test_resolve_dir_absolute() {
        let resolved = Config::resolve_dir(
            Path::new("/abs/logic"),
            Path::new("/base"),
            Some(Path::new("/project")),
        );
        assert_eq!(resolved, PathBuf::from("/abs/logic"));
    }
}
