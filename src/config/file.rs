//! Configuration file support for persistent settings.
//!
//! This module loads configuration from a TOML file located at
//! `~/.config/pom-tree/config.toml` (or the platform-specific equivalent).
//! Values from the file serve as defaults that CLI arguments override.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/src/shop"
//! default_version = "1.0.0-SNAPSHOT"
//! descriptor = "pom.xml"
//!
//! [report]
//! buildable_only = false
//! json = false
//!
//! [logging]
//! level = "warn"
//! json = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default root module directory
    pub dir: Option<PathBuf>,

    /// Version given to the root module when it declares none
    pub default_version: Option<String>,

    /// Descriptor filename looked up in every module directory
    pub descriptor: Option<String>,

    /// Report options
    #[serde(default)]
    pub report: FileReportConfig,

    /// Logging options
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

/// Report options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileReportConfig {
    /// Only list modules that need a build artifact
    pub buildable_only: Option<bool>,

    /// Emit JSON instead of the coloured tree
    pub json: Option<bool>,
}

/// Logging options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    /// Minimum level (`"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`)
    pub level: Option<String>,

    /// Emit log lines as JSON
    pub json: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/pom-tree/config.toml`, where
    /// `<config_dir>` is the platform-specific configuration directory.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pom-tree").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// contains invalid TOML or unexpected fields.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, returning defaults if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.dir.is_none());
        assert!(config.default_version.is_none());
        assert!(config.descriptor.is_none());
        assert!(config.report.buildable_only.is_none());
        assert!(config.report.json.is_none());
        assert!(config.logging.level.is_none());
        assert!(config.logging.json.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
dir = "~/src/shop"
default_version = "1.0.0-SNAPSHOT"
descriptor = "pom.xml"

[report]
buildable_only = true
json = false

[logging]
level = "debug"
json = true
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.dir, Some(PathBuf::from("~/src/shop")));
        assert_eq!(config.default_version, Some("1.0.0-SNAPSHOT".to_string()));
        assert_eq!(config.descriptor, Some("pom.xml".to_string()));
        assert_eq!(config.report.buildable_only, Some(true));
        assert_eq!(config.report.json, Some(false));
        assert_eq!(config.logging.level, Some("debug".to_string()));
        assert_eq!(config.logging.json, Some(true));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r"
[report]
buildable_only = true
";

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert!(config.dir.is_none());
        assert!(config.default_version.is_none());
        assert_eq!(config.report.buildable_only, Some(true));
        assert!(config.report.json.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.dir.is_none());
        assert!(config.descriptor.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[report]
json = "yes"
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_field_errors() {
        assert!(toml::from_str::<FileConfig>("keep_size = \"1MB\"").is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with(Path::new("pom-tree").join("config.toml")));
        }
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let dir = tempfile::TempDir::new().unwrap();

        let config = FileConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.dir.is_none());
        assert!(config.default_version.is_none());
    }

    #[test]
    fn test_load_from_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_version = \"2.0\"\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();

        assert_eq!(config.default_version, Some("2.0".to_string()));
    }

    #[test]
    fn test_load_from_invalid_file_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dir = [").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let expanded = expand_tilde(&PathBuf::from("~/src"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("src"));
        }
    }

    #[test]
    fn test_expand_tilde_absolute_path_unchanged() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(expand_tilde(&path), path);
    }

    #[test]
    fn test_expand_tilde_relative_path_unchanged() {
        let path = PathBuf::from("relative/path");
        assert_eq!(expand_tilde(&path), path);
    }
}
