//! Configuration loading for the cleaner.
//!
//! Layered precedence: defaults -> config file -> env vars -> CLI flags.
//! The config file lives at ~/.config/jhe-cleaner/config.toml; environment
//! variables use the JHE_ prefix. CLI flags are applied by the caller after
//! `Settings::load` returns.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CleanerError;
use crate::job::DEFAULT_DELETE_AFTER_SECONDS;

/// Main cleaner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Use the in-cluster service account configuration.
    #[serde(default)]
    pub in_cluster: bool,

    /// Path to a kubeconfig file. When unset and not in-cluster, the
    /// standard kubeconfig resolution applies.
    #[serde(default)]
    pub kubeconfig: Option<String>,

    /// Restrict the sweep to one namespace. When unset, all namespaces
    /// are swept.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Retention window in seconds applied to jobs without an override
    /// annotation.
    #[serde(default = "default_delete_after_seconds")]
    pub delete_after_seconds: i64,

    /// Evaluate and log decisions without deleting anything.
    #[serde(default)]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_delete_after_seconds() -> i64 {
    DEFAULT_DELETE_AFTER_SECONDS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            in_cluster: false,
            kubeconfig: None,
            namespace: None,
            delete_after_seconds: default_delete_after_seconds(),
            dry_run: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/jhe-cleaner/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (JHE_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, CleanerError> {
        let config_dir = ProjectDirs::from("", "", "jhe-cleaner")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("in_cluster", false)
            .map_err(|e| CleanerError::Config(e.to_string()))?
            .set_default("delete_after_seconds", DEFAULT_DELETE_AFTER_SECONDS)
            .map_err(|e| CleanerError::Config(e.to_string()))?
            .set_default("dry_run", false)
            .map_err(|e| CleanerError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| CleanerError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Format: JHE_IN_CLUSTER, JHE_NAMESPACE, JHE_DELETE_AFTER_SECONDS, etc.
        builder = builder.add_source(Environment::with_prefix("JHE").try_parsing(true));

        let config = builder
            .build()
            .map_err(|e| CleanerError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| CleanerError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> Result<(), CleanerError> {
        if self.delete_after_seconds < 0 {
            return Err(CleanerError::Config(format!(
                "delete_after_seconds must be >= 0, got {}",
                self.delete_after_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.in_cluster);
        assert!(settings.kubeconfig.is_none());
        assert!(settings.namespace.is_none());
        assert_eq!(settings.delete_after_seconds, 3600);
        assert!(!settings.dry_run);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_validate_rejects_negative_retention() {
        let settings = Settings {
            delete_after_seconds: -1,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("must be >= 0"));
    }

    #[test]
    fn test_load_from_config_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "namespace = \"batch\"").unwrap();
        writeln!(file, "delete_after_seconds = 7200").unwrap();
        writeln!(file, "dry_run = true").unwrap();

        let settings = Settings::load(file.path().to_str()).unwrap();
        assert_eq!(settings.namespace.as_deref(), Some("batch"));
        assert_eq!(settings.delete_after_seconds, 7200);
        assert!(settings.dry_run);
        // Untouched keys keep their defaults.
        assert!(!settings.in_cluster);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_load_rejects_negative_retention_in_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "delete_after_seconds = -5").unwrap();

        let result = Settings::load(file.path().to_str());
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let settings = Settings {
            namespace: Some("jobs".to_string()),
            delete_after_seconds: 60,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.namespace.as_deref(), Some("jobs"));
        assert_eq!(parsed.delete_after_seconds, 60);
    }
}
