use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file
pub const CONFIG_PATH_VAR: &str = "SLFA_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "slfa.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// JSON roster to show instead of the built-in squad
    #[serde(default)]
    pub roster_path: Option<PathBuf>,

    /// Where CVs and the fixture list are saved
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_buffer_size() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_path: None,
            export_dir: default_export_dir(),
            log_filter: default_log_filter(),
            log_buffer_size: default_log_buffer_size(),
        }
    }
}

impl Settings {
    /// Settings file (`$SLFA_CONFIG`, else `slfa.toml`) overlaid by
    /// `SLFA_*` environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self::build(Some(&path), true)
    }

    /// Settings from a single file, ignoring the environment
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(Some(path), false)
    }

    fn build(path: Option<&Path>, with_env: bool) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path.filter(|p| p.exists()) {
            builder = builder.add_source(config::File::from(path));
        }

        if with_env {
            builder = builder.add_source(config::Environment::with_prefix("SLFA").separator("__"));
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<()> {
        if self.export_dir.as_os_str().is_empty() {
            bail!("export_dir must not be empty");
        }
        if self.log_buffer_size == 0 {
            bail!("log_buffer_size must be greater than zero");
        }
        if self.log_filter.trim().is_empty() {
            bail!("log_filter must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "slfa-settings-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::from_file(Path::new("/nonexistent/slfa.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.log_buffer_size, 5000);
        assert!(settings.roster_path.is_none());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let path = write_config(
            "override",
            r#"
roster_path = "data/roster.json"
export_dir = "exports"
log_filter = "slfa=debug"
"#,
        );

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.roster_path, Some(PathBuf::from("data/roster.json")));
        assert_eq!(settings.export_dir, PathBuf::from("exports"));
        assert_eq!(settings.log_filter, "slfa=debug");
        assert_eq!(settings.log_buffer_size, 5000);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let empty_dir = Settings {
            export_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(empty_dir.validate().is_err());

        let no_buffer = Settings {
            log_buffer_size: 0,
            ..Default::default()
        };
        assert_eq!(
            no_buffer.validate().unwrap_err().to_string(),
            "log_buffer_size must be greater than zero"
        );
    }
}
