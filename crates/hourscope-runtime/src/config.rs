use crate::debounce::DEFAULT_QUIET_PERIOD;
use crate::validation::ValidationPolicy;
use crate::{Error, Result};
use hourscope_types::ThemePreference;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Resolve the configuration directory based on priority:
/// 1. HOURSCOPE_PATH environment variable (with tilde expansion)
/// 2. Platform config directory
/// 3. ~/.hourscope (fallback for systems without one)
pub fn resolve_config_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("HOURSCOPE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("hourscope"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".hourscope"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or platform config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL the `/subreddit/...` endpoints hang off
    pub api_url: String,
    pub debounce_ms: u64,
    /// IANA zone sent with analysis requests
    pub timezone: String,
    pub validation: ValidationPolicy,
    pub theme: ThemePreference,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debounce_ms: DEFAULT_QUIET_PERIOD.as_millis() as u64,
            timezone: "UTC".to_string(),
            validation: ValidationPolicy::default(),
            theme: ThemePreference::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Config file to use: an explicit file (with tilde expansion) wins,
    /// otherwise `config.toml` in [`resolve_config_dir`].
    pub fn resolve_path(explicit_file: Option<&str>) -> Result<PathBuf> {
        match explicit_file {
            Some(path) => Ok(expand_tilde(path)),
            None => Ok(resolve_config_dir()?.join("config.toml")),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.quiet_period(), Duration::from_millis(500));
        assert_eq!(config.theme, ThemePreference::Light);
        assert_eq!(config.validation, ValidationPolicy::SelectionRequired);
    }

    #[test]
    fn test_explicit_file_wins() -> Result<()> {
        assert_eq!(
            Config::resolve_path(Some("/etc/hourscope/custom.toml"))?,
            PathBuf::from("/etc/hourscope/custom.toml")
        );
        assert!(Config::resolve_path(None)?.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn test_explicit_file_expands_tilde() -> Result<()> {
        let Some(home) = std::env::var_os("HOME") else {
            return Ok(());
        };
        assert_eq!(
            Config::resolve_path(Some("~/hourscope.toml"))?,
            PathBuf::from(home).join("hourscope.toml")
        );
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            api_url: "https://example.test/api".to_string(),
            timezone: "Asia/Tokyo".to_string(),
            validation: ValidationPolicy::SelectionOrPattern,
            theme: ThemePreference::Dark,
            ..Config::default()
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"dark\"\ndebounce_ms = 250\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.quiet_period(), Duration::from_millis(250));
        assert_eq!(config.api_url, DEFAULT_API_URL);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"sepia\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }
}
