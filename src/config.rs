use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// Facade configuration. Holds at most one remote API key; without one the
/// remote fallback is disabled.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FacadeConfig {
    api_key: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    fallback: FallbackSection,
}

#[derive(Debug, Deserialize, Default)]
struct FallbackSection {
    api_key: Option<String>,
}

impl FacadeConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Replace the API key. The key format is not checked.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Load from a TOML file with an optional `[fallback]` table
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let file: ConfigFile = toml::from_str(&content).context("Failed to parse config file")?;

        let config = Self {
            api_key: file.fallback.api_key,
        };
        info!(
            "Loaded geocoder config from {} (remote fallback {})",
            path.display(),
            if config.api_key.is_some() { "enabled" } else { "disabled" }
        );
        Ok(config)
    }
}

impl fmt::Debug for FacadeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_has_no_key() {
        assert_eq!(FacadeConfig::default().api_key(), None);
    }

    #[test]
    fn test_set_api_key_last_write_wins() {
        let mut config = FacadeConfig::with_api_key("first");
        config.set_api_key("second");
        assert_eq!(config.api_key(), Some("second"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = FacadeConfig::with_api_key("secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("[fallback]\napi_key = \"abc123\"\n");
        let config = FacadeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_key(), Some("abc123"));
    }

    #[test]
    fn test_load_without_fallback_section() {
        let file = write_config("");
        let config = FacadeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("[fallback\napi_key = ");
        let err = FacadeConfig::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
