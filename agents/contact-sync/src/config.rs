//! Agent configuration
//!
//! Layers, lowest priority first: built-in defaults, an optional config file
//! (TOML, YAML or JSON by extension), then CLI flags and their environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SyncError};

/// Default upstream host serving both endpoints
pub const DEFAULT_BASE_URL: &str = "https://challenge-automation-engineer-xij5xxbepq-uc.a.run.app";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// People list endpoint (GET)
    pub people_url: String,

    /// Contact creation endpoint (POST)
    pub contacts_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_BASE_URL)
    }
}

impl SyncConfig {
    /// Derive both endpoints from one base URL
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            people_url: format!("{}/people/", base),
            contacts_url: format!("{}/contacts/", base),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Resolve defaults, then the optional file, then CLI overrides
    pub fn load(file: Option<&Path>, cli: &ConfigOverrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = file {
            let from_file = ConfigOverrides::from_file(path)?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            config = config.apply(&from_file);
        }

        let config = config.apply(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply one override layer
    ///
    /// A base URL resets both endpoints; explicit endpoint URLs in the same
    /// layer win over it.
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(base_url) = &overrides.base_url {
            let derived = Self::from_base_url(base_url);
            self.people_url = derived.people_url;
            self.contacts_url = derived.contacts_url;
        }
        if let Some(url) = &overrides.people_url {
            self.people_url = url.clone();
        }
        if let Some(url) = &overrides.contacts_url {
            self.contacts_url = url.clone();
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
        self
    }

    /// Reject unusable endpoints and timeouts
    pub fn validate(&self) -> Result<()> {
        validate_url("people_url", &self.people_url)?;
        validate_url("contacts_url", &self.contacts_url)?;

        if self.timeout_ms == 0 {
            return Err(SyncError::config("timeout_ms must be greater than zero"));
        }

        Ok(())
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// One partial configuration layer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub people_url: Option<String>,
    pub contacts_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Read a config file, choosing the format by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SyncError::file(format!("{}: {}", path.display(), e)))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(SyncError::config(format!(
                "Unsupported config file format: {}",
                path.display()
            ))),
        }
    }
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    let url = reqwest::Url::parse(value)
        .map_err(|e| SyncError::config(format!("{} '{}' is not a valid URL: {}", name, value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(SyncError::config(format!(
            "{} must use http or https, got '{}'",
            name, scheme
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_endpoints() {
        let config = SyncConfig::default();
        assert_eq!(config.people_url, format!("{}/people/", DEFAULT_BASE_URL));
        assert_eq!(config.contacts_url, format!("{}/contacts/", DEFAULT_BASE_URL));
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = SyncConfig::from_base_url("http://localhost:9000/");
        assert_eq!(config.people_url, "http://localhost:9000/people/");
        assert_eq!(config.contacts_url, "http://localhost:9000/contacts/");
    }

    #[test]
    fn test_explicit_endpoint_beats_base_url() {
        let overrides = ConfigOverrides {
            base_url: Some("http://localhost:9000".to_string()),
            contacts_url: Some("http://sink.local/api/contacts".to_string()),
            ..Default::default()
        };

        let config = SyncConfig::default().apply(&overrides);
        assert_eq!(config.people_url, "http://localhost:9000/people/");
        assert_eq!(config.contacts_url, "http://sink.local/api/contacts");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SyncConfig::default();
        config.timeout_ms = 0;
        assert!(matches!(config.validate(), Err(SyncError::Config(_))));

        let config = SyncConfig::from_base_url("ftp://example.com");
        assert!(matches!(config.validate(), Err(SyncError::Config(_))));

        let mut config = SyncConfig::default();
        config.people_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(SyncError::Config(_))));
    }

    #[test]
    fn test_load_layers_file_then_cli() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "base_url = \"http://file.local\"").unwrap();
        writeln!(file, "timeout_ms = 2500").unwrap();

        let cli = ConfigOverrides {
            people_url: Some("http://cli.local/people/".to_string()),
            ..Default::default()
        };

        let config = SyncConfig::load(Some(file.path()), &cli).unwrap();
        assert_eq!(config.people_url, "http://cli.local/people/");
        assert_eq!(config.contacts_url, "http://file.local/contacts/");
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn test_yaml_and_json_files() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "timeout_ms: 42").unwrap();
        let overrides = ConfigOverrides::from_file(yaml.path()).unwrap();
        assert_eq!(overrides.timeout_ms, Some(42));

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"people_url": "http://p.local/"}}"#).unwrap();
        let overrides = ConfigOverrides::from_file(json.path()).unwrap();
        assert_eq!(overrides.people_url.as_deref(), Some("http://p.local/"));
    }

    #[test]
    fn test_unknown_keys_and_formats_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "base_uri = \"http://typo.local\"").unwrap();
        assert!(matches!(
            ConfigOverrides::from_file(file.path()),
            Err(SyncError::Parse(_))
        ));

        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            ConfigOverrides::from_file(file.path()),
            Err(SyncError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigOverrides::from_file(Path::new("/nonexistent/contact-sync.toml"))
            .unwrap_err();
        assert!(matches!(err, SyncError::File(_)));
    }
}
