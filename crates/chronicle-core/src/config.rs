//! Site configuration management.
//!
//! The host binary reads `chronicle.toml`; the browser only ever sees the
//! [`SiteSettings`] subset, served as JSON.

#[cfg(feature = "loader")]
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Chronicle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// External article API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Admin panel settings.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Host server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, shown in the header and the document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Short description for meta tags.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Categories listed in the header navigation.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

/// External article API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the article API (e.g., "http://127.0.0.1:8000").
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

/// Admin panel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// How long a status message stays visible, in milliseconds.
    #[serde(default = "default_status_message_ms")]
    pub status_message_ms: u64,
}

/// Host server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_address")]
    pub address: String,

    /// Directory holding the compiled bundle (`pkg/` lives below it).
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

/// Browser-facing settings, served by the host as `/site-config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site title.
    pub title: String,

    /// Short description.
    pub tagline: String,

    /// Base URL of the article API.
    pub api_base_url: String,

    /// Categories listed in the header navigation.
    #[serde(default)]
    pub categories: Vec<String>,

    /// How long an admin status message stays visible, in milliseconds.
    #[serde(default = "default_status_message_ms")]
    pub status_message_ms: u64,
}

// Default value functions
fn default_title() -> String {
    "The Absurd Chronicle".to_string()
}

fn default_tagline() -> String {
    "AI-Generated Satire. Mostly.".to_string()
}

fn default_categories() -> Vec<String> {
    ["India", "World", "Business", "Tech", "Sports", "Entertainment"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_status_message_ms() -> u64 {
    3000
}

fn default_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_root() -> String {
    "target/site".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            categories: default_categories(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            status_message_ms: default_status_message_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            site_root: default_site_root(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Config::default().site_settings()
    }
}

impl Config {
    /// Load configuration from a TOML file.
    #[cfg(feature = "loader")]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration layered with `CHRONICLE__SECTION__KEY` environment
    /// overrides. A missing file is not an error; defaults fill the gaps.
    #[cfg(feature = "loader")]
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("CHRONICLE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.api.base_url.trim().is_empty() {
            return Err(CoreError::config("api.base_url cannot be empty"));
        }

        if self.api.base_url.ends_with('/') {
            tracing::warn!("api.base_url should not have a trailing slash");
        }

        if self.admin.status_message_ms == 0 {
            return Err(CoreError::config(
                "admin.status_message_ms must be greater than zero",
            ));
        }

        Ok(())
    }

    /// The subset of the configuration the browser needs.
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            title: self.site.title.clone(),
            tagline: self.site.tagline.clone(),
            api_base_url: self.api.base_url.trim_end_matches('/').to_string(),
            categories: self.site.categories.clone(),
            status_message_ms: self.admin.status_message_ms,
        }
    }
}

impl SiteSettings {
    /// How long an admin status message stays visible.
    pub fn status_message_delay(&self) -> Duration {
        Duration::from_millis(self.status_message_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.title, "The Absurd Chronicle");
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.admin.status_message_ms, 3000);
        assert_eq!(config.site.categories.len(), 6);
        assert_eq!(config.site.categories[0], "India");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_site_settings_strip_trailing_slash() {
        let mut config = Config::default();
        config.api.base_url = "https://api.example.com/".to_string();

        let settings = config.site_settings();
        assert_eq!(settings.api_base_url, "https://api.example.com");
        assert_eq!(settings.status_message_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_validation_rejects_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url cannot be empty"));
    }

    #[test]
    fn test_validation_rejects_zero_status_delay() {
        let mut config = Config::default();
        config.admin.status_message_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_settings_json_fills_optional_fields() {
        let json = r#"{
            "title": "Chronicle",
            "tagline": "Satire",
            "api_base_url": "http://localhost:8000"
        }"#;

        let settings: SiteSettings = serde_json::from_str(json).unwrap();
        assert!(settings.categories.is_empty());
        assert_eq!(settings.status_message_ms, 3000);
    }

    #[cfg(feature = "loader")]
    mod loader {
        use std::io::Write;

        use super::super::*;

        fn create_test_config() -> String {
            r#"
[site]
title = "Test Chronicle"
tagline = "Mostly true"
categories = ["World", "Tech"]

[api]
base_url = "https://api.example.com"

[admin]
status_message_ms = 1500

[server]
address = "0.0.0.0:8080"
site_root = "dist"
"#
            .to_string()
        }

        #[test]
        fn test_load_config() {
            let dir = tempfile::tempdir().expect("create temp dir");
            let config_path = dir.path().join("chronicle.toml");
            let mut file = std::fs::File::create(&config_path).expect("create file");
            file.write_all(create_test_config().as_bytes())
                .expect("write");

            let config = Config::load(&config_path).expect("load config");

            assert_eq!(config.site.title, "Test Chronicle");
            assert_eq!(config.site.tagline, "Mostly true");
            assert_eq!(config.site.categories, vec!["World", "Tech"]);
            assert_eq!(config.api.base_url, "https://api.example.com");
            assert_eq!(config.admin.status_message_ms, 1500);
            assert_eq!(config.server.address, "0.0.0.0:8080");
            assert_eq!(config.server.site_root, "dist");
        }

        #[test]
        fn test_config_defaults() {
            let dir = tempfile::tempdir().expect("create temp dir");
            let config_path = dir.path().join("chronicle.toml");
            std::fs::write(&config_path, "[site]\ntitle = \"Minimal\"\n").expect("write");

            let config = Config::load(&config_path).expect("load config");

            assert_eq!(config.site.title, "Minimal");
            assert_eq!(config.site.categories.len(), 6);
            assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
            assert_eq!(config.server.site_root, "target/site");
        }

        #[test]
        fn test_config_validation_empty_title() {
            let dir = tempfile::tempdir().expect("create temp dir");
            let config_path = dir.path().join("chronicle.toml");
            std::fs::write(&config_path, "[site]\ntitle = \"\"\n").expect("write");

            let result = Config::load(&config_path);
            assert!(result.is_err());
            assert!(
                result
                    .unwrap_err()
                    .to_string()
                    .contains("title cannot be empty")
            );
        }

        #[test]
        fn test_malformed_config_is_toml_error() {
            let dir = tempfile::tempdir().expect("create temp dir");
            let config_path = dir.path().join("chronicle.toml");
            std::fs::write(&config_path, "[site
title = ").expect("write");

            let err = Config::load(&config_path).unwrap_err();
            assert!(matches!(err, CoreError::Toml(_)));
            assert!(err.to_string().starts_with("TOML parse error"));
        }

        #[test]
        fn test_config_not_found() {
            let result = Config::load(Path::new("/nonexistent/chronicle.toml"));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("not found"));
        }

        #[test]
        fn test_load_with_env_tolerates_missing_file() {
            let dir = tempfile::tempdir().expect("create temp dir");
            let config_path = dir.path().join("missing.toml");

            let config = Config::load_with_env(&config_path).expect("defaults");
            assert_eq!(config.site.title, "The Absurd Chronicle");
        }

        #[test]
        fn test_load_with_env_reads_file() {
            let dir = tempfile::tempdir().expect("create temp dir");
            let config_path = dir.path().join("chronicle.toml");
            std::fs::write(&config_path, create_test_config()).expect("write");

            let config = Config::load_with_env(&config_path).expect("load config");
            assert_eq!(config.api.base_url, "https://api.example.com");
            assert_eq!(config.admin.status_message_ms, 1500);
        }
    }
}
