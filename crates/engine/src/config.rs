//! Publishing configuration via `dataspace.toml`
//!
//! A default `dataspace.toml` can be written on first start. To change
//! settings, edit the file and restart.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use dataspace_core::Language;

use crate::error::ConfigError;
use crate::mapping::normalize_language_tag;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "dataspace.toml";

/// Default depth budget for `document_for`
///
/// Five levels fully materialize Catalog → Resource → Representation → App
/// → Endpoint.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default self-link base
pub const DEFAULT_BASE_URL: &str = "https://localhost:8080";

/// Default access URL for endpoints whose location does not parse
pub const DEFAULT_FALLBACK_ACCESS_URL: &str = "https://default-url";

/// How many surviving endpoints a published app carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointSelection {
    /// Every surviving endpoint
    #[default]
    All,
    /// Only the first surviving endpoint, in link order
    First,
}

/// Publishing configuration loaded from `dataspace.toml`
///
/// # Example
///
/// ```toml
/// base_url = "https://connector.example.org"
/// max_depth = 5
/// endpoint_selection = "all"
/// default_language = "en"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Base URL every self-link is built under
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Depth budget for `document_for`
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Endpoint cardinality of published apps
    #[serde(default)]
    pub endpoint_selection: EndpointSelection,
    /// Language used when an entity's language is unknown
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Access URL published for endpoints whose location does not parse
    #[serde(default = "default_fallback_access_url")]
    pub fallback_access_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_language() -> String {
    "en".to_string()
}

fn default_fallback_access_url() -> String {
    DEFAULT_FALLBACK_ACCESS_URL.to_string()
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_depth: default_max_depth(),
            endpoint_selection: EndpointSelection::default(),
            default_language: default_language(),
            fallback_access_url: default_fallback_access_url(),
        }
    }
}

impl PublishConfig {
    /// Parse `base_url`
    ///
    /// # Errors
    ///
    /// The URL must be absolute http(s), without query or fragment.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = parse_http_url("base_url", &self.base_url)?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::InvalidUrl {
                field: "base_url",
                url: self.base_url.clone(),
                reason: "must not carry a query or fragment".to_string(),
            });
        }
        Ok(url)
    }

    /// Parse `fallback_access_url`
    pub fn fallback_access_url(&self) -> Result<Url, ConfigError> {
        parse_http_url("fallback_access_url", &self.fallback_access_url)
    }

    /// Parse `default_language`
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not in the language table.
    pub fn default_language(&self) -> Result<Language, ConfigError> {
        Language::from_code(&normalize_language_tag(&self.default_language))
            .ok_or_else(|| ConfigError::UnknownLanguage(self.default_language.clone()))
    }

    /// Check every field eagerly
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        self.fallback_access_url()?;
        self.default_language()?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Dataspace publishing configuration
#
# Base URL of this connector. Every self-link is <base_url>/api/<kind>/<id>.
base_url = "https://localhost:8080"

# Depth budget for generated documents (default: 5).
# Nodes beyond the budget are published as self-link references only.
max_depth = 5

# Endpoints published per app: "all" (default) or "first"
endpoint_selection = "all"

# Language used when an entity's language is missing or unknown
default_language = "en"

# Access URL published for app endpoints whose location is not a valid URL
fallback_access_url = "https://default-url"
"#
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PublishConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        info!(
            target: "dataspace::config",
            path = %path.display(),
            base_url = %config.base_url,
            max_depth = config.max_depth,
            "Loaded publishing config"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn parse_http_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        field,
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".to_string()));
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(invalid("must be a hierarchical URL with a host".to_string()));
    }
    Ok(url)
}
