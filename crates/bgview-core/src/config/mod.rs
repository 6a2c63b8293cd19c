//! # bgview Configuration
//!
//! Settings consumed by the plugin registry: which plugins are enabled,
//! which ones the caller wants shown, and the per-plugin extended settings.
//!
//! Settings files may be JSON, YAML (feature `yaml-config`) or TOML (feature
//! `toml-config`); the format is picked from the file extension. `enable`
//! and `show_plugins` accept either a list or the space-separated form used
//! by environment variables (`ENABLE="careportal iob cob"`).
pub mod error;

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::sandbox::BasicSandbox;

pub use error::ConfigError;

/// Configuration contract read by the enablement filter.
pub trait EnableConfig {
    /// Names of the plugins that should be enabled
    fn enable(&self) -> &[String];

    /// Whether `name` appears in the enable list (exact match)
    fn is_enabled(&self, name: &str) -> bool {
        self.enable().iter().any(|n| n == name)
    }
}

impl EnableConfig for [String] {
    fn enable(&self) -> &[String] {
        self
    }
}

impl EnableConfig for Vec<String> {
    fn enable(&self) -> &[String] {
        self
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Plugin-related application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Plugins to enable
    #[serde(deserialize_with = "deserialize_names")]
    pub enable: Vec<String>,
    /// Plugins the caller asked to show; `None` when no hint was given
    #[serde(alias = "showPlugins", deserialize_with = "deserialize_optional_names")]
    pub show_plugins: Option<Vec<String>>,
    /// Per-plugin settings keyed by plugin name (plus `devicestatus`)
    #[serde(alias = "extendedSettings")]
    pub extended_settings: Map<String, Value>,
}

impl Settings {
    /// Settings that enable the given plugins and nothing else
    pub fn with_enable<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enable: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Deserialize from string based on format
    pub fn from_str_with_format(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| {
                ConfigError::DeserializationError {
                    format: "JSON".to_string(),
                    source: Box::new(e),
                }
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| {
                ConfigError::DeserializationError {
                    format: "YAML".to_string(),
                    source: Box::new(e),
                }
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| {
                ConfigError::DeserializationError {
                    format: "TOML".to_string(),
                    source: Box::new(e),
                }
            }),
        }
    }

    /// Load settings from a file, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedConfigFormat(path.to_path_buf()))?;
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            operation: "read_settings".to_string(),
            source,
        })?;
        let settings = Self::from_str_with_format(&data, format)?;
        log::debug!(
            "Loaded settings from {} ({} enabled plugins)",
            path.display(),
            settings.enable.len()
        );
        Ok(settings)
    }

    /// Build a sandbox carrying this configuration's show hint and extended settings
    pub fn sandbox(&self) -> BasicSandbox {
        let sbx = BasicSandbox::new().with_extended(self.extended_settings.clone());
        match &self.show_plugins {
            Some(names) => sbx.with_show_plugins(names.iter().cloned()),
            None => sbx,
        }
    }
}

impl EnableConfig for Settings {
    fn enable(&self) -> &[String] {
        &self.enable
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameList {
    Joined(String),
    List(Vec<String>),
}

impl NameList {
    fn into_names(self) -> Vec<String> {
        match self {
            NameList::Joined(joined) => joined.split_whitespace().map(str::to_string).collect(),
            NameList::List(list) => list,
        }
    }
}

fn deserialize_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    NameList::deserialize(deserializer).map(NameList::into_names)
}

fn deserialize_optional_names<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NameList>::deserialize(deserializer).map(|names| names.map(NameList::into_names))
}
