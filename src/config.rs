// src/config.rs

//! Loads codec settings from TOML and resolves them into a `CodecConfig`.

use crate::core::codec::{CodecConfig, charset};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for the JSON column codec, the `[json]` table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonConfig {
    /// Encoding label for drivers that exchange bytes, e.g. `"utf-8"` or `"latin1"`.
    /// Unset means values travel as native text.
    #[serde(default)]
    pub output_encoding: Option<String>,
    /// Store a logical null as storage NULL instead of the JSON literal `null`.
    #[serde(default)]
    pub none_as_null: bool,
}

/// Represents the validated settings file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: JsonConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: JsonConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the settings to ensure they can be turned into a `CodecConfig`.
    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }
        if let Some(label) = &self.json.output_encoding {
            if label.trim().is_empty() {
                return Err(anyhow!("json.output_encoding cannot be empty"));
            }
            charset::resolve_label(label)
                .with_context(|| format!("json.output_encoding '{label}' is not usable"))?;
        }
        Ok(())
    }

    /// Builds the codec configuration with the standard JSON strategy bound.
    pub fn codec_config(&self) -> Result<CodecConfig> {
        let config = CodecConfig::new().with_none_as_null(self.json.none_as_null);
        match &self.json.output_encoding {
            Some(label) => Ok(config.with_output_encoding(label)?),
            None => Ok(config),
        }
    }
}
