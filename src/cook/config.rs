//! Layered configuration
//!
//! `defaults/cook.default.toml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. Applications layer user-specific files on top of those defaults via [Loader]
//! before deserializing into [CookConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/cook.default.toml");

/// Top-level configuration consumed by cook applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CookConfig {
    pub display: DisplayConfig,
    pub units: UnitsConfig,
    pub output: OutputConfig,
}

/// How quantities are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub significant_digits: u32,
}

/// Additions to the built-in unit inflection rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitsConfig {
    #[serde(default)]
    pub invariant: Vec<String>,
    /// singular -> plural
    #[serde(default)]
    pub irregular: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub default_format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CookConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CookConfig, ConfigError> {
    Loader::new().build()
}
