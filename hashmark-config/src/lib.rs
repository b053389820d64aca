//! Shared configuration loader for the hashmark toolchain.
//!
//! `defaults/hashmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`HashmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use hashmark_babel::formats::html::HtmlOptions;
use hashmark_babel::formats::plain::PlainOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/hashmark.default.toml");

/// Top-level configuration consumed by hashmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HashmarkConfig {
    #[serde(default)]
    pub convert: ConvertConfig,
    pub render: RenderConfig,
    pub inspect: InspectConfig,
}

/// Settings for `hashmark convert`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertConfig {
    /// Output format used when the command line does not pick one.
    #[serde(default)]
    pub default_format: Option<String>,
}

/// Per-format rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub plain: PlainRenderConfig,
    pub html: HtmlRenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlainRenderConfig {
    pub indent_string: String,
}

impl From<&PlainRenderConfig> for PlainOptions {
    fn from(config: &PlainRenderConfig) -> Self {
        PlainOptions {
            indent_string: config.indent_string.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlRenderConfig {
    pub standalone: bool,
    pub title: String,
}

impl From<&HtmlRenderConfig> for HtmlOptions {
    fn from(config: &HtmlRenderConfig) -> Self {
        HtmlOptions {
            standalone: config.standalone,
            title: config.title.clone(),
        }
    }
}

/// Controls `hashmark inspect` output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_spans: bool,
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
    pub fn build(self) -> Result<HashmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HashmarkConfig, ConfigError> {
    Loader::new().build()
}
