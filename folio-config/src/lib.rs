//! Configuration for the folio tools.
//!
//! Settings resolve in three layers, later ones winning:
//!
//! 1. `defaults/folio.default.toml`, embedded into the binary
//! 2. [`PROJECT_FILE`] in the working directory, when present
//! 3. the file passed with `--config`, which must exist
//!
//! [`Loader::layered`] builds exactly that stack; the individual `with_*`
//! methods are there for tests and other embedders.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use folio_babel::{Mode, PreviewOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TOML: &str = include_str!("../defaults/folio.default.toml");

/// Per-project settings file picked up from the working directory.
pub const PROJECT_FILE: &str = "folio.toml";

/// Top-level configuration consumed by folio applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FolioConfig {
    pub preview: PreviewConfig,
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// External preview settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub poll_interval_ms: u64,
    pub debounce_ms: u64,
    pub title: String,
    pub open_browser: bool,
    pub dir: String,
    pub watch_interval_ms: u64,
}

impl PreviewConfig {
    /// Directory preview files are written to.
    pub fn dir(&self) -> PathBuf {
        if self.dir.is_empty() {
            std::env::temp_dir().join("folio")
        } else {
            PathBuf::from(&self.dir)
        }
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_millis(self.watch_interval_ms)
    }
}

impl From<&PreviewConfig> for PreviewOptions {
    fn from(config: &PreviewConfig) -> Self {
        PreviewOptions {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            debounce: Duration::from_millis(config.debounce_ms),
            title: config.title.clone(),
        }
    }
}

impl From<PreviewConfig> for PreviewOptions {
    fn from(config: PreviewConfig) -> Self {
        PreviewOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_mode: Mode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Stacks TOML sources over the embedded folio defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// The stack the `folio` binary uses: defaults, then [`PROJECT_FILE`] if
    /// it exists, then `explicit` (from `--config`) if given.
    pub fn layered(explicit: Option<&Path>) -> Self {
        let loader = Self::new().with_optional_file(PROJECT_FILE);
        match explicit {
            Some(path) => loader.with_file(path),
            None => loader,
        }
    }

    /// Layer a TOML file that must exist, e.g. the one named by `--config`.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that is skipped when absent, like [`PROJECT_FILE`].
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `preview.debounce_ms`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize them into a [`FolioConfig`].
    ///
    /// Unknown mode tokens and malformed values are reported here.
    pub fn build(self) -> Result<FolioConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<FolioConfig, ConfigError> {
    Loader::new().build()
}
