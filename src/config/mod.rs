//! Configuration for rendering defaults.
//!
//! Settings are read from a TOML or YAML file; the format is picked from the
//! file extension. Every field has a default, so an empty file is valid.

use log::info;
use serde_derive::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{Error, Result};
use crate::humanize::{Format, Humanizer, Unit};
use crate::locale::{self, LocaleTable};


pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect configuration format from file path extension.
    /// Returns Yaml for .yaml/.yml files, Toml for everything else.
    pub fn detect(path: &str) -> Self {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
            ConfigFormat::Yaml
        } else {
            ConfigFormat::Toml
        }
    }
}

/// Parse configuration content based on format.
fn parse_config_content<T: serde::de::DeserializeOwned>(
    contents: &str,
    format: ConfigFormat,
) -> Result<T> {
    match format {
        ConfigFormat::Toml => toml::from_str(contents)
            .map_err(|err| Error::BadConfig(format!("TOML parse error: {err}"))),
        ConfigFormat::Yaml => serde_yaml::from_str(contents)
            .map_err(|err| Error::BadConfig(format!("YAML parse error: {err}"))),
    }
}

/// Rendering defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Explicit locale; empty means "detect from `locale_hint`".
    #[serde(default)]
    pub locale: String,

    /// Environment language tag such as `ru_RU.UTF-8`.
    #[serde(default)]
    pub locale_hint: Option<String>,

    #[serde(default)]
    pub format: Format,

    #[serde(default)]
    pub base_unit: Unit,

    /// YAML locale table replacing the built-in one.
    #[serde(default)]
    pub resources: Option<String>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            locale: String::new(),
            locale_hint: None,
            format: Format::default(),
            base_unit: Unit::default(),
            resources: None,
        }
    }
}

impl Settings {
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Settings> {
        parse_config_content(contents, format)
    }

    pub fn load(path: &str) -> Result<Settings> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| Error::BadConfig(format!("failed to read {path}: {err}")))?;
        let settings = Self::parse(&contents, ConfigFormat::detect(path))?;
        info!("Loaded config from {path}");
        Ok(settings)
    }

    /// Locale table these settings ask for: the file named by `resources`,
    /// otherwise the built-in table.
    pub fn locale_table(&self) -> Result<LocaleTable> {
        match &self.resources {
            Some(path) => LocaleTable::load(Path::new(path)),
            None => Ok(LocaleTable::builtin()),
        }
    }

    /// Installs [`Self::locale_table`] as the process-wide catalog unless a
    /// host already installed one, then returns a humanizer over the catalog.
    pub fn install(&self) -> Result<Humanizer<'static>> {
        if locale::catalog_installed() {
            info!("Locale catalog already installed, keeping it");
        } else if !locale::install_catalog(self.locale_table()?) {
            info!("Locale catalog installed concurrently, keeping it");
        }
        Ok(Humanizer::new(locale::catalog()).with_locale_hint(self.locale_hint.clone()))
    }
}
