use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use engine_logging::LogDestination;
use log::LevelFilter;
use pdftools_core::{Locale, PdfSetting};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "pdftools.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid {field} in config: {value:?}")]
    Invalid { field: &'static str, value: String },
}

/// Settings read from `pdftools.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) ghostscript: Option<PathBuf>,
    pub(crate) output_dir: PathBuf,
    pub(crate) locale: Option<String>,
    pub(crate) pdf_setting: Option<String>,
    pub(crate) log_destination: String,
    pub(crate) log_level: String,
    /// File the settings came from; `None` when running on defaults.
    #[serde(skip)]
    pub(crate) loaded_from: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ghostscript: None,
            output_dir: PathBuf::from("."),
            locale: None,
            pdf_setting: None,
            log_destination: "file".to_string(),
            log_level: "info".to_string(),
            loaded_from: None,
        }
    }
}

impl AppConfig {
    /// An explicit path must exist; the default file is optional.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        let config: AppConfig = ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            loaded_from: Some(path),
            ..config
        })
    }

    pub(crate) fn locale(&self) -> Result<Option<Locale>, ConfigError> {
        self.locale
            .as_deref()
            .map(|code| Locale::from_code(code).ok_or_else(|| invalid("locale", code)))
            .transpose()
    }

    pub(crate) fn pdf_setting(&self) -> Result<Option<PdfSetting>, ConfigError> {
        self.pdf_setting
            .as_deref()
            .map(|name| PdfSetting::from_name(name).ok_or_else(|| invalid("pdf_setting", name)))
            .transpose()
    }

    pub(crate) fn log_destination(&self) -> Result<LogDestination, ConfigError> {
        LogDestination::from_name(&self.log_destination)
            .ok_or_else(|| invalid("log_destination", &self.log_destination))
    }

    pub(crate) fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| invalid("log_level", &self.log_level))
    }
}

fn invalid(field: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        value: value.to_string(),
    }
}
