//! Typed errors for the generator.
//!
//! Stage-level code returns `anyhow::Result`; these enums are the domain
//! conditions callers may want to match on.

use std::path::PathBuf;
use thiserror::Error;

/// Why a candidate tag was dropped by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagRejection {
    #[error("blank resource qualifier")]
    Blank,

    #[error("'{subtag}' in '{candidate}' is not a known language code")]
    UnknownLanguage { candidate: String, subtag: String },

    #[error("'{subtag}' in '{candidate}' is not a known script code")]
    UnknownScript { candidate: String, subtag: String },

    #[error("'{subtag}' in '{candidate}' is not a known region code")]
    UnknownRegion { candidate: String, subtag: String },
}

impl TagRejection {
    /// The candidate string that was rejected (empty for blank input).
    pub fn candidate(&self) -> &str {
        match self {
            TagRejection::Blank => "",
            TagRejection::UnknownLanguage { candidate, .. }
            | TagRejection::UnknownScript { candidate, .. }
            | TagRejection::UnknownRegion { candidate, .. } => candidate,
        }
    }
}

/// Message carried by [`TagNotFound`], also baked into generated modules.
pub const TAG_NOT_FOUND_MESSAGE: &str = "The supplied language tag was not found in your supported locales. \
Did you add it to the 'resourceConfigurations' property of your gradle build settings?";

/// Lookup of a tag that is not one of the supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", TAG_NOT_FOUND_MESSAGE)]
pub struct TagNotFound;

/// Failure to read the `tag,endonym` hand-off list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListParseError {
    #[error("line {line}: expected 'tag,endonym', got '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: empty language tag")]
    EmptyTag { line: usize },
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{key} has unsupported value '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure to load locale display data from disk.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no English display names found under {0}")]
    MissingEnglish(PathBuf),
}
