//! Result and Error types for the crate.
use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result containing an [`Error`] from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two configuration roots a file was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Main,
    Overlay,
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKind::Main => write!(f, "main"),
            ConfigKind::Overlay => write!(f, "overlay"),
        }
    }
}

/// Error that occurred while handling the configuration named `name`.
#[derive(Error, Diagnostic, Debug)]
#[error("`{name}`: {kind}")]
pub struct Error {
    pub name: &'static str,
    #[diagnostic_source]
    pub kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(name: &'static str, kind: ErrorKind) -> Self {
        Self { name, kind }
    }
}

/// Configuration error variants
#[derive(Error, Diagnostic, Debug)]
pub enum ErrorKind {
    /// The file could not be read.
    #[error("failed to read {config_kind} config from `{path}`")]
    #[diagnostic(
        code(odal::load),
        help("does the {config_kind} config directory contain this file?")
    )]
    Load {
        path: String,
        config_kind: ConfigKind,
        #[source]
        source: std::io::Error,
    },

    /// The file was read, but is not valid TOML.
    #[error("failed to parse {config_kind} config `{path}`")]
    #[diagnostic(code(odal::parse))]
    Parse {
        path: String,
        config_kind: ConfigKind,
        #[source]
        source: toml::de::Error,
    },

    /// The (merged) table does not match the configuration struct.
    #[error("config does not match its definition")]
    #[diagnostic(code(odal::deserialize))]
    Deserialize(#[source] toml::de::Error),

    /// The configuration struct could not be turned into a table.
    #[error("failed to serialize config")]
    #[diagnostic(code(odal::serialize))]
    Serialize(#[source] toml::ser::Error),

    /// The configuration serialized to something other than a table.
    #[error("config does not serialize to a table")]
    #[diagnostic(code(odal::serialize))]
    NotATable,

    /// The file could not be written.
    #[error("failed to store config at `{path}`")]
    #[diagnostic(code(odal::store))]
    Store {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
