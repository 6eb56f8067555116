//! Error types for the extension's fallible paths.

use std::path::PathBuf;

/// Errors surfaced by the Bulma extension.
#[derive(Debug, thiserror::Error)]
pub enum BulmaError {
    /// A resource lookup named a CDN that is not in the registry.
    #[error("unknown CDN '{name}'")]
    UnknownCdn { name: String },

    /// Template registration or rendering failed in Tera.
    #[error("template error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    /// An embedded template was not valid UTF-8.
    #[error("embedded template '{name}' is not valid UTF-8")]
    TemplateEncoding { name: String },

    /// A config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A config file could not be parsed.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
