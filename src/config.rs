//! Extension configuration.
//!
//! All fields default to the values a plain `Bulma::new()` uses, so a consuming
//! application only spells out what it changes. Config files are TOML and may be
//! partial; missing keys fall back to defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::BulmaError;

/// Version of the bundled Bulma distribution. Also used for cache-busting
/// query strings and the default web CDN path.
pub const BULMA_VERSION: &str = "0.9.4";

/// jQuery version resolved through the `jquery` CDN entry. Not bundled.
pub const JQUERY_VERSION: &str = "3.3.1";

/// Configuration for the Bulma extension.
#[derive(Debug, Clone, Deserialize)]
pub struct BulmaConfig {
    /// Rewrite resource filenames to their `.min.` variants when resolving URLs.
    #[serde(default = "default_true")]
    pub use_minified: bool,

    /// Append a `?bulma=<version>` query string to locally served assets so a
    /// version bump invalidates HTTP caches.
    #[serde(default = "default_true")]
    pub querystring_revving: bool,

    /// Serve assets from the bundled files instead of the web CDN.
    #[serde(default = "default_true")]
    pub serve_local: bool,

    /// The host application's static URL prefix. Bundled assets mount under
    /// `{static_url_path}/bulma`.
    #[serde(default = "default_static_url_path")]
    pub static_url_path: String,

    /// Web CDN root for Bulma when `serve_local` is off. Filenames are appended
    /// verbatim, so the value should end with a slash. Protocol-relative URLs
    /// (`//…`) are upgraded to `https://` at resolution time.
    #[serde(default = "default_cdn_base_url")]
    pub cdn_base_url: String,
}

impl Default for BulmaConfig {
    fn default() -> Self {
        Self {
            use_minified: true,
            querystring_revving: true,
            serve_local: true,
            static_url_path: default_static_url_path(),
            cdn_base_url: default_cdn_base_url(),
        }
    }
}

impl BulmaConfig {
    /// Load configuration from a TOML file. Missing keys use defaults; a
    /// missing or malformed file is an error.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, BulmaError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| BulmaError::ConfigIo {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| BulmaError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(?path, "loaded bulma config");
        Ok(config)
    }

    /// URL prefix the bundled assets are mounted under.
    pub fn extension_mount(&self) -> String {
        format!("{}/bulma", self.static_url_path.trim_end_matches('/'))
    }
}

fn default_true() -> bool {
    true
}

fn default_static_url_path() -> String {
    "/static".to_string()
}

fn default_cdn_base_url() -> String {
    format!("//cdn.jsdelivr.net/npm/bulma@{BULMA_VERSION}/")
}
