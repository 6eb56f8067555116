//! Resource URL resolution through named CDN strategies.
//!
//! Each resolver turns an asset filename into a URL. The registry holds four
//! named entries mirroring the extension's wiring:
//!
//! - `local` — the extension's own mount (`{static_url_path}/bulma`)
//! - `static` — the host application's static prefix
//! - `bulma` / `jquery` — web CDNs that fall back to `local` while
//!   `serve_local` is enabled

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::{BulmaConfig, BULMA_VERSION, JQUERY_VERSION};
use crate::error::BulmaError;

/// Registry entry used when no CDN is named, and when a lookup opts out of
/// local serving.
pub const DEFAULT_CDN: &str = "static";

/// A URL resolution strategy for asset filenames.
pub trait Cdn: fmt::Debug + Send + Sync {
    /// Resolve `filename` to a URL under this CDN.
    fn resource_url(&self, config: &BulmaConfig, filename: &str) -> String;
}

/// Serves files from a static URL prefix on this application.
#[derive(Debug)]
pub struct StaticCdn {
    prefix: String,
    rev: bool,
}

impl StaticCdn {
    /// A resolver rooted at `prefix`. When `rev` is set, resolved URLs carry a
    /// `?bulma=<version>` query string if `querystring_revving` is enabled.
    pub fn new(prefix: impl Into<String>, rev: bool) -> Self {
        Self {
            prefix: prefix.into(),
            rev,
        }
    }
}

impl Cdn for StaticCdn {
    fn resource_url(&self, config: &BulmaConfig, filename: &str) -> String {
        let prefix = self.prefix.trim_end_matches('/');
        if filename.is_empty() {
            return prefix.to_string();
        }
        let mut url = format!("{prefix}/{filename}");
        if self.rev && config.querystring_revving {
            url.push_str("?bulma=");
            url.push_str(BULMA_VERSION);
        }
        url
    }
}

/// Serves files from the web. Filenames are appended to the base URL verbatim.
#[derive(Debug)]
pub struct WebCdn {
    base_url: String,
}

impl WebCdn {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Cdn for WebCdn {
    fn resource_url(&self, _config: &BulmaConfig, filename: &str) -> String {
        format!("{}{filename}", self.base_url)
    }
}

/// Picks between two resolvers based on the `serve_local` setting.
#[derive(Debug)]
pub struct ConditionalCdn {
    primary: Arc<dyn Cdn>,
    fallback: Arc<dyn Cdn>,
}

impl ConditionalCdn {
    /// Use `primary` while `serve_local` is enabled, `fallback` otherwise.
    pub fn new(primary: Arc<dyn Cdn>, fallback: Arc<dyn Cdn>) -> Self {
        Self { primary, fallback }
    }
}

impl Cdn for ConditionalCdn {
    fn resource_url(&self, config: &BulmaConfig, filename: &str) -> String {
        if config.serve_local {
            self.primary.resource_url(config, filename)
        } else {
            self.fallback.resource_url(config, filename)
        }
    }
}

/// Named CDN resolvers for one extension instance.
#[derive(Debug)]
pub struct CdnRegistry {
    entries: HashMap<String, Arc<dyn Cdn>>,
}

impl CdnRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The extension's standard wiring: `local`, `static`, `bulma`, `jquery`.
    pub fn with_defaults(config: &BulmaConfig) -> Self {
        let local: Arc<dyn Cdn> = Arc::new(StaticCdn::new(config.extension_mount(), true));
        let host_static: Arc<dyn Cdn> = Arc::new(StaticCdn::new(config.static_url_path.clone(), false));

        let bulma_web: Arc<dyn Cdn> = Arc::new(WebCdn::new(config.cdn_base_url.clone()));
        let jquery_web: Arc<dyn Cdn> = Arc::new(WebCdn::new(format!(
            "//cdn.jsdelivr.net/npm/jquery@{JQUERY_VERSION}/dist/"
        )));

        let mut registry = Self::new();
        registry.insert("bulma", Arc::new(ConditionalCdn::new(local.clone(), bulma_web)));
        registry.insert("jquery", Arc::new(ConditionalCdn::new(local.clone(), jquery_web)));
        registry.insert("local", local);
        registry.insert("static", host_static);
        registry
    }

    /// Register (or replace) a named resolver.
    pub fn insert(&mut self, name: impl Into<String>, cdn: Arc<dyn Cdn>) {
        self.entries.insert(name.into(), cdn);
    }

    /// Look up a resolver by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Cdn>> {
        self.entries.get(name)
    }

    /// Resolve `filename` to a URL.
    ///
    /// - `use_minified`: `None` honors the config's `use_minified` setting.
    ///   Minification rewrites the last extension: `bulma.css` → `bulma.min.css`.
    ///   Filenames without an extension are left unchanged.
    /// - `local`: when `false`, resolution goes through the `static` entry
    ///   regardless of the named CDN, so the host application serves the file.
    ///
    /// Protocol-relative results (`//…`) are upgraded to `https://`.
    pub fn find_resource(
        &self,
        config: &BulmaConfig,
        filename: &str,
        cdn: &str,
        use_minified: Option<bool>,
        local: bool,
    ) -> Result<String, BulmaError> {
        let use_minified = use_minified.unwrap_or(config.use_minified);
        let filename = if use_minified {
            minified_name(filename)
        } else {
            filename.to_string()
        };

        let entry = if local { cdn } else { DEFAULT_CDN };
        let resolver = self.get(entry).ok_or_else(|| BulmaError::UnknownCdn {
            name: entry.to_string(),
        })?;

        let url = resolver.resource_url(config, &filename);
        Ok(match url.strip_prefix("//") {
            Some(rest) => format!("https://{rest}"),
            None => url,
        })
    }
}

impl Default for CdnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite `name.ext` to `name.min.ext`. Names without a `.` pass through.
fn minified_name(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}.min.{ext}"),
        None => filename.to_string(),
    }
}
