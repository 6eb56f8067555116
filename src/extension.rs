//! The extension registrar.
//!
//! `Bulma` owns the configuration and the CDN registry and performs the two
//! registration side effects: mounting the asset routes on an [`axum::Router`]
//! and installing templates on a host [`tera::Tera`] instance.

use std::sync::Arc;

use axum::Router;
use tera::Tera;
use tracing::debug;

use crate::cdn::CdnRegistry;
use crate::config::BulmaConfig;
use crate::error::BulmaError;
use crate::{routes, templates};

/// The Bulma extension.
///
/// ```no_run
/// use axum::Router;
/// use axum_bulma::Bulma;
///
/// # fn main() -> Result<(), axum_bulma::BulmaError> {
/// let bulma = Bulma::new();
///
/// let app = bulma.attach(Router::new());
///
/// let mut tera = tera::Tera::default();
/// bulma.register_templates(&mut tera)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Bulma {
    config: Arc<BulmaConfig>,
    cdns: Arc<CdnRegistry>,
}

impl Bulma {
    /// Extension with default configuration.
    pub fn new() -> Self {
        Self::with_config(BulmaConfig::default())
    }

    /// Extension with explicit configuration.
    pub fn with_config(config: BulmaConfig) -> Self {
        let cdns = Arc::new(CdnRegistry::with_defaults(&config));
        Self {
            config: Arc::new(config),
            cdns,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &BulmaConfig {
        &self.config
    }

    /// The named CDN resolvers.
    pub fn cdns(&self) -> &CdnRegistry {
        &self.cdns
    }

    /// URL prefix the bundled assets are mounted under.
    pub fn mount_path(&self) -> String {
        self.config.extension_mount()
    }

    /// Nest the asset routes on `router` and return it.
    ///
    /// Attach once per router: axum itself rejects a second nest at the same
    /// path, the same way a host framework rejects duplicate registration.
    #[must_use]
    pub fn attach(&self, router: Router) -> Router {
        let mount = self.mount_path();
        debug!(mount = %mount, "mounting bulma assets");
        router.nest(&mount, routes::asset_router())
    }

    /// Install the bundled templates and the `bulma_resource` function on a
    /// host `Tera` instance. Idempotent.
    pub fn register_templates(&self, tera: &mut Tera) -> Result<(), BulmaError> {
        debug!(base = templates::BASE_TEMPLATE, "registering bulma templates");
        templates::register(tera, self.config.clone(), self.cdns.clone())
    }

    /// Resolve an asset filename to a URL. Template-side equivalent:
    /// `bulma_resource`.
    pub fn find_resource(
        &self,
        filename: &str,
        cdn: &str,
        use_minified: Option<bool>,
        local: bool,
    ) -> Result<String, BulmaError> {
        self.cdns
            .find_resource(&self.config, filename, cdn, use_minified, local)
    }
}

impl Default for Bulma {
    fn default() -> Self {
        Self::new()
    }
}
