//! Bulma CSS integration for axum and Tera.
//!
//! This crate wires the [Bulma](https://bulma.io) CSS framework into an axum
//! application: it serves bundled Bulma assets under the host's static prefix,
//! installs a base page template that application templates extend, and
//! registers a `bulma_resource` template function that resolves asset
//! filenames to URLs through a configurable CDN layer.
//!
//! # Modules
//!
//! - [`extension`] — the [`Bulma`] registrar: router mount + template install
//! - [`config`] — [`BulmaConfig`] (TOML-loadable, fully defaulted)
//! - [`cdn`] — named URL resolvers (`local`, `static`, `bulma`, `jquery`)
//! - [`assets`] — the embedded Bulma files
//! - [`templates`] — base template and `bulma_resource` registration
//! - [`error`] — [`BulmaError`]
//!
//! # Quick start
//!
//! ```no_run
//! use axum::Router;
//! use axum_bulma::Bulma;
//!
//! # fn main() -> Result<(), axum_bulma::BulmaError> {
//! let bulma = Bulma::new();
//! let app = bulma.attach(Router::new());
//!
//! let mut tera = tera::Tera::default();
//! bulma.register_templates(&mut tera)?;
//! # Ok(())
//! # }
//! ```
//!
//! Application templates extend the base:
//!
//! ```text
//! {% extends "bulma/base.html.tera" %}
//! {% block title %}Home{% endblock title %}
//! {% block content %}<section class="section">…</section>{% endblock content %}
//! ```

pub mod assets;
pub mod cdn;
pub mod config;
pub mod error;
pub mod extension;
pub mod routes;
pub mod templates;

pub use config::{BulmaConfig, BULMA_VERSION, JQUERY_VERSION};
pub use error::BulmaError;
pub use extension::Bulma;
pub use templates::BASE_TEMPLATE;
