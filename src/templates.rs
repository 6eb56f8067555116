//! Template registration for a host `Tera` instance.
//!
//! Installs the embedded base template and the `bulma_resource` function.
//! Registration is idempotent: re-adding a raw template or re-registering a
//! function replaces the previous entry.

use std::collections::HashMap;
use std::sync::Arc;

use rust_embed::RustEmbed;
use tera::{Tera, Value};
use tracing::debug;

use crate::cdn::{CdnRegistry, DEFAULT_CDN};
use crate::config::BulmaConfig;
use crate::error::BulmaError;

/// Name consuming templates use in their `extends` directive.
pub const BASE_TEMPLATE: &str = "bulma/base.html.tera";

/// Embedded template directory (`templates/` at the crate root).
#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateSources;

/// Add the bundled templates and the `bulma_resource` function to `tera`.
pub(crate) fn register(
    tera: &mut Tera,
    config: Arc<BulmaConfig>,
    cdns: Arc<CdnRegistry>,
) -> Result<(), BulmaError> {
    for name in TemplateSources::iter() {
        if let Some(file) = TemplateSources::get(&name) {
            let source =
                std::str::from_utf8(&file.data).map_err(|_| BulmaError::TemplateEncoding {
                    name: name.to_string(),
                })?;
            tera.add_raw_template(&name, source)?;
            debug!(template = %name, "registered bulma template");
        }
    }

    tera.register_function("bulma_resource", resource_fn(config, cdns));
    Ok(())
}

/// The `bulma_resource` Tera function.
///
/// Arguments: `filename` (required string), `cdn` (default `"static"`),
/// `use_minified` (optional bool, defaults to the config setting), `local`
/// (default `true`).
fn resource_fn(
    config: Arc<BulmaConfig>,
    cdns: Arc<CdnRegistry>,
) -> impl Fn(&HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |args: &HashMap<String, Value>| {
        let filename = args
            .get("filename")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("bulma_resource requires a string `filename` argument"))?;
        let cdn = args.get("cdn").and_then(Value::as_str).unwrap_or(DEFAULT_CDN);
        let use_minified = args.get("use_minified").and_then(Value::as_bool);
        let local = args.get("local").and_then(Value::as_bool).unwrap_or(true);

        let url = cdns
            .find_resource(&config, filename, cdn, use_minified, local)
            .map_err(|e| tera::Error::msg(e.to_string()))?;
        Ok(Value::String(url))
    }
}
