//! Bundled Bulma static files, embedded at compile time.

use rust_embed::RustEmbed;

/// Embedded asset directory (`assets/` at the crate root).
#[derive(Debug, RustEmbed)]
#[folder = "assets/"]
pub struct BulmaAssets;

/// Paths of all bundled assets, relative to the extension mount.
pub fn asset_names() -> impl Iterator<Item = String> {
    BulmaAssets::iter().map(|name| name.to_string())
}

/// Content type for an asset path, falling back to `application/octet-stream`.
pub(crate) fn content_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}
