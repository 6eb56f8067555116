//! Axum routes serving the bundled assets.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::assets::{content_type, BulmaAssets};

/// Assets are versioned by the crate, so far-future caching is safe.
const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Router serving the embedded Bulma assets. [`Bulma::attach`] nests this
/// under `{static_url_path}/bulma`; it is public for hosts that want to mount
/// the assets elsewhere.
///
/// [`Bulma::attach`]: crate::Bulma::attach
pub fn asset_router() -> Router {
    Router::new()
        .route("/{*path}", get(serve_asset))
        .layer(TraceLayer::new_for_http())
}

async fn serve_asset(Path(path): Path<String>) -> Response {
    match BulmaAssets::get(&path) {
        Some(file) => {
            let headers = [
                (header::CONTENT_TYPE, content_type(&path)),
                (header::CACHE_CONTROL, ASSET_CACHE_CONTROL.to_string()),
            ];
            (StatusCode::OK, headers, file.data.into_owned()).into_response()
        }
        None => {
            debug!(asset = %path, "bulma asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
