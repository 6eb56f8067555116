//! # Bulma demo server
//!
//! Minimal axum application showing the full integration contract: attach the
//! extension, register templates, render a page that extends the base template.
//!
//! ```bash
//! cargo run --bin bulma-demo --features demo
//! BULMA_DEMO_ADDR=0.0.0.0:8080 cargo run --bin bulma-demo --features demo
//! ```

use std::env;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tera::{Context, Tera};
use tracing::{error, info};

use axum_bulma::Bulma;

const INDEX_TEMPLATE: &str = r#"{% extends "bulma/base.html.tera" %}
{% block title %}axum-bulma demo{% endblock title %}
{% block navbar %}
<nav class="navbar is-primary" role="navigation">
  <div class="navbar-brand"><a class="navbar-item" href="/">axum-bulma</a></div>
</nav>
{% endblock navbar %}
{% block content %}
<section class="section">
  <div class="container">
    <h1 class="title">Hello, Bulma</h1>
    <p class="subtitle">Served by axum, rendered by Tera.</p>
    <a class="button is-primary" href="{{ css_url }}">View the stylesheet</a>
  </div>
</section>
{% endblock content %}"#;

#[derive(Clone, Debug)]
struct AppState {
    tera: Arc<Tera>,
    bulma: Bulma,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bulma = Bulma::new();

    let mut tera = Tera::default();
    bulma.register_templates(&mut tera)?;
    tera.add_raw_template("index.html.tera", INDEX_TEMPLATE)?;

    let state = AppState {
        tera: Arc::new(tera),
        bulma: bulma.clone(),
    };

    let app = bulma.attach(Router::new().route("/", get(index)).with_state(state));

    let addr = env::var("BULMA_DEMO_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Bulma demo server listening on http://{addr}");
    info!("   Assets mounted at {}", bulma.mount_path());
    info!("   Press Ctrl+C to shut down");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Demo server shutdown complete");
    Ok(())
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let mut context = Context::new();
    let css_url = state
        .bulma
        .find_resource("css/bulma.css", "bulma", None, true)
        .map_err(|e| {
            error!(error = %e, "failed to resolve stylesheet URL");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    context.insert("css_url", &css_url);

    state
        .tera
        .render("index.html.tera", &context)
        .map(Html)
        .map_err(|e| {
            error!(error = %e, "failed to render index");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
