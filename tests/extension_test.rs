//! End-to-end registration tests: mount the extension on a router, install
//! templates on a host Tera instance, and exercise the integration contract.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tera::{Context, Tera};
use tower::ServiceExt;

use axum_bulma::{Bulma, BulmaConfig, BASE_TEMPLATE, BULMA_VERSION};

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn registration_succeeds_on_fresh_app() {
    let bulma = Bulma::new();
    let _app = bulma.attach(Router::new());

    let mut tera = Tera::default();
    bulma.register_templates(&mut tera).unwrap();
    assert!(tera.get_template_names().any(|n| n == BASE_TEMPLATE));
}

#[tokio::test]
async fn bundled_assets_reachable_under_static_prefix() {
    let app = Bulma::new().attach(Router::new());

    let response = get(app, "/static/bulma/css/bulma.min.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(std::str::from_utf8(&body).unwrap().starts_with("/*! bulma.io"));
}

#[tokio::test]
async fn unknown_asset_under_mount_is_404() {
    let app = Bulma::new().attach(Router::new());
    let response = get(app, "/static/bulma/css/missing.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_static_prefix_moves_the_mount() {
    let bulma = Bulma::with_config(BulmaConfig {
        static_url_path: "/public".to_string(),
        ..BulmaConfig::default()
    });
    let app = bulma.attach(Router::new());

    let response = get(app.clone(), "/public/bulma/css/bulma.css").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/static/bulma/css/bulma.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn child_template_extends_base_and_links_assets() {
    let bulma = Bulma::new();
    let mut tera = Tera::default();
    bulma.register_templates(&mut tera).unwrap();

    tera.add_raw_template(
        "home.html.tera",
        r#"{% extends "bulma/base.html.tera" %}
{% block title %}Home{% endblock title %}
{% block content %}<p class="subtitle">Welcome</p>{% endblock content %}"#,
    )
    .unwrap();

    let html = tera.render("home.html.tera", &Context::new()).unwrap();
    assert!(html.contains("<title>Home</title>"));
    assert!(html.contains(r#"<p class="subtitle">Welcome</p>"#));
    assert!(html.contains(&format!(
        "/static/bulma/css/bulma.min.css?bulma={BULMA_VERSION}"
    )));
}

#[tokio::test]
async fn template_registration_is_idempotent() {
    let bulma = Bulma::new();
    let mut tera = Tera::default();
    bulma.register_templates(&mut tera).unwrap();
    bulma.register_templates(&mut tera).unwrap();

    let count = tera.get_template_names().filter(|n| *n == BASE_TEMPLATE).count();
    assert_eq!(count, 1);

    // The function still resolves after re-registration.
    tera.add_raw_template(
        "page.html.tera",
        r#"{{ bulma_resource(filename="css/bulma.css", cdn="local") }}"#,
    )
    .unwrap();
    let url = tera.render("page.html.tera", &Context::new()).unwrap();
    assert!(url.contains("/static/bulma/css/bulma.min.css"));
}

#[tokio::test]
async fn remote_config_renders_cdn_urls() {
    let bulma = Bulma::with_config(BulmaConfig {
        serve_local: false,
        ..BulmaConfig::default()
    });
    let mut tera = Tera::default();
    bulma.register_templates(&mut tera).unwrap();

    tera.add_raw_template(
        "page.html.tera",
        r#"{{ bulma_resource(filename="css/bulma.css", cdn="bulma") }}"#,
    )
    .unwrap();

    let url = tera.render("page.html.tera", &Context::new()).unwrap();
    assert_eq!(
        url.trim(),
        format!("https://cdn.jsdelivr.net/npm/bulma@{BULMA_VERSION}/css/bulma.min.css")
    );
}

#[tokio::test]
async fn config_file_drives_registration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bulma.toml");
    std::fs::write(
        &path,
        "static_url_path = \"/assets\"\nquerystring_revving = false\n",
    )
    .unwrap();

    let bulma = Bulma::with_config(BulmaConfig::from_toml_file(&path).unwrap());
    assert_eq!(bulma.mount_path(), "/assets/bulma");

    let url = bulma
        .find_resource("css/bulma.css", "local", None, true)
        .unwrap();
    assert_eq!(url, "/assets/bulma/css/bulma.min.css");

    let app = bulma.attach(Router::new());
    let response = get(app, "/assets/bulma/css/bulma.min.css").await;
    assert_eq!(response.status(), StatusCode::OK);
}
