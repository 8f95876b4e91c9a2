use super::actions::{handle_invoke, handle_render};
use super::enhance::handle_enhance;
use super::handlers::{
    handle_create_session, handle_health, handle_list_actions, handle_readable,
};
use super::wizard::{handle_step, handle_submit, handle_update_fields, handle_wizard};
use super::{AppState, MAX_BODY_SIZE, REQUEST_TIMEOUT_SECS};

use crate::config::Config;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, StatusCode, header},
    routing::{get, patch, post},
};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
pub fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the HTTP gateway on `host:port`.
pub async fn run_gateway(host: &str, port: u16, config: &Config) -> Result<()> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the gateway has no authentication.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("parse gateway bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(host, listener, AppState::from_config(config), config).await
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    state: AppState,
    config: &Config,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    if config.resolved_api_key().is_none() {
        tracing::warn!("no API key configured; /api/enhance will fail until one is set");
    }
    print_gateway_banner(&display_addr);
    tracing::info!(addr = %display_addr, "gateway listening");

    let app = build_app(state, &config.gateway.cors_origins);
    axum::serve(listener, app)
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

fn print_gateway_banner(display_addr: &str) {
    println!("Gateway listening on {display_addr}");
    println!("  GET   /health");
    println!("  POST  /api/enhance");
    println!("  GET   /api/actions");
    println!("  POST  /api/sessions");
    println!("  GET   /api/sessions/{{id}}/readable");
    println!("  GET   /api/sessions/{{id}}/wizard");
    println!("  PATCH /api/sessions/{{id}}/wizard/fields");
    println!("  POST  /api/sessions/{{id}}/wizard/step");
    println!("  POST  /api/sessions/{{id}}/wizard/submit");
    println!("  POST  /api/sessions/{{id}}/actions");
    println!("  POST  /api/sessions/{{id}}/actions/render");
}

/// All routes with body limit, timeout and CORS applied. The relay streams
/// for as long as the upstream does, so it sits outside the timeout.
pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    let bounded = Router::new()
        .route("/health", get(handle_health))
        .route("/api/actions", get(handle_list_actions))
        .route("/api/sessions", post(handle_create_session))
        .route("/api/sessions/{id}/readable", get(handle_readable))
        .route("/api/sessions/{id}/wizard", get(handle_wizard))
        .route("/api/sessions/{id}/wizard/fields", patch(handle_update_fields))
        .route("/api/sessions/{id}/wizard/step", post(handle_step))
        .route("/api/sessions/{id}/wizard/submit", post(handle_submit))
        .route("/api/sessions/{id}/actions", post(handle_invoke))
        .route("/api/sessions/{id}/actions/render", post(handle_render))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ));

    let mut app = Router::new()
        .route("/api/enhance", post(handle_enhance))
        .merge(bounded)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE));

    if !cors_origins.is_empty() {
        let origins: Vec<_> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    app
}
