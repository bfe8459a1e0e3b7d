use dotenvy::dotenv;
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod handlers {
    pub mod admissions_proxy;
    pub mod relay_error;
}

use config::Config;
use handlers::admissions_proxy;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    http_client: reqwest::Client,
    upstream_url: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/admissions-proxy", any(admissions_proxy::relay_inquiry))
        // Legacy path baked into already published pages.
        .route("/admissions-proxy.php", any(admissions_proxy::relay_inquiry))
        // Inquiries are forwarded whole, whatever their size.
        .layer(DefaultBodyLimit::disable())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let state = Arc::new(AppState {
        http_client: reqwest::Client::new(),
        upstream_url: config.upstream_url.clone(),
    });

    let mut app = build_router(state);
    if let Some(dir) = &config.static_dir {
        info!("Serving landing page from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    info!("Relaying admission inquiries to {}", config.upstream_url);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_answers_ok() {
        let state = Arc::new(AppState {
            http_client: reqwest::Client::new(),
            upstream_url: config::DEFAULT_UPSTREAM_URL.to_string(),
        });
        let response = build_router(state)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }
}
