use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};
use tower_cookies::CookieManagerLayer;

use crate::{
    api,
    config::Config,
    error, info,
    management::{InMemoryStateRegistry, StateStore},
};

/// How often expired state tokens are swept out of the registry.
const SWEEP_INTERVAL_SECS: u64 = 60;

/// Shared handles available to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub states: Arc<dyn StateStore>,
}

impl AppContext {
    pub fn new(config: Config, states: Arc<dyn StateStore>) -> Self {
        Self {
            config: Arc::new(config),
            states,
        }
    }
}

/// Builds the application router. The landing page and playlist creation sit
/// behind the session gate; the authorization endpoints do not.
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/new-playlist", post(api::new_playlist))
        .route_layer(middleware::from_fn(api::session_gate))
        .route("/auth", get(api::auth))
        .route("/auth-callback", get(api::callback))
        .route("/health", get(api::health))
        .layer(CookieManagerLayer::new())
        .layer(Extension(ctx))
}

pub async fn start_server(config: Config) {
    let port = config.port;
    let ctx = AppContext::new(config, Arc::new(InMemoryStateRegistry::default()));

    let states = Arc::clone(&ctx.states);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            states.sweep().await;
        }
    });

    let app = build_router(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("app listening at http://localhost:{}", port);
    axum::serve(listener, app).await.unwrap();
}
