use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, management::TokenManager, types::PkceSession};

/// Runs the short-lived OAuth callback listener. Etsy redirects to the bare
/// redirect URI by default, so the handler is mounted on `/` as well as
/// `/callback`.
pub async fn start_callback_server(state: Arc<Mutex<Option<PkceSession>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/", get(api::callback))
        .route("/callback", get(api::callback))
        .layer(Extension(state));

    serve(&config::callback_addr(), app).await;
}

/// Runs the listings proxy server with the shared token manager.
pub async fn start_proxy_server(address: &str, tokens: Arc<Mutex<TokenManager>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/listings", post(api::listings).layer(Extension(tokens)));

    serve(address, app).await;
}

async fn serve(address: &str, app: Router) {
    let addr = match SocketAddr::from_str(address) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
