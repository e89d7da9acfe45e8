use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error, info, management::TokenManager, server};

/// Runs the listings proxy server until terminated.
pub async fn serve(address: String) {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token pair. Please run etsyproxy auth\n Error: {}",
                e
            );
        }
    };

    info!("Serving shop listings proxy on {}", address);
    server::start_proxy_server(&address, Arc::new(Mutex::new(token_mgr))).await;
}
