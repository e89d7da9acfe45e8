use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::{
    config, etsy,
    management::TokenManager,
    types::{ListingsPage, ListingsQuery},
    warning,
};

/// Serves one page of a shop's active listings.
///
/// Body fields are optional; a missing body means the configured shop,
/// limit 12, page 0. After the fetch - success or failure - the stored
/// token pair is refreshed and persisted, so every invocation rotates the
/// credentials. A refresh failure is the only 500 this endpoint produces;
/// a failed listing fetch comes back as 502 with an error body, keeping it
/// distinguishable from a shop that has no listings.
pub async fn listings(
    Extension(tokens): Extension<Arc<Mutex<TokenManager>>>,
    body: Option<Json<ListingsQuery>>,
) -> Result<Json<ListingsPage>, (StatusCode, Json<Value>)> {
    let query = body.map(|Json(q)| q).unwrap_or_default();
    let shop_name = query.shop_name.unwrap_or_else(config::etsy_shop_name);
    let limit = query.limit.unwrap_or(12);
    let page = query.page.unwrap_or(0);

    let access_token = { tokens.lock().await.access_token().to_string() };
    let page_result =
        etsy::listings::get_shop_listings_page(&access_token, &shop_name, limit, page).await;

    // Refresh runs regardless of how the fetch went
    if let Err(e) = tokens.lock().await.refresh().await {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("token refresh failed: {}", e) })),
        ));
    }

    match page_result {
        Ok(listings_page) => Ok(Json(listings_page)),
        Err(e) => {
            warning!("Listing fetch failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, Json(json!({ "error": e }))))
        }
    }
}
