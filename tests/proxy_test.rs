use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use etsyproxy::{
    api,
    management::TokenManager,
    types::{ListingsQuery, Token},
};

// Stub Etsy: one shop ("testshop") with three active listings, so limit 2
// yields a page of two and a page of one.

async fn shops(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("shop_name").map(String::as_str) == Some("testshop") {
        Json(json!({"count": 1, "results": [{"shop_id": 1, "shop_name": "testshop"}]}))
    } else {
        Json(json!({"count": 0, "results": []}))
    }
}

async fn active_listings(
    Path(_shop_id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let offset: u64 = params
        .get("offset")
        .and_then(|o| o.parse().ok())
        .unwrap_or(0);
    let results = if offset == 0 {
        json!([{"listing_id": 11}, {"listing_id": 12}])
    } else {
        json!([{"listing_id": 13}])
    };
    Json(json!({"count": 3, "results": results}))
}

async fn listings_batch(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let ids = params.get("listing_ids").cloned().unwrap_or_default();
    let results: Vec<Value> = ids
        .split(',')
        .map(|id| {
            json!({
                "listing_id": id.parse::<u64>().unwrap_or(0),
                "title": format!("Listing {}", id),
                "url": format!("https://www.etsy.com/listing/{}", id),
                "price": {"amount": 1234, "divisor": 100},
                "images": [{"listing_image_id": 1}]
            })
        })
        .collect();
    Json(json!({"results": results}))
}

async fn oauth_token(Extension(refreshes): Extension<Arc<AtomicUsize>>) -> Json<Value> {
    let n = refreshes.fetch_add(1, Ordering::SeqCst) + 1;
    Json(json!({
        "access_token": format!("access-{}", n),
        "refresh_token": format!("refresh-{}", n),
        "token_type": "Bearer",
        "expires_in": 3600
    }))
}

async fn start_stub_etsy(refreshes: Arc<AtomicUsize>) -> std::net::SocketAddr {
    let app = Router::new()
        .route("/shops", get(shops))
        .route("/shops/{shop_id}/listings/active", get(active_listings))
        .route("/listings/batch", get(listings_batch))
        .route("/oauth/token", post(oauth_token).layer(Extension(refreshes)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn query(shop_name: &str, limit: u64, page: u64) -> Option<Json<ListingsQuery>> {
    Some(Json(ListingsQuery {
        shop_name: Some(shop_name.to_string()),
        limit: Some(limit),
        page: Some(page),
    }))
}

#[tokio::test]
async fn test_proxy_paginates_and_refreshes_once_per_invocation() {
    let refreshes = Arc::new(AtomicUsize::new(0));
    let addr = start_stub_etsy(Arc::clone(&refreshes)).await;

    unsafe {
        std::env::set_var(
            "XDG_DATA_HOME",
            std::env::temp_dir().join("etsyproxy-proxy-test"),
        );
        std::env::set_var("ETSY_API_URL", format!("http://{}", addr));
        std::env::set_var("ETSY_TOKEN_URL", format!("http://{}/oauth/token", addr));
        std::env::set_var("ETSY_CLIENT_ID", "test-client");
        std::env::set_var("ETSY_SHOP_NAME", "testshop");
    }

    let tokens = Arc::new(Mutex::new(TokenManager::new(Token {
        access_token: "bootstrap-access".to_string(),
        refresh_token: "bootstrap-refresh".to_string(),
    })));

    // First page: two of the three listings, pointer to page 1
    let page = api::listings(Extension(Arc::clone(&tokens)), query("testshop", 2, 0))
        .await
        .expect("first page should succeed")
        .0;
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.next_page, 1);
    assert_eq!(page.results[0].price, "$12.34");
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(tokens.lock().await.access_token(), "access-1");

    // Second page: the remaining listing, pointer wraps to 0
    let page = api::listings(Extension(Arc::clone(&tokens)), query("testshop", 2, 1))
        .await
        .expect("second page should succeed")
        .0;
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.next_page, 0);
    assert_eq!(refreshes.load(Ordering::SeqCst), 2);

    // Unknown shop: the fetch fails with 502 but the refresh still ran,
    // rotating the pair a third time
    let (status, _) = api::listings(Extension(Arc::clone(&tokens)), query("ghost", 2, 0))
        .await
        .expect_err("unknown shop surfaces an error");
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(refreshes.load(Ordering::SeqCst), 3);
    assert_eq!(tokens.lock().await.access_token(), "access-3");
}
