use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// The opaque bearer pair. Token age is never tracked: the pair is rotated
/// wholesale on every proxy invocation rather than on expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
}

/// Everything the callback handler needs to finish the PKCE exchange,
/// carried in shared state instead of process-wide variables.
#[derive(Debug, Clone)]
pub struct PkceSession {
    pub api_key: String,
    pub redirect_uri: String,
    pub code_verifier: String,
    pub state: String,
    pub token: Option<Token>,
}

/// Parameters for one authorization run, resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub api_key: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub verifier_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopsResponse {
    pub results: Vec<Shop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub shop_id: u64,
    pub shop_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveListingsResponse {
    pub count: u64,
    pub results: Vec<ListingRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRef {
    pub listing_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchListingsResponse {
    pub results: Vec<Listing>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: u64,
    pub title: String,
    pub url: String,
    pub price: ListingPrice,
    #[serde(default)]
    pub images: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingPrice {
    pub amount: i64,
    pub divisor: i64,
}

/// Compact listing record returned to proxy callers. The image is the first
/// entry of the upstream `images` include, carried verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSummary {
    pub title: String,
    pub price: String,
    pub url: String,
    pub image: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsPage {
    pub results: Vec<ListingSummary>,
    pub next_page: u64,
}

/// Inbound proxy request body. Every field is optional; absent fields fall
/// back to the configured shop name, limit 12 and page 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingsQuery {
    pub shop_name: Option<String>,
    pub limit: Option<u64>,
    pub page: Option<u64>,
}

#[derive(Tabled)]
pub struct ListingTableRow {
    pub title: String,
    pub price: String,
    pub url: String,
}
