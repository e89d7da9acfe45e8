use reqwest::Client;

use crate::{
    config, info,
    types::{ActiveListingsResponse, ShopsResponse},
};

/// Resolves a shop name to its stable numeric shop id.
///
/// Calls the shop-lookup endpoint and takes the first result, matching how
/// the storefront consumer expects name resolution to behave. Resolution
/// happens fresh on every request; nothing is cached.
///
/// # Arguments
///
/// * `token` - Valid access token for Etsy API authentication
/// * `shop_name` - Shop name as shown in the storefront URL
///
/// # Errors
///
/// Returns an error string on network failure, a non-2xx upstream status,
/// a malformed response, or when no shop matches the name. Any of these
/// fails the whole proxy request.
pub async fn get_shop_id(token: &str, shop_name: &str) -> Result<u64, String> {
    let api_url = format!(
        "{uri}/shops?shop_name={shop_name}",
        uri = config::etsy_api_url(),
        shop_name = shop_name
    );
    info!("GET {}", api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .header("x-api-key", config::etsy_client_id())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let res = response
        .json::<ShopsResponse>()
        .await
        .map_err(|e| e.to_string())?;

    res.results
        .first()
        .map(|shop| shop.shop_id)
        .ok_or_else(|| format!("no shop found for name {}", shop_name))
}

/// Retrieves one page of active listings for a shop.
///
/// Fetches up to `limit` listing references starting at `offset`, along
/// with the total active-listing count the caller needs for pagination
/// arithmetic. Limit and offset are forwarded as-is; out-of-range values
/// surface whatever error Etsy returns.
pub async fn get_active_listings(
    token: &str,
    shop_id: u64,
    limit: u64,
    offset: u64,
) -> Result<ActiveListingsResponse, String> {
    let api_url = format!(
        "{uri}/shops/{shop_id}/listings/active?limit={limit}&offset={offset}",
        uri = config::etsy_api_url(),
        shop_id = shop_id,
        limit = limit,
        offset = offset
    );
    info!("GET {}", api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .header("x-api-key", config::etsy_client_id())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    response
        .json::<ActiveListingsResponse>()
        .await
        .map_err(|e| e.to_string())
}
