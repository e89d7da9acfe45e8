use reqwest::Client;
use serde_json::Value;

use crate::{
    config, info,
    types::{BatchListingsResponse, ListingSummary, ListingsPage},
    utils,
};

use super::shops;

/// Retrieves detailed information for multiple listings in a single request.
///
/// Fetches full listing detail including the `Images` include for a batch
/// of listing ids. Combining the page's ids into one call keeps the proxy
/// at a fixed number of upstream round trips per invocation.
///
/// # Arguments
///
/// * `token` - Valid access token for Etsy API authentication
/// * `listing_ids` - The ids of every listing on the current page
pub async fn get_listings_batch(
    token: &str,
    listing_ids: &[u64],
) -> Result<BatchListingsResponse, String> {
    let ids = listing_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{uri}/listings/batch?listing_ids={ids}&includes=Images",
        uri = config::etsy_api_url(),
        ids = ids
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
        .json::<BatchListingsResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// Assembles one proxy page for a shop: resolve the name, fetch one page of
/// active listings, batch-fetch their detail and reshape each entry into a
/// compact summary.
///
/// `next_page` wraps to 0 after the last page rather than signalling
/// end-of-data; consumers cycle back to the first page.
///
/// # Errors
///
/// Returns the first upstream failure (lookup, page fetch or batch fetch)
/// as an error string, so the caller can tell a failed fetch apart from a
/// shop that simply has no listings.
pub async fn get_shop_listings_page(
    token: &str,
    shop_name: &str,
    limit: u64,
    page: u64,
) -> Result<ListingsPage, String> {
    let shop_id = shops::get_shop_id(token, shop_name).await?;
    let active = shops::get_active_listings(token, shop_id, limit, limit * page).await?;

    let next_page = utils::next_page(active.count, limit, page);

    let listing_ids: Vec<u64> = active.results.iter().map(|l| l.listing_id).collect();
    if listing_ids.is_empty() {
        return Ok(ListingsPage {
            results: Vec::new(),
            next_page,
        });
    }

    let detailed = get_listings_batch(token, &listing_ids).await?;

    let results = detailed
        .results
        .into_iter()
        .map(|listing| ListingSummary {
            price: utils::format_price(listing.price.amount, listing.price.divisor),
            title: listing.title,
            url: listing.url,
            image: listing.images.into_iter().next().unwrap_or(Value::Null),
        })
        .collect();

    Ok(ListingsPage { results, next_page })
}
