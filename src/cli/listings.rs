use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, etsy, info,
    management::TokenManager,
    types::ListingTableRow,
    warning,
};

/// Fetches one page of active listings and prints it as a table.
///
/// Uses the same page-assembly path as the proxy endpoint, including the
/// refresh-and-persist of the token pair after the fetch.
pub async fn listings(shop_name: Option<String>, limit: u64, page: u64) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token pair. Please run etsyproxy auth\n Error: {}",
                e
            );
        }
    };

    let shop_name = shop_name.unwrap_or_else(config::etsy_shop_name);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching listings for {}...", shop_name));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let token = token_mgr.access_token().to_string();
    let page_result = etsy::listings::get_shop_listings_page(&token, &shop_name, limit, page).await;
    pb.finish_and_clear();

    // Same contract as the proxy: refresh the pair after every fetch
    if let Err(e) = token_mgr.refresh().await {
        warning!("Token refresh failed: {}", e);
    }

    match page_result {
        Ok(listings_page) => {
            let table_rows: Vec<ListingTableRow> = listings_page
                .results
                .into_iter()
                .map(|l| ListingTableRow {
                    title: l.title,
                    price: l.price,
                    url: l.url,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
            info!("Next page: {}", listings_page.next_page);
        }
        Err(e) => error!("Failed to fetch listings: {}", e),
    }
}
