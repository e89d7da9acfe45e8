use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

/// Generates a random PKCE code verifier of exactly `length` characters.
///
/// The accepted range is strict on both ends: 43 is rejected, 129 is
/// accepted.
pub fn generate_code_verifier(length: usize) -> String {
    assert!(
        43 < length && length < 130,
        "Code verifier length must be between 43 and 128"
    );

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Derives the S256 code challenge for a verifier: base64url-encoded
/// SHA-256 digest, unpadded (always 43 characters).
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Generates the random state nonce sent on the authorize URL and checked
/// on the callback.
pub fn generate_state_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Formats an Etsy price (amount over divisor) as a dollar string with
/// thousands separators and two decimals, e.g. 123450/100 -> "$1,234.50".
/// Cent rounding is the float formatter's: ties round to even, so
/// 125/1000 is "$0.12".
pub fn format_price(amount: i64, divisor: i64) -> String {
    let value = amount as f64 / divisor as f64;
    let formatted = format!("{:.2}", value);
    let (dollars, cents) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}.{}", grouped, cents)
}

/// Computes the page pointer returned alongside a listings page.
///
/// Pagination wraps: after the last page the pointer goes back to 0 so a
/// storefront carousel can cycle through the catalog indefinitely. A zero
/// limit has no pages to advance through and stays at 0.
pub fn next_page(count: u64, limit: u64, page: u64) -> u64 {
    if limit == 0 {
        return 0;
    }

    let pages = count.div_ceil(limit);
    let next = page + 1;
    if next >= pages { 0 } else { next }
}
