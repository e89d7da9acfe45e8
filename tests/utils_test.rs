use etsyproxy::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier(128);

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier(128);
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_verifier_honors_requested_length() {
    for length in [44, 64, 100, 129] {
        assert_eq!(generate_code_verifier(length).len(), length);
    }
}

#[test]
#[should_panic]
fn test_generate_code_verifier_rejects_lower_bound() {
    // The accepted range is strict on both ends; 43 is rejected
    generate_code_verifier(43);
}

#[test]
#[should_panic]
fn test_generate_code_verifier_rejects_upper_bound() {
    generate_code_verifier(130);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // A base64url-encoded SHA-256 digest without padding is 43 characters
    assert_eq!(challenge.len(), 43);
    assert!(!challenge.ends_with('='));

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_state_nonce() {
    let nonce = generate_state_nonce();
    assert_eq!(nonce.len(), 16);
    assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(nonce, generate_state_nonce());
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(1234, 100), "$12.34");
    assert_eq!(format_price(100000, 100), "$1,000.00");
    assert_eq!(format_price(123450, 100), "$1,234.50");
    assert_eq!(format_price(5, 100), "$0.05");
    assert_eq!(format_price(999, 1), "$999.00");
    assert_eq!(format_price(1234567890, 100), "$12,345,678.90");
}

#[test]
fn test_format_price_rounds_ties_to_even() {
    // 0.125 is an exact double; the tie rounds down to the even cent
    assert_eq!(format_price(125, 1000), "$0.12");
    // 0.375 ties up to the even cent
    assert_eq!(format_price(375, 1000), "$0.38");
    // 0.135 is not exactly representable and sits above the halfway point
    assert_eq!(format_price(135, 1000), "$0.14");
}

#[test]
fn test_format_price_shape() {
    // Every formatted price matches ^\$\d{1,3}(,\d{3})*\.\d{2}$
    for amount in [1, 12, 1200, 99999, 100000, 123456789] {
        let price = format_price(amount, 100);
        let rest = price.strip_prefix('$').expect("prices start with $");
        let (whole, cents) = rest.split_once('.').expect("prices have a decimal point");
        assert_eq!(cents.len(), 2);
        assert!(cents.chars().all(|c| c.is_ascii_digit()));

        let groups: Vec<&str> = whole.split(',').collect();
        assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            assert_eq!(group.len(), 3);
        }
    }
}

#[test]
fn test_next_page_advances_until_last_page() {
    // 3 listings at limit 2 -> 2 pages
    assert_eq!(next_page(3, 2, 0), 1);
    assert_eq!(next_page(3, 2, 1), 0);
}

#[test]
fn test_next_page_wraps_to_first_page() {
    // 24 listings at limit 12 -> pages 0 and 1, then back around
    assert_eq!(next_page(24, 12, 1), 0);

    // Exactly one page wraps immediately
    assert_eq!(next_page(5, 12, 0), 0);

    // An empty shop has no pages to advance to
    assert_eq!(next_page(0, 12, 0), 0);
}

#[test]
fn test_next_page_zero_limit_has_no_pages() {
    // A zero limit must not panic; there is nothing to advance through
    assert_eq!(next_page(3, 0, 0), 0);
    assert_eq!(next_page(0, 0, 7), 0);
}

#[test]
fn test_next_page_full_cycle() {
    // 25 listings at limit 12 -> 3 pages; pointers cycle 1, 2, 0
    assert_eq!(next_page(25, 12, 0), 1);
    assert_eq!(next_page(25, 12, 1), 2);
    assert_eq!(next_page(25, 12, 2), 0);
}
