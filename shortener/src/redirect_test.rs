use super::*;

#[test]
fn found_with_location_forwards() {
    assert_eq!(
        classify(302, Some("https://example.com/page")),
        RedirectOutcome::Forward("https://example.com/page".to_owned())
    );
}

#[test]
fn found_without_location_is_invalid() {
    assert_eq!(classify(302, None), RedirectOutcome::Invalid);
    assert_eq!(classify(302, Some("  ")), RedirectOutcome::Invalid);
}

#[test]
fn other_statuses_are_invalid_even_with_location() {
    for status in [200, 301, 303, 307, 404, 500] {
        assert_eq!(classify(status, Some("https://example.com")), RedirectOutcome::Invalid, "{status}");
    }
}

#[test]
fn short_link_joins_without_double_slash() {
    assert_eq!(short_link("http://localhost:3000/", "abc123"), "http://localhost:3000/abc123");
    assert_eq!(short_link("https://sho.rt", "/abc123"), "https://sho.rt/abc123");
}

#[test]
fn plausible_short_codes() {
    assert!(is_plausible_short_code("abc123"));
    assert!(is_plausible_short_code("a_b-C"));
    assert!(!is_plausible_short_code(""));
    assert!(!is_plausible_short_code("favicon.ico"));
    assert!(!is_plausible_short_code("a/b"));
}
