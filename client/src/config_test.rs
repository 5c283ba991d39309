use super::*;

#[test]
fn resolve_base_url_defaults_when_unset_or_blank() {
    assert_eq!(resolve_base_url(None), "http://localhost:8080");
    assert_eq!(resolve_base_url(Some("   ")), "http://localhost:8080");
}

#[test]
fn resolve_base_url_strips_trailing_slash() {
    assert_eq!(resolve_base_url(Some("https://api.sho.rt/")), "https://api.sho.rt");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn public_origin_falls_back_outside_the_browser() {
    assert_eq!(public_origin(), DEFAULT_PUBLIC_URL);
}
