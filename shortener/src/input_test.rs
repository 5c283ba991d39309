use super::*;

#[test]
fn normalize_prepends_selected_protocol_when_missing() {
    assert_eq!(normalize_url(HTTPS_PREFIX, "  example.com/a  "), "https://example.com/a");
    assert_eq!(normalize_url(HTTP_PREFIX, "example.com"), "http://example.com");
}

#[test]
fn normalize_keeps_existing_scheme_case_insensitively() {
    assert_eq!(normalize_url(HTTPS_PREFIX, "http://example.com"), "http://example.com");
    assert_eq!(normalize_url(HTTP_PREFIX, "HTTPS://Example.com"), "HTTPS://Example.com");
}

#[test]
fn create_url_request_rejects_blank_input() {
    assert_eq!(create_url_request(HTTPS_PREFIX, "   "), Err(InputError::EmptyUrl));
    assert_eq!(InputError::EmptyUrl.to_string(), "Please enter a URL");
}

#[test]
fn create_url_request_accepts_bare_domain() {
    let req = create_url_request(HTTPS_PREFIX, "example.com/very/long").expect("valid");
    assert_eq!(req.original_url, "https://example.com/very/long");
}

#[test]
fn create_url_request_rejects_unparseable_url() {
    let err = create_url_request(HTTPS_PREFIX, "exa mple.com").expect_err("invalid");
    assert_eq!(err.to_string(), "Please enter a valid URL");
}

#[test]
fn login_request_trims_username_but_not_password() {
    let req = login_request("  alice ", " secret ").expect("valid");
    assert_eq!(req.username, "alice");
    assert_eq!(req.password, " secret ");
}

#[test]
fn login_request_reports_first_missing_field() {
    let err = login_request("", "").expect_err("invalid");
    assert_eq!(err, InputError::Invalid { field: "username", message: "Username is required".to_owned() });

    let err = login_request("alice", "").expect_err("invalid");
    assert_eq!(err.to_string(), "Password is required");
}

#[test]
fn register_request_validates_each_field() {
    assert!(register_request("alice", "secret1", "alice@example.com").is_ok());

    let short_name = register_request("al", "secret1", "alice@example.com").expect_err("short");
    assert_eq!(short_name.to_string(), "Username must be 3-50 characters");

    let short_password = register_request("alice", "12345", "alice@example.com").expect_err("short");
    assert_eq!(short_password.to_string(), "Password must be at least 6 characters");

    let bad_email = register_request("alice", "secret1", "not-an-email").expect_err("email");
    assert_eq!(bad_email.to_string(), "Please enter a valid email");
}

#[test]
fn register_request_trims_email() {
    let req = register_request("alice", "secret1", "  alice@example.com ").expect("valid");
    assert_eq!(req.email, "alice@example.com");
}
