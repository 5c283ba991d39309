use super::*;

fn mapping(created_at: Option<&str>) -> UrlMapping {
    UrlMapping {
        id: Some(1),
        user_id: Some(42),
        original_url: "https://example.com/a/long/path".to_owned(),
        short_url: "abc123".to_owned(),
        created_at: created_at.map(str::to_owned),
        expiration_date: None,
        click_count: 7,
    }
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn shorten_defaults_to_https() {
    let cli = Cli::try_parse_from(["shorten-cli", "shorten", "example.com"]).unwrap();
    match cli.command {
        Command::Shorten { url, protocol } => {
            assert_eq!(url, "example.com");
            assert_eq!(protocol.prefix(), "https://");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn shorten_accepts_http_protocol() {
    let cli = Cli::try_parse_from(["shorten-cli", "shorten", "example.com", "--protocol", "http"]).unwrap();
    assert!(matches!(cli.command, Command::Shorten { protocol: Protocol::Http, .. }));
}

#[test]
fn global_flags_parse() {
    let cli = Cli::try_parse_from([
        "shorten-cli",
        "--base-url",
        "http://api.test",
        "--state-dir",
        "/tmp/state",
        "resolve",
        "abc123",
    ])
    .unwrap();
    assert_eq!(cli.base_url, "http://api.test");
    assert_eq!(cli.state_dir, Some(PathBuf::from("/tmp/state")));
    assert!(matches!(cli.command, Command::Resolve { ref short_code } if short_code == "abc123"));
}

#[test]
fn register_requires_email() {
    assert!(Cli::try_parse_from(["shorten-cli", "register", "alice", "--password", "secret1"]).is_err());
}

// =============================================================================
// HELPERS
// =============================================================================

#[test]
fn state_dir_prefers_explicit_path() {
    let dir = resolve_state_dir(Some(PathBuf::from("/srv/state")), Some(OsString::from("/home/a"))).unwrap();
    assert_eq!(dir, PathBuf::from("/srv/state"));
}

#[test]
fn state_dir_defaults_under_home() {
    let dir = resolve_state_dir(None, Some(OsString::from("/home/a"))).unwrap();
    assert_eq!(dir, PathBuf::from("/home/a/.url-shortener"));
}

#[test]
fn state_dir_without_home_is_an_error() {
    assert!(matches!(resolve_state_dir(None, None), Err(CliError::NoStateDir)));
    assert!(matches!(resolve_state_dir(None, Some(OsString::new())), Err(CliError::NoStateDir)));
}

#[test]
fn created_code_requires_success_and_code() {
    let ok = CreateShortUrlResponse { short_url: Some("abc".to_owned()), success: true, ..Default::default() };
    assert_eq!(created_code(ok).unwrap(), "abc");

    let rejected = CreateShortUrlResponse { message: Some("URL already exists".to_owned()), ..Default::default() };
    assert_eq!(created_code(rejected).unwrap_err().to_string(), "URL already exists");

    let missing = CreateShortUrlResponse { success: true, ..Default::default() };
    assert_eq!(created_code(missing).unwrap_err().to_string(), "Failed to create short URL");
}

#[test]
fn describe_state_wording() {
    assert_eq!(describe_state(&SessionState::authenticated("alice")), "signed in as alice");
    assert_eq!(describe_state(&SessionState::Unauthenticated), "not signed in");
}

#[test]
fn format_row_uses_public_link_and_date_part() {
    let row = format_row("http://localhost:3000/", &mapping(Some("2024-03-05T10:20:30")));
    assert_eq!(row, "http://localhost:3000/abc123\t7\t2024-03-05\thttps://example.com/a/long/path");
}

#[test]
fn format_row_without_date() {
    let row = format_row("http://localhost:3000", &mapping(None));
    assert!(row.contains("\t-\t"));
}

#[test]
fn invalid_short_link_message() {
    assert_eq!(CliError::InvalidShortLink("zzz".to_owned()).to_string(), "zzz: invalid or expired");
}
