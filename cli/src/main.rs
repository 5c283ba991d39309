//! Command-line client for the URL shortener backend.
//!
//! Credentials and the profile cache live in two JSON files under the state
//! directory, mirroring the browser's `localStorage`/`sessionStorage` split,
//! so `whoami` runs the same session resolution as the web client.

mod store;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use shortener::http::{self, ReqwestAuthApi};
use shortener::input::{self, HTTP_PREFIX, HTTPS_PREFIX, InputError};
use shortener::redirect::{self, RedirectOutcome};
use shortener::requests::{self, DEFAULT_API_BASE_URL};
use shortener::resolver::SystemClock;
use shortener::types::{AuthResponse, CreateShortUrlResponse, TokenBundle, UrlMapping};
use shortener::{ApiError, CredentialRecord, SessionResolver, SessionState, lifecycle};
use tracing_subscriber::EnvFilter;

use crate::store::{FileStore, StoreError};

const CREDENTIALS_FILE: &str = "credentials.json";
const SESSION_FILE: &str = "session.json";
const STATE_DIR_NAME: &str = ".url-shortener";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `login` first")]
    NotSignedIn,
    #[error("no refresh token stored; sign in again")]
    NoRefreshToken,
    #[error("cannot determine state directory; pass --state-dir or set HOME")]
    NoStateDir,
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("request failed: {0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Rejected(String),
    #[error("{0}: invalid or expired")]
    InvalidShortLink(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shorten-cli", about = "URL shortener command-line client")]
struct Cli {
    #[arg(long, env = "SHORTENER_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Origin short links are printed under.
    #[arg(long, env = "SHORTENER_PUBLIC_URL", default_value = "http://localhost:3000")]
    public_url: String,

    /// Defaults to `$HOME/.url-shortener`.
    #[arg(long, env = "SHORTENER_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[arg(long, env = "SHORTENER_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the returned tokens.
    Login {
        username: String,
        #[arg(long, env = "SHORTENER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHORTENER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget stored credentials and the cached profile.
    Logout,
    /// Resolve the stored session and print who is signed in.
    Whoami,
    /// Ask the backend to validate the stored access token.
    Validate,
    /// Exchange the refresh token for a new token pair.
    Refresh,
    /// Shorten a URL.
    Shorten {
        url: String,
        /// Scheme prepended when `url` has none.
        #[arg(long, value_enum, default_value_t = Protocol::Https)]
        protocol: Protocol,
    },
    /// List your short URLs.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one short URL with its click count.
    Stats { short_code: String },
    /// Delete a short URL.
    Delete { short_code: String },
    /// Print where a short code redirects.
    Resolve { short_code: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Protocol {
    Https,
    Http,
}

impl Protocol {
    fn prefix(self) -> &'static str {
        match self {
            Self::Https => HTTPS_PREFIX,
            Self::Http => HTTP_PREFIX,
        }
    }
}

struct CliContext {
    base_url: String,
    public_url: String,
    client: reqwest::Client,
    durable: FileStore,
    session: FileStore,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let state_dir = resolve_state_dir(cli.state_dir, std::env::var_os("HOME"))?;
    tracing::debug!(state_dir = %state_dir.display(), base_url = %cli.base_url, "starting");

    let ctx = CliContext {
        base_url: cli.base_url.trim_end_matches('/').to_owned(),
        public_url: cli.public_url,
        client: http::build_client(Duration::from_secs(cli.timeout_secs))?,
        durable: FileStore::open(state_dir.join(CREDENTIALS_FILE))?,
        session: FileStore::open(state_dir.join(SESSION_FILE))?,
    };

    run(&ctx, cli.command).await
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => {
            let req = input::login_request(&username, &password)?;
            let bundle: TokenBundle = http::send_json(&ctx.client, &requests::login(&ctx.base_url, &req)).await?;
            let state = lifecycle::sign_in(&ctx.durable, &ctx.session, &req.username, &bundle);
            println!("Login successful! {}", describe_state(&state));
            Ok(())
        }
        Command::Register { username, email, password } => {
            let req = input::register_request(&username, &password, &email)?;
            let bundle: TokenBundle = http::send_json(&ctx.client, &requests::register(&ctx.base_url, &req)).await?;
            let state = lifecycle::sign_in(&ctx.durable, &ctx.session, &req.username, &bundle);
            println!("Registration successful! {}", describe_state(&state));
            Ok(())
        }
        Command::Logout => {
            lifecycle::sign_out(&ctx.durable, &ctx.session);
            if let Err(e) = http::send_empty(&ctx.client, &requests::logout(&ctx.base_url)).await {
                tracing::debug!(error = %e, "logout notification failed");
            }
            println!("Logged out successfully!");
            Ok(())
        }
        Command::Whoami => {
            let api = ReqwestAuthApi::new(ctx.client.clone(), ctx.base_url.clone());
            let state = SessionResolver::new(&ctx.durable, &ctx.session, &api, &SystemClock)
                .resolve()
                .await;
            println!("{}", describe_state(&state));
            Ok(())
        }
        Command::Validate => {
            let creds = require_credentials(ctx)?;
            let resp: AuthResponse =
                http::send_json(&ctx.client, &requests::validate_token(&ctx.base_url, &creds.access_token)).await?;
            print_json(&resp)
        }
        Command::Refresh => {
            let creds = require_credentials(ctx)?;
            let refresh = creds.refresh_token.as_deref().ok_or(CliError::NoRefreshToken)?;
            let bundle: TokenBundle =
                http::send_json(&ctx.client, &requests::refresh_token(&ctx.base_url, refresh)).await?;
            let record = lifecycle::replace_tokens(&ctx.durable, &creds, &bundle);
            println!("tokens refreshed for {}", record.username);
            Ok(())
        }
        Command::Shorten { url, protocol } => {
            let req = input::create_url_request(protocol.prefix(), &url)?;
            let creds = require_credentials(ctx)?;
            let resp: CreateShortUrlResponse =
                http::send_json(&ctx.client, &requests::create_short_url(&ctx.base_url, &creds, &req)).await?;
            let code = created_code(resp)?;
            println!("{}", redirect::short_link(&ctx.public_url, &code));
            Ok(())
        }
        Command::List { json } => {
            let creds = require_credentials(ctx)?;
            let items: Vec<UrlMapping> =
                http::send_json(&ctx.client, &requests::list_urls(&ctx.base_url, creds.user_id.as_deref())).await?;
            if json {
                return print_json(&items);
            }
            if items.is_empty() {
                println!("No URLs yet");
            }
            for mapping in &items {
                println!("{}", format_row(&ctx.public_url, mapping));
            }
            Ok(())
        }
        Command::Stats { short_code } => {
            let creds = require_credentials(ctx)?;
            let request = requests::url_stats(&ctx.base_url, creds.user_id.as_deref(), &short_code);
            let mapping: UrlMapping = http::send_json(&ctx.client, &request).await?;
            print_json(&mapping)
        }
        Command::Delete { short_code } => {
            let creds = require_credentials(ctx)?;
            let request = requests::delete_url(&ctx.base_url, creds.user_id.as_deref(), &short_code);
            http::send_empty(&ctx.client, &request).await?;
            println!("URL deleted successfully!");
            Ok(())
        }
        Command::Resolve { short_code } => {
            match http::resolve_short_code(&ctx.client, &ctx.base_url, &short_code).await {
                RedirectOutcome::Forward(location) => {
                    println!("{location}");
                    Ok(())
                }
                RedirectOutcome::Invalid => Err(CliError::InvalidShortLink(short_code)),
            }
        }
    }
}

fn require_credentials(ctx: &CliContext) -> Result<CredentialRecord, CliError> {
    CredentialRecord::load(&ctx.durable).ok_or(CliError::NotSignedIn)
}

fn resolve_state_dir(explicit: Option<PathBuf>, home: Option<OsString>) -> Result<PathBuf, CliError> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    home.filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(STATE_DIR_NAME))
        .ok_or(CliError::NoStateDir)
}

/// Short code of a created URL, or the backend's rejection message.
fn created_code(resp: CreateShortUrlResponse) -> Result<String, CliError> {
    match resp.short_url {
        Some(code) if resp.success => Ok(code),
        _ => Err(CliError::Rejected(
            resp.message.unwrap_or_else(|| "Failed to create short URL".to_owned()),
        )),
    }
}

fn describe_state(state: &SessionState) -> String {
    match state {
        SessionState::Authenticated { username } => format!("signed in as {username}"),
        SessionState::Unauthenticated => "not signed in".to_owned(),
        SessionState::Loading => "resolving session".to_owned(),
    }
}

fn format_row(public_url: &str, mapping: &UrlMapping) -> String {
    let created = mapping
        .created_at
        .as_deref()
        .and_then(|ts| ts.split(['T', ' ']).next())
        .filter(|d| !d.is_empty())
        .unwrap_or("-");
    format!(
        "{}\t{}\t{}\t{}",
        redirect::short_link(public_url, &mapping.short_url),
        mapping.click_count,
        created,
        mapping.original_url
    )
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
