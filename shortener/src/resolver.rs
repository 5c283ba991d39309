//! Start-up session reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page runs [`SessionResolver::resolve`] once on mount to decide
//! whether to show the login form or the signed-in dashboard.
//!
//! ORDER OF CHECKS
//! ===============
//! 1. Credential record present (access token and username)?
//! 2. Access token decodable as a JWT? Checked locally, whatever the cache holds.
//! 3. Session cache fresh? Trust it without a network call.
//! 4. Access token not expired? (advisory; can only reject)
//! 5. `GET /api/auth/me` with the bearer token; success refreshes the cache.
//!
//! Every failure after step 1 erases the whole credential record and the
//! session cache. No retries:
//! a transient backend failure also signs the user out.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use async_trait::async_trait;

use crate::cache;
use crate::claims;
use crate::credentials::CredentialRecord;
use crate::error::ApiError;
use crate::store::KeyValueStore;
use crate::types::AuthResponse;

/// Authentication state driving the home page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    /// Resolution in progress; authenticated content stays hidden.
    Loading,
    Authenticated {
        username: String,
    },
}

impl SessionState {
    #[must_use]
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self::Authenticated { username: username.into() }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username } => Some(username),
            Self::Unauthenticated | Self::Loading => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The single remote call the resolver is allowed to make.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /api/auth/me` carrying `access_token` as a bearer credential.
    async fn current_user(&self, access_token: &str) -> Result<AuthResponse, ApiError>;
}

/// Wall-clock source in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// [`Clock`] backed by `std::time::SystemTime`. Not available in the browser,
/// where `SystemTime::now` panics.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Resolves the current [`SessionState`] from persisted state.
///
/// `durable` holds the credential record, `session` holds the session cache.
pub struct SessionResolver<'a, D, S, A, C> {
    durable: &'a D,
    session: &'a S,
    api: &'a A,
    clock: &'a C,
}

impl<'a, D, S, A, C> SessionResolver<'a, D, S, A, C>
where
    D: KeyValueStore,
    S: KeyValueStore,
    A: AuthApi,
    C: Clock,
{
    pub fn new(durable: &'a D, session: &'a S, api: &'a A, clock: &'a C) -> Self {
        Self { durable, session, api, clock }
    }

    /// Decide the session state. Never returns [`SessionState::Loading`].
    pub async fn resolve(&self) -> SessionState {
        let Some(credentials) = CredentialRecord::load(self.durable) else {
            tracing::debug!("no stored credentials");
            return SessionState::Unauthenticated;
        };

        let claims = match claims::decode_claims(&credentials.access_token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!(error = %e, "stored access token is malformed");
                return self.invalidate();
            }
        };

        let now = self.clock.now_ms();
        if let Some(profile) = cache::read_fresh(self.session, now) {
            if let Some(username) = profile.verified_username() {
                tracing::debug!(%username, "session restored from cache");
                return SessionState::authenticated(username);
            }
            cache::clear(self.session);
        }

        if claims.is_expired_at(now) {
            tracing::info!(expired_at_ms = claims.expires_at_ms(), "stored access token expired");
            return self.invalidate();
        }

        match self.api.current_user(&credentials.access_token).await {
            Ok(profile) => {
                let Some(username) = profile.verified_username().map(str::to_owned) else {
                    tracing::warn!("current-user response carried no username");
                    return self.invalidate();
                };
                cache::write(self.session, &profile, self.clock.now_ms());
                tracing::info!(%username, "session validated");
                SessionState::Authenticated { username }
            }
            Err(e) => {
                tracing::warn!(error = %e, "session validation failed");
                self.invalidate()
            }
        }
    }

    fn invalidate(&self) -> SessionState {
        CredentialRecord::erase(self.durable);
        cache::clear(self.session);
        SessionState::Unauthenticated
    }
}
