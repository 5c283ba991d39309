//! Platform-neutral core of the URL shortener client.
//!
//! This crate owns the wire types shared by `client`, `server` and `cli`, the
//! stateless request builder for the backend API, and the session
//! reconciliation flow that decides whether a visitor is signed in.
//!
//! Browser and filesystem glue live in the consuming crates. Storage, clock and
//! transport are traits here so the flow can run against in-memory fakes. The
//! optional `http` feature adds a `reqwest` transport for native consumers.

pub mod cache;
pub mod claims;
pub mod credentials;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod input;
pub mod lifecycle;
pub mod redirect;
pub mod requests;
pub mod resolver;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use credentials::CredentialRecord;
pub use error::ApiError;
pub use resolver::{AuthApi, Clock, SessionResolver, SessionState};
pub use store::{KeyValueStore, MemoryStore};
