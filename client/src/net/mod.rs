//! Networking for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests are described by `shortener::requests`; `api` only moves them over
//! `gloo-net` in the browser.

pub mod api;
