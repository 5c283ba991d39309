//! Shared reactive state provided through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` by `app::App`; pages and
//! components read and update them without owning browser glue.

pub mod auth;
pub mod notice;
pub mod urls;
