//! URL-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Separating list inventory from auth state keeps refetches and deletes from
//! touching session data.

#[cfg(test)]
#[path = "urls_test.rs"]
mod urls_test;

use shortener::types::UrlMapping;

/// How long the "Copied!" marker stays on a row.
pub const COPIED_MARK_MS: u32 = 2_000;

#[derive(Clone, Debug, Default)]
pub struct UrlsState {
    pub items: Vec<UrlMapping>,
    pub loading: bool,
    /// Short code of the row most recently copied to the clipboard.
    pub copied: Option<String>,
}

impl UrlsState {
    /// Replace the list with a fresh fetch.
    pub fn replace(&mut self, items: Vec<UrlMapping>) {
        self.items = items;
        self.loading = false;
    }

    /// Drop the row for `short_code` after a confirmed delete.
    pub fn remove(&mut self, short_code: &str) {
        self.items.retain(|m| m.short_url != short_code);
        if self.copied.as_deref() == Some(short_code) {
            self.copied = None;
        }
    }

    /// Clear the copied marker only if it still points at `short_code`.
    pub fn clear_copied(&mut self, short_code: &str) {
        if self.copied.as_deref() == Some(short_code) {
            self.copied = None;
        }
    }
}
