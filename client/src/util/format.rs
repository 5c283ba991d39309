//! Display formatting for URL list rows.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Date part (`YYYY-MM-DD`) of an ISO-8601 timestamp, or `"-"` when missing.
pub fn display_date(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_owned();
    };
    raw.split(['T', ' ']).next().unwrap_or(raw).to_owned()
}

/// "1 click" / "N clicks".
pub fn click_label(count: i64) -> String {
    if count == 1 { "1 click".to_owned() } else { format!("{count} clicks") }
}
