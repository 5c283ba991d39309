//! Short links and their resolution.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Outcome of asking the backend where a short code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Forward the browser to this absolute location.
    Forward(String),
    /// Unknown, expired, or otherwise unusable code.
    Invalid,
}

/// Classify a manual-redirect response. Only a 302 with a non-blank
/// `Location` forwards; every other response is [`RedirectOutcome::Invalid`].
#[must_use]
pub fn classify(status: u16, location: Option<&str>) -> RedirectOutcome {
    if status != 302 {
        return RedirectOutcome::Invalid;
    }
    match location.map(str::trim) {
        Some(target) if !target.is_empty() => RedirectOutcome::Forward(target.to_owned()),
        _ => RedirectOutcome::Invalid,
    }
}

/// Public short link for `short_code` under the frontend origin `public_base`.
#[must_use]
pub fn short_link(public_base: &str, short_code: &str) -> String {
    format!("{}/{}", public_base.trim_end_matches('/'), short_code.trim_start_matches('/'))
}

/// Whether `candidate` can be a short code path segment.
#[must_use]
pub fn is_plausible_short_code(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
