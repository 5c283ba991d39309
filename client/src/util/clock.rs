//! Wall clock for session cache freshness checks.

use shortener::Clock;

/// Milliseconds since the Unix epoch from `Date.now()` in the browser, or the
/// system clock during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let now = js_sys::Date::now() as i64;
            now
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .ok()
                .and_then(|d| i64::try_from(d.as_millis()).ok())
                .unwrap_or_default()
        }
    }
}
