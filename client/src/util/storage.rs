//! Browser `localStorage`/`sessionStorage` as a [`KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials survive browser restarts in `localStorage`; the profile cache
//! lives in `sessionStorage` and dies with the tab. Outside the browser both
//! areas read as empty and writes are dropped.

use shortener::KeyValueStore;

/// One of the two Web Storage areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStorage {
    Local,
    Session,
}

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn area(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let area = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        area.ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.area()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(area) = self.area() else {
                return;
            };
            if area.set_item(key, value).is_err() {
                tracing::warn!(%key, "storage write failed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn delete(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(area) = self.area() {
                let _ = area.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
