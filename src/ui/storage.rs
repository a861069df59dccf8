//! `sessionStorage` behind the [`SessionStore`] trait

use leptos::logging::warn;
use web_sys::Storage;

use crate::core::SessionStore;

/// The tab's session storage. When the browser refuses access (privacy mode,
/// sandboxed frames) reads return nothing and writes are dropped.
pub struct BrowserSession {
    storage: Option<Storage>,
}

impl BrowserSession {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            warn!("sessionStorage unavailable; intro will replay on reload");
        }
        Self { storage }
    }
}

impl SessionStore for BrowserSession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage
            && let Err(err) = storage.set_item(key, value)
        {
            warn!("failed to write {key} to sessionStorage: {err:?}");
        }
    }
}
