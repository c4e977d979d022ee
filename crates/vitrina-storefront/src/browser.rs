//! Thin wrappers over the browser environment.
//!
//! Everything here degrades to a logged no-op on non-wasm targets so the
//! crate builds and its callers stay testable natively.

use vitrina_leads::{LeadError, LeadStore};

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(%url, "would open in new tab");
    }
}

/// Run a callback after a short delay.
///
/// Used only to sequence modal transitions, never for concurrency
/// control. On native targets the callback runs immediately.
pub fn defer(f: impl FnOnce() + 'static, delay_ms: i32) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let closure = Closure::once_into_js(f);
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref::<js_sys::Function>(),
                delay_ms,
            );
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = delay_ms;
        f();
    }
}

/// Lead store over `window.localStorage`.
///
/// Reads and writes are best-effort: private browsing modes and full
/// quotas surface as a store error the caller logs and moves past, since
/// the lead log exists for manual reconciliation only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLeadStore;

#[cfg(target_arch = "wasm32")]
impl LeadStore for BrowserLeadStore {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), LeadError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| LeadError::Store("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| LeadError::Store("localStorage write failed".to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LeadStore for BrowserLeadStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), LeadError> {
        Ok(())
    }
}
