//! Browser-backed implementations of the auth capability seams.
//!
//! All DOM access is gated on the `hydrate` feature; on the server these
//! types are inert no-ops so shared components can construct them freely.
//! Storage and alert failures are ignored (blocked storage, headless
//! contexts) rather than surfaced.

#[cfg(feature = "hydrate")]
use crate::auth::provider::IDENTITY_KEY;
use crate::auth::{KeyValueStore, Notifier};

/// [`Notifier`] backed by the blocking `window.alert` dialog.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }
}

/// [`KeyValueStore`] backed by `localStorage`.
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Read the stored username, if a login or registration has recorded one.
///
/// Returns `None` on the server and in browsers with storage disabled.
pub fn read_stored_user() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(IDENTITY_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
