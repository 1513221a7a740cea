//! Login and registration flows.
//!
//! DESIGN
//! ======
//! The functions in [`controller`] own the validation and navigation
//! sequencing; every effect they trigger goes through one of the capability
//! traits below. Tests substitute in-memory fakes, and a real
//! authentication backend can replace [`provider::LocalAuthProvider`]
//! without touching the sequencing.

pub mod controller;
pub mod provider;

pub use controller::ValidationError;
pub use provider::{AuthProvider, LocalAuthProvider};

/// Blocking user-facing notification (the browser `alert` dialog). The same
/// channel carries validation failures and success confirmations.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Fire-and-forget durable key-value write (browser `localStorage`). This
/// seam has no read or delete; reads happen elsewhere in the UI layer.
pub trait KeyValueStore {
    fn set(&self, key: &str, value: &str);
}

/// Client-side navigation.
pub trait Navigator {
    fn go(&self, path: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}
