//! Notification infrastructure module
//!
//! Selects the notification backend for the current platform. Only the
//! inert fallback exists, so every selection resolves to it.

mod unsupported;

pub use unsupported::{UnsupportedPlatformNotifier, UNAVAILABLE_MESSAGE};

use crate::application::ports::NotificationBackend;
use crate::domain::config::BackendKind;

/// Name of the operating system this binary was built for
pub fn platform_name() -> &'static str {
    std::env::consts::OS
}

/// Create the notification backend for `kind`
///
/// `Auto` picks the native backend when the platform has one and falls back
/// to [`UnsupportedPlatformNotifier`] otherwise.
pub fn create_backend(kind: BackendKind) -> Box<dyn NotificationBackend> {
    match kind {
        BackendKind::Auto | BackendKind::Unsupported => Box::new(UnsupportedPlatformNotifier::new()),
    }
}
