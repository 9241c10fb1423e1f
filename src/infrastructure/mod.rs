//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the
//! notification backends and the on-disk config store.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_backend, platform_name, UnsupportedPlatformNotifier};
