//! native-notify - platform notifications with a graceful fallback
//!
//! This crate exposes a notification backend interface shared by every
//! platform, and an inert implementation for platforms that have no native
//! notification support. Callers use the same six operations everywhere and
//! read failure from the returned values instead of branching on platform.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Permission status, notification descriptor, show result, config, errors
//! - **Application**: The `NotificationBackend` port and the delivery use case
//! - **Infrastructure**: Backend adapters and the XDG config store
//! - **CLI**: Command-line host for the backend operations
//!
//! # Example
//!
//! ```
//! use native_notify::application::ports::NotificationBackend;
//! use native_notify::domain::{NotificationDescriptor, PermissionStatus};
//! use native_notify::infrastructure::UnsupportedPlatformNotifier;
//!
//! # tokio_test_block(async {
//! let backend = UnsupportedPlatformNotifier::new();
//! assert!(!backend.is_available());
//! assert_eq!(backend.permission_status().await, PermissionStatus::Denied);
//!
//! let result = backend.show_notification(&NotificationDescriptor::new()).await;
//! assert!(!result.success);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
