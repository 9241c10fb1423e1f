//! Application layer - Use cases and port interfaces
//!
//! Contains the platform-agnostic notification flow and the trait
//! definitions for external system interactions.

pub mod deliver;
pub mod ports;

// Re-export use cases
pub use deliver::{DeliverNotificationUseCase, DeliveryOutcome};
