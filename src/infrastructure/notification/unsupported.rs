//! Notification backend for platforms without native notification support
//!
//! Every operation settles immediately with an inert answer: unavailable,
//! denied, or not shown. Nothing is ever surfaced as an error.

use async_trait::async_trait;

use crate::application::ports::NotificationBackend;
use crate::domain::notification::{
    NotificationDescriptor, NotificationId, PermissionStatus, ShowNotificationResult,
};

/// Error reported for every show request
pub const UNAVAILABLE_MESSAGE: &str = "Native notifications not available on this platform";

/// Fallback backend that never delivers anything
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatformNotifier;

impl UnsupportedPlatformNotifier {
    /// Create a new fallback backend
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationBackend for UnsupportedPlatformNotifier {
    fn is_available(&self) -> bool {
        false
    }

    async fn request_permission(&self) -> bool {
        false
    }

    async fn permission_status(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    async fn show_notification(
        &self,
        _descriptor: &NotificationDescriptor,
    ) -> ShowNotificationResult {
        ShowNotificationResult::failed(UNAVAILABLE_MESSAGE)
    }

    fn remove_notification(&self, _id: Option<&NotificationId>) {}

    fn remove_all_notifications(&self) {}
}
