//! Notification backend port interface

use async_trait::async_trait;

use crate::domain::notification::{
    NotificationDescriptor, NotificationId, PermissionStatus, ShowNotificationResult,
};

/// Port for a platform notification backend.
///
/// None of the operations has a failure channel. A backend that cannot do
/// something reports it through the returned value (`false`, a denied
/// status, or a failed show result) instead of an error.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// Whether this backend can deliver notifications at all.
    fn is_available(&self) -> bool;

    /// Ask the user for permission to show notifications.
    ///
    /// # Returns
    /// `true` if permission is (now) granted
    async fn request_permission(&self) -> bool;

    /// Current authorization state, without prompting the user.
    async fn permission_status(&self) -> PermissionStatus;

    /// Show a notification described by `descriptor`.
    async fn show_notification(&self, descriptor: &NotificationDescriptor)
        -> ShowNotificationResult;

    /// Remove a delivered or pending notification. `None` means no id was given.
    fn remove_notification(&self, id: Option<&NotificationId>);

    /// Remove every notification this application has posted.
    fn remove_all_notifications(&self);
}

/// Blanket implementation for boxed backend types
#[async_trait]
impl NotificationBackend for Box<dyn NotificationBackend> {
    fn is_available(&self) -> bool {
        self.as_ref().is_available()
    }

    async fn request_permission(&self) -> bool {
        self.as_ref().request_permission().await
    }

    async fn permission_status(&self) -> PermissionStatus {
        self.as_ref().permission_status().await
    }

    async fn show_notification(
        &self,
        descriptor: &NotificationDescriptor,
    ) -> ShowNotificationResult {
        self.as_ref().show_notification(descriptor).await
    }

    fn remove_notification(&self, id: Option<&NotificationId>) {
        self.as_ref().remove_notification(id)
    }

    fn remove_all_notifications(&self) {
        self.as_ref().remove_all_notifications()
    }
}

/// Borrowed backends are backends too
#[async_trait]
impl<T> NotificationBackend for &T
where
    T: NotificationBackend + ?Sized,
{
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    async fn request_permission(&self) -> bool {
        (**self).request_permission().await
    }

    async fn permission_status(&self) -> PermissionStatus {
        (**self).permission_status().await
    }

    async fn show_notification(
        &self,
        descriptor: &NotificationDescriptor,
    ) -> ShowNotificationResult {
        (**self).show_notification(descriptor).await
    }

    fn remove_notification(&self, id: Option<&NotificationId>) {
        (**self).remove_notification(id)
    }

    fn remove_all_notifications(&self) {
        (**self).remove_all_notifications()
    }
}
