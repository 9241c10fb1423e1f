//! Notification domain module

mod descriptor;
mod permission;
mod show_result;

pub use descriptor::{NotificationDescriptor, NotificationId};
pub use permission::{PermissionStatus, ALL_PERMISSION_STATUSES};
pub use show_result::ShowNotificationResult;
