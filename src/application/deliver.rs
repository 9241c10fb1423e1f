//! Deliver notification use case
//!
//! Walks a backend through availability, permission, and display so callers
//! never have to branch on the platform they run on.

use serde::Serialize;

use crate::application::ports::NotificationBackend;
use crate::domain::notification::{NotificationDescriptor, PermissionStatus};

/// What happened to a delivery attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum DeliveryOutcome {
    /// The backend accepted the notification
    Delivered,
    /// The platform has no notification support
    Unavailable { message: String },
    /// The user has not allowed notifications
    PermissionDenied { status: PermissionStatus },
    /// The backend tried and reported a failure
    Failed { message: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// One-line human readable summary
    pub fn describe(&self) -> String {
        match self {
            Self::Delivered => "Notification delivered".to_string(),
            Self::Unavailable { message } => format!("Notifications unavailable: {}", message),
            Self::PermissionDenied { status } => {
                format!("Notification permission not granted ({})", status)
            }
            Self::Failed { message } => format!("Notification failed: {}", message),
        }
    }
}

/// Fallback message when a backend fails without saying why
const UNKNOWN_FAILURE: &str = "unknown error";

/// Use case for delivering a single notification
pub struct DeliverNotificationUseCase<B> {
    backend: B,
}

impl<B: NotificationBackend> DeliverNotificationUseCase<B> {
    /// Create a new use case instance
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Deliver a notification, degrading to an outcome value on any failure.
    pub async fn execute(&self, descriptor: &NotificationDescriptor) -> DeliveryOutcome {
        if !self.backend.is_available() {
            // Still ask the backend so its own explanation reaches the caller
            let result = self.backend.show_notification(descriptor).await;
            return DeliveryOutcome::Unavailable {
                message: result
                    .error
                    .unwrap_or_else(|| UNKNOWN_FAILURE.to_string()),
            };
        }

        let mut status = self.backend.permission_status().await;
        if status == PermissionStatus::NotDetermined {
            status = if self.backend.request_permission().await {
                PermissionStatus::Granted
            } else {
                self.backend.permission_status().await
            };
        }

        if !status.allows_display() {
            return DeliveryOutcome::PermissionDenied { status };
        }

        let result = self.backend.show_notification(descriptor).await;
        if result.success {
            DeliveryOutcome::Delivered
        } else {
            DeliveryOutcome::Failed {
                message: result
                    .error
                    .unwrap_or_else(|| UNKNOWN_FAILURE.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::notification::{NotificationId, ShowNotificationResult};

    struct MockBackend {
        available: bool,
        status: PermissionStatus,
        grant_on_request: bool,
        show_result: ShowNotificationResult,
        requests: AtomicUsize,
        shows: AtomicUsize,
    }

    impl MockBackend {
        fn new(available: bool, status: PermissionStatus) -> Self {
            Self {
                available,
                status,
                grant_on_request: false,
                show_result: ShowNotificationResult::delivered(),
                requests: AtomicUsize::new(0),
                shows: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl NotificationBackend for MockBackend {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn request_permission(&self) -> bool {
            self.requests.fetch_add(1, Ordering::SeqCst);
            self.grant_on_request
        }

        async fn permission_status(&self) -> PermissionStatus {
            self.status
        }

        async fn show_notification(
            &self,
            _descriptor: &NotificationDescriptor,
        ) -> ShowNotificationResult {
            self.shows.fetch_add(1, Ordering::SeqCst);
            self.show_result.clone()
        }

        fn remove_notification(&self, _id: Option<&NotificationId>) {}

        fn remove_all_notifications(&self) {}
    }

    #[tokio::test]
    async fn granted_backend_delivers() {
        let use_case =
            DeliverNotificationUseCase::new(MockBackend::new(true, PermissionStatus::Granted));
        let outcome = use_case.execute(&NotificationDescriptor::new()).await;
        assert_eq!(outcome, DeliveryOutcome::Delivered);
        assert_eq!(use_case.backend().requests.load(Ordering::SeqCst), 0);
        assert_eq!(use_case.backend().shows.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unavailable_backend_reports_its_message() {
        let mut backend = MockBackend::new(false, PermissionStatus::Denied);
        backend.show_result = ShowNotificationResult::failed("no support");
        let use_case = DeliverNotificationUseCase::new(backend);

        let outcome = use_case.execute(&NotificationDescriptor::new()).await;
        assert_eq!(
            outcome,
            DeliveryOutcome::Unavailable {
                message: "no support".to_string()
            }
        );
    }

    #[tokio::test]
    async fn not_determined_requests_permission() {
        let mut backend = MockBackend::new(true, PermissionStatus::NotDetermined);
        backend.grant_on_request = true;
        let use_case = DeliverNotificationUseCase::new(backend);

        let outcome = use_case.execute(&NotificationDescriptor::new()).await;
        assert!(outcome.is_delivered());
        assert_eq!(use_case.backend().requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refused_request_is_permission_denied() {
        let use_case = DeliverNotificationUseCase::new(MockBackend::new(
            true,
            PermissionStatus::NotDetermined,
        ));
        let outcome = use_case.execute(&NotificationDescriptor::new()).await;
        assert_eq!(
            outcome,
            DeliveryOutcome::PermissionDenied {
                status: PermissionStatus::NotDetermined
            }
        );
        assert_eq!(use_case.backend().shows.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn denied_does_not_prompt() {
        let use_case =
            DeliverNotificationUseCase::new(MockBackend::new(true, PermissionStatus::Denied));
        let outcome = use_case.execute(&NotificationDescriptor::new()).await;
        assert!(matches!(outcome, DeliveryOutcome::PermissionDenied { .. }));
        assert_eq!(use_case.backend().requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn show_failure_becomes_failed_outcome() {
        let mut backend = MockBackend::new(true, PermissionStatus::Provisional);
        backend.show_result = ShowNotificationResult {
            success: false,
            error: None,
        };
        let use_case = DeliverNotificationUseCase::new(backend);

        let outcome = use_case.execute(&NotificationDescriptor::new()).await;
        assert_eq!(
            outcome,
            DeliveryOutcome::Failed {
                message: "unknown error".to_string()
            }
        );
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_string(&DeliveryOutcome::PermissionDenied {
            status: PermissionStatus::Denied,
        })
        .unwrap();
        assert_eq!(json, r#"{"outcome":"permission-denied","status":"denied"}"#);
    }

    #[test]
    fn describe_mentions_message() {
        let outcome = DeliveryOutcome::Unavailable {
            message: "nothing here".to_string(),
        };
        assert!(outcome.describe().contains("nothing here"));
    }
}
