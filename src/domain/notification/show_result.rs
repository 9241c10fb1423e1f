//! Result of a show-notification request

use serde::{Deserialize, Serialize};

/// Outcome reported by a backend after a show request.
///
/// Failure is a value here, not an error: backends never reject a
/// show request, they report `success = false` with a message instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowNotificationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShowNotificationResult {
    /// The notification was handed to the platform
    pub fn delivered() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// The notification was not shown
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }

    /// Error message, if the request failed
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_serializes_both_fields() {
        let result = ShowNotificationResult::failed("nope");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"nope"}"#);
    }

    #[test]
    fn delivered_omits_error() {
        let json = serde_json::to_string(&ShowNotificationResult::delivered()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn error_message_accessor() {
        assert_eq!(ShowNotificationResult::failed("x").error_message(), Some("x"));
        assert_eq!(ShowNotificationResult::delivered().error_message(), None);
    }
}
