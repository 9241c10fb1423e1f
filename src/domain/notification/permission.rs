//! Permission status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidPermissionStatusError;

/// All known permission statuses
pub const ALL_PERMISSION_STATUSES: &[PermissionStatus] = &[
    PermissionStatus::Granted,
    PermissionStatus::Denied,
    PermissionStatus::NotDetermined,
    PermissionStatus::Provisional,
];

/// Authorization state of the notification backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The user has not been asked yet
    NotDetermined,
    /// Granted quietly, without interrupting the user
    Provisional,
}

impl PermissionStatus {
    /// Get the string identifier for this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::NotDetermined => "not-determined",
            Self::Provisional => "provisional",
        }
    }

    /// Whether notifications may be shown under this status
    pub const fn allows_display(&self) -> bool {
        matches!(self, Self::Granted | Self::Provisional)
    }
}

impl FromStr for PermissionStatus {
    type Err = InvalidPermissionStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "not-determined" | "not_determined" | "notdetermined" => Ok(Self::NotDetermined),
            "provisional" => Ok(Self::Provisional),
            _ => Err(InvalidPermissionStatusError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
