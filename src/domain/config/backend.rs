//! Backend selection value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidBackendError;

/// Which notification backend to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Best backend for the current platform
    #[default]
    Auto,
    /// Always use the inert fallback
    Unsupported,
}

impl BackendKind {
    pub const ALL: &'static [BackendKind] = &[BackendKind::Auto, BackendKind::Unsupported];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Unsupported => "unsupported",
        }
    }
}

impl FromStr for BackendKind {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "unsupported" | "none" => Ok(Self::Unsupported),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_kinds() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.as_str().parse::<BackendKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn none_is_an_alias_for_unsupported() {
        assert_eq!("none".parse::<BackendKind>().unwrap(), BackendKind::Unsupported);
    }

    #[test]
    fn parse_invalid() {
        assert!("cocoa".parse::<BackendKind>().is_err());
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(BackendKind::default(), BackendKind::Auto);
    }
}
