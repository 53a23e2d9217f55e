#![forbid(unsafe_code)]

//! Error types for tri-state groups.
//!
//! Toggle operations have exactly one failure mode, [`GroupError::InvalidIndex`].
//! It always signals an integration bug in whatever layer generated the event,
//! so it is surfaced immediately and never clamped.

use std::fmt;

/// Failures of group construction and child toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// A child toggle referenced a position outside the group.
    InvalidIndex { index: usize, len: usize },
    /// A group was created with no children.
    EmptyGroup,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => {
                write!(f, "child index {index} out of range for group of {len}")
            }
            Self::EmptyGroup => write!(f, "tri-state group must have at least one child"),
        }
    }
}

impl std::error::Error for GroupError {}

/// Errors from loading or validating a [`GroupConfig`](crate::config::GroupConfig).
#[derive(Debug)]
pub enum GroupConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "group-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "group-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl fmt::Display for GroupConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "group-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "group-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for GroupConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "group-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "group-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for GroupConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
