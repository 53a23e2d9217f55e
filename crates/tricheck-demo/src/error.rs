#![forbid(unsafe_code)]

use thiserror::Error;
use tricheck_core::{GroupConfigError, GroupError};

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("config error: {0}")]
    Config(#[from] GroupConfigError),

    #[error("group error: {0}")]
    Group(#[from] GroupError),

    #[error("invalid click target `{0}` (expected `parent` or a child index)")]
    InvalidTarget(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidTarget(_) => 2,
            Self::Group(_) => 3,
            Self::Io(_) => 1,
        }
    }
}
