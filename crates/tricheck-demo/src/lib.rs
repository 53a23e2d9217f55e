#![forbid(unsafe_code)]

//! Command-line replay of tri-state checkbox group interactions.

pub mod cli;
pub mod error;
pub mod session;

pub use cli::{Cli, run, run_from_env};
pub use error::{DemoError, Result};
