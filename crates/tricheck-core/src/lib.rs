#![forbid(unsafe_code)]

//! Tri-state checkbox group logic.
//!
//! A parent checkbox summarizes N children: it is checked when every child
//! is checked, unchecked when none is, and indeterminate when they are mixed.
//! Toggling the parent sets every child; toggling a child recomputes the
//! parent.
//!
//! # Key Components
//!
//! - [`GroupState`] and [`derive_parent_state`] - authoritative child values
//!   and the pure parent derivation
//! - [`transition`] - pure `(GroupState, GroupEvent) -> GroupState` step
//! - [`TriStateGroupController`] - owns the state and notifies subscribers
//! - [`SharedGroup`] - cloneable handle for per-checkbox callbacks
//! - [`GroupConfig`] - labels, initial values, disabled flags
//!
//! Nothing here draws anything; see `tricheck-widgets` for the rendering seam.

pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod shared;
pub mod state;

pub use config::{ChildConfig, GroupConfig};
pub use controller::{GroupChange, TriStateGroupController};
pub use error::{GroupConfigError, GroupError};
pub use notify::{Notifier, Subscription};
pub use shared::{SharedGroup, WeakGroup};
pub use state::{
    DerivedParentState, GroupEvent, GroupState, ParentDisplay, derive_parent_state, transition,
};
