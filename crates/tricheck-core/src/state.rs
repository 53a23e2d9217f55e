#![forbid(unsafe_code)]

//! Group state, parent derivation, and the pure transition function.
//!
//! # Invariants
//!
//! 1. A [`GroupState`] is never empty and its length never changes.
//! 2. [`DerivedParentState`] is always recomputed from a [`GroupState`],
//!    never stored next to it.
//! 3. A mixed group derives `{checked: false, indeterminate: true}`.
//! 4. [`transition`] leaves its input untouched and returns a new state,
//!    or an error with no state at all.

use std::fmt;

use crate::error::GroupError;

/// Checked values of the children, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupState {
    values: Vec<bool>,
}

impl GroupState {
    /// Create a group state from initial child values.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::EmptyGroup`] when `values` is empty.
    pub fn new(values: impl Into<Vec<bool>>) -> Result<Self, GroupError> {
        let values = values.into();
        if values.is_empty() {
            return Err(GroupError::EmptyGroup);
        }
        Ok(Self { values })
    }

    /// Number of children.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed state; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checked value of one child.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.iter().copied()
    }

    /// Parent display state derived from the current values.
    #[must_use]
    pub fn parent(&self) -> DerivedParentState {
        derive_parent_state(&self.values)
    }

    /// State with every child set to `value`.
    #[must_use]
    pub fn broadcast(&self, value: bool) -> Self {
        Self {
            values: vec![value; self.values.len()],
        }
    }

    /// State with the child at `index` set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::InvalidIndex`] when `index >= len`.
    pub fn with_child(&self, index: usize, value: bool) -> Result<Self, GroupError> {
        if index >= self.values.len() {
            return Err(GroupError::InvalidIndex {
                index,
                len: self.values.len(),
            });
        }
        let mut next = self.clone();
        next.values[index] = value;
        Ok(next)
    }
}

impl fmt::Display for GroupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// What the parent checkbox shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DerivedParentState {
    pub checked: bool,
    pub indeterminate: bool,
}

impl DerivedParentState {
    pub const CHECKED: Self = Self {
        checked: true,
        indeterminate: false,
    };
    pub const UNCHECKED: Self = Self {
        checked: false,
        indeterminate: false,
    };
    pub const INDETERMINATE: Self = Self {
        checked: false,
        indeterminate: true,
    };

    /// Value a click on the parent requests.
    ///
    /// An indeterminate parent reports `checked == false`, so a click
    /// requests `true` and checks every child.
    #[inline]
    #[must_use]
    pub fn next_toggle_value(self) -> bool {
        !self.checked
    }

    #[must_use]
    pub fn display(self) -> ParentDisplay {
        match (self.checked, self.indeterminate) {
            (_, true) => ParentDisplay::Indeterminate,
            (true, false) => ParentDisplay::Checked,
            (false, false) => ParentDisplay::Unchecked,
        }
    }
}

/// Three-valued view of [`DerivedParentState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentDisplay {
    Checked,
    Unchecked,
    Indeterminate,
}

impl From<ParentDisplay> for DerivedParentState {
    fn from(display: ParentDisplay) -> Self {
        match display {
            ParentDisplay::Checked => Self::CHECKED,
            ParentDisplay::Unchecked => Self::UNCHECKED,
            ParentDisplay::Indeterminate => Self::INDETERMINATE,
        }
    }
}

/// Derive the parent display from child values.
///
/// - all true: `{checked: true, indeterminate: false}`
/// - all false: `{checked: false, indeterminate: false}`
/// - mixed: `{checked: false, indeterminate: true}`
///
/// An empty slice derives unchecked; [`GroupState`] never produces one.
#[must_use]
pub fn derive_parent_state(values: &[bool]) -> DerivedParentState {
    let Some((&first, rest)) = values.split_first() else {
        return DerivedParentState::UNCHECKED;
    };
    if rest.iter().any(|&v| v != first) {
        DerivedParentState::INDETERMINATE
    } else if first {
        DerivedParentState::CHECKED
    } else {
        DerivedParentState::UNCHECKED
    }
}

/// A user-originated change to the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupEvent {
    /// The parent was toggled; broadcast to every child.
    ParentToggled(bool),
    /// One child was toggled.
    ChildToggled { index: usize, value: bool },
}

impl GroupEvent {
    #[inline]
    #[must_use]
    pub fn value(self) -> bool {
        match self {
            Self::ParentToggled(value) | Self::ChildToggled { value, .. } => value,
        }
    }
}

/// Apply `event` to `state`, returning the next state.
///
/// # Errors
///
/// Returns [`GroupError::InvalidIndex`] for a child toggle outside the group.
pub fn transition(state: &GroupState, event: GroupEvent) -> Result<GroupState, GroupError> {
    match event {
        GroupEvent::ParentToggled(value) => Ok(state.broadcast(value)),
        GroupEvent::ChildToggled { index, value } => state.with_child(index, value),
    }
}
