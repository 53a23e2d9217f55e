#![forbid(unsafe_code)]

//! Tri-state group controller.
//!
//! [`TriStateGroupController`] owns the [`GroupState`] of a parent checkbox
//! and its children. User changes arrive as [`GroupEvent`]s, are applied
//! through [`transition`], and every state-changing event bumps the version
//! and notifies subscribers with a [`GroupChange`]. Subscribers treat that
//! notification as a re-render request.
//!
//! Events that leave the state unchanged (re-applying the same toggle) do
//! not bump the version and do not notify.

use tracing::{debug, trace, warn};

use crate::error::GroupError;
use crate::notify::{Notifier, Subscription};
use crate::state::{DerivedParentState, GroupEvent, GroupState, transition};

/// Payload delivered to subscribers after a state-changing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupChange {
    pub cause: GroupEvent,
    pub previous: GroupState,
    pub current: GroupState,
    /// Parent display derived from `current`.
    pub parent: DerivedParentState,
    /// Controller version after the change.
    pub version: u64,
}

/// Owns the children's checked values and derives the parent display.
#[derive(Debug)]
pub struct TriStateGroupController {
    state: GroupState,
    version: u64,
    notifier: Notifier<GroupChange>,
}

impl TriStateGroupController {
    /// Create a controller from initial child values.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::EmptyGroup`] when `initial` is empty.
    pub fn new(initial: impl Into<Vec<bool>>) -> Result<Self, GroupError> {
        GroupState::new(initial).map(Self::from_state)
    }

    #[must_use]
    pub fn from_state(state: GroupState) -> Self {
        Self {
            state,
            version: 0,
            notifier: Notifier::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GroupState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn parent_state(&self) -> DerivedParentState {
        self.state.parent()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn child(&self, index: usize) -> Option<bool> {
        self.state.get(index)
    }

    /// Number of state-changing events applied so far.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Parent toggled: set every child to `value`.
    pub fn on_parent_toggle(&mut self, value: bool) {
        let next = self.state.broadcast(value);
        if let Some(change) = self.commit(GroupEvent::ParentToggled(value), next) {
            self.notifier.notify(&change);
        }
    }

    /// Child toggled: set the child at `index` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::InvalidIndex`] when `index` is outside the
    /// group. The state is left unchanged.
    pub fn on_child_toggle(&mut self, index: usize, value: bool) -> Result<(), GroupError> {
        self.dispatch(GroupEvent::ChildToggled { index, value })
            .map(drop)
    }

    /// Apply any event. Returns whether the state changed.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::InvalidIndex`] for an out-of-range child toggle.
    pub fn dispatch(&mut self, event: GroupEvent) -> Result<bool, GroupError> {
        match self.apply(event)? {
            Some(change) => {
                self.notifier.notify(&change);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Register a re-render observer. It runs after every state change
    /// until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&GroupChange) + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.notifier.subscriber_count()
    }

    /// Apply without notifying. Used by [`SharedGroup`](crate::SharedGroup),
    /// which notifies only after releasing its borrow of the controller.
    pub(crate) fn apply(&mut self, event: GroupEvent) -> Result<Option<GroupChange>, GroupError> {
        let next = transition(&self.state, event).inspect_err(|err| {
            warn!(?event, len = self.state.len(), %err, "rejected group event");
        })?;
        Ok(self.commit(event, next))
    }

    pub(crate) fn notifier(&self) -> Notifier<GroupChange> {
        self.notifier.clone()
    }

    fn commit(&mut self, cause: GroupEvent, next: GroupState) -> Option<GroupChange> {
        if next == self.state {
            trace!(event = ?cause, state = %self.state, "group event left state unchanged");
            return None;
        }
        let previous = std::mem::replace(&mut self.state, next);
        self.version += 1;
        let parent = self.state.parent();
        debug!(
            event = ?cause,
            previous = %previous,
            current = %self.state,
            checked = parent.checked,
            indeterminate = parent.indeterminate,
            version = self.version,
            "group transition"
        );
        Some(GroupChange {
            cause,
            previous,
            current: self.state.clone(),
            parent,
            version: self.version,
        })
    }
}
