#![forbid(unsafe_code)]

//! Shared handle to a controller for event callbacks.
//!
//! Rendering layers hand out one `on_change` callback per checkbox; each
//! needs to reach the same controller. [`SharedGroup`] wraps the controller
//! in `Rc<RefCell<..>>` and, unlike calling the controller directly, runs
//! subscribers only after the mutable borrow has been released. A subscriber
//! can therefore read the group (for example to re-render it) from inside
//! its callback.
//!
//! # Invariants
//!
//! 1. An event dispatched from inside a subscriber is applied immediately,
//!    but its notification is queued until the current pass has reached
//!    every subscriber.
//! 2. Every subscriber sees changes in strictly increasing version order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::controller::{GroupChange, TriStateGroupController};
use crate::error::GroupError;
use crate::notify::Subscription;
use crate::state::{DerivedParentState, GroupEvent, GroupState};

#[derive(Debug)]
struct GroupCell {
    controller: RefCell<TriStateGroupController>,
    pending: RefCell<VecDeque<GroupChange>>,
    notifying: Cell<bool>,
}

/// Cloneable handle to one [`TriStateGroupController`].
#[derive(Debug, Clone)]
pub struct SharedGroup {
    inner: Rc<GroupCell>,
}

impl SharedGroup {
    #[must_use]
    pub fn new(controller: TriStateGroupController) -> Self {
        Self {
            inner: Rc::new(GroupCell {
                controller: RefCell::new(controller),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Apply an event and notify subscribers. Returns whether the state changed.
    ///
    /// Called from inside a subscriber, the state changes right away and the
    /// notification is delivered once the outer pass finishes.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::InvalidIndex`] for an out-of-range child toggle.
    pub fn dispatch(&self, event: GroupEvent) -> Result<bool, GroupError> {
        let change = self.inner.controller.borrow_mut().apply(event)?;
        let Some(change) = change else {
            return Ok(false);
        };
        self.inner.pending.borrow_mut().push_back(change);
        if !self.inner.notifying.replace(true) {
            self.drain_pending();
        }
        Ok(true)
    }

    fn drain_pending(&self) {
        let notifier = self.inner.controller.borrow().notifier();
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(change) = next else { break };
            notifier.notify(&change);
        }
        self.inner.notifying.set(false);
    }

    pub fn on_parent_toggle(&self, value: bool) {
        let result = self.dispatch(GroupEvent::ParentToggled(value));
        debug_assert!(result.is_ok(), "parent broadcast rejected: {result:?}");
    }

    /// # Errors
    ///
    /// Returns [`GroupError::InvalidIndex`] when `index` is outside the group.
    pub fn on_child_toggle(&self, index: usize, value: bool) -> Result<(), GroupError> {
        self.dispatch(GroupEvent::ChildToggled { index, value })
            .map(drop)
    }

/// Read the controller.
    pub fn with<R>(&self, f: impl FnOnce(&TriStateGroupController) -> R) -> R {
        f(&self.inner.controller.borrow())
    }

    #[must_use]
    pub fn state(&self) -> GroupState {
        self.inner.controller.borrow().state().clone()
    }

    #[must_use]
    pub fn parent_state(&self) -> DerivedParentState {
        self.inner.controller.borrow().parent_state()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.controller.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.controller.borrow().is_empty()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.controller.borrow().version()
    }

    pub fn subscribe(&self, callback: impl Fn(&GroupChange) + 'static) -> Subscription {
        self.inner.controller.borrow().subscribe(callback)
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakGroup {
        WeakGroup {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl From<TriStateGroupController> for SharedGroup {
    fn from(controller: TriStateGroupController) -> Self {
        Self::new(controller)
    }
}

/// Non-owning handle; callbacks hold this so they do not keep a group alive.
#[derive(Debug, Clone)]
pub struct WeakGroup {
    inner: Weak<GroupCell>,
}

impl WeakGroup {
    #[must_use]
    pub fn upgrade(&self) -> Option<SharedGroup> {
        self.inner.upgrade().map(|inner| SharedGroup { inner })
    }
}
