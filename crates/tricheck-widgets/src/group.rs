#![forbid(unsafe_code)]

//! Parent checkbox plus children, rendered through a [`CheckboxRenderer`].
//!
//! [`GroupView`] turns the controller's state into one [`CheckboxProps`] for
//! the parent and one per child, each carrying an `on_change` callback that
//! feeds the matching [`GroupEvent`](tricheck_core::GroupEvent) back into the
//! controller. Callbacks hold a weak handle: once the view and every
//! [`SharedGroup`] clone are gone, late callbacks do nothing.
//!
//! Re-rendering is explicit. [`GroupView::watch`] returns a [`RenderRequest`]
//! that is raised whenever the state changes; the host checks it and calls
//! [`GroupView::render`] again.

use std::cell::Cell;
use std::rc::Rc;

use tricheck_core::{
    DerivedParentState, GroupChange, GroupConfig, GroupConfigError, GroupState, SharedGroup,
    Subscription,
};

use crate::CheckboxRenderer;
use crate::checkbox::{CheckboxProps, OnChange};

/// Rendered nodes for one group, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNodes<N> {
    pub parent: N,
    pub children: Vec<N>,
}

impl<N> GroupNodes<N> {
    /// Parent first, then the children.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        std::iter::once(&self.parent).chain(self.children.iter())
    }
}

/// A tri-state group bound to its labels and disabled flags.
#[derive(Debug, Clone)]
pub struct GroupView {
    group: SharedGroup,
    config: GroupConfig,
}

impl GroupView {
    /// Build a controller from `config` and bind it.
    ///
    /// # Errors
    ///
    /// Returns [`GroupConfigError::Validation`] for an invalid config.
    pub fn new(config: GroupConfig) -> Result<Self, GroupConfigError> {
        let group = SharedGroup::new(config.build()?);
        Ok(Self { group, config })
    }

    /// Bind an existing group. `config` must describe exactly `group.len()`
    /// children; its initial values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GroupConfigError::Validation`] if the config is invalid or
    /// its child count differs from the group's.
    pub fn with_group(group: SharedGroup, config: GroupConfig) -> Result<Self, GroupConfigError> {
        let mut errors = config.validate();
        if config.children.len() != group.len() {
            errors.push(format!(
                "config has {} children but group has {}",
                config.children.len(),
                group.len()
            ));
        }
        if !errors.is_empty() {
            return Err(GroupConfigError::Validation(errors));
        }
        Ok(Self { group, config })
    }

    #[must_use]
    pub fn group(&self) -> &SharedGroup {
        &self.group
    }

    #[must_use]
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GroupState {
        self.group.state()
    }

    #[must_use]
    pub fn parent_state(&self) -> DerivedParentState {
        self.group.parent_state()
    }

    /// Register a raw change observer.
    pub fn subscribe(&self, callback: impl Fn(&GroupChange) + 'static) -> Subscription {
        self.group.subscribe(callback)
    }

    /// Request flag raised by every state change.
    #[must_use]
    pub fn watch(&self) -> RenderRequest {
        let pending = Rc::new(Cell::new(false));
        let flag = Rc::clone(&pending);
        let subscription = self.group.subscribe(move |_| flag.set(true));
        RenderRequest {
            pending,
            _subscription: subscription,
        }
    }

    /// Render the parent and every child.
    pub fn render<R: CheckboxRenderer>(&self, renderer: &mut R) -> GroupNodes<R::Node> {
        let state = self.group.state();
        let parent = state.parent();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "TriStateGroup",
            children = state.len(),
            checked = parent.checked,
            indeterminate = parent.indeterminate
        )
        .entered();

        let parent_node = renderer.render_checkbox(CheckboxProps {
            checked: parent.checked,
            indeterminate: parent.indeterminate,
            disabled: self.config.disabled,
            label: &self.config.parent_label,
            on_change: self.parent_handler(),
        });

        let children = self
            .config
            .children
            .iter()
            .zip(state.iter())
            .enumerate()
            .map(|(index, (child, checked))| {
                renderer.render_checkbox(CheckboxProps {
                    checked,
                    indeterminate: false,
                    disabled: !self.config.child_enabled(index),
                    label: &child.label,
                    on_change: self.child_handler(index),
                })
            })
            .collect();

        GroupNodes {
            parent: parent_node,
            children,
        }
    }

    fn parent_handler(&self) -> OnChange {
        let group = self.group.downgrade();
        let enabled = !self.config.disabled;
        Rc::new(move |value: bool| {
            if !enabled {
                #[cfg(feature = "tracing")]
                tracing::debug!(value, "ignoring change on disabled parent");
                return;
            }
            if let Some(group) = group.upgrade() {
                group.on_parent_toggle(value);
            }
        })
    }

    fn child_handler(&self, index: usize) -> OnChange {
        let group = self.group.downgrade();
        let enabled = self.config.child_enabled(index);
        Rc::new(move |value: bool| {
            if !enabled {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, value, "ignoring change on disabled child");
                return;
            }
            let Some(group) = group.upgrade() else {
                return;
            };
            match group.on_child_toggle(index, value) {
                Ok(()) => {}
                #[cfg(feature = "tracing")]
                Err(err) => {
                    tracing::error!(index, %err, "child callback bound to a missing child");
                }
                #[cfg(not(feature = "tracing"))]
                Err(_) => {}
            }
        })
    }
}

/// Raised when the group changes; cleared by [`take`](Self::take).
///
/// Dropping it stops watching.
#[derive(Debug)]
pub struct RenderRequest {
    pending: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl RenderRequest {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Return whether a re-render was requested and clear the flag.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }
}
