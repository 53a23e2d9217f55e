#![forbid(unsafe_code)]

//! Single checkbox: render props and a standalone toggle state.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::CheckboxRenderer;

/// Change callback attached to a rendered checkbox.
///
/// Invoked with the checked value the control reports after a user action.
pub type OnChange = Rc<dyn Fn(bool)>;

/// Everything a renderer needs to draw one checkbox.
#[derive(Clone)]
pub struct CheckboxProps<'a> {
    pub checked: bool,
    pub indeterminate: bool,
    pub disabled: bool,
    pub label: &'a str,
    pub on_change: OnChange,
}

impl fmt::Debug for CheckboxProps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxProps")
            .field("checked", &self.checked)
            .field("indeterminate", &self.indeterminate)
            .field("disabled", &self.disabled)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A callback that ignores every change.
#[must_use]
pub fn ignore_changes() -> OnChange {
    Rc::new(|_: bool| {})
}

/// A standalone checkbox.
#[derive(Debug, Clone, Default)]
pub struct Checkbox<'a> {
    label: &'a str,
    disabled: bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Render through `renderer`; the change callback writes into `state`.
    pub fn render<R: CheckboxRenderer>(&self, renderer: &mut R, state: &CheckboxState) -> R::Node {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Checkbox",
            checked = state.is_checked(),
            disabled = self.disabled
        )
        .entered();

        let on_change: OnChange = if self.disabled {
            ignore_changes()
        } else {
            let cell = Rc::clone(&state.checked);
            Rc::new(move |value: bool| cell.set(value))
        };
        renderer.render_checkbox(CheckboxProps {
            checked: state.is_checked(),
            indeterminate: false,
            disabled: self.disabled,
            label: self.label,
            on_change,
        })
    }
}

/// Checked value of a standalone [`Checkbox`]. Starts unchecked.
///
/// Clones share the same value, so a callback holding a clone updates the
/// original.
#[derive(Debug, Clone, Default)]
pub struct CheckboxState {
    checked: Rc<Cell<bool>>,
}

impl CheckboxState {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            checked: Rc::new(Cell::new(checked)),
        }
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    pub fn set(&self, checked: bool) {
        self.checked.set(checked);
    }

    /// Flip the value and return the new one.
    pub fn toggle(&self) -> bool {
        let next = !self.checked.get();
        self.checked.set(next);
        next
    }
}
