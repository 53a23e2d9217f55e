#![forbid(unsafe_code)]

//! Rendering seam for tri-state checkbox groups.
//!
//! The core crate knows nothing about drawing. This crate defines the
//! capability it needs from a renderer, [`CheckboxRenderer`], and the glue
//! that turns group state into per-checkbox props with change callbacks.

pub mod checkbox;
pub mod group;
pub mod text;

pub use checkbox::{Checkbox, CheckboxProps, CheckboxState, OnChange};
pub use group::{GroupNodes, GroupView, RenderRequest};
pub use text::{TextCheckbox, TextNode};

/// Something that can draw one checkbox.
///
/// Invoked once for the parent and once per child on every group render.
pub trait CheckboxRenderer {
    /// What a rendered checkbox turns into.
    type Node;

    /// Render a checkbox from its props.
    fn render_checkbox(&mut self, props: CheckboxProps<'_>) -> Self::Node;
}
