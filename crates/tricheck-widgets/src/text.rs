#![forbid(unsafe_code)]

//! Plain-text checkbox renderer.
//!
//! Draws each checkbox as one line, `[x] Label`, and keeps the change
//! callback on the node so hosts and tests can click it.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::CheckboxRenderer;
use crate::checkbox::{CheckboxProps, OnChange};
use crate::group::GroupNodes;

/// Box glyphs for the three display states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub indeterminate: &'static str,
}

pub const ASCII: Glyphs = Glyphs {
    checked: "[x]",
    unchecked: "[ ]",
    indeterminate: "[-]",
};

pub const UNICODE: Glyphs = Glyphs {
    checked: "☑",
    unchecked: "☐",
    indeterminate: "▣",
};

impl Default for Glyphs {
    fn default() -> Self {
        ASCII
    }
}

impl Glyphs {
    /// Glyph for a checkbox; indeterminate wins over checked.
    #[must_use]
    pub fn for_state(&self, checked: bool, indeterminate: bool) -> &'static str {
        if indeterminate {
            self.indeterminate
        } else if checked {
            self.checked
        } else {
            self.unchecked
        }
    }
}

/// A rendered text checkbox.
#[derive(Clone)]
pub struct TextNode {
    line: String,
    checked: bool,
    disabled: bool,
    on_change: OnChange,
}

impl TextNode {
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Display width of the line in terminal cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.line.width()
    }

    /// Simulate a click: report `!checked` to the change callback.
    ///
    /// Disabled nodes swallow the click. Returns whether the callback ran.
    pub fn click(&self) -> bool {
        if self.disabled {
            return false;
        }
        (self.on_change)(!self.checked);
        true
    }
}

impl fmt::Debug for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNode")
            .field("line", &self.line)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// Renders checkboxes as text lines.
#[derive(Debug, Clone)]
pub struct TextCheckbox {
    glyphs: Glyphs,
    indent: usize,
}

impl Default for TextCheckbox {
    fn default() -> Self {
        Self {
            glyphs: ASCII,
            indent: 2,
        }
    }
}

impl TextCheckbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Spaces before each child line.
    #[must_use]
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Lay out a rendered group: parent line, then indented children.
    #[must_use]
    pub fn layout(&self, nodes: &GroupNodes<TextNode>) -> Vec<String> {
        let pad = " ".repeat(self.indent);
        std::iter::once(nodes.parent.line.clone())
            .chain(nodes.children.iter().map(|c| format!("{pad}{}", c.line)))
            .collect()
    }
}

impl CheckboxRenderer for TextCheckbox {
    type Node = TextNode;

    fn render_checkbox(&mut self, props: CheckboxProps<'_>) -> TextNode {
        let glyph = self.glyphs.for_state(props.checked, props.indeterminate);
        let mut line = format!("{glyph} {}", props.label);
        if props.disabled {
            line.push_str(" (disabled)");
        }
        TextNode {
            line,
            checked: props.checked,
            disabled: props.disabled,
            on_change: props.on_change,
        }
    }
}
