#![forbid(unsafe_code)]

//! Click replay against a rendered group.
//!
//! Every click goes through a freshly rendered node, the same way a user
//! clicks whatever is on screen. A frame is printed only when the group
//! requested a re-render.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::info;
use tricheck_core::{GroupConfig, GroupError};
use tricheck_widgets::{GroupView, RenderRequest, TextCheckbox};

use crate::error::{DemoError, Result};

/// What to click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Parent,
    Child(usize),
}

impl FromStr for ClickTarget {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "parent" | "p" => Ok(Self::Parent),
            _ => s
                .parse::<usize>()
                .map(Self::Child)
                .map_err(|_| DemoError::InvalidTarget(s.to_string())),
        }
    }
}

impl fmt::Display for ClickTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => f.write_str("parent"),
            Self::Child(i) => write!(f, "child {i}"),
        }
    }
}

pub struct Session {
    view: GroupView,
    renderer: TextCheckbox,
    request: RenderRequest,
}

impl Session {
    pub fn new(config: GroupConfig, renderer: TextCheckbox) -> Result<Self> {
        let view = GroupView::new(config)?;
        let request = view.watch();
        Ok(Self {
            view,
            renderer,
            request,
        })
    }

    #[must_use]
    pub fn view(&self) -> &GroupView {
        &self.view
    }

    /// Parent first, then each child in display order.
    #[must_use]
    pub fn scenario_targets(&self) -> Vec<ClickTarget> {
        std::iter::once(ClickTarget::Parent)
            .chain((0..self.view.group().len()).map(ClickTarget::Child))
            .collect()
    }

    /// Click one target on the current frame. Returns whether the group changed.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Group`] with [`GroupError::InvalidIndex`] for a
    /// child that is not on screen.
    pub fn click(&mut self, target: ClickTarget) -> Result<bool> {
        let nodes = self.view.render(&mut self.renderer);
        let node = match target {
            ClickTarget::Parent => &nodes.parent,
            ClickTarget::Child(index) => {
                nodes
                    .children
                    .get(index)
                    .ok_or(GroupError::InvalidIndex {
                        index,
                        len: nodes.children.len(),
                    })?
            }
        };
        let accepted = node.click();
        let changed = self.request.take();
        info!(clicked = %target, accepted, changed, "click");
        Ok(changed)
    }

    /// Current frame as lines.
    #[must_use]
    pub fn frame(&mut self) -> Vec<String> {
        let nodes = self.view.render(&mut self.renderer);
        self.renderer.layout(&nodes)
    }

    /// Print the initial frame, then click each target and print the result.
    pub fn replay(&mut self, targets: &[ClickTarget], out: &mut impl Write) -> Result<()> {
        self.write_frame(out)?;
        for &target in targets {
            writeln!(out, "> click {target}")?;
            if self.click(target)? {
                self.write_frame(out)?;
            } else {
                writeln!(out, "(no change)")?;
            }
        }
        Ok(())
    }

    fn write_frame(&mut self, out: &mut impl Write) -> Result<()> {
        for line in self.frame() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
