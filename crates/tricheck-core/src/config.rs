#![forbid(unsafe_code)]

//! Group configuration: labels, initial values, and disabled flags.
//!
//! With the `group-config` feature a [`GroupConfig`] can be loaded from TOML
//! or JSON:
//!
//! ```toml
//! parent_label = "Select all"
//!
//! [[children]]
//! label = "Child 1"
//! checked = true
//!
//! [[children]]
//! label = "Child 2"
//! ```

#[cfg(feature = "group-config")]
use std::path::Path;

#[cfg(feature = "group-config")]
use serde::{Deserialize, Serialize};

use crate::controller::TriStateGroupController;
use crate::error::GroupConfigError;
use crate::state::GroupState;

/// One child checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "group-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "group-config", serde(default))]
pub struct ChildConfig {
    pub label: String,
    /// Initial checked value.
    pub checked: bool,
    pub disabled: bool,
}

impl ChildConfig {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A parent checkbox and its children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "group-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "group-config", serde(default))]
pub struct GroupConfig {
    pub parent_label: String,
    pub children: Vec<ChildConfig>,
    /// Disables the parent and every child.
    pub disabled: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            parent_label: "Parent".to_string(),
            children: Vec::new(),
            disabled: false,
        }
    }
}

impl GroupConfig {
    pub fn new(parent_label: impl Into<String>) -> Self {
        Self {
            parent_label: parent_label.into(),
            ..Self::default()
        }
    }

    /// Parent with two children, the first checked: the canonical
    /// indeterminate example.
    #[must_use]
    pub fn reference() -> Self {
        Self::new("Parent")
            .child("Child 1", true)
            .child("Child 2", false)
    }

    #[must_use]
    pub fn child(mut self, label: impl Into<String>, checked: bool) -> Self {
        self.children.push(ChildConfig::new(label, checked));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ChildConfig) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Initial checked values in display order.
    #[must_use]
    pub fn initial_values(&self) -> Vec<bool> {
        self.children.iter().map(|c| c.checked).collect()
    }

    /// Whether the child at `index` accepts changes.
    #[must_use]
    pub fn child_enabled(&self, index: usize) -> bool {
        !self.disabled && self.children.get(index).is_some_and(|c| !c.disabled)
    }

    /// Validate the configuration.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.parent_label.trim().is_empty() {
            errors.push("parent_label must not be blank".to_string());
        }
        if self.children.is_empty() {
            errors.push("group must have at least one child".to_string());
        }
        for (i, child) in self.children.iter().enumerate() {
            if child.label.trim().is_empty() {
                errors.push(format!("children[{i}].label must not be blank"));
            }
        }
        errors
    }

    /// Validate and build a controller seeded with the initial values.
    ///
    /// # Errors
    ///
    /// Returns [`GroupConfigError::Validation`] if [`validate`](Self::validate)
    /// reports anything.
    pub fn build(&self) -> Result<TriStateGroupController, GroupConfigError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(GroupConfigError::Validation(errors));
        }
        let state = GroupState::new(self.initial_values())
            .map_err(|e| GroupConfigError::Validation(vec![e.to_string()]))?;
        Ok(TriStateGroupController::from_state(state))
    }

    /// Load from a TOML string.
    #[cfg(feature = "group-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, GroupConfigError> {
        toml::from_str(s).map_err(GroupConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "group-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GroupConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "group-config")]
    pub fn from_json_str(s: &str) -> Result<Self, GroupConfigError> {
        serde_json::from_str(s).map_err(GroupConfigError::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DerivedParentState;

    #[test]
    fn reference_config_is_indeterminate() {
        let config = GroupConfig::reference();
        assert_eq!(config.initial_values(), vec![true, false]);
        let controller = config.build().unwrap();
        assert_eq!(controller.parent_state(), DerivedParentState::INDETERMINATE);
    }

    #[test]
    fn empty_group_fails_validation() {
        let err = GroupConfig::new("Parent").build().unwrap_err();
        match err {
            GroupConfigError::Validation(errors) => {
                assert_eq!(errors, vec!["group must have at least one child"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_labels_reported() {
        let errors = GroupConfig::new(" ").child("", false).validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].contains("children[0]"));
    }

    #[test]
    fn child_enabled_respects_group_and_child_flags() {
        let config = GroupConfig::new("Parent")
            .child("a", false)
            .with_child(ChildConfig::new("b", false).disabled(true));
        assert!(config.child_enabled(0));
        assert!(!config.child_enabled(1));
        assert!(!config.child_enabled(2));
        assert!(!config.clone().disabled(true).child_enabled(0));
    }

    #[cfg(feature = "group-config")]
    #[test]
    fn loads_toml() {
        let config = GroupConfig::from_toml_str(
            r#"
parent_label = "All"

[[children]]
label = "One"
checked = true

[[children]]
label = "Two"
disabled = true
"#,
        )
        .unwrap();
        assert_eq!(config.parent_label, "All");
        assert_eq!(config.initial_values(), vec![true, false]);
        assert!(config.children[1].disabled);
    }

    #[cfg(feature = "group-config")]
    #[test]
    fn loads_json() {
        let config = GroupConfig::from_json_str(
            r#"{"children":[{"label":"x","checked":true},{"label":"y","checked":true}]}"#,
        )
        .unwrap();
        assert_eq!(config.parent_label, "Parent");
        assert_eq!(config.initial_values(), vec![true, true]);
    }

    #[cfg(feature = "group-config")]
    #[test]
    fn bad_toml_is_parse_error() {
        let err = GroupConfig::from_toml_str("children = 3").unwrap_err();
        assert!(matches!(err, GroupConfigError::Toml(_)));
    }
}
