//! Checkbox entity.
//!
//! # Example
//!
//! ```
//! use xfdf_oxide::forms::CheckBox;
//!
//! let checkbox = CheckBox::new("agree").checked();
//! assert!(checkbox.is_checked());
//! ```

use super::{FieldFlags, FieldWidget};
use serde::{Deserialize, Serialize};

/// A checkbox field.
///
/// Checkboxes toggle between two states. In XFDF the state is written as
/// `On` or `Off` (see [`XfdfConfig`](crate::config::XfdfConfig)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckBox {
    /// Field name (unique identifier)
    name: String,
    /// Whether the checkbox is checked
    checked: bool,
    /// Tooltip text
    tooltip: Option<String>,
    /// Field flags
    #[serde(default)]
    flags: FieldFlags,
}

impl CheckBox {
    /// Create a new, unchecked checkbox.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
            tooltip: None,
            flags: FieldFlags::empty(),
        }
    }

    /// Set the checkbox as checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Set the checkbox as unchecked.
    pub fn unchecked(mut self) -> Self {
        self.checked = false;
        self
    }

    /// Set checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set tooltip text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set field flags.
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the checkbox is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Tooltip text, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

impl FieldWidget for CheckBox {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &str {
        "Btn"
    }

    fn flags(&self) -> FieldFlags {
        self.flags
    }
}
