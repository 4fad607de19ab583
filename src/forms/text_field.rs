//! Text field entity.
//!
//! # Example
//!
//! ```
//! use xfdf_oxide::forms::{FieldWidget, TextField};
//!
//! let field = TextField::new("username")
//!     .with_value("john_doe")
//!     .with_max_length(50)
//!     .required();
//!
//! assert_eq!(field.field_name(), "username");
//! assert_eq!(field.value(), Some("john_doe"));
//! ```

use super::{FieldFlags, FieldWidget};
use serde::{Deserialize, Serialize};

/// A free-text input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField {
    /// Field name (unique identifier)
    name: String,
    /// Current value (text content)
    value: Option<String>,
    /// Maximum number of characters
    max_length: Option<u32>,
    /// Tooltip text
    tooltip: Option<String>,
    /// Field flags
    #[serde(default)]
    flags: FieldFlags,
}

impl TextField {
    /// Create a new text field with no value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            max_length: None,
            tooltip: None,
            flags: FieldFlags::empty(),
        }
    }

    /// Set the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set maximum character length.
    pub fn with_max_length(mut self, max_len: u32) -> Self {
        self.max_length = Some(max_len);
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

    /// Make the field read-only.
    pub fn read_only(mut self) -> Self {
        self.flags |= FieldFlags::READ_ONLY;
        self
    }

    /// Make the field required.
    pub fn required(mut self) -> Self {
        self.flags |= FieldFlags::REQUIRED;
        self
    }

    /// Current text value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Maximum character length, if limited.
    pub fn max_length(&self) -> Option<u32> {
        self.max_length
    }

    /// Tooltip text, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

impl FieldWidget for TextField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &str {
        "Tx"
    }

    fn flags(&self) -> FieldFlags {
        self.flags
    }
}
