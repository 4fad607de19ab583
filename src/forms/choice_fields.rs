//! Choice field entities: combo boxes and list/radio-style choices.
//!
//! # Example
//!
//! ```
//! use xfdf_oxide::forms::{ChoiceField, ChoiceStyle, ComboBox};
//!
//! let country = ComboBox::new("country")
//!     .with_options(vec!["USA", "Canada", "UK"])
//!     .with_value("Canada");
//! assert_eq!(country.selected(), Some("Canada"));
//!
//! let size = ChoiceField::new("size", ChoiceStyle::Radio)
//!     .with_options(vec!["S", "M", "L"])
//!     .select_index(2);
//! assert_eq!(size.selected(), Some("L"));
//! ```

use super::{FieldFlags, FieldWidget};
use serde::{Deserialize, Serialize};

/// A choice option with display text and export value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Display text shown to user
    pub display: String,
    /// Export value (may differ from display)
    pub export: String,
}

impl ChoiceOption {
    /// Create a new option where display and export are the same.
    pub fn new(value: impl Into<String>) -> Self {
        let v = value.into();
        Self {
            display: v.clone(),
            export: v,
        }
    }

    /// Create a new option with different display and export values.
    pub fn new_with_export(display: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            export: export.into(),
        }
    }
}

/// Presentation of a [`ChoiceField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChoiceStyle {
    /// Scrollable list box
    #[default]
    ListBox,
    /// Group of mutually exclusive radio buttons
    Radio,
}

/// A combo box (dropdown) field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboBox {
    /// Field name
    name: String,
    /// Available options
    options: Vec<ChoiceOption>,
    /// Selected value
    value: Option<String>,
    /// Whether a custom value may be typed
    editable: bool,
    /// Field flags
    #[serde(default)]
    flags: FieldFlags,
}

impl ComboBox {
    /// Create a new combo box with no options and no selection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            value: None,
            editable: false,
            flags: FieldFlags::empty(),
        }
    }

    /// Add options from strings (display = export).
    pub fn with_options(mut self, options: Vec<impl Into<String>>) -> Self {
        self.options = options.into_iter().map(ChoiceOption::new).collect();
        self
    }

    /// Add options with display/export pairs.
    pub fn with_choice_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the selected value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Select the option at `index` (its export value). Out-of-range indices clear the selection.
    pub fn select_index(mut self, index: usize) -> Self {
        self.value = self.options.get(index).map(|o| o.export.clone());
        self
    }

    /// Allow the user to type a custom value.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Set field flags.
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Available options.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Selected value, if any.
    pub fn selected(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether custom values are allowed.
    pub fn is_editable(&self) -> bool {
        self.editable
    }
}

impl FieldWidget for ComboBox {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &str {
        "Ch"
    }

    fn flags(&self) -> FieldFlags {
        self.flags
    }
}

/// A list- or radio-style choice field with a single selected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceField {
    /// Field name
    name: String,
    /// Presentation style
    style: ChoiceStyle,
    /// Available options
    options: Vec<ChoiceOption>,
    /// Selected value
    value: Option<String>,
    /// Field flags
    #[serde(default)]
    flags: FieldFlags,
}

impl ChoiceField {
    /// Create a new choice field with no options and no selection.
    pub fn new(name: impl Into<String>, style: ChoiceStyle) -> Self {
        Self {
            name: name.into(),
            style,
            options: Vec::new(),
            value: None,
            flags: FieldFlags::empty(),
        }
    }

    /// Add options from strings (display = export).
    pub fn with_options(mut self, options: Vec<impl Into<String>>) -> Self {
        self.options = options.into_iter().map(ChoiceOption::new).collect();
        self
    }

    /// Add options with display/export pairs.
    pub fn with_choice_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the selected value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Select the option at `index` (its export value). Out-of-range indices clear the selection.
    pub fn select_index(mut self, index: usize) -> Self {
        self.value = self.options.get(index).map(|o| o.export.clone());
        self
    }

    /// Set field flags.
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Presentation style.
    pub fn style(&self) -> ChoiceStyle {
        self.style
    }

    /// Available options.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Selected value, if any.
    pub fn selected(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl FieldWidget for ChoiceField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &str {
        match self.style {
            ChoiceStyle::ListBox => "Ch",
            ChoiceStyle::Radio => "Btn",
        }
    }

    fn flags(&self) -> FieldFlags {
        self.flags
    }
}
