//! Form field entities.
//!
//! These are the typed, in-memory form widgets handed to the XFDF encoder.
//! How they are captured (from a PDF, a UI, a request body) is up to the
//! caller.
//!
//! # Supported Field Types
//!
//! - **Text Fields** ([`TextField`]): free-text input
//! - **Checkboxes** ([`CheckBox`]): boolean on/off fields
//! - **Combo Boxes** ([`ComboBox`]): dropdown selection
//! - **Choice Fields** ([`ChoiceField`]): list box or radio group selection
//!
//! Any other widget kind (push buttons, signatures, barcodes, ...) is carried
//! as [`UnsupportedField`] and is left out of exported form data.
//!
//! # Example
//!
//! ```
//! use xfdf_oxide::forms::{CheckBox, FormField, TextField};
//!
//! let fields: Vec<FormField> = vec![
//!     TextField::new("name").with_value("John Doe").into(),
//!     CheckBox::new("agree").checked().into(),
//! ];
//! assert_eq!(fields[1].field_name(), "agree");
//! ```

mod checkbox;
mod choice_fields;
mod field_flags;
mod text_field;

pub use checkbox::CheckBox;
pub use choice_fields::{ChoiceField, ChoiceOption, ChoiceStyle, ComboBox};
pub use field_flags::FieldFlags;
pub use text_field::TextField;

use serde::{Deserialize, Serialize};

/// Common trait for all form field entities.
pub trait FieldWidget {
    /// Get the field name.
    fn field_name(&self) -> &str;

    /// Get the field type name (Tx, Btn, Ch, or the name of an unsupported kind).
    fn field_type(&self) -> &str;

    /// Get the field flags.
    fn flags(&self) -> FieldFlags {
        FieldFlags::empty()
    }
}

/// A widget whose kind has no XFDF value mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedField {
    /// Field name
    name: String,
    /// Kind label (e.g. "Sig", "PushButton")
    kind: String,
}

impl UnsupportedField {
    /// Create a placeholder for a widget of the given kind.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Kind label.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl FieldWidget for UnsupportedField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &str {
        &self.kind
    }
}

/// A form field of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormField {
    /// Free-text field
    Text(TextField),
    /// Checkbox
    CheckBox(CheckBox),
    /// Dropdown
    ComboBox(ComboBox),
    /// List box or radio group
    Choice(ChoiceField),
    /// Widget kind without an XFDF value mapping
    Other(UnsupportedField),
}

impl FormField {
    fn widget(&self) -> &dyn FieldWidget {
        match self {
            FormField::Text(f) => f,
            FormField::CheckBox(f) => f,
            FormField::ComboBox(f) => f,
            FormField::Choice(f) => f,
            FormField::Other(f) => f,
        }
    }

    /// Get the field name.
    pub fn field_name(&self) -> &str {
        self.widget().field_name()
    }

    /// Get the field type name.
    pub fn field_type(&self) -> &str {
        self.widget().field_type()
    }

    /// Get the field flags.
    pub fn flags(&self) -> FieldFlags {
        self.widget().flags()
    }
}

impl From<TextField> for FormField {
    fn from(field: TextField) -> Self {
        FormField::Text(field)
    }
}

impl From<CheckBox> for FormField {
    fn from(field: CheckBox) -> Self {
        FormField::CheckBox(field)
    }
}

impl From<ComboBox> for FormField {
    fn from(field: ComboBox) -> Self {
        FormField::ComboBox(field)
    }
}

impl From<ChoiceField> for FormField {
    fn from(field: ChoiceField) -> Self {
        FormField::Choice(field)
    }
}

impl From<UnsupportedField> for FormField {
    fn from(field: UnsupportedField) -> Self {
        FormField::Other(field)
    }
}
