//! Field type dispatch: reduce each [`FormField`] variant to a [`FieldRecord`].
//!
//! | Variant | value |
//! |---|---|
//! | Text | raw text value (may be absent) |
//! | CheckBox | `On` when checked, otherwise `Off` |
//! | ComboBox | selected value |
//! | Choice | selected value |
//! | Other | none; the field is dropped |
//!
//! Adding a field kind means adding a [`FormField`] variant and an arm here.

use super::record::FieldRecord;
use crate::config::XfdfConfig;
use crate::error::Result;
use crate::forms::{FieldWidget, FormField};

/// Normalize a field into a record.
///
/// Returns `Ok(None)` for kinds with no XFDF value mapping and an error if a
/// supported field has an empty name.
pub fn normalize_field(field: &FormField, config: &XfdfConfig) -> Result<Option<FieldRecord>> {
    let (name, value) = match field {
        FormField::Text(f) => (f.field_name(), f.value().map(str::to_string)),
        FormField::CheckBox(f) => (
            f.field_name(),
            Some(config.checkbox_value(f.is_checked()).to_string()),
        ),
        FormField::ComboBox(f) => (f.field_name(), f.selected().map(str::to_string)),
        FormField::Choice(f) => (f.field_name(), f.selected().map(str::to_string)),
        FormField::Other(_) => return Ok(None),
    };

    FieldRecord::new(name, value).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::forms::{CheckBox, ChoiceField, ChoiceStyle, ComboBox, TextField, UnsupportedField};

    fn normalize(field: impl Into<FormField>) -> Option<FieldRecord> {
        normalize_field(&field.into(), &XfdfConfig::default()).unwrap()
    }

    #[test]
    fn test_text_field_value_passes_through() {
        let record = normalize(TextField::new("name").with_value("John Doe")).unwrap();
        assert_eq!(record.name(), "name");
        assert_eq!(record.value(), Some("John Doe"));

        let record = normalize(TextField::new("notes")).unwrap();
        assert_eq!(record.value(), None);
    }

    #[test]
    fn test_checkbox_becomes_on_off() {
        let on = normalize(CheckBox::new("agree").checked()).unwrap();
        assert_eq!(on.value(), Some("On"));

        let off = normalize(CheckBox::new("decline")).unwrap();
        assert_eq!(off.value(), Some("Off"));
    }

    #[test]
    fn test_checkbox_uses_configured_values() {
        let config = XfdfConfig::new().with_checkbox_values("Yes", "No");
        let field: FormField = CheckBox::new("agree").checked().into();
        let record = normalize_field(&field, &config).unwrap().unwrap();
        assert_eq!(record.value(), Some("Yes"));
    }

    #[test]
    fn test_choice_kinds_use_selection() {
        let combo = normalize(ComboBox::new("country").with_value("CA")).unwrap();
        assert_eq!(combo.value(), Some("CA"));

        let radio = normalize(ChoiceField::new("size", ChoiceStyle::Radio).with_value("M")).unwrap();
        assert_eq!(radio.value(), Some("M"));

        let unselected = normalize(ChoiceField::new("colors", ChoiceStyle::ListBox)).unwrap();
        assert_eq!(unselected.value(), None);
    }

    #[test]
    fn test_other_kind_is_dropped() {
        assert!(normalize(UnsupportedField::new("sign_here", "Sig")).is_none());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let field: FormField = TextField::new("").with_value("x").into();
        let err = normalize_field(&field, &XfdfConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
