//! Normalized field records.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A form field reduced to its XFDF shape: a name and an optional value.
///
/// Every field kind is normalized to this record before serialization, and
/// every parsed `<field>` element is reduced to it after deserialization.
/// The name is never empty, and neither name nor value holds a character
/// that XML 1.0 cannot represent. An absent value and an empty value are
/// both written without a `<value>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRecord {
    name: String,
    value: Option<String>,
}

impl FieldRecord {
    /// Create a record, rejecting an empty name and characters XML cannot carry.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("field name must not be empty"));
        }
        check_xml_chars("field name", &name)?;
        if let Some(ref value) = value {
            check_xml_chars("field value", value)?;
        }
        Ok(Self { name, value })
    }

    /// Create a record carrying a value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::new(name, Some(value.into()))
    }

    /// Create a record without a value.
    pub fn without_value(name: impl Into<String>) -> Result<Self> {
        Self::new(name, None)
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the record carries a non-empty value (and so gets a `<value>` element).
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Split into name and value.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.name, self.value)
    }
}

/// Whether `c` matches the XML 1.0 `Char` production.
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// First character of `s` that an XML 1.0 document cannot contain, even as a reference.
pub(crate) fn find_invalid_xml_char(s: &str) -> Option<char> {
    s.chars().find(|&c| !is_xml_char(c))
}

/// Reject text destined for the document that XML 1.0 cannot represent.
pub(crate) fn check_xml_chars(what: &str, s: &str) -> Result<()> {
    match find_invalid_xml_char(s) {
        Some(c) => Err(Error::invalid_argument(format!(
            "{} contains U+{:04X}, which XML 1.0 cannot represent",
            what, c as u32
        ))),
        None => Ok(()),
    }
}
