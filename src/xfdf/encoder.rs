//! Form field entities to XFDF.

use super::normalize::normalize_field;
use super::record::{check_xml_chars, FieldRecord};
use super::xfdf_writer::XfdfWriter;
use crate::config::XfdfConfig;
use crate::error::{Error, Result};
use crate::forms::FormField;

/// Why a field was left out of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The field kind has no XFDF value mapping
    UnsupportedKind(String),
    /// The field is flagged NO_EXPORT
    NoExport,
}

/// A field that was not written, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    /// Index in the input sequence
    pub index: usize,
    /// Field name
    pub name: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of encoding a field collection.
#[derive(Debug, Clone)]
pub struct EncodedXfdf {
    /// The XFDF document
    pub xml: String,
    /// Records written, in input order
    pub records: Vec<FieldRecord>,
    /// Fields left out of the document
    pub skipped: Vec<SkippedField>,
}

/// Encodes form field entities as XFDF.
///
/// # Example
///
/// ```
/// use xfdf_oxide::forms::{CheckBox, FormField, TextField, UnsupportedField};
/// use xfdf_oxide::xfdf::XfdfEncoder;
///
/// let fields: Vec<FormField> = vec![
///     TextField::new("name").with_value("John Doe").into(),
///     CheckBox::new("agree").checked().into(),
///     UnsupportedField::new("submit", "PushButton").into(),
/// ];
///
/// let encoded = XfdfEncoder::new().encode(&fields, "contract.pdf")?;
/// assert_eq!(encoded.records.len(), 2);
/// assert_eq!(encoded.skipped.len(), 1);
/// assert!(encoded.xml.contains("<f href=\"contract.pdf\"/>"));
/// # Ok::<(), xfdf_oxide::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct XfdfEncoder {
    config: XfdfConfig,
}

impl XfdfEncoder {
    /// Create an encoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with a custom configuration.
    pub fn with_config(config: XfdfConfig) -> Self {
        Self { config }
    }

    /// Encode a non-empty field list for the given document reference.
    pub fn encode(&self, fields: &[FormField], file_spec: &str) -> Result<EncodedXfdf> {
        check_arguments(fields.len(), file_spec)?;
        self.encode_entities(fields.iter().map(Some), file_spec)
    }

    /// Encode a sequence whose slots may be empty.
    ///
    /// An empty slot is an error ([`Error::NullEntity`]), not a skip.
    pub fn encode_slots(&self, fields: &[Option<FormField>], file_spec: &str) -> Result<EncodedXfdf> {
        check_arguments(fields.len(), file_spec)?;
        self.encode_entities(fields.iter().map(Option::as_ref), file_spec)
    }

    fn encode_entities<'a>(
        &self,
        fields: impl Iterator<Item = Option<&'a FormField>>,
        file_spec: &str,
    ) -> Result<EncodedXfdf> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for (index, slot) in fields.enumerate() {
            let field = slot.ok_or(Error::NullEntity { index })?;

            // Normalize first so an invalid field fails whatever its flags
            let Some(record) = normalize_field(field, &self.config)? else {
                log::debug!(
                    "Skipping field '{}': unsupported kind '{}'",
                    field.field_name(),
                    field.field_type()
                );
                skipped.push(SkippedField {
                    index,
                    name: field.field_name().to_string(),
                    reason: SkipReason::UnsupportedKind(field.field_type().to_string()),
                });
                continue;
            };

            if field.flags().is_exportable() {
                records.push(record);
            } else {
                log::debug!("Skipping field '{}': flagged NO_EXPORT", field.field_name());
                skipped.push(SkippedField {
                    index,
                    name: field.field_name().to_string(),
                    reason: SkipReason::NoExport,
                });
            }
        }

        let writer = XfdfWriter::from_records(records)
            .with_file_spec(file_spec)?
            .with_config(self.config.clone());
        let xml = writer.to_xml();

        log::debug!(
            "Encoded {} XFDF fields for '{}' ({} skipped)",
            writer.records().len(),
            file_spec,
            skipped.len()
        );

        Ok(EncodedXfdf {
            xml,
            records: writer.records().to_vec(),
            skipped,
        })
    }
}

fn check_arguments(field_count: usize, file_spec: &str) -> Result<()> {
    if field_count == 0 {
        return Err(Error::invalid_argument("field list must not be empty"));
    }
    if file_spec.is_empty() {
        return Err(Error::invalid_argument("document reference must not be empty"));
    }
    check_xml_chars("document reference", file_spec)
}
