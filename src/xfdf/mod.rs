//! XFDF (XML Forms Data Format) encoding and decoding.
//!
//! XFDF carries form field values separately from the PDF they belong to:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <xfdf xmlns="http://ns.adobe.com/xfdf/" xml:space="preserve">
//!   <f href="contract.pdf"/>
//!   <fields>
//!     <field name="agree">
//!       <value>On</value>
//!     </field>
//!   </fields>
//!   <ids/>
//! </xfdf>
//! ```
//!
//! Field entities are reduced to [`FieldRecord`]s (name + optional value)
//! before they are written, and parsed `<field>` elements are reduced to the
//! same records. Annotations, signatures and deleted-field lists are not
//! supported.
//!
//! ## Example
//!
//! ```
//! use xfdf_oxide::forms::{CheckBox, FormField};
//! use xfdf_oxide::xfdf::{generate_xfdf, parse_xfdf};
//!
//! let fields: Vec<FormField> = vec![CheckBox::new("agree").checked().into()];
//! let xml = generate_xfdf(&fields, "contract.pdf")?;
//!
//! let records = parse_xfdf(&xml)?;
//! assert_eq!(records[0].name(), "agree");
//! assert_eq!(records[0].value(), Some("On"));
//! # Ok::<(), xfdf_oxide::Error>(())
//! ```

mod encoder;
mod normalize;
mod record;
mod xfdf_reader;
mod xfdf_writer;

pub use encoder::{EncodedXfdf, SkipReason, SkippedField, XfdfEncoder};
pub use normalize::normalize_field;
pub use record::FieldRecord;
pub use xfdf_reader::{ParsedXfdf, XfdfReader};
pub use xfdf_writer::XfdfWriter;

use crate::error::Result;
use crate::forms::FormField;

/// Namespace URI of every XFDF element.
pub const XFDF_NAMESPACE: &str = "http://ns.adobe.com/xfdf/";

/// Generate an XFDF document for `fields`, linked to the document `file_spec`.
///
/// Fields of unsupported kinds are left out. Fails with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `fields` or
/// `file_spec` is empty.
pub fn generate_xfdf(fields: &[FormField], file_spec: &str) -> Result<String> {
    XfdfEncoder::new()
        .encode(fields, file_spec)
        .map(|encoded| encoded.xml)
}

/// Like [`generate_xfdf`], for a sequence whose slots may be empty.
///
/// Fails with [`Error::NullEntity`](crate::Error::NullEntity) on the first
/// empty slot.
pub fn generate_xfdf_from_slots(fields: &[Option<FormField>], file_spec: &str) -> Result<String> {
    XfdfEncoder::new()
        .encode_slots(fields, file_spec)
        .map(|encoded| encoded.xml)
}

/// Parse an XFDF document into field records.
///
/// Returns an empty list when the document has no `<fields>` container, and
/// skips `<field>` elements without a name.
pub fn parse_xfdf(xml: &str) -> Result<Vec<FieldRecord>> {
    XfdfReader::new().parse(xml).map(|parsed| parsed.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::forms::{CheckBox, TextField};

    #[test]
    fn test_checkbox_example() {
        let fields: Vec<FormField> = vec![CheckBox::new("agree").checked().into()];
        let xml = generate_xfdf(&fields, "contract.pdf").unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<f href=\"contract.pdf\"/>"));
        assert!(xml.contains("<field name=\"agree\">"));
        assert!(xml.contains("<value>On</value>"));
    }

    #[test]
    fn test_generate_then_parse() {
        let fields: Vec<FormField> = vec![
            TextField::new("name").with_value("John Doe").into(),
            TextField::new("notes").into(),
            CheckBox::new("subscribe").into(),
        ];

        let records = parse_xfdf(&generate_xfdf(&fields, "form.pdf").unwrap()).unwrap();
        assert_eq!(
            records,
            vec![
                FieldRecord::with_value("name", "John Doe").unwrap(),
                FieldRecord::without_value("notes").unwrap(),
                FieldRecord::with_value("subscribe", "Off").unwrap(),
            ]
        );
    }

    #[test]
    fn test_fails_closed_on_bad_input() {
        assert!(matches!(generate_xfdf(&[], "form.pdf"), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            generate_xfdf_from_slots(&[None], "form.pdf"),
            Err(Error::NullEntity { index: 0 })
        ));
        assert!(matches!(parse_xfdf(""), Err(Error::InvalidArgument(_))));
        assert!(parse_xfdf("not xml").unwrap_err().is_parse_failure());
    }
}
