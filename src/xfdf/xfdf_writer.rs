//! XFDF (XML Forms Data Format) writer implementation.
//!
//! Assembles the XFDF document from normalized field records.

use super::record::{check_xml_chars, FieldRecord};
use super::XFDF_NAMESPACE;
use crate::config::XfdfConfig;
use crate::error::Result;
use std::path::Path;

/// XFDF document writer.
///
/// Takes records that are already normalized and lays them out as
/// XFDF. Use [`XfdfEncoder`](super::XfdfEncoder) to go straight from form
/// field entities.
///
/// # Example
///
/// ```
/// use xfdf_oxide::xfdf::XfdfWriter;
///
/// let mut writer = XfdfWriter::new().with_file_spec("form.pdf")?;
/// writer.add_field("name", "John Doe")?;
/// writer.add_field("email", "john@example.com")?;
///
/// let xml = writer.to_xml();
/// assert!(xml.contains("<value>John Doe</value>"));
/// # Ok::<(), xfdf_oxide::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct XfdfWriter {
    /// Records to export, in output order
    records: Vec<FieldRecord>,
    /// Document the form data belongs to
    file_spec: Option<String>,
    /// Formatting options
    config: XfdfConfig,
}

impl XfdfWriter {
    /// Create a new XFDF writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an XFDF writer from normalized records.
    pub fn from_records(records: Vec<FieldRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Set the file specification (the `href` of the `<f>` element).
    ///
    /// Fails if the path holds a character XML 1.0 cannot represent.
    pub fn with_file_spec(mut self, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        check_xml_chars("document reference", &path)?;
        self.file_spec = Some(path);
        Ok(self)
    }

    /// Set formatting options.
    pub fn with_config(mut self, config: XfdfConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a text field to export.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.records.push(FieldRecord::with_value(name, value)?);
        Ok(())
    }

    /// Add a record directly.
    pub fn add_record(&mut self, record: FieldRecord) {
        self.records.push(record);
    }

    /// Records queued for export.
    pub fn records(&self) -> &[FieldRecord] {
        &self.records
    }

    /// Write XFDF data to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let xml = self.to_xml();
        std::fs::write(path.as_ref(), xml)?;
        Ok(())
    }

    /// Generate XFDF XML string.
    pub fn to_xml(&self) -> String {
        let indent = self.config.indent.as_str();
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');

        xml.push_str(&format!(
            "<xfdf xmlns=\"{}\" xml:space=\"preserve\">\n",
            XFDF_NAMESPACE
        ));

        if let Some(ref file_spec) = self.file_spec {
            xml.push_str(&format!("{}<f href=\"{}\"/>\n", indent, escape_attr(file_spec)));
        }

        if self.records.is_empty() {
            xml.push_str(&format!("{}<fields/>\n", indent));
        } else {
            xml.push_str(&format!("{}<fields>\n", indent));
            for record in &self.records {
                xml.push_str(&record_to_xml(record, indent, 2));
            }
            xml.push_str(&format!("{}</fields>\n", indent));
        }

        // Reserved for document identifiers; never populated here
        xml.push_str(&format!("{}<ids/>\n", indent));
        xml.push_str("</xfdf>\n");

        xml
    }

    /// Generate XFDF as bytes (UTF-8).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_xml().into_bytes()
    }
}

/// Convert a record to a `<field>` element.
fn record_to_xml(record: &FieldRecord, indent: &str, level: usize) -> String {
    let pad = indent.repeat(level);
    let name = escape_attr(record.name());

    match record.value() {
        Some(value) if !value.is_empty() => format!(
            "{pad}<field name=\"{name}\">\n{pad}{indent}<value>{}</value>\n{pad}</field>\n",
            escape_text(value)
        ),
        _ => format!("{pad}<field name=\"{name}\"/>\n"),
    }
}

/// Escape character data.
fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            // Parsers fold CR and CRLF into LF
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape an attribute value.
///
/// Whitespace characters are written as references so attribute-value
/// normalization leaves them intact.
fn escape_attr(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Hello"), "Hello");
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_text("a&b"), "a&amp;b");
        assert_eq!(escape_text("\"quoted\" 'single'"), "\"quoted\" 'single'");
        assert_eq!(escape_text("line1\r\nline2"), "line1&#xD;\nline2");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_attr("it's"), "it&apos;s");
        assert_eq!(escape_attr("a\tb\nc"), "a&#x9;b&#xA;c");
    }

    #[test]
    fn test_xfdf_writer_layout() {
        let mut writer = XfdfWriter::new().with_file_spec("form.pdf").unwrap();
        writer.add_field("name", "John Doe").unwrap();
        writer.add_record(FieldRecord::without_value("notes").unwrap());

        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<xfdf xmlns=\"http://ns.adobe.com/xfdf/\" xml:space=\"preserve\">\n",
            "  <f href=\"form.pdf\"/>\n",
            "  <fields>\n",
            "    <field name=\"name\">\n",
            "      <value>John Doe</value>\n",
            "    </field>\n",
            "    <field name=\"notes\"/>\n",
            "  </fields>\n",
            "  <ids/>\n",
            "</xfdf>\n",
        );

        assert_eq!(writer.to_xml(), expected);
    }

    #[test]
    fn test_xfdf_writer_omits_empty_value() {
        let mut writer = XfdfWriter::new();
        writer.add_field("blank", "").unwrap();

        let xml = writer.to_xml();
        assert!(xml.contains("<field name=\"blank\"/>"));
        assert!(!xml.contains("<value>"));
    }

    #[test]
    fn test_xfdf_writer_without_records() {
        let xml = XfdfWriter::new().to_xml();
        assert!(xml.contains("<fields/>"));
        assert!(xml.contains("<ids/>"));
        assert!(!xml.contains("<f "));
    }

    #[test]
    fn test_xfdf_writer_custom_indent() {
        let mut writer = XfdfWriter::new().with_config(XfdfConfig::new().with_indent("\t"));
        writer.add_field("a", "1").unwrap();

        let xml = writer.to_xml();
        assert!(xml.contains("\n\t<fields>\n\t\t<field name=\"a\">\n\t\t\t<value>1</value>\n"));
    }

    #[test]
    fn test_xfdf_writer_rejects_empty_name() {
        let mut writer = XfdfWriter::new();
        assert!(writer.add_field("", "value").is_err());
        assert!(writer.records().is_empty());
    }

    #[test]
    fn test_xfdf_writer_rejects_unrepresentable_chars() {
        let mut writer = XfdfWriter::new();
        assert!(matches!(writer.add_field("a", "x\u{1}y"), Err(Error::InvalidArgument(_))));
        assert!(matches!(writer.add_field("a\u{C}", "x"), Err(Error::InvalidArgument(_))));
        assert!(writer.records().is_empty());

        assert!(matches!(
            XfdfWriter::new().with_file_spec("form\u{FFFE}.pdf"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_xfdf_escapes_special_chars() {
        let mut writer = XfdfWriter::new().with_file_spec("R&D \"draft\".pdf").unwrap();
        writer.add_field("company", "Smith & Jones <Consulting>").unwrap();

        let xml = writer.to_xml();

        assert!(xml.contains("<f href=\"R&amp;D &quot;draft&quot;.pdf\"/>"));
        assert!(xml.contains("<value>Smith &amp; Jones &lt;Consulting&gt;</value>"));
    }
}
