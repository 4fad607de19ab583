//! XFDF reader implementation.
//!
//! Streams the document with quick-xml's namespace-resolving reader and
//! collects the `<field>` elements of the root's `<fields>` container.
//! Only the subset of XFDF that carries field values is read; annotations,
//! `<ids>` and other elements are passed over.

use super::record::{find_invalid_xml_char, FieldRecord};
use super::XFDF_NAMESPACE;
use crate::config::XfdfConfig;
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// Nesting depth of the root's children, `<f>` and `<fields>` (root is depth 1).
const ROOT_CHILD_DEPTH: usize = 2;
/// Nesting depth of `<field>` elements.
const FIELD_DEPTH: usize = 3;
/// Nesting depth of `<value>` elements.
const VALUE_DEPTH: usize = 4;

/// Field data read from an XFDF document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedXfdf {
    /// The `href` of the `<f>` element, if present
    pub file_spec: Option<String>,
    /// One record per named `<field>` element, in document order
    pub records: Vec<FieldRecord>,
    /// Number of `<field>` elements dropped for lacking a name
    pub skipped: usize,
}

/// A `<field>` element being read.
#[derive(Debug, Default)]
struct PendingField {
    name: Option<String>,
    value: Option<String>,
    in_value: bool,
}

/// XFDF reader.
///
/// # Example
///
/// ```
/// use xfdf_oxide::xfdf::XfdfReader;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <xfdf xmlns="http://ns.adobe.com/xfdf/" xml:space="preserve">
///   <f href="form.pdf"/>
///   <fields>
///     <field name="name"><value>John Doe</value></field>
///   </fields>
/// </xfdf>"#;
///
/// let parsed = XfdfReader::new().parse(xml)?;
/// assert_eq!(parsed.file_spec.as_deref(), Some("form.pdf"));
/// assert_eq!(parsed.records[0].value(), Some("John Doe"));
/// # Ok::<(), xfdf_oxide::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct XfdfReader {
    config: XfdfConfig,
}

impl XfdfReader {
    /// Create a reader with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom configuration.
    pub fn with_config(config: XfdfConfig) -> Self {
        Self { config }
    }

    /// Parse XFDF text.
    pub fn parse(&self, xml: &str) -> Result<ParsedXfdf> {
        if xml.is_empty() {
            return Err(Error::invalid_argument("XFDF text must not be empty"));
        }

        let mut reader = NsReader::from_str(xml);
        let mut parsed = ParsedXfdf::default();

        let mut depth = 0usize;
        let mut root_seen = false;
        let mut root_closed = false;
        let mut in_fields = false;
        let mut field: Option<PendingField> = None;

        loop {
            let (in_namespace, event) = match reader.read_resolved_event() {
                Ok((ns, event)) => (self.namespace_matches(&ns), event),
                Err(source) => {
                    return Err(Error::XmlParse {
                        position: reader.buffer_position(),
                        source,
                    })
                },
            };

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    if depth == 0 {
                        if root_closed {
                            return Err(Error::MalformedXml(
                                "more than one root element".to_string(),
                            ));
                        }
                        root_seen = true;
                    }

                    let local = e.local_name();
                    let local = local.as_ref();
                    let is = |expected: &str| in_namespace && local == expected.as_bytes();

                    let wanted: Option<&[u8]> = match depth + 1 {
                        ROOT_CHILD_DEPTH if is("f") => Some(b"href".as_slice()),
                        FIELD_DEPTH if in_fields && is("field") => Some(b"name".as_slice()),
                        _ => None,
                    };
                    let attr_value = scan_attributes(&reader, e, wanted)?;

                    match depth + 1 {
                        ROOT_CHILD_DEPTH if is("f") => {
                            if parsed.file_spec.is_none() {
                                parsed.file_spec = attr_value;
                            }
                        },
                        ROOT_CHILD_DEPTH if is("fields") => in_fields = !is_empty,
                        FIELD_DEPTH if in_fields && is("field") => {
                            let pending = PendingField {
                                name: attr_value,
                                ..PendingField::default()
                            };
                            if is_empty {
                                finish_field(pending, &mut parsed)?;
                            } else {
                                field = Some(pending);
                            }
                        },
                        VALUE_DEPTH if is("value") => {
                            if let Some(pending) = field.as_mut() {
                                if pending.value.is_none() {
                                    pending.value = Some(String::new());
                                    pending.in_value = !is_empty;
                                }
                            }
                        },
                        _ => {},
                    }

                    if is_empty {
                        if depth == 0 {
                            root_closed = true;
                        }
                    } else {
                        depth += 1;
                    }
                },
                Event::End(_) => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        Error::MalformedXml("closing tag without an open element".to_string())
                    })?;

                    // Depth left after the element closed
                    match depth {
                        0 => root_closed = true,
                        1 => in_fields = false,
                        2 => {
                            if let Some(pending) = field.take() {
                                finish_field(pending, &mut parsed)?;
                            }
                        },
                        3 => {
                            if let Some(pending) = field.as_mut() {
                                pending.in_value = false;
                            }
                        },
                        _ => {},
                    }
                },
                Event::Text(ref t) => {
                    let text = t.unescape().map_err(|s| parse_error(&reader, s))?;
                    check_chars(&text)?;
                    if let Some(pending) = value_target(&mut field, depth) {
                        if let Some(value) = pending.value.as_mut() {
                            value.push_str(&text);
                        }
                    } else if depth == 0 && !text.chars().all(|c| c.is_ascii_whitespace()) {
                        return Err(Error::MalformedXml(
                            "text content outside the root element".to_string(),
                        ));
                    }
                },
                Event::CData(ref c) => {
                    let text = std::str::from_utf8(c).map_err(|e| {
                        parse_error(&reader, quick_xml::Error::NonDecodable(Some(e)))
                    })?;
                    check_chars(text)?;
                    if let Some(pending) = value_target(&mut field, depth) {
                        if let Some(value) = pending.value.as_mut() {
                            value.push_str(text);
                        }
                    } else if depth == 0 {
                        return Err(Error::MalformedXml(
                            "CDATA section outside the root element".to_string(),
                        ));
                    }
                },
                Event::Eof => {
                    if !root_seen {
                        return Err(Error::MalformedXml("document has no root element".to_string()));
                    }
                    if depth > 0 {
                        return Err(Error::MalformedXml(format!(
                            "unexpected end of document with {} unclosed element(s)",
                            depth
                        )));
                    }
                    break;
                },
                // Declarations, comments, processing instructions, doctype
                _ => {},
            }
        }

        log::debug!(
            "Parsed {} XFDF fields ({} without a name)",
            parsed.records.len(),
            parsed.skipped
        );

        Ok(parsed)
    }

    fn namespace_matches(&self, ns: &ResolveResult) -> bool {
        match ns {
            ResolveResult::Bound(Namespace(uri)) => *uri == XFDF_NAMESPACE.as_bytes(),
            ResolveResult::Unbound => !self.config.require_namespace,
            ResolveResult::Unknown(_) => false,
        }
    }
}

/// The pending field when the reader sits directly inside its first `<value>`.
fn value_target(field: &mut Option<PendingField>, depth: usize) -> Option<&mut PendingField> {
    field
        .as_mut()
        .filter(|pending| pending.in_value && depth == VALUE_DEPTH)
}

fn finish_field(pending: PendingField, parsed: &mut ParsedXfdf) -> Result<()> {
    match pending.name {
        Some(name) if !name.is_empty() => {
            parsed.records.push(FieldRecord::new(name, pending.value)?);
        },
        _ => {
            log::debug!("Skipping XFDF field without a name");
            parsed.skipped += 1;
        },
    }
    Ok(())
}

/// Check every attribute of an element and return the value of `key`, if asked for.
///
/// Duplicate attributes and bad values fail even on attributes that are not read.
fn scan_attributes(
    reader: &NsReader<&[u8]>,
    e: &BytesStart,
    key: Option<&[u8]>,
) -> Result<Option<String>> {
    let mut found = None;
    for attr in e.attributes() {
        let attr = attr.map_err(|err| parse_error(reader, err.into()))?;
        let value = attr.unescape_value().map_err(|err| parse_error(reader, err))?;
        check_chars(&value)?;
        if found.is_none() && key == Some(attr.key.as_ref()) {
            found = Some(value.into_owned());
        }
    }
    Ok(found)
}

/// Reject decoded content that XML 1.0 does not allow, literal or referenced.
fn check_chars(text: &str) -> Result<()> {
    match find_invalid_xml_char(text) {
        Some(c) => Err(Error::MalformedXml(format!(
            "character U+{:04X} is not allowed in XML 1.0",
            c as u32
        ))),
        None => Ok(()),
    }
}

fn parse_error(reader: &NsReader<&[u8]>, source: quick_xml::Error) -> Error {
    Error::XmlParse {
        position: reader.buffer_position(),
        source,
    }
}
