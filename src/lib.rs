//! # XFDF Oxide
//!
//! Form data interchange for PDF forms: converts typed form field entities
//! to XFDF (XML Forms Data Format) and XFDF back into field records.
//!
//! ## Core Features
//!
//! - **Field Entities**: text fields, checkboxes, combo boxes, list/radio choices
//! - **Normalization**: every field kind reduced to a `{name, value}` record
//! - **XFDF Export**: namespaced XFDF with `f`, `fields` and `ids` elements
//! - **XFDF Import**: namespace-aware streaming parser built on quick-xml
//! - **Lenient Import/Export**: unsupported field kinds and nameless `<field>`
//!   elements are skipped and reported instead of failing the whole call
//!
//! The crate does no document handling of its own: callers supply field
//! entities and a document reference, and get XML text back (or the reverse).
//!
//! ## Quick Start
//!
//! ```
//! use xfdf_oxide::forms::{CheckBox, ComboBox, FormField, TextField};
//! use xfdf_oxide::xfdf::{generate_xfdf, parse_xfdf};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fields: Vec<FormField> = vec![
//!     TextField::new("name").with_value("John Doe").into(),
//!     CheckBox::new("agree").checked().into(),
//!     ComboBox::new("country").with_options(vec!["US", "CA"]).with_value("CA").into(),
//! ];
//!
//! let xml = generate_xfdf(&fields, "application.pdf")?;
//!
//! for record in parse_xfdf(&xml)? {
//!     println!("{} = {:?}", record.name(), record.value());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Form field entities
pub mod forms;

// XFDF import/export
pub mod xfdf;

// Re-exports
pub use config::XfdfConfig;
pub use error::{Error, Result};
pub use forms::{CheckBox, ChoiceField, ComboBox, FormField, TextField, UnsupportedField};
pub use xfdf::{generate_xfdf, parse_xfdf, FieldRecord, XfdfEncoder, XfdfReader, XfdfWriter};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "xfdf_oxide");
    }
}
