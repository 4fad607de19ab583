//! Error types for XFDF encoding and decoding.
//!
//! Every fallible operation in the crate returns [`Result`]. Hard failures
//! fall into three groups:
//!
//! - **Invalid arguments**: empty field lists, empty document references,
//!   empty XML input, or a field without a name.
//! - **Null entities**: an empty slot in an optional-entity sequence.
//! - **Parse failures**: the XML could not be read, either because the
//!   tokenizer rejected it ([`Error::XmlParse`]) or because it is not a
//!   well-formed document ([`Error::MalformedXml`]).
//!
//! Unsupported field kinds and nameless `<field>` elements are *not*
//! errors; they are skipped and reported through the encoder/reader
//! result types.

/// Result type alias for XFDF operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing or consuming XFDF.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An entity slot in the input sequence was empty
    #[error("Field entity at index {index} is missing")]
    NullEntity {
        /// Position of the empty slot in the input sequence
        index: usize,
    },

    /// The XML tokenizer rejected the input
    #[error("Failed to parse XFDF at byte {position}: {source}")]
    XmlParse {
        /// Byte offset reported by the reader when the error occurred
        position: usize,
        /// Underlying reader error
        #[source]
        source: quick_xml::Error,
    },

    /// The input is not a well-formed XML document
    #[error("Malformed XFDF document: {0}")]
    MalformedXml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the XML text itself could not be parsed.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Error::XmlParse { .. } | Error::MalformedXml(_))
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument(reason.into())
    }
}
