//! Configuration for XFDF encoding and decoding.

/// Default indentation unit for generated XFDF.
pub const DEFAULT_INDENT: &str = "  ";

/// Value written for a checked checkbox.
pub const CHECKBOX_ON: &str = "On";

/// Value written for an unchecked checkbox.
pub const CHECKBOX_OFF: &str = "Off";

/// XFDF processing configuration.
///
/// The defaults produce exactly the documented XFDF layout; callers only
/// need a custom configuration to change formatting or to accept
/// documents written without the XFDF namespace declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XfdfConfig {
    /// Indentation unit repeated once per nesting level.
    pub indent: String,

    /// Value emitted for checked checkboxes.
    pub checkbox_on_value: String,

    /// Value emitted for unchecked checkboxes.
    pub checkbox_off_value: String,

    /// Only accept `fields`/`field`/`value` elements bound to the XFDF namespace.
    pub require_namespace: bool,
}

impl Default for XfdfConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl XfdfConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            checkbox_on_value: CHECKBOX_ON.to_string(),
            checkbox_off_value: CHECKBOX_OFF.to_string(),
            require_namespace: true,
        }
    }

    /// Set the indentation unit (an empty string writes every element flush left).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the values written for checked and unchecked checkboxes.
    pub fn with_checkbox_values(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.checkbox_on_value = on.into();
        self.checkbox_off_value = off.into();
        self
    }

    /// Require (or stop requiring) the XFDF namespace when reading.
    pub fn with_require_namespace(mut self, require: bool) -> Self {
        self.require_namespace = require;
        self
    }

    /// The checkbox value for the given state.
    pub fn checkbox_value(&self, checked: bool) -> &str {
        if checked {
            &self.checkbox_on_value
        } else {
            &self.checkbox_off_value
        }
    }
}
