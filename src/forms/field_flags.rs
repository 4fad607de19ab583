//! Field flags shared by all form field entities.
//!
//! Only the flags common to every field type (PDF field flag bits 1-3) are
//! modelled; type-specific bits have no effect on exported form data.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Common field flags applicable to all field types.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FieldFlags: u32 {
        /// Bit 1: Field is read-only; user cannot change the value
        const READ_ONLY = 1 << 0;

        /// Bit 2: Field is required; must have a value before submit
        const REQUIRED = 1 << 1;

        /// Bit 3: Field is left out of exported form data
        const NO_EXPORT = 1 << 2;
    }
}

impl Default for FieldFlags {
    fn default() -> Self {
        FieldFlags::empty()
    }
}

impl FieldFlags {
    /// Whether the field's data may be written to an export.
    pub fn is_exportable(&self) -> bool {
        !self.contains(FieldFlags::NO_EXPORT)
    }
}
