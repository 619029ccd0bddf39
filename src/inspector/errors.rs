//! Inspector error types
//!
//! This module defines [`InspectorError`]. Padding sizes and byte order are
//! measured, never treated as errors; what remains is a failed allocation, an
//! unrecognised byte order, and misuse of the byte view API.

use std::fmt;

/// Errors that can occur while inspecting the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    /// The serialization buffer could not be allocated
    OutOfMemory { requested: usize },

    /// The byte order probe matched neither big nor little endian
    UnsupportedByteOrder { probe: [u8; 4] },

    /// A byte range reaches outside the member it targets
    FieldOverrun {
        field: &'static str,
        offset: usize,
        count: usize,
        size: usize,
    },

    /// A value of the wrong width was assigned to a member
    FieldWidthMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    /// No member has this name
    UnknownField { name: String },
}

impl InspectorError {
    /// Whether the error leaves no meaningful way to continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, InspectorError::OutOfMemory { .. })
    }
}

impl fmt::Display for InspectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectorError::OutOfMemory { requested } => {
                write!(
                    f,
                    "Out of memory: could not allocate {} bytes for the serialized record",
                    requested
                )
            }
            InspectorError::UnsupportedByteOrder { probe } => {
                write!(
                    f,
                    "Unsupported byte order: 0x01020304 is stored as {:02x} {:02x} {:02x} {:02x}",
                    probe[0], probe[1], probe[2], probe[3]
                )
            }
            InspectorError::FieldOverrun {
                field,
                offset,
                count,
                size,
            } => {
                write!(
                    f,
                    "Byte range {}..{} overruns member '{}' of {} bytes",
                    offset,
                    offset + count,
                    field,
                    size
                )
            }
            InspectorError::FieldWidthMismatch {
                field,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Member '{}' is {} byte{} wide, got a {} byte value",
                    field,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    got
                )
            }
            InspectorError::UnknownField { name } => {
                write!(f, "Record has no member named '{}'", name)
            }
        }
    }
}

impl std::error::Error for InspectorError {}
