//! Record definition and typed field values
//!
//! This module defines [`Numbers`], the one record type the inspector looks at,
//! together with [`Field`] (a handle on each member's size and offset) and
//! [`FieldValue`] (a member's value tagged with its width).
//!
//! # Declared Layout
//!
//! ```text
//! struct Numbers {
//!     c:         u8,   // 1 byte  +
//!     counter64: u64,  // 8 bytes +
//!     s:         u16,  // 2 bytes +
//!     i:         u32,  // 4 bytes = 15 bytes
//! }
//! ```
//!
//! The record is `#[repr(C)]`, so members keep their declared order and the
//! compiler inserts padding in front of each member to satisfy its alignment.
//! How much padding appears depends on the target.

use std::fmt;
use std::mem::{offset_of, size_of};
use std::ops::Range;

/// The inspected record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Numbers {
    pub c: u8,
    pub counter64: u64,
    pub s: u16,
    pub i: u32,
}

impl Numbers {
    /// Read a member as a typed value
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::C => FieldValue::U8(self.c),
            Field::Counter64 => FieldValue::U64(self.counter64),
            Field::S => FieldValue::U16(self.s),
            Field::I => FieldValue::U32(self.i),
        }
    }
}

/// In-memory size of [`Numbers`] on this target
pub const RECORD_SIZE: usize = size_of::<Numbers>();

/// Record members, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    C,
    Counter64,
    S,
    I,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::C, Field::Counter64, Field::S, Field::I];

    pub fn name(self) -> &'static str {
        match self {
            Field::C => "c",
            Field::Counter64 => "counter64",
            Field::S => "s",
            Field::I => "i",
        }
    }

    /// Standalone size of the member's type
    pub fn size(self) -> usize {
        match self {
            Field::C => size_of::<u8>(),
            Field::Counter64 => size_of::<u64>(),
            Field::S => size_of::<u16>(),
            Field::I => size_of::<u32>(),
        }
    }

    /// Byte offset of the member from the start of the record
    pub fn offset(self) -> usize {
        match self {
            Field::C => offset_of!(Numbers, c),
            Field::Counter64 => offset_of!(Numbers, counter64),
            Field::S => offset_of!(Numbers, s),
            Field::I => offset_of!(Numbers, i),
        }
    }

    /// Byte range the member occupies inside the record
    pub fn span(self) -> Range<usize> {
        let start = self.offset();
        start..start + self.size()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A member value tagged with its width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl FieldValue {
    /// Zero-extend to 64 bits
    pub fn as_u64(&self) -> u64 {
        match self {
            FieldValue::U8(n) => u64::from(*n),
            FieldValue::U16(n) => u64::from(*n),
            FieldValue::U32(n) => u64::from(*n),
            FieldValue::U64(n) => *n,
        }
    }

    /// Native-order byte image of the value
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        match self {
            FieldValue::U8(n) => n.to_ne_bytes().to_vec(),
            FieldValue::U16(n) => n.to_ne_bytes().to_vec(),
            FieldValue::U32(n) => n.to_ne_bytes().to_vec(),
            FieldValue::U64(n) => n.to_ne_bytes().to_vec(),
        }
    }

    /// Size of the value in bytes
    pub fn width(&self) -> usize {
        match self {
            FieldValue::U8(_) => 1,
            FieldValue::U16(_) => 2,
            FieldValue::U32(_) => 4,
            FieldValue::U64(_) => 8,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_sizes_sum_to_fifteen() {
        let total: usize = Field::ALL.iter().map(|f| f.size()).sum();
        assert_eq!(total, 15);
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let offsets: Vec<usize> = Field::ALL.iter().map(|f| f.offset()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Field::C.offset(), 0);
    }
}
