//! Memory model for the layout inspector
//!
//! This module provides the core memory abstractions:
//! - [`value`]: The [`value::Numbers`] record, its members and typed values
//! - [`record`]: A byte view over one record instance
//! - [`heap`]: A heap buffer holding a serialized record
//! - [`endian`]: Runtime byte order detection
//!
//! # Type Sizes
//!
//! Unlike a packed encoding, sizes here are whatever the compiler picks for the
//! target. Declared member sizes are fixed (`u8` 1, `u64` 8, `u16` 2, `u32` 4)
//! but the record itself grows by the padding needed to align each member:
//!
//! ```text
//! record size = sum(member sizes) + padding
//! array size  = N * record size
//! ```
//!
//! [`RecordLayout`] lists where every member lands and which bytes are filler,
//! and [`SizeReport`] summarises the arithmetic above.

pub mod endian;
pub mod heap;
pub mod record;
pub mod value;

use crate::inspector::constants::ARRAY_LEN;
use crate::inspector::errors::InspectorError;
use rustc_hash::FxHashMap;
use std::mem::size_of;
use std::ops::Range;
use value::{Field, Numbers, RECORD_SIZE};

/// Placement of one member inside the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub field: Field,
    pub offset: usize,
    pub size: usize,
}

impl FieldLayout {
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.size
    }
}

/// Where a run of padding bytes sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingKind {
    /// Between two members
    Internal,
    /// After the last member
    Trailing,
}

/// A run of filler bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingSpan {
    pub kind: PaddingKind,
    pub range: Range<usize>,
}

/// Member placement table for [`Numbers`]
#[derive(Debug, Clone)]
pub struct RecordLayout {
    fields: Vec<FieldLayout>,
    by_name: FxHashMap<&'static str, usize>,
    size: usize,
}

impl RecordLayout {
    /// Build the table from the compiler's layout of [`Numbers`]
    pub fn of_record() -> Self {
        let fields: Vec<FieldLayout> = Field::ALL
            .iter()
            .map(|&field| FieldLayout {
                field,
                offset: field.offset(),
                size: field.size(),
            })
            .collect();

        let by_name = fields
            .iter()
            .enumerate()
            .map(|(idx, fl)| (fl.field.name(), idx))
            .collect();

        RecordLayout {
            fields,
            by_name,
            size: RECORD_SIZE,
        }
    }

    /// Members in declaration order
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Look a member up by name
    pub fn field(&self, name: &str) -> Result<&FieldLayout, InspectorError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.fields[idx])
            .ok_or_else(|| InspectorError::UnknownField {
                name: name.to_string(),
            })
    }

    /// In-memory size of the record
    pub fn size(&self) -> usize {
        self.size
    }

    /// Every run of bytes not owned by a member, in address order
    pub fn padding(&self) -> Vec<PaddingSpan> {
        let mut spans = Vec::new();
        let mut cursor = 0;

        for fl in &self.fields {
            if fl.offset > cursor {
                spans.push(PaddingSpan {
                    kind: PaddingKind::Internal,
                    range: cursor..fl.offset,
                });
            }
            cursor = fl.offset + fl.size;
        }

        if self.size > cursor {
            spans.push(PaddingSpan {
                kind: PaddingKind::Trailing,
                range: cursor..self.size,
            });
        }

        spans
    }

    /// Whether byte `offset` is filler
    pub fn is_padding(&self, offset: usize) -> bool {
        offset < self.size && !self.fields.iter().any(|fl| fl.span().contains(&offset))
    }
}

/// Size arithmetic for the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    /// Standalone sizes of the members, in declaration order
    pub member_sizes: Vec<(Field, usize)>,
    /// Sum of the member sizes
    pub members: usize,
    /// In-memory size of one record
    pub record: usize,
    /// `record - members`
    pub padding: usize,
    pub array_len: usize,
    /// In-memory size of `[Numbers; array_len]`
    pub array: usize,
}

impl SizeReport {
    pub fn of_record() -> Self {
        let member_sizes: Vec<(Field, usize)> =
            Field::ALL.iter().map(|&f| (f, f.size())).collect();
        let members: usize = member_sizes.iter().map(|(_, size)| size).sum();
        let record = size_of::<Numbers>();

        SizeReport {
            member_sizes,
            members,
            record,
            padding: record - members,
            array_len: ARRAY_LEN,
            array: size_of::<[Numbers; ARRAY_LEN]>(),
        }
    }
}
