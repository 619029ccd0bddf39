//! Heap-backed serialization buffer
//!
//! [`SerializedRecord`] stores the byte image of a record in its own heap
//! allocation, sized exactly to the record. The allocation is checked: a failed
//! reservation surfaces as [`InspectorError::OutOfMemory`] instead of aborting
//! inside the allocator, so the caller decides how to die. The buffer is
//! released when the value is dropped, on every exit path.

use super::record::{read_field, RecordBytes};
use super::value::{Field, FieldValue, Numbers, RECORD_SIZE};
use crate::inspector::errors::InspectorError;
use std::ptr;

/// A record's raw bytes in an independent heap buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedRecord {
    data: Box<[u8]>,
}

impl SerializedRecord {
    /// Allocate a record-sized buffer and copy `src`'s byte view into it
    pub fn serialize(src: &RecordBytes) -> Result<Self, InspectorError> {
        let mut data: Vec<u8> = Vec::new();
        data.try_reserve_exact(RECORD_SIZE)
            .map_err(|_| InspectorError::OutOfMemory {
                requested: RECORD_SIZE,
            })?;
        data.extend_from_slice(src.as_bytes());
        Ok(SerializedRecord {
            data: data.into_boxed_slice(),
        })
    }

    /// Raw bytes of the buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Address of the heap buffer
    pub fn address(&self) -> usize {
        self.data.as_ptr() as usize
    }

    /// Treat the buffer's address as a record and read it
    pub fn as_record(&self) -> Numbers {
        debug_assert_eq!(self.data.len(), RECORD_SIZE);
        // SAFETY: the buffer holds RECORD_SIZE initialized bytes, every bit
        // pattern is a valid integer member, and the read does not require the
        // heap buffer to be aligned for `Numbers`.
        unsafe { ptr::read_unaligned(self.data.as_ptr().cast::<Numbers>()) }
    }

    /// Read one member straight from the buffer bytes
    pub fn get(&self, field: Field) -> FieldValue {
        read_field(&self.data, field)
    }
}
