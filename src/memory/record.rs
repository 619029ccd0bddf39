//! Byte view over a record
//!
//! [`RecordBytes`] owns a record-sized, record-aligned byte image. Every byte of
//! the image is always initialized (it starts zero-filled), so padding bytes can
//! be dumped and copied without touching uninitialized memory. Members are
//! written and read by encoding their value at the member's offset in native
//! byte order, which is exactly what the compiler does for a real `Numbers`.

use super::value::{Field, FieldValue, Numbers, RECORD_SIZE};
use crate::inspector::errors::InspectorError;
use std::ops::Range;

/// A record held as raw bytes
#[repr(C)]
#[derive(Debug, Clone)]
pub struct RecordBytes {
    _align: [Numbers; 0], // gives the image the alignment of a real record
    bytes: [u8; RECORD_SIZE],
}

impl RecordBytes {
    /// A record whose every byte, padding included, is zero
    pub fn zeroed() -> Self {
        RecordBytes {
            _align: [],
            bytes: [0; RECORD_SIZE],
        }
    }

    /// Zero-fill, then assign every member of `record`
    pub fn from_record(record: &Numbers) -> Self {
        let mut view = Self::zeroed();
        for field in Field::ALL {
            view.write_field(field, record.get(field));
        }
        view
    }

    /// The full byte image, in ascending address order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Assign a member; the value's width must match the member's size
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), InspectorError> {
        if value.width() != field.size() {
            return Err(InspectorError::FieldWidthMismatch {
                field: field.name(),
                expected: field.size(),
                got: value.width(),
            });
        }
        self.write_field(field, value);
        Ok(())
    }

    /// Read a member
    pub fn get(&self, field: Field) -> FieldValue {
        read_field(&self.bytes, field)
    }

    /// Decode all members into a plain record
    pub fn to_record(&self) -> Numbers {
        decode_record(&self.bytes)
    }

    /// Bytes owned by one member
    pub fn field_bytes(&self, field: Field) -> &[u8] {
        &self.bytes[field.span()]
    }

    /// Address of the first byte of the image
    pub fn base_address(&self) -> usize {
        self.bytes.as_ptr() as usize
    }

    /// Addresses `[field address, field address + field size)`
    pub fn field_address_range(&self, field: Field) -> Range<usize> {
        let start = self.base_address() + field.offset();
        start..start + field.size()
    }

    /// Zero `count` bytes starting `offset` bytes into `field`
    pub fn clear_field_bytes(
        &mut self,
        field: Field,
        offset: usize,
        count: usize,
    ) -> Result<(), InspectorError> {
        if offset + count > field.size() {
            return Err(InspectorError::FieldOverrun {
                field: field.name(),
                offset,
                count,
                size: field.size(),
            });
        }
        let start = field.offset() + offset;
        self.bytes[start..start + count].fill(0);
        Ok(())
    }

    /// Bulk copy of another record's image, padding included
    pub fn copy_from(&mut self, src: &RecordBytes) {
        self.bytes.copy_from_slice(&src.bytes);
    }

    fn write_field(&mut self, field: Field, value: FieldValue) {
        let span = field.span();
        self.bytes[span].copy_from_slice(&value.to_ne_bytes());
    }
}

impl Default for RecordBytes {
    fn default() -> Self {
        Self::zeroed()
    }
}

fn read_array<const N: usize>(image: &[u8], at: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&image[at..at + N]);
    out
}

/// Read one member out of a record-sized image
pub(crate) fn read_field(image: &[u8], field: Field) -> FieldValue {
    let at = field.offset();
    match field {
        Field::C => FieldValue::U8(u8::from_ne_bytes(read_array(image, at))),
        Field::Counter64 => FieldValue::U64(u64::from_ne_bytes(read_array(image, at))),
        Field::S => FieldValue::U16(u16::from_ne_bytes(read_array(image, at))),
        Field::I => FieldValue::U32(u32::from_ne_bytes(read_array(image, at))),
    }
}

/// Decode every member of a record-sized image
pub(crate) fn decode_record(image: &[u8]) -> Numbers {
    Numbers {
        c: u8::from_ne_bytes(read_array(image, Field::C.offset())),
        counter64: u64::from_ne_bytes(read_array(image, Field::Counter64.offset())),
        s: u16::from_ne_bytes(read_array(image, Field::S.offset())),
        i: u32::from_ne_bytes(read_array(image, Field::I.offset())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Numbers {
        Numbers {
            c: 0x11,
            counter64: 0x2233_4455_6677_8899,
            s: 0xaabb,
            i: 0xccdd_eeff,
        }
    }

    #[test]
    fn test_image_is_aligned_like_record() {
        let view = RecordBytes::zeroed();
        assert_eq!(view.base_address() % std::mem::align_of::<Numbers>(), 0);
        assert_eq!(view.len(), std::mem::size_of::<Numbers>());
    }

    #[test]
    fn test_padding_stays_zero_after_assignment() {
        let view = RecordBytes::from_record(&sample());
        let used: usize = Field::ALL.iter().map(|f| f.size()).sum();
        let nonzero = view.as_bytes().iter().filter(|&&b| b != 0).count();
        // every sample member byte is nonzero, so only padding remains zero
        assert_eq!(nonzero, used);
    }

    #[test]
    fn test_get_reads_back_set_values() {
        let view = RecordBytes::from_record(&sample());
        assert_eq!(view.to_record(), sample());
        assert_eq!(view.get(Field::S), FieldValue::U16(0xaabb));
    }

    #[test]
    fn test_set_rejects_wrong_width() {
        let mut view = RecordBytes::zeroed();
        let result = view.set(Field::S, FieldValue::U32(1));
        assert!(matches!(
            result,
            Err(InspectorError::FieldWidthMismatch { expected: 2, got: 4, .. })
        ));
    }

    #[test]
    fn test_clear_stays_inside_field() {
        let mut view = RecordBytes::from_record(&sample());
        assert!(view.clear_field_bytes(Field::Counter64, 4, 5).is_err());
        view.clear_field_bytes(Field::Counter64, 0, 8).unwrap();
        assert_eq!(view.get(Field::Counter64).as_u64(), 0);
        assert_eq!(view.get(Field::S).as_u64(), 0xaabb);
        assert_eq!(view.get(Field::C).as_u64(), 0x11);
    }

    #[test]
    fn test_field_address_range_covers_field_bytes() {
        let view = RecordBytes::zeroed();
        let range = view.field_address_range(Field::I);
        assert_eq!(range.len(), 4);
        assert_eq!(range.start, view.field_bytes(Field::I).as_ptr() as usize);
    }
}
