//! Hex dump and marker lines
//!
//! Both dumps are plain iterators: they borrow or copy what they need, produce
//! one token per record byte in ascending address order, and can be restarted
//! by calling `iter()` again.

use crate::memory::record::RecordBytes;
use crate::memory::value::Field;
use crate::memory::RecordLayout;
use std::fmt;
use std::ops::Range;

/// One byte rendered as two lowercase hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexByte(pub u8);

impl fmt::Display for HexByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

/// Hex view of a byte image
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
}

impl<'a> HexDump<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        HexDump { bytes }
    }

    pub fn iter(&self) -> HexIter<'a> {
        HexIter {
            inner: self.bytes.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<'a> IntoIterator for HexDump<'a> {
    type Item = HexByte;
    type IntoIter = HexIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &HexDump<'a> {
    type Item = HexByte;
    type IntoIter = HexIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_tokens(self.iter()))
    }
}

/// Iterator over the tokens of a [`HexDump`]
#[derive(Debug, Clone)]
pub struct HexIter<'a> {
    inner: std::slice::Iter<'a, u8>,
}

impl Iterator for HexIter<'_> {
    type Item = HexByte;

    fn next(&mut self) -> Option<HexByte> {
        self.inner.next().copied().map(HexByte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for HexIter<'_> {}

/// Classification of one byte on a marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Inside the target member
    InRange,
    /// Anywhere else
    OutOfRange,
    /// Filler inserted by the compiler
    Padding,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::InRange => write!(f, "xx"),
            Marker::OutOfRange => write!(f, "--"),
            Marker::Padding => write!(f, "pp"),
        }
    }
}

/// Marks the bytes of one member by comparing byte addresses against
/// `[field address, field address + field size)`
#[derive(Debug, Clone)]
pub struct Markers {
    base: usize,
    len: usize,
    target: Range<usize>,
}

impl Markers {
    pub fn for_field(view: &RecordBytes, field: Field) -> Self {
        Markers {
            base: view.base_address(),
            len: view.len(),
            target: view.field_address_range(field),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Marker> + Clone {
        let target = self.target.clone();
        (self.base..self.base + self.len).map(move |addr| {
            if target.contains(&addr) {
                Marker::InRange
            } else {
                Marker::OutOfRange
            }
        })
    }
}

/// Marks the compiler-inserted filler bytes of the record
pub fn padding_markers(layout: &RecordLayout) -> impl Iterator<Item = Marker> + Clone + '_ {
    (0..layout.size()).map(move |offset| {
        if layout.is_padding(offset) {
            Marker::Padding
        } else {
            Marker::OutOfRange
        }
    })
}

/// Render tokens separated by single spaces
pub fn join_tokens<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    tokens
        .into_iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::constants::SENTINELS;

    #[test]
    fn test_hex_tokens_are_two_lowercase_digits() {
        let dump = HexDump::new(&[0x00, 0x0a, 0xfe, 0xff]);
        let tokens: Vec<String> = dump.iter().map(|b| b.to_string()).collect();
        assert_eq!(tokens, vec!["00", "0a", "fe", "ff"]);
    }

    #[test]
    fn test_hex_dump_restarts() {
        let bytes = [1u8, 2, 3];
        let dump = HexDump::new(&bytes);
        let first: Vec<HexByte> = dump.iter().collect();
        let second: Vec<HexByte> = dump.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(dump.to_string(), "01 02 03");
    }

    #[test]
    fn test_markers_cover_target_contiguously() {
        let view = RecordBytes::from_record(&SENTINELS);
        let markers: Vec<Marker> = Markers::for_field(&view, Field::Counter64).iter().collect();
        assert_eq!(markers.len(), view.len());

        let first = markers.iter().position(|m| *m == Marker::InRange).unwrap();
        let count = markers.iter().filter(|m| **m == Marker::InRange).count();
        assert_eq!(count, 8);
        assert!(markers[first..first + count]
            .iter()
            .all(|m| *m == Marker::InRange));
        assert_eq!(first, Field::Counter64.offset());
    }

    #[test]
    fn test_padding_markers_count_matches_padding() {
        let layout = RecordLayout::of_record();
        let filler: usize = layout.padding().iter().map(|p| p.range.len()).sum();
        let marked = padding_markers(&layout)
            .filter(|m| *m == Marker::Padding)
            .count();
        assert_eq!(marked, filler);
    }
}
