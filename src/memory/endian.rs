//! Runtime byte order probe
//!
//! The probe stores a known 32-bit pattern and looks at how its bytes landed in
//! memory. Only the two uniform orders are recognised; any other arrangement is
//! reported as `None` and left to the caller.

use std::fmt;

/// Pattern whose four bytes are all distinct
const PROBE: u32 = 0x0102_0304;

/// Uniform byte orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte at the lowest address
    Big,
    /// Least significant byte at the lowest address
    Little,
}

impl ByteOrder {
    /// Detect the byte order of the running machine
    pub fn detect() -> Option<ByteOrder> {
        Self::from_probe(Self::probe_image())
    }

    /// How this machine stores `0x01020304`
    pub fn probe_image() -> [u8; 4] {
        PROBE.to_ne_bytes()
    }

    /// Classify the in-memory image of `0x01020304`
    pub fn from_probe(image: [u8; 4]) -> Option<ByteOrder> {
        match image {
            [0x01, 0x02, 0x03, 0x04] => Some(ByteOrder::Big),
            [0x04, 0x03, 0x02, 0x01] => Some(ByteOrder::Little),
            _ => None,
        }
    }

    /// Offset, within a field of `field_size` bytes, of its `count` most
    /// significant bytes
    pub fn most_significant_offset(self, field_size: usize, count: usize) -> usize {
        match self {
            ByteOrder::Big => 0,
            ByteOrder::Little => field_size.saturating_sub(count),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Big => write!(f, "big-endian"),
            ByteOrder::Little => write!(f, "little-endian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_target() {
        let expected = if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(ByteOrder::detect(), Some(expected));
    }

    #[test]
    fn test_mixed_order_is_unknown() {
        // PDP-11 style middle-endian
        assert_eq!(ByteOrder::from_probe([0x02, 0x01, 0x04, 0x03]), None);
    }

    #[test]
    fn test_most_significant_offset() {
        assert_eq!(ByteOrder::Little.most_significant_offset(8, 6), 2);
        assert_eq!(ByteOrder::Big.most_significant_offset(8, 6), 0);
    }
}
