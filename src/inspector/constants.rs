// Constants for the layout inspector

use crate::memory::value::Numbers;

/// Number of records in the array whose size is reported
pub const ARRAY_LEN: usize = 10;

/// Sentinel values, each one below its type's maximum so the low byte reads `fe`
pub const SENTINELS: Numbers = Numbers {
    c: u8::MAX - 1,
    counter64: u64::MAX - 1,
    s: u16::MAX - 1,
    i: u32::MAX - 1,
};

/// Member highlighted by the marker lines and partially cleared by MEMSET
pub const TARGET_FIELD: &str = "counter64";

/// Number of most significant bytes of the target member zeroed by MEMSET
pub const CLEAR_BYTES: usize = 6;

/// Width of the label column in the transcript
pub const LABEL_WIDTH: usize = 27;
