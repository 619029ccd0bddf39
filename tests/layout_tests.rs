// Layout, clearing and duplication properties of the record

use layoutprobe::inspector::constants::{ARRAY_LEN, SENTINELS};
use layoutprobe::inspector::dump::{HexDump, Marker, Markers};
use layoutprobe::memory::endian::ByteOrder;
use layoutprobe::memory::heap::SerializedRecord;
use layoutprobe::memory::record::RecordBytes;
use layoutprobe::memory::value::{Field, FieldValue, Numbers};
use layoutprobe::memory::SizeReport;

fn sentinel_record() -> RecordBytes {
    let mut view = RecordBytes::zeroed();
    for field in Field::ALL {
        view.set(field, SENTINELS.get(field)).expect("width matches");
    }
    view
}

#[test]
fn test_padding_is_non_negative() {
    let report = SizeReport::of_record();
    assert_eq!(report.members, 15);
    assert!(report.record >= report.members);
    assert_eq!(report.padding, report.record - report.members);
}

#[test]
fn test_array_has_no_extra_padding() {
    let report = SizeReport::of_record();
    assert_eq!(report.array_len, ARRAY_LEN);
    assert_eq!(report.array, ARRAY_LEN * report.record);
}

#[test]
fn test_dump_has_one_hex_token_per_byte() {
    let view = sentinel_record();
    let tokens: Vec<String> = HexDump::new(view.as_bytes())
        .iter()
        .map(|b| b.to_string())
        .collect();

    assert_eq!(tokens.len(), std::mem::size_of::<Numbers>());
    for token in &tokens {
        assert_eq!(token.len(), 2);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_exactly_target_size_markers_in_range() {
    let view = sentinel_record();
    let markers: Vec<Marker> = Markers::for_field(&view, Field::Counter64).iter().collect();
    let in_range: Vec<usize> = markers
        .iter()
        .enumerate()
        .filter(|(_, m)| **m == Marker::InRange)
        .map(|(i, _)| i)
        .collect();

    assert_eq!(in_range.len(), Field::Counter64.size());
    assert!(in_range.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn test_clearing_most_significant_bytes_leaves_short_value() {
    let mut view = sentinel_record();
    let order = ByteOrder::detect().expect("uniform byte order");
    let offset = order.most_significant_offset(Field::Counter64.size(), 6);
    view.clear_field_bytes(Field::Counter64, offset, 6).unwrap();

    let s_before = SENTINELS.get(Field::S).as_u64();
    assert_eq!(view.get(Field::Counter64), FieldValue::U64(s_before));
    assert_eq!(view.get(Field::Counter64).as_u64(), 65534);
    // siblings untouched
    assert_eq!(view.get(Field::S), FieldValue::U16(65534));
    assert_eq!(view.get(Field::I), FieldValue::U32(u32::MAX - 1));
    assert_eq!(view.get(Field::C), FieldValue::U8(254));
}

#[test]
fn test_round_trip_through_heap_buffer() {
    let samples = [
        Numbers::default(),
        SENTINELS,
        Numbers {
            c: 1,
            counter64: 0x0102_0304_0506_0708,
            s: 0x0910,
            i: 0x1112_1314,
        },
        Numbers {
            c: u8::MAX,
            counter64: u64::MAX,
            s: u16::MAX,
            i: u32::MAX,
        },
    ];

    for record in samples {
        let buf = SerializedRecord::serialize(&RecordBytes::from_record(&record)).unwrap();
        let back = buf.as_record();
        for field in Field::ALL {
            assert_eq!(back.get(field), record.get(field), "field {}", field);
        }
    }
}

#[test]
fn test_copy_matches_source_in_distinct_memory() {
    let src = sentinel_record();
    let mut dst = RecordBytes::zeroed();
    dst.copy_from(&src);

    for field in Field::ALL {
        assert_eq!(dst.get(field), src.get(field));
    }
    assert_eq!(dst.as_bytes(), src.as_bytes());
    assert_ne!(dst.base_address(), src.base_address());
}

#[cfg(all(target_pointer_width = "64", target_endian = "little"))]
#[test]
fn test_typical_little_endian_64_bit_figures() {
    let report = SizeReport::of_record();
    assert_eq!(report.record, 24);
    assert_eq!(report.padding, 9);

    let view = sentinel_record();
    let tail: Vec<String> = HexDump::new(view.as_bytes())
        .iter()
        .skip(20)
        .map(|b| b.to_string())
        .collect();
    assert_eq!(tail, vec!["fe", "ff", "ff", "ff"]);
}
