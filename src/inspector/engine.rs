// Execution engine for the layout inspector

use crate::inspector::constants::{CLEAR_BYTES, SENTINELS, TARGET_FIELD};
use crate::inspector::dump::{join_tokens, padding_markers, HexDump, Markers};
use crate::inspector::errors::InspectorError;
use crate::memory::endian::ByteOrder;
use crate::memory::heap::SerializedRecord;
use crate::memory::record::RecordBytes;
use crate::memory::value::{Field, Numbers};
use crate::memory::{PaddingKind, RecordLayout, SizeReport};
use crate::snapshot::{Snapshot, Transcript};

/// Section banners, in the order the stages print them
pub const BANNER_SIZE: &str = "SIZE";
pub const BANNER_HEX: &str = "HEX and PADDING";
pub const BANNER_MEMSET: &str = "MEMSET";
pub const BANNER_MEMCPY: &str = "MEMCPY";
pub const BANNER_POINTERS: &str = "STRUCT POINTERS";

/// Runs the inspection stages over one record and its copy
pub struct Inspector {
    /// Member placement of the record type
    layout: RecordLayout,

    /// Byte order the partial clear is computed for
    byte_order: ByteOrder,

    /// The record under inspection
    record: RecordBytes,

    /// Destination of the bulk byte copy
    copy: RecordBytes,

    /// Record read back through the serialized buffer's address
    reinterpreted: Option<Numbers>,

    /// Labelled output lines grouped by stage
    transcript: Transcript,

    /// Record state captured after each stage that touches its bytes
    snapshots: Vec<Snapshot>,
}

impl Inspector {
    /// Create an inspector for the running machine's byte order
    pub fn new() -> Result<Self, InspectorError> {
        let byte_order =
            ByteOrder::detect().ok_or_else(|| InspectorError::UnsupportedByteOrder {
                probe: ByteOrder::probe_image(),
            })?;
        Ok(Self::with_byte_order(byte_order))
    }

    /// Create an inspector that clears bytes as if the machine used `byte_order`
    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        Inspector {
            layout: RecordLayout::of_record(),
            byte_order,
            record: RecordBytes::zeroed(),
            copy: RecordBytes::zeroed(),
            reinterpreted: None,
            transcript: Transcript::new(),
            snapshots: Vec::new(),
        }
    }

    /// Run every stage in order
    ///
    /// The serialized buffer lives only for the last two stages and is freed
    /// before this returns, whether or not a stage fails.
    pub fn run(&mut self) -> Result<(), InspectorError> {
        self.report_sizes();
        self.dump_sentinels()?;
        self.clear_most_significant()?;
        let serialized = self.duplicate()?;
        self.reinterpret(&serialized);
        Ok(())
    }

    fn target_field(&self) -> Result<Field, InspectorError> {
        Ok(self.layout.field(TARGET_FIELD)?.field)
    }

    /// SIZE: member sizes, record size, padding and array size
    fn report_sizes(&mut self) {
        let report = SizeReport::of_record();
        let parts: Vec<String> = report
            .member_sizes
            .iter()
            .map(|(_, size)| size.to_string())
            .collect();

        self.transcript.begin(BANNER_SIZE);
        self.transcript.line(
            "Size of members",
            format!("{} = {}", report.members, parts.join(" + ")),
        );
        self.transcript
            .line("Size of a struct", report.record.to_string());
        self.transcript.line(
            "Size of padding bytes",
            format!("{} = {} - {}", report.padding, report.record, report.members),
        );
        self.transcript.line(
            "Size of a struct array",
            format!("{} = {} * {}", report.array, report.record, report.array_len),
        );

        let spans: Vec<String> = self
            .layout
            .padding()
            .iter()
            .map(|p| {
                let kind = match p.kind {
                    PaddingKind::Internal => "internal",
                    PaddingKind::Trailing => "trailing",
                };
                format!("{} {}..{}", kind, p.range.start, p.range.end)
            })
            .collect();
        let spans = if spans.is_empty() {
            "none".to_string()
        } else {
            spans.join(", ")
        };
        self.transcript.line("Padding spans", spans);
    }

    /// HEX and PADDING: zero-fill, assign sentinels, dump
    fn dump_sentinels(&mut self) -> Result<(), InspectorError> {
        self.record = RecordBytes::zeroed();
        for field in Field::ALL {
            self.record.set(field, SENTINELS.get(field))?;
        }

        self.transcript.begin(BANNER_HEX);
        self.describe_record()?;
        self.transcript.line(
            "Mark padding",
            join_tokens(padding_markers(&self.layout)),
        );
        self.snapshots
            .push(Snapshot::capture(BANNER_HEX, &self.record));
        Ok(())
    }

    /// MEMSET: zero the most significant bytes of the target member
    fn clear_most_significant(&mut self) -> Result<(), InspectorError> {
        let field = self.target_field()?;
        let offset = self
            .byte_order
            .most_significant_offset(field.size(), CLEAR_BYTES);
        self.record.clear_field_bytes(field, offset, CLEAR_BYTES)?;

        self.transcript.begin(BANNER_MEMSET);
        self.transcript
            .line("Byte order", self.byte_order.to_string());
        self.transcript.line(
            "Cleared bytes",
            format!("{}[{}..{}]", field, offset, offset + CLEAR_BYTES),
        );
        self.describe_record()?;
        self.snapshots
            .push(Snapshot::capture(BANNER_MEMSET, &self.record));
        Ok(())
    }

    /// MEMCPY: bulk copy into the second record and into a heap buffer
    fn duplicate(&mut self) -> Result<SerializedRecord, InspectorError> {
        self.copy.copy_from(&self.record);
        let serialized = SerializedRecord::serialize(&self.record)?;

        self.transcript.begin(BANNER_MEMCPY);
        self.transcript.line(
            "Copied struct content",
            format_content(&self.copy.to_record()),
        );
        self.transcript.line(
            "Copied struct hex dump",
            HexDump::new(self.copy.as_bytes()).to_string(),
        );
        self.transcript.line(
            "Serialized struct hex dump",
            HexDump::new(serialized.as_bytes()).to_string(),
        );
        self.snapshots
            .push(Snapshot::capture(BANNER_MEMCPY, &self.copy));
        Ok(serialized)
    }

    /// STRUCT POINTERS: read the heap buffer back as a record
    fn reinterpret(&mut self, serialized: &SerializedRecord) {
        let record = serialized.as_record();

        self.transcript.begin(BANNER_POINTERS);
        self.transcript
            .line("Serialized struct content", format_content(&record));
        self.reinterpreted = Some(record);
    }

    fn describe_record(&mut self) -> Result<(), InspectorError> {
        let field = self.target_field()?;
        self.transcript
            .line("Struct content", format_content(&self.record.to_record()));
        self.transcript.line(
            "Struct hex dump",
            HexDump::new(self.record.as_bytes()).to_string(),
        );
        self.transcript.line(
            &format!("Mark {}", field),
            join_tokens(Markers::for_field(&self.record, field).iter()),
        );
        Ok(())
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    pub fn record(&self) -> &RecordBytes {
        &self.record
    }

    pub fn copy(&self) -> &RecordBytes {
        &self.copy
    }

    /// Record read through the serialized buffer, once the run finished
    pub fn reinterpreted(&self) -> Option<&Numbers> {
        self.reinterpreted.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot taken at the end of the stage with this banner
    pub fn snapshot(&self, stage: &str) -> Option<&Snapshot> {
        self.snapshots.iter().find(|s| s.stage == stage)
    }
}

/// `c = 254   counter64 = ...   s = ...   i = ...`
pub fn format_content(record: &Numbers) -> String {
    Field::ALL
        .iter()
        .map(|&f| format!("{} = {}", f, record.get(f)))
        .collect::<Vec<_>>()
        .join("   ")
}
