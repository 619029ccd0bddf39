// Transcript and per-stage snapshots

use crate::inspector::constants::LABEL_WIDTH;
use crate::memory::record::RecordBytes;
use crate::memory::value::Field;
use rustc_hash::FxHashMap;

/// One `label : text` line of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub label: String,
    pub text: String,
}

/// Lines grouped under a `>>> BANNER` heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub banner: &'static str,
    pub lines: Vec<TranscriptLine>,
}

/// Captured inspector output
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript {
            sections: Vec::new(),
        }
    }

    /// Open a new section; following lines land under it
    pub fn begin(&mut self, banner: &'static str) {
        self.sections.push(Section {
            banner,
            lines: Vec::new(),
        });
    }

    /// Append a line to the current section
    pub fn line(&mut self, label: &str, text: String) {
        if self.sections.is_empty() {
            self.begin("");
        }
        if let Some(section) = self.sections.last_mut() {
            section.lines.push(TranscriptLine {
                label: label.to_string(),
                text,
            });
        }
    }

    /// Find a section by banner
    pub fn section(&self, banner: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.banner == banner)
    }

    /// Get all lines as plain strings, a blank line after each section
    pub fn get_output(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|section| {
                let mut result = vec![format!(">>> {}", section.banner)];
                result.extend(
                    section
                        .lines
                        .iter()
                        .map(|l| format!("{:<width$}: {}", l.label, l.text, width = LABEL_WIDTH)),
                );
                result.push(String::new());
                result
            })
            .collect()
    }
}

/// State of one record at the end of a stage
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub stage: &'static str,
    pub bytes: Vec<u8>,
    pub values: FxHashMap<&'static str, u64>,
    pub address: usize,
}

impl Snapshot {
    pub fn capture(stage: &'static str, view: &RecordBytes) -> Self {
        let values = Field::ALL
            .iter()
            .map(|&f| (f.name(), view.get(f).as_u64()))
            .collect();

        Snapshot {
            stage,
            bytes: view.as_bytes().to_vec(),
            values,
            address: view.base_address(),
        }
    }

    /// Value of a member at capture time
    pub fn value(&self, field: Field) -> Option<u64> {
        self.values.get(field.name()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_banner_and_labels() {
        let mut transcript = Transcript::new();
        transcript.begin("SIZE");
        transcript.line("Size of a struct", "24".to_string());

        let output = transcript.get_output();
        assert_eq!(output[0], ">>> SIZE");
        assert_eq!(output[1], "Size of a struct           : 24");
        assert_eq!(output[2], "");
    }

    #[test]
    fn test_snapshot_is_independent_of_record() {
        let mut view = RecordBytes::zeroed();
        let snap = Snapshot::capture("zero", &view);
        view.clear_field_bytes(Field::S, 0, 2).unwrap();
        view.set(Field::C, crate::memory::value::FieldValue::U8(9))
            .unwrap();
        assert_eq!(snap.value(Field::C), Some(0));
        assert!(snap.bytes.iter().all(|&b| b == 0));
    }
}
