//! Tab-separated import document.

use crate::types::FlashcardRecord;

/// Header lines understood by the flashcard importer.
pub const HEADER: &str = "#separator:tab\n#html:true\n#notetype column:1\n";

/// All records produced in one run.
#[derive(Debug, Clone, Default)]
pub struct FlashcardDocument {
    records: Vec<FlashcardRecord>,
}

impl FlashcardDocument {
    pub fn new(records: Vec<FlashcardRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: FlashcardRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[FlashcardRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header followed by one line per record, in insertion order.
    pub fn render(&self) -> String {
        let mut content = String::from(HEADER);
        for record in &self.records {
            content.push_str(&record.to_line());
        }
        content
    }
}
