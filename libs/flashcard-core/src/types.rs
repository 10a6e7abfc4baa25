//! Core types for Mandarin flashcards.

use crate::error::{Result, WordInfoError};
use serde::{Deserialize, Serialize};

/// Meaning and reading of a whole word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGloss {
    pub meaning: String,
    pub pinyin: String,
}

/// Gloss for a single character of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterInfo {
    pub character: String,
    pub meaning: String,
}

impl CharacterInfo {
    pub fn new(character: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            meaning: meaning.into(),
        }
    }
}

/// Structured answer for one word, in the shape the model is asked to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: WordGloss,
    pub characters: Vec<CharacterInfo>,
}

impl WordInfo {
    /// Check that `characters` reproduces `word` one character per entry, in order.
    ///
    /// The model is only asked to do this; nothing upstream guarantees it.
    pub fn check_characters(&self, word: &str) -> Result<()> {
        let matches = self.characters.len() == word.chars().count()
            && self
                .characters
                .iter()
                .zip(word.chars())
                .all(|(info, c)| {
                    let mut chars = info.character.chars();
                    chars.next() == Some(c) && chars.next().is_none()
                });

        if matches {
            return Ok(());
        }

        Err(WordInfoError::CharacterMismatch {
            word: word.to_string(),
            expected: word.to_string(),
            returned: self
                .characters
                .iter()
                .map(|c| c.character.as_str())
                .collect(),
        })
    }
}

/// One import line: seven fields in the order the note type expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardRecord {
    pub note_type: String,
    pub word: String,
    pub meaning: String,
    pub pinyin: String,
    pub audio: String,
    pub strokes: String,
    pub characters: String,
}

impl FlashcardRecord {
    /// Number of tab-separated fields in a record.
    pub const FIELD_COUNT: usize = 7;

    /// Fields in column order.
    pub fn fields(&self) -> [&str; Self::FIELD_COUNT] {
        [
            &self.note_type,
            &self.word,
            &self.meaning,
            &self.pinyin,
            &self.audio,
            &self.strokes,
            &self.characters,
        ]
    }

    /// Render as a newline-terminated, tab-separated line.
    ///
    /// Tabs and newlines inside a field are replaced so the column count holds.
    pub fn to_line(&self) -> String {
        let mut line = self
            .fields()
            .iter()
            .map(|field| clean_field(field))
            .collect::<Vec<_>>()
            .join("\t");
        line.push('\n');
        line
    }
}

fn clean_field(field: &str) -> String {
    field
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
        .replace('\t', " ")
}
