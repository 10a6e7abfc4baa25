//! Field formatting for flashcard records.

use crate::types::{CharacterInfo, FlashcardRecord, WordInfo};
use std::collections::HashSet;

/// Separator between entries of the character summary.
const LINE_BREAK: &str = "<br>";

/// Settings that shape how a record is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOptions {
    pub note_type_name: String,
    pub remove_duplicate_characters: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            note_type_name: "Mandarin".to_string(),
            remove_duplicate_characters: false,
        }
    }
}

/// Sound reference for the text-to-speech service.
///
/// The link is resolved by the flashcard viewer; nothing is fetched here.
pub fn audio_link(word: &str) -> String {
    format!(
        "[sound:https://translate.google.com/translate_tts?ie=UTF-8&amp;q={}&amp;tl=zh-CN&amp;client=tw-ob]",
        word
    )
}

/// Keep the first occurrence of each character, preserving order.
pub fn dedup_characters(characters: &[CharacterInfo]) -> Vec<&CharacterInfo> {
    let mut seen = HashSet::new();
    characters
        .iter()
        .filter(|&c| seen.insert(c.character.as_str()))
        .collect()
}

/// Characters to render, deduplicated when requested.
pub fn select_characters(characters: &[CharacterInfo], remove_duplicates: bool) -> Vec<&CharacterInfo> {
    if remove_duplicates {
        dedup_characters(characters)
    } else {
        characters.iter().collect()
    }
}

/// `character: meaning` lines joined by `<br>`.
///
/// A single entry would only repeat the word meaning, so it yields an empty string.
pub fn character_meanings(characters: &[CharacterInfo], remove_duplicates: bool) -> String {
    let selected = select_characters(characters, remove_duplicates);
    if selected.len() == 1 {
        return String::new();
    }

    selected
        .iter()
        .map(|c| format!("{}: {}", c.character, c.meaning))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Markup for one stroke-order image, followed by a space.
pub fn image_tag(src: &str) -> String {
    format!("<img src=\"{}\"> ", src)
}

/// Assemble the record for `word` from its gloss and pre-fetched stroke markup.
pub fn generate_flashcard(
    options: &CardOptions,
    word: &str,
    info: &WordInfo,
    strokes: String,
) -> FlashcardRecord {
    FlashcardRecord {
        note_type: options.note_type_name.clone(),
        word: word.to_string(),
        meaning: info.word.meaning.clone(),
        pinyin: info.word.pinyin.clone(),
        audio: audio_link(word),
        strokes,
        characters: character_meanings(&info.characters, options.remove_duplicate_characters),
    }
}
