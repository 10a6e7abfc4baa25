//! Core library for building Mandarin vocabulary flashcards.
//!
//! Provides:
//! - Word and character gloss types returned by the language model
//! - The word-info prompt and its response schema
//! - Record formatting (audio link, stroke images, character summary)
//! - Rendering of the tab-separated import document

pub mod document;
pub mod error;
pub mod format;
pub mod prompt;
pub mod types;

pub use document::FlashcardDocument;
pub use error::{Result, WordInfoError};
pub use format::{
    audio_link, character_meanings, dedup_characters, generate_flashcard, image_tag,
    select_characters, CardOptions,
};
pub use prompt::{render_prompt, response_schema};
pub use types::{CharacterInfo, FlashcardRecord, WordGloss, WordInfo};
