//! Adapters for the external services a run depends on.

pub mod gemini;
pub mod stroke_order;

use flashcard_core::WordInfo;

use crate::error::Result;

/// Source of structured glosses for a word.
#[allow(async_fn_in_trait)]
pub trait WordInfoSource {
    async fn word_info(&self, word: &str) -> Result<WordInfo>;
}

/// Source of stroke-order image URLs for single characters.
#[allow(async_fn_in_trait)]
pub trait StrokeImageSource {
    /// `Ok(None)` means the character page has no image; that is not an error.
    async fn image_url(&self, character: &str) -> Result<Option<String>>;
}
