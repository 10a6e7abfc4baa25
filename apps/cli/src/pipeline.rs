//! Per-word flashcard pipeline.
//!
//! Words are processed one at a time, in input order. A word either yields a
//! complete record or is reported as a failure; a failure never stops the batch.

use flashcard_core::{
    generate_flashcard, image_tag, select_characters, CardOptions, CharacterInfo,
    FlashcardDocument, FlashcardRecord,
};

use crate::error::{AppError, Result};
use crate::services::{StrokeImageSource, WordInfoSource};

/// A word that produced no record, with the reason.
#[derive(Debug)]
pub struct WordFailure {
    pub word: String,
    pub error: AppError,
}

/// Outcome of one batch: the records that succeeded and the words that did not.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub document: FlashcardDocument,
    pub failures: Vec<WordFailure>,
}

/// Split a line of input into words, dropping empty fragments.
pub fn split_words(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

pub struct Pipeline<'a, W, S> {
    word_info: &'a W,
    strokes: &'a S,
    options: CardOptions,
    verify_characters: bool,
}

impl<'a, W, S> Pipeline<'a, W, S>
where
    W: WordInfoSource,
    S: StrokeImageSource,
{
    pub fn new(word_info: &'a W, strokes: &'a S, options: CardOptions) -> Self {
        Self {
            word_info,
            strokes,
            options,
            verify_characters: false,
        }
    }

    /// Fail a word whose returned characters do not spell it, instead of only warning.
    pub fn verify_characters(mut self, verify: bool) -> Self {
        self.verify_characters = verify;
        self
    }

    /// Build the record for a single word.
    pub async fn process_word(&self, word: &str) -> Result<FlashcardRecord> {
        let info = self.word_info.word_info(word).await?;

        if let Err(e) = info.check_characters(word) {
            if self.verify_characters {
                return Err(e.into());
            }
            tracing::warn!("{}", e);
        }

        let strokes = self.stroke_markup(&info.characters).await?;
        Ok(generate_flashcard(&self.options, word, &info, strokes))
    }

    /// `<img>` tags for each (optionally deduplicated) character that has an image.
    pub async fn stroke_markup(&self, characters: &[CharacterInfo]) -> Result<String> {
        let mut markup = String::new();
        for c in select_characters(characters, self.options.remove_duplicate_characters) {
            if let Some(url) = self.strokes.image_url(&c.character).await? {
                markup.push_str(&image_tag(&url));
            }
        }
        Ok(markup)
    }

    /// Process every word, collecting successes and reporting failures.
    pub async fn run(&self, words: &[String]) -> BatchReport {
        let mut report = BatchReport::default();
        let total = words.len();

        for (i, word) in words.iter().enumerate() {
            match self.process_word(word).await {
                Ok(record) => {
                    report.document.push(record);
                    tracing::info!("Flashcard '{}' generated ({}/{})", word, i + 1, total);
                }
                Err(error) => {
                    tracing::warn!("Failed to process '{}': {}", word, error);
                    report.failures.push(WordFailure {
                        word: word.clone(),
                        error,
                    });
                }
            }
        }

        report
    }
}
