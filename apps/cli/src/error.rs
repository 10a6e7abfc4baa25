//! Error handling for the flashcard generator

use thiserror::Error;

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::services::gemini::GeminiError;
use crate::services::stroke_order::StrokeOrderError;
use flashcard_core::WordInfoError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Word info error: {0}")]
    WordInfo(#[from] GeminiError),

    #[error("Stroke order error: {0}")]
    StrokeOrder(#[from] StrokeOrderError),

    #[error("Invalid word info: {0}")]
    InvalidWordInfo(#[from] WordInfoError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type alias for application operations
pub type Result<T, E = AppError> = std::result::Result<T, E>;
