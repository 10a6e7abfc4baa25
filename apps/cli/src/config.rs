//! Settings loaded once at startup from `config.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use flashcard_core::CardOptions;

use crate::export::OUTPUT_FILE_NAME;
use serde::Deserialize;
use thiserror::Error;

/// Default settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Result type alias for configuration loading.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("GEMINI_API_KEY is not set in the config file or environment")]
    MissingApiKey,
}

/// Typed view of the settings file. Every optional key has an explicit default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub language: String,
    pub note_type_name: String,
    pub output_folder: PathBuf,
    pub remove_duplicate_characters: bool,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub stroke_order_base_url: String,
    pub request_timeout_secs: u64,
    pub verify_characters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            language: "English".to_string(),
            note_type_name: "Mandarin".to_string(),
            output_folder: PathBuf::from("."),
            remove_duplicate_characters: false,
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            stroke_order_base_url: "https://www.strokeorder.com".to_string(),
            request_timeout_secs: 60,
            verify_characters: false,
        }
    }
}

impl Config {
    /// Load from `FLASHCARDS_CONFIG` or `config.json`, then apply environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_with(
            std::env::var("FLASHCARDS_CONFIG").ok(),
            std::env::var("GEMINI_API_KEY").ok(),
        )
    }

    /// Load from `config_path` (default `config.json`), letting a non-blank
    /// `api_key` replace the file's key.
    pub fn load_with(config_path: Option<String>, api_key: Option<String>) -> Result<Self> {
        let path = config_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file(&path)?;
        if let Some(key) = api_key {
            config.apply_api_key_override(key);
        }
        Ok(config)
    }

    /// Read and parse a settings file without consulting the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    fn apply_api_key_override(&mut self, key: String) {
        if !key.trim().is_empty() {
            self.gemini_api_key = Some(key);
        }
    }

    /// Credential for the word-info service.
    pub fn api_key(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Bound on each HTTP request. `REQUEST_TIMEOUT_SECS: 0` disables it.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn card_options(&self) -> CardOptions {
        CardOptions {
            note_type_name: self.note_type_name.clone(),
            remove_duplicate_characters: self.remove_duplicate_characters,
        }
    }

    /// `<OUTPUT_FOLDER>/flashcards.txt`
    pub fn output_file(&self) -> PathBuf {
        self.output_folder.join(OUTPUT_FILE_NAME)
    }
}
