//! Writes the import file at the end of a run.

use std::path::{Path, PathBuf};

use flashcard_core::FlashcardDocument;
use thiserror::Error;

/// File name of the import document inside the output folder.
pub const OUTPUT_FILE_NAME: &str = "flashcards.txt";

/// Result type alias for export operations.
pub type Result<T, E = ExportError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write `document` to `path`, replacing any previous file.
///
/// Missing parent folders are created. An empty document writes nothing and
/// returns `Ok(None)`.
pub fn write_flashcards(document: &FlashcardDocument, path: &Path) -> Result<Option<PathBuf>> {
    if document.is_empty() {
        return Ok(None);
    }

    if let Some(folder) = path.parent() {
        if folder != Path::new(".") && !folder.as_os_str().is_empty() {
            std::fs::create_dir_all(folder).map_err(|source| ExportError::CreateDir {
                path: folder.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, document.render()).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(path.to_path_buf()))
}
