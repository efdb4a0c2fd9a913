//! Source resolution and raw text extraction.
//!
//! Format dispatch is by extension: files ending in `.pdf`
//! (case-insensitive) go through page-text extraction, anything else is
//! read as UTF-8 with invalid sequences dropped. A missing or unreadable
//! file is fatal; a PDF whose content cannot be parsed is not — extraction
//! degrades to less (or no) text and the summarizer's fallback bullet takes
//! over downstream.

use crate::error::NotereelError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Check whether the path should be routed through PDF extraction.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Validate that the source exists and is readable.
pub fn resolve_source(path_str: &str) -> Result<PathBuf, NotereelError> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(NotereelError::SourceNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(NotereelError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(NotereelError::SourceNotFound { path });
        }
    }

    debug!("Resolved source: {}", path.display());
    Ok(path)
}

/// Extract raw text from a resolved source file.
///
/// PDF sources that fail to parse yield an empty string rather than an
/// error; the run then produces the fallback bullet instead of aborting.
pub fn extract_text(path: &Path) -> Result<String, NotereelError> {
    if is_pdf(path) {
        Ok(extract_pdf_text(path))
    } else {
        read_lossy(path)
    }
}

/// Extract per-page text from a PDF and join pages with newlines.
fn extract_pdf_text(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => {
            debug!("Extracted {} chars from PDF", text.len());
            text
        }
        Err(e) => {
            warn!("PDF text extraction failed, treating as empty: {e}");
            String::new()
        }
    }
}

/// Read a file as UTF-8, ignoring invalid byte sequences.
fn read_lossy(path: &Path) -> Result<String, NotereelError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => NotereelError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => NotereelError::SourceNotFound {
            path: path.to_path_buf(),
        },
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
