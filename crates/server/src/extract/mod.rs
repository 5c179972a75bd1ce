//! Text Extraction Service
//!
//! Reads a stored file under its name's lock, runs the PDF parser on the
//! blocking pool and joins the page texts in document order.

pub mod handlers;

pub use handlers::extract_file;

use std::sync::Arc;
use tracing::{error, info};

use crate::core::error::{Error, Result};
use crate::files::FileStore;

/// Returned in place of an empty extraction
pub const NO_TEXT_FOUND: &str = "No text found in this PDF.";

/// Source of per-page text for a document held in memory
pub trait TextExtractor: Send + Sync {
    fn extract_pages(&self, pdf: &[u8]) -> std::result::Result<Vec<String>, String>;
}

/// `lopdf` backed extractor
pub struct LopdfExtractor;

impl TextExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf: &[u8]) -> std::result::Result<Vec<String>, String> {
        filedesk_pdf::extract_pages(pdf).map_err(|e| e.to_string())
    }
}

/// Extract the text of stored file `name`.
///
/// A missing file is `NotFound` and the extractor is never called. The bytes
/// are read while the name is locked, so an upload in progress is never seen
/// half written.
pub async fn extract_text(
    files: &FileStore,
    extractor: Arc<dyn TextExtractor>,
    name: &str,
) -> Result<String> {
    let pdf = files.read(name).await?;

    let pages = tokio::task::spawn_blocking(move || extractor.extract_pages(&pdf))
        .await
        .map_err(|e| Error::ExtractionFailed(format!("PDF parser aborted: {}", e)))?
        .map_err(|reason| {
            error!("Extraction failed for {}: {}", name, reason);
            Error::ExtractionFailed(reason)
        })?;

    info!("Extracted {} page(s) from {}", pages.len(), name);
    Ok(join_pages(pages))
}

/// Concatenate page texts; whitespace-only output counts as no text.
pub fn join_pages(pages: Vec<String>) -> String {
    let text = pages.concat();
    if text.trim().is_empty() {
        NO_TEXT_FOUND.to_string()
    } else {
        text
    }
}
