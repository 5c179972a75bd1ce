//! Plain text extraction from PDF documents.
//!
//! Pages are visited in document order and each page's text is returned as
//! the parser emits it. No layout reconstruction is attempted.

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, PdfTextError>;

#[derive(Error, Debug)]
pub enum PdfTextError {
    #[error("Failed to open PDF: {0}")]
    Load(String),

    #[error("Failed to extract text from page {page}: {reason}")]
    Page { page: u32, reason: String },
}

/// Parse the document held in `bytes` and return the text of every page, in order.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>> {
    let doc = Document::load_mem(bytes).map_err(|e| PdfTextError::Load(e.to_string()))?;
    debug!("Loaded PDF ({} bytes)", bytes.len());
    pages_of(&doc)
}

fn pages_of(doc: &Document) -> Result<Vec<String>> {
    // BTreeMap keyed by page number, so iteration is already in document order.
    let pages = doc.get_pages();
    debug!("Extracting text from {} page(s)", pages.len());

    pages
        .keys()
        .map(|&page| {
            doc.extract_text(&[page]).map_err(|e| PdfTextError::Page {
                page,
                reason: e.to_string(),
            })
        })
        .collect()
}
