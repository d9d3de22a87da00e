//! PDF text extraction adapter.
//!
//! Wraps `lopdf` page-by-page: a page that fails to extract (or yields no
//! text) contributes nothing to the combined text, without failing the run.
//! Only a document that cannot be opened at all is an error.

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to open PDF document: {0}")]
    Unreadable(String),
}

/// Extraction outcome for one page, in physical page order.
#[derive(Debug, Clone)]
pub struct PageExtraction {
    pub page_number: u32,
    /// `None` when the page failed to extract or yielded no text.
    /// Kept per page so a warning surface can be added without changing the
    /// combined-text contract.
    pub text: Option<String>,
}

/// The combined extraction result for one uploaded document.
#[derive(Debug, Clone)]
pub struct ExtractedResume {
    /// Concatenation of all pages' text in page order, no separator.
    /// Empty when no page yields any text.
    pub text: String,
    pub pages: Vec<PageExtraction>,
}

/// Extracts text from raw PDF bytes, page by page in physical order.
pub fn extract_resume_text(bytes: &[u8]) -> Result<ExtractedResume, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_number, _page_id) in doc.get_pages() {
        let text = match doc.extract_text(&[page_number]) {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                debug!("Page {page_number} yielded no text: {e}");
                None
            }
        };
        pages.push(PageExtraction { page_number, text });
    }

    Ok(assemble(pages))
}

/// Joins per-page texts in order. Pages without text contribute nothing;
/// no separator is inserted and the result is not trimmed.
fn assemble(pages: Vec<PageExtraction>) -> ExtractedResume {
    let mut text = String::new();
    for page in &pages {
        if let Some(t) = &page.text {
            text.push_str(t);
        }
    }
    ExtractedResume { text, pages }
}
