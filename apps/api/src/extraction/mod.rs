//! PDF → plain text.
//!
//! Extraction is all-or-nothing: any failure while opening the document or
//! walking its pages yields an `ExtractionError`, never partial text.

use std::fmt::Display;
use std::panic::{self, UnwindSafe};

use thiserror::Error;
use tracing::{debug, warn};

/// How far into the stream a `%PDF-` header may start.
const HEADER_SEARCH_WINDOW: usize = 1024;
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Document is empty")]
    Empty,

    #[error("Document is not a PDF")]
    NotPdf,

    #[error("Could not parse or extract the resume: {0}")]
    Malformed(String),

    #[error("Could not parse or extract the resume: the PDF reader aborted")]
    Panicked,
}

/// Converts a document into its text. Implementations must be stateless so
/// one instance can serve concurrent requests.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError>;
}

/// Default backend built on `pdf-extract`. Pages are emitted in document order.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError> {
        extract(document)
    }
}

/// Returns true when `head` carries a PDF header within the search window.
pub fn looks_like_pdf(head: &[u8]) -> bool {
    let window = &head[..head.len().min(HEADER_SEARCH_WINDOW)];
    window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

/// Extracts the concatenated text of every page.
///
/// The result may be empty for image-only documents. The PDF backend panics on
/// some malformed inputs; those panics are caught and reported as
/// `ExtractionError::Panicked`.
pub fn extract(document: &[u8]) -> Result<String, ExtractionError> {
    if document.is_empty() {
        return Err(ExtractionError::Empty);
    }
    if !looks_like_pdf(document) {
        return Err(ExtractionError::NotPdf);
    }

    read_guarded(document, pdf_extract::extract_text_from_mem)
}

/// Runs `backend` over `document`, turning backend errors and panics into
/// `ExtractionError`.
fn read_guarded<F, E>(document: &[u8], backend: F) -> Result<String, ExtractionError>
where
    F: FnOnce(&[u8]) -> Result<String, E> + UnwindSafe,
    E: Display,
{
    match panic::catch_unwind(move || backend(document)) {
        Ok(Ok(text)) => {
            debug!(
                bytes = document.len(),
                chars = text.chars().count(),
                "Extracted resume text"
            );
            Ok(text)
        }
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            Err(ExtractionError::Malformed(e.to_string()))
        }
        Err(_) => {
            warn!("PDF reader panicked during text extraction");
            Err(ExtractionError::Panicked)
        }
    }
}
