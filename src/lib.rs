//! PDF Strength Finder Library
//!
//! This crate provides two independent text utilities:
//! - `get_pdf_text`: Extract the text of every page of a PDF, joined by newlines
//! - `extract_strengths`: Pull a ranked list of 34 themes out of report text
//!
//! `strengths_from_pdf` chains the two.

pub mod error;
pub mod pdf;
pub mod strength;

use std::path::Path;

pub use error::{Error, Result};
pub use pdf::{get_pdf_text, ExtractorConfig, PdfTextExtractor, PdfiumBackend, PdfiumConfig};
pub use strength::{extract_strengths, StrengthFinder, STRENGTH_COUNT};

/// Extract the ranked strengths listed in the PDF at `path`.
///
/// Returns `Ok(vec![])` when the document text holds no complete list.
pub async fn strengths_from_pdf<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = get_pdf_text(path).await?;
    Ok(extract_strengths(&text))
}
