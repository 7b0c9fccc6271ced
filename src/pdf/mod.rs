//! PDF processing layer
//!
//! This module provides page-ordered text extraction over a pluggable parsing
//! backend, with PDFium as the default.

mod backend;
mod extractor;
mod pdfium;

pub use backend::{PdfBackend, PdfDocumentHandle, PdfPageHandle, TextContent, TextItem};
pub use extractor::{get_pdf_text, ExtractorConfig, PdfTextExtractor};
pub use pdfium::{PdfiumBackend, PdfiumConfig, PdfiumDocument, PdfiumPage};
