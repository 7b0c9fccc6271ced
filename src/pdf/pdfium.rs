//! PDFium backend

use crate::error::{Error, Result};
use crate::pdf::backend::{PdfBackend, PdfDocumentHandle, PdfPageHandle, TextContent, TextItem};
use pdfium_render::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where to look for the PDFium shared library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfiumConfig {
    /// Directories searched in order for the platform PDFium library
    pub library_paths: Vec<PathBuf>,
    /// Fall back to the system library search path (default: true)
    pub use_system_library: bool,
}

impl Default for PdfiumConfig {
    fn default() -> Self {
        Self {
            library_paths: vec![PathBuf::from("./"), PathBuf::from("/opt/pdfium/lib")],
            use_system_library: true,
        }
    }
}

/// Bind a fresh PDFium instance (PDFium is not thread-safe, so each document
/// gets its own)
fn create_pdfium(config: &PdfiumConfig) -> Result<Pdfium> {
    let mut last_error = None;

    for dir in &config.library_paths {
        match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)) {
            Ok(bindings) => {
                tracing::debug!(path = %dir.display(), "Bound PDFium library");
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => last_error = Some(e.to_string()),
        }
    }

    if config.use_system_library {
        match Pdfium::bind_to_system_library() {
            Ok(bindings) => {
                tracing::debug!("Bound system PDFium library");
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => last_error = Some(e.to_string()),
        }
    }

    Err(Error::Pdfium {
        reason: format!(
            "Failed to initialize PDFium: {}",
            last_error.unwrap_or_else(|| "no library locations configured".to_string())
        ),
    })
}

fn check_header(data: &[u8]) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }
    Ok(())
}

/// Map PDFium errors to our error type
fn map_pdfium_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::PasswordRequired
        }
        _ => Error::Pdfium {
            reason: format!("{}", err),
        },
    }
}

/// Parse the document and pull every page's text segments.
///
/// Runs on a blocking thread; the PDFium document cannot leave it.
fn extract_page_contents(
    data: &[u8],
    password: Option<&str>,
    config: &PdfiumConfig,
) -> Result<Vec<TextContent>> {
    check_header(data)?;

    let pdfium = create_pdfium(config)?;
    let document = pdfium
        .load_pdf_from_byte_slice(data, password)
        .map_err(map_pdfium_error)?;

    let pages = document.pages();
    let mut contents = Vec::with_capacity(pages.len() as usize);

    for index in 0..pages.len() {
        let page = pages.get(index).map_err(|e| Error::Pdfium {
            reason: format!("Failed to get page {}: {}", index + 1, e),
        })?;

        let text = page.text().map_err(|e| Error::Pdfium {
            reason: format!("Failed to read text of page {}: {}", index + 1, e),
        })?;

        let items = text
            .segments()
            .iter()
            .map(|segment| TextItem::new(segment.text()))
            .collect();

        contents.push(TextContent { items });
    }

    Ok(contents)
}

/// PDF backend using PDFium
#[derive(Debug, Clone, Default)]
pub struct PdfiumBackend {
    config: PdfiumConfig,
}

impl PdfiumBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PdfiumConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PdfiumConfig {
        &self.config
    }
}

impl PdfBackend for PdfiumBackend {
    type Document = PdfiumDocument;

    async fn load(&self, data: Vec<u8>, password: Option<&str>) -> Result<PdfiumDocument> {
        let bytes = data.len();
        let password = password.map(str::to_owned);
        let config = self.config.clone();

        // Move CPU-heavy PDF work to blocking thread pool
        let pages = tokio::task::spawn_blocking(move || {
            extract_page_contents(&data, password.as_deref(), &config)
        })
        .await
        .map_err(|e| Error::Pdfium {
            reason: format!("Task join error: {}", e),
        })??;

        tracing::debug!(page_count = pages.len(), bytes, "Loaded PDF document");

        Ok(PdfiumDocument { pages })
    }
}

/// Document parsed by PDFium, with page text extracted up front
#[derive(Debug, Clone)]
pub struct PdfiumDocument {
    pages: Vec<TextContent>,
}

impl PdfDocumentHandle for PdfiumDocument {
    type Page = PdfiumPage;

    fn num_pages(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn get_page(&self, page_num: u32) -> Result<PdfiumPage> {
        let total = self.num_pages();
        if page_num < 1 || page_num > total {
            return Err(Error::PageOutOfBounds {
                page: page_num,
                total,
            });
        }

        Ok(PdfiumPage {
            content: self.pages[(page_num - 1) as usize].clone(),
        })
    }
}

/// A single page of a [`PdfiumDocument`]
#[derive(Debug, Clone)]
pub struct PdfiumPage {
    content: TextContent,
}

impl PdfPageHandle for PdfiumPage {
    async fn text_content(&self) -> Result<TextContent> {
        Ok(self.content.clone())
    }
}
