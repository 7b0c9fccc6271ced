//! Page-ordered text extraction over any [`PdfBackend`]

use crate::error::{Error, Result};
use crate::pdf::backend::{PdfBackend, PdfDocumentHandle, PdfPageHandle};
use crate::pdf::pdfium::PdfiumBackend;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Configuration for text extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum page requests in flight at once (default: 16, minimum 1)
    pub max_concurrent_pages: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_pages: 16,
        }
    }
}

/// Extracts the full text of a PDF, pages joined by newlines
#[derive(Debug, Clone)]
pub struct PdfTextExtractor<B = PdfiumBackend> {
    backend: B,
    config: ExtractorConfig,
    password: Option<String>,
}

impl Default for PdfTextExtractor<PdfiumBackend> {
    fn default() -> Self {
        Self::new(PdfiumBackend::default())
    }
}

impl<B: PdfBackend> PdfTextExtractor<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, ExtractorConfig::default())
    }

    pub fn with_config(backend: B, config: ExtractorConfig) -> Self {
        Self {
            backend,
            config,
            password: None,
        }
    }

    /// Password used to open encrypted documents
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read a PDF from disk and extract its text
    pub async fn get_pdf_text<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::PdfNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;

        self.get_pdf_text_from_bytes(data).await
    }

    /// Read a PDF to the end of `reader` and extract its text
    pub async fn get_pdf_text_from_reader<R>(&self, mut reader: R) -> Result<String>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;

        self.get_pdf_text_from_bytes(data).await
    }

    /// Extract the text of an in-memory PDF
    pub async fn get_pdf_text_from_bytes(&self, data: Vec<u8>) -> Result<String> {
        let document = self.backend.load(data, self.password.as_deref()).await?;
        self.extract_document_text(&document).await
    }

    /// Gather every page's text in page order and join with `"\n"`.
    ///
    /// Pages are requested concurrently but collected by page number, so a
    /// late page 1 still comes first. The first failing page fails the call.
    pub async fn extract_document_text<D: PdfDocumentHandle>(
        &self,
        document: &D,
    ) -> Result<String> {
        let page_count = document.num_pages();

        let pages: Vec<String> = stream::iter(1..=page_count)
            .map(|page_num| page_text(document, page_num))
            .buffered(self.config.max_concurrent_pages.max(1))
            .try_collect()
            .await?;

        let text = pages.join("\n");
        tracing::debug!(pages = page_count, chars = text.len(), "Extracted PDF text");

        Ok(text)
    }
}

async fn page_text<D: PdfDocumentHandle>(document: &D, page_num: u32) -> Result<String> {
    let page = document.get_page(page_num).await?;
    let content = page.text_content().await?;
    Ok(content.to_text())
}

/// Extract the text of the PDF at `path` with the default PDFium backend
pub async fn get_pdf_text<P: AsRef<Path>>(path: P) -> Result<String> {
    PdfTextExtractor::<PdfiumBackend>::default()
        .get_pdf_text(path)
        .await
}
