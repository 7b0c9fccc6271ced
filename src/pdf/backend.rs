//! PDF parsing capability used by the text extractor
//!
//! A backend turns raw bytes into a document handle, a document hands out
//! pages by 1-based number, and a page reports its text as an ordered list of
//! fragments. [`crate::pdf::PdfTextExtractor`] only talks to these traits, so
//! the PDFium binding can be swapped for any other parser.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// One fragment of page text, as reported by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
}

impl TextItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Ordered text fragments of a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub items: Vec<TextItem>,
}

impl TextContent {
    /// Build content from fragments in reading order
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: fragments.into_iter().map(TextItem::new).collect(),
        }
    }

    /// Concatenate all fragments with no separator.
    ///
    /// No spacing is inferred between fragments: if the parser does not emit
    /// whitespace items, adjacent words run together.
    pub fn to_text(&self) -> String {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Trait for PDF parsing backends.
///
/// Implementors own everything about the binary format; callers only see
/// page counts and text fragments.
pub trait PdfBackend: Send + Sync {
    type Document: PdfDocumentHandle;

    /// Parse a complete PDF byte buffer into a document handle.
    fn load(
        &self,
        data: Vec<u8>,
        password: Option<&str>,
    ) -> impl Future<Output = Result<Self::Document>> + Send;
}

/// A parsed document
pub trait PdfDocumentHandle: Send + Sync {
    type Page: PdfPageHandle;

    /// Number of pages in the document
    fn num_pages(&self) -> u32;

    /// Fetch a page by 1-based page number
    fn get_page(&self, page_num: u32) -> impl Future<Output = Result<Self::Page>> + Send;
}

/// A single page of a parsed document
pub trait PdfPageHandle: Send {
    /// Text fragments of the page in reading order
    fn text_content(&self) -> impl Future<Output = Result<TextContent>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_text_joins_without_separator() {
        let content = TextContent::from_fragments(["Hello", " ", "World"]);
        assert_eq!(content.to_text(), "Hello World");
    }

    #[test]
    fn test_to_text_does_not_infer_spacing() {
        let content = TextContent::from_fragments(["Top", "Themes"]);
        assert_eq!(content.to_text(), "TopThemes");
    }

    #[test]
    fn test_empty_content() {
        let content = TextContent::default();
        assert!(content.is_empty());
        assert_eq!(content.to_text(), "");
    }

    #[test]
    fn test_text_content_serde() {
        let content: TextContent =
            serde_json::from_str(r#"{"items":[{"text":"1."},{"text":" Focus"}]}"#).unwrap();
        assert_eq!(content.to_text(), "1. Focus");

        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, r#"{"items":[{"text":"1."},{"text":" Focus"}]}"#);
    }
}
