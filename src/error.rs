//! Error types for PDF text and strength extraction

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PDF text and strength extraction
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected and no valid password was provided
    #[error("PDF is password protected")]
    PasswordRequired,

    /// Page out of bounds
    #[error("Page {page} out of bounds (total: {total})")]
    PageOutOfBounds { page: u32, total: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Generated strength pattern failed to compile
    #[error("Invalid strength pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Whether the error came from reading the input rather than parsing it
    pub fn is_io(&self) -> bool {
        matches!(self, Error::PdfNotFound { .. } | Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PageOutOfBounds { page: 3, total: 2 };
        assert_eq!(err.to_string(), "Page 3 out of bounds (total: 2)");

        let err = Error::PdfNotFound {
            path: "/tmp/missing.pdf".to_string(),
        };
        assert_eq!(err.to_string(), "PDF not found: /tmp/missing.pdf");
    }

    #[test]
    fn test_is_io() {
        let io = Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(io.is_io());
        assert!(Error::PdfNotFound {
            path: "x.pdf".to_string()
        }
        .is_io());
        assert!(!Error::PasswordRequired.is_io());
        assert!(!Error::InvalidPdf {
            reason: "bad".to_string()
        }
        .is_io());
    }
}
