//! Error types for pagesieve.

use std::io;
use thiserror::Error;

/// Result type alias for pagesieve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while classifying and rebuilding documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error on page {page}: {message}")]
    TextExtract {
        /// Page number (1-indexed)
        page: u32,
        /// Underlying failure
        message: String,
    },

    /// The classification list does not have one entry per page.
    #[error("Expected {expected} classifications, got {actual}")]
    MismatchedClassificationCount {
        /// Number of pages in the document
        expected: usize,
        /// Number of classifications supplied
        actual: usize,
    },

    /// A page has no classification, or more than one.
    #[error("Page {0} has no unique classification")]
    UnmatchedClassification(u32),

    /// The document is too short for the requested removal.
    #[error("Cannot remove page {required}: document has {available} pages")]
    InsufficientPageCount {
        /// Highest ordinal the removal needs
        required: u32,
        /// Pages actually present
        available: u32,
    },

    /// Ordinals are 1-based; zero never names a page.
    #[error("Invalid page ordinal: {0}")]
    InvalidOrdinal(u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error while writing an output document.
    #[error("Output error: {0}")]
    Write(String),

    /// Error while rendering a report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
