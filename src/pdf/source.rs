//! Loading PDFs and extracting page text.

use std::path::Path;

use lopdf::Document as LopdfDocument;
use serde::Serialize;

use crate::classify::TextExtractor;
use crate::detect::{sniff_version, sniff_version_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, Page};

/// Page payload for documents loaded from a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PdfPage {
    /// Page number in the source file (1-indexed)
    pub source_number: u32,

    /// Object id of the page dictionary in the source file
    pub object_id: (u32, u16),
}

/// Basic facts about a loaded PDF.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PdfInfo {
    /// PDF version (e.g., "1.7")
    pub version: String,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,

    /// Document title
    pub title: Option<String>,

    /// PDF producer
    pub producer: Option<String>,
}

/// A loaded PDF file.
///
/// Serves both as the text source for classification and as the writer
/// for rebuilt page sequences, since output pages are taken from the same
/// file.
pub struct PdfSource {
    pub(super) doc: LopdfDocument,
}

impl PdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a PDF
        sniff_version_from_path(path)?;

        let doc = LopdfDocument::load(path)?;
        Ok(Self::from_lopdf(doc))
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        sniff_version(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_lopdf(doc))
    }

    fn from_lopdf(doc: LopdfDocument) -> Self {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; pages whose text cannot be read will be kept");
        }
        Self { doc }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Collect basic document information.
    pub fn info(&self) -> PdfInfo {
        let mut info = PdfInfo {
            version: self.version(),
            page_count: self.page_count(),
            encrypted: self.is_encrypted(),
            ..Default::default()
        };

        if let Ok(info_dict) = self
            .doc
            .trailer
            .get(b"Info")
            .and_then(|obj| obj.as_reference())
            .and_then(|id| self.doc.get_dictionary(id))
        {
            info.title = get_string_from_dict(info_dict, b"Title");
            info.producer = get_string_from_dict(info_dict, b"Producer");
        }

        info
    }

    /// The page sequence of this file, numbered as in the file.
    pub fn document(&self) -> Document<PdfPage> {
        self.doc
            .get_pages()
            .into_iter()
            .map(|(source_number, object_id)| PdfPage {
                source_number,
                object_id,
            })
            .collect()
    }
}

impl TextExtractor<PdfPage> for PdfSource {
    fn extract_text(&self, page: &Page<PdfPage>) -> Result<String> {
        let source_number = page.content().source_number;
        self.doc
            .extract_text(&[source_number])
            .map_err(|e| Error::TextExtract {
                page: source_number,
                message: e.to_string(),
            })
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        lopdf::Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = body
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pdf_string() {
        assert_eq!(decode_pdf_string(b"Report"), "Report");
        assert_eq!(
            decode_pdf_string(&[0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69]),
            "Hi"
        );
        assert_eq!(decode_pdf_string(&[0x43, 0x61, 0x66, 0xE9]), "Café");
    }

    #[test]
    fn test_from_bytes_rejects_non_pdf() {
        assert!(matches!(
            PdfSource::from_bytes(b"not a pdf at all"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let result = PdfSource::open("/nonexistent/definitely/missing.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
