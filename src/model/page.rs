//! Page-level types.

use serde::Serialize;

/// A single page in a document.
///
/// The ordinal is assigned by the owning [`Document`](super::Document) and
/// cannot be changed from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Page number (1-indexed)
    number: u32,

    /// Opaque page payload
    pub content: T,
}

impl<T> Page<T> {
    pub(crate) fn new(number: u32, content: T) -> Self {
        Self { number, content }
    }

    /// Get the page ordinal (1-indexed).
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Get the page payload.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Consume the page and return its payload.
    pub fn into_content(self) -> T {
        self.content
    }
}
