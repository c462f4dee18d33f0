//! Output seam for rebuilt documents.

use std::io::Write;

use crate::error::Result;
use crate::model::Document;

/// Serializes a document to a concrete file format.
///
/// The rebuilder never writes anything itself; callers hand its output to
/// a `DocumentWriter`.
pub trait DocumentWriter<T> {
    /// Write `document` to `out`.
    fn write_document<W: Write>(&self, document: &Document<T>, out: &mut W) -> Result<()>;
}
