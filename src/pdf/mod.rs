//! PDF input and output collaborators backed by lopdf.

mod source;
mod writer;

pub use source::{PdfInfo, PdfPage, PdfSource};
