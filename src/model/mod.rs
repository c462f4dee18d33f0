//! Document model shared by the classifier and the rebuilder.
//!
//! A [`Document`] is an ordered sequence of [`Page`]s numbered contiguously
//! from 1. The page payload is opaque to the engine; only the
//! [`TextExtractor`](crate::classify::TextExtractor) collaborator looks
//! inside it.

mod document;
mod page;

pub use document::Document;
pub use page::Page;
