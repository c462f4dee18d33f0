//! Writing rebuilt page sequences back to PDF.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::Document as LopdfDocument;

use super::source::{PdfPage, PdfSource};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::rebuild::DocumentWriter;

impl PdfSource {
    /// Copy of the source file holding only the pages of `document`.
    fn retain(&self, document: &Document<PdfPage>) -> Result<LopdfDocument> {
        let keep: Vec<u32> = document.contents().map(|page| page.source_number).collect();

        // lopdf deletes pages but cannot reorder them
        if keep.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::Write("pages must stay in source order".to_string()));
        }

        let pages = self.doc.get_pages();
        if let Some(missing) = keep.iter().find(|n| !pages.contains_key(*n)) {
            return Err(Error::Write(format!(
                "page {} does not exist in the source document",
                missing
            )));
        }

        let removed: Vec<u32> = pages
            .keys()
            .copied()
            .filter(|n| keep.binary_search(n).is_err())
            .collect();

        let mut output = self.doc.clone();
        if !removed.is_empty() {
            output.delete_pages(&removed);
            output.prune_objects();
        }
        Ok(output)
    }

    /// Serialize `document` to PDF bytes.
    pub fn to_bytes(&self, document: &Document<PdfPage>) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_document(document, &mut buffer)?;
        Ok(buffer)
    }

    /// Write `document` to a file and return the file size in bytes.
    pub fn save_document<P: AsRef<Path>>(
        &self,
        document: &Document<PdfPage>,
        path: P,
    ) -> Result<u64> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_document(document, &mut out)?;
        out.flush()?;
        drop(out);

        let size = std::fs::metadata(path)?.len();
        log::info!(
            "Wrote {} pages to {} ({} bytes)",
            document.page_count(),
            path.display(),
            size
        );
        Ok(size)
    }
}

impl DocumentWriter<PdfPage> for PdfSource {
    fn write_document<W: Write>(&self, document: &Document<PdfPage>, out: &mut W) -> Result<()> {
        let mut output = self.retain(document)?;
        output.save_to(out)?;
        Ok(())
    }
}
