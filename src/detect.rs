//! PDF header sniffing.
//!
//! Used before handing a file to the PDF loader so that non-PDF input fails
//! with [`Error::UnknownFormat`] instead of a parser error.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Read the PDF version (e.g. `"1.7"`) from the first bytes of a file.
///
/// # Example
/// ```no_run
/// use pagesieve::detect::sniff_version_from_path;
///
/// let version = sniff_version_from_path("report.pdf").unwrap();
/// println!("PDF {}", version);
/// ```
pub fn sniff_version_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    sniff_version(&header)
}

/// Read the PDF version from a byte slice holding at least the header.
pub fn sniff_version(data: &[u8]) -> Result<String> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version_bytes = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;

    match version_bytes {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(version_bytes).into_owned())
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version_bytes).into_owned(),
        )),
    }
}
