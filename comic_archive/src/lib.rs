//! Comic archive extraction for CBZ/ZIP, CBR/RAR, and CB7/7z files.
//!
//! An archive goes in, an ordered [`ImageSequence`] of raw page bytes comes
//! out. Extraction is eager: every image entry is read up front (reporting
//! progress through a callback) so the viewer never touches the file again.
//! Entries sort in natural filename order, unreadable entries are skipped,
//! and extraction only fails outright if nothing survives.

pub mod error;
pub mod prelude;

mod sequence;
mod sort;

mod zip_archive;
pub use zip_archive::ZipPageArchive;

#[cfg(feature = "rar")]
mod rar_archive;
#[cfg(feature = "rar")]
pub use rar_archive::RarPageArchive;

#[cfg(feature = "7z")]
mod seven_zip_archive;
#[cfg(feature = "7z")]
pub use seven_zip_archive::SevenZipPageArchive;

pub use sequence::{ImageSequence, PageEntry};
pub use sort::natural_cmp;

use std::path::Path;

use crate::error::ArchiveError;

/// Largest archive the viewer will open, in bytes.
pub const MAX_ARCHIVE_BYTES: u64 = 500 * 1024 * 1024;

#[macro_export]
macro_rules! is_supported_image {
    ($name:expr) => {{
        let lower = $name.to_ascii_lowercase();
        lower.ends_with(".jpg")
            || lower.ends_with(".jpeg")
            || lower.ends_with(".png")
            || lower.ends_with(".webp")
            || lower.ends_with(".gif")
            || lower.ends_with(".bmp")
    }};
}

/// Archive extensions this build can open, lowercase, in display order.
pub fn supported_extensions() -> Vec<&'static str> {
    let mut exts = vec!["cbz", "zip"];
    #[cfg(feature = "rar")]
    exts.extend(["cbr", "rar"]);
    #[cfg(feature = "7z")]
    exts.extend(["cb7", "7z"]);
    exts
}

/// Whether an entry name counts as a page image. Matches by extension and
/// ignores dotfile junk such as AppleDouble `._` companions.
pub(crate) fn is_page_entry(name: &str) -> bool {
    let base = name.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(name);
    !base.starts_with('.') && is_supported_image!(name)
}

// =======================
// Backend trait and dispatch
// =======================

/// One archive format's reading strategy. Listing may come back in any
/// order; the extraction driver owns ordering and the skip-on-error policy.
pub trait PageArchive: Send {
    /// Names of every image entry in the archive, unordered.
    fn list_entries(&mut self) -> Result<Vec<String>, ArchiveError>;
    /// Raw encoded bytes of one entry.
    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ArchiveError>;
}

/// Open the backend matching the file extension.
pub fn open_archive(path: &Path) -> Result<Box<dyn PageArchive>, ArchiveError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "cbz" | "zip" => Ok(Box::new(ZipPageArchive::new(path)?)),
        #[cfg(feature = "rar")]
        "cbr" | "rar" => Ok(Box::new(RarPageArchive::new(path)?)),
        #[cfg(feature = "7z")]
        "cb7" | "7z" => Ok(Box::new(SevenZipPageArchive::new(path)?)),
        _ => Err(ArchiveError::UnsupportedFormat(ext)),
    }
}

/// Reject a path before any decompression work: it must exist, carry a
/// supported extension, and stay under [`MAX_ARCHIVE_BYTES`].
fn validate(path: &Path) -> Result<(), ArchiveError> {
    let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ArchiveError::NotFound(path.display().to_string()),
        _ => ArchiveError::Io(e),
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !supported_extensions().contains(&ext.as_str()) {
        return Err(ArchiveError::UnsupportedFormat(ext));
    }

    if meta.len() > MAX_ARCHIVE_BYTES {
        return Err(ArchiveError::TooLarge {
            size: meta.len(),
            limit: MAX_ARCHIVE_BYTES,
        });
    }
    Ok(())
}

/// Extract every page image from the archive at `path`.
///
/// `progress` is called zero or more times with a percentage and a short
/// status message; it always ends at 100 on success.
///
/// # Errors
///
/// Fails before extraction for a missing file, an unsupported extension, or
/// an oversized archive, and during extraction for a corrupt archive or one
/// with no readable images. Individual unreadable entries are logged and
/// skipped as long as at least one page survives.
pub fn extract<F>(path: &Path, mut progress: F) -> Result<ImageSequence, ArchiveError>
where
    F: FnMut(u8, &str),
{
    validate(path)?;
    progress(5, "Reading archive...");
    let mut backend = open_archive(path)?;
    extract_entries(backend.as_mut(), &mut progress)
}

fn extract_entries(
    backend: &mut dyn PageArchive,
    progress: &mut dyn FnMut(u8, &str),
) -> Result<ImageSequence, ArchiveError> {
    let mut names = backend.list_entries()?;
    names.sort_by(|a, b| natural_cmp(a, b));
    if names.is_empty() {
        return Err(ArchiveError::NoImages);
    }

    let total = names.len();
    let mut pages = Vec::with_capacity(total);
    for (i, name) in names.iter().enumerate() {
        let percent = (10 + 80 * i / total) as u8;
        progress(percent, &format!("Extracting page {}/{}...", i + 1, total));
        match backend.read_entry(name) {
            Ok(bytes) => pages.push(PageEntry::new(name.clone(), bytes)),
            Err(e) => log::warn!("skipping unreadable entry {:?}: {}", name, e),
        }
    }

    if pages.is_empty() {
        return Err(ArchiveError::NoValidImages);
    }
    progress(100, "Done");
    Ok(ImageSequence::new(pages))
}
