use crate::error::ArchiveError;
use crate::{PageArchive, is_page_entry};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::read::ZipArchive;

/// Archive backend for CBZ/ZIP comic archives.
///
/// ZIP has a central directory and per-entry compression, so entries can be
/// read on demand; nothing is decompressed until the extraction driver asks
/// for it.
pub struct ZipPageArchive {
    zip: ZipArchive<File>,
}

impl ZipPageArchive {
    /// Open a CBZ/ZIP file and parse its central directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CBZ/ZIP file.
    ///
    /// # Returns
    ///
    /// Returns a `ZipPageArchive` on success, or an `ArchiveError` if the
    /// file cannot be opened or is not a valid ZIP archive.
    pub fn new(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path)?;
        Ok(Self {
            zip: ZipArchive::new(file)?,
        })
    }
}

impl PageArchive for ZipPageArchive {
    /// List every image entry in the archive, unordered.
    ///
    /// Entries with unreadable headers are skipped rather than failing the
    /// whole listing.
    fn list_entries(&mut self) -> Result<Vec<String>, ArchiveError> {
        let mut names = Vec::new();
        for i in 0..self.zip.len() {
            let Ok(entry) = self.zip.by_index(i) else {
                log::warn!("skipping unreadable zip entry at index {i}");
                continue;
            };
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            if is_page_entry(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Decompress and return the raw bytes of one entry.
    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ArchiveError> {
        let mut entry = self.zip.by_name(name)?;
        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
