use crate::error::ArchiveError;
use crate::{PageArchive, is_page_entry};

use std::collections::HashMap;
use std::path::Path;

/// Archive backend for RAR/CBR comic archives, via the `unrar` bindings.
///
/// RAR archives are commonly solid, which makes random access expensive, so
/// every image entry is decompressed in a single pass at open time and served
/// from memory afterwards.
pub struct RarPageArchive {
    pages: HashMap<String, Vec<u8>>,
}

impl RarPageArchive {
    /// Open a RAR/CBR file and decompress its image entries.
    ///
    /// A read failure partway through keeps the entries already decoded; the
    /// extraction driver decides whether what survived is enough.
    pub fn new(path: &Path) -> Result<Self, ArchiveError> {
        let mut pages = HashMap::new();
        let mut archive = unrar::Archive::new(path)
            .open_for_processing()
            .map_err(|e| ArchiveError::Rar(e.to_string()))?;
        loop {
            let header = match archive.read_header() {
                Ok(Some(header)) => header,
                Ok(None) => break,
                Err(e) => return Err(ArchiveError::Rar(e.to_string())),
            };
            let name = header
                .entry()
                .filename
                .to_string_lossy()
                .replace('\\', "/");
            archive = if header.entry().is_file() && is_page_entry(&name) {
                match header.read() {
                    Ok((bytes, rest)) => {
                        pages.insert(name, bytes);
                        rest
                    }
                    Err(e) => {
                        // A solid stream cannot be resumed past a bad block.
                        log::warn!("stopping rar read early at {:?}: {}", name, e);
                        break;
                    }
                }
            } else {
                header.skip().map_err(|e| ArchiveError::Rar(e.to_string()))?
            };
        }
        Ok(Self { pages })
    }
}

impl PageArchive for RarPageArchive {
    fn list_entries(&mut self) -> Result<Vec<String>, ArchiveError> {
        Ok(self.pages.keys().cloned().collect())
    }

    /// Hand out one decoded entry. Entries are moved out rather than cloned;
    /// the extraction driver reads each name exactly once.
    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ArchiveError> {
        self.pages
            .remove(name)
            .ok_or_else(|| ArchiveError::MissingEntry(name.to_string()))
    }
}
