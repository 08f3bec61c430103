use crate::error::ArchiveError;
use crate::{PageArchive, is_page_entry};

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use sevenz_rust::{Password, SevenZReader};

/// Archive backend for CB7/7z comic archives.
///
/// 7z uses block compression, which rules out cheap random access, so the
/// whole archive is walked once at open time and the image entries kept in
/// memory.
pub struct SevenZipPageArchive {
    pages: HashMap<String, Vec<u8>>,
}

impl SevenZipPageArchive {
    pub fn new(path: &Path) -> Result<Self, ArchiveError> {
        let mut sz = SevenZReader::open(path, Password::empty())?;
        let mut pages = HashMap::new();
        sz.for_each_entries(|entry, reader| {
            let name = entry.name().to_string();
            if !entry.is_directory() && is_page_entry(&name) {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                pages.insert(name, bytes);
            }
            Ok(true)
        })?;
        Ok(Self { pages })
    }
}

impl PageArchive for SevenZipPageArchive {
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
