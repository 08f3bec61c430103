//! The ordered page list produced by extraction.

/// One extracted page: its entry name inside the archive and the raw
/// (still encoded) image bytes.
pub struct PageEntry {
    name: String,
    bytes: Vec<u8>,
}

impl PageEntry {
    pub fn new(name: String, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Ordered, immutable-once-built list of the pages of one opened archive,
/// indexed 0..N-1. Built by extraction, only ever read after that.
pub struct ImageSequence {
    pages: Vec<PageEntry>,
}

impl ImageSequence {
    pub fn new(pages: Vec<PageEntry>) -> Self {
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PageEntry> {
        self.pages.get(index)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(|p| p.name())
    }

    pub fn bytes(&self, index: usize) -> Option<&[u8]> {
        self.pages.get(index).map(|p| p.bytes())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.iter()
    }

    /// Total size of the raw page bytes, for log lines.
    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|p| p.bytes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq() -> ImageSequence {
        ImageSequence::new(vec![
            PageEntry::new("a.jpg".into(), vec![1, 2]),
            PageEntry::new("b.jpg".into(), vec![3]),
        ])
    }

    #[test]
    fn reads_by_index() {
        let s = seq();
        assert_eq!(s.len(), 2);
        assert_eq!(s.name(0), Some("a.jpg"));
        assert_eq!(s.bytes(1), Some(&[3u8][..]));
        assert!(s.get(2).is_none());
        assert_eq!(s.total_bytes(), 3);
    }
}
