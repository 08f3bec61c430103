use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("No such file: {0}")]
    NotFound(String),
    #[error("Unsupported archive format: {0:?}")]
    UnsupportedFormat(String),
    #[error("Archive is too large ({size} bytes, limit {limit})")]
    TooLarge { size: u64, limit: u64 },
    #[error("No images found in archive")]
    NoImages,
    #[error("No valid images could be extracted")]
    NoValidImages,
    #[error("Entry not found in archive: {0}")]
    MissingEntry(String),
    #[error("RAR error: {0}")]
    Rar(String),
    #[cfg(feature = "7z")]
    #[error("7z error: {0}")]
    SevenZip(#[from] sevenz_rust::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
