//! Application error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Archive error: {0}")]
    Archive(#[from] comic_archive::error::ArchiveError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
