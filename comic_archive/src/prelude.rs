#[cfg(feature = "rar")]
pub use crate::RarPageArchive;
#[cfg(feature = "7z")]
pub use crate::SevenZipPageArchive;
pub use crate::error::ArchiveError;
pub use crate::{ImageSequence, PageArchive, PageEntry, ZipPageArchive};
pub use crate::{extract, natural_cmp, open_archive, supported_extensions};
