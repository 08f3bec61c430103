//! Decoded pages and uploaded textures.

pub mod page_cache;
pub mod texture_cache;

pub use page_cache::{
    LoadedPage, PageImage, PageSet, SharedPageCache, load_page_async, new_page_cache,
    new_page_set,
};
pub use texture_cache::TextureCache;
