//! Common imports, mirrored across the crate.

pub use std::collections::{HashMap, HashSet};
pub use std::path::PathBuf;
pub use std::sync::{Arc, Mutex};
pub use std::time::{Duration, Instant};

pub use eframe::egui::{self, Color32, ColorImage, Context, Rect, TextureHandle, Ui, Vec2};
pub use image::DynamicImage;
pub use log::{debug, info, warn};
pub use lru::LruCache;

pub use comic_archive::{ImageSequence, PageEntry};

pub use crate::app::ComicDropApp;
pub use crate::cache::{
    LoadedPage, PageImage, PageSet, SharedPageCache, TextureCache, load_page_async,
    new_page_cache, new_page_set,
};
pub use crate::comic_filters;
pub use crate::config::*;
pub use crate::error::AppError;
pub use crate::reader::{MAX_SCALE, MIN_SCALE, PageInfo, ReaderSession, WheelBuffer};
pub use crate::ui::{StatusLevel, StatusLine};
