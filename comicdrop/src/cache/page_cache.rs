//! Background decoding of pages into a shared LRU cache.

use std::io::Cursor;
use std::num::NonZeroUsize;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use crate::prelude::*;

/// A decoded page, ready for upload.
#[derive(Clone)]
pub enum PageImage {
    Static(Arc<DynamicImage>),
    /// Pre-rendered GIF frames with per-frame delays in milliseconds.
    Animated {
        frames: Arc<Vec<ColorImage>>,
        delays: Vec<u16>,
        started: Instant,
    },
}

impl PageImage {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            PageImage::Static(image) => {
                use image::GenericImageView;
                image.dimensions()
            }
            PageImage::Animated { frames, .. } => frames
                .first()
                .map(|f| (f.size[0] as u32, f.size[1] as u32))
                .unwrap_or((0, 0)),
        }
    }
}

#[derive(Clone)]
pub struct LoadedPage {
    pub image: PageImage,
    pub index: usize,
}

pub type SharedPageCache = Arc<Mutex<LruCache<usize, LoadedPage>>>;
/// A shared set of page indices. One tracks decodes in flight so a page is
/// never decoded twice at once, another remembers decodes that failed.
pub type PageSet = Arc<Mutex<HashSet<usize>>>;

pub fn new_page_cache(capacity: usize) -> SharedPageCache {
    let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
    Arc::new(Mutex::new(LruCache::new(capacity)))
}

pub fn new_page_set() -> PageSet {
    Arc::new(Mutex::new(HashSet::new()))
}

/// Decode raw page bytes. GIFs with more than one frame become animations;
/// everything else goes through the generic decoder.
pub fn decode_page(filename: &str, bytes: &[u8]) -> Result<PageImage, AppError> {
    if filename.to_ascii_lowercase().ends_with(".gif") {
        if let Some((frames, delays)) = decode_gif(bytes) {
            return Ok(PageImage::Animated {
                frames: Arc::new(frames),
                delays,
                started: Instant::now(),
            });
        }
    }
    let image = image::load_from_memory(bytes)?;
    Ok(PageImage::Static(Arc::new(image)))
}

fn decode_gif(bytes: &[u8]) -> Option<(Vec<ColorImage>, Vec<u16>)> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).ok()?;
    let raw_frames = decoder.into_frames().collect_frames().ok()?;
    if raw_frames.len() < 2 {
        // A single frame decodes better as a static image.
        return None;
    }

    let mut frames = Vec::with_capacity(raw_frames.len());
    let mut delays = Vec::with_capacity(raw_frames.len());
    for frame in &raw_frames {
        let buffer = frame.buffer();
        let (width, height) = buffer.dimensions();
        frames.push(ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            buffer.as_raw(),
        ));
        let (delay_ms, _) = frame.delay().numer_denom_ms();
        // Zero-delay frames would spin the player, use a sane floor.
        delays.push((delay_ms as u16).max(20));
    }
    Some((frames, delays))
}

/// Kick off a background decode of `index` unless it is already cached, in
/// flight, or known to fail. The UI thread polls the cache; a repaint is
/// requested once the decode lands. Failed indices stay recorded until the
/// caller clears the set, so a corrupt page is not re-decoded every frame.
pub fn load_page_async(
    index: usize,
    images: Arc<ImageSequence>,
    cache: SharedPageCache,
    pending: PageSet,
    failed: PageSet,
    ctx: Context,
) {
    if failed.lock().unwrap().contains(&index) {
        return;
    }
    {
        let mut pending_guard = pending.lock().unwrap();
        if pending_guard.contains(&index) {
            return;
        }
        pending_guard.insert(index);
    }
    if cache.lock().unwrap().contains(&index) {
        pending.lock().unwrap().remove(&index);
        return;
    }

    tokio::task::spawn_blocking(move || {
        if let Some(entry) = images.get(index) {
            debug!("decoding page {}: {}", index, entry.name());
            match decode_page(entry.name(), entry.bytes()) {
                Ok(image) => {
                    cache.lock().unwrap().put(index, LoadedPage { image, index });
                    debug!("cached page {index}");
                    ctx.request_repaint();
                }
                Err(e) => {
                    warn!("failed to decode page {index}: {e}");
                    failed.lock().unwrap().insert(index);
                }
            }
        }
        pending.lock().unwrap().remove(&index);
    });
}
