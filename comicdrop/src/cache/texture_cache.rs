//! GPU textures for the pages currently on screen.

use crate::prelude::*;

/// Uploaded textures, keyed by raw page index. A texture is sized from the
/// decoded image and scaled at draw time, so one upload serves every zoom
/// level. Navigation clears the cache; at most one spread's worth of
/// textures is alive at a time.
#[derive(Default)]
pub struct TextureCache {
    pages: HashMap<usize, TextureHandle>,
    frames: HashMap<(usize, usize), TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self, index: usize) -> Option<TextureHandle> {
        self.pages.get(&index).cloned()
    }

    pub fn set_page(&mut self, index: usize, texture: TextureHandle) {
        debug!("uploaded texture for page {index}");
        self.pages.insert(index, texture);
    }

    pub fn frame(&self, index: usize, frame: usize) -> Option<TextureHandle> {
        self.frames.get(&(index, frame)).cloned()
    }

    pub fn set_frame(&mut self, index: usize, frame: usize, texture: TextureHandle) {
        debug!("uploaded texture for page {index} frame {frame}");
        self.frames.insert((index, frame), texture);
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            debug!(
                "clearing {} page and {} frame textures",
                self.pages.len(),
                self.frames.len()
            );
        }
        self.pages.clear();
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(ctx: &Context, name: &str) -> TextureHandle {
        ctx.load_texture(
            name.to_string(),
            ColorImage::new([2, 2], Color32::BLACK),
            Default::default(),
        )
    }

    #[test]
    fn pages_and_frames_are_keyed_independently() {
        let ctx = Context::default();
        let mut cache = TextureCache::new();
        cache.set_page(3, texture(&ctx, "page3"));
        cache.set_frame(3, 1, texture(&ctx, "page3f1"));

        assert!(cache.page(3).is_some());
        assert!(cache.page(1).is_none());
        assert!(cache.frame(3, 1).is_some());
        assert!(cache.frame(3, 0).is_none());
    }

    #[test]
    fn clear_drops_everything() {
        let ctx = Context::default();
        let mut cache = TextureCache::new();
        cache.set_page(0, texture(&ctx, "page0"));
        cache.set_frame(0, 2, texture(&ctx, "page0f2"));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.page(0).is_none());
    }
}
