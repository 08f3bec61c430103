//! One open comic: navigation plus viewport state, kept in step.

use std::sync::Arc;

use comic_archive::ImageSequence;

use super::{PageNavigator, ViewportTransform};

/// Couples a [`PageNavigator`] with a [`ViewportTransform`] so that every
/// successful navigation resets the viewport and queues preloads for the
/// upcoming spread. Failed navigations leave both untouched.
///
/// The session does no IO itself. Queued preload indices accumulate in a
/// list the app drains with [`Self::take_preloads`] and feeds to the decode
/// workers.
pub struct ReaderSession {
    navigator: PageNavigator,
    transform: ViewportTransform,
    pending_preloads: Vec<usize>,
}

impl ReaderSession {
    pub fn new(images: Arc<ImageSequence>, spread_mode: bool) -> Self {
        let mut session = Self {
            navigator: PageNavigator::new(images, spread_mode),
            transform: ViewportTransform::new(),
            pending_preloads: Vec::new(),
        };
        session.after_navigation();
        session
    }

    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut ViewportTransform {
        &mut self.transform
    }

    pub fn images(&self) -> &Arc<ImageSequence> {
        self.navigator.images()
    }

    fn after_navigation(&mut self) {
        self.transform.reset();
        let targets = self.navigator.claim_preloads();
        self.pending_preloads.extend(targets);
    }

    fn finish(&mut self, moved: bool) -> bool {
        if moved {
            self.after_navigation();
        }
        moved
    }

    pub fn display(&mut self, index: usize) -> bool {
        let moved = self.navigator.display(index);
        self.finish(moved)
    }

    pub fn next(&mut self) -> bool {
        let moved = self.navigator.next();
        self.finish(moved)
    }

    pub fn prev(&mut self) -> bool {
        let moved = self.navigator.prev();
        self.finish(moved)
    }

    pub fn first(&mut self) -> bool {
        let moved = self.navigator.first();
        self.finish(moved)
    }

    pub fn last(&mut self) -> bool {
        let moved = self.navigator.last();
        self.finish(moved)
    }

    pub fn goto_page(&mut self, number: usize) -> bool {
        let moved = self.navigator.goto_page(number);
        self.finish(moved)
    }

    /// Flip spread mode and re-display the current index under the new
    /// pairing, with the usual reset-and-preload side effects.
    pub fn set_spread_mode(&mut self, enabled: bool) {
        self.navigator.set_spread_mode(enabled);
        self.after_navigation();
    }

    /// Drain the queued preload indices.
    pub fn take_preloads(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.pending_preloads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comic_archive::PageEntry;
    use eframe::egui::Vec2;

    fn session(n: usize, spread: bool) -> ReaderSession {
        ReaderSession::new(
            Arc::new(ImageSequence::new(
                (0..n)
                    .map(|i| PageEntry::new(format!("{i:02}.png"), Vec::new()))
                    .collect(),
            )),
            spread,
        )
    }

    #[test]
    fn opening_a_book_queues_the_first_preloads() {
        let mut s = session(6, true);
        assert_eq!(s.take_preloads(), vec![1, 2]);
        assert_eq!(s.take_preloads(), Vec::<usize>::new());
    }

    #[test]
    fn navigation_resets_the_viewport() {
        let mut s = session(6, false);
        s.transform_mut().set_scale(3.0);
        s.transform_mut().pan_by(Vec2::new(40.0, 40.0));
        assert!(s.next());
        assert_eq!(*s.transform(), ViewportTransform::new());
    }

    #[test]
    fn a_failed_navigation_leaves_the_viewport_alone() {
        let mut s = session(3, false);
        assert!(s.last());
        s.transform_mut().set_scale(2.0);
        assert!(!s.next());
        assert_eq!(s.transform().scale(), 2.0);
        assert!(!s.goto_page(99));
        assert_eq!(s.transform().scale(), 2.0);
    }

    #[test]
    fn each_navigation_queues_the_next_spread() {
        let mut s = session(8, true);
        s.take_preloads();
        assert!(s.next());
        assert_eq!(s.take_preloads(), vec![3, 4]);
        assert!(s.goto_page(4));
        // From (5,6) the upcoming position is the trailing page 7 alone.
        assert_eq!(s.take_preloads(), vec![7]);
    }

    #[test]
    fn toggling_spread_mode_resets_and_requeues() {
        let mut s = session(9, false);
        s.take_preloads();
        assert!(s.display(3));
        s.take_preloads();
        s.transform_mut().set_scale(5.0);

        s.set_spread_mode(true);
        assert_eq!(s.navigator().current_index(), 3);
        assert_eq!(s.transform().scale(), 1.0);
        // The upcoming spread under the new pairing.
        assert_eq!(s.take_preloads(), vec![5, 6]);
    }

    #[test]
    fn preloads_accumulate_until_taken() {
        let mut s = session(10, false);
        assert!(s.next());
        assert!(s.next());
        let queued = s.take_preloads();
        assert_eq!(queued, vec![1, 2, 3]);
    }
}
