//! Page ordering, spread pairing, and the logical numbering shown in the UI.
//!
//! Index 0 is the cover and always stands alone. In spread mode the remaining
//! pages pair up as (1,2), (3,4), ..., so every spread after the cover starts
//! on an odd index. A trailing page without a partner is shown alone. The
//! "logical" page number counts spread positions, which is what the page
//! counter and the jump box speak in.

use std::collections::HashSet;
use std::sync::Arc;

use comic_archive::ImageSequence;
use log::warn;

/// The set of page indices shown together on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spread {
    pub primary: usize,
    pub secondary: Option<usize>,
}

impl Spread {
    pub fn indices(self) -> impl Iterator<Item = usize> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

/// Snapshot of the navigator for UI chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based logical page number.
    pub current: usize,
    /// Logical page count. In spread mode this counts spread positions,
    /// not raw pages.
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

pub struct PageNavigator {
    images: Arc<ImageSequence>,
    current: usize,
    spread_mode: bool,
    preloaded: HashSet<usize>,
}

impl PageNavigator {
    pub fn new(images: Arc<ImageSequence>, spread_mode: bool) -> Self {
        Self {
            images,
            current: 0,
            spread_mode,
            preloaded: HashSet::new(),
        }
    }

    pub fn images(&self) -> &Arc<ImageSequence> {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn spread_mode(&self) -> bool {
        self.spread_mode
    }

    /// The spread that would be shown for `index` under the current mode.
    pub fn spread_at(&self, index: usize) -> Spread {
        let secondary = (self.spread_mode && index != 0 && index + 1 < self.len())
            .then(|| index + 1);
        Spread {
            primary: index,
            secondary,
        }
    }

    pub fn current_spread(&self) -> Spread {
        self.spread_at(self.current)
    }

    /// Jump straight to a raw page index. Returns whether the move happened;
    /// re-displaying the current index counts as a move.
    pub fn display(&mut self, index: usize) -> bool {
        if index >= self.len() {
            warn!("page index {} out of range (0..{})", index, self.len());
            return false;
        }
        self.current = index;
        true
    }

    fn next_index(&self) -> Option<usize> {
        let len = self.len();
        if !self.spread_mode {
            let next = self.current + 1;
            return (next < len).then_some(next);
        }
        if self.current == 0 {
            return (len > 1).then_some(1);
        }
        if self.current + 2 < len {
            Some(self.current + 2)
        } else if self.current + 1 < len {
            // Trailing page without a partner is shown alone.
            Some(self.current + 1)
        } else {
            None
        }
    }

    fn prev_index(&self) -> Option<usize> {
        if self.current == 0 {
            return None;
        }
        if !self.spread_mode || self.current == 1 {
            Some(self.current - 1)
        } else {
            Some(self.current - 2)
        }
    }

    pub fn next(&mut self) -> bool {
        match self.next_index() {
            Some(index) => self.display(index),
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        match self.prev_index() {
            Some(index) => self.display(index),
            None => false,
        }
    }

    pub fn first(&mut self) -> bool {
        !self.is_empty() && self.display(0)
    }

    pub fn last(&mut self) -> bool {
        let len = self.len();
        len > 0 && self.display(len - 1)
    }

    /// Jump to a 1-based logical page number. Out-of-range numbers are a
    /// no-op and return false.
    pub fn goto_page(&mut self, number: usize) -> bool {
        let index = if self.spread_mode {
            match number {
                0 => return false,
                1 => 0,
                n => 1 + (n - 2) * 2,
            }
        } else {
            match number.checked_sub(1) {
                Some(index) => index,
                None => return false,
            }
        };
        index < self.len() && self.display(index)
    }

    /// Flip spread mode. The current index is kept as-is, so the page the
    /// user was on stays on screen even if it is now mid-spread.
    pub fn set_spread_mode(&mut self, enabled: bool) {
        self.spread_mode = enabled;
    }

    pub fn page_info(&self) -> PageInfo {
        let len = self.len();
        if len == 0 {
            return PageInfo {
                current: 0,
                total: 0,
                has_next: false,
                has_prev: false,
            };
        }
        let (current, total) = if self.spread_mode {
            let current = if self.current == 0 {
                1
            } else {
                (self.current - 1) / 2 + 2
            };
            let total = if len > 1 { (len - 1).div_ceil(2) + 1 } else { 1 };
            (current, total)
        } else {
            (self.current + 1, len)
        };
        PageInfo {
            current,
            total,
            has_next: self.next_index().is_some(),
            has_prev: self.prev_index().is_some(),
        }
    }

    /// Indices of the upcoming spread that have not been claimed for
    /// preloading yet. Each index is handed out once per navigator.
    pub fn claim_preloads(&mut self) -> Vec<usize> {
        let mut targets = Vec::new();
        if let Some(start) = self.next_index() {
            let spread = self.spread_at(start);
            for index in spread.indices() {
                if self.preloaded.insert(index) {
                    targets.push(index);
                }
            }
        }
        targets
    }
}
