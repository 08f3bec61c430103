//! Transient status messages for the bottom bar.

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn color(self) -> Color32 {
        match self {
            StatusLevel::Info => Color32::WHITE,
            StatusLevel::Warning => Color32::YELLOW,
            StatusLevel::Error => Color32::RED,
        }
    }
}

/// One-line status shown in the bottom bar. A message expires after
/// [`STATUS_TIMEOUT`] seconds unless the caller overrides the timeout, and
/// is mirrored to the log so it survives past the UI.
#[derive(Default)]
pub struct StatusLine {
    message: Option<(String, StatusLevel)>,
    shown_at: Option<Instant>,
    timeout_override: Option<u64>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, text: String, level: StatusLevel, timeout: Option<u64>) {
        self.message = Some((text, level));
        self.shown_at = Some(Instant::now());
        self.timeout_override = timeout;
    }

    pub fn info(&mut self, text: impl Into<String>, timeout: Option<u64>) {
        let text = text.into();
        info!("{text}");
        self.set(text, StatusLevel::Info, timeout);
    }

    pub fn warn(&mut self, text: impl Into<String>, timeout: Option<u64>) {
        let text = text.into();
        warn!("{text}");
        self.set(text, StatusLevel::Warning, timeout);
    }

    pub fn error(&mut self, text: impl Into<String>, timeout: Option<u64>) {
        let text = text.into();
        log::error!("{text}");
        self.set(text, StatusLevel::Error, timeout);
    }

    pub fn current(&self) -> Option<(&str, StatusLevel)> {
        self.message
            .as_ref()
            .map(|(text, level)| (text.as_str(), *level))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_override.unwrap_or(STATUS_TIMEOUT))
    }

    /// Time until the current message disappears, if one is showing.
    pub fn expires_in(&self) -> Option<Duration> {
        self.message.as_ref()?;
        let shown_at = self.shown_at?;
        Some(self.timeout().saturating_sub(shown_at.elapsed()))
    }

    pub fn clear_expired(&mut self) {
        if let Some(shown_at) = self.shown_at {
            if shown_at.elapsed() >= self.timeout() {
                self.message = None;
                self.shown_at = None;
                self.timeout_override = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_message_is_visible_and_unexpired() {
        let mut status = StatusLine::new();
        status.info("Loaded 12 pages", None);
        status.clear_expired();
        let (text, level) = status.current().unwrap();
        assert_eq!(text, "Loaded 12 pages");
        assert_eq!(level, StatusLevel::Info);
        assert!(status.expires_in().unwrap() <= Duration::from_secs(STATUS_TIMEOUT));
    }

    #[test]
    fn a_zero_timeout_expires_immediately() {
        let mut status = StatusLine::new();
        status.warn("gone in a frame", Some(0));
        status.clear_expired();
        assert!(status.current().is_none());
        assert!(status.expires_in().is_none());
    }

    #[test]
    fn the_newest_message_wins() {
        let mut status = StatusLine::new();
        status.info("first", None);
        status.error("second", None);
        let (text, level) = status.current().unwrap();
        assert_eq!(text, "second");
        assert_eq!(level, StatusLevel::Error);
    }

    #[test]
    fn levels_have_distinct_colors() {
        assert_ne!(StatusLevel::Info.color(), StatusLevel::Error.color());
        assert_ne!(StatusLevel::Warning.color(), StatusLevel::Error.color());
    }
}
