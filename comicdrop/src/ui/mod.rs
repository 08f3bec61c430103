//! Panels, widgets, and page rendering.

pub mod display;
pub mod image;
pub mod modules;
pub mod status;

pub use status::{StatusLevel, StatusLine};
