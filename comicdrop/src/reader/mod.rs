//! Page navigation and viewport state, independent of any rendering backend.

pub mod navigator;
pub mod session;
pub mod transform;
pub mod wheel;

pub use navigator::{PageInfo, PageNavigator, Spread};
pub use session::ReaderSession;
pub use transform::{MAX_SCALE, MIN_SCALE, ViewportTransform};
pub use wheel::WheelBuffer;
