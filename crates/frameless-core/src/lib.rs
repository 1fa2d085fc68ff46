pub mod cmdline;
pub mod config;
pub mod drag;
pub mod error;
pub mod log;
pub mod pipeline;
pub mod platform;
pub mod rect;
pub mod redraw;
pub mod resolve;
pub mod style;
pub mod target;
pub mod window;

#[cfg(test)]
mod fake;

pub use error::Error;
pub use platform::Platform;
pub use rect::{Point, Rect};
pub use target::{ProcessSelector, TargetSpec};
pub use window::{OsError, Window, WindowResult};
