use crate::config::DragConfig;
use crate::drag::{DragTarget, PointerSource};
use crate::redraw::Presentation;
use crate::style::Decorations;
use crate::WindowResult;

/// Everything the pipeline needs from the operating system.
///
/// Each platform crate (e.g. `frameless-windows`) provides its own
/// implementation.
pub trait Platform {
    /// An open, query-only process reference. Dropping it releases it.
    type Process;

    /// A top-level window handle.
    type Window: Decorations + Presentation + DragTarget;

    /// An installed low-level pointer hook. Dropping it uninstalls it.
    type Pointer: PointerSource;

    /// Returns the id of the first running process whose executable name
    /// equals `name` (case-insensitive).
    fn find_process(&self, name: &str) -> Option<u32>;

    /// Opens `pid` with query-only access.
    fn open_process(&self, pid: u32) -> WindowResult<Self::Process>;

    /// Returns every top-level window on the desktop in Z-order.
    ///
    /// Only handles are collected; window properties are read later, on
    /// demand.
    fn top_level_windows(&self) -> WindowResult<Vec<Self::Window>>;

    /// Installs the system-wide pointer hook on the calling thread.
    fn install_pointer_hook(&self, config: &DragConfig) -> WindowResult<Self::Pointer>;
}
