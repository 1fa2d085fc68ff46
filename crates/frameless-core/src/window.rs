use crate::Rect;

/// A failed call into the window manager.
///
/// `code` is the Win32 error code when the failure wraps one
/// (the value `GetLastError` would report), otherwise the raw HRESULT.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (os error {code})")]
pub struct OsError {
    pub code: i32,
    pub message: String,
}

impl OsError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result type for window manager operations.
pub type WindowResult<T> = Result<T, OsError>;

/// Platform-agnostic view of a top-level window owned by another process.
///
/// A window is a weak reference: the owning application can close it at
/// any moment. Implementations must answer every query without assuming
/// the handle is still valid, and callers recheck [`Window::is_alive`]
/// after anything that yields to the window manager.
pub trait Window {
    /// Returns the raw handle value, for display and logging.
    fn handle(&self) -> usize;

    /// Returns whether the window still exists.
    fn is_alive(&self) -> bool;

    /// Returns the id of the process that owns the window.
    fn process_id(&self) -> u32;

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;

    /// Returns whether the window has a parent (or owner) window.
    fn has_parent(&self) -> bool;

    /// Returns the window title.
    fn title(&self) -> WindowResult<String>;

    /// Returns the window rectangle in screen coordinates, frame included.
    fn rect(&self) -> WindowResult<Rect>;
}
