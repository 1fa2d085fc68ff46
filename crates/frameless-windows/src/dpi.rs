use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

use frameless_core::log_debug;

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without this, Windows virtualizes the coordinates of windows on
/// scaled monitors, so the rectangle read before a style change and the
/// one written back in the frame commit would not be the same pixels.
///
/// Must be called once at process startup, before touching any window.
pub fn enable_dpi_awareness() {
    // SAFETY: SetProcessDpiAwarenessContext is safe to call once at startup.
    // If it fails (e.g. already set via manifest), the error is only logged.
    if let Err(e) = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) } {
        log_debug!("DPI awareness not changed: {e}");
    }
}
