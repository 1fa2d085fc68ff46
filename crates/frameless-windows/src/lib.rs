//! Win32 implementation of the frameless platform traits.
//!
//! Everything here is Windows-only; on other targets the crate is empty.
#![cfg(windows)]

/// The [`frameless_core::Platform`] implementation.
pub mod desktop;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Administrator check and elevated relaunch.
pub mod elevation;

/// Win32 window enumeration.
pub mod enumerate;

mod error;

/// DWM attributes for the non-client area.
pub mod frame;

/// Low-level mouse hook and drag message loop.
pub mod hook;

/// Process lookup and query handles.
pub mod process;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use desktop::Desktop;
pub use enumerate::enumerate_windows;
pub use window::Window;
