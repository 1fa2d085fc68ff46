//! Decoration removal.
//!
//! Two layers: [`WindowStyle::borderless`] is the pure bit arithmetic, and
//! [`strip_decorations`] drives the ordered sequence of window manager and
//! compositor calls through the [`Decorations`] trait.

use crate::{Rect, Window, WindowResult, log_debug, log_warn};

/// Win32 window style bits (`GWL_STYLE`).
pub mod ws {
    pub const POPUP: u32 = 0x8000_0000;
    pub const MINIMIZE: u32 = 0x2000_0000;
    pub const MAXIMIZE: u32 = 0x0100_0000;
    /// `WS_BORDER | WS_DLGFRAME`.
    pub const CAPTION: u32 = 0x00C0_0000;
    pub const SYSMENU: u32 = 0x0008_0000;
    pub const THICKFRAME: u32 = 0x0004_0000;
    pub const MINIMIZEBOX: u32 = 0x0002_0000;
    pub const MAXIMIZEBOX: u32 = 0x0001_0000;
}

/// Win32 extended window style bits (`GWL_EXSTYLE`).
pub mod ws_ex {
    pub const DLGMODALFRAME: u32 = 0x0000_0001;
    pub const TOPMOST: u32 = 0x0000_0008;
    pub const TRANSPARENT: u32 = 0x0000_0020;
    pub const TOOLWINDOW: u32 = 0x0000_0080;
    pub const WINDOWEDGE: u32 = 0x0000_0100;
    pub const CLIENTEDGE: u32 = 0x0000_0200;
    pub const STATICEDGE: u32 = 0x0002_0000;
    pub const APPWINDOW: u32 = 0x0004_0000;
    pub const LAYERED: u32 = 0x0008_0000;
    pub const COMPOSITED: u32 = 0x0200_0000;
}

const FRAME_BITS: u32 = ws::CAPTION
    | ws::THICKFRAME
    | ws::SYSMENU
    | ws::MINIMIZEBOX
    | ws::MAXIMIZEBOX
    | ws::MINIMIZE
    | ws::MAXIMIZE;

const EDGE_BITS: u32 = ws_ex::WINDOWEDGE
    | ws_ex::CLIENTEDGE
    | ws_ex::DLGMODALFRAME
    | ws_ex::STATICEDGE
    | ws_ex::APPWINDOW;

const PASSTHROUGH_BITS: u32 = ws_ex::TRANSPARENT | ws_ex::LAYERED | ws_ex::COMPOSITED;

/// Requested visual modes for the transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleOptions {
    /// Click-through: input falls to whatever is beneath the window.
    pub passthrough: bool,
    /// Keep the window in the always-on-top band.
    pub topmost: bool,
}

/// Where the window goes in the Z-order when the frame is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrder {
    /// Leave the Z-order untouched.
    Unchanged,
    /// Insert above every non-topmost window.
    Topmost,
}

/// The compositor-drawn accent border around a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderColor {
    /// No border at all (`DWMWA_COLOR_NONE`).
    None,
    /// A solid `0x00BBGGRR` color.
    Solid(u32),
}

/// A window's style and extended style bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowStyle {
    pub style: u32,
    pub ex_style: u32,
}

impl WindowStyle {
    pub fn new(style: u32, ex_style: u32) -> Self {
        Self { style, ex_style }
    }

    /// Returns the bits of a decoration-free popup.
    ///
    /// Clears caption, frame, system menu and min/max bits, clears the
    /// edge extended bits, and marks the window as a tool window so it
    /// drops out of the taskbar and Alt+Tab. Bits unrelated to decoration
    /// are kept. Applying the result to itself changes nothing.
    pub fn borderless(self, options: StyleOptions) -> Self {
        let style = (self.style & !FRAME_BITS) | ws::POPUP;
        let mut ex_style = (self.ex_style & !EDGE_BITS) | ws_ex::TOOLWINDOW;

        if options.passthrough {
            ex_style |= PASSTHROUGH_BITS;
        }
        if options.topmost {
            ex_style |= ws_ex::TOPMOST;
        }

        Self { style, ex_style }
    }

    pub fn is_layered(&self) -> bool {
        self.ex_style & ws_ex::LAYERED != 0
    }

    pub fn is_passthrough(&self) -> bool {
        self.ex_style & PASSTHROUGH_BITS == PASSTHROUGH_BITS
    }

    pub fn is_topmost(&self) -> bool {
        self.ex_style & ws_ex::TOPMOST != 0
    }

    pub fn has_frame(&self) -> bool {
        self.style & (ws::CAPTION | ws::THICKFRAME | ws::SYSMENU) != 0
    }
}

/// Window manager and compositor operations needed to strip decorations.
pub trait Decorations: Window {
    /// Reads the current style bits.
    fn style(&self) -> WindowStyle;

    /// Writes style bits. Takes effect on the next frame commit.
    fn set_style(&self, style: WindowStyle);

    /// Gives a freshly layered window a fully opaque layer.
    fn set_opaque_layer(&self) -> WindowResult<()>;

    /// Disables compositor non-client rendering and extends the client
    /// area over the whole frame.
    fn extend_client_area(&self) -> WindowResult<()>;

    /// Sets the compositor accent border color.
    fn set_border_color(&self, color: BorderColor) -> WindowResult<()>;

    /// Opts the window out of live preview (peek).
    fn exclude_from_peek(&self) -> WindowResult<()>;

    /// Re-applies `rect` and forces the window manager to recompute the
    /// non-client area (`SWP_FRAMECHANGED`), placing the window per `z`.
    fn commit_frame(&self, rect: Rect, z: ZOrder) -> WindowResult<()>;
}

/// Removes the window's native decorations, preserving its rectangle.
///
/// Compositor attribute failures are logged and tolerated: those calls
/// only refine the result. A failed frame commit is returned; style bits
/// written before it stay written.
pub fn strip_decorations<D: Decorations>(window: &D, options: StyleOptions) -> WindowResult<()> {
    let rect = window.rect()?;
    let before = window.style();
    let after = before.borderless(options);

    log_debug!(
        "strip 0x{:X}: style 0x{:08X}->0x{:08X} ex 0x{:08X}->0x{:08X} rect({},{} {}x{})",
        window.handle(),
        before.style,
        after.style,
        before.ex_style,
        after.ex_style,
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );

    if let Err(e) = window.extend_client_area() {
        log_warn!("extend_client_area 0x{:X}: {e}", window.handle());
    }

    // Older compositors reject the "no border" sentinel but take a color.
    if window.set_border_color(BorderColor::None).is_err()
        && let Err(e) = window.set_border_color(BorderColor::Solid(0))
    {
        log_warn!("set_border_color 0x{:X}: {e}", window.handle());
    }

    if let Err(e) = window.exclude_from_peek() {
        log_warn!("exclude_from_peek 0x{:X}: {e}", window.handle());
    }

    window.set_style(after);

    if options.passthrough
        && !before.is_layered()
        && let Err(e) = window.set_opaque_layer()
    {
        log_warn!("set_opaque_layer 0x{:X}: {e}", window.handle());
    }

    let z = if options.topmost {
        ZOrder::Topmost
    } else {
        ZOrder::Unchanged
    };
    window.commit_frame(rect, z)
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
