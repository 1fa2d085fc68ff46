//! Desktop Window Manager (DWM) attributes that control how the
//! compositor draws a window's non-client area.

use std::ffi::c_void;
use std::mem;

use frameless_core::WindowResult;
use frameless_core::style::BorderColor;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{
    DWMNCRP_DISABLED, DWMWA_BORDER_COLOR, DWMWA_DISALLOW_PEEK, DWMWA_EXCLUDED_FROM_PEEK,
    DWMWA_NCRENDERING_POLICY, DWMWINDOWATTRIBUTE, DwmExtendFrameIntoClientArea,
    DwmSetWindowAttribute,
};
use windows::Win32::UI::Controls::MARGINS;
use windows::core::BOOL;

use crate::error::OsResultExt;

/// `DWMWA_COLOR_NONE`: suppresses the accent border entirely.
///
/// Only understood by Windows 11; earlier builds reject it.
const DWMWA_COLOR_NONE: u32 = 0xFFFF_FFFE;

/// Writes one fixed-size DWM attribute.
fn set_attribute<T>(hwnd: HWND, attribute: DWMWINDOWATTRIBUTE, value: &T) -> WindowResult<()> {
    // SAFETY: `value` is a live reference and the size passed matches its
    // type, which is what DwmSetWindowAttribute expects for `attribute`.
    unsafe {
        DwmSetWindowAttribute(
            hwnd,
            attribute,
            value as *const T as *const c_void,
            mem::size_of::<T>() as u32,
        )
    }
    .os()
}

/// Turns off compositor-drawn non-client rendering and collapses the
/// frame into the client area (all margins zero).
pub fn extend_client_area(hwnd: HWND) -> WindowResult<()> {
    let policy = set_attribute(hwnd, DWMWA_NCRENDERING_POLICY, &DWMNCRP_DISABLED);

    let margins = MARGINS::default();
    // SAFETY: `margins` outlives the call.
    let extend = unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins) }.os();

    policy.and(extend)
}

pub fn set_border_color(hwnd: HWND, color: BorderColor) -> WindowResult<()> {
    let value = match color {
        BorderColor::None => DWMWA_COLOR_NONE,
        BorderColor::Solid(rgb) => rgb,
    };
    set_attribute(hwnd, DWMWA_BORDER_COLOR, &value)
}

/// Hides the window from Aero Peek and taskbar live previews.
pub fn exclude_from_peek(hwnd: HWND) -> WindowResult<()> {
    let on = BOOL(1);
    set_attribute(hwnd, DWMWA_DISALLOW_PEEK, &on)?;
    set_attribute(hwnd, DWMWA_EXCLUDED_FROM_PEEK, &on)
}
