use frameless_core::drag::DragTarget;
use frameless_core::redraw::Presentation;
use frameless_core::style::{BorderColor, Decorations, WindowStyle, ZOrder};
use frameless_core::{Point, Rect, WindowResult};

use windows::Win32::Foundation::{COLORREF, HWND, POINT, RECT};
use windows::Win32::System::Threading::AttachThreadInput;
use windows::Win32::UI::Input::KeyboardAndMouse::{SetActiveWindow, SetFocus};
use windows::Win32::UI::WindowsAndMessaging::{
    GA_ROOT, GWL_EXSTYLE, GWL_STYLE, GetAncestor, GetForegroundWindow, GetParent,
    GetWindowLongPtrW, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, HWND_TOP, HWND_TOPMOST, IsIconic, IsWindow, IsWindowVisible,
    LWA_ALPHA, SW_MINIMIZE, SW_RESTORE, SW_SHOW, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SWP_NOZORDER, SetForegroundWindow, SetLayeredWindowAttributes,
    SetWindowLongPtrW, SetWindowPos, ShowWindow, WindowFromPoint,
};

use crate::error::OsResultExt;
use crate::frame;

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the
/// OS. The target window belongs to another process, so every query goes
/// back to the OS and tolerates the handle having gone stale.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Id of the thread that created the window, or 0 if it is gone.
    fn thread_id(&self) -> u32 {
        // SAFETY: a stale HWND makes the call return 0.
        unsafe { GetWindowThreadProcessId(self.hwnd, None) }
    }
}

impl frameless_core::Window for Window {
    fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    fn is_alive(&self) -> bool {
        // SAFETY: IsWindow accepts any handle value.
        unsafe { IsWindow(Some(self.hwnd)).as_bool() }
    }

    fn process_id(&self) -> u32 {
        let mut pid = 0u32;
        // SAFETY: `pid` outlives the call; a stale HWND leaves it at 0.
        unsafe { GetWindowThreadProcessId(self.hwnd, Some(&mut pid)) };
        pid
    }

    fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    fn has_parent(&self) -> bool {
        // SAFETY: GetParent fails (no parent or owner) rather than faulting.
        unsafe { GetParent(self.hwnd) }.is_ok_and(|parent| !parent.is_invalid())
    }

    fn title(&self) -> WindowResult<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with any HWND. They read window text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn rect(&self) -> WindowResult<Rect> {
        let mut rect = RECT::default();
        // SAFETY: `rect` outlives the call.
        unsafe { GetWindowRect(self.hwnd, &mut rect) }.os()?;

        Ok(Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom))
    }
}

impl Decorations for Window {
    fn style(&self) -> WindowStyle {
        // SAFETY: GetWindowLongPtrW only reads; a stale HWND yields 0.
        unsafe {
            WindowStyle::new(
                GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32,
                GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32,
            )
        }
    }

    fn set_style(&self, style: WindowStyle) {
        // The return value is the previous style, and 0 is a legitimate
        // previous value, so failures surface through the frame commit.
        unsafe {
            SetWindowLongPtrW(self.hwnd, GWL_STYLE, style.style as isize);
            SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, style.ex_style as isize);
        }
    }

    fn set_opaque_layer(&self) -> WindowResult<()> {
        // SAFETY: plain attribute write on a layered window.
        unsafe { SetLayeredWindowAttributes(self.hwnd, COLORREF(0), 255, LWA_ALPHA) }.os()
    }

    fn extend_client_area(&self) -> WindowResult<()> {
        frame::extend_client_area(self.hwnd)
    }

    fn set_border_color(&self, color: BorderColor) -> WindowResult<()> {
        frame::set_border_color(self.hwnd, color)
    }

    fn exclude_from_peek(&self) -> WindowResult<()> {
        frame::exclude_from_peek(self.hwnd)
    }

    fn commit_frame(&self, rect: Rect, z: ZOrder) -> WindowResult<()> {
        let (insert_after, flags) = match z {
            ZOrder::Unchanged => (None, SWP_NOACTIVATE | SWP_FRAMECHANGED | SWP_NOZORDER),
            ZOrder::Topmost => (Some(HWND_TOPMOST), SWP_NOACTIVATE | SWP_FRAMECHANGED),
        };

        // SAFETY: SetWindowPos with a stale HWND fails with
        // ERROR_INVALID_WINDOW_HANDLE instead of faulting.
        unsafe {
            SetWindowPos(
                self.hwnd,
                insert_after,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                flags,
            )
        }
        .os()
    }
}

impl Presentation for Window {
    fn is_minimized(&self) -> bool {
        // SAFETY: IsIconic is a simple query.
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    fn show(&self) {
        let command = if self.is_minimized() { SW_RESTORE } else { SW_SHOW };
        unsafe {
            let _ = ShowWindow(self.hwnd, command);
        }
    }

    fn minimize(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_MINIMIZE);
        }
    }

    fn restore(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_RESTORE);
        }
    }

    fn bring_forward(&self, topmost: bool, bridge_input: bool) {
        // Windows only lets the thread that owns the foreground window
        // hand the foreground away. Sharing its input queue for the
        // duration of the calls lifts that restriction.
        let bridge = if bridge_input {
            // SAFETY: GetForegroundWindow may return a null HWND, for which
            // GetWindowThreadProcessId returns 0.
            let foreground = unsafe { GetWindowThreadProcessId(GetForegroundWindow(), None) };
            let target = self.thread_id();
            (foreground != 0 && target != 0 && foreground != target)
                .then_some((target, foreground))
        } else {
            None
        };

        unsafe {
            if let Some((target, foreground)) = bridge {
                let _ = AttachThreadInput(target, foreground, true);
            }

            let insert_after = if topmost { HWND_TOPMOST } else { HWND_TOP };
            let _ = SetWindowPos(
                self.hwnd,
                Some(insert_after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE,
            );
            let _ = SetForegroundWindow(self.hwnd);
            let _ = SetActiveWindow(self.hwnd);
            let _ = SetFocus(Some(self.hwnd));

            if let Some((target, foreground)) = bridge {
                let _ = AttachThreadInput(target, foreground, false);
            }
        }

        frameless_core::log_debug!(
            "bring_forward 0x{:X} topmost={topmost} bridged={}",
            self.hwnd.0 as usize,
            bridge.is_some()
        );
    }
}

impl DragTarget for Window {
    fn hit_test(&self, point: Point) -> bool {
        // SAFETY: WindowFromPoint and GetAncestor are queries; a null HWND
        // from either simply fails the comparison.
        unsafe {
            let under = WindowFromPoint(POINT {
                x: point.x,
                y: point.y,
            });
            !under.is_invalid() && GetAncestor(under, GA_ROOT) == self.hwnd
        }
    }

    fn move_to(&self, origin: Point) -> WindowResult<()> {
        // SAFETY: see `commit_frame`.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                origin.x,
                origin.y,
                0,
                0,
                SWP_NOZORDER | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        }
        .os()
    }
}
