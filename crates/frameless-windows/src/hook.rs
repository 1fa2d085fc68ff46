//! System-wide low-level mouse hook (`WH_MOUSE_LL`) feeding the drag loop.
//!
//! Windows invokes a low-level hook on the thread that installed it, from
//! inside that thread's message retrieval calls. The callback therefore
//! only queues events into thread-local storage; [`MouseHook::pump`]
//! retrieves messages and then hands the queued events to the drag
//! controller, all on one thread.

use std::cell::RefCell;

use frameless_core::drag::{PointerEvent, PointerSource, Pump};
use frameless_core::{Point, WindowResult, log_debug};
use windows::Win32::Foundation::{LPARAM, LRESULT, WAIT_FAILED, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, HC_ACTION, HHOOK, MSG, MSLLHOOKSTRUCT,
    MWMO_INPUTAVAILABLE, MsgWaitForMultipleObjectsEx, PM_REMOVE, PeekMessageW, PostQuitMessage,
    QS_ALLINPUT, SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, WH_MOUSE_LL,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_QUIT,
};

use crate::error::{OsResultExt, last_os_error};

thread_local! {
    /// Events captured by the hook callback, waiting for the next pump.
    static PENDING: RefCell<Vec<PointerEvent>> = const { RefCell::new(Vec::new()) };
}

/// An installed low-level mouse hook plus the calling thread's message
/// loop. Uninstalled on drop.
pub struct MouseHook {
    hook: HHOOK,
    wait_ms: u32,
}

impl MouseHook {
    /// Installs the hook on the calling thread. `wait_ms` bounds each idle
    /// wait in [`PointerSource::pump`].
    pub fn install(wait_ms: u32) -> WindowResult<Self> {
        // SAFETY: GetModuleHandleW(None) returns this executable's module,
        // which contains `mouse_hook_proc` for the lifetime of the process.
        let hook = unsafe {
            let instance = GetModuleHandleW(None).os()?;
            SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), Some(instance.into()), 0).os()?
        };

        PENDING.with_borrow_mut(Vec::clear);
        log_debug!("WH_MOUSE_LL installed (wait {wait_ms} ms)");

        Ok(Self { hook, wait_ms })
    }
}

impl PointerSource for MouseHook {
    fn pump(&mut self, sink: &mut dyn FnMut(PointerEvent)) -> WindowResult<Pump> {
        let mut msg = MSG::default();
        let mut quit = false;

        // SAFETY: standard message retrieval on the thread that owns the
        // hook; `msg` outlives every call.
        unsafe {
            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                if msg.message == WM_QUIT {
                    quit = true;
                    break;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }

        let events = PENDING.with_borrow_mut(std::mem::take);
        events.into_iter().for_each(|event| sink(event));

        if quit {
            return Ok(Pump::Quit);
        }

        // Sleep until input arrives or the interval elapses, so a closed
        // window is noticed even when the pointer never moves.
        // SAFETY: no handles are waited on, only the message queue.
        let wait = unsafe {
            MsgWaitForMultipleObjectsEx(None, self.wait_ms, QS_ALLINPUT, MWMO_INPUTAVAILABLE)
        };
        if wait == WAIT_FAILED {
            return Err(last_os_error());
        }

        Ok(Pump::Idle)
    }

    fn post_quit(&mut self) {
        // SAFETY: posts WM_QUIT to the calling thread's own queue.
        unsafe { PostQuitMessage(0) };
    }
}

impl Drop for MouseHook {
    fn drop(&mut self) {
        // SAFETY: the hook was installed by `install` and is removed once.
        unsafe {
            let _ = UnhookWindowsHookEx(self.hook);
        }
        PENDING.with_borrow_mut(Vec::clear);
        log_debug!("WH_MOUSE_LL removed");
    }
}

/// Maps a low-level mouse message to a pointer event.
fn classify(message: u32, point: Point) -> Option<PointerEvent> {
    match message {
        WM_LBUTTONDOWN => Some(PointerEvent::ButtonDown(point)),
        WM_LBUTTONUP => Some(PointerEvent::ButtonUp(point)),
        WM_MOUSEMOVE => Some(PointerEvent::Move(point)),
        _ => None,
    }
}

/// The hook callback. Never blocks and never swallows input: every event
/// continues down the hook chain.
unsafe extern "system" fn mouse_hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 && lparam.0 != 0 {
        // SAFETY: for HC_ACTION, lparam points to an MSLLHOOKSTRUCT that is
        // valid for the duration of the call.
        let info = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
        let point = Point::new(info.pt.x, info.pt.y);

        if let Some(event) = classify(wparam.0 as u32, point) {
            PENDING.with_borrow_mut(|pending| pending.push(event));
        }
    }

    // SAFETY: forwarding the unchanged arguments is always valid.
    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}
