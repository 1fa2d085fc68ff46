use frameless_core::config::DragConfig;
use frameless_core::{Platform, WindowResult};

use crate::enumerate::enumerate_windows;
use crate::hook::MouseHook;
use crate::process::{self, ProcessHandle};
use crate::window::Window;

/// The live Windows desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct Desktop;

impl Platform for Desktop {
    type Process = ProcessHandle;
    type Window = Window;
    type Pointer = MouseHook;

    fn find_process(&self, name: &str) -> Option<u32> {
        process::find_pid_by_name(name)
    }

    fn open_process(&self, pid: u32) -> WindowResult<ProcessHandle> {
        ProcessHandle::open(pid)
    }

    fn top_level_windows(&self) -> WindowResult<Vec<Window>> {
        enumerate_windows()
    }

    fn install_pointer_hook(&self, config: &DragConfig) -> WindowResult<MouseHook> {
        MouseHook::install(config.wait_ms)
    }
}
