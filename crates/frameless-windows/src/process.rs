use std::mem;

use frameless_core::{WindowResult, log_debug};
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
    TH32CS_SNAPPROCESS,
};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION};

use crate::error::OsResultExt;

/// An open, query-only process handle. Closed on drop.
#[derive(Debug)]
pub struct ProcessHandle {
    pid: u32,
    handle: HANDLE,
}

impl ProcessHandle {
    /// Opens `pid` with `PROCESS_QUERY_LIMITED_INFORMATION`, the
    /// least-privilege access right that still confirms the process exists
    /// and is reachable from this token.
    pub fn open(pid: u32) -> WindowResult<Self> {
        // SAFETY: OpenProcess attempts to open an existing process.
        let handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) }.os()?;
        Ok(Self { pid, handle })
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: the handle came from OpenProcess and is closed exactly once.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
        log_debug!("Released process {}", self.pid);
    }
}

/// Returns the PID of the first running process whose executable file
/// name equals `name`, ignoring case.
///
/// Walks a Toolhelp snapshot. Any snapshot failure reads as "not found".
pub fn find_pid_by_name(name: &str) -> Option<u32> {
    // SAFETY: the snapshot handle is closed below on every path.
    let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }.ok()?;

    let mut entry = PROCESSENTRY32W {
        dwSize: mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };

    let mut found = None;
    // SAFETY: `entry` is initialized with its size, as Toolhelp requires.
    let mut more = unsafe { Process32FirstW(snapshot, &mut entry) }.is_ok();
    while more {
        if exe_name_matches(&entry.szExeFile, name) {
            found = Some(entry.th32ProcessID);
            break;
        }
        more = unsafe { Process32NextW(snapshot, &mut entry) }.is_ok();
    }

    unsafe {
        let _ = CloseHandle(snapshot);
    }
    found
}

/// Compares a nul-terminated UTF-16 executable name with `name`.
fn exe_name_matches(exe_file: &[u16], name: &str) -> bool {
    let len = exe_file.iter().position(|&c| c == 0).unwrap_or(exe_file.len());
    let exe = String::from_utf16_lossy(&exe_file[..len]);
    exe.to_lowercase() == name.to_lowercase()
}
