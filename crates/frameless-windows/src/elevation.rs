//! Administrator elevation.
//!
//! Some target applications run elevated themselves, and a medium
//! integrity process cannot restyle their windows. The tool therefore
//! always does its work from an elevated token, relaunching itself through
//! the UAC consent prompt when needed.

use std::ffi::c_void;
use std::mem;
use std::os::windows::ffi::OsStrExt;

use frameless_core::cmdline::join_args;
use frameless_core::{OsError, WindowResult, log_info};
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::Security::{GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::{PCWSTR, w};

/// Returns whether the current process token is elevated.
///
/// Any failure to query the token reads as "not elevated".
pub fn is_elevated() -> bool {
    let mut token = HANDLE::default();
    // SAFETY: the pseudo handle from GetCurrentProcess needs no closing;
    // `token` is closed below once opened.
    if unsafe { OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token) }.is_err() {
        return false;
    }

    let mut elevation = TOKEN_ELEVATION::default();
    let mut size = 0u32;
    // SAFETY: the buffer is a TOKEN_ELEVATION and its exact size is passed.
    let queried = unsafe {
        GetTokenInformation(
            token,
            TokenElevation,
            Some(&mut elevation as *mut TOKEN_ELEVATION as *mut c_void),
            mem::size_of::<TOKEN_ELEVATION>() as u32,
            &mut size,
        )
    };

    unsafe {
        let _ = CloseHandle(token);
    }

    queried.is_ok() && elevation.TokenIsElevated != 0
}

/// Relaunches the current executable elevated with the same arguments.
///
/// Returns once the elevated copy has been started; the caller exits
/// without touching any window.
pub fn relaunch_elevated() -> WindowResult<()> {
    let exe = std::env::current_exe().map_err(|e| {
        OsError::new(e.raw_os_error().unwrap_or_default(), e.to_string())
    })?;
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let params = join_args(&args);

    log_info!("Relaunching elevated: {} {params}", exe.display());

    let exe_wide: Vec<u16> = exe.as_os_str().encode_wide().chain(Some(0)).collect();
    let params_wide: Vec<u16> = params.encode_utf16().chain(Some(0)).collect();
    let params_ptr = if params.is_empty() {
        PCWSTR::null()
    } else {
        PCWSTR(params_wide.as_ptr())
    };

    // SAFETY: both wide strings are nul-terminated and outlive the call.
    let instance = unsafe {
        ShellExecuteW(
            None,
            w!("runas"),
            PCWSTR(exe_wide.as_ptr()),
            params_ptr,
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    // ShellExecuteW reports failure as a value of 32 or less, which is
    // an SE_ERR_* code (e.g. 5 when the user declines the prompt).
    let code = instance.0 as isize;
    if code <= 32 {
        return Err(OsError::new(
            code as i32,
            format!("ShellExecuteW runas failed with code {code}"),
        ));
    }

    Ok(())
}
