use frameless_core::OsError;

/// Facility code that wraps a plain Win32 error in an `HRESULT`.
const FACILITY_WIN32: u32 = 0x8007_0000;

/// Converts a `windows` crate error into the platform-agnostic form.
///
/// `HRESULT_FROM_WIN32` values are unwrapped so the reported code matches
/// what `GetLastError` returned.
pub(crate) fn os_error(e: windows::core::Error) -> OsError {
    let hr = e.code().0 as u32;
    let code = if hr & 0xFFFF_0000 == FACILITY_WIN32 {
        (hr & 0xFFFF) as i32
    } else {
        hr as i32
    };
    OsError::new(code, e.message())
}

/// Captures the calling thread's last Win32 error.
pub(crate) fn last_os_error() -> OsError {
    let e = std::io::Error::last_os_error();
    OsError::new(e.raw_os_error().unwrap_or_default(), e.to_string())
}

/// Shorthand for `.map_err(os_error)` on Win32 results.
pub(crate) trait OsResultExt<T> {
    fn os(self) -> Result<T, OsError>;
}

impl<T> OsResultExt<T> for windows::core::Result<T> {
    fn os(self) -> Result<T, OsError> {
        self.map_err(os_error)
    }
}
