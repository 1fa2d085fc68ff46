use crate::window::OsError;

/// Exit status reported when the tool finished its work.
pub const EXIT_SUCCESS: i32 = 0;

/// A terminal failure of one run.
///
/// Every variant maps to a distinct process exit code so scripts that
/// launch the tool (e.g. at logon) can tell the stages apart.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("--drag and --passthrough cannot be used together")]
    FlagConflict,

    #[error("failed to relaunch elevated: {0}")]
    Elevation(OsError),

    #[error("process not found: {name}")]
    ProcessNotFound { name: String },

    #[error("failed to open process {pid}: {source}")]
    ProcessOpen {
        pid: u32,
        #[source]
        source: OsError,
    },

    #[error("window not found: PID: {pid} Title: \"{title}\"")]
    WindowNotFound { pid: u32, title: String },

    #[error("failed to update window styles: {0}")]
    StyleApply(#[source] OsError),

    #[error("failed to enable drag hook: {0}")]
    HookInstall(#[source] OsError),
}

impl Error {
    /// The process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Elevation(_) => 1,
            Self::Usage(_) => 2,
            Self::ProcessNotFound { .. } => 3,
            Self::ProcessOpen { .. } => 4,
            Self::WindowNotFound { .. } => 5,
            Self::StyleApply(_) => 6,
            Self::HookInstall(_) => 7,
            Self::FlagConflict => 8,
        }
    }
}
