use crate::Error;

/// How the owning process is identified on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessSelector {
    /// A numeric process id.
    Id(u32),
    /// An executable file name, e.g. `MSIAfterburner.exe`.
    Name(String),
}

impl std::fmt::Display for ProcessSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(pid) => write!(f, "PID {pid}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Everything one run needs to know about its target window.
///
/// Built once from the command line and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub process: ProcessSelector,
    /// Case-insensitive substring of the window title. Never empty.
    pub title: String,
    pub passthrough: bool,
    pub topmost: bool,
    pub drag: bool,
}

impl TargetSpec {
    /// Validates and builds a target.
    ///
    /// An empty title is a usage error. Drag needs the window to receive
    /// clicks, so combining it with passthrough is rejected.
    pub fn new(
        process: ProcessSelector,
        title: impl Into<String>,
        passthrough: bool,
        topmost: bool,
        drag: bool,
    ) -> Result<Self, Error> {
        let title = title.into();
        if title.is_empty() {
            return Err(Error::Usage("--title must not be empty".into()));
        }
        if let ProcessSelector::Name(name) = &process
            && name.is_empty()
        {
            return Err(Error::Usage("--name must not be empty".into()));
        }
        if drag && passthrough {
            return Err(Error::FlagConflict);
        }

        Ok(Self {
            process,
            title,
            passthrough,
            topmost,
            drag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pid_with_title() {
        // Act
        let target = TargetSpec::new(ProcessSelector::Id(1234), "temp", false, true, false);

        // Assert
        let target = target.expect("valid target");
        assert_eq!(target.process, ProcessSelector::Id(1234));
        assert!(target.topmost);
    }

    #[test]
    fn empty_title_is_usage_error() {
        let err = TargetSpec::new(ProcessSelector::Id(1), "", false, false, false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_name_is_usage_error() {
        let err = TargetSpec::new(ProcessSelector::Name(String::new()), "x", false, false, false)
            .unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn drag_with_passthrough_is_rejected() {
        let err = TargetSpec::new(ProcessSelector::Id(1), "x", true, false, true).unwrap_err();
        assert!(matches!(err, Error::FlagConflict));
        assert_eq!(err.exit_code(), 8);
    }

    #[test]
    fn drag_with_topmost_is_allowed() {
        assert!(TargetSpec::new(ProcessSelector::Id(1), "x", false, true, true).is_ok());
    }

    #[test]
    fn selector_display() {
        assert_eq!(ProcessSelector::Id(42).to_string(), "PID 42");
        assert_eq!(
            ProcessSelector::Name("app.exe".into()).to_string(),
            "app.exe"
        );
    }
}
