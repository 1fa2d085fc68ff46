use std::ffi::OsString;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};

use frameless_core::{Error, ProcessSelector, TargetSpec};

/// Long options that also accept a single leading dash (`-pid 42`).
const LONG_NAMES: &[&str] = &["pid", "name", "title", "passthrough", "topmost", "drag", "help"];

/// Long options that consume the next argument as their value.
const TAKES_VALUE: &[&str] = &["pid", "name", "title"];

/// The DOS-style help switch.
const DOS_HELP: &str = "/?";

#[derive(Parser, Debug)]
#[command(
    name = "frameless",
    version,
    about = "Strip the title bar and borders from another application's window",
    group(ArgGroup::new("process").required(true).args(["pid", "name"]))
)]
pub struct Cli {
    /// Id of the process that owns the window
    #[arg(long)]
    pub pid: Option<u32>,
    /// Executable name of the owning process, e.g. MSIAfterburner.exe
    #[arg(long, allow_hyphen_values = true, value_parser = NonEmptyStringValueParser::new())]
    pub name: Option<String>,
    /// Case-insensitive substring of the window title
    #[arg(long, allow_hyphen_values = true, value_parser = NonEmptyStringValueParser::new())]
    pub title: String,
    /// Let mouse input pass through to whatever is behind the window
    #[arg(long)]
    pub passthrough: bool,
    /// Keep the window above all non-topmost windows
    #[arg(long)]
    pub topmost: bool,
    /// Drag the window with the left button until it closes
    #[arg(long)]
    pub drag: bool,
}

impl Cli {
    /// Validates the parsed flags into a [`TargetSpec`].
    pub fn into_target(self) -> Result<TargetSpec, Error> {
        let process = match (self.pid, self.name) {
            (Some(pid), _) => ProcessSelector::Id(pid),
            (None, Some(name)) => ProcessSelector::Name(name),
            (None, None) => return Err(Error::Usage("one of --pid or --name is required".into())),
        };
        TargetSpec::new(process, self.title, self.passthrough, self.topmost, self.drag)
    }
}

/// Rewrites single-dash long options (`-title`) to their double-dash form,
/// and `/?` to `--help`.
///
/// Values of options that take one are left alone, so `--title -drag`
/// still searches for the literal text `-drag`.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut value_next = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || value_next {
            value_next = false;
            out.push(arg);
            continue;
        }

        let long = arg
            .to_str()
            .and_then(|s| {
                if s == DOS_HELP {
                    return Some("help");
                }
                s.strip_prefix("--").or_else(|| s.strip_prefix('-'))
            })
            .filter(|name| LONG_NAMES.contains(name));

        match long {
            Some(name) => {
                value_next = TAKES_VALUE.contains(&name);
                out.push(format!("--{name}").into());
            }
            None => out.push(arg),
        }
    }

    out
}
