/// Joins arguments into one command-line string for a relaunch.
///
/// Each argument containing a space or tab is wrapped in double quotes so
/// it survives re-parsing as a single argument, e.g. a title substring
/// like `hardware monitor`.
pub fn join_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| quote(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    if arg.contains([' ', '\t']) {
        format!("\"{arg}\"")
    } else {
        arg.to_string()
    }
}
