use frameless_core::config::Config;
use frameless_core::{Error, TargetSpec, log_error};

/// Reports a terminal failure and returns its exit code.
pub fn report(e: &Error) -> i32 {
    eprintln!("Error: {e}");
    log_error!("{e}");
    e.exit_code()
}

/// Runs one transformation on the live desktop. Returns the exit code.
///
/// Without an elevated token the tool relaunches itself through the UAC
/// prompt and exits; the elevated copy does the work.
#[cfg(windows)]
pub fn execute(target: &TargetSpec, config: &Config) -> i32 {
    use frameless_core::error::EXIT_SUCCESS;
    use frameless_core::{log_info, pipeline};
    use frameless_windows::{Desktop, dpi, elevation};

    if !elevation::is_elevated() {
        return match elevation::relaunch_elevated() {
            Ok(()) => {
                println!("Relaunched elevated");
                EXIT_SUCCESS
            }
            Err(e) => report(&Error::Elevation(e)),
        };
    }

    dpi::enable_dpi_awareness();

    match pipeline::run(&Desktop, target, config) {
        Ok(outcome) => {
            log_info!("Done: {outcome:?}");
            EXIT_SUCCESS
        }
        Err(e) => report(&e),
    }
}

/// Other platforms have no window manager backend; arguments are still
/// validated so usage errors report the same exit codes everywhere.
#[cfg(not(windows))]
pub fn execute(_target: &TargetSpec, _config: &Config) -> i32 {
    eprintln!("Error: frameless is only supported on Windows");
    1
}
