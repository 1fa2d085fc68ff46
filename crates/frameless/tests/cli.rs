use std::process::Command;

fn frameless(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_frameless"))
        .args(args)
        .output()
        .expect("failed to execute frameless")
}

#[test]
fn help_exits_successfully() {
    // Act
    let output = frameless(&["--help"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("title bar"));
    assert!(stdout.contains("--passthrough"));
}

#[test]
fn dos_help_switch_prints_help() {
    let output = frameless(&["/?"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--title"));
}

#[test]
fn version_exits_successfully() {
    let output = frameless(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("frameless"));
}

#[test]
fn drag_with_passthrough_exits_8_before_lookup() {
    // Arrange: a process name that cannot exist
    let args = [
        "-name", "no-such-process.exe", "-title", "x", "-drag", "-passthrough",
    ];

    // Act
    let output = frameless(&args);

    // Assert
    assert_eq!(output.status.code(), Some(8));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used together"));
    assert!(!stderr.contains("process not found"));
}

#[test]
fn missing_title_exits_2() {
    let output = frameless(&["--pid", "1234"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn empty_title_exits_2() {
    let output = frameless(&["--pid", "1234", "--title", ""]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn pid_and_name_together_exit_2() {
    let output = frameless(&["--pid", "1", "--name", "a.exe", "--title", "x"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn no_arguments_exit_2() {
    let output = frameless(&[]);

    assert_eq!(output.status.code(), Some(2));
}

#[cfg(not(windows))]
#[test]
fn valid_arguments_report_unsupported_platform() {
    let output = frameless(&["--pid", "1234", "--title", "temp"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only supported on Windows"));
}
