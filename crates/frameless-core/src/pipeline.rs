//! One run of the tool: process → window → styles → redraw → drag.
//!
//! Every stage is a hard precondition for the next. Resources are owned
//! values, so every early return releases what was acquired so far.

use crate::config::{Config, DragConfig};
use crate::drag::DragController;
use crate::platform::Platform;
use crate::redraw::{self, RedrawOutcome};
use crate::resolve;
use crate::style::{self, StyleOptions};
use crate::target::{ProcessSelector, TargetSpec};
use crate::{Error, Window, log_error, log_info};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub pid: u32,
    /// Raw handle of the transformed window.
    pub window: usize,
    pub redraw: RedrawOutcome,
    /// Number of drag repositions, when drag mode ran.
    pub drag_moves: Option<u64>,
}

/// Runs the whole pipeline against `platform`.
pub fn run<P: Platform>(platform: &P, target: &TargetSpec, config: &Config) -> Result<Outcome, Error> {
    let pid = resolve_pid(platform, &target.process)?;

    let process = platform
        .open_process(pid)
        .map_err(|source| Error::ProcessOpen { pid, source })?;
    println!("Opened process: PID: {pid}");
    log_info!("Opened process {pid} ({})", target.process);

    let window = find_target(platform, pid, &target.title)?;
    println!("Found window: 0x{:X}", window.handle());
    log_info!("Found window 0x{:X} for \"{}\"", window.handle(), target.title);

    let options = StyleOptions {
        passthrough: target.passthrough,
        topmost: target.topmost,
    };
    style::strip_decorations(&window, options).map_err(Error::StyleApply)?;
    log_info!("Styles applied (passthrough={}, topmost={})", target.passthrough, target.topmost);

    let redraw = redraw::force_redraw(&window, target.topmost, &config.redraw);

    drop(process);

    let handle = window.handle();
    let drag_moves = if target.drag {
        Some(drag(platform, window, &config.drag)?)
    } else {
        None
    };

    Ok(Outcome {
        pid,
        window: handle,
        redraw,
        drag_moves,
    })
}

fn resolve_pid<P: Platform>(platform: &P, selector: &ProcessSelector) -> Result<u32, Error> {
    match selector {
        ProcessSelector::Id(pid) => Ok(*pid),
        ProcessSelector::Name(name) => {
            platform
                .find_process(name)
                .ok_or_else(|| Error::ProcessNotFound { name: name.clone() })
        }
    }
}

fn find_target<P: Platform>(platform: &P, pid: u32, title: &str) -> Result<P::Window, Error> {
    let not_found = || Error::WindowNotFound {
        pid,
        title: title.to_string(),
    };

    let candidates = platform.top_level_windows().map_err(|e| {
        log_error!("Window enumeration failed: {e}");
        not_found()
    })?;

    resolve::find_window(candidates, pid, title).ok_or_else(not_found)
}

/// Runs one drag session until the window closes. Returns the number of
/// repositions performed.
fn drag<P: Platform>(platform: &P, window: P::Window, config: &DragConfig) -> Result<u64, Error> {
    let mut hook = platform
        .install_pointer_hook(config)
        .map_err(Error::HookInstall)?;
    println!("Drag mode enabled");
    log_info!("Drag mode enabled for 0x{:X}", window.handle());

    let mut controller = DragController::new(window);
    if let Err(e) = controller.run(&mut hook) {
        eprintln!("Drag loop stopped: {e}");
        log_error!("Drag loop stopped: {e}");
    }
    drop(hook);

    println!("Drag mode disabled");
    log_info!("Drag mode disabled after {} moves", controller.moves());
    Ok(controller.moves())
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
