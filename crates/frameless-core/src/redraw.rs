//! Forced repaint after a decoration change.
//!
//! Some compositors cache decoration geometry and keep drawing the old
//! frame while the window sits in a steady visible state. A minimize and
//! restore cycle makes them rebuild it.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::RedrawConfig;
use crate::{Window, log_debug, log_warn};

/// Show state and activation operations used by the redraw cycle.
pub trait Presentation: Window {
    fn is_minimized(&self) -> bool;

    /// Restores the window if minimized, otherwise shows it.
    fn show(&self);

    fn minimize(&self);

    fn restore(&self);

    /// Raises the window (into the topmost band when `topmost`) and makes
    /// it the foreground, active and focused window.
    ///
    /// With `bridge_input`, the caller's input queue is attached to the
    /// current foreground thread for the duration of the foreground call
    /// only, which lifts the foreground-lock restriction.
    fn bring_forward(&self, topmost: bool, bridge_input: bool);
}

/// What the redraw cycle observed. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawOutcome {
    /// The window reported minimized before the timeout.
    pub minimized: bool,
    /// The window reported restored before the timeout.
    pub restored: bool,
    /// The window disappeared part way through.
    pub lost: bool,
}

/// Drives the minimize/restore cycle so the new frame gets painted.
///
/// Best effort: wait timeouts are logged and the cycle carries on, and a
/// window that disappears mid-cycle just ends it early.
pub fn force_redraw<P: Presentation>(
    window: &P,
    topmost: bool,
    config: &RedrawConfig,
) -> RedrawOutcome {
    let mut outcome = RedrawOutcome::default();
    let poll = Duration::from_millis(config.poll_ms);
    let timeout = Duration::from_millis(config.timeout_ms);

    window.show();
    window.bring_forward(topmost, true);

    if !config.enabled {
        return outcome;
    }

    window.minimize();
    match wait_until(window, poll, timeout, |w| w.is_minimized()) {
        Wait::Done => outcome.minimized = true,
        Wait::TimedOut => log_warn!("0x{:X} did not minimize in time", window.handle()),
        Wait::Lost => {
            outcome.lost = true;
            return outcome;
        }
    }

    window.restore();
    match wait_until(window, poll, timeout, |w| !w.is_minimized()) {
        Wait::Done => outcome.restored = true,
        Wait::TimedOut => log_warn!("0x{:X} did not restore in time", window.handle()),
        Wait::Lost => {
            outcome.lost = true;
            return outcome;
        }
    }

    window.bring_forward(topmost, false);
    log_debug!("redraw 0x{:X}: {outcome:?}", window.handle());
    outcome
}

enum Wait {
    Done,
    TimedOut,
    Lost,
}

/// Polls `done` every `poll` until it holds, `timeout` elapses, or the
/// window stops existing.
fn wait_until<P: Presentation>(
    window: &P,
    poll: Duration,
    timeout: Duration,
    done: impl Fn(&P) -> bool,
) -> Wait {
    let start = Instant::now();
    loop {
        if !window.is_alive() {
            return Wait::Lost;
        }
        if done(window) {
            return Wait::Done;
        }
        if start.elapsed() >= timeout {
            return Wait::TimedOut;
        }
        thread::sleep(poll);
    }
}
