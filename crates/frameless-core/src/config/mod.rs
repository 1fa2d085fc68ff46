mod loader;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for frameless.
///
/// Loaded from `~/.config/frameless/config.toml`. The file is optional
/// and missing sections fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging.
    pub logging: LogConfig,
    /// Minimize/restore cycle used to force a repaint.
    pub redraw: RedrawConfig,
    /// Drag mode message loop.
    pub drag: DragConfig,
}

/// Redraw cycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedrawConfig {
    /// Whether to run the minimize/restore cycle at all. When off, the
    /// window is still shown and refocused.
    pub enabled: bool,
    /// Interval between show-state polls, in milliseconds.
    pub poll_ms: u64,
    /// How long to wait for each minimize or restore, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for RedrawConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_ms: 10,
            timeout_ms: 500,
        }
    }
}

/// Drag loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Maximum time the loop sleeps waiting for input, in milliseconds.
    ///
    /// Also bounds how quickly a closed window is noticed.
    pub wait_ms: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { wait_ms: 100 }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// The drag wait stays well below the system's low-level hook timeout
    /// (around 300 ms), past which Windows silently removes the hook.
    pub fn validate(&mut self) {
        self.redraw.poll_ms = self.redraw.poll_ms.clamp(1, 100);
        self.redraw.timeout_ms = self.redraw.timeout_ms.min(5000);
        self.drag.wait_ms = self.drag.wait_ms.clamp(10, 250);
    }
}
