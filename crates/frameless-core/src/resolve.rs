//! Target window resolution.
//!
//! The window manager hands out every top-level window on the desktop,
//! not just the target process's. Filtering happens here, lazily and
//! in a fixed order, so the cheap checks run before the title is read.

use crate::Window;

/// Returns the first candidate that belongs to `pid`, is visible, has no
/// parent, has a non-empty title, and whose title contains `title`
/// (case-insensitive).
///
/// Candidates are expected in window-manager Z-order. The policy is
/// first match, not best match: when several windows qualify, whichever
/// comes first wins.
pub fn find_window<W: Window>(
    candidates: impl IntoIterator<Item = W>,
    pid: u32,
    title: &str,
) -> Option<W> {
    candidates.into_iter().find(|window| {
        if window.process_id() != pid {
            return false;
        }
        if !window.is_visible() || window.has_parent() {
            return false;
        }

        let text = window.title().unwrap_or_default();
        !text.is_empty() && title_matches(&text, title)
    })
}

/// Case-insensitive substring test used for title matching.
pub fn title_matches(title: &str, substring: &str) -> bool {
    title.to_lowercase().contains(&substring.to_lowercase())
}
