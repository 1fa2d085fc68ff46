//! Title-bar-less dragging.
//!
//! A system-wide low-level pointer hook feeds [`PointerEvent`]s into a
//! [`DragController`], which moves the tracked window while the primary
//! button is held over it. The hook and the loop share one thread: the
//! hook callback only runs inside the message retrieval calls made by
//! [`PointerSource::pump`], so the drag state needs no locking.

use crate::{Point, Window, WindowResult, log_debug, log_info, log_warn};

/// A pointer event observed by the low-level hook, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    ButtonDown(Point),
    ButtonUp(Point),
    Move(Point),
}

/// What happened during one [`PointerSource::pump`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    /// Pending input was drained and the bounded wait returned.
    Idle,
    /// The loop-termination signal was received.
    Quit,
}

/// The hook boundary: a source of pointer events tied to a message loop.
pub trait PointerSource {
    /// Drains every pending message, handing each pointer event to
    /// `sink` in arrival order, then waits a bounded time for new input.
    fn pump(&mut self, sink: &mut dyn FnMut(PointerEvent)) -> WindowResult<Pump>;

    /// Posts the loop-termination signal; the next `pump` returns
    /// [`Pump::Quit`].
    fn post_quit(&mut self);
}

/// Window operations needed to drag a window around.
pub trait DragTarget: Window {
    /// Returns whether the window under `point` has this window as its
    /// root ancestor.
    fn hit_test(&self, point: Point) -> bool;

    /// Moves the top-left corner to `origin` without resizing, changing
    /// Z-order, or activating.
    fn move_to(&self, origin: Point) -> WindowResult<()>;
}

/// Drag state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Terminated,
}

/// State of one drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub phase: Phase,
    /// Pointer position relative to the window's top-left at grab time.
    pub grab_offset: Point,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            grab_offset: Point::default(),
        }
    }
}

/// Owns the drag state for the lifetime of one session.
pub struct DragController<T: DragTarget> {
    window: T,
    state: DragState,
    moves: u64,
}

impl<T: DragTarget> DragController<T> {
    pub fn new(window: T) -> Self {
        Self {
            window,
            state: DragState::default(),
            moves: 0,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Number of repositions performed so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Applies one pointer event to the state machine.
    pub fn handle(&mut self, event: PointerEvent) {
        match (self.state.phase, event) {
            (Phase::Terminated, _) => {}
            (Phase::Idle, PointerEvent::ButtonDown(point)) => self.grab(point),
            (Phase::Dragging, PointerEvent::ButtonUp(_)) => {
                self.state.phase = Phase::Idle;
                log_debug!("drag released after {} moves", self.moves);
            }
            (Phase::Dragging, PointerEvent::Move(point)) => self.drag_to(point),
            _ => {}
        }
    }

    /// Runs the cooperative loop until the tracked window goes away.
    ///
    /// Liveness is checked once per iteration, before pending input is
    /// processed. The loop never ends on its own otherwise.
    pub fn run<S: PointerSource>(&mut self, source: &mut S) -> WindowResult<()> {
        let mut quit_posted = false;

        loop {
            if self.state.phase != Phase::Terminated && !self.window.is_alive() {
                self.terminate();
            }
            if self.state.phase == Phase::Terminated && !quit_posted {
                source.post_quit();
                quit_posted = true;
            }

            match source.pump(&mut |event| self.handle(event))? {
                Pump::Quit => break,
                Pump::Idle => {}
            }
        }

        self.state.phase = Phase::Terminated;
        Ok(())
    }

    fn grab(&mut self, point: Point) {
        if !self.window.hit_test(point) {
            return;
        }
        match self.window.rect() {
            Ok(rect) => {
                self.state.phase = Phase::Dragging;
                self.state.grab_offset = point.offset_from(rect.origin());
                log_debug!(
                    "drag grabbed 0x{:X} at offset {:?}",
                    self.window.handle(),
                    self.state.grab_offset
                );
            }
            Err(e) => log_warn!("drag grab 0x{:X}: {e}", self.window.handle()),
        }
    }

    fn drag_to(&mut self, point: Point) {
        if !self.window.is_alive() {
            self.terminate();
            return;
        }
        let origin = point.offset_from(self.state.grab_offset);
        match self.window.move_to(origin) {
            Ok(()) => self.moves += 1,
            Err(e) => log_warn!("drag move 0x{:X}: {e}", self.window.handle()),
        }
    }

    fn terminate(&mut self) {
        log_info!("Tracked window 0x{:X} closed", self.window.handle());
        self.state.phase = Phase::Terminated;
    }
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
