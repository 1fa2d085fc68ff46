//! In-memory stand-ins for the window manager, used by unit tests.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::DragConfig;
use crate::drag::{DragTarget, PointerEvent, PointerSource, Pump};
use crate::redraw::Presentation;
use crate::style::{BorderColor, Decorations, WindowStyle, ZOrder, ws, ws_ex};
use crate::{OsError, Platform, Point, Rect, Window, WindowResult};

/// Style of a typical decorated application window (`WS_OVERLAPPEDWINDOW`
/// plus `WS_VISIBLE`, `WS_EX_WINDOWEDGE | WS_EX_APPWINDOW`).
pub const DECORATED: WindowStyle = WindowStyle {
    style: 0x10CF_0000,
    ex_style: 0x0004_0100,
};

/// Non-client inset the fake window manager applies when a frame is
/// removed without `SWP_FRAMECHANGED` and the captured rectangle.
const FRAME_INSET: i32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Show,
    Minimize,
    Restore,
    BringForward { topmost: bool, bridged: bool },
    SetStyle(WindowStyle),
    SetOpaqueLayer,
    ExtendClientArea,
    SetBorderColor(BorderColor),
    ExcludeFromPeek,
    CommitFrame { rect: Rect, z: ZOrder },
}

impl Call {
    fn is_presentation(&self) -> bool {
        matches!(
            self,
            Self::Show | Self::Minimize | Self::Restore | Self::BringForward { .. }
        )
    }
}

#[derive(Debug)]
pub struct FakeState {
    pub id: usize,
    pub pid: u32,
    pub visible: bool,
    pub parent: bool,
    pub title: String,
    pub alive: bool,
    pub rect: Rect,
    pub style: WindowStyle,
    pub minimized: bool,
    pub border: Option<BorderColor>,
    pub client_extended: bool,
    pub peek_excluded: bool,
    pub opaque_layer: bool,
    pub in_topmost_band: bool,
    pub reject_border_none: bool,
    pub fail_commit: Option<OsError>,
    pub ignores_show_commands: bool,
    pub closes_on_minimize: bool,
    /// When false, hit tests miss (another window covers the point).
    pub hit: bool,
    pub moves: Vec<Point>,
    pub calls: Vec<Call>,
}

/// A shared handle to a fake window, cloned like a real `HWND`.
#[derive(Debug, Clone)]
pub struct FakeWindow(Rc<RefCell<FakeState>>);

impl FakeWindow {
    pub fn decorated(id: usize, pid: u32, title: &str) -> Self {
        Self(Rc::new(RefCell::new(FakeState {
            id,
            pid,
            visible: true,
            parent: false,
            title: title.to_string(),
            alive: true,
            rect: Rect::new(100, 100, 400, 300),
            style: DECORATED,
            minimized: false,
            border: None,
            client_extended: false,
            peek_excluded: false,
            opaque_layer: false,
            in_topmost_band: false,
            reject_border_none: false,
            fail_commit: None,
            ignores_show_commands: false,
            closes_on_minimize: false,
            hit: true,
            moves: Vec::new(),
            calls: Vec::new(),
        })))
    }

    pub fn state(&self) -> Ref<'_, FakeState> {
        self.0.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, FakeState> {
        self.0.borrow_mut()
    }

    pub fn close(&self) {
        self.state_mut().alive = false;
    }

    pub fn presentation_calls(&self) -> Vec<Call> {
        self.state()
            .calls
            .iter()
            .filter(|c| c.is_presentation())
            .cloned()
            .collect()
    }

    fn record(&self, call: Call) {
        self.state_mut().calls.push(call);
    }
}

impl Window for FakeWindow {
    fn handle(&self) -> usize {
        self.state().id
    }

    fn is_alive(&self) -> bool {
        self.state().alive
    }

    fn process_id(&self) -> u32 {
        self.state().pid
    }

    fn is_visible(&self) -> bool {
        self.state().visible
    }

    fn has_parent(&self) -> bool {
        self.state().parent
    }

    fn title(&self) -> WindowResult<String> {
        Ok(self.state().title.clone())
    }

    fn rect(&self) -> WindowResult<Rect> {
        let state = self.state();
        if !state.alive {
            return Err(OsError::new(1400, "Invalid window handle."));
        }
        Ok(state.rect)
    }
}

impl Decorations for FakeWindow {
    fn style(&self) -> WindowStyle {
        self.state().style
    }

    fn set_style(&self, style: WindowStyle) {
        self.record(Call::SetStyle(style));
        let mut state = self.state_mut();
        // A real window manager recomputes the non-client area lazily;
        // simulate the visible content shifting until the frame commit.
        if state.style.has_frame() && !style.has_frame() {
            state.rect = Rect::new(
                state.rect.x + FRAME_INSET,
                state.rect.y + FRAME_INSET,
                state.rect.width - 2 * FRAME_INSET,
                state.rect.height - 2 * FRAME_INSET,
            );
        }
        state.style = style;
    }

    fn set_opaque_layer(&self) -> WindowResult<()> {
        self.record(Call::SetOpaqueLayer);
        self.state_mut().opaque_layer = true;
        Ok(())
    }

    fn extend_client_area(&self) -> WindowResult<()> {
        self.record(Call::ExtendClientArea);
        self.state_mut().client_extended = true;
        Ok(())
    }

    fn set_border_color(&self, color: BorderColor) -> WindowResult<()> {
        self.record(Call::SetBorderColor(color));
        let mut state = self.state_mut();
        if color == BorderColor::None && state.reject_border_none {
            return Err(OsError::new(-2147024809, "The parameter is incorrect."));
        }
        state.border = Some(color);
        Ok(())
    }

    fn exclude_from_peek(&self) -> WindowResult<()> {
        self.record(Call::ExcludeFromPeek);
        self.state_mut().peek_excluded = true;
        Ok(())
    }

    fn commit_frame(&self, rect: Rect, z: ZOrder) -> WindowResult<()> {
        self.record(Call::CommitFrame { rect, z });
        let mut state = self.state_mut();
        if let Some(e) = state.fail_commit.clone() {
            return Err(e);
        }
        state.rect = rect;
        if z == ZOrder::Topmost {
            state.in_topmost_band = true;
            state.style.ex_style |= ws_ex::TOPMOST;
        }
        Ok(())
    }
}

impl Presentation for FakeWindow {
    fn is_minimized(&self) -> bool {
        self.state().minimized
    }

    fn show(&self) {
        self.record(Call::Show);
        if !self.state().ignores_show_commands {
            self.state_mut().minimized = false;
        }
    }

    fn minimize(&self) {
        self.record(Call::Minimize);
        let mut state = self.state_mut();
        if state.closes_on_minimize {
            state.alive = false;
        } else if !state.ignores_show_commands {
            state.minimized = true;
            state.style.style |= ws::MINIMIZE;
        }
    }

    fn restore(&self) {
        self.record(Call::Restore);
        let mut state = self.state_mut();
        if !state.ignores_show_commands {
            state.minimized = false;
            state.style.style &= !ws::MINIMIZE;
        }
    }

    fn bring_forward(&self, topmost: bool, bridge_input: bool) {
        self.record(Call::BringForward {
            topmost,
            bridged: bridge_input,
        });
        if topmost {
            self.state_mut().in_topmost_band = true;
        }
    }
}

impl DragTarget for FakeWindow {
    fn hit_test(&self, point: Point) -> bool {
        let state = self.state();
        state.hit && state.rect.contains(point)
    }

    fn move_to(&self, origin: Point) -> WindowResult<()> {
        let mut state = self.state_mut();
        state.rect.x = origin.x;
        state.rect.y = origin.y;
        state.moves.push(origin);
        Ok(())
    }
}

/// A scripted pointer hook: each `pump` delivers the next batch.
pub struct FakePointer {
    batches: VecDeque<Vec<PointerEvent>>,
    quit_posted: bool,
    /// Windows closed once the script runs out.
    close_when_drained: Vec<FakeWindow>,
    pub pumps: Rc<Cell<u32>>,
    removed: Rc<Cell<u32>>,
}

impl FakePointer {
    pub fn scripted(batches: Vec<Vec<PointerEvent>>) -> Self {
        Self {
            batches: batches.into(),
            quit_posted: false,
            close_when_drained: Vec::new(),
            pumps: Rc::new(Cell::new(0)),
            removed: Rc::new(Cell::new(0)),
        }
    }

    pub fn closing(mut self, windows: &[FakeWindow]) -> Self {
        self.close_when_drained = windows.to_vec();
        self
    }
}

impl PointerSource for FakePointer {
    fn pump(&mut self, sink: &mut dyn FnMut(PointerEvent)) -> WindowResult<Pump> {
        self.pumps.set(self.pumps.get() + 1);
        if self.quit_posted {
            return Ok(Pump::Quit);
        }
        match self.batches.pop_front() {
            Some(batch) => batch.into_iter().for_each(|e| sink(e)),
            None => self.close_when_drained.iter().for_each(FakeWindow::close),
        }
        Ok(Pump::Idle)
    }

    fn post_quit(&mut self) {
        self.quit_posted = true;
    }
}

impl Drop for FakePointer {
    fn drop(&mut self) {
        self.removed.set(self.removed.get() + 1);
    }
}

/// A process reference that counts its releases.
pub struct FakeProcess {
    released: Rc<Cell<u32>>,
}

impl Drop for FakeProcess {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// A whole fake desktop.
pub struct FakeDesktop {
    pub processes: Vec<(String, u32)>,
    pub windows: Vec<FakeWindow>,
    pub open_error: Option<OsError>,
    pub hook_error: Option<OsError>,
    /// Pointer script handed to the hook when drag mode starts.
    pub script: RefCell<Vec<Vec<PointerEvent>>>,
    pub enumerations: Cell<u32>,
    pub opened: Cell<u32>,
    pub released: Rc<Cell<u32>>,
    pub hooks_installed: Cell<u32>,
    pub hooks_removed: Rc<Cell<u32>>,
}

impl FakeDesktop {
    pub fn new(processes: &[(&str, u32)], windows: Vec<FakeWindow>) -> Self {
        Self {
            processes: processes
                .iter()
                .map(|(name, pid)| (name.to_string(), *pid))
                .collect(),
            windows,
            open_error: None,
            hook_error: None,
            script: RefCell::new(Vec::new()),
            enumerations: Cell::new(0),
            opened: Cell::new(0),
            released: Rc::new(Cell::new(0)),
            hooks_installed: Cell::new(0),
            hooks_removed: Rc::new(Cell::new(0)),
        }
    }
}

impl Platform for FakeDesktop {
    type Process = FakeProcess;
    type Window = FakeWindow;
    type Pointer = FakePointer;

    fn find_process(&self, name: &str) -> Option<u32> {
        self.processes
            .iter()
            .find(|(exe, _)| exe.eq_ignore_ascii_case(name))
            .map(|(_, pid)| *pid)
    }

    fn open_process(&self, pid: u32) -> WindowResult<FakeProcess> {
        if let Some(e) = self.open_error.clone() {
            return Err(e);
        }
        if !self.processes.iter().any(|(_, p)| *p == pid) {
            return Err(OsError::new(87, "The parameter is incorrect."));
        }
        self.opened.set(self.opened.get() + 1);
        Ok(FakeProcess {
            released: Rc::clone(&self.released),
        })
    }

    fn top_level_windows(&self) -> WindowResult<Vec<FakeWindow>> {
        self.enumerations.set(self.enumerations.get() + 1);
        Ok(self.windows.clone())
    }

    fn install_pointer_hook(&self, _config: &DragConfig) -> WindowResult<FakePointer> {
        if let Some(e) = self.hook_error.clone() {
            return Err(e);
        }
        self.hooks_installed.set(self.hooks_installed.get() + 1);
        let script = std::mem::take(&mut *self.script.borrow_mut());
        let mut pointer = FakePointer::scripted(script).closing(&self.windows);
        pointer.removed = Rc::clone(&self.hooks_removed);
        Ok(pointer)
    }
}
