use glam::Vec2;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use super::capture::CaptureFlag;

/// Frame-stable view of the input state, produced once per tick.
///
/// Movement and run flags are level-triggered. `jump_pressed` is a pressed
/// edge: it reads true for exactly one snapshot per physical key press, so a
/// held key cannot re-trigger a jump. The pointer delta is consumed by the
/// snapshot that carries it; taking a second snapshot in the same frame
/// yields a zero delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub jump_pressed: bool,
    pub pointer_delta: Vec2,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Accumulates keyboard and raw pointer events between ticks.
///
/// Pointer deltas are only recorded while the shared capture flag is set;
/// motion arriving without capture is discarded so an uncaptured cursor
/// never turns the camera. `clear_all` exists for window blur: key-up events
/// lost while unfocused would otherwise leave movement keys stuck down.
#[derive(Debug)]
pub struct InputTracker {
    captured: CaptureFlag,
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    run: bool,
    jump_is_down: bool,
    jump_pressed_edge: bool,
    pointer_dx: f32,
    pointer_dy: f32,
}

impl InputTracker {
    pub fn new(captured: CaptureFlag) -> Self {
        Self {
            captured,
            forward: false,
            backward: false,
            left: false,
            right: false,
            run: false,
            jump_is_down: false,
            jump_pressed_edge: false,
            pointer_dx: 0.0,
            pointer_dy: 0.0,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let is_down = state == ElementState::Pressed;
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => self.forward = is_down,
            KeyCode::KeyS | KeyCode::ArrowDown => self.backward = is_down,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left = is_down,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right = is_down,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.run = is_down,
            KeyCode::Space => match state {
                ElementState::Pressed => {
                    if !self.jump_is_down {
                        self.jump_pressed_edge = true;
                    }
                    self.jump_is_down = true;
                }
                ElementState::Released => self.jump_is_down = false,
            },
            _ => {}
        }
    }

    /// Records a raw pointer delta. Ignored unless pointer capture is
    /// currently held.
    pub fn accumulate_pointer(&mut self, dx: f64, dy: f64) {
        if !self.captured.get() {
            return;
        }
        self.pointer_dx += dx as f32;
        self.pointer_dy += dy as f32;
    }

    /// Releases every key and drops any pending pointer delta. Safe to call
    /// repeatedly.
    pub fn clear_all(&mut self) {
        self.forward = false;
        self.backward = false;
        self.left = false;
        self.right = false;
        self.run = false;
        self.jump_is_down = false;
        self.jump_pressed_edge = false;
        self.pointer_dx = 0.0;
        self.pointer_dy = 0.0;
    }

    /// Takes the snapshot for the next tick, consuming the pointer delta and
    /// the jump edge.
    pub fn snapshot_for_tick(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            run: self.run,
            jump_pressed: self.jump_pressed_edge,
            pointer_delta: Vec2::new(self.pointer_dx, self.pointer_dy),
        };
        self.jump_pressed_edge = false;
        self.pointer_dx = 0.0;
        self.pointer_dy = 0.0;
        snapshot
    }
}
