//! Input snapshot for the local player.
//!
//! Keys are tracked as logical actions (not physical codes) so the controller
//! only sees `KeysDown`. Pointer movement accumulates between frames and is
//! clamped and exponentially smoothed once per frame in `InputState::sample`.

use glam::Vec2;

/// Logical actions the default key map can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Boost,
    Jump,
    PointerLock,
    CameraMode,
}

/// Physical key code (DOM `KeyboardEvent.code` names) → action.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(String, Action)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut m = Self {
            bindings: Vec::new(),
        };
        for (codes, action) in [
            (&["ArrowUp", "KeyW"][..], Action::Forward),
            (&["ArrowRight", "KeyD"][..], Action::StrafeRight),
            (&["ArrowDown", "KeyS"][..], Action::Backward),
            (&["ArrowLeft", "KeyA"][..], Action::StrafeLeft),
            (&["ShiftLeft", "ShiftRight"][..], Action::Boost),
            (&["KeyP"][..], Action::PointerLock),
            (&["KeyV"][..], Action::CameraMode),
            (&["Space"][..], Action::Jump),
        ] {
            for code in codes {
                m.bind(code, action);
            }
        }
        m
    }
}

impl KeyMap {
    /// Bind `code` to `action`, replacing any previous binding of that code.
    pub fn bind(&mut self, code: &str, action: Action) {
        self.bindings.retain(|(c, _)| c != code);
        self.bindings.push((code.to_string(), action));
    }

    #[must_use]
    pub fn action_for(&self, code: &str) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, a)| *a)
    }
}

/// Held state of the actions the controller reads.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeysDown {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub boost: bool,
    pub jump: bool,
}

impl KeysDown {
    /// True while any of the four movement keys is held.
    #[must_use]
    pub fn any_move(&self) -> bool {
        self.forward || self.backward || self.strafe_left || self.strafe_right
    }

    fn set(&mut self, action: Action, down: bool) {
        match action {
            Action::Forward => self.forward = down,
            Action::Backward => self.backward = down,
            Action::StrafeLeft => self.strafe_left = down,
            Action::StrafeRight => self.strafe_right = down,
            Action::Boost => self.boost = down,
            Action::Jump => self.jump = down,
            Action::PointerLock | Action::CameraMode => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerCfg {
    /// Exponential smoothing factor; larger follows input more closely.
    pub smoothing: f32,
    /// Raw per-frame movement clamp (pixels), guards against spikes.
    pub max_delta: f32,
}

impl Default for PointerCfg {
    fn default() -> Self {
        Self {
            smoothing: 0.2,
            max_delta: 80.0,
        }
    }
}

impl From<&data_runtime::configs::input_camera::InputCameraCfg> for PointerCfg {
    fn from(c: &data_runtime::configs::input_camera::InputCameraCfg) -> Self {
        let d = Self::default();
        Self {
            smoothing: c.pointer_smoothing.unwrap_or(d.smoothing),
            max_delta: c.pointer_max_delta.unwrap_or(d.max_delta),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    accum: Vec2,
    smooth: Vec2,
    /// Smoothed delta published by the last `sample` (pixels).
    pub delta: Vec2,
}

impl PointerState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Default, Debug, Clone)]
pub struct InputState {
    pub keymap: KeyMap,
    pub keys: KeysDown,
    pub pointer: PointerState,
    pointer_lock_enabled: bool,
}

impl InputState {
    /// Apply a key press. Returns the mapped action, if any.
    pub fn key_down(&mut self, code: &str) -> Option<Action> {
        let action = self.keymap.action_for(code)?;
        self.keys.set(action, true);
        Some(action)
    }

    /// Apply a key release. Returns the mapped action, if any.
    pub fn key_up(&mut self, code: &str) -> Option<Action> {
        let action = self.keymap.action_for(code)?;
        self.keys.set(action, false);
        Some(action)
    }

    /// Accumulate raw pointer movement; ignored unless pointer lock is engaged.
    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        if self.pointer_lock_enabled {
            self.pointer.accum += Vec2::new(dx, dy);
        }
    }

    /// Pointer lock changed. Every accumulator is zeroed so entering or
    /// leaving lock never produces a large jump.
    pub fn set_pointer_lock(&mut self, enabled: bool) {
        self.pointer_lock_enabled = enabled;
        self.pointer.reset();
    }

    #[must_use]
    pub fn pointer_lock_enabled(&self) -> bool {
        self.pointer_lock_enabled
    }

    /// Once per frame: clamp, smooth and publish the accumulated pointer delta.
    pub fn sample(&mut self, cfg: &PointerCfg) {
        let m = cfg.max_delta;
        let clamped = self.pointer.accum.clamp(Vec2::splat(-m), Vec2::splat(m));
        let a = cfg.smoothing;
        self.pointer.smooth = self.pointer.smooth * (1.0 - a) + clamped * a;
        self.pointer.delta = self.pointer.smooth;
        self.pointer.accum = Vec2::ZERO;
    }

    /// Smoothed look delta while continuous look (pointer lock) is engaged.
    #[must_use]
    pub fn look_delta(&self) -> Option<Vec2> {
        self.pointer_lock_enabled.then_some(self.pointer.delta)
    }

    /// Drop all held keys and pointer motion (focus loss).
    pub fn clear(&mut self) {
        self.keys = KeysDown::default();
        self.pointer.reset();
    }
}

/// Drawable surface size used to normalise pixel deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    /// Pixels → fraction of the smaller side.
    #[must_use]
    pub fn normalise(&self, pixels: Vec2) -> Vec2 {
        let min_side = self.width.min(self.height).max(1.0);
        pixels / min_side
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_map_covers_arrows_and_wasd() {
        let mut s = InputState::default();
        assert_eq!(s.key_down("KeyW"), Some(Action::Forward));
        assert_eq!(s.key_down("ArrowLeft"), Some(Action::StrafeLeft));
        assert!(s.keys.forward && s.keys.strafe_left);
        assert_eq!(s.key_up("ArrowUp"), Some(Action::Forward));
        assert!(!s.keys.forward);
        assert_eq!(s.key_down("KeyZ"), None);
    }

    #[test]
    fn toggle_actions_do_not_latch_keys() {
        let mut s = InputState::default();
        assert_eq!(s.key_down("KeyV"), Some(Action::CameraMode));
        assert_eq!(s.keys, KeysDown::default());
    }

    #[test]
    fn pointer_ignored_without_lock() {
        let mut s = InputState::default();
        s.pointer_move(10.0, 10.0);
        s.sample(&PointerCfg::default());
        assert_eq!(s.pointer.delta, Vec2::ZERO);
        assert!(s.look_delta().is_none());
    }

    #[test]
    fn pointer_is_clamped_then_smoothed() {
        let mut s = InputState::default();
        s.set_pointer_lock(true);
        s.pointer_move(500.0, -10.0);
        s.sample(&PointerCfg::default());
        // 80 clamp * 0.2 smoothing
        assert_abs_diff_eq!(s.pointer.delta.x, 16.0, epsilon = 1e-5);
        assert_abs_diff_eq!(s.pointer.delta.y, -2.0, epsilon = 1e-5);
        // No new motion: decays geometrically.
        s.sample(&PointerCfg::default());
        assert_abs_diff_eq!(s.pointer.delta.x, 12.8, epsilon = 1e-5);
    }

    #[test]
    fn lock_change_resets_pointer() {
        let mut s = InputState::default();
        s.set_pointer_lock(true);
        s.pointer_move(30.0, 30.0);
        s.sample(&PointerCfg::default());
        s.set_pointer_lock(false);
        s.set_pointer_lock(true);
        assert_eq!(s.look_delta(), Some(Vec2::ZERO));
    }

    #[test]
    fn clear_drops_keys_and_pointer_but_keeps_lock() {
        let mut s = InputState::default();
        s.set_pointer_lock(true);
        s.key_down("KeyW");
        s.key_down("ShiftLeft");
        s.pointer_move(40.0, -20.0);
        s.sample(&PointerCfg::default());
        s.pointer_move(5.0, 5.0);
        s.clear();
        assert_eq!(s.keys, KeysDown::default());
        assert_eq!(s.pointer, PointerState::default());
        assert!(s.pointer_lock_enabled());
        s.sample(&PointerCfg::default());
        assert_eq!(s.look_delta(), Some(Vec2::ZERO));
    }

    #[test]
    fn normalise_uses_smaller_side() {
        let v = Viewport {
            width: 1000.0,
            height: 500.0,
        };
        assert_eq!(v.normalise(Vec2::new(50.0, 100.0)), Vec2::new(0.1, 0.2));
    }
}
