//! Frame driver: one `tick` per rendered frame.
//!
//! Fixed order each tick: input sampling → controller → orbit camera →
//! cosmetic layers (effects, audio cues). All state is owned here and
//! mutated on the caller's thread; terrain is injected at construction.

use crate::controller::{ControllerEvent, ControllerInput, ControllerParams, PlayerController};
use crate::facade::controller::{CameraMode, ControllerState};
use crate::input::{InputState, PointerCfg, Viewport};
use crate::systems::audio_cues::{AudioCue, AudioCues};
use crate::systems::camera::{OrbitCamera, OrbitCameraCfg};
use crate::systems::cursor::{HostEvent, apply_mode, handle_toggle_action};
use crate::systems::effects::EffectsLayer;
use collision_terrain::TerrainQuery;
use data_runtime::configs::input_camera::InputCameraCfg;
use data_runtime::configs::player_controller::PlayerControllerCfg;
use glam::Vec3;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct SessionParams {
    pub controller: ControllerParams,
    pub spawn: Vec3,
    pub camera: OrbitCameraCfg,
    pub pointer: PointerCfg,
    pub viewport: Viewport,
    pub mode: CameraMode,
    pub effects_seed: u64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            controller: ControllerParams::default(),
            spawn: Vec3::new(10.0, 0.0, 1.0),
            camera: OrbitCameraCfg::default(),
            pointer: PointerCfg::default(),
            viewport: Viewport::default(),
            mode: CameraMode::ThirdPerson,
            effects_seed: 0x5EED,
        }
    }
}

impl SessionParams {
    /// Build from loaded data configs; unset fields keep their defaults.
    #[must_use]
    pub fn from_configs(pc: &PlayerControllerCfg, cam: &InputCameraCfg) -> Self {
        let d = Self::default();
        Self {
            controller: ControllerParams::from(pc),
            spawn: pc.spawn.map_or(d.spawn, Vec3::from_array),
            camera: OrbitCameraCfg::from(cam),
            pointer: PointerCfg::from(cam),
            ..d
        }
    }
}

/// Everything a frame produced for collaborators.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub events: Vec<ControllerEvent>,
    pub cues: Vec<AudioCue>,
    pub host: Vec<HostEvent>,
}

pub struct Session<T: TerrainQuery> {
    terrain: T,
    input: InputState,
    pointer_cfg: PointerCfg,
    viewport: Viewport,
    controller: PlayerController,
    camera: OrbitCamera,
    mode: CameraMode,
    effects: EffectsLayer,
    cues: AudioCues,
    state: ControllerState,
    pending_host: Vec<HostEvent>,
}

impl<T: TerrainQuery> Session<T> {
    #[must_use]
    pub fn new(terrain: T, params: &SessionParams) -> Self {
        let controller = PlayerController::new(params.controller, params.spawn);
        let mut camera = OrbitCamera::new(&params.camera);
        apply_mode(params.mode, &mut camera);
        let state = ControllerState {
            mode: params.mode,
            camera: camera.pose(),
            player: controller.snapshot(),
        };
        Self {
            terrain,
            input: InputState::default(),
            pointer_cfg: params.pointer,
            viewport: params.viewport,
            controller,
            camera,
            mode: params.mode,
            effects: EffectsLayer::new(params.effects_seed),
            cues: AudioCues::default(),
            state,
            pending_host: Vec::new(),
        }
    }

    /// Route a key event; toggle actions fire on press only.
    pub fn handle_key(&mut self, code: &str, down: bool) {
        if down {
            if let Some(action) = self.input.key_down(code) {
                let locked = self.input.pointer_lock_enabled();
                handle_toggle_action(
                    action,
                    &mut self.mode,
                    &mut self.camera,
                    locked,
                    &mut self.pending_host,
                );
            }
        } else {
            self.input.key_up(code);
        }
    }

    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        self.input.pointer_move(dx, dy);
    }

    /// Host reports the actual pointer-lock state.
    pub fn set_pointer_lock(&mut self, enabled: bool) {
        debug!(target: "controls", enabled, "pointer lock changed");
        self.input.set_pointer_lock(enabled);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
        apply_mode(mode, &mut self.camera);
    }

    /// Run one frame with wall-clock `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> FrameOutput {
        let mut out = FrameOutput::default();

        self.input.sample(&self.pointer_cfg);
        let keys = self.input.keys;

        let input = ControllerInput {
            keys,
            camera_theta: self.camera.theta,
            mode: self.mode,
        };
        self.controller
            .update(&input, &self.terrain, dt, &mut out.events);
        let player = self.controller.position.current;

        let look = self
            .input
            .look_delta()
            .map(|d| self.viewport.normalise(d));
        self.camera.update(player, look, &self.terrain, dt);

        for ev in &out.events {
            self.effects.on_event(*ev, player);
        }
        self.effects.update(dt);
        self.cues.update(&keys, self.mode, &out.events, &mut out.cues);
        out.host = std::mem::take(&mut self.pending_host);

        self.state.mode = self.mode;
        if self.camera.is_active() {
            self.state.camera = self.camera.pose();
        }
        self.state.player = self.controller.snapshot();
        out
    }

    #[must_use]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }
    #[must_use]
    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }
    #[must_use]
    pub fn effects(&self) -> &EffectsLayer {
        &self.effects
    }
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }
    #[must_use]
    pub fn terrain(&self) -> &T {
        &self.terrain
    }
}
