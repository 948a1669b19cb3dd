//! Camera-mode and pointer-lock toggle logic.

use crate::facade::controller::CameraMode;
use crate::input::Action;
use crate::systems::camera::OrbitCamera;
use tracing::info;

/// Requests the host must fulfil (browser/OS pointer capture).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    PointerLockRequest(bool),
}

/// Gate the orbit camera on the selected mode.
pub fn apply_mode(mode: CameraMode, camera: &mut OrbitCamera) {
    match mode {
        CameraMode::ThirdPerson => camera.activate(),
        CameraMode::Fly => camera.deactivate(),
    }
}

/// Handle a key press of a toggle action. Movement actions are ignored here.
pub fn handle_toggle_action(
    action: Action,
    mode: &mut CameraMode,
    camera: &mut OrbitCamera,
    pointer_locked: bool,
    out: &mut Vec<HostEvent>,
) {
    match action {
        Action::CameraMode => {
            let prev = *mode;
            let next = prev.toggled();
            *mode = next;
            apply_mode(next, camera);
            info!(target: "controls", from = ?prev, to = ?next, reason = "camera_mode_key");
        }
        Action::PointerLock => {
            info!(target: "controls", lock = !pointer_locked, reason = "pointer_lock_key");
            out.push(HostEvent::PointerLockRequest(!pointer_locked));
        }
        _ => {}
    }
}
