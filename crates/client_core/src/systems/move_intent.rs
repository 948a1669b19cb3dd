//! Camera-relative heading from held movement keys.
//!
//! Eight directions, expressed as an offset added to the camera azimuth.
//! Forward wins over backward, and strafe-left wins over strafe-right.

use crate::input::KeysDown;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Heading offset (radians) for the held keys, or `None` when no movement key is held.
#[must_use]
pub fn heading_offset(keys: &KeysDown) -> Option<f32> {
    if !keys.any_move() {
        return None;
    }
    let offset = if keys.forward {
        if keys.strafe_left {
            FRAC_PI_4
        } else if keys.strafe_right {
            -FRAC_PI_4
        } else {
            0.0
        }
    } else if keys.backward {
        if keys.strafe_left {
            3.0 * FRAC_PI_4
        } else if keys.strafe_right {
            -3.0 * FRAC_PI_4
        } else {
            -PI
        }
    } else if keys.strafe_left {
        FRAC_PI_2
    } else {
        -FRAC_PI_2
    };
    Some(offset)
}

/// World XZ displacement for moving `distance` along `yaw`.
/// Yaw 0 faces −Z; positive yaw turns toward −X.
#[must_use]
pub fn displacement_xz(yaw: f32, distance: f32) -> glam::Vec2 {
    glam::Vec2::new(-yaw.sin() * distance, -yaw.cos() * distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn keys(f: bool, b: bool, l: bool, r: bool) -> KeysDown {
        KeysDown {
            forward: f,
            backward: b,
            strafe_left: l,
            strafe_right: r,
            ..Default::default()
        }
    }

    #[test]
    fn eight_way_table() {
        let cases = [
            (keys(true, false, false, false), 0.0),
            (keys(true, false, true, false), 45.0),
            (keys(true, false, false, true), -45.0),
            (keys(false, true, false, false), -180.0),
            (keys(false, true, true, false), 135.0),
            (keys(false, true, false, true), -135.0),
            (keys(false, false, true, false), 90.0),
            (keys(false, false, false, true), -90.0),
        ];
        for (k, deg) in cases {
            let got = heading_offset(&k).expect("moving");
            assert_abs_diff_eq!(got, f32::to_radians(deg), epsilon = 1e-6);
        }
    }

    #[test]
    fn no_keys_no_heading() {
        assert!(heading_offset(&KeysDown::default()).is_none());
        let boost_only = KeysDown {
            boost: true,
            jump: true,
            ..Default::default()
        };
        assert!(heading_offset(&boost_only).is_none());
    }

    #[test]
    fn conflicting_keys_resolve_by_priority() {
        let fb = heading_offset(&keys(true, true, false, false)).expect("moving");
        assert_abs_diff_eq!(fb, 0.0, epsilon = 1e-6);
        let lr = heading_offset(&keys(false, false, true, true)).expect("moving");
        assert_abs_diff_eq!(lr, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn yaw_zero_moves_toward_negative_z() {
        let d = displacement_xz(0.0, 2.0);
        assert_abs_diff_eq!(d.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(d.y, -2.0, epsilon = 1e-6);
        let d = displacement_xz(-FRAC_PI_2, 1.0);
        assert_abs_diff_eq!(d.x, 1.0, epsilon = 1e-6);
    }
}
