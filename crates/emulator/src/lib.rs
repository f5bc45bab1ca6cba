#![warn(missing_docs)]
//! Desktop stand-in for a tracked head pose.
//!
//! When no HMD is present, mouse deltas steer the gaze direction and
//! keyboard axes move the rig, so the pointer engine receives the same
//! ray stream it would get from real tracking hardware.

use glam::Vec3;
use raypoint_core::Ray;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Maximum pitch in radians (just under straight up/down).
const PITCH_LIMIT: f32 = 1.54;

/// How the tracking runtime reports the rig origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingSpace {
    /// The runtime tracks real head height; the rig sits on the floor.
    RoomScale,
    /// Seated/standing setup; the rig supplies a fixed eye height.
    Stationary,
}

/// Mouse-and-keyboard emulation of a tracked head pose.
///
/// Yaw turns the rig, pitch tilts the head, and planar movement translates
/// the rig in its look direction.
#[derive(Debug, Clone)]
pub struct PoseEmulator {
    /// Rig position in world space (feet for room-scale, configured
    /// origin otherwise).
    pub position: Vec3,
    /// Horizontal rotation in radians (around Y axis).
    pub yaw: f32,
    /// Vertical rotation in radians (around local X axis).
    pub pitch: f32,

    /// Radians of rotation per unit of mouse movement.
    pub sensitivity: f32,
    /// Rig translation speed in units per second.
    pub movement_speed: f32,

    /// Whether the cursor should be captured by the host window.
    cursor_locked: bool,
    /// Vertical offset from rig origin to the eyes.
    eye_height: f32,
}

impl Default for PoseEmulator {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.006,
            movement_speed: 3.0,
            cursor_locked: true,
            eye_height: 0.0,
        }
    }
}

impl PoseEmulator {
    /// Create an emulator at the given rig position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder: set look sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builder: set movement speed.
    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Place the rig the way the given tracking space would.
    ///
    /// Room-scale tracking measures the player's real height, so the rig
    /// goes on the floor and the eyes come from tracking data. Stationary
    /// tracking gets a fixed eye height above the rig origin.
    pub fn with_tracking_space(mut self, space: TrackingSpace, eye_height: f32) -> Self {
        match space {
            TrackingSpace::RoomScale => {
                info!("Room-scale tracking; rig placed at floor level");
                self.position.y = 0.0;
                self.eye_height = 0.0;
            }
            TrackingSpace::Stationary => {
                info!("Stationary tracking; eye height {eye_height}");
                self.eye_height = eye_height;
            }
        }
        self
    }

    /// Apply a mouse delta in pixels. Positive `dy` looks down, matching
    /// un-inverted mouse conventions.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Translate the rig by keyboard axes in [-1, 1], relative to the
    /// current look direction, over `dt` seconds. Movement stays planar;
    /// looking up does not lift the rig.
    pub fn apply_movement(&mut self, forward: f32, right: f32, dt: f32) {
        let flat_forward = Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin());
        let flat_right = Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos());
        let delta = flat_forward * forward + flat_right * right;
        if delta != Vec3::ZERO {
            self.position += delta.normalize() * self.movement_speed * dt;
        }
    }

    /// Eye position in world space.
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.eye_height, 0.0)
    }

    /// Gaze direction (where the emulated head is looking).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// The gaze ray the pointer engine consumes each tick.
    pub fn ray(&self) -> Ray {
        Ray::new(self.eye_position(), self.forward())
    }

    /// Whether the host window should capture the cursor.
    pub fn cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    /// Release the cursor (typically bound to Escape).
    pub fn unlock_cursor(&mut self) {
        self.cursor_locked = false;
    }

    /// Re-capture the cursor.
    pub fn lock_cursor(&mut self) {
        self.cursor_locked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_forward_at_zero_rotation() {
        let emulator = PoseEmulator::default();
        assert_eq!(emulator.forward(), Vec3::X);
    }

    #[test]
    fn look_up_raises_forward() {
        let mut emulator = PoseEmulator::default();
        emulator.apply_look(0.0, -100.0);
        assert!(emulator.forward().y > 0.0);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut emulator = PoseEmulator::default();
        emulator.apply_look(0.0, -100_000.0);
        assert!(emulator.pitch <= PITCH_LIMIT);
        emulator.apply_look(0.0, 100_000.0);
        assert!(emulator.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn movement_is_planar() {
        let mut emulator = PoseEmulator::default();
        emulator.apply_look(0.0, -50.0); // look up a bit
        emulator.apply_movement(1.0, 0.0, 1.0);
        assert_eq!(emulator.position.y, 0.0);
        assert!(emulator.position.x > 0.0);
    }

    #[test]
    fn stationary_tracking_adds_eye_height() {
        let emulator = PoseEmulator::new(Vec3::new(2.0, 0.5, 0.0))
            .with_tracking_space(TrackingSpace::Stationary, 1.6);
        assert_eq!(emulator.eye_position().y, 2.1);

        let ray = emulator.ray();
        assert_eq!(ray.origin, emulator.eye_position());
    }

    #[test]
    fn room_scale_tracking_grounds_the_rig() {
        let emulator = PoseEmulator::new(Vec3::new(2.0, 0.5, 0.0))
            .with_tracking_space(TrackingSpace::RoomScale, 1.6);
        assert_eq!(emulator.position.y, 0.0);
        assert_eq!(emulator.eye_position().y, 0.0);
    }
}
