//! TOML-backed settings for the pointer, the desktop emulator, and input
//! bindings.

use crate::pointer::PointerConfig;
use glam::Vec3;
use raypoint_core::LayerMask;
use raypoint_emulator::{PoseEmulator, TrackingSpace};
use raypoint_input::PointerBindings;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};
use tracing::warn;

const DEFAULT_SETTINGS_PATH: &str = "config/pointer.toml";

/// Settings a host application reads once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PointerSettings {
    /// Name of the input action that presses and releases the pointer.
    pub action: String,
    /// How far the interaction ray is cast, in world units.
    pub ray_distance: f32,
    /// Where the feedback line ends when nothing is highlighted.
    pub default_line_distance: f32,
    /// Layer indices the ray interacts with. Empty means every layer.
    pub interact_layers: Vec<u8>,
    /// Emulator look sensitivity (radians per pixel of mouse movement).
    pub mouse_sensitivity: f32,
    /// Emulator rig movement speed (units per second).
    pub movement_speed: f32,
    /// How the tracking runtime reports the rig origin.
    pub tracking_space: TrackingSpace,
    /// Eye height above the rig origin for stationary tracking.
    pub eye_height: f32,
    /// Binding overrides: action name to binding tokens.
    pub bindings: HashMap<String, Vec<String>>,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            action: raypoint_input::PRIMARY_ACTION.to_string(),
            ray_distance: 20.0,
            default_line_distance: 10.0,
            interact_layers: Vec::new(),
            // Sensitivity of 0.006 means ~0.34° per pixel of mouse movement
            mouse_sensitivity: 0.006,
            movement_speed: 3.0,
            tracking_space: TrackingSpace::RoomScale,
            eye_height: 1.6,
            bindings: HashMap::new(),
        }
    }
}

impl PointerSettings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from an explicit path, falling back to defaults on
    /// errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<PointerSettings>(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    PointerSettings::default()
                }
            },
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                PointerSettings::default()
            }
        }
    }

    /// The layer filter these settings describe.
    pub fn layer_mask(&self) -> LayerMask {
        if self.interact_layers.is_empty() {
            LayerMask::ALL
        } else {
            LayerMask::from_layers(self.interact_layers.iter().copied())
        }
    }

    /// Pointer configuration built from these settings.
    pub fn pointer_config(&self) -> PointerConfig {
        PointerConfig::new()
            .with_max_distance(self.ray_distance)
            .with_layer_mask(self.layer_mask())
            .with_default_line_distance(self.default_line_distance)
    }

    /// Input bindings: defaults plus any overrides from these settings.
    pub fn pointer_bindings(&self) -> PointerBindings {
        let mut bindings = PointerBindings::default();
        bindings.apply_overrides(&self.bindings);
        bindings
    }

    /// Desktop pose emulator configured from these settings.
    pub fn pose_emulator(&self, position: Vec3) -> PoseEmulator {
        PoseEmulator::new(position)
            .with_sensitivity(self.mouse_sensitivity)
            .with_movement_speed(self.movement_speed)
            .with_tracking_space(self.tracking_space, self.eye_height)
    }
}
