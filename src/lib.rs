#![warn(missing_docs)]
//! Ray-based pointer interaction for 3D scenes.
//!
//! One directed ray per simulation tick goes in (from a tracked pose or
//! the desktop emulator); synthetic pointer notifications come out:
//! enter, exit, down, up, and click, delivered to the nearest capable
//! ancestor of whatever the ray hits.
//!
//! # Example
//!
//! ```rust,no_run
//! use glam::Vec3;
//! use raypoint::{Button, PointerConfig, PressSignal, Ray, RayPointer, TargetRegistry};
//! # struct Physics;
//! # impl raypoint::HitTester for Physics {
//! #     fn cast(&self, _: Ray, _: f32, _: raypoint::LayerMask) -> Option<raypoint::RayHit> { None }
//! # }
//! # let physics = Physics;
//!
//! let mut scene = TargetRegistry::new();
//! let start = scene.register(Button::new("Start"));
//!
//! let mut pointer = RayPointer::new(PointerConfig::new())?;
//!
//! // In the simulation loop:
//! let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
//! pointer.tick(&mut scene, &physics, ray, PressSignal::IDLE);
//! # Ok::<(), raypoint::PointerConfigError>(())
//! ```

pub mod config;
pub mod pointer;

// Re-export the workspace surface.
pub use config::PointerSettings;
pub use pointer::{PointerConfig, PointerConfigError, RayPointer};
pub use raypoint_core::{HitTester, LayerMask, Ray, RayHit, TargetId};
pub use raypoint_emulator::{PoseEmulator, TrackingSpace};
pub use raypoint_events::{
    dispatch_to_hierarchy, Button, ButtonColors, ButtonState, Capabilities, EventTarget,
    InteractionScene, PointerEvent, PointerEventKind, TargetRegistry,
};
pub use raypoint_input::{ActionInput, InputBinding, PointerBindings, PressSignal, PRIMARY_ACTION};

/// Version of the raypoint crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the pointer interaction system with default settings.
pub fn init() -> anyhow::Result<()> {
    tracing::info!("Initializing raypoint v{}", VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert!(init().is_ok());
    }
}
