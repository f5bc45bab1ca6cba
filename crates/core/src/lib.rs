#![warn(missing_docs)]
//! Core primitives shared across the workspace: rays, layer masks,
//! target identities, and the hit-tester contract.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

/// A ray in world space: origin plus normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin of the ray in world coordinates.
    pub origin: Vec3,
    /// Unit direction the ray travels in.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized here so callers can
    /// pass any non-zero vector.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(direction.length_squared() > 0.0);
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Bitmask selecting which interaction layers a cast may hit.
///
/// Layers are host-defined indices 0..32; a mask is the union of the
/// layers it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// Matches no layer.
    pub const NONE: Self = Self(0);

    /// Mask containing exactly one layer.
    pub fn layer(index: u8) -> Self {
        debug_assert!(index < 32);
        Self(1 << index)
    }

    /// Mask accepting all of the given layer indices.
    pub fn from_layers<I: IntoIterator<Item = u8>>(layers: I) -> Self {
        layers
            .into_iter()
            .fold(Self::NONE, |mask, index| mask | Self::layer(index))
    }

    /// Whether this mask shares at least one layer with `other`.
    pub fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the single layer `index` is included.
    pub fn contains_layer(&self, index: u8) -> bool {
        self.intersects(Self::layer(index))
    }

    /// Whether the mask accepts no layer at all.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for LayerMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for LayerMask {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

/// Identity of an interactive object in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub u64);

/// Nearest-intersection result for one cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The object the ray hit.
    pub target: TargetId,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit position.
    pub point: Vec3,
    /// World-space surface normal at the hit point.
    pub normal: Vec3,
}

/// Nearest-intersection query service, typically backed by the host's
/// physics engine.
///
/// Returning `None` is the normal "nothing under the ray" outcome, not an
/// error.
pub trait HitTester {
    /// Cast `ray` up to `max_distance`, considering only objects on layers
    /// included in `mask`, and return the nearest hit if any.
    fn cast(&self, ray: Ray, max_distance: f32, mask: LayerMask) -> Option<RayHit>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn ray_point_at_distance() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        assert_eq!(ray.at(5.0), Vec3::new(6.0, 2.0, 3.0));
    }

    #[test]
    fn layer_mask_single_layer() {
        let mask = LayerMask::layer(3);
        assert!(mask.contains_layer(3));
        assert!(!mask.contains_layer(2));
    }

    #[test]
    fn layer_mask_union_and_complement() {
        let mask = LayerMask::from_layers([0, 4]);
        assert!(mask.intersects(LayerMask::layer(0)));
        assert!(mask.intersects(LayerMask::layer(4)));
        assert!(!mask.intersects(LayerMask::layer(1)));

        // Everything except layer 2, built the bitwise way.
        let inverted = !LayerMask::layer(2);
        assert!(!inverted.contains_layer(2));
        assert!(inverted.contains_layer(0));
        assert!(inverted.contains_layer(31));
    }

    #[test]
    fn layer_mask_defaults_to_all() {
        let mask = LayerMask::default();
        assert!(mask.intersects(LayerMask::layer(17)));
        assert!(!mask.is_empty());
        assert!(LayerMask::NONE.is_empty());
    }
}
