//! The pointer interaction engine: per-tick hover, press, and click
//! transitions for a single ray.

use glam::{Vec2, Vec3};
use raypoint_core::{HitTester, LayerMask, Ray, RayHit, TargetId};
use raypoint_events::{dispatch_to_hierarchy, InteractionScene, PointerEvent, PointerEventKind};
use raypoint_input::PressSignal;
use thiserror::Error;
use tracing::debug;

/// Construction-time configuration violations.
#[derive(Debug, Error, PartialEq)]
pub enum PointerConfigError {
    /// The maximum cast distance must be a positive finite number.
    #[error("max cast distance must be positive, got {0}")]
    MaxDistance(f32),
    /// The default line distance must be a positive finite number.
    #[error("default line distance must be positive, got {0}")]
    LineDistance(f32),
}

/// Configuration supplied once when the pointer is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerConfig {
    /// Identifier distinguishing this pointer from any other pointer.
    /// Constant for this single-pointer engine; carried on every event.
    pub pointer_id: u32,
    /// Fixed 2D anchor (e.g. viewport center) stamped on every event to
    /// satisfy positional event fields.
    pub reference_position: Vec2,
    /// How far the ray is cast each tick.
    pub max_distance: f32,
    /// Which interaction layers the cast considers.
    pub layer_mask: LayerMask,
    /// Where the visual-feedback line ends when nothing is hit.
    pub default_line_distance: f32,
}

impl PointerConfig {
    /// Configuration with the stock distances: 20 units of cast range and
    /// a 10-unit idle line.
    pub fn new() -> Self {
        Self {
            pointer_id: 0,
            reference_position: Vec2::ZERO,
            max_distance: 20.0,
            layer_mask: LayerMask::ALL,
            default_line_distance: 10.0,
        }
    }

    /// Builder: set the cast distance.
    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.max_distance = distance;
        self
    }

    /// Builder: set the layer filter.
    pub fn with_layer_mask(mut self, mask: LayerMask) -> Self {
        self.layer_mask = mask;
        self
    }

    /// Builder: set the idle line distance.
    pub fn with_default_line_distance(mut self, distance: f32) -> Self {
        self.default_line_distance = distance;
        self
    }

    /// Builder: set the reference position (typically viewport center).
    pub fn with_reference_position(mut self, position: Vec2) -> Self {
        self.reference_position = position;
        self
    }

    fn validate(&self) -> Result<(), PointerConfigError> {
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(PointerConfigError::MaxDistance(self.max_distance));
        }
        if !(self.default_line_distance.is_finite() && self.default_line_distance > 0.0) {
            return Err(PointerConfigError::LineDistance(self.default_line_distance));
        }
        Ok(())
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-pointer state carried across ticks. Owned exclusively by
/// [`RayPointer`]; created empty, discarded at shutdown.
#[derive(Debug, Clone, Copy, Default)]
struct PointerState {
    /// Identity used for hover bookkeeping and the click comparison: the
    /// target that handled (or would handle) the enter notification.
    hover_target: Option<TargetId>,
    /// Target that received the last unmatched down notification.
    pressed_target: Option<TargetId>,
    /// Geometry of the most recent cast, `None` after a miss. Its target
    /// is the raw object under the ray, which drives change detection.
    last_hit: Option<RayHit>,
    /// Hit captured when the press started.
    press_hit: Option<RayHit>,
    /// The ray used for the most recent cast.
    last_ray: Option<Ray>,
}

/// Converts one ray per tick into pointer notifications.
///
/// The engine owns all pointer state; hosts call [`tick`](Self::tick)
/// once per simulation frame and nothing else mutates it.
#[derive(Debug)]
pub struct RayPointer {
    config: PointerConfig,
    state: PointerState,
}

impl RayPointer {
    /// Create a pointer, rejecting invalid configuration up front.
    /// Per-tick operation never fails.
    pub fn new(config: PointerConfig) -> Result<Self, PointerConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: PointerState::default(),
        })
    }

    /// Run one evaluation: cast the ray, apply hover transitions, then
    /// press/release transitions.
    ///
    /// Within a tick, notifications observe a fixed relative order:
    /// exit before enter, and down before up before click.
    pub fn tick<S: InteractionScene, H: HitTester>(
        &mut self,
        scene: &mut S,
        hits: &H,
        ray: Ray,
        signal: PressSignal,
    ) {
        self.state.last_ray = Some(ray);
        let hit = hits.cast(ray, self.config.max_distance, self.config.layer_mask);
        self.resolve_hover(scene, hit);
        if signal.pressed {
            self.press(scene);
        }
        if signal.released {
            self.release(scene);
        }
    }

    /// Endpoint for a visual-feedback line: the last hit point, or the
    /// point at the configured idle distance along the last ray. Pure
    /// query; the world origin before the first tick.
    pub fn line_endpoint(&self) -> Vec3 {
        self.line_endpoint_at(self.config.default_line_distance)
    }

    /// [`line_endpoint`](Self::line_endpoint) with an explicit idle
    /// distance.
    pub fn line_endpoint_at(&self, default_distance: f32) -> Vec3 {
        match (self.state.last_hit, self.state.last_ray) {
            (Some(hit), _) => hit.point,
            (None, Some(ray)) => ray.at(default_distance),
            (None, None) => Vec3::ZERO,
        }
    }

    /// Identity currently hovered, if any.
    pub fn hover_target(&self) -> Option<TargetId> {
        self.state.hover_target
    }

    /// Identity holding an unmatched press, if any.
    pub fn pressed_target(&self) -> Option<TargetId> {
        self.state.pressed_target
    }

    /// Geometry of the most recent cast, if it hit.
    pub fn last_hit(&self) -> Option<RayHit> {
        self.state.last_hit
    }

    /// The configuration this pointer was built with.
    pub fn config(&self) -> &PointerConfig {
        &self.config
    }

    fn resolve_hover<S: InteractionScene>(&mut self, scene: &mut S, hit: Option<RayHit>) {
        let previous = self.state.last_hit.map(|h| h.target);
        match hit {
            // Same object as last tick: refresh the geometry, notify
            // nothing. Re-entering every tick would spam targets.
            Some(hit) if previous == Some(hit.target) => {
                self.state.last_hit = Some(hit);
            }
            Some(hit) => {
                self.clear_hover(scene);
                self.state.last_hit = Some(hit);
                let event = self.make_event();
                let handler =
                    dispatch_to_hierarchy(scene, hit.target, PointerEventKind::Enter, &event);
                self.state.hover_target = Some(handler);
                debug!(hit = hit.target.0, handler = handler.0, "pointer enter");
            }
            None => {
                self.clear_hover(scene);
                self.state.last_hit = None;
            }
        }
    }

    /// Exit the current hover target, if any. The exit event still
    /// carries the previous hit geometry.
    fn clear_hover<S: InteractionScene>(&mut self, scene: &mut S) {
        if self.state.hover_target.take().is_none() {
            return;
        }
        let Some(source) = self.state.last_hit.map(|h| h.target) else {
            return;
        };
        let event = self.make_event();
        dispatch_to_hierarchy(scene, source, PointerEventKind::Exit, &event);
        debug!(hit = source.0, "pointer exit");
    }

    /// A press lands on the hovered object; without one it is a no-op.
    fn press<S: InteractionScene>(&mut self, scene: &mut S) {
        if self.state.hover_target.is_none() {
            return;
        }
        let Some(source) = self.state.last_hit.map(|h| h.target) else {
            return;
        };
        self.state.press_hit = self.state.last_hit;
        let event = self.make_event();
        let handler = dispatch_to_hierarchy(scene, source, PointerEventKind::Down, &event);
        self.state.pressed_target = Some(handler);
        debug!(hit = source.0, handler = handler.0, "pointer down");
    }

    /// A release notifies the pressed target, clicks when press and hover
    /// agree, and always leaves the press state cleared.
    fn release<S: InteractionScene>(&mut self, scene: &mut S) {
        let Some(pressed) = self.state.pressed_target.take() else {
            return;
        };
        let event = PointerEvent {
            pressed_target: Some(pressed),
            ..self.make_event()
        };
        dispatch_to_hierarchy(scene, pressed, PointerEventKind::Up, &event);
        debug!(pressed = pressed.0, "pointer up");

        if self.state.hover_target == Some(pressed) {
            // Click starts from the raw hovered object so the nearest
            // click-capable ancestor gets it.
            let source = self.state.last_hit.map_or(pressed, |h| h.target);
            dispatch_to_hierarchy(scene, source, PointerEventKind::Click, &event);
            debug!(pressed = pressed.0, "pointer click");
        }
        self.state.press_hit = None;
    }

    fn make_event(&self) -> PointerEvent {
        PointerEvent {
            pointer_id: self.config.pointer_id,
            position: self.config.reference_position,
            current_hit: self.state.last_hit,
            press_hit: self.state.press_hit,
            pressed_target: self.state.pressed_target,
        }
    }
}
