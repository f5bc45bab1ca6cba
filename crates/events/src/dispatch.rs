//! Hierarchy dispatch: deliver a notification to the nearest capable
//! ancestor of the hit object.

use crate::event::{PointerEvent, PointerEventKind};
use raypoint_core::TargetId;
use tracing::warn;

/// Upper bound on parent-chain walks. Scenes deeper than this almost
/// certainly contain a parent cycle.
const MAX_DISPATCH_DEPTH: usize = 64;

/// What the pointer engine needs from the host's object model: parent
/// links, a capability query, and event delivery.
pub trait InteractionScene {
    /// Parent of `target` in the containment hierarchy, if any.
    fn parent_of(&self, target: TargetId) -> Option<TargetId>;

    /// Whether `target` declares the capability for `kind`.
    fn handles(&self, target: TargetId, kind: PointerEventKind) -> bool;

    /// Deliver `event` of `kind` to `target`. Only called for targets
    /// that reported `handles(target, kind)`.
    fn deliver(&mut self, target: TargetId, kind: PointerEventKind, event: &PointerEvent);
}

/// Walk the parent chain starting at `origin` (inclusive) and deliver
/// `event` to the first target that handles `kind`.
///
/// Returns the identity of the target that received the notification, or
/// `origin` itself when nothing in the chain handles `kind` (no delivery
/// happens, but the caller's bookkeeping stays comparable).
pub fn dispatch_to_hierarchy<S: InteractionScene>(
    scene: &mut S,
    origin: TargetId,
    kind: PointerEventKind,
    event: &PointerEvent,
) -> TargetId {
    let mut current = origin;
    for _ in 0..MAX_DISPATCH_DEPTH {
        if scene.handles(current, kind) {
            scene.deliver(current, kind, event);
            return current;
        }
        match scene.parent_of(current) {
            Some(parent) => current = parent,
            None => return origin,
        }
    }
    warn!(
        origin = origin.0,
        kind = kind.label(),
        "parent chain exceeded {MAX_DISPATCH_DEPTH} links; dropping notification"
    );
    origin
}
