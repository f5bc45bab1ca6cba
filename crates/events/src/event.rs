//! Synthetic pointer event records.

use glam::Vec2;
use raypoint_core::{RayHit, TargetId};
use serde::Serialize;

/// The five pointer notifications a target can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointerEventKind {
    /// The ray started intersecting the target.
    Enter,
    /// The ray stopped intersecting the target.
    Exit,
    /// The input action was pressed while the target was hovered.
    Down,
    /// The input action was released after a press.
    Up,
    /// Press and release matched on the same target.
    Click,
}

impl PointerEventKind {
    /// Stable lowercase label, used for logs and event streams.
    pub fn label(&self) -> &'static str {
        match self {
            PointerEventKind::Enter => "enter",
            PointerEventKind::Exit => "exit",
            PointerEventKind::Down => "down",
            PointerEventKind::Up => "up",
            PointerEventKind::Click => "click",
        }
    }
}

/// Data attached to every pointer notification.
///
/// Mirrors the fields a conventional UI event system expects from a
/// pointer: a pointer id, a 2D position, the hit geometry under the
/// pointer, and press bookkeeping. In this single-ray design the position
/// is a fixed reference point (e.g. viewport center) and carries no
/// interaction meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Identifier distinguishing this pointer from any other pointer.
    pub pointer_id: u32,
    /// Fixed 2D anchor satisfying positional event fields.
    pub position: Vec2,
    /// Hit geometry from the most recent cast, if it hit.
    pub current_hit: Option<RayHit>,
    /// Hit geometry captured when the press started.
    pub press_hit: Option<RayHit>,
    /// Target that received the unmatched down notification, if any.
    pub pressed_target: Option<TargetId>,
}
