//! The capability surface an interactive object exposes.

use crate::event::{PointerEvent, PointerEventKind};
use bitflags::bitflags;

bitflags! {
    /// Which pointer notifications a target handles.
    ///
    /// A target only receives the kinds it declares; hierarchy dispatch
    /// skips past it for everything else.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// Receives [`PointerEventKind::Enter`].
        const ENTER = 1 << 0;
        /// Receives [`PointerEventKind::Exit`].
        const EXIT = 1 << 1;
        /// Receives [`PointerEventKind::Down`].
        const DOWN = 1 << 2;
        /// Receives [`PointerEventKind::Up`].
        const UP = 1 << 3;
        /// Receives [`PointerEventKind::Click`].
        const CLICK = 1 << 4;

        /// Hover notifications only.
        const HOVER = Self::ENTER.bits() | Self::EXIT.bits();
        /// Press notifications only.
        const PRESS = Self::DOWN.bits() | Self::UP.bits() | Self::CLICK.bits();
    }
}

impl Capabilities {
    /// The capability bit guarding one event kind.
    pub fn for_kind(kind: PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Enter => Capabilities::ENTER,
            PointerEventKind::Exit => Capabilities::EXIT,
            PointerEventKind::Down => Capabilities::DOWN,
            PointerEventKind::Up => Capabilities::UP,
            PointerEventKind::Click => Capabilities::CLICK,
        }
    }
}

/// An object capable of receiving pointer notifications.
///
/// Each method has a no-op default; implementors override the ones they
/// declare in [`capabilities`](EventTarget::capabilities). Undeclared
/// kinds are never delivered.
pub trait EventTarget {
    /// Which notification kinds this target wants.
    fn capabilities(&self) -> Capabilities;

    /// The ray started intersecting this target.
    fn on_pointer_enter(&mut self, _event: &PointerEvent) {}

    /// The ray stopped intersecting this target.
    fn on_pointer_exit(&mut self, _event: &PointerEvent) {}

    /// The input action was pressed while this target was hovered.
    fn on_pointer_down(&mut self, _event: &PointerEvent) {}

    /// The input action was released after pressing this target.
    fn on_pointer_up(&mut self, _event: &PointerEvent) {}

    /// This target was pressed and released without the ray leaving it.
    fn on_pointer_click(&mut self, _event: &PointerEvent) {}
}
