//! A handle-keyed registry of interactive targets with parent links.

use crate::dispatch::InteractionScene;
use crate::event::{PointerEvent, PointerEventKind};
use crate::target::{Capabilities, EventTarget};
use raypoint_core::TargetId;
use std::collections::HashMap;

struct Entry<T> {
    parent: Option<TargetId>,
    handler: T,
}

/// Owns interactive objects and their containment hierarchy, and exposes
/// them to the pointer engine as an [`InteractionScene`].
///
/// Hosts with their own scene graph implement [`InteractionScene`]
/// directly; this registry covers everything else. Use
/// `TargetRegistry<Box<dyn EventTarget>>` to mix handler types.
pub struct TargetRegistry<T> {
    entries: HashMap<TargetId, Entry<T>>,
    next_id: u64,
}

impl<T: EventTarget> TargetRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register a top-level target and return its identity.
    pub fn register(&mut self, handler: T) -> TargetId {
        self.register_with_parent(None, handler)
    }

    /// Register a target nested under `parent`.
    pub fn register_child(&mut self, parent: TargetId, handler: T) -> TargetId {
        self.register_with_parent(Some(parent), handler)
    }

    fn register_with_parent(&mut self, parent: Option<TargetId>, handler: T) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Entry { parent, handler });
        id
    }

    /// Re-parent a target. `None` detaches it from its parent.
    pub fn set_parent(&mut self, target: TargetId, parent: Option<TargetId>) {
        if let Some(entry) = self.entries.get_mut(&target) {
            entry.parent = parent;
        }
    }

    /// Remove a target. Children keep their parent link; lookups through
    /// a removed parent simply stop there.
    pub fn remove(&mut self, target: TargetId) -> Option<T> {
        self.entries.remove(&target).map(|entry| entry.handler)
    }

    /// Borrow a registered handler.
    pub fn get(&self, target: TargetId) -> Option<&T> {
        self.entries.get(&target).map(|entry| &entry.handler)
    }

    /// Mutably borrow a registered handler.
    pub fn get_mut(&mut self, target: TargetId) -> Option<&mut T> {
        self.entries.get_mut(&target).map(|entry| &mut entry.handler)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: EventTarget> Default for TargetRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EventTarget> InteractionScene for TargetRegistry<T> {
    fn parent_of(&self, target: TargetId) -> Option<TargetId> {
        self.entries.get(&target).and_then(|entry| entry.parent)
    }

    fn handles(&self, target: TargetId, kind: PointerEventKind) -> bool {
        self.entries.get(&target).is_some_and(|entry| {
            entry
                .handler
                .capabilities()
                .contains(Capabilities::for_kind(kind))
        })
    }

    fn deliver(&mut self, target: TargetId, kind: PointerEventKind, event: &PointerEvent) {
        let Some(entry) = self.entries.get_mut(&target) else {
            return;
        };
        match kind {
            PointerEventKind::Enter => entry.handler.on_pointer_enter(event),
            PointerEventKind::Exit => entry.handler.on_pointer_exit(event),
            PointerEventKind::Down => entry.handler.on_pointer_down(event),
            PointerEventKind::Up => entry.handler.on_pointer_up(event),
            PointerEventKind::Click => entry.handler.on_pointer_click(event),
        }
    }
}

impl<T: EventTarget + ?Sized> EventTarget for Box<T> {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn on_pointer_enter(&mut self, event: &PointerEvent) {
        (**self).on_pointer_enter(event)
    }

    fn on_pointer_exit(&mut self, event: &PointerEvent) {
        (**self).on_pointer_exit(event)
    }

    fn on_pointer_down(&mut self, event: &PointerEvent) {
        (**self).on_pointer_down(event)
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) {
        (**self).on_pointer_up(event)
    }

    fn on_pointer_click(&mut self, event: &PointerEvent) {
        (**self).on_pointer_click(event)
    }
}
