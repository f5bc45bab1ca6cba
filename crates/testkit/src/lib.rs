#![warn(missing_docs)]
//! Deterministic test surfaces for driving the pointer engine without a
//! host engine: scripted hit results, an event-recording scene, and a
//! JSONL sink for headless runs.

use glam::Vec3;
use raypoint_core::{HitTester, LayerMask, Ray, RayHit, TargetId};
use raypoint_events::{Capabilities, InteractionScene, PointerEvent, PointerEventKind};
use serde::Serialize;
use std::cell::Cell;
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Hit tester that replays a pre-programmed result per cast.
///
/// Each call to [`HitTester::cast`] consumes the next scripted frame;
/// casts past the end of the script report no hit. The scripted results
/// are returned as-is, ignoring distance and mask, so tests control
/// outcomes exactly.
pub struct ScriptedHitTester {
    frames: Vec<Option<RayHit>>,
    cursor: Cell<usize>,
}

impl ScriptedHitTester {
    /// Create a tester replaying `frames` in order.
    pub fn new(frames: Vec<Option<RayHit>>) -> Self {
        Self {
            frames,
            cursor: Cell::new(0),
        }
    }

    /// Convenience hit record: `target` at `distance` straight down the
    /// -Z axis, facing back at the origin.
    pub fn hit(target: TargetId, distance: f32) -> RayHit {
        RayHit {
            target,
            distance,
            point: Vec3::new(0.0, 0.0, -distance),
            normal: Vec3::Z,
        }
    }

    /// Number of scripted frames not yet consumed.
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor.get())
    }
}

impl HitTester for ScriptedHitTester {
    fn cast(&self, _ray: Ray, _max_distance: f32, _mask: LayerMask) -> Option<RayHit> {
        let index = self.cursor.get();
        self.cursor.set(index + 1);
        self.frames.get(index).copied().flatten()
    }
}

/// One notification observed by a [`RecordingScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delivered {
    /// Target the notification was delivered to.
    pub target: TargetId,
    /// Notification kind.
    pub kind: PointerEventKind,
    /// The full event record as delivered.
    pub event: PointerEvent,
}

struct SceneEntry {
    parent: Option<TargetId>,
    caps: Capabilities,
}

/// An [`InteractionScene`] that records every delivery in order.
///
/// Targets are plain capability masks with optional parents; there are no
/// handler objects, so assertions stay on the notification stream itself.
pub struct RecordingScene {
    targets: HashMap<TargetId, SceneEntry>,
    next_id: u64,
    log: Vec<Delivered>,
}

impl Default for RecordingScene {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            next_id: 1,
            log: Vec::new(),
        }
    }

    /// Add a top-level target with the given capabilities.
    pub fn add_target(&mut self, caps: Capabilities) -> TargetId {
        self.add(None, caps)
    }

    /// Add a target nested under `parent`.
    pub fn add_child(&mut self, parent: TargetId, caps: Capabilities) -> TargetId {
        self.add(Some(parent), caps)
    }

    fn add(&mut self, parent: Option<TargetId>, caps: Capabilities) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.targets.insert(id, SceneEntry { parent, caps });
        id
    }

    /// Everything delivered so far, in order.
    pub fn events(&self) -> &[Delivered] {
        &self.log
    }

    /// Drain the recorded deliveries, leaving the scene ready for the
    /// next tick's assertions.
    pub fn take_events(&mut self) -> Vec<Delivered> {
        std::mem::take(&mut self.log)
    }

    /// The delivery stream reduced to `(target, kind)` pairs.
    pub fn timeline(&self) -> Vec<(TargetId, PointerEventKind)> {
        self.log.iter().map(|d| (d.target, d.kind)).collect()
    }
}

impl InteractionScene for RecordingScene {
    fn parent_of(&self, target: TargetId) -> Option<TargetId> {
        self.targets.get(&target).and_then(|entry| entry.parent)
    }

    fn handles(&self, target: TargetId, kind: PointerEventKind) -> bool {
        self.targets
            .get(&target)
            .is_some_and(|entry| entry.caps.contains(Capabilities::for_kind(kind)))
    }

    fn deliver(&mut self, target: TargetId, kind: PointerEventKind, event: &PointerEvent) {
        self.log.push(Delivered {
            target,
            kind,
            event: *event,
        });
    }
}

/// Pointer notification record captured by headless runs.
#[derive(Debug, Serialize)]
pub struct PointerEventRecord<'a> {
    /// Simulation tick when the notification fired.
    pub tick: u64,
    /// Notification kind label.
    pub kind: &'a str,
    /// Target the notification was delivered to.
    pub target: u64,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append an event to the log.
    pub fn write(&mut self, record: &PointerEventRecord<'_>) -> anyhow::Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}
