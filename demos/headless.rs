//! Headless scripted run of the pointer engine.
//!
//! Drives a small button scene through a fixed gaze-and-click script with
//! no window or physics attached, streaming every notification to a JSONL
//! log. Useful for smoke-testing the full stack: bindings -> signals ->
//! ray -> transitions -> widget state.

use anyhow::Result;
use glam::Vec3;
use raypoint::{
    ActionInput, Button, InputBinding, InteractionScene, PointerEvent, PointerEventKind,
    PointerSettings, RayPointer, TargetId, TargetRegistry,
};
use raypoint_testkit::{JsonlSink, PointerEventRecord, ScriptedHitTester};
use tracing::{info, warn};
use winit::event::MouseButton;

/// Wraps the button registry so every delivery also lands in the event
/// log.
struct StreamingScene {
    registry: TargetRegistry<Button>,
    sink: JsonlSink,
    tick: u64,
}

impl InteractionScene for StreamingScene {
    fn parent_of(&self, target: TargetId) -> Option<TargetId> {
        self.registry.parent_of(target)
    }

    fn handles(&self, target: TargetId, kind: PointerEventKind) -> bool {
        self.registry.handles(target, kind)
    }

    fn deliver(&mut self, target: TargetId, kind: PointerEventKind, event: &PointerEvent) {
        let record = PointerEventRecord {
            tick: self.tick,
            kind: kind.label(),
            target: target.0,
        };
        if let Err(err) = self.sink.write(&record) {
            warn!("Failed to write event record: {err}");
        }
        self.registry.deliver(target, kind, event);
    }
}

/// One scripted tick: where the ray lands, a mouse delta, and whether the
/// primary button goes down or up.
struct Step {
    gaze_at: Option<usize>,
    look: (f32, f32),
    press: bool,
    release: bool,
}

impl Step {
    fn idle(gaze_at: Option<usize>) -> Self {
        Self {
            gaze_at,
            look: (0.0, 0.0),
            press: false,
            release: false,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    raypoint::init()?;

    let settings = PointerSettings::load();

    let mut registry = TargetRegistry::new();
    let start = registry.register(Button::new("Start").with_callback(1));
    let quit = registry.register(Button::new("Quit").with_callback(2));
    let buttons = [start, quit];

    let log_path = std::env::temp_dir().join("raypoint-headless.jsonl");
    let mut scene = StreamingScene {
        registry,
        sink: JsonlSink::create(&log_path)?,
        tick: 0,
    };

    let mut emulator = settings.pose_emulator(Vec3::ZERO);
    let mut pointer = RayPointer::new(settings.pointer_config())?;
    let mut input = ActionInput::new(settings.pointer_bindings());

    // Gaze at Start, click it, drift off into empty space, then click Quit.
    let script = [
        Step::idle(None),
        Step {
            look: (12.0, -4.0),
            ..Step::idle(Some(0))
        },
        Step {
            press: true,
            ..Step::idle(Some(0))
        },
        Step {
            release: true,
            ..Step::idle(Some(0))
        },
        Step {
            look: (30.0, 0.0),
            ..Step::idle(None)
        },
        Step::idle(Some(1)),
        Step {
            press: true,
            release: true,
            ..Step::idle(Some(1))
        },
    ];

    let frames = script
        .iter()
        .map(|step| {
            step.gaze_at
                .map(|index| ScriptedHitTester::hit(buttons[index], 5.0))
        })
        .collect();
    let hits = ScriptedHitTester::new(frames);

    for (tick, step) in script.iter().enumerate() {
        scene.tick = tick as u64;
        input.begin_frame();
        if step.press {
            input.apply(InputBinding::Mouse(MouseButton::Left), true);
        }
        if step.release {
            input.apply(InputBinding::Mouse(MouseButton::Left), false);
        }
        emulator.apply_look(step.look.0, step.look.1);

        pointer.tick(&mut scene, &hits, emulator.ray(), input.signal(&settings.action));

        info!(
            tick,
            hover = ?pointer.hover_target(),
            pressed = ?pointer.pressed_target(),
            line_end = ?pointer.line_endpoint(),
            "tick complete"
        );
    }

    for id in buttons {
        let button = scene.registry.get_mut(id).expect("button still registered");
        let clicks = button.take_clicks();
        info!(
            label = button.label.as_str(),
            callback = ?button.callback_id,
            clicks,
            "button summary"
        );
    }
    info!("Event log written to {}", log_path.display());

    Ok(())
}
