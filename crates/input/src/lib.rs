#![warn(missing_docs)]
//! Named-action input with per-frame press/release edges.
//!
//! The pointer engine consumes two booleans per tick: "the action was
//! pressed this frame" and "the action was released this frame". This
//! crate derives them from winit window events through a small binding
//! table, so hosts configure "primary" once and never touch key codes.

use std::collections::{HashMap, HashSet};
use tracing::warn;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A physical input a named action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// A keyboard key.
    Key(KeyCode),
    /// A mouse button.
    Mouse(MouseButton),
}

/// Edge-triggered input signals for one action on one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressSignal {
    /// The action was pressed this tick.
    pub pressed: bool,
    /// The action was released this tick.
    pub released: bool,
}

impl PressSignal {
    /// Signal with neither edge set (the common case).
    pub const IDLE: Self = Self {
        pressed: false,
        released: false,
    };

    /// Press edge only.
    pub const PRESS: Self = Self {
        pressed: true,
        released: false,
    };

    /// Release edge only.
    pub const RELEASE: Self = Self {
        pressed: false,
        released: true,
    };
}

/// Maps action names to the physical inputs that trigger them.
#[derive(Debug, Clone)]
pub struct PointerBindings {
    map: HashMap<String, Vec<InputBinding>>,
}

/// Name of the press/release action the pointer engine listens to.
pub const PRIMARY_ACTION: &str = "primary";

impl Default for PointerBindings {
    fn default() -> Self {
        let mut map = HashMap::new();
        map.insert(
            PRIMARY_ACTION.to_string(),
            vec![
                InputBinding::Mouse(MouseButton::Left),
                InputBinding::Key(KeyCode::ControlLeft),
            ],
        );
        Self { map }
    }
}

impl PointerBindings {
    /// Apply binding overrides from configuration. Each entry replaces the
    /// full binding list for its action; unknown tokens are skipped with a
    /// warning.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, Vec<String>>) {
        for (action, tokens) in overrides {
            let bindings = parse_bindings(tokens);
            if bindings.is_empty() {
                warn!("No valid bindings for action '{}'; keeping defaults", action);
                continue;
            }
            self.map.insert(action.clone(), bindings);
        }
    }

    /// Bindings registered for `action`.
    pub fn bindings_for(&self, action: &str) -> &[InputBinding] {
        self.map.get(action).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Tracks binding state across frames and exposes per-frame edges.
#[derive(Debug, Default)]
pub struct ActionInput {
    bindings: PointerBindings,
    held: HashSet<InputBinding>,
    just_pressed: HashSet<InputBinding>,
    just_released: HashSet<InputBinding>,
}

impl ActionInput {
    /// Create an input tracker with the given bindings.
    pub fn new(bindings: PointerBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Process a window event to update binding state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(keycode),
                        state,
                        ..
                    },
                ..
            } => {
                self.apply(
                    InputBinding::Key(*keycode),
                    *state == ElementState::Pressed,
                );
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.apply(
                    InputBinding::Mouse(*button),
                    *state == ElementState::Pressed,
                );
            }
            _ => {}
        }
    }

    /// Record a binding transition directly. `handle_event` routes here;
    /// scripted and headless drivers call it without a window.
    pub fn apply(&mut self, binding: InputBinding, pressed: bool) {
        if pressed {
            // Key repeat delivers pressed events while held; only the
            // first one is an edge.
            if self.held.insert(binding) {
                self.just_pressed.insert(binding);
            }
        } else if self.held.remove(&binding) {
            self.just_released.insert(binding);
        }
    }

    /// Reset per-frame edges (call at the start of each frame).
    pub fn begin_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Whether any binding of `action` is currently held.
    pub fn is_held(&self, action: &str) -> bool {
        self.bindings
            .bindings_for(action)
            .iter()
            .any(|binding| self.held.contains(binding))
    }

    /// Whether `action` was pressed this frame.
    pub fn just_pressed(&self, action: &str) -> bool {
        self.bindings
            .bindings_for(action)
            .iter()
            .any(|binding| self.just_pressed.contains(binding))
    }

    /// Whether `action` was released this frame.
    pub fn just_released(&self, action: &str) -> bool {
        self.bindings
            .bindings_for(action)
            .iter()
            .any(|binding| self.just_released.contains(binding))
    }

    /// The per-tick signal pair for `action`.
    pub fn signal(&self, action: &str) -> PressSignal {
        PressSignal {
            pressed: self.just_pressed(action),
            released: self.just_released(action),
        }
    }
}

fn parse_bindings(tokens: &[String]) -> Vec<InputBinding> {
    tokens
        .iter()
        .filter_map(|token| {
            parse_binding(token).or_else(|| {
                warn!("Unknown binding token '{}'; ignoring", token);
                None
            })
        })
        .collect()
}

/// Parse one binding token from configuration.
pub fn parse_binding(token: &str) -> Option<InputBinding> {
    if let Some(key) = parse_key_code(token) {
        return Some(InputBinding::Key(key));
    }
    match token {
        "MouseLeft" => Some(InputBinding::Mouse(MouseButton::Left)),
        "MouseRight" => Some(InputBinding::Mouse(MouseButton::Right)),
        "MouseMiddle" => Some(InputBinding::Mouse(MouseButton::Middle)),
        _ => None,
    }
}

fn parse_key_code(name: &str) -> Option<KeyCode> {
    Some(match name {
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyR" => KeyCode::KeyR,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "Tab" => KeyCode::Tab,
        _ => return None,
    })
}
