//! A ready-made interactive button driven by pointer notifications.

use crate::event::PointerEvent;
use crate::target::{Capabilities, EventTarget};

/// Button state for visual feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Not interacted with.
    Normal,
    /// The pointer ray is on the button.
    Hovered,
    /// The button is being pressed.
    Pressed,
    /// The button ignores all pointer input.
    Disabled,
}

/// Color scheme for button states.
#[derive(Debug, Clone, Copy)]
pub struct ButtonColors {
    /// Normal state color.
    pub normal: [f32; 4],
    /// Hovered state color.
    pub hovered: [f32; 4],
    /// Pressed state color.
    pub pressed: [f32; 4],
    /// Disabled state color.
    pub disabled: [f32; 4],
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            normal: [0.8, 0.8, 0.8, 1.0],   // Light gray
            hovered: [1.0, 1.0, 0.6, 1.0],  // Yellow
            pressed: [0.6, 0.6, 1.0, 1.0],  // Blue
            disabled: [0.5, 0.5, 0.5, 0.5], // Dark gray, semi-transparent
        }
    }
}

/// Interactive button with a text label.
///
/// State transitions are driven entirely by the pointer notifications it
/// receives; hosts read back [`state`](Button::state) for rendering and
/// [`take_clicks`](Button::take_clicks) for activation.
#[derive(Debug, Clone)]
pub struct Button {
    /// Button label text.
    pub label: String,

    /// Current button state.
    state: ButtonState,

    /// Color scheme for different states.
    pub colors: ButtonColors,

    /// Optional callback ID (for application-level handling).
    pub callback_id: Option<u32>,

    /// Clicks received since the last [`take_clicks`](Button::take_clicks).
    clicks: u32,
}

impl Button {
    /// Create a new button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: ButtonState::Normal,
            colors: ButtonColors::default(),
            callback_id: None,
            clicks: 0,
        }
    }

    /// Builder: set color scheme.
    pub fn with_colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    /// Builder: set callback ID.
    pub fn with_callback(mut self, id: u32) -> Self {
        self.callback_id = Some(id);
        self
    }

    /// Current button state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Get current color based on state.
    pub fn current_color(&self) -> [f32; 4] {
        match self.state {
            ButtonState::Normal => self.colors.normal,
            ButtonState::Hovered => self.colors.hovered,
            ButtonState::Pressed => self.colors.pressed,
            ButtonState::Disabled => self.colors.disabled,
        }
    }

    /// Disable the button. Disabled buttons report no capabilities, so
    /// hierarchy dispatch passes over them.
    pub fn disable(&mut self) {
        self.state = ButtonState::Disabled;
    }

    /// Re-enable a disabled button.
    pub fn enable(&mut self) {
        if self.state == ButtonState::Disabled {
            self.state = ButtonState::Normal;
        }
    }

    /// Whether the button currently reacts to pointer input.
    pub fn is_interactable(&self) -> bool {
        self.state != ButtonState::Disabled
    }

    /// Clicks received since the last call, resetting the count.
    pub fn take_clicks(&mut self) -> u32 {
        std::mem::take(&mut self.clicks)
    }
}

impl EventTarget for Button {
    fn capabilities(&self) -> Capabilities {
        if self.is_interactable() {
            Capabilities::all()
        } else {
            Capabilities::empty()
        }
    }

    fn on_pointer_enter(&mut self, _event: &PointerEvent) {
        self.state = ButtonState::Hovered;
    }

    fn on_pointer_exit(&mut self, _event: &PointerEvent) {
        self.state = ButtonState::Normal;
    }

    fn on_pointer_down(&mut self, _event: &PointerEvent) {
        self.state = ButtonState::Pressed;
    }

    fn on_pointer_up(&mut self, _event: &PointerEvent) {
        // Still hovered if the ray is on us; the engine sends exit
        // separately when it is not.
        if self.state == ButtonState::Pressed {
            self.state = ButtonState::Hovered;
        }
    }

    fn on_pointer_click(&mut self, _event: &PointerEvent) {
        self.clicks += 1;
    }
}
