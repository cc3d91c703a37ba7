//! # Sandbox control
//!
//! Maps raw macroquad input onto the sandbox's high-level actions once per
//! frame. The world consumes the resulting [FrameInput] snapshot and never
//! touches the input device itself.

use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, is_mouse_button_released, mouse_position,
    mouse_wheel, KeyCode, MouseButton,
};
use macroquad::math::Vec2;

/// High-level actions a key can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Reset,
    ToggleLegend,
    ToggleSpeedLabels,
    Quit,
}

/// Key-to-action bindings.
pub struct KeyMap {
    bindings: Vec<(KeyCode, Action)>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// The sandbox bindings: R resets, L and V flip the overlays, Escape
    /// quits.
    pub fn sandbox_defaults() -> Self {
        let mut map = Self::new();
        map.add_key_map(KeyCode::R, Action::Reset);
        map.add_key_map(KeyCode::L, Action::ToggleLegend);
        map.add_key_map(KeyCode::V, Action::ToggleSpeedLabels);
        map.add_key_map(KeyCode::Escape, Action::Quit);
        map
    }

    /// Adds a single key binding.
    pub fn add_key_map(&mut self, keycode: KeyCode, action: Action) {
        self.bindings.push((keycode, action));
    }
}

/// Everything the world reads from the input device in one frame: the
/// pointer sampled once, button edges, wheel movement, and the key actions
/// that fired.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub pointer: Vec2,
    /// Left button went down this frame.
    pub grab: bool,
    /// Left button came up this frame.
    pub release: bool,
    /// Right button went down this frame.
    pub spawn: bool,
    /// Vertical wheel movement.
    pub wheel: f32,
    pub actions: Vec<Action>,
}

impl FrameInput {
    /// Snapshot the current frame's input.
    pub fn poll(map: &KeyMap) -> Self {
        let (x, y) = mouse_position();
        let actions = map
            .bindings
            .iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|(_, action)| *action)
            .collect();
        Self {
            pointer: Vec2::new(x, y),
            grab: is_mouse_button_pressed(MouseButton::Left),
            release: is_mouse_button_released(MouseButton::Left),
            spawn: is_mouse_button_pressed(MouseButton::Right),
            wheel: mouse_wheel().1,
            actions,
        }
    }

    /// A quiet frame with the pointer at `pointer`.
    pub fn idle(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    pub fn wants_quit(&self) -> bool {
        self.actions.contains(&Action::Quit)
    }
}
