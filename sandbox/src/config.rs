//! Optional tunables file. A `sandbox.json` next to the binary overrides the
//! built-in constants; a missing file means defaults, a malformed one is a
//! startup error.

use std::fs;

use macroquad::math::Vec2;
use serde::Deserialize;

use tumble::world::{self, World};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub gravity: f32,
    pub air_resistance: f32,
    pub bounce_damping: f32,
    pub floor_drag: f32,
    pub body_size: f32,
    pub start_position: [f32; 2],
    /// Path of the texture drawn for every body; a built-in pattern is used
    /// when absent.
    pub body_texture: Option<String>,
    /// Path of a ttf for the overlay text; macroquad's built-in font when
    /// absent.
    pub label_font: Option<String>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            gravity: world::GRAVITY,
            air_resistance: world::AIR_RESISTANCE,
            bounce_damping: world::BOUNCE_DAMPING,
            floor_drag: world::FLOOR_DRAG,
            body_size: world::BODY_SIZE,
            start_position: [world::START_POS.0, world::START_POS.1],
            body_texture: None,
            label_font: None,
        }
    }
}

impl SandboxConfig {
    /// Reads `path` if it exists.
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).expect("error while parsing the config file"),
            Err(_) => Self::default(),
        }
    }

    /// Copies the tunables onto a fresh world.
    pub fn apply<V: Copy>(&self, world: &mut World<V>) {
        world.physics.gravity = self.gravity;
        world.physics.air_resistance = self.air_resistance;
        world.collision.bounce_damping = self.bounce_damping;
        world.collision.floor_drag = self.floor_drag;
        world.default_size = Vec2::new(self.body_size, self.body_size);
        world.start_pos = Vec2::new(self.start_position[0], self.start_position[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SandboxConfig =
            serde_json::from_str(r#"{ "gravity": 500.0, "body_size": 40.0 }"#).unwrap();
        assert_eq!(config.gravity, 500.0);
        assert_eq!(config.body_size, 40.0);
        assert_eq!(config.air_resistance, world::AIR_RESISTANCE);
        assert!(config.body_texture.is_none());
    }

    #[test]
    fn applies_onto_a_world() {
        let mut w: World<()> = World::new(Vec2::new(800.0, 600.0));
        let mut config = SandboxConfig::default();
        config.gravity = 10.0;
        config.body_size = 40.0;
        config.start_position = [5.0, 6.0];

        config.apply(&mut w);
        assert_eq!(w.physics.gravity, 10.0);
        assert_eq!(w.default_size, Vec2::new(40.0, 40.0));
        assert_eq!(w.start_pos, Vec2::new(5.0, 6.0));
    }
}
