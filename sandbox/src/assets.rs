//! Startup-only asset loading. The world never loads anything itself; it
//! receives the handles built here.

use futures::executor::block_on;
use macroquad::prelude::*;

use crate::config::SandboxConfig;

/// The render handles the sandbox hands to the world and the overlay.
pub struct Assets {
    pub body_texture: Texture2D,
    pub label_font: Option<Font>,
}

impl Assets {
    /// Loads the configured texture and font. A configured path that fails
    /// to load ends the program here with a message; nothing is retried.
    pub fn load(config: &SandboxConfig) -> Self {
        let body_texture = match &config.body_texture {
            Some(path) => block_on(load_texture(path)).expect("could not load the body texture"),
            None => {
                info!("no body texture configured, using the built-in pattern");
                crate_pattern()
            }
        };
        body_texture.set_filter(FilterMode::Nearest);

        let label_font = config
            .label_font
            .as_ref()
            .map(|path| block_on(load_ttf_font(path)).expect("could not load the label font"));

        Self {
            body_texture,
            label_font,
        }
    }
}

/// A plank-and-frame box texture, so the sandbox runs without any files on
/// disk.
fn crate_pattern() -> Texture2D {
    const SIDE: usize = 64;
    let mut bytes = Vec::with_capacity(SIDE * SIDE * 4);
    for y in 0..SIDE {
        for x in 0..SIDE {
            let border = x < 4 || y < 4 || x >= SIDE - 4 || y >= SIDE - 4;
            let diagonal = x.abs_diff(y) < 3 || (SIDE - 1 - x).abs_diff(y) < 3;
            let (r, g, b) = if border {
                (96u8, 60u8, 22u8)
            } else if diagonal {
                (138, 90, 36)
            } else {
                (181, 124, 52)
            };
            bytes.extend_from_slice(&[r, g, b, 255]);
        }
    }
    Texture2D::from_rgba8(SIDE as u16, SIDE as u16, &bytes)
}
