//! Render-side overlays: the controls legend and per-body speed labels. The
//! world owns the visibility flags; everything else here is display state.

use macroquad::prelude::*;

use tumble::world::World;

/// Per-frame smoothing factor for the speed labels.
const SPEED_SMOOTHING: f32 = 0.2;

const LEGEND: &[&str] = &[
    "left drag    move a box",
    "right click  spawn a box",
    "wheel        bounciness +/- 0.05",
    "R            reset",
    "L            toggle this legend",
    "V            toggle speed labels",
];

pub struct Overlay {
    font: Option<Font>,
    speeds: Vec<f32>,
}

impl Overlay {
    pub fn new(font: Option<Font>) -> Self {
        Self {
            font,
            speeds: Vec::new(),
        }
    }

    /// Folds this frame's body speeds into the moving averages. Bodies added
    /// since the last frame start from zero; a reset truncates the list.
    pub fn track<V: Copy>(&mut self, world: &World<V>) {
        self.speeds.resize(world.bodies.len(), 0.0);
        for (smoothed, body) in self.speeds.iter_mut().zip(world.bodies.iter()) {
            *smoothed += (body.vel.length() - *smoothed) * SPEED_SMOOTHING;
        }
    }

    pub fn draw<V: Copy>(&self, world: &World<V>) {
        if world.legend_visible {
            let mut y = 24.0;
            self.text(
                &format!("bounciness {:.2}", world.collision.bounce_damping),
                12.0,
                y,
            );
            y += 20.0;
            for line in LEGEND {
                self.text(line, 12.0, y);
                y += 20.0;
            }
        }
        if world.speed_labels {
            for (smoothed, body) in self.speeds.iter().zip(world.bodies.iter()) {
                self.text(&format!("{:.0}", smoothed), body.pos.x, body.pos.y - 6.0);
            }
        }
    }

    fn text(&self, text: &str, x: f32, y: f32) {
        match self.font {
            Some(font) => draw_text_ex(
                text,
                x,
                y,
                TextParams {
                    font,
                    font_size: 16,
                    color: WHITE,
                    ..Default::default()
                },
            ),
            None => draw_text(text, x, y, 16.0, WHITE),
        }
    }
}
