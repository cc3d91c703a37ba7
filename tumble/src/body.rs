//! Bodies are the rectangular objects the sandbox simulates. A body is pure
//! state; the logics in [crate::physics] and [crate::collision] move it, and
//! the render layer draws it through its visual handle.

use macroquad::math::{Rect, Vec2};

/// A rectangular rigid body. `V` is an opaque handle to whatever the render
/// layer draws for this body (a texture in the sandbox app, `()` in tests);
/// the body references the visual but never touches it.
pub struct Body<V> {
    /// Top-left corner, in arena coordinates.
    pub pos: Vec2,
    /// Extent (width, height). Fixed at spawn.
    pub size: Vec2,
    /// Units per second.
    pub vel: Vec2,
    /// Position at the start of the current drag step; the throw velocity is
    /// derived from the displacement since then.
    pub last_pos: Vec2,
    pub visual: V,
}

impl<V> Body<V> {
    pub fn new(pos: Vec2, size: Vec2, visual: V) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            last_pos: pos,
            visual,
        }
    }

    /// The body's bounding box, `[pos, pos + size]`.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Pointer-drag kinematics: the body centers itself on the pointer and
    /// its velocity becomes the finite difference of the displacement. With
    /// dt == 0 the velocity keeps its previous value.
    pub fn drag_to(&mut self, pointer: Vec2, dt: f32) {
        self.last_pos = self.pos;
        self.pos = pointer - self.size * 0.5;
        if dt > 0.0 {
            self.vel = (self.pos - self.last_pos) / dt;
        }
    }
}
