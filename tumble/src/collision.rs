//! # Arena collision
//!
//! Keeps bodies inside the arena walls and separates overlapping pairs.
//! Walls clamp and reflect with damping; pairs separate along the axis of
//! least penetration and exchange velocity on that axis. One pass per frame
//! over every unordered pair, no relaxation: deeply overlapping stacks finish
//! separating over the following frames.

use macroquad::math::Vec2;

use crate::body::Body;

/// Which walls a body responded to this step. A corner contact sets two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallHits {
    pub floor: bool,
    pub ceiling: bool,
    pub left: bool,
    pub right: bool,
}

/// Wall and pair resolution inside a fixed arena.
#[derive(Clone, Copy, Debug)]
pub struct ArenaCollision {
    /// Arena extent; the playfield is (0, 0)..arena.
    pub arena: Vec2,
    /// Rebound velocity multiplier, kept in [0, 1.5] by the world. Values
    /// above 1 add energy on each bounce.
    pub bounce_damping: f32,
    /// Horizontal velocity multiplier while touching the floor.
    pub floor_drag: f32,
}

impl ArenaCollision {
    /// Clamp-and-reflect against each wall, checked independently in a fixed
    /// order: floor, ceiling, left, right.
    pub fn resolve_walls<V>(&self, body: &mut Body<V>) -> WallHits {
        let mut hits = WallHits::default();
        if body.pos.y + body.size.y > self.arena.y {
            body.pos.y = self.arena.y - body.size.y;
            body.vel.y = -body.vel.y * self.bounce_damping;
            body.vel.x *= self.floor_drag;
            hits.floor = true;
        }
        if body.pos.y < 0.0 {
            body.pos.y = 0.0;
            body.vel.y = -body.vel.y * self.bounce_damping;
            hits.ceiling = true;
        }
        if body.pos.x < 0.0 {
            body.pos.x = 0.0;
            body.vel.x = -body.vel.x * self.bounce_damping;
            hits.left = true;
        }
        if body.pos.x + body.size.x > self.arena.x {
            body.pos.x = self.arena.x - body.size.x;
            body.vel.x = -body.vel.x * self.bounce_damping;
            hits.right = true;
        }
        hits
    }

    /// Resolve every unordered pair once, in world order.
    pub fn resolve_pairs<V>(&self, bodies: &mut [Body<V>]) {
        for i in 0..bodies.len() {
            for j in i + 1..bodies.len() {
                let (head, tail) = bodies.split_at_mut(j);
                self.resolve_pair(&mut head[i], &mut tail[0]);
            }
        }
    }

    /// Separate one overlapping pair along the axis of least penetration
    /// (ties go to Y) and swap the velocity components on that axis, damping
    /// both. Each body moves half the overlap; bodies are equal-mass.
    pub fn resolve_pair<V>(&self, a: &mut Body<V>, b: &mut Body<V>) {
        let overlap = match overlap_extent(a, b) {
            Some(extent) => extent,
            None => return,
        };
        if overlap.x < overlap.y {
            let push = overlap.x * 0.5;
            if a.pos.x < b.pos.x {
                a.pos.x -= push;
                b.pos.x += push;
            } else {
                a.pos.x += push;
                b.pos.x -= push;
            }
            let (va, vb) = (a.vel.x, b.vel.x);
            a.vel.x = vb * self.bounce_damping;
            b.vel.x = va * self.bounce_damping;
        } else {
            let push = overlap.y * 0.5;
            if a.pos.y < b.pos.y {
                a.pos.y -= push;
                b.pos.y += push;
            } else {
                a.pos.y += push;
                b.pos.y -= push;
            }
            let (va, vb) = (a.vel.y, b.vel.y);
            a.vel.y = vb * self.bounce_damping;
            b.vel.y = va * self.bounce_damping;
        }
    }
}

/// Overlap extent of two bounding boxes, or `None` when they are apart.
/// Touching edges do not count as overlap.
fn overlap_extent<V>(a: &Body<V>, b: &Body<V>) -> Option<Vec2> {
    let w = (a.pos.x + a.size.x).min(b.pos.x + b.size.x) - a.pos.x.max(b.pos.x);
    let h = (a.pos.y + a.size.y).min(b.pos.y + b.size.y) - a.pos.y.max(b.pos.y);
    if w > 0.0 && h > 0.0 {
        Some(Vec2::new(w, h))
    } else {
        None
    }
}
