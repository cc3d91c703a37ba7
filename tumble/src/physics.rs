//! # Integration
//!
//! The integrator communicates that gravity and air drag govern the movement
//! of every body not pinned to the pointer. Semi-implicit Euler: velocity is
//! updated first, and the fresh velocity moves the body.

use crate::body::Body;

/// Gravity plus uniform air drag.
#[derive(Clone, Copy, Debug)]
pub struct Integrator {
    /// Downward acceleration, units/s².
    pub gravity: f32,
    /// Velocity multiplier applied every step; below 1 bleeds energy.
    pub air_resistance: f32,
}

impl Integrator {
    /// Advance one body by `dt` seconds. Order is fixed: gravity, then air
    /// drag, then the position update from the damped velocity. A dt of zero
    /// leaves the position untouched and only applies the drag multiply; dt
    /// is never divided by.
    pub fn update<V>(&self, body: &mut Body<V>, dt: f32) {
        body.vel.y += self.gravity * dt;
        body.vel *= self.air_resistance;
        body.pos += body.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn body_at(x: f32, y: f32) -> Body<()> {
        Body::new(Vec2::new(x, y), Vec2::new(100.0, 100.0), ())
    }

    #[test]
    fn gravity_updates_velocity_before_position() {
        let physics = Integrator {
            gravity: 981.0,
            air_resistance: 0.988,
        };
        let mut body = body_at(350.0, 50.0);
        physics.update(&mut body, DT);

        let expected_vel = 981.0 * DT * 0.988;
        assert!((body.vel.y - expected_vel).abs() < 1e-4);
        assert!((body.pos.y - (50.0 + expected_vel * DT)).abs() < 1e-4);
        assert_eq!(body.vel.x, 0.0);
        assert_eq!(body.pos.x, 350.0);
    }

    #[test]
    fn air_drag_applies_to_both_components() {
        let physics = Integrator {
            gravity: 0.0,
            air_resistance: 0.5,
        };
        let mut body = body_at(0.0, 0.0);
        body.vel = Vec2::new(100.0, -40.0);
        physics.update(&mut body, DT);
        assert_eq!(body.vel, Vec2::new(50.0, -20.0));
    }

    #[test]
    fn zero_dt_only_applies_drag() {
        let physics = Integrator {
            gravity: 981.0,
            air_resistance: 0.5,
        };
        let mut body = body_at(10.0, 20.0);
        body.vel = Vec2::new(30.0, 40.0);
        physics.update(&mut body, 0.0);
        assert_eq!(body.pos, Vec2::new(10.0, 20.0));
        assert_eq!(body.vel, Vec2::new(15.0, 20.0));
    }
}
