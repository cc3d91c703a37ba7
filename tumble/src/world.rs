//! # Sandbox world
//!
//! The owned aggregate the whole simulation lives in: the ordered body list,
//! the grabbed-body handle, the integrator and collision tunables, and the
//! per-frame step pipeline. One step is: commands, then integration of the
//! free bodies, the pointer drag, wall resolution, and the pair pass.

use macroquad::math::Vec2;

use crate::body::Body;
use crate::collision::ArenaCollision;
use crate::control::{Action, FrameInput};
use crate::physics::Integrator;

/// Downward acceleration, units/s².
pub const GRAVITY: f32 = 981.0;
/// Uniform velocity multiplier per step.
pub const AIR_RESISTANCE: f32 = 0.988;
/// Default rebound multiplier.
pub const BOUNCE_DAMPING: f32 = 0.8;
/// Horizontal multiplier while resting on the floor.
pub const FLOOR_DRAG: f32 = 0.98;
/// Bounciness change per wheel tick.
pub const BOUNCE_STEP: f32 = 0.05;
/// Upper bound for bounciness.
pub const MAX_BOUNCE: f32 = 1.5;
/// Default body edge length.
pub const BODY_SIZE: f32 = 100.0;
/// Where the reset body appears.
pub const START_POS: (f32, f32) = (350.0, 250.0);

pub struct World<V> {
    /// Bodies in spawn order. The order is the grab tie-break and the pair
    /// iteration order.
    pub bodies: Vec<Body<V>>,
    /// The body pinned to the pointer, if any. At most one body is ever
    /// grabbed.
    pub grabbed: Option<usize>,
    pub physics: Integrator,
    pub collision: ArenaCollision,
    /// Renderer-only flag: draw the controls legend.
    pub legend_visible: bool,
    /// Renderer-only flag: draw per-body speed labels.
    pub speed_labels: bool,
    pub default_size: Vec2,
    pub start_pos: Vec2,
}

impl<V: Copy> World<V> {
    pub fn new(arena: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            grabbed: None,
            physics: Integrator {
                gravity: GRAVITY,
                air_resistance: AIR_RESISTANCE,
            },
            collision: ArenaCollision {
                arena,
                bounce_damping: BOUNCE_DAMPING,
                floor_drag: FLOOR_DRAG,
            },
            legend_visible: true,
            speed_labels: false,
            default_size: Vec2::new(BODY_SIZE, BODY_SIZE),
            start_pos: Vec2::new(START_POS.0, START_POS.1),
        }
    }

    /// One frame of simulation. Commands apply first, then the free bodies
    /// integrate, the grabbed body tracks the pointer, walls resolve, and
    /// finally every pair resolves once.
    pub fn step(&mut self, dt: f32, input: &FrameInput, visual: V) {
        for action in &input.actions {
            match action {
                Action::Reset => self.reset(visual),
                Action::ToggleLegend => self.legend_visible = !self.legend_visible,
                Action::ToggleSpeedLabels => self.speed_labels = !self.speed_labels,
                Action::Quit => {}
            }
        }
        if input.wheel != 0.0 {
            self.adjust_bounciness(input.wheel * BOUNCE_STEP);
        }
        if input.grab {
            self.grab(input.pointer);
        }
        if input.release {
            self.release();
        }
        if input.spawn {
            self.spawn(input.pointer, visual);
        }

        let physics = self.physics;
        for (i, body) in self.bodies.iter_mut().enumerate() {
            if self.grabbed == Some(i) {
                continue;
            }
            physics.update(body, dt);
        }
        if let Some(i) = self.grabbed {
            self.bodies[i].drag_to(input.pointer, dt);
        }
        let collision = self.collision;
        for (i, body) in self.bodies.iter_mut().enumerate() {
            if self.grabbed == Some(i) {
                continue;
            }
            collision.resolve_walls(body);
        }
        collision.resolve_pairs(&mut self.bodies);
    }

    /// Append a body at `pos` with the default size and zero velocity.
    pub fn spawn(&mut self, pos: Vec2, visual: V) {
        self.bodies.push(Body::new(pos, self.default_size, visual));
    }

    /// Clear everything and recreate the single starting body.
    pub fn reset(&mut self, visual: V) {
        self.bodies.clear();
        self.grabbed = None;
        let start = self.start_pos;
        self.spawn(start, visual);
    }

    /// Nudge the rebound multiplier, kept in [0, 1.5].
    pub fn adjust_bounciness(&mut self, delta: f32) {
        self.collision.bounce_damping = (self.collision.bounce_damping + delta)
            .max(0.0)
            .min(MAX_BOUNCE);
    }

    /// Grab the first body in spawn order whose box contains the pointer.
    /// The grabbed body's velocity is zeroed on the spot.
    pub fn grab(&mut self, pointer: Vec2) {
        for (i, body) in self.bodies.iter_mut().enumerate() {
            if body.rect().contains(pointer) {
                body.vel = Vec2::ZERO;
                body.last_pos = body.pos;
                self.grabbed = Some(i);
                break;
            }
        }
    }

    /// Drop whatever is grabbed. Safe to call with nothing grabbed.
    pub fn release(&mut self) {
        self.grabbed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn world() -> World<()> {
        World::new(Vec2::new(800.0, 600.0))
    }

    fn step_idle(world: &mut World<()>, dt: f32) {
        world.step(dt, &FrameInput::idle(Vec2::ZERO), ());
    }

    /// Height of the body's bottom edge above the floor.
    fn height(world: &World<()>) -> f32 {
        world.collision.arena.y - (world.bodies[0].pos.y + world.bodies[0].size.y)
    }

    /// Runs the world until `max` peaks have been seen, returning the peak
    /// heights of each airborne arc.
    fn collect_peaks(world: &mut World<()>, dt: f32, max_steps: usize, max_peaks: usize) -> Vec<f32> {
        let mut peaks = Vec::new();
        let mut cur_peak = 0.0f32;
        let mut airborne = false;
        for _ in 0..max_steps {
            step_idle(world, dt);
            let body = &world.bodies[0];
            assert!(body.pos.x >= -1e-3);
            assert!(body.pos.x + body.size.x <= world.collision.arena.x + 1e-3);
            assert!(body.pos.y >= -1e-3);
            assert!(body.pos.y + body.size.y <= world.collision.arena.y + 1e-3);

            let h = height(world);
            if h > cur_peak {
                cur_peak = h;
            }
            if h <= 1e-3 {
                if airborne {
                    peaks.push(cur_peak);
                    cur_peak = 0.0;
                    if peaks.len() >= max_peaks {
                        break;
                    }
                }
                airborne = false;
            } else {
                airborne = true;
            }
        }
        peaks
    }

    #[test]
    fn grab_picks_the_first_spawned_body() {
        let mut w = world();
        w.spawn(Vec2::new(100.0, 100.0), ());
        w.spawn(Vec2::new(120.0, 120.0), ());
        w.bodies[0].vel = Vec2::new(9.0, 9.0);

        // pointer inside both boxes
        w.grab(Vec2::new(130.0, 130.0));
        assert_eq!(w.grabbed, Some(0));
        assert_eq!(w.bodies[0].vel, Vec2::ZERO);
    }

    #[test]
    fn release_is_idempotent() {
        let mut w = world();
        w.spawn(Vec2::new(100.0, 100.0), ());
        w.release();
        assert_eq!(w.grabbed, None);
        w.grab(Vec2::new(150.0, 150.0));
        w.release();
        w.release();
        assert_eq!(w.grabbed, None);
    }

    #[test]
    fn grab_misses_empty_space() {
        let mut w = world();
        w.spawn(Vec2::new(100.0, 100.0), ());
        w.grab(Vec2::new(500.0, 500.0));
        assert_eq!(w.grabbed, None);
    }

    #[test]
    fn drag_gives_throw_velocity_and_release_resumes_integration() {
        let mut w = world();
        w.spawn(Vec2::new(100.0, 100.0), ());
        // pointer on the body center, so the first drag step is a pure move
        w.grab(Vec2::new(150.0, 150.0));

        let input = FrameInput::idle(Vec2::new(180.0, 138.0));
        w.step(DT, &input, ());
        let vel = w.bodies[0].vel;
        assert!((vel.x - 30.0 / DT).abs() < 1e-2);
        assert!((vel.y - -12.0 / DT).abs() < 1e-2);

        w.release();
        let pos_before = w.bodies[0].pos;
        let vel_before = w.bodies[0].vel;
        step_idle(&mut w, DT);
        let expected_vel = Vec2::new(
            vel_before.x * AIR_RESISTANCE,
            (vel_before.y + GRAVITY * DT) * AIR_RESISTANCE,
        );
        let expected_pos = pos_before + expected_vel * DT;
        assert!((w.bodies[0].vel - expected_vel).length() < 1e-2);
        assert!((w.bodies[0].pos - expected_pos).length() < 1e-2);
    }

    #[test]
    fn zero_dt_drag_moves_without_updating_velocity() {
        let mut w = world();
        w.spawn(Vec2::new(100.0, 100.0), ());
        w.grab(Vec2::new(150.0, 150.0));

        let input = FrameInput::idle(Vec2::new(300.0, 200.0));
        w.step(0.0, &input, ());
        assert_eq!(w.bodies[0].pos, Vec2::new(250.0, 150.0));
        assert_eq!(w.bodies[0].vel, Vec2::ZERO);
    }

    #[test]
    fn spawn_appends_in_order() {
        let mut w = world();
        w.spawn(Vec2::new(10.0, 10.0), ());
        w.spawn(Vec2::new(20.0, 20.0), ());
        assert_eq!(w.bodies.len(), 2);
        assert_eq!(w.bodies[1].pos, Vec2::new(20.0, 20.0));
        assert_eq!(w.bodies[1].size, w.default_size);
        assert_eq!(w.bodies[1].vel, Vec2::ZERO);
    }

    #[test]
    fn reset_leaves_one_default_body() {
        let mut w = world();
        w.spawn(Vec2::new(10.0, 10.0), ());
        w.spawn(Vec2::new(20.0, 20.0), ());
        w.grab(Vec2::new(30.0, 30.0));

        w.reset(());
        assert_eq!(w.bodies.len(), 1);
        assert_eq!(w.grabbed, None);
        assert_eq!(w.bodies[0].pos, w.start_pos);
        assert_eq!(w.bodies[0].size, w.default_size);
    }

    #[test]
    fn bounciness_clamps_at_both_ends() {
        let mut w = world();
        w.adjust_bounciness(100.0);
        assert_eq!(w.collision.bounce_damping, MAX_BOUNCE);
        w.adjust_bounciness(-100.0);
        assert_eq!(w.collision.bounce_damping, 0.0);

        let mut input = FrameInput::idle(Vec2::ZERO);
        input.wheel = 1.0;
        w.step(DT, &input, ());
        assert!((w.collision.bounce_damping - BOUNCE_STEP).abs() < 1e-4);
    }

    #[test]
    fn step_commands_drive_spawn_and_toggles() {
        let mut w = world();
        w.reset(());

        let mut input = FrameInput::idle(Vec2::new(400.0, 80.0));
        input.spawn = true;
        input.actions = vec![Action::ToggleLegend, Action::ToggleSpeedLabels];
        w.step(DT, &input, ());

        assert_eq!(w.bodies.len(), 2);
        assert!(!w.legend_visible);
        assert!(w.speed_labels);
    }

    #[test]
    fn settling_body_loses_height_every_bounce() {
        let mut w = world();
        w.spawn(Vec2::new(350.0, 50.0), ());

        let peaks = collect_peaks(&mut w, DT, 1200, 4);
        assert!(peaks.len() >= 3);
        // the first recorded peak is the release height
        assert!((peaks[0] - 450.0).abs() < 5.0);
        for pair in peaks.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn unit_damping_keeps_the_bounce_peak() {
        let mut w = world();
        w.physics.air_resistance = 1.0;
        w.collision.bounce_damping = 1.0;
        w.spawn(Vec2::new(350.0, 300.0), ());

        // fine dt keeps the clamp overshoot small
        let peaks = collect_peaks(&mut w, 1.0 / 240.0, 4000, 4);
        assert!(peaks.len() >= 3);
        for peak in &peaks {
            assert!((peak - 200.0).abs() < 15.0);
        }
    }
}
