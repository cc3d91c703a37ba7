//! # Tumble
//!
//! Tumble is a small library of logics for interactive box sandboxes: point
//! physics under gravity and air drag, axis-aligned arena collision, pointer
//! and keyboard control, and the world aggregate that sequences them once per
//! rendered frame.

pub mod body;
pub mod collision;
pub mod control;
pub mod physics;
pub mod world;
