//! Ring Breaker - a circular breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, ring collisions, board state)
//! - `input`: Pointer motion to ring rotation
//! - `renderer`: Renderer-agnostic triangle lists and the court/clip transform
//! - `settings`: Session and host tuning
//! - `autopilot`: Seeded pointer driver for demo sessions

pub mod autopilot;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::{InputEvent, InputMapper};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Number of concentric brick rings
    pub const RINGS: usize = 5;
    /// Bricks per ring
    pub const BRICKS_PER_ROW: usize = 12;
    /// Angular width of one brick (degrees)
    pub const BRICK_ANGLE: f32 = 360.0 / BRICKS_PER_ROW as f32;
    /// Inner radius of ring 0; ring `i` starts at `INNER_RADIUS + i`
    pub const INNER_RADIUS: f32 = 2.0;
    /// Radial width of every ring
    pub const RING_WIDTH: f32 = 0.9;
    /// Duration of the brick shrink animation (seconds)
    pub const LERP_TIME: f32 = 0.1;

    /// Central hub radius (non-destructible)
    pub const HUB_RADIUS: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.2;
    pub const BALL_START: Vec2 = Vec2::new(0.0, 1.5);
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(2.0, 0.0);

    /// Court half-extents; leaving them costs a life
    pub const COURT_HALF_EXTENTS: Vec2 = Vec2::new(9.0, 7.0);
    pub const STARTING_LIVES: u8 = 3;

    /// Life indicator radius (drawn in the court's top-left corner)
    pub const GUI_BALL_RADIUS: f32 = 0.1;
    /// Visible margin around the court
    pub const WALL_RADIUS: f32 = 0.05;
    pub const PADDING: f32 = 0.14;

    /// Velocity multiplier applied on every collision: 2^(1/(2*BRICKS_PER_ROW))
    #[inline]
    pub fn speedup() -> f32 {
        2.0_f32.powf(1.0 / (2 * BRICKS_PER_ROW) as f32)
    }
}

/// Normalize an angle to [0, 360) degrees
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap an angular delta to (-180, 180] degrees
#[inline]
pub fn wrap_delta_degrees(delta: f32) -> f32 {
    let wrapped = normalize_degrees(delta);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of a point around the origin, in degrees
#[inline]
pub fn angle_of(pos: Vec2) -> f32 {
    pos.y.atan2(pos.x).to_degrees()
}

/// Inner radius of a ring
#[inline]
pub fn ring_radius(ring: usize) -> f32 {
    consts::INNER_RADIUS + ring as f32
}

/// Angular offset of a ring for a global rotation.
///
/// Scaled inversely with radius so every ring's inner edge moves at the same
/// linear speed.
#[inline]
pub fn ring_angle(rotation: f32, ring: usize) -> f32 {
    rotation * consts::INNER_RADIUS / ring_radius(ring)
}
