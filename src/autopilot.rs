//! Demo autopilot
//!
//! Plays the game by moving a virtual pointer: it turns the rings so the
//! nearest standing brick of the outermost non-empty ring sits across the
//! ball's heading. A seeded wobble keeps runs varied but reproducible.

use glam::{UVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{BRICK_ANGLE, BRICKS_PER_ROW, INNER_RADIUS, RINGS};
use crate::input::{InputEvent, clip_to_pixel};
use crate::sim::GameState;
use crate::{angle_of, polar_to_cartesian, ring_angle, ring_radius, wrap_delta_degrees};

/// Largest pointer turn per frame (degrees)
pub const MAX_TURN: f32 = 6.0;
/// Random wobble added to every turn (degrees)
pub const WOBBLE: f32 = 1.5;
/// Distance of the virtual pointer from the window center, in clip units
const POINTER_RADIUS: f32 = 0.8;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Current pointer angle (degrees, unwrapped)
    angle: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            angle: 0.0,
        }
    }

    /// Turn (degrees of total rotation) that would center a standing brick
    /// on the ball's heading, or `None` if nothing is left to aim at
    pub fn desired_turn(state: &GameState) -> Option<f32> {
        let heading = angle_of(state.ball.vel);

        (0..RINGS).rev().find_map(|ring| {
            let offset = ring_angle(state.rotation, ring);
            (0..BRICKS_PER_ROW)
                .filter(|&slot| state.board.is_present(ring, slot))
                .map(|slot| {
                    let center = offset + (slot as f32 + 0.5) * BRICK_ANGLE;
                    wrap_delta_degrees(heading - center)
                })
                .min_by(|a, b| a.abs().total_cmp(&b.abs()))
                // Outer rings turn slower than the pointer
                .map(|delta| delta * ring_radius(ring) / INNER_RADIUS)
        })
    }

    /// Next pointer motion event for this frame
    pub fn next_event(&mut self, state: &GameState, window: UVec2) -> InputEvent {
        let turn = Self::desired_turn(state)
            .unwrap_or(0.0)
            .clamp(-MAX_TURN, MAX_TURN);
        let wobble = self.rng.random_range(-WOBBLE..=WOBBLE);
        self.angle += turn + wobble;

        let clip = polar_to_cartesian(POINTER_RADIUS, self.angle);
        InputEvent::PointerMotion {
            position: clip_to_pixel(clip, window),
        }
    }

    /// Pointer position in clip space
    pub fn pointer_clip(&self) -> Vec2 {
        polar_to_cartesian(POINTER_RADIUS, self.angle)
    }
}
