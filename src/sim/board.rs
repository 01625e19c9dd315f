//! Brick grid state
//!
//! A dense `RINGS x BRICKS_PER_ROW` grid of flags and timers. Bricks only ever
//! go from present to destroyed; a fresh board means a fresh session.

use serde::{Deserialize, Serialize};

use crate::consts::{BRICK_ANGLE, BRICKS_PER_ROW, LERP_TIME, RINGS};
use crate::{normalize_degrees, ring_angle};

/// Which edge of a brick took the breaking hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickSide {
    Inner,
    Outer,
    Left,
    Right,
    #[default]
    None,
}

/// One cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub present: bool,
    pub destroyed_side: BrickSide,
    /// Counts down from `LERP_TIME` to 0 once destroyed
    pub remove_progress: f32,
}

impl Default for Brick {
    fn default() -> Self {
        Self {
            present: true,
            destroyed_side: BrickSide::None,
            remove_progress: 0.0,
        }
    }
}

impl Brick {
    /// Still drawn: present, or destroyed with the shrink animation running
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.present || self.remove_progress > 0.0
    }

    /// Shrink amount for rendering, 0 (whole) to 1 (gone)
    #[inline]
    pub fn shrink_amount(&self) -> f32 {
        if self.present {
            0.0
        } else {
            1.0 - self.remove_progress / LERP_TIME
        }
    }
}

/// The full ring x slot grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    bricks: [[Brick; BRICKS_PER_ROW]; RINGS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Every brick present
    pub fn new() -> Self {
        Self {
            bricks: [[Brick::default(); BRICKS_PER_ROW]; RINGS],
        }
    }

    #[inline]
    pub fn brick(&self, ring: usize, slot: usize) -> &Brick {
        &self.bricks[ring][slot]
    }

    #[inline]
    pub fn is_present(&self, ring: usize, slot: usize) -> bool {
        self.bricks[ring][slot].present
    }

    /// Break a brick and start its removal animation.
    ///
    /// Returns false if it was already gone.
    pub fn destroy(&mut self, ring: usize, slot: usize, side: BrickSide) -> bool {
        let brick = &mut self.bricks[ring][slot];
        if !brick.present {
            return false;
        }
        brick.present = false;
        brick.destroyed_side = side;
        brick.remove_progress = LERP_TIME;
        true
    }

    /// Advance removal animations, clamping at zero
    pub fn decay(&mut self, elapsed: f32) {
        for brick in self.bricks.iter_mut().flatten() {
            if !brick.present && brick.remove_progress > 0.0 {
                brick.remove_progress = (brick.remove_progress - elapsed).max(0.0);
            }
        }
    }

    /// Number of bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks.iter().flatten().filter(|b| b.present).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().flatten().all(|b| !b.present)
    }

    /// All bricks that should still be drawn, as `(ring, slot, brick)`
    pub fn visible_bricks(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.bricks.iter().enumerate().flat_map(|(ring, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, b)| b.is_visible())
                .map(move |(slot, b)| (ring, slot, b))
        })
    }

    /// Slot under a world-space angle (degrees) for a ring at the given rotation
    pub fn slot_at_angle(ring: usize, world_angle: f32, rotation: f32) -> usize {
        let local = normalize_degrees(world_angle - ring_angle(rotation, ring));
        ((local / BRICK_ANGLE) as usize).min(BRICKS_PER_ROW - 1)
    }
}
