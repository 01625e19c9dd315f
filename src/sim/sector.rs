//! Sector geometry for bricks
//!
//! In polar coordinates a brick sector is defined by:
//! - inner/outer radius: the ring band it lives in
//! - start/end angle: its angular extent in degrees, already offset by the
//!   ring's current rotation

use serde::{Deserialize, Serialize};

use super::board::BrickSide;
use crate::consts::{BRICK_ANGLE, RING_WIDTH};
use crate::{ring_angle, ring_radius};

/// Angular gap left at each end of a drawn brick (degrees)
pub const SECTOR_GAP: f32 = 1.0;

/// A ring band clipped to an angular range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickSector {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Start angle (degrees, unwrapped)
    pub start: f32,
    /// End angle (degrees, unwrapped, always >= start)
    pub end: f32,
}

impl BrickSector {
    pub fn new(inner_radius: f32, outer_radius: f32, start: f32, end: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start,
            end,
        }
    }

    /// Full collision extent of a brick under the given rotation
    pub fn for_brick(ring: usize, slot: usize, rotation: f32) -> Self {
        let offset = ring_angle(rotation, ring);
        let radius = ring_radius(ring);
        Self::new(
            radius,
            radius + RING_WIDTH,
            BRICK_ANGLE * slot as f32 + offset,
            BRICK_ANGLE * (slot + 1) as f32 + offset,
        )
    }

    /// Drawn extent of a brick: the collision extent with a gap at both ends
    pub fn drawn(ring: usize, slot: usize, rotation: f32) -> Self {
        let full = Self::for_brick(ring, slot, rotation);
        Self {
            start: full.start + SECTOR_GAP,
            end: full.end - SECTOR_GAP,
            ..full
        }
    }

    /// Angular span in degrees
    #[inline]
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Shrink the sector away from the side it was hit on.
    ///
    /// `amount` runs from 0 (untouched) to 1 (collapsed onto the far edge).
    pub fn shrunk(&self, side: BrickSide, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mut out = *self;
        match side {
            BrickSide::Inner => out.inner_radius += (self.outer_radius - self.inner_radius) * amount,
            BrickSide::Outer => out.outer_radius -= (self.outer_radius - self.inner_radius) * amount,
            BrickSide::Right => out.start += self.span() * amount,
            BrickSide::Left => out.end -= self.span() * amount,
            BrickSide::None => {}
        }
        out
    }
}
