//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame time is supplied by the host
//! - Stable iteration order (ring by ring, slot by slot)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod sector;
pub mod state;
pub mod tick;

pub use board::{Board, Brick, BrickSide};
pub use collision::{cross, intersect_line_segment, intersect_ring, reflect};
pub use sector::BrickSector;
pub use state::{Ball, FrameReport, GamePhase, GameState, Impact};
pub use tick::{Step, TickInput, tick};
