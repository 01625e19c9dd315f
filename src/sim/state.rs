//! Game state and core simulation types
//!
//! One `GameState` is one session. It is never reset in place: a new game
//! is a new `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::{Board, BrickSide};
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GamePhase::Playing
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Motion over one frame
    #[inline]
    pub fn motion(&self, elapsed: f32) -> Vec2 {
        self.vel * elapsed
    }

    /// Move back to `start`, keeping speed but heading along +x
    pub fn respawn(&mut self, start: Vec2) {
        self.vel = Vec2::new(self.speed(), 0.0);
        self.pos = start;
    }

    /// True once the center leaves the court rectangle
    #[inline]
    pub fn is_outside(&self, half_extents: Vec2) -> bool {
        self.pos.x.abs() > half_extents.x || self.pos.y.abs() > half_extents.y
    }
}

/// What the ball hit this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Impact {
    /// Broke a brick
    Brick {
        ring: usize,
        slot: usize,
        side: BrickSide,
    },
    /// Bounced off the central hub
    Hub,
}

/// Summary of the most recent update, for the host and logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub impact: Option<Impact>,
    pub life_lost: bool,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub ball: Ball,
    /// Remaining lives (never below 0)
    pub lives: u8,
    /// Total ring rotation in degrees (unwrapped), as of the last update
    pub rotation: f32,
    /// Court half-extents
    pub court: Vec2,
    /// Respawn point after losing a life
    pub ball_start: Vec2,
    pub phase: GamePhase,
    /// Simulated time in seconds
    pub time: f32,
    /// Collisions handled so far (each one sped the ball up)
    pub hits: u32,
    pub last_frame: FrameReport,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard session: full board, ball at the start position
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Session tuned by `settings`
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            board: Board::new(),
            ball: Ball::new(
                settings.ball_start,
                settings.ball_start_velocity,
                settings.ball_radius,
            ),
            lives: settings.lives,
            rotation: 0.0,
            court: settings.court_half_extents,
            ball_start: settings.ball_start,
            phase: GamePhase::Playing,
            time: 0.0,
            hits: 0,
            last_frame: FrameReport::default(),
        }
    }
}
