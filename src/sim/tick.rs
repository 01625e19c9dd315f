//! Per-frame simulation step
//!
//! Advances the ball by one variable-length frame, resolving at most one
//! collision: ring faces first (innermost ring first), then the angular sides
//! of each ring's slots, then the hub.

use glam::Vec2;

use super::board::{Board, BrickSide};
use super::collision::{cross, intersect_line_segment, intersect_ring, radial_normal, reflect};
use super::state::{FrameReport, GamePhase, GameState, Impact};
use crate::consts::*;
use crate::{angle_of, polar_to_cartesian, ring_angle, ring_radius};

/// Input for a single update
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Accumulated ring rotation (degrees, unwrapped)
    pub rotation: f32,
}

/// What the host should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep going
    Continue,
    /// Every brick destroyed this frame
    Won,
    /// Last life lost this frame
    Lost,
    /// Session already finished; nothing was simulated
    Ended,
}

/// Advance the session by `elapsed` seconds
pub fn tick(state: &mut GameState, input: &TickInput, elapsed: f32) -> Step {
    if state.phase.is_over() {
        return Step::Ended;
    }

    state.rotation = input.rotation;
    state.time += elapsed;
    state.last_frame = FrameReport::default();

    state.board.decay(elapsed);

    let impact = resolve_rings(state, elapsed).or_else(|| resolve_hub(state, elapsed));
    match impact {
        None => state.ball.pos += state.ball.motion(elapsed),
        Some(_) => {
            // Position was already resolved; every bounce speeds the ball up
            state.ball.vel *= speedup();
            state.hits += 1;
        }
    }
    state.last_frame.impact = impact;

    if state.ball.is_outside(state.court) {
        state.lives = state.lives.saturating_sub(1);
        state.ball.respawn(state.ball_start);
        state.last_frame.life_lost = true;
        log::info!("Ball left the court, {} lives left", state.lives);

        if state.lives == 0 {
            state.phase = GamePhase::Lost;
            log::info!("Game over: lost after {:.1}s", state.time);
            return Step::Lost;
        }
    }

    if state.board.is_cleared() {
        state.phase = GamePhase::Won;
        log::info!("Game over: all bricks cleared in {:.1}s", state.time);
        return Step::Won;
    }

    Step::Continue
}

/// Test the ball against every ring, innermost first; first hit wins
fn resolve_rings(state: &mut GameState, elapsed: f32) -> Option<Impact> {
    for ring in 0..RINGS {
        if let Some(impact) = ring_face_hit(state, ring, elapsed) {
            return Some(impact);
        }
        if let Some(impact) = ring_side_hit(state, ring, elapsed) {
            return Some(impact);
        }
    }
    None
}

/// Inner or outer face of a ring.
///
/// The inner face takes priority whenever it resolves inside the frame.
fn ring_face_hit(state: &mut GameState, ring: usize, elapsed: f32) -> Option<Impact> {
    let ball = state.ball;
    let motion = ball.motion(elapsed);
    let radius = ring_radius(ring);

    let (t, side) = match intersect_ring(ball.pos, motion, radius - ball.radius)
        .filter(|t| *t <= 1.0)
    {
        Some(t) => (t, BrickSide::Inner),
        None => (
            intersect_ring(ball.pos, motion, radius + RING_WIDTH + ball.radius)?,
            BrickSide::Outer,
        ),
    };
    if t <= 0.0 || t >= 1.0 {
        return None;
    }

    let hit_pos = ball.pos + motion * t;
    let slot = Board::slot_at_angle(ring, angle_of(hit_pos), state.rotation);
    if !state.board.is_present(ring, slot) {
        return None;
    }

    bounce_off_circle(state, hit_pos, t, elapsed);
    state.board.destroy(ring, slot, side);
    log::debug!(
        "Brick ({}, {}) broken on {:?} face at t={:.3}",
        ring,
        slot,
        side,
        t
    );
    Some(Impact::Brick { ring, slot, side })
}

/// Angular boundaries between the slots of a ring
fn ring_side_hit(state: &mut GameState, ring: usize, elapsed: f32) -> Option<Impact> {
    let ball = state.ball;
    let motion = ball.motion(elapsed);
    let radius = ring_radius(ring);
    let offset = ring_angle(state.rotation, ring);

    for boundary in 0..BRICKS_PER_ROW {
        let line = polar_to_cartesian(1.0, boundary as f32 * BRICK_ANGLE + offset);
        let Some(t) = intersect_line_segment(
            line,
            radius - ball.radius,
            radius + RING_WIDTH + ball.radius,
            ball.pos,
            motion,
        ) else {
            continue;
        };
        if t <= 0.0 {
            continue;
        }

        // A ball counter-clockwise of the boundary is heading into the
        // previous slot and strikes its far (end) edge. The side follows the
        // struck edge, not the face the ball came from, so the shrink
        // animation recedes from that edge.
        let (slot, side) = if cross(ball.pos, line) < 0.0 {
            ((boundary + BRICKS_PER_ROW - 1) % BRICKS_PER_ROW, BrickSide::Left)
        } else {
            (boundary, BrickSide::Right)
        };
        if !state.board.is_present(ring, slot) {
            continue;
        }

        state.ball.vel = reflect(ball.vel, line.perp());
        state.board.destroy(ring, slot, side);
        log::debug!(
            "Brick ({}, {}) broken on {:?} side at t={:.3}",
            ring,
            slot,
            side,
            t
        );
        return Some(Impact::Brick { ring, slot, side });
    }
    None
}

/// Central hub, only tested when no ring was hit
fn resolve_hub(state: &mut GameState, elapsed: f32) -> Option<Impact> {
    let ball = state.ball;
    let motion = ball.motion(elapsed);
    let t = intersect_ring(ball.pos, motion, HUB_RADIUS + ball.radius)?;
    if t <= 0.0 || t >= 1.0 {
        return None;
    }

    let hit_pos = ball.pos + motion * t;
    bounce_off_circle(state, hit_pos, t, elapsed);
    log::debug!("Hub bounce at t={:.3}", t);
    Some(Impact::Hub)
}

/// Reflect off a circle centered on the origin and spend the rest of the
/// frame travelling along the new direction
fn bounce_off_circle(state: &mut GameState, hit_pos: Vec2, t: f32, elapsed: f32) {
    let vel = reflect(state.ball.vel, radial_normal(hit_pos));
    state.ball.vel = vel;
    state.ball.pos = hit_pos + vel * elapsed * (1.0 - t);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 120.0;

    fn input() -> TickInput {
        TickInput::default()
    }

    fn total_bricks() -> usize {
        RINGS * BRICKS_PER_ROW
    }

    #[test]
    fn test_free_flight_integrates() {
        let mut state = GameState::new();
        let step = tick(&mut state, &input(), DT);
        assert_eq!(step, Step::Continue);
        assert!((state.ball.pos - (BALL_START + BALL_START_VELOCITY * DT)).length() < 1e-6);
        assert_eq!(state.ball.vel, BALL_START_VELOCITY);
        assert_eq!(state.last_frame.impact, None);
    }

    #[test]
    fn test_inner_face_breaks_brick() {
        let mut state = GameState::new();
        // Ball heads straight out and meets ring 0's inner face around 74 degrees
        state.ball.pos = Vec2::new(0.5, 1.5);
        state.ball.vel = Vec2::new(0.0, 100.0);

        let step = tick(&mut state, &input(), 0.1);
        assert_eq!(step, Step::Continue);
        assert_eq!(
            state.last_frame.impact,
            Some(Impact::Brick {
                ring: 0,
                slot: 2,
                side: BrickSide::Inner
            })
        );
        assert!(!state.board.is_present(0, 2));
        assert_eq!(state.board.remaining(), total_bricks() - 1);
        // Bounced back inward and sped up
        assert!(state.ball.vel.y < 0.0);
        assert!((state.ball.speed() - 100.0 * speedup()).abs() < 1e-2);
    }

    #[test]
    fn test_missing_brick_lets_ball_reach_next_ring() {
        let mut state = GameState::new();
        state.board.destroy(0, 2, BrickSide::Inner);
        state.ball.pos = Vec2::new(0.5, 1.5);
        state.ball.vel = Vec2::new(0.0, 100.0);

        tick(&mut state, &input(), 0.1);
        assert_eq!(
            state.last_frame.impact,
            Some(Impact::Brick {
                ring: 1,
                slot: 2,
                side: BrickSide::Inner
            })
        );
        // Exactly one brick per frame
        assert_eq!(state.board.remaining(), total_bricks() - 2);
    }

    #[test]
    fn test_only_one_brick_per_frame() {
        let mut state = GameState::new();
        // Fast enough to cross every ring in one frame
        state.ball.vel = Vec2::new(0.0, 1000.0);
        tick(&mut state, &input(), 0.1);
        assert_eq!(state.board.remaining(), total_bricks() - 1);
    }

    #[test]
    fn test_rotation_shifts_hit_slot() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(0.5, 1.5);
        state.ball.vel = Vec2::new(0.0, 100.0);

        // Hit lands near 74 degrees; ring 0 turned by 60 puts it in local slot 0
        let input = TickInput { rotation: 60.0 };
        tick(&mut state, &input, 0.1);
        assert_eq!(state.rotation, 60.0);
        assert!(!state.board.is_present(0, 0));
        assert!(state.board.is_present(0, 2));
    }

    #[test]
    fn test_side_hit_breaks_neighbor() {
        let mut state = GameState::new();
        state.board.destroy(0, 0, BrickSide::Inner);
        // Ball sits inside the empty slot 0 of ring 0, moving clockwise
        state.ball.pos = polar_to_cartesian(2.45, 15.0);
        state.ball.vel = Vec2::new(0.0, -10.0);
        let pos_before = state.ball.pos;

        tick(&mut state, &input(), 0.1);
        assert_eq!(
            state.last_frame.impact,
            Some(Impact::Brick {
                ring: 0,
                slot: 11,
                side: BrickSide::Left
            })
        );
        // Reflected off the 0 degree boundary, position held for this frame
        assert!(state.ball.vel.y > 0.0);
        assert!(state.ball.vel.x.abs() < 1e-3);
        assert_eq!(state.ball.pos, pos_before);
    }

    #[test]
    fn test_side_hit_from_clockwise_marks_right() {
        let mut state = GameState::new();
        state.board.destroy(0, 0, BrickSide::Inner);
        // Empty slot 0, moving counter-clockwise into slot 1 at the 30 degree line
        state.ball.pos = polar_to_cartesian(2.45, 15.0);
        let tangent = polar_to_cartesian(1.0, 105.0);
        state.ball.vel = tangent * 10.0;

        tick(&mut state, &input(), 0.1);
        assert_eq!(
            state.last_frame.impact,
            Some(Impact::Brick {
                ring: 0,
                slot: 1,
                side: BrickSide::Right
            })
        );
    }

    #[test]
    fn test_hub_bounce() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(0.1, 1.5);
        state.ball.vel = Vec2::new(0.0, -10.0);

        tick(&mut state, &input(), 0.1);
        assert_eq!(state.last_frame.impact, Some(Impact::Hub));
        assert_eq!(state.board.remaining(), total_bricks());
        // Now moving away from the hub
        assert!(state.ball.vel.dot(state.ball.pos) > 0.0);
        assert!(state.ball.pos.length() > HUB_RADIUS + state.ball.radius);
        assert_eq!(state.hits, 1);
    }

    #[test]
    fn test_decay_runs_every_frame() {
        let mut state = GameState::new();
        state.board.destroy(4, 4, BrickSide::Outer);
        tick(&mut state, &input(), LERP_TIME / 4.0);
        let progress = state.board.brick(4, 4).remove_progress;
        assert!((progress - 0.75 * LERP_TIME).abs() < 1e-6);
    }

    #[test]
    fn test_lose_after_three_exits() {
        let mut state = GameState::new();
        let mut steps = Vec::new();
        for _ in 0..STARTING_LIVES {
            // Outside every ring, heading out of the court
            state.ball.pos = Vec2::new(8.9, 0.0);
            state.ball.vel = Vec2::new(10.0, 0.0);
            steps.push(tick(&mut state, &input(), 0.1));
            assert!(state.last_frame.life_lost);
            assert_eq!(state.ball.pos, BALL_START);
            assert!((state.ball.vel - Vec2::new(10.0, 0.0)).length() < 1e-5);
        }
        assert_eq!(steps, vec![Step::Continue, Step::Continue, Step::Lost]);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Lost);

        // Frozen afterwards
        assert_eq!(tick(&mut state, &input(), 0.1), Step::Ended);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_win_signalled_once() {
        let mut state = GameState::new();
        for ring in 0..RINGS {
            for slot in 0..BRICKS_PER_ROW {
                state.board.destroy(ring, slot, BrickSide::Outer);
            }
        }
        assert_eq!(tick(&mut state, &input(), DT), Step::Won);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(tick(&mut state, &input(), DT), Step::Ended);
        assert_eq!(tick(&mut state, &input(), DT), Step::Ended);
    }

    #[test]
    fn test_zero_elapsed_is_harmless() {
        let mut state = GameState::new();
        let before = state.ball;
        assert_eq!(tick(&mut state, &input(), 0.0), Step::Continue);
        assert_eq!(state.ball, before);
        assert_eq!(state.board.remaining(), total_bricks());
    }
}
