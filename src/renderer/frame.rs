//! Per-frame triangle list for the renderer
//!
//! Reads a `GameState` snapshot and produces everything a renderer needs:
//! court-space triangles, the court/clip transforms and the clear color.

use glam::{UVec2, Vec2};

use super::shapes::{push_circle, push_sector};
use super::vertex::{Vertex, colors};
use super::viewport::Viewport;
use crate::consts::{GUI_BALL_RADIUS, HUB_RADIUS};
use crate::sim::{BrickSector, GameState};

/// Everything drawn in one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub viewport: Viewport,
    pub clear_color: [u8; 4],
}

impl Frame {
    /// Raw vertex bytes for a GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Build the frame for the current state and window size
pub fn build_frame(state: &GameState, viewport_size: UVec2) -> Frame {
    let mut vertices = Vec::new();

    push_circle(&mut vertices, state.ball.pos, state.ball.radius, colors::BALL);
    push_bricks(&mut vertices, state);
    push_circle(&mut vertices, Vec2::ZERO, HUB_RADIUS, colors::HUB);
    push_lives(&mut vertices, state);

    Frame {
        vertices,
        viewport: Viewport::fit(state.court, viewport_size),
        clear_color: colors::BACKGROUND,
    }
}

/// Visible bricks, shrinking away from the side they were hit on
fn push_bricks(out: &mut Vec<Vertex>, state: &GameState) {
    for (ring, slot, brick) in state.board.visible_bricks() {
        let sector = BrickSector::drawn(ring, slot, state.rotation)
            .shrunk(brick.destroyed_side, brick.shrink_amount());
        push_sector(out, Vec2::ZERO, &sector, colors::BRICK);
    }
}

/// One marker per remaining life along the court's top edge
fn push_lives(out: &mut Vec<Vertex>, state: &GameState) {
    let origin = Vec2::new(-state.court.x, state.court.y);
    for i in 0..state.lives {
        let pos = origin + Vec2::new(i as f32 * GUI_BALL_RADIUS * 3.0, 0.0);
        push_circle(out, pos, GUI_BALL_RADIUS, colors::LIFE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::ring_radius;
    use crate::renderer::shapes::sector_segments;
    use crate::sim::BrickSide;

    const SIZE: UVec2 = UVec2::new(1280, 720);
    const CIRCLE_VERTS: usize = 72 * 3;

    fn brick_verts() -> usize {
        sector_segments(BRICK_ANGLE - 2.0) as usize * 6
    }

    #[test]
    fn test_full_board_frame() {
        let state = GameState::new();
        let frame = build_frame(&state, SIZE);
        let expected = CIRCLE_VERTS // ball
            + RINGS * BRICKS_PER_ROW * brick_verts()
            + CIRCLE_VERTS // hub
            + STARTING_LIVES as usize * CIRCLE_VERTS;
        assert_eq!(frame.vertices.len(), expected);
        assert_eq!(frame.vertex_bytes().len(), expected * 24);
        assert_eq!(frame.clear_color, colors::BACKGROUND);
    }

    #[test]
    fn test_gone_bricks_not_drawn() {
        let mut state = GameState::new();
        state.board.destroy(0, 0, BrickSide::Outer);
        state.board.decay(LERP_TIME);
        state.lives = 1;
        let frame = build_frame(&state, SIZE);
        let expected = CIRCLE_VERTS
            + (RINGS * BRICKS_PER_ROW - 1) * brick_verts()
            + CIRCLE_VERTS
            + CIRCLE_VERTS;
        assert_eq!(frame.vertices.len(), expected);
    }

    #[test]
    fn test_shrinking_brick_still_drawn() {
        let mut state = GameState::new();
        state.board.destroy(2, 5, BrickSide::Inner);
        state.board.decay(LERP_TIME / 2.0);
        let full = build_frame(&GameState::new(), SIZE);
        let frame = build_frame(&state, SIZE);
        assert_eq!(frame.vertices.len(), full.vertices.len());

        // Inner edge has moved halfway out
        let inner = ring_radius(2) + RING_WIDTH / 2.0;
        let min_r = frame
            .vertices
            .iter()
            .map(|v| Vec2::new(v.position[0], v.position[1]))
            .filter(|p| {
                let a = crate::angle_of(*p);
                a > 151.0 && a < 179.0
            })
            .map(|p| p.length())
            .filter(|r| *r > ring_radius(2) - 0.05 && *r < ring_radius(2) + RING_WIDTH + 0.01)
            .fold(f32::MAX, f32::min);
        assert!((min_r - inner).abs() < 1e-3);
    }

    #[test]
    fn test_lives_in_top_left() {
        let state = GameState::new();
        let frame = build_frame(&state, SIZE);
        let first_life = frame.vertices.len() - STARTING_LIVES as usize * CIRCLE_VERTS;
        let center = frame.vertices[first_life].position;
        assert_eq!(center, [-COURT_HALF_EXTENTS.x, COURT_HALF_EXTENTS.y, 0.0]);
    }
}
