//! Court-to-clip transform
//!
//! The visible scene is the court plus a wall and padding margin, scaled
//! uniformly to fit the window and centered.

use glam::{Affine2, Mat4, UVec2, Vec2, Vec4};

use crate::consts::{PADDING, WALL_RADIUS};
use crate::input::pixel_to_clip;

/// Transform pair recomputed every frame from the window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Court space to clip space
    pub court_to_clip: Mat4,
    /// Clip space back to court space (for pointer handling)
    pub clip_to_court: Affine2,
    pub size: UVec2,
}

impl Viewport {
    /// Fit a court with the given half-extents into a window
    pub fn fit(court: Vec2, size: UVec2) -> Self {
        let margin = Vec2::splat(2.0 * WALL_RADIUS + PADDING);
        let scene_min = -court - margin;
        let scene_max = court + margin;

        // Degenerate windows are the host's problem; avoid dividing by zero
        let size_f = size.max(UVec2::ONE).as_vec2();
        let aspect = size_f.x / size_f.y;

        // x must fit in [-aspect, aspect], y in [-1, 1]
        let extent = scene_max - scene_min;
        let scale = (2.0 * aspect / extent.x).min(2.0 / extent.y);
        let center = 0.5 * (scene_max + scene_min);

        let court_to_clip = Mat4::from_cols(
            Vec4::new(scale / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(-center.x * (scale / aspect), -center.y * scale, 0.0, 1.0),
        );
        let clip_to_court = Affine2::from_cols(
            Vec2::new(aspect / scale, 0.0),
            Vec2::new(0.0, 1.0 / scale),
            center,
        );

        Self {
            court_to_clip,
            clip_to_court,
            size,
        }
    }

    #[inline]
    pub fn to_clip(&self, court: Vec2) -> Vec2 {
        self.court_to_clip.transform_point3(court.extend(0.0)).truncate()
    }

    #[inline]
    pub fn to_court(&self, clip: Vec2) -> Vec2 {
        self.clip_to_court.transform_point2(clip)
    }

    /// Window pixel (top-left origin) to court coordinates
    #[inline]
    pub fn pixel_to_court(&self, pixel: Vec2) -> Vec2 {
        self.to_court(pixel_to_clip(pixel, self.size))
    }
}
