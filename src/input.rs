//! Pointer input to ring rotation
//!
//! The pointer's angle around the window center drives the rings. Only the
//! shortest change between events is accumulated, so sweeping across the
//! ±180° seam never produces a jump.

use glam::{UVec2, Vec2};

use crate::{angle_of, wrap_delta_degrees};

/// Events the host forwards; only pointer motion is observed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Absolute pointer position in window pixels (top-left origin, +y down)
    PointerMotion { position: Vec2 },
    PointerButton { pressed: bool },
    Key { code: u32 },
    Resized { size: UVec2 },
}

/// Convert window pixels to clip space ([-1,1] on both axes, +y up)
#[inline]
pub fn pixel_to_clip(pixel: Vec2, window: UVec2) -> Vec2 {
    let window = window.as_vec2();
    Vec2::new(
        (pixel.x + 0.5) / window.x * 2.0 - 1.0,
        (pixel.y + 0.5) / window.y * -2.0 + 1.0,
    )
}

/// Inverse of [`pixel_to_clip`]
#[inline]
pub fn clip_to_pixel(clip: Vec2, window: UVec2) -> Vec2 {
    let window = window.as_vec2();
    Vec2::new(
        (clip.x + 1.0) / 2.0 * window.x - 0.5,
        (1.0 - clip.y) / 2.0 * window.y - 0.5,
    )
}

/// Accumulates pointer motion into an unwrapped rotation
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    /// Pointer angle at the last motion event (degrees, (-180, 180])
    pointer_angle: f32,
    /// Total rotation (degrees, unwrapped)
    rotation: f32,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rotation in degrees
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Last observed pointer angle in degrees
    #[inline]
    pub fn pointer_angle(&self) -> f32 {
        self.pointer_angle
    }

    /// Observe an event. Returns whether it was consumed, which is never:
    /// input is watched, not claimed.
    pub fn handle_event(&mut self, event: &InputEvent, window_size: UVec2) -> bool {
        if let InputEvent::PointerMotion { position } = *event {
            let angle = angle_of(pixel_to_clip(position, window_size));
            self.rotation += wrap_delta_degrees(angle - self.pointer_angle);
            self.pointer_angle = angle;
        }
        false
    }
}
