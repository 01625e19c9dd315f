//! Shape generation for 2D primitives
//!
//! Every builder appends triangles to the caller's vertex list.

use glam::Vec2;

use super::vertex::Vertex;
use crate::polar_to_cartesian;
use crate::sim::BrickSector;

/// Angular step for circles (degrees)
pub const CIRCLE_STEP: f32 = 5.0;
/// Largest angular step for sectors (degrees)
pub const SECTOR_STEP: f32 = 1.0;

/// Append a filled circle as a fan of triangles
pub fn push_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [u8; 4]) {
    let segments = (360.0 / CIRCLE_STEP) as u32;
    out.reserve(segments as usize * 3);

    for i in 0..segments {
        let a0 = i as f32 * CIRCLE_STEP;
        let a1 = a0 + CIRCLE_STEP;

        out.push(Vertex::at(center, color));
        out.push(Vertex::at(center + polar_to_cartesian(radius, a0), color));
        out.push(Vertex::at(center + polar_to_cartesian(radius, a1), color));
    }
}

/// Number of trapezoids used for a sector of the given span
#[inline]
pub fn sector_segments(span: f32) -> u32 {
    ((span / SECTOR_STEP).ceil() as u32).max(1)
}

/// Append a filled ring sector as a strip of trapezoids (two triangles each)
///
/// Sectors collapsed to nothing (zero span or zero width) produce no vertices.
pub fn push_sector(out: &mut Vec<Vertex>, center: Vec2, sector: &BrickSector, color: [u8; 4]) {
    let span = sector.span();
    if span <= 0.0 || sector.outer_radius <= sector.inner_radius {
        return;
    }

    let segments = sector_segments(span);
    let step = span / segments as f32;
    out.reserve(segments as usize * 6);

    for i in 0..segments {
        let a0 = sector.start + i as f32 * step;
        let a1 = a0 + step;

        let inner0 = center + polar_to_cartesian(sector.inner_radius, a0);
        let outer0 = center + polar_to_cartesian(sector.outer_radius, a0);
        let inner1 = center + polar_to_cartesian(sector.inner_radius, a1);
        let outer1 = center + polar_to_cartesian(sector.outer_radius, a1);

        out.push(Vertex::at(inner1, color));
        out.push(Vertex::at(inner0, color));
        out.push(Vertex::at(outer0, color));

        out.push(Vertex::at(outer0, color));
        out.push(Vertex::at(outer1, color));
        out.push(Vertex::at(inner1, color));
    }
}
