//! Swept collision geometry for the ring layout
//!
//! The ball is treated as a point moving along `origin + t * dir` for the
//! current frame (`dir` is velocity already scaled by elapsed time, so hits
//! inside the frame have `t` in `[0, 1]`). Obstacles are grown by the ball
//! radius instead of sweeping a disc.
//!
//! "No intersection" is `None`, never an error.

use glam::Vec2;

/// Intersect a ray with a circle centered on the world origin
///
/// Returns the smallest non-negative ray parameter, or `None` when the ray
/// misses, the whole circle lies behind the origin, or the ray is degenerate.
pub fn intersect_ring(origin: Vec2, dir: Vec2, radius: f32) -> Option<f32> {
    let a = dir.dot(dir);
    if a == 0.0 {
        return None;
    }
    let b = dir.dot(origin);
    let c = origin.dot(origin) - radius * radius;

    // Quarter discriminant (b is half the usual linear coefficient)
    let d = b * b - a * c;
    if d < 0.0 {
        return None;
    }

    let root = d.sqrt();
    let t0 = (-b - root) / a;
    let t1 = (-b + root) / a;

    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// 2D cross product (z component of the 3D cross product)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Intersect a ray with a radial segment
///
/// The segment runs from the world origin along `radial` and only the part
/// between `inner_radius` and `outer_radius` counts. Hits must land within
/// this frame (`t` in `[0, 1]`) and on the positive side of `radial`.
pub fn intersect_line_segment(
    radial: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    origin: Vec2,
    dir: Vec2,
) -> Option<f32> {
    let denom = cross(dir, radial);
    if denom == 0.0 {
        return None; // Parallel to the segment
    }

    let t = -cross(origin, radial) / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    let hit_pos = origin + dir * t;
    let r = hit_pos.length();
    if r < inner_radius || r > outer_radius {
        return None;
    }

    // The infinite line also passes through the opposite side of the origin
    if radial.dot(hit_pos) < 0.0 {
        return None;
    }

    Some(t)
}

/// Reflect a direction about a surface normal
///
/// Standard reflection: d' = d - 2(d·n)n. Callers pass unit normals.
#[inline]
pub fn reflect(dir: Vec2, normal: Vec2) -> Vec2 {
    dir - 2.0 * dir.dot(normal) * normal
}

/// Normal of a circle at `hit_pos`, pointing back toward the world origin
#[inline]
pub fn radial_normal(hit_pos: Vec2) -> Vec2 {
    -hit_pos.normalize_or_zero()
}
