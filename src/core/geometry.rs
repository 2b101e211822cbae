//! Segment and circle geometry used by the range sensor and collision checks.
//!
//! Intersections use the cross-product form, no trig:
//!
//! ```text
//! a1 + t*(a2-a1) = b1 + s*(b2-b1)
//! t = cross(b1-a1, db) / cross(da, db)
//! s = cross(b1-a1, da) / cross(da, db)
//! ```

use super::point::WorldPoint;

/// Parameters `(t, s)` where segment `a1→a2` crosses segment `b1→b2`.
///
/// `t` is the fraction along `a`, `s` along `b`; both lie in [0, 1] when the
/// segments intersect. Parallel and collinear segments report no crossing.
#[inline]
pub fn segment_crossing(
    a1: WorldPoint,
    a2: WorldPoint,
    b1: WorldPoint,
    b2: WorldPoint,
) -> Option<(f32, f32)> {
    let da = a2 - a1;
    let db = b2 - b1;

    let denom = da.cross(db);
    if denom.abs() < f32::EPSILON {
        return None;
    }

    let offset = b1 - a1;
    let t = offset.cross(db) / denom;
    let s = offset.cross(da) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s) {
        Some((t, s))
    } else {
        None
    }
}

/// Intersection point of two segments, if they cross.
#[inline]
pub fn segment_intersection(
    a1: WorldPoint,
    a2: WorldPoint,
    b1: WorldPoint,
    b2: WorldPoint,
) -> Option<WorldPoint> {
    segment_crossing(a1, a2, b1, b2).map(|(t, _)| a1 + (a2 - a1) * t)
}

/// Closest point on segment `a→b` to `p`.
#[inline]
pub fn closest_point_on_segment(p: WorldPoint, a: WorldPoint, b: WorldPoint) -> WorldPoint {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Does a circle overlap segment `a→b`?
///
/// Strict test: a circle that exactly touches the segment does not overlap.
#[inline]
pub fn circle_intersects_segment(
    center: WorldPoint,
    radius: f32,
    a: WorldPoint,
    b: WorldPoint,
) -> bool {
    let closest = closest_point_on_segment(center, a, b);
    closest.distance_squared(&center) < radius * radius
}
