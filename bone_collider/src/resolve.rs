/*!
Push-out rules for a single particle against one world-space primitive.

Every routine takes the particle position by value and returns the corrected
position. When the particle already satisfies the bound the input is returned
unchanged. None of these functions can fail: degenerate inputs (particle at
the exact center, zero-length capsule segment) resolve to a defined result.
*/

use crate::{
    frame::{PlaneFrame, normalize_or_zero},
    types::{Bound, Vec3},
};

/// A bounded plane in world space: a `width × length` rectangle centered on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPlane {
    pub center: Vec3,
    pub frame: PlaneFrame,
    pub half_width: f32,
    pub half_length: f32,
}

impl WorldPlane {
    /// Rectangle outline, walking corner → +width → +width+length → +length.
    pub fn corners(&self) -> [Vec3; 4] {
        let PlaneFrame {
            tangent, bitangent, ..
        } = self.frame;
        let corner = self.center - tangent * self.half_width - bitangent * self.half_length;
        let across = tangent * (self.half_width * 2.0);
        let along = bitangent * (self.half_length * 2.0);
        [corner, corner + across, corner + across + along, corner + along]
    }

    /// In-plane coordinates `(x, y)` of `point` along tangent/bitangent, and its signed
    /// distance along the normal.
    #[inline]
    pub fn local_coords(&self, point: Vec3) -> (f32, f32, f32) {
        let to_point = point - self.center;
        (
            to_point.dot(&self.frame.tangent),
            to_point.dot(&self.frame.bitangent),
            to_point.dot(&self.frame.normal),
        )
    }

    /// Whether `point` projects inside the rectangle (edges included).
    #[inline]
    pub fn footprint_contains(&self, point: Vec3) -> bool {
        let (x, y, _) = self.local_coords(point);
        x.abs() <= self.half_width && y.abs() <= self.half_length
    }
}

/// Shared sphere-style rule: keep `position` at least (Outside) or at most (Inside)
/// `reach` away from `anchor`, correcting along the anchor→particle direction.
///
/// A particle sitting exactly on the anchor has no direction and is left where it is.
#[inline]
pub fn push_from_anchor(position: Vec3, anchor: Vec3, reach: f32, bound: Bound) -> Vec3 {
    let d = position - anchor;
    let len2 = d.norm_squared();
    let reach2 = reach * reach;
    let violated = match bound {
        Bound::Outside => len2 > 0.0 && len2 < reach2,
        Bound::Inside => len2 > reach2,
    };
    if violated {
        anchor + d * (reach / len2.sqrt())
    } else {
        position
    }
}

/// Point on segment `[start, end]` closest to `point`.
///
/// A zero-length segment collapses to `start`.
pub fn closest_point_on_segment(start: Vec3, end: Vec3, point: Vec3) -> Vec3 {
    let dir = end - start;
    let unit = normalize_or_zero(&dir);
    let t = (point - start).dot(&unit).max(0.0).min(dir.norm());
    start + unit * t
}

pub fn resolve_sphere(
    center: Vec3,
    radius: f32,
    bound: Bound,
    position: Vec3,
    particle_radius: f32,
) -> Vec3 {
    push_from_anchor(position, center, radius + particle_radius, bound)
}

pub fn resolve_capsule(
    start: Vec3,
    end: Vec3,
    radius: f32,
    bound: Bound,
    position: Vec3,
    particle_radius: f32,
) -> Vec3 {
    let closest = closest_point_on_segment(start, end, position);
    push_from_anchor(position, closest, radius + particle_radius, bound)
}

/// Bounded-plane rule. Outside keeps the particle `particle_radius` above the plane
/// (positive normal side), Inside keeps it `particle_radius` below. Particles that
/// project outside the rectangle are never touched, however close they are.
pub fn resolve_plane(
    plane: &WorldPlane,
    bound: Bound,
    position: Vec3,
    particle_radius: f32,
) -> Vec3 {
    let (x, y, dist) = plane.local_coords(position);
    if x.abs() > plane.half_width || y.abs() > plane.half_length {
        return position;
    }

    let normal = plane.frame.normal;
    match bound {
        Bound::Outside if dist < particle_radius => position + normal * (particle_radius - dist),
        Bound::Inside if dist > -particle_radius => position - normal * (dist + particle_radius),
        _ => position,
    }
}
