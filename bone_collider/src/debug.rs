//! Read-only visualization data for colliders.
//!
//! Editors draw colliders as wire spheres (sphere, both capsule caps) and a rectangle
//! outline (plane). Nothing here feeds back into resolution.

use crate::{
    collider::WorldShape,
    types::{Bound, Vec3},
};

/// RGB color used for `Bound::Outside` colliders.
pub const OUTSIDE_COLOR: [f32; 3] = [1.0, 0.92, 0.016];
/// RGB color used for `Bound::Inside` colliders.
pub const INSIDE_COLOR: [f32; 3] = [1.0, 0.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugGeometry {
    pub shape: WorldShape,
    pub bound: Bound,
}

impl DebugGeometry {
    pub fn color(&self) -> [f32; 3] {
        match self.bound {
            Bound::Outside => OUTSIDE_COLOR,
            Bound::Inside => INSIDE_COLOR,
        }
    }

    /// Wire spheres as `(center, radius)`: one for a sphere, one per cap for a capsule.
    pub fn spheres(&self) -> Vec<(Vec3, f32)> {
        match self.shape {
            WorldShape::Sphere { center, radius } => vec![(center, radius)],
            WorldShape::Capsule { start, end, radius } => vec![(start, radius), (end, radius)],
            WorldShape::Plane(_) => Vec::new(),
        }
    }

    /// Line segments of the plane outline. Empty for round shapes.
    pub fn lines(&self) -> Vec<(Vec3, Vec3)> {
        match self.shape {
            WorldShape::Plane(plane) => {
                let [a, b, c, d] = plane.corners();
                vec![(a, b), (a, d), (b, c), (d, c)]
            }
            WorldShape::Sphere { .. } | WorldShape::Capsule { .. } => Vec::new(),
        }
    }
}
