use rapier3d::{
    na::{Rotation3, Translation3, UnitQuaternion},
    prelude::*,
};

use crate::{
    collider::{BoneCollider, WorldShape},
    types::{Pose, Vec3},
};

#[inline]
fn vector(v: Vec3) -> Vector<f32> {
    Vector::new(v.x, v.y, v.z)
}

#[inline]
fn point(v: Vec3) -> Point<f32> {
    Point::new(v.x, v.y, v.z)
}

/// Build a world-placed Rapier collider matching a bone collider at `pose`.
///
/// Hosts use this to put bone colliders into a query pipeline or a debug renderer.
/// The collider is created with its final world position; attach it without a parent
/// body (or to a fixed body at the origin).
///
/// - Sphere: ball at the world center.
/// - Capsule: capsule between the world endpoints (a ball-like capsule when they coincide).
/// - Plane: zero-thickness cuboid spanning the bounded rectangle, oriented so its local
///   X/Y/Z are the plane tangent/bitangent/normal. Rapier's half-spaces are infinite,
///   which would not match the bounded footprint.
pub fn collider_from_bone(bone: &BoneCollider, pose: &Pose) -> Collider {
    match bone.world_shape(pose) {
        WorldShape::Sphere { center, radius } => ColliderBuilder::ball(radius)
            .translation(vector(center))
            .build(),

        WorldShape::Capsule { start, end, radius } => {
            ColliderBuilder::capsule_from_endpoints(point(start), point(end), radius).build()
        }

        WorldShape::Plane(plane) => {
            let basis = Rotation3::from_basis_unchecked(&[
                vector(plane.frame.tangent),
                vector(plane.frame.bitangent),
                vector(plane.frame.normal),
            ]);
            let iso = Isometry::from_parts(
                Translation3::new(plane.center.x, plane.center.y, plane.center.z),
                UnitQuaternion::from_rotation_matrix(&basis),
            );
            ColliderBuilder::cuboid(plane.half_width, plane.half_length, 0.0)
                .position(iso)
                .build()
        }
    }
}
