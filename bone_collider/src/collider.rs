use serde::{Deserialize, Serialize};

use crate::{
    debug::DebugGeometry,
    frame::PlaneFrame,
    resolve::{self, WorldPlane},
    settings::{DEFAULT_RADIUS, MIN_PLANE_EXTENT},
    types::{Axis, Bound, Pose, Vec3},
};

/// Shape-specific parameters, in the owner's local space.
///
/// Each variant carries only the fields it uses, so a sphere can't have a plane width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    Sphere { radius: f32 },
    /// `height` is the full length including both caps, measured along `axis`.
    Capsule {
        radius: f32,
        height: f32,
        axis: Axis,
    },
    /// Finite rectangle; `axis` is the normal, `width`/`length` span the tangent/bitangent.
    Plane {
        width: f32,
        length: f32,
        axis: Axis,
    },
}

impl Default for ColliderShape {
    fn default() -> Self {
        ColliderShape::Sphere {
            radius: DEFAULT_RADIUS,
        }
    }
}

/// World-space primitive derived from a collider and a pose.
///
/// Built fresh for every query; never stored on the collider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorldShape {
    Sphere { center: Vec3, radius: f32 },
    Capsule { start: Vec3, end: Vec3, radius: f32 },
    Plane(WorldPlane),
}

/// A collider attached to a bone or scene object.
///
/// Owned and edited by the host (editor, deserializer). After changing any field the
/// host calls [`BoneCollider::validate`]; the resolve path only reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoneCollider {
    /// Local offset of the shape's reference point within the owner.
    pub center: Vec3,
    pub bound: Bound,
    pub shape: ColliderShape,
}

impl BoneCollider {
    pub fn new(shape: ColliderShape) -> Self {
        let mut collider = Self {
            shape,
            ..Self::default()
        };
        collider.validate();
        collider
    }

    pub fn sphere(radius: f32) -> Self {
        Self::new(ColliderShape::Sphere { radius })
    }

    pub fn capsule(radius: f32, height: f32, axis: Axis) -> Self {
        Self::new(ColliderShape::Capsule {
            radius,
            height,
            axis,
        })
    }

    pub fn plane(width: f32, length: f32, axis: Axis) -> Self {
        Self::new(ColliderShape::Plane {
            width,
            length,
            axis,
        })
    }

    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    pub fn with_bound(mut self, bound: Bound) -> Self {
        self.bound = bound;
        self
    }

    /// Clamp shape parameters into range: radius and height `>= 0`, plane extents
    /// `>= MIN_PLANE_EXTENT`. Never fails and is idempotent.
    pub fn validate(&mut self) {
        match &mut self.shape {
            ColliderShape::Sphere { radius } => clamp_min("radius", radius, 0.0),
            ColliderShape::Capsule { radius, height, .. } => {
                clamp_min("radius", radius, 0.0);
                clamp_min("height", height, 0.0);
            }
            ColliderShape::Plane { width, length, .. } => {
                clamp_min("plane width", width, MIN_PLANE_EXTENT);
                clamp_min("plane length", length, MIN_PLANE_EXTENT);
            }
        }
    }

    /// Derive the world-space primitive for the owner's current pose.
    pub fn world_shape(&self, pose: &Pose) -> WorldShape {
        match self.shape {
            ColliderShape::Sphere { radius } => WorldShape::Sphere {
                center: pose.transform_point(self.center),
                radius: radius * pose.radius_scale(),
            },
            ColliderShape::Capsule {
                radius,
                height,
                axis,
            } => {
                let radius = radius * pose.radius_scale();
                // Half the straight section; a capsule shorter than its caps is a sphere.
                let half_span = (height * 0.5 - radius).max(0.0);
                let offset = axis.unit() * half_span;
                WorldShape::Capsule {
                    start: pose.transform_point(self.center - offset),
                    end: pose.transform_point(self.center + offset),
                    radius,
                }
            }
            ColliderShape::Plane {
                width,
                length,
                axis,
            } => WorldShape::Plane(WorldPlane {
                center: pose.transform_point(self.center),
                frame: PlaneFrame::from_normal(pose.axis(axis)),
                half_width: width * 0.5,
                half_length: length * 0.5,
            }),
        }
    }

    /// Correct one particle against this collider.
    ///
    /// Returns the particle position after pushing it out of (Outside) or back into
    /// (Inside) the collider; returns `position` unchanged when no correction applies.
    /// Callers combine several colliders by feeding each result into the next call.
    pub fn resolve(&self, pose: &Pose, position: Vec3, particle_radius: f32) -> Vec3 {
        match self.world_shape(pose) {
            WorldShape::Sphere { center, radius } => {
                resolve::resolve_sphere(center, radius, self.bound, position, particle_radius)
            }
            WorldShape::Capsule { start, end, radius } => resolve::resolve_capsule(
                start,
                end,
                radius,
                self.bound,
                position,
                particle_radius,
            ),
            WorldShape::Plane(plane) => {
                resolve::resolve_plane(&plane, self.bound, position, particle_radius)
            }
        }
    }

    /// In-place form of [`BoneCollider::resolve`].
    #[inline]
    pub fn resolve_in_place(&self, pose: &Pose, position: &mut Vec3, particle_radius: f32) {
        *position = self.resolve(pose, *position, particle_radius);
    }

    /// World-space parameters for visualization. Not part of the resolve contract.
    pub fn debug_geometry(&self, pose: &Pose) -> DebugGeometry {
        DebugGeometry {
            shape: self.world_shape(pose),
            bound: self.bound,
        }
    }
}

fn clamp_min(field: &str, value: &mut f32, min: f32) {
    // `max` also maps NaN to `min`.
    let clamped = value.max(min);
    if clamped != *value {
        log::debug!("clamping collider {field} from {value} to {clamped}");
        *value = clamped;
    }
}
