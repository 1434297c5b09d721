/*!
Math aliases and the small value types shared by the collider submodules.

This module contains no collision algorithms. It defines:
- the nalgebra aliases used throughout the crate
- `Pose`, the world transform of the collider owner, supplied per call
- `Axis` and `Bound`, the two enum knobs of a collider configuration
*/

use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// World transform of the object a collider is attached to.
///
/// The transform hierarchy owns this; the collider only reads it, fresh on every call.
/// `scale` is the world ("lossy") scale. Local points are scaled per component, while
/// collider radii only ever read `|scale.x|`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Pose {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Vec3::zeros(), Quat::identity(), Vec3::repeat(1.0))
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Map a point from the owner's local space into world space (scale, rotate, translate).
    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.translation + self.rotation * local.component_mul(&self.scale)
    }

    /// World-space direction of local +X.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::x()
    }

    /// World-space direction of local +Y.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::y()
    }

    /// World-space direction of local +Z.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::z()
    }

    /// World-space unit vector of the given local axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> Vec3 {
        match axis {
            Axis::X => self.right(),
            Axis::Y => self.up(),
            Axis::Z => self.forward(),
        }
    }

    /// Factor applied to collider radii.
    ///
    /// Only the X component is sampled; collider owners are assumed to be scaled
    /// near-uniformly, and existing content depends on this exact behavior.
    #[inline]
    pub fn radius_scale(&self) -> f32 {
        self.scale.x.abs()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Local axis used as the capsule's long axis or the plane's normal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// Local-space unit vector for this axis.
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }
}

/// Whether particles are kept outside the shape or trapped inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    #[default]
    Outside,
    Inside,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn identity_pose_leaves_points_alone() {
        let p = Vec3::new(1.0, -2.0, 3.5);
        assert!((Pose::identity().transform_point(p) - p).norm() < EPS);
    }

    #[test]
    fn transform_point_scales_then_rotates_then_translates() {
        // 90 degrees about +Z maps +X to +Y.
        let pose = Pose::from_translation(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2))
            .with_scale(Vec3::new(2.0, 3.0, 1.0));

        let world = pose.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((world - Vec3::new(10.0, 2.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn basis_vectors_follow_rotation() {
        let pose =
            Pose::identity().with_rotation(Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2));
        assert!((pose.right() - Vec3::y()).norm() < EPS);
        assert!((pose.up() + Vec3::x()).norm() < EPS);
        assert!((pose.forward() - Vec3::z()).norm() < EPS);
        assert!((pose.axis(Axis::Y) - pose.up()).norm() < EPS);
    }

    #[test]
    fn radius_scale_reads_only_abs_x() {
        let pose = Pose::identity().with_scale(Vec3::new(-2.0, 7.0, 0.1));
        assert_eq!(pose.radius_scale(), 2.0);
    }
}
