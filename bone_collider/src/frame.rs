use crate::{
    settings::{NORMALIZE_EPS, TANGENT_FALLBACK_EPS_SQ},
    types::Vec3,
};

/// Orthonormal frame of a bounded plane: `normal` plus two in-plane axes.
///
/// `tangent` spans the plane's width and `bitangent` spans its length.
/// `bitangent = normal × tangent`, so `(tangent, bitangent, normal)` is right-handed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneFrame {
    pub normal: Vec3,
    pub tangent: Vec3,
    pub bitangent: Vec3,
}

impl PlaneFrame {
    #[inline]
    pub fn from_normal(normal: Vec3) -> Self {
        let tangent = plane_tangent(&normal);
        Self {
            normal,
            tangent,
            bitangent: normal.cross(&tangent),
        }
    }
}

/// Normalize `v`, or return zero if it is too short to carry a direction.
#[inline]
pub(crate) fn normalize_or_zero(v: &Vec3) -> Vec3 {
    v.try_normalize(NORMALIZE_EPS).unwrap_or_else(Vec3::zeros)
}

/// Unit tangent for a plane normal: `normal × world_up`, or `normal × world_right`
/// when the normal is (nearly) parallel to world up.
pub fn plane_tangent(normal: &Vec3) -> Vec3 {
    let mut tangent = normal.cross(&Vec3::y());
    if tangent.norm_squared() < TANGENT_FALLBACK_EPS_SQ {
        tangent = normal.cross(&Vec3::x());
    }
    normalize_or_zero(&tangent)
}
