/*!
Collider defaults and numeric tolerances.

Keeping these together makes it obvious which constants affect simulation
results. Distances are in world units (meters).
*/

/// Default collider radius for a freshly created collider.
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Smallest allowed plane width/length. Smaller values are clamped up to this.
pub const MIN_PLANE_EXTENT: f32 = 0.01;

/// If `|normal × world_up|²` falls below this, the plane tangent is built from
/// world-right instead, so nearly vertical normals still get a stable frame.
pub const TANGENT_FALLBACK_EPS_SQ: f32 = 0.001;

/// Vectors shorter than this normalize to zero instead of blowing up.
/// Applies to capsule segment directions and plane tangents.
pub const NORMALIZE_EPS: f32 = 1.0e-5;
