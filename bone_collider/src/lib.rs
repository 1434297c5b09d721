/*!
Collision response for secondary-motion bone chains (hair, cloth, tails).

A [`BoneCollider`] is a sphere, capsule or bounded plane attached to a scene
object. Each simulation step the owning solver calls
[`BoneCollider::resolve`] once per particle per collider, passing the owner's
current [`Pose`]; the returned position is pushed out of (or held inside) the
shape. Several colliders are combined by feeding each result into the next call.

Modules:

- types:    math aliases, `Pose`, `Axis`, `Bound`
- settings: defaults and numeric tolerances
- frame:    plane tangent frame with the vertical-normal fallback
- resolve:  per-primitive push-out rules
- collider: configuration, validation, pose derivation and shape dispatch
- debug:    read-only visualization geometry
- config:   RON/TOML loading and saving
- rapier:   building matching Rapier colliders for host-side queries
*/

pub mod collider;
pub mod config;
pub mod debug;
pub mod frame;
pub mod rapier;
pub mod resolve;
pub mod settings;
pub mod types;

pub use collider::{BoneCollider, ColliderShape, WorldShape};
pub use config::{ConfigError, Validate, load_from_file, save_to_file};
pub use debug::DebugGeometry;
pub use frame::PlaneFrame;
pub use rapier::collider_from_bone;
pub use resolve::WorldPlane;
pub use types::{Axis, Bound, Pose, Quat, Vec3};
