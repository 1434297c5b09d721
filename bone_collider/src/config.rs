//! Loading and saving collider configuration (RON or TOML).
//!
//! Everything that comes in through here is validated before it is returned, so a
//! deserialized collider is never observable with out-of-range parameters.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::collider::BoneCollider;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Types that clamp themselves into a valid state after an edit.
pub trait Validate {
    fn validate(&mut self);
}

impl Validate for BoneCollider {
    fn validate(&mut self) {
        BoneCollider::validate(self);
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&mut self) {
        self.iter_mut().for_each(Validate::validate);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Ron,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Ok(Format::Ron),
            Some("toml") => Ok(Format::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn from_ron_str<T: DeserializeOwned + Validate>(text: &str) -> Result<T, ConfigError> {
    let mut value: T = ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    value.validate();
    Ok(value)
}

pub fn from_toml_str<T: DeserializeOwned + Validate>(text: &str) -> Result<T, ConfigError> {
    let mut value: T = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    value.validate();
    Ok(value)
}

pub fn to_ron_string<T: Serialize>(value: &T) -> Result<String, ConfigError> {
    ron::ser::to_string_pretty(value, Default::default())
        .map_err(|e| ConfigError::Serialize(e.to_string()))
}

pub fn to_toml_string<T: Serialize>(value: &T) -> Result<String, ConfigError> {
    toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string()))
}

/// Load and validate a configuration file; the format is picked from the extension.
pub fn load_from_file<T: DeserializeOwned + Validate>(
    path: impl AsRef<Path>,
) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    log::info!("loading collider config from {}", path.display());

    let result = match format {
        Format::Ron => from_ron_str(&contents),
        Format::Toml => from_toml_str(&contents),
    };
    result.inspect_err(|e| log::warn!("failed to load {}: {e}", path.display()))
}

pub fn save_to_file<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let contents = match Format::from_path(path)? {
        Format::Ron => to_ron_string(value)?,
        Format::Toml => to_toml_string(value)?,
    };
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collider::ColliderShape,
        settings::MIN_PLANE_EXTENT,
        types::{Axis, Bound, Vec3},
    };

    #[test]
    fn ron_round_trip_keeps_collider() {
        let collider = BoneCollider::capsule(0.2, 1.5, Axis::Z)
            .with_center(Vec3::new(0.0, 0.5, -0.25))
            .with_bound(Bound::Inside);
        let text = to_ron_string(&collider).expect("serialize");
        let back: BoneCollider = from_ron_str(&text).expect("parse");
        assert_eq!(back, collider);
    }

    #[test]
    fn toml_input_is_clamped_on_load() {
        let text = r#"
bound = "Inside"

[shape.Plane]
width = -1.0
length = 0.001
axis = "Y"
"#;
        let collider: BoneCollider = from_toml_str(text).expect("parse");
        assert_eq!(collider.bound, Bound::Inside);
        assert_eq!(collider.center, Vec3::zeros());
        assert_eq!(
            collider.shape,
            ColliderShape::Plane {
                width: MIN_PLANE_EXTENT,
                length: MIN_PLANE_EXTENT,
                axis: Axis::Y,
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let collider: BoneCollider = from_ron_str("(bound: Inside)").expect("parse");
        assert_eq!(collider.shape, ColliderShape::default());
        assert_eq!(collider.bound, Bound::Inside);
    }

    #[test]
    fn collider_lists_are_validated_element_wise() {
        let list = vec![BoneCollider::default(), BoneCollider::default()];
        let mut text = to_ron_string(&list).expect("serialize");
        text = text.replace("0.5", "-0.5");
        let back: Vec<BoneCollider> = from_ron_str(&text).expect("parse");
        assert!(back.iter().all(|c| c.shape == ColliderShape::Sphere { radius: 0.0 }));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = from_ron_str::<BoneCollider>("(shape: Cube(1.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_extension_is_rejected_before_io() {
        let err = save_to_file(&BoneCollider::default(), "collider.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

        let err = load_from_file::<BoneCollider>("collider").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("bone_collider_does_not_exist.ron");
        let err = load_from_file::<BoneCollider>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn ron_file_round_trip() {
        let collider = BoneCollider::sphere(0.75).with_center(Vec3::new(1.0, 2.0, 3.0));
        let path = std::env::temp_dir().join(format!(
            "bone_collider_round_trip_{}.ron",
            std::process::id()
        ));
        save_to_file(&collider, &path).expect("save");
        let back: BoneCollider = load_from_file(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, collider);
    }

    #[test]
    fn toml_file_round_trip() {
        let collider = BoneCollider::plane(2.0, 0.5, Axis::Z)
            .with_center(Vec3::new(-1.0, 0.25, 4.0))
            .with_bound(Bound::Inside);
        let path = std::env::temp_dir().join(format!(
            "bone_collider_round_trip_{}.toml",
            std::process::id()
        ));
        save_to_file(&collider, &path).expect("save");
        let back: Result<BoneCollider, _> = load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(back.expect("load"), collider);
    }

    #[test]
    fn toml_file_is_picked_by_extension() {
        let path = std::env::temp_dir().join(format!(
            "bone_collider_load_{}.toml",
            std::process::id()
        ));
        let text = "center = [0.0, 1.0, 0.0]\n\n[shape.Sphere]\nradius = 0.25\n";
        std::fs::write(&path, text).expect("write");
        let loaded: Result<BoneCollider, _> = load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        let collider = loaded.expect("load");
        assert_eq!(collider.center, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(collider.shape, ColliderShape::Sphere { radius: 0.25 });
    }
}
