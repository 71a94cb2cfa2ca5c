//! Scene registry boundary.
//!
//! The collision pass only needs each object's position, scale and local
//! bounding sphere. Meshes, textures and animation live elsewhere.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::BoundingSphere;
use crate::error::VoloError;

/// A static scene object as seen by the collision pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Human-readable label used in logs.
    pub name: String,
    /// World-space position.
    pub position: Vec3,
    /// Non-uniform scale.
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    /// Model-space bounding sphere.
    pub bounds: BoundingSphere,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl SceneObject {
    /// Create a scene object.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: Vec3,
        scale: Vec3,
        bounds: BoundingSphere,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            scale,
            bounds,
        }
    }

    /// Bounding sphere in world space, derived on demand.
    #[must_use]
    pub fn world_bounds(&self) -> BoundingSphere {
        self.bounds.to_world(self.position, self.scale)
    }
}

/// Source of collidable objects, re-enumerated every frame.
pub trait SceneRegistry {
    /// All collidable objects. Order is only used to pick which collision
    /// gets reported.
    fn objects(&self) -> &[SceneObject];
}

/// Vec-backed scene registry, loadable from a TOML layout:
///
/// ```toml
/// [[objects]]
/// name = "hangar"
/// position = [-30.0, 0.0, -60.0]
/// scale = [3.0, 2.0, 3.0]
/// bounds = { center = [0.0, 0.0, 0.0], radius = 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl SceneRegistry for Scene {
    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}

impl Scene {
    /// Wrap an existing object list.
    #[must_use]
    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Append an object.
    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Parse a scene layout from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, VoloError> {
        toml::from_str(content).map_err(|e| VoloError::SceneParse(e.to_string()))
    }

    /// Load a scene layout from a TOML file.
    pub fn load(path: &Path) -> Result<Self, VoloError> {
        let content = std::fs::read_to_string(path).map_err(VoloError::Io)?;
        let scene = Self::from_toml_str(&content)?;
        log::info!(
            "loaded {} scene objects from {}",
            scene.len(),
            path.display()
        );
        Ok(scene)
    }

    /// The demo airfield: hangar and control tower beside the runway, with a
    /// few cloud banks overhead. Terrain is handled by the ground level, not
    /// by a bounding sphere.
    #[must_use]
    pub fn demo() -> Self {
        Self::from_objects(vec![
            SceneObject::new(
                "hangar",
                Vec3::new(-30.0, 0.0, -60.0),
                Vec3::new(3.0, 2.0, 3.0),
                BoundingSphere::new(Vec3::ZERO, 5.0),
            ),
            SceneObject::new(
                "tower",
                Vec3::new(25.0, 0.0, -120.0),
                Vec3::new(1.0, 4.0, 1.0),
                BoundingSphere::new(Vec3::new(0.0, 1.0, 0.0), 3.0),
            ),
            SceneObject::new(
                "cloud_bank_west",
                Vec3::new(-80.0, 70.0, -250.0),
                Vec3::new(4.0, 1.0, 2.0),
                BoundingSphere::new(Vec3::ZERO, 6.0),
            ),
            SceneObject::new(
                "cloud_bank_east",
                Vec3::new(90.0, 85.0, -320.0),
                Vec3::new(3.0, 1.0, 3.0),
                BoundingSphere::new(Vec3::ZERO, 6.0),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layout_with_default_scale() {
        let scene = Scene::from_toml_str(
            r#"
[[objects]]
name = "hangar"
position = [-30.0, 0.0, -60.0]
scale = [3.0, 2.0, 3.0]
bounds = { center = [0.0, 1.0, 0.0], radius = 5.0 }

[[objects]]
name = "rock"
position = [1.0, 2.0, 3.0]
bounds = { radius = 1.5 }
"#,
        )
        .unwrap();

        assert_eq!(scene.len(), 2);
        let hangar = &scene.objects()[0];
        assert_eq!(hangar.world_bounds().center, Vec3::new(-30.0, 2.0, -60.0));
        assert_eq!(hangar.world_bounds().radius, 15.0);

        let rock = &scene.objects()[1];
        assert_eq!(rock.scale, Vec3::ONE);
        assert_eq!(rock.bounds.center, Vec3::ZERO);
    }

    #[test]
    fn malformed_layout_is_reported() {
        let err = Scene::from_toml_str("[[objects]]\nname = 3").unwrap_err();
        assert!(matches!(err, VoloError::SceneParse(_)));
    }

    #[test]
    fn demo_runway_is_clear() {
        let scene = Scene::demo();
        assert!(!scene.is_empty());
        let start = BoundingSphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0);
        assert!(scene
            .objects()
            .iter()
            .all(|o| !start.intersects(&o.world_bounds())));
    }

    #[test]
    fn layout_round_trips_through_toml() {
        let scene = Scene::demo();
        let text = toml::to_string_pretty(&scene).unwrap();
        assert_eq!(Scene::from_toml_str(&text).unwrap(), scene);
    }
}
