use crate::types::Transform;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading a viewer configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window title and initial framebuffer size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Room Viewer".into(),
            width: 800,
            height: 600,
        }
    }
}

/// File names of the four textures the scene needs, relative to the asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureFiles {
    pub walls: String,
    pub stars: String,
    pub floor: String,
    pub planet: String,
}

impl Default for TextureFiles {
    fn default() -> Self {
        Self {
            walls: "purple.jpg".into(),
            stars: "stars.jpg".into(),
            floor: "floor.jpeg".into(),
            planet: "mars.jpg".into(),
        }
    }
}

impl TextureFiles {
    /// All four file names in load order.
    pub fn in_load_order(&self) -> [&str; 4] {
        [&self.walls, &self.stars, &self.floor, &self.planet]
    }
}

/// Upper bound for sphere sectors and stacks. Keeps every vertex index of
/// the sphere within `u32`.
pub const MAX_SPHERE_DIVISIONS: u32 = 1024;

/// Parameters of the procedural sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            sectors: 30,
            stacks: 30,
        }
    }
}

/// Everything the viewer needs to build its scene.
///
/// `Default` reproduces the built-in scene; a JSON file may override any
/// subset of the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera_position: Vec3,
    /// Model transform shared by the room, plane and floor meshes.
    pub scene_transform: Transform,
    pub sphere_transform: Transform,
    pub light_position: Vec3,
    pub light_scale: f32,
    pub clear_color: [f64; 4],
    pub asset_dir: PathBuf,
    pub textures: TextureFiles,
    pub sphere: SphereConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera_position: Vec3::new(0.0, 0.0, 3.0),
            scene_transform: Transform::from_translation_scale(Vec3::ZERO, 2.0),
            sphere_transform: Transform::default(),
            light_position: Vec3::new(0.5, -1.1, 1.0),
            light_scale: 0.3,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            asset_dir: PathBuf::from("."),
            textures: TextureFiles::default(),
            sphere: SphereConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce a degenerate window or sphere.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.sphere.sectors < 3 || self.sphere.stacks < 2 {
            return Err(ConfigError::Invalid(format!(
                "sphere needs at least 3 sectors and 2 stacks, got {}x{}",
                self.sphere.sectors, self.sphere.stacks
            )));
        }
        if self.sphere.sectors > MAX_SPHERE_DIVISIONS || self.sphere.stacks > MAX_SPHERE_DIVISIONS {
            return Err(ConfigError::Invalid(format!(
                "sphere allows at most {MAX_SPHERE_DIVISIONS} sectors and stacks, got {}x{}",
                self.sphere.sectors, self.sphere.stacks
            )));
        }
        if !(self.sphere.radius.is_finite() && self.sphere.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sphere radius must be positive, got {}",
                self.sphere.radius
            )));
        }
        Ok(())
    }

    /// Full path of a texture file inside the asset directory.
    pub fn texture_path(&self, file: &str) -> PathBuf {
        self.asset_dir.join(file)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_builtin_scene() {
        let config = ViewerConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera_position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(config.light_position, Vec3::new(0.5, -1.1, 1.0));
        assert_eq!(
            config.textures.in_load_order(),
            ["purple.jpg", "stars.jpg", "floor.jpeg", "mars.jpg"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.json");
        std::fs::write(&path, r#"{ "window": { "title": "Test" }, "light_scale": 0.5 }"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.window.title, "Test");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.light_scale, 0.5);
        assert_eq!(config.textures, TextureFiles::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_sized_window_rejected() {
        let mut config = ViewerConfig::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn flat_sphere_rejected() {
        let mut config = ViewerConfig::default();
        config.sphere.radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn oversized_sphere_rejected() {
        let mut config = ViewerConfig::default();
        config.sphere.sectors = 70_000;
        config.sphere.stacks = 70_000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.sphere.sectors = MAX_SPHERE_DIVISIONS;
        config.sphere.stacks = MAX_SPHERE_DIVISIONS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn texture_path_joins_asset_dir() {
        let config = ViewerConfig {
            asset_dir: PathBuf::from("assets"),
            ..ViewerConfig::default()
        };
        assert_eq!(
            config.texture_path("mars.jpg"),
            PathBuf::from("assets").join("mars.jpg")
        );
    }
}
