//! Shared types for the room viewer: transforms, movement directions and the
//! viewer configuration.

mod config;
mod types;

pub use config::{ConfigError, MAX_SPHERE_DIVISIONS, SphereConfig, TextureFiles, ViewerConfig, WindowConfig};
pub use types::{Direction, Transform};

pub fn crate_info() -> &'static str {
    "roomview-common v0.1.0"
}
