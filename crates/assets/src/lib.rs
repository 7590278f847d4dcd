//! Scene assets that live on the CPU before upload: the literal mesh
//! tables, the procedural sphere and decoded texture images.
//!
//! Nothing here touches the GPU. The wgpu backend consumes these types by
//! value and uploads them once at startup.

mod mesh;
mod sphere;
pub mod tables;
mod texture;

use std::path::PathBuf;

pub use mesh::{Attribute, BuiltinMesh, MeshData, VertexLayout};
pub use sphere::SphereMesh;
pub use texture::{MipLevel, PixelFormat, TextureImage, mip_level_count};

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {} has {channels} channels, only 3 (RGB) and 4 (RGBA) are supported", .path.display())]
    UnsupportedChannels { path: PathBuf, channels: u8 },
    #[error("mesh {mesh}: {floats} floats is not a whole number of {stride}-float vertices")]
    RaggedVertexData {
        mesh: &'static str,
        floats: usize,
        stride: usize,
    },
}

impl AssetError {
    /// The file an image error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AssetError::Decode { path, .. } | AssetError::UnsupportedChannels { path, .. } => {
                Some(path)
            }
            AssetError::RaggedVertexData { .. } => None,
        }
    }
}

pub fn crate_info() -> &'static str {
    "roomview-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("assets"));
    }

    #[test]
    fn ragged_error_has_no_path() {
        let err = AssetError::RaggedVertexData {
            mesh: "room",
            floats: 9,
            stride: 8,
        };
        assert!(err.path().is_none());
        assert!(err.to_string().contains("room"));
    }
}
