use crate::program::ShaderError;
use roomview_assets::{AssetError, TextureImage};
use roomview_common::ViewerConfig;
use roomview_render::TextureSlot;
use std::collections::BTreeMap;
use std::path::Path;

/// Errors that stop the viewer before the first frame.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to build mesh")]
    Mesh(#[source] AssetError),
    #[error("failed to load texture {file}")]
    Texture {
        file: String,
        #[source]
        source: AssetError,
    },
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

/// Decode the four scene textures in load order. Stops at the first file
/// that fails and names it in the error.
pub fn load_scene_images(config: &ViewerConfig) -> Result<BTreeMap<TextureSlot, TextureImage>, StartupError> {
    load_with(config, |path| TextureImage::load(path))
}

fn load_with(
    config: &ViewerConfig,
    mut load: impl FnMut(&Path) -> Result<TextureImage, AssetError>,
) -> Result<BTreeMap<TextureSlot, TextureImage>, StartupError> {
    let mut images = BTreeMap::new();
    for slot in TextureSlot::ALL {
        let file = slot.file(&config.textures);
        let image = load(&config.texture_path(file)).map_err(|source| StartupError::Texture {
            file: file.to_string(),
            source,
        })?;
        images.insert(slot, image);
    }
    Ok(images)
}
