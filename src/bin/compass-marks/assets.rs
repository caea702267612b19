//! Embedded assets: the demo scene and marker sprites.

use compass_marks::Scene;
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MARKER_ICON_PATH: &str = "marker-icon.png";
pub const MARKER_ARROW_PATH: &str = "marker-arrow.png";
const SCENE_PATH: &str = "scene.ron";

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
/// In release mode, assets are compressed and embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Errors that can occur when loading a scene.
#[derive(Error, Debug)]
pub enum SceneLoadError {
    #[error("scene.ron not found in embedded assets")]
    SceneNotFound,
    #[error("failed to read scene '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid UTF-8 in scene: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse scene: {0}")]
    ParseError(#[from] ron::de::SpannedError),
}

/// Errors that can occur when loading and decoding images.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    #[error("failed to decode image '{path}': {source}")]
    DecodeError {
        path: String,
        source: image::ImageError,
    },
}

/// Decoded image data ready for texture creation.
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Loads and decodes an image from embedded assets.
pub fn load_and_decode_image(path: &str) -> Result<DecodedImage, ImageLoadError> {
    let file = Assets::get(path).ok_or_else(|| ImageLoadError::AssetNotFound(path.to_string()))?;

    let img =
        image::load_from_memory(&file.data).map_err(|source| ImageLoadError::DecodeError {
            path: path.to_string(),
            source,
        })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Loads the scene from `path`, or the bundled demo scene when `None`.
pub fn load_scene(path: Option<&Path>) -> Result<Scene, SceneLoadError> {
    let ron_string = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| SceneLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let file = Assets::get(SCENE_PATH).ok_or(SceneLoadError::SceneNotFound)?;
            std::str::from_utf8(&file.data)?.to_owned()
        }
    };
    Ok(ron::from_str(&ron_string)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_scene_parses() {
        let scene = load_scene(None).unwrap();
        assert!(!scene.objects.is_empty());
    }

    #[test]
    fn bundled_sprites_decode() {
        for path in [MARKER_ICON_PATH, MARKER_ARROW_PATH] {
            let image = load_and_decode_image(path).unwrap();
            assert_eq!(image.pixels.len(), (image.width * image.height * 4) as usize);
        }
    }

    #[test]
    fn missing_scene_file_reports_path() {
        let err = load_scene(Some(Path::new("does/not/exist.ron"))).unwrap_err();
        assert!(matches!(err, SceneLoadError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.ron"));
    }
}
