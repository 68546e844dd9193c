//! Resolution and decoding of the pre-rendered PNG assets.
//!
//! Panel builders only need to know whether a path resolves to a decodable
//! image, so they talk to an [`AssetSource`]. The egui layer decodes the
//! resolved file into a [`egui::ColorImage`] when it first paints it.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A referenced image path does not resolve to a readable file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: The file '{path}' was not found. Please make sure it is in the asset folder.")]
pub struct MissingAssetError {
    /// The path exactly as referenced by the panel.
    pub path: String,
}

/// Failures while turning an asset reference into pixels.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error(transparent)]
    Missing(#[from] MissingAssetError),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Lookup of asset references to readable files.
pub trait AssetSource {
    /// Resolve `path` to a file that can be read, or report it missing.
    fn locate(&self, path: &str) -> Result<PathBuf, MissingAssetError>;

    /// Resolve `path` and confirm the file carries a decodable image header.
    ///
    /// Only the header is read, so this is cheap enough to call every frame.
    fn inspect(&self, path: &str) -> Result<PathBuf, AssetLoadError> {
        let file = self.locate(path)?;
        image::image_dimensions(&file).map_err(|source| AssetLoadError::Decode {
            path: file.clone(),
            source,
        })?;
        Ok(file)
    }
}

/// Assets stored as plain files under a root directory.
#[derive(Clone, Debug)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Assets relative to the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssets {
    fn locate(&self, path: &str) -> Result<PathBuf, MissingAssetError> {
        let candidate = self.root.join(path);
        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(MissingAssetError {
                path: path.to_string(),
            })
        }
    }
}

/// Read and decode an asset into an RGBA egui image.
pub fn load_color_image(
    assets: &dyn AssetSource,
    path: &str,
) -> Result<egui::ColorImage, AssetLoadError> {
    let file = assets.locate(path)?;
    let bytes = std::fs::read(&file).map_err(|source| AssetLoadError::Read {
        path: file.clone(),
        source,
    })?;
    decode_png(&bytes).map_err(|source| AssetLoadError::Decode { path: file, source })
}

fn decode_png(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
