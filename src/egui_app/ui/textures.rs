use std::collections::HashMap;

use eframe::egui::{self, TextureHandle, TextureOptions};

use crate::assets::{self, AssetSource};

/// GPU textures for decoded assets, keyed by asset path.
///
/// Failed loads are cached too so a missing file is logged once instead of
/// being re-read every frame.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<String, Result<TextureHandle, String>>,
}

impl TextureCache {
    pub fn get(
        &mut self,
        ctx: &egui::Context,
        assets: &dyn AssetSource,
        path: &str,
    ) -> Result<&TextureHandle, &str> {
        self.entries
            .entry(path.to_string())
            .or_insert_with(|| match assets::load_color_image(assets, path) {
                Ok(image) => {
                    tracing::debug!("Loaded asset {} ({}x{})", path, image.size[0], image.size[1]);
                    Ok(ctx.load_texture(path, image, TextureOptions::LINEAR))
                }
                Err(err) => {
                    tracing::warn!("Asset {} could not be loaded: {err}", path);
                    Err(err.to_string())
                }
            })
            .as_ref()
            .map_err(String::as_str)
    }
}
