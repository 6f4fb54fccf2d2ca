//! Body texture loading
//!
//! Textures are reduced to their mean colour, which tints the body's disc.
//! Loads settle one per frame so startup never blocks on disk; a missing or
//! unreadable file leaves the body on its catalog colour.

use std::path::PathBuf;

use anyhow::{Context, Result};
use orrery_core::{Rgb, Simulation};

/// Reads texture files relative to an asset root.
#[derive(Debug, Clone)]
pub struct TextureLoader {
    root: PathBuf,
}

impl TextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(&self, relative: &str) -> Result<Rgb> {
        let path = self.root.join(relative);
        let bytes =
            std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        decode_mean_colour(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load(&self, relative: &str) -> Result<Rgb> {
        anyhow::bail!(
            "{} is not bundled with the web build",
            self.root.join(relative).display()
        )
    }
}

impl Default for TextureLoader {
    fn default() -> Self {
        Self::new("assets")
    }
}

/// Decode an encoded image and average its pixels.
pub fn decode_mean_colour(bytes: &[u8]) -> Result<Rgb> {
    let image = image::load_from_memory(bytes)?.to_rgb8();
    mean_colour(&image).context("Image has no pixels")
}

pub fn mean_colour(image: &image::RgbImage) -> Option<Rgb> {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return None;
    }
    let mut sum = [0u64; 3];
    for pixel in image.pixels() {
        for (total, channel) in sum.iter_mut().zip(pixel.0) {
            *total += u64::from(channel);
        }
    }
    Some(Rgb(sum.map(|total| (total / count) as u8)))
}

/// Settle the next pending texture, if any. Returns whether one was handled.
///
/// Bodies come first; the sky backdrop loads last.
pub fn resolve_next(sim: &mut Simulation, loader: &TextureLoader) -> bool {
    let next = sim
        .state()
        .pending_textures()
        .next()
        .map(|(id, path)| (id, path.to_owned()));

    if let Some((id, path)) = next {
        let outcome = loader.load(&path);
        if outcome.is_ok() {
            log::debug!("Loaded texture {path}");
        }
        sim.resolve_appearance(id, outcome);
        return true;
    }

    let Some(path) = sim.state().starfield().pending_texture() else {
        return false;
    };
    let outcome = loader.load(path);
    if outcome.is_ok() {
        log::debug!("Loaded star map {path}");
    }
    sim.resolve_backdrop(outcome);
    true
}
