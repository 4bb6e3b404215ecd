use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::{
    core::{Canvas, Rgb8},
    error::{CarouselError, CarouselResult},
};

#[derive(Clone, Debug)]
/// Raster background already resized to the canvas, in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// What sits under the text of every slide.
#[derive(Clone, Debug)]
pub enum Background {
    Solid(Rgb8),
    Image(PreparedImage),
}

impl Background {
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

/// Decode `path` and resize it to `canvas`, or fall back to `fill`.
///
/// A missing path falls back quietly. A file that exists but cannot be decoded falls back with a
/// warning.
pub fn prepare_background(path: Option<&Path>, canvas: Canvas, fill: Rgb8) -> Background {
    let Some(path) = path else {
        return Background::Solid(fill);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "background image not found, using solid fill");
        return Background::Solid(fill);
    }

    match load_resized(path, canvas) {
        Ok(img) => Background::Image(img),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "could not load background image, using solid fill"
            );
            Background::Solid(fill)
        }
    }
}

fn load_resized(path: &Path, canvas: Canvas) -> CarouselResult<PreparedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read background '{}'", path.display()))?;
    decode_resized(&bytes, canvas)
}

/// Decode encoded image bytes and resize (Lanczos3) to exactly `canvas`.
pub fn decode_resized(bytes: &[u8], canvas: Canvas) -> CarouselResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CarouselError::image(format!("decode background: {e}")))?;
    let rgb = dyn_img.to_rgb8();
    let resized = image::imageops::resize(
        &rgb,
        canvas.width,
        canvas.height,
        image::imageops::FilterType::Lanczos3,
    );
    let (width, height) = resized.dimensions();

    // Backgrounds are flattened to RGB, so every pixel is opaque and already premultiplied.
    let mut rgba8_premul = Vec::with_capacity(width as usize * height as usize * 4);
    for px in resized.pixels() {
        rgba8_premul.extend_from_slice(&[px[0], px[1], px[2], 255]);
    }

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}
