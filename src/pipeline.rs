use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine as _;

use crate::{
    assets::background::prepare_background,
    compose::{SlideInput, compose_slide},
    config::CarouselConfig,
    foundation::error::CarouselResult,
    model::{CarouselOutput, CarouselRequest, SLIDE_COUNT},
    render::cpu::render_plan,
    text::fonts::{FontResolution, resolve_fonts},
};

#[derive(Clone, Copy, Debug, Default)]
/// Options for [`generate_carousel`].
pub struct GenerateOpts {
    /// Also return every PNG as a `data:image/png;base64,...` URI.
    pub embed_data_uris: bool,
}

/// File name of the `index`-th (1-based) slide.
pub fn slide_file_name(index: usize) -> String {
    format!("slide_{index}.png")
}

/// Render every slide of `request` into `output_dir`, resolving fonts from `config`.
#[tracing::instrument(skip_all, fields(output_dir = %output_dir.display()))]
pub fn generate_carousel(
    request: &CarouselRequest,
    output_dir: &Path,
    config: &CarouselConfig,
    opts: GenerateOpts,
) -> CarouselResult<CarouselOutput> {
    create_output_dir(output_dir)?;
    request.validate()?;

    let mut fonts = resolve_fonts(&config.typography);
    render_all(request, output_dir, config, &mut fonts, opts)
}

/// Like [`generate_carousel`], with fonts already resolved by the caller.
pub fn generate_carousel_with_fonts(
    request: &CarouselRequest,
    output_dir: &Path,
    config: &CarouselConfig,
    fonts: &mut FontResolution,
    opts: GenerateOpts,
) -> CarouselResult<CarouselOutput> {
    create_output_dir(output_dir)?;
    request.validate()?;
    render_all(request, output_dir, config, fonts, opts)
}

fn create_output_dir(output_dir: &Path) -> CarouselResult<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir '{}'", output_dir.display()))?;
    Ok(())
}

fn render_all(
    request: &CarouselRequest,
    output_dir: &Path,
    config: &CarouselConfig,
    fonts: &mut FontResolution,
    opts: GenerateOpts,
) -> CarouselResult<CarouselOutput> {
    let background = prepare_background(
        request.background_path.as_deref(),
        config.canvas,
        config.palette.background,
    );

    let mut files = Vec::with_capacity(SLIDE_COUNT);
    let mut images = opts
        .embed_data_uris
        .then(|| Vec::with_capacity(SLIDE_COUNT));

    for (i, slide) in request.slides.iter().enumerate() {
        let index = i + 1;
        let input = SlideInput {
            index,
            total: SLIDE_COUNT,
            title: &slide.title,
            subtitle: slide.subtitle_text(),
            keywords: &request.keywords,
            branding: &request.branding,
        };

        let plan = compose_slide(input, &background, config, fonts)?;
        let img = render_plan(&plan, fonts)?;
        let png = encode_png(&img)?;

        let path: PathBuf = output_dir.join(slide_file_name(index));
        std::fs::write(&path, &png)
            .with_context(|| format!("write png '{}'", path.display()))?;

        tracing::info!("\u{2713} slide {index}/{SLIDE_COUNT} generated: {}", path.display());

        if let Some(images) = images.as_mut() {
            images.push(png_data_uri(&png));
        }
        files.push(path.display().to_string());
    }

    Ok(CarouselOutput {
        success: true,
        files,
        images,
    })
}

/// Encode an RGB image as PNG bytes.
pub fn encode_png(img: &image::RgbImage) -> CarouselResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

pub fn png_data_uri(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}
