use std::sync::Arc;

use crate::{
    assets::background::{Background, PreparedImage},
    compose::{DrawOp, SlidePlan},
    foundation::error::{CarouselError, CarouselResult},
    text::{face::TextBrushRgba8, fonts::FontResolution},
};

/// Paint `plan` into an RGB image of exactly `plan.canvas` dimensions.
///
/// Text ops are skipped when `fonts` holds no faces.
pub fn render_plan(plan: &SlidePlan, fonts: &mut FontResolution) -> CarouselResult<image::RgbImage> {
    let width_u16: u16 = plan
        .canvas
        .width
        .try_into()
        .map_err(|_| CarouselError::render("canvas width exceeds u16"))?;
    let height_u16: u16 = plan
        .canvas
        .height
        .try_into()
        .map_err(|_| CarouselError::render("canvas height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);

    draw_background(&mut ctx, &plan.background, width_u16, height_u16)?;

    let mut skipped = 0usize;
    for op in &plan.ops {
        if !draw_text(&mut ctx, op, fonts)? {
            skipped += 1;
        }
    }
    if skipped > 0 {
        tracing::debug!(index = plan.index, skipped, "no fonts loaded, text ops skipped");
    }

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    readback_rgb8(&pixmap, plan.canvas.width, plan.canvas.height)
}

fn draw_background(
    ctx: &mut vello_cpu::RenderContext,
    background: &Background,
    width: u16,
    height: u16,
) -> CarouselResult<()> {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match background {
        Background::Solid(c) => {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }
        Background::Image(img) => {
            let pixmap = image_premul_bytes_to_pixmap(img)?;
            let (w, h) = (f64::from(pixmap.width()), f64::from(pixmap.height()));
            ctx.set_paint(vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            });
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        }
    }
    Ok(())
}

/// Returns `false` when the op was skipped for lack of a face.
fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    fonts: &mut FontResolution,
) -> CarouselResult<bool> {
    let Some(face) = fonts.face_mut(op.face) else {
        return Ok(false);
    };

    let brush = TextBrushRgba8 {
        r: op.color.r,
        g: op.color.g,
        b: op.color.b,
        a: 255,
    };
    let layout = face.layout(&op.text, op.size_px, brush)?;
    let font = face.font_data();

    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(op.x),
        f64::from(op.y),
    )));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            // Positioned glyphs carry the run offset and the line baseline; bare `glyphs()` are
            // run-relative and would stack every glyph at the run origin.
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    Ok(true)
}

fn image_premul_bytes_to_pixmap(img: &PreparedImage) -> CarouselResult<vello_cpu::Pixmap> {
    let w: u16 = img
        .width
        .try_into()
        .map_err(|_| CarouselError::render("image width exceeds u16"))?;
    let h: u16 = img
        .height
        .try_into()
        .map_err(|_| CarouselError::render("image height exceeds u16"))?;
    if img.rgba8_premul.len() != img.width as usize * img.height as usize * 4 {
        return Err(CarouselError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(img.width as usize * img.height as usize);
    for px in img.rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn readback_rgb8(
    pixmap: &vello_cpu::Pixmap,
    width: u32,
    height: u32,
) -> CarouselResult<image::RgbImage> {
    let premul = pixmap.data_as_u8_slice();
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for px in premul.chunks_exact(4) {
        rgb.extend_from_slice(&unpremultiply_rgb(px));
    }
    image::RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| CarouselError::render("pixmap size does not match canvas"))
}

fn unpremultiply_rgb(px: &[u8]) -> [u8; 3] {
    let a = px[3] as u16;
    match a {
        0 => [0, 0, 0],
        255 => [px[0], px[1], px[2]],
        _ => {
            let un = |c: u8| -> u8 { ((c as u16 * 255 + a / 2) / a).min(255) as u8 };
            [un(px[0]), un(px[1]), un(px[2])]
        }
    }
}
