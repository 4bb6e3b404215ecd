//! Slide composition: turns one slide's texts into a [`SlidePlan`].
//!
//! Composition resolves every position and color up front (wrapping included), so the rasterizer
//! only has to paint. Plans are plain data and can be inspected without any fonts loaded.

use crate::{
    assets::background::Background,
    config::CarouselConfig,
    foundation::{
        core::{Canvas, Rgb8},
        error::{CarouselError, CarouselResult},
    },
    text::wrap::{FaceKind, Highlight, TextMeasure, TextStyle, WrapBox, wrap_centered},
};

/// What a [`DrawOp`] is on the slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpRole {
    Index,
    Title,
    Subtitle,
    Footer,
    Arrow,
}

/// A single text run with its top-left corner in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOp {
    pub role: OpRole,
    pub text: String,
    pub face: FaceKind,
    pub size_px: f32,
    pub color: Rgb8,
    pub x: f32,
    pub y: f32,
}

/// Everything needed to paint one slide.
#[derive(Clone, Debug)]
pub struct SlidePlan {
    /// 1-based slide number.
    pub index: usize,
    pub canvas: Canvas,
    pub background: Background,
    /// Painted in order, after the background.
    pub ops: Vec<DrawOp>,
}

impl SlidePlan {
    pub fn ops_with_role(&self, role: OpRole) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.role == role)
    }

    pub fn has_arrow(&self) -> bool {
        self.ops_with_role(OpRole::Arrow).next().is_some()
    }
}

/// Texts for one slide, borrowed from the request.
#[derive(Clone, Copy, Debug)]
pub struct SlideInput<'a> {
    /// 1-based position in the carousel.
    pub index: usize,
    /// Number of slides in the carousel.
    pub total: usize,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub keywords: &'a [String],
    pub branding: &'a str,
}

impl SlideInput<'_> {
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }
}

/// Lay out index label, title, subtitle, footer and (except on the last slide) the arrow.
pub fn compose_slide(
    input: SlideInput<'_>,
    background: &Background,
    config: &CarouselConfig,
    measure: &mut dyn TextMeasure,
) -> CarouselResult<SlidePlan> {
    if input.index == 0 || input.index > input.total {
        return Err(CarouselError::validation(format!(
            "slide index {} out of range 1..={}",
            input.index, input.total
        )));
    }

    let palette = &config.palette;
    let typo = &config.typography;
    let layout = &config.layout;
    let canvas_width = config.canvas.width_f32();
    let mut ops = Vec::new();

    ops.push(DrawOp {
        role: OpRole::Index,
        text: format!("{}/{}", input.index, input.total),
        face: FaceKind::Regular,
        size_px: typo.index_size,
        color: palette.index,
        x: layout.index_origin[0],
        y: layout.index_origin[1],
    });

    let title_style = TextStyle {
        face: FaceKind::Bold,
        size_px: if input.is_last() {
            typo.closing_title_size
        } else {
            typo.title_size
        },
        color: palette.title,
    };
    let title = wrap_centered(
        input.title,
        layout.title_top,
        title_style,
        WrapBox {
            canvas_width,
            max_width: layout.title_max_width,
            line_height: typo.line_height,
        },
        Some(Highlight {
            keywords: input.keywords,
            color: palette.accent,
        }),
        measure,
    );
    ops.extend(title.words.into_iter().map(|w| DrawOp {
        role: OpRole::Title,
        text: w.text,
        face: title_style.face,
        size_px: title_style.size_px,
        color: w.color,
        x: w.x,
        y: w.y,
    }));

    if let Some(subtitle) = input.subtitle.filter(|s| !s.is_empty()) {
        let sub_style = TextStyle {
            face: FaceKind::Regular,
            size_px: typo.subtitle_size,
            color: palette.subtitle,
        };
        let sub = wrap_centered(
            subtitle,
            title.next_y + layout.subtitle_gap,
            sub_style,
            WrapBox {
                canvas_width,
                max_width: layout.subtitle_max_width,
                line_height: typo.line_height,
            },
            None,
            measure,
        );
        ops.extend(sub.words.into_iter().map(|w| DrawOp {
            role: OpRole::Subtitle,
            text: w.text,
            face: sub_style.face,
            size_px: sub_style.size_px,
            color: w.color,
            x: w.x,
            y: w.y,
        }));
    }

    let footer_width = measure.advance(FaceKind::Regular, typo.footer_size, input.branding);
    ops.push(DrawOp {
        role: OpRole::Footer,
        text: input.branding.to_owned(),
        face: FaceKind::Regular,
        size_px: typo.footer_size,
        color: palette.footer,
        x: (canvas_width - footer_width) / 2.0,
        y: layout.footer_top,
    });

    if !input.is_last() {
        ops.push(DrawOp {
            role: OpRole::Arrow,
            text: layout.arrow_glyph.clone(),
            face: FaceKind::Bold,
            size_px: typo.arrow_size,
            color: palette.accent,
            x: layout.arrow_origin[0],
            y: layout.arrow_origin[1],
        });
    }

    tracing::debug!(
        index = input.index,
        ops = ops.len(),
        title_end = title.next_y,
        "composed slide"
    );

    Ok(SlidePlan {
        index: input.index,
        canvas: config.canvas,
        background: background.clone(),
        ops,
    })
}

#[cfg(test)]
#[path = "../tests/unit/compose/slide.rs"]
mod tests;
