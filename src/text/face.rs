use crate::foundation::error::{CarouselError, CarouselResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// One loaded font face with its own Parley contexts.
///
/// Each face gets a private font collection holding only its own bytes, so the family lookup in
/// [`LoadedFace::layout`] can never resolve to a different face.
pub struct LoadedFace {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family: String,
    font: vello_cpu::peniko::FontData,
    origin: String,
}

impl std::fmt::Debug for LoadedFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFace")
            .field("family", &self.family)
            .field("origin", &self.origin)
            .finish()
    }
}

impl LoadedFace {
    /// Register `bytes` and pick the family to shape with.
    ///
    /// `preferred_family` selects among several families in a collection file; otherwise the first
    /// registered family is used.
    pub fn from_bytes(
        bytes: Vec<u8>,
        index: u32,
        preferred_family: Option<&str>,
        origin: impl Into<String>,
    ) -> CarouselResult<Self> {
        let origin = origin.into();
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);

        let mut names = Vec::with_capacity(families.len());
        for (id, _) in &families {
            if let Some(name) = font_ctx.collection.family_name(*id) {
                names.push(name.to_string());
            }
        }

        let family = match preferred_family {
            Some(p) if names.iter().any(|n| n == p) => p.to_owned(),
            _ => names.into_iter().next().ok_or_else(|| {
                CarouselError::font(format!("no font families registered from '{origin}'"))
            })?,
        };

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index);

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font,
            origin,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// File path or system database description the face was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shape `text` on a single unbounded line.
    pub fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> CarouselResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CarouselError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Advance width of `text`, trailing whitespace included.
    pub fn advance(&mut self, text: &str, size_px: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.layout(text, size_px, TextBrushRgba8::default()) {
            Ok(layout) => layout.full_width(),
            Err(err) => {
                tracing::debug!(error = %err, "text measurement failed");
                0.0
            }
        }
    }
}
