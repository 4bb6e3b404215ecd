//! Immutable rendering configuration.
//!
//! A [`CarouselConfig`] is built once at startup (defaults, optionally overlaid by a JSON style
//! file) and passed by reference to every stage. Nothing in the crate keeps process-wide state.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{CarouselError, CarouselResult};

/// Top-level rendering configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Output canvas, identical for every slide.
    pub canvas: Canvas,
    pub palette: Palette,
    pub typography: Typography,
    pub layout: LayoutMetrics,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1080,
                height: 1350,
            },
            palette: Palette::default(),
            typography: Typography::default(),
            layout: LayoutMetrics::default(),
        }
    }
}

/// Colors used by the slide composer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Solid fill when no background image is available.
    pub background: Rgb8,
    /// Title words that are not highlighted.
    pub title: Rgb8,
    /// Highlighted title words and the navigation arrow.
    pub accent: Rgb8,
    pub subtitle: Rgb8,
    pub footer: Rgb8,
    /// `"{index}/{count}"` label.
    pub index: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb8::new(10, 20, 30),
            title: Rgb8::new(255, 255, 255),
            accent: Rgb8::new(255, 140, 0),
            subtitle: Rgb8::new(200, 200, 200),
            footer: Rgb8::new(160, 160, 160),
            index: Rgb8::new(150, 150, 150),
        }
    }
}

/// A bold/regular font file pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacePair {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

/// Font files and point sizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Typography {
    /// Preferred face pair.
    pub primary: FacePair,
    /// Tried when the primary pair is missing or unreadable.
    pub alternate: FacePair,
    /// Consult the system font database when neither pair loads.
    pub system_fallback: bool,
    pub index_size: f32,
    pub title_size: f32,
    /// Title size on the last slide.
    pub closing_title_size: f32,
    pub subtitle_size: f32,
    pub footer_size: f32,
    pub arrow_size: f32,
    /// Line advance as a multiple of the font size.
    pub line_height: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            primary: FacePair {
                bold: PathBuf::from("/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf"),
                regular: PathBuf::from("/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf"),
            },
            alternate: FacePair {
                bold: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                regular: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            },
            system_fallback: true,
            index_size: 35.0,
            title_size: 70.0,
            closing_title_size: 60.0,
            subtitle_size: 40.0,
            footer_size: 28.0,
            arrow_size: 45.0,
            line_height: 1.3,
        }
    }
}

/// Fixed positions and wrap widths, in canvas pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutMetrics {
    /// Top-left of the index label.
    pub index_origin: [f32; 2],
    pub title_top: f32,
    pub title_max_width: f32,
    /// Vertical gap between the end of the title and the subtitle.
    pub subtitle_gap: f32,
    pub subtitle_max_width: f32,
    pub footer_top: f32,
    /// Top-left of the navigation arrow.
    pub arrow_origin: [f32; 2],
    pub arrow_glyph: String,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            index_origin: [950.0, 60.0],
            title_top: 500.0,
            title_max_width: 900.0,
            subtitle_gap: 60.0,
            subtitle_max_width: 850.0,
            footer_top: 1260.0,
            arrow_origin: [980.0, 1250.0],
            arrow_glyph: "\u{2192}".to_owned(),
        }
    }
}

impl CarouselConfig {
    /// Load a JSON style file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> CarouselResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(CarouselError::validation("canvas dimensions must be > 0"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(CarouselError::validation(
                "canvas dimensions must fit in u16",
            ));
        }

        let t = &self.typography;
        let sizes = [
            ("index_size", t.index_size),
            ("title_size", t.title_size),
            ("closing_title_size", t.closing_title_size),
            ("subtitle_size", t.subtitle_size),
            ("footer_size", t.footer_size),
            ("arrow_size", t.arrow_size),
            ("line_height", t.line_height),
        ];
        for (name, v) in sizes {
            if !v.is_finite() || v <= 0.0 {
                return Err(CarouselError::validation(format!(
                    "typography.{name} must be finite and > 0"
                )));
            }
        }

        let l = &self.layout;
        if !(l.title_max_width > 0.0 && l.subtitle_max_width > 0.0) {
            return Err(CarouselError::validation("wrap widths must be > 0"));
        }
        Ok(())
    }
}
