//! Font resolution, shaping and greedy word-wrap.

pub mod face;
pub mod fonts;
pub mod wrap;

pub use face::{LoadedFace, TextBrushRgba8};
pub use fonts::{FontResolution, FontSet, FontSource, resolve_fonts};
pub use wrap::{
    FaceKind, Highlight, PlacedWord, TextMeasure, TextStyle, WrapBox, WrappedBlock, break_lines,
    is_highlighted, wrap_centered,
};
