//! Carousel renders fixed-length Instagram slide carousels into PNG files.
//!
//! A run goes through four stages:
//!
//! - Parse and validate a [`CarouselRequest`]
//! - Resolve fonts once ([`resolve_fonts`])
//! - Compose each slide into a [`SlidePlan`] ([`compose_slide`]), which wraps and highlights the
//!   title with the greedy rules in [`text::wrap`]
//! - Rasterize the plan on the CPU ([`render_plan`]) and write `slide_{n}.png`
//!
//! [`generate_carousel`] runs the whole pipeline.
#![forbid(unsafe_code)]

mod foundation;

pub mod assets;
pub mod compose;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod text;

pub use crate::foundation::core::{Canvas, Rgb8};
pub use crate::foundation::error::{CarouselError, CarouselResult};

pub use crate::assets::background::{Background, PreparedImage, prepare_background};
pub use crate::compose::{DrawOp, OpRole, SlideInput, SlidePlan, compose_slide};
pub use crate::config::{CarouselConfig, FacePair, LayoutMetrics, Palette, Typography};
pub use crate::model::{
    CarouselOutput, CarouselRequest, DEFAULT_BRANDING, DEFAULT_FILE_OUTPUT_DIR,
    DEFAULT_STDIN_OUTPUT_DIR, SLIDE_COUNT, SlideSpec,
};
pub use crate::pipeline::{
    GenerateOpts, encode_png, generate_carousel, generate_carousel_with_fonts, png_data_uri,
    slide_file_name,
};
pub use crate::render::render_plan;
pub use crate::text::{FaceKind, FontResolution, FontSource, TextMeasure, resolve_fonts};
