//! Slide rasterization.

pub mod cpu;

pub use cpu::render_plan;
