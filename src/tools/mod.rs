//! Glyph construction surface
//!
//! Shapes are only ever added to a glyph through [`GlyphBuilder`], either by
//! calling its methods directly or by interpreting a list of [`BuildStep`]s.

pub mod builder;
pub mod steps;

pub use builder::GlyphBuilder;
pub use steps::{ArcStyle, BuildStep, UnitPoint};
