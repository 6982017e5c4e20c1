//! slcgen
//!
//! Procedural outlines for the Symbols for Legacy Computing: box drawing,
//! block elements, shades, mosaics and diagonal fills, drawn from a small set
//! of font metrics and written as a FontForge spline font database.
pub mod catalog;
pub mod core;
pub mod data;
pub mod font_source;
pub mod geometry;
pub mod logging;
#[cfg(test)]
mod tests;
pub mod tools;
