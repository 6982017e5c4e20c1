//! Build steps: one tagged variant per shape operation
//!
//! A glyph is described by an ordered list of steps. The builder interprets
//! them one after another, appending each step's contours to the glyph.

use crate::geometry::Polyline;
use serde::{Deserialize, Serialize};

/// How rounded box-drawing corners are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArcStyle {
    /// Clipped ring reduced to straight edges
    #[default]
    Polygon,
    /// A single contour with explicit cubic segments
    Curve,
}

/// A unit-square point
pub type UnitPoint = (f64, f64);

#[derive(Debug, Clone, PartialEq)]
pub enum BuildStep {
    /// Rectangle between two unit-square corners
    Rect { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Rectangle between two design-unit corners
    RawRect { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Polygon through unit-square points
    Poly(Vec<UnitPoint>),
    /// Polygon through design-unit points
    RawPoly(Vec<UnitPoint>),
    /// Medium shade checkerboard
    Shade { rows: u32, cols: u32, inverse: bool },
    LightShade { rows: u32, cols: u32 },
    DarkShade { rows: u32, cols: u32 },
    /// Medium shade merged with (`union`) or clipped to a polygon
    ShadePart {
        rows: u32,
        cols: u32,
        inverse: bool,
        points: Vec<UnitPoint>,
        union: bool,
    },
    /// Cells selected by a row-major bit mask, merged
    Bitmap { rows: u32, cols: u32, bits: u32 },
    /// Cells selected by a bit mask, each inset by the separation margins
    SepMap { rows: u32, cols: u32, bits: u32 },
    /// Stripes at `angle` degrees
    DiagFill { angle: f64 },
    BoxDrawLight(Vec<Polyline>),
    BoxDrawHeavy(Vec<Polyline>),
    BoxDrawMixed {
        light: Vec<Polyline>,
        heavy: Vec<Polyline>,
    },
    /// Light lines that may be truncated at the em box
    BoxDrawDiag(Vec<Polyline>),
    /// Rounded corner in the configured [`ArcStyle`]
    BoxDrawArc { dx: i32, dy: i32 },
    /// Rounded corner, always with cubic segments
    ArcCorner { dx: i32, dy: i32 },
    /// Elliptical ring clipped to a rectangle, all in unit-square terms
    Ellipse {
        center: UnitPoint,
        outer: UnitPoint,
        inner: UnitPoint,
        bounds: [UnitPoint; 2],
    },
}

impl BuildStep {
    /// Short lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BuildStep::Rect { .. } => "rect",
            BuildStep::RawRect { .. } => "rawrect",
            BuildStep::Poly(_) => "poly",
            BuildStep::RawPoly(_) => "rawpoly",
            BuildStep::Shade { .. } => "shade",
            BuildStep::LightShade { .. } => "ltshade",
            BuildStep::DarkShade { .. } => "dkshade",
            BuildStep::ShadePart { .. } => "shadepart",
            BuildStep::Bitmap { .. } => "bitmap",
            BuildStep::SepMap { .. } => "sepmap",
            BuildStep::DiagFill { .. } => "diagfill",
            BuildStep::BoxDrawLight(_) => "boxdrawlight",
            BuildStep::BoxDrawHeavy(_) => "boxdrawheavy",
            BuildStep::BoxDrawMixed { .. } => "boxdrawmixed",
            BuildStep::BoxDrawDiag(_) => "boxdrawdiag",
            BuildStep::BoxDrawArc { .. } => "boxdrawarc",
            BuildStep::ArcCorner { .. } => "arccorner",
            BuildStep::Ellipse { .. } => "ellipse",
        }
    }
}
