//! Glyph catalog
//!
//! The repertoire is plain data: each [`GlyphRecord`] pairs a glyph name and
//! code point with the build steps that draw it. Nothing here touches
//! geometry; the steps are interpreted by [`crate::tools::GlyphBuilder`].
//!
//! A few offsets depend on the metrics (line weights, gaps and tick lengths
//! expressed as fractions of the em box), so the table is produced per run by
//! [`legacy_catalog`].

use crate::font_source::Metrics;
use crate::geometry::Polyline;
use crate::tools::{BuildStep, UnitPoint};

/// `lines![[(x, y), ..], [..]]` is a list of polylines.
macro_rules! lines {
    ($([$($p:expr),* $(,)?]),* $(,)?) => {
        vec![$(vec![$($p),*]),*]
    };
}

mod table;

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    pub name: String,
    pub codepoint: u32,
    pub steps: Vec<BuildStep>,
}

/// Every glyph this crate knows how to draw, in output order.
pub fn legacy_catalog(metrics: &Metrics) -> Vec<GlyphRecord> {
    table::records(metrics)
}

/// Metric-derived offsets in unit-square terms
#[derive(Debug, Clone, Copy)]
pub(crate) struct Offsets {
    /// Half a light line, horizontally
    pub xe: f64,
    /// Half a light line, vertically
    pub ye: f64,
    /// Half the spacing of a double line, horizontally
    pub xg: f64,
    pub yg: f64,
    /// The same spacing measured across a diagonal
    pub xgd: f64,
    pub ygd: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Offsets {
    pub fn new(m: &Metrics) -> Self {
        let (w, h) = (m.width, m.height);
        let light = m.box_light_weight;
        let double = light + m.box_double_gap;
        let diagonal = h.atan2(w);
        Self {
            xe: light / (w * 2.0),
            ye: light / (h * 2.0),
            xg: double / (w * 2.0),
            yg: double / (h * 2.0),
            xgd: double / (diagonal.sin() * w * 2.0),
            ygd: double / (diagonal.cos() * h * 2.0),
            tx: m.box_tick_length / w,
            ty: m.box_tick_length / h,
        }
    }
}

fn named(name: &str, codepoint: u32, steps: Vec<BuildStep>) -> GlyphRecord {
    GlyphRecord {
        name: name.to_string(),
        codepoint,
        steps,
    }
}

/// A glyph named after its code point, `uXXXXX`.
fn coded(codepoint: u32, steps: Vec<BuildStep>) -> GlyphRecord {
    named(&format!("u{codepoint:X}"), codepoint, steps)
}

fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> BuildStep {
    BuildStep::Rect { x1, y1, x2, y2 }
}

fn poly(points: &[UnitPoint]) -> BuildStep {
    BuildStep::Poly(points.to_vec())
}

fn light(lines: Vec<Polyline>) -> BuildStep {
    BuildStep::BoxDrawLight(lines)
}

fn heavy(lines: Vec<Polyline>) -> BuildStep {
    BuildStep::BoxDrawHeavy(lines)
}

fn mixed(light: Vec<Polyline>, heavy: Vec<Polyline>) -> BuildStep {
    BuildStep::BoxDrawMixed { light, heavy }
}

fn diag(lines: Vec<Polyline>) -> BuildStep {
    BuildStep::BoxDrawDiag(lines)
}

fn shade(rows: u32, cols: u32, inverse: bool) -> BuildStep {
    BuildStep::Shade {
        rows,
        cols,
        inverse,
    }
}

fn ltshade(rows: u32, cols: u32) -> BuildStep {
    BuildStep::LightShade { rows, cols }
}

fn dkshade(rows: u32, cols: u32) -> BuildStep {
    BuildStep::DarkShade { rows, cols }
}

fn shadepart(rows: u32, cols: u32, inverse: bool, points: &[UnitPoint], union: bool) -> BuildStep {
    BuildStep::ShadePart {
        rows,
        cols,
        inverse,
        points: points.to_vec(),
        union,
    }
}

fn bitmap(rows: u32, cols: u32, bits: u32) -> BuildStep {
    BuildStep::Bitmap { rows, cols, bits }
}

fn sepmap(rows: u32, cols: u32, bits: u32) -> BuildStep {
    BuildStep::SepMap { rows, cols, bits }
}

fn diagfill(angle: f64) -> BuildStep {
    BuildStep::DiagFill { angle }
}

#[allow(clippy::too_many_arguments)]
fn ellipse(
    cx: f64,
    cy: f64,
    orx: f64,
    ory: f64,
    irx: f64,
    iry: f64,
    bx1: f64,
    by1: f64,
    bx2: f64,
    by2: f64,
) -> BuildStep {
    BuildStep::Ellipse {
        center: (cx, cy),
        outer: (orx, ory),
        inner: (irx, iry),
        bounds: [(bx1, by1), (bx2, by2)],
    }
}

fn arc(dx: i32, dy: i32) -> BuildStep {
    BuildStep::BoxDrawArc { dx, dy }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::MetricOverrides;
    use std::collections::HashSet;

    fn catalog() -> Vec<GlyphRecord> {
        legacy_catalog(&Metrics::resolve(&MetricOverrides::default()).unwrap())
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(catalog().len(), 814);
    }

    #[test]
    fn test_names_and_code_points_are_unique() {
        let records = catalog();
        let names: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        let codes: HashSet<u32> = records.iter().map(|r| r.codepoint).collect();
        assert_eq!(names.len(), records.len());
        assert_eq!(codes.len(), records.len());
    }

    #[test]
    fn test_catalog_starts_with_spaces() {
        let records = catalog();
        assert_eq!(records[0].name, "space");
        assert!(records[0].steps.is_empty());
        assert_eq!(records[1].codepoint, 0xA0);
    }

    #[test]
    fn test_kaypro_section_skips_encoded_patterns() {
        let records = catalog();
        let kaypro: Vec<(u32, u32)> = records
            .iter()
            .filter_map(|r| match r.steps.as_slice() {
                [BuildStep::Bitmap { rows: 4, cols: 2, bits }]
                    if (0x1CD00..0x1CE00).contains(&r.codepoint) =>
                {
                    Some((r.codepoint, *bits))
                }
                _ => None,
            })
            .collect();

        // Every 4x2 pattern not encoded elsewhere, ascending, on consecutive code points.
        let expected: Vec<(u32, u32)> = (0x1CD00..)
            .zip((0..0x100).filter(|n| !table::KAYPRO_ENCODED_ELSEWHERE.contains(n)))
            .collect();
        assert_eq!(kaypro.len(), 230);
        assert_eq!(kaypro, expected);
        assert_eq!(kaypro[0], (0x1CD00, 4));
        assert_eq!(kaypro[229], (0x1CDE5, 0xFE));

        // The section closes with a plain block, not a bitmap.
        let after = records.iter().find(|r| r.codepoint == 0x1CDF4).unwrap();
        assert_eq!(after.steps, vec![rect(0.25, 0.0, 0.75, 1.0)]);
    }

    #[test]
    fn test_offsets_follow_metrics() {
        let m = Metrics::resolve(&MetricOverrides::default()).unwrap();
        let o = Offsets::new(&m);
        assert!((o.xe - m.box_light_weight / 2000.0).abs() < 1e-12);
        assert!((o.xg - o.xe * 2.0).abs() < 1e-12);
        // Square em box: the diagonal spacing is √2 times the straight one.
        assert!((o.xgd - o.xg * 2f64.sqrt()).abs() < 1e-9);
        assert!((o.ty - m.box_tick_length / 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_box_drawing_block_is_complete() {
        let codes: HashSet<u32> = catalog().iter().map(|r| r.codepoint).collect();
        assert!((0x2500..=0x257F).all(|cp| codes.contains(&cp)));
        assert!((0x2580..=0x259F).all(|cp| codes.contains(&cp)));
    }
}
