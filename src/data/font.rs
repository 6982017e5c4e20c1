//! Glyphs and the font that collects them
//!
//! A [`Font`] only ever grows through a [`GlyphAccumulator`], which owns it
//! exclusively until [`GlyphAccumulator::into_font`] hands it over to the
//! serializer. Glyphs keep the order they were added in; that order is the
//! order of the encoding table.

use crate::catalog::GlyphRecord;
use crate::core::errors::{SlcError, SlcResult};
use crate::font_source::Metrics;
use crate::geometry::boolean::PolygonOps;
use crate::geometry::contour::{Contour, Shape};
use crate::tools::{ArcStyle, GlyphBuilder};
use std::collections::HashSet;
use tracing::{debug, info};

/// Number of slots in a full Unicode encoding table
pub const UNICODE_FULL_SIZE: u32 = 0x11_0000;

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub name: String,
    pub codepoint: u32,
    pub advance_width: f64,
    pub contours: Vec<Contour>,
}

impl Glyph {
    pub fn new(name: impl Into<String>, codepoint: u32, advance_width: f64) -> Self {
        Self {
            name: name.into(),
            codepoint,
            advance_width,
            contours: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub ascent: f64,
    pub descent: f64,
    /// Width given to every new glyph
    pub advance_width: f64,
    pub encoding_size: u32,
    pub glyphs: Vec<Glyph>,
}

impl Font {
    pub fn new(metrics: &Metrics) -> Self {
        Self {
            ascent: metrics.ascent,
            descent: metrics.descent,
            advance_width: metrics.width,
            encoding_size: UNICODE_FULL_SIZE,
            glyphs: Vec::new(),
        }
    }

    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.iter().find(|glyph| glyph.name == name)
    }

    pub fn contour_count(&self) -> usize {
        self.glyphs.iter().map(|glyph| glyph.contours.len()).sum()
    }
}

/// Position of a glyph inside the font being accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphId(usize);

/// Single owner of a font under construction.
#[derive(Debug)]
pub struct GlyphAccumulator {
    font: Font,
    names: HashSet<String>,
}

impl GlyphAccumulator {
    pub fn new(metrics: &Metrics) -> Self {
        Self {
            font: Font::new(metrics),
            names: HashSet::new(),
        }
    }

    /// Append an empty glyph with the font's default width.
    pub fn new_glyph(&mut self, name: &str, codepoint: u32) -> SlcResult<GlyphId> {
        let glyph = Glyph::new(name, codepoint, self.font.advance_width);
        self.push(glyph)
    }

    fn push(&mut self, glyph: Glyph) -> SlcResult<GlyphId> {
        if !self.names.insert(glyph.name.clone()) {
            return Err(SlcError::DuplicateGlyph { name: glyph.name });
        }
        self.font.glyphs.push(glyph);
        Ok(GlyphId(self.font.glyphs.len() - 1))
    }

    /// Add the contours of `shape` to a glyph, after the ones it already has.
    pub fn attach(&mut self, id: GlyphId, shape: Shape) -> SlcResult<()> {
        let glyph = self
            .font
            .glyphs
            .get_mut(id.0)
            .ok_or(SlcError::InvalidParameter {
                name: "glyph id",
                value: id.0 as f64,
                reason: "no such glyph in this font",
            })?;
        glyph.contours.extend(shape.contours);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.font.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.font.glyphs.is_empty()
    }

    pub fn into_font(self) -> Font {
        self.font
    }
}

fn build_glyph<P: PolygonOps + ?Sized>(
    metrics: &Metrics,
    ops: &P,
    arc_style: ArcStyle,
    record: &GlyphRecord,
) -> SlcResult<Glyph> {
    let glyph = GlyphBuilder::new(metrics, ops, record.name.as_str(), record.codepoint)
        .with_arc_style(arc_style)
        .apply_all(&record.steps)?
        .finish();
    debug!(
        "Built {} (U+{:04X}): {} contours",
        glyph.name,
        glyph.codepoint,
        glyph.contours.len()
    );
    Ok(glyph)
}

/// Build every record into one font, keeping the records' order.
///
/// Glyphs are independent of each other; with the `parallel` feature they are
/// built on the rayon thread pool and collected back in order.
pub fn build_font<P: PolygonOps + ?Sized>(
    metrics: &Metrics,
    ops: &P,
    arc_style: ArcStyle,
    records: &[GlyphRecord],
) -> SlcResult<Font> {
    let glyphs = build_glyphs(metrics, ops, arc_style, records, cfg!(feature = "parallel"))?;
    let mut accumulator = GlyphAccumulator::new(metrics);
    for glyph in glyphs {
        let id = accumulator.new_glyph(&glyph.name, glyph.codepoint)?;
        accumulator.attach(id, glyph.contours.into_iter().collect())?;
    }
    info!("Built {} glyphs", accumulator.len());
    Ok(accumulator.into_font())
}

#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn build_glyphs<P: PolygonOps + ?Sized>(
    metrics: &Metrics,
    ops: &P,
    arc_style: ArcStyle,
    records: &[GlyphRecord],
    parallel: bool,
) -> SlcResult<Vec<Glyph>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return records
                .par_iter()
                .map(|record| build_glyph(metrics, ops, arc_style, record))
                .collect();
        }
    }
    records
        .iter()
        .map(|record| build_glyph(metrics, ops, arc_style, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sfd;
    use crate::font_source::MetricOverrides;
    use crate::geometry::boolean::GeoOps;
    use crate::geometry::primitives::raw_rect;
    use crate::tools::BuildStep;

    fn metrics() -> Metrics {
        Metrics::resolve(&MetricOverrides::default()).unwrap()
    }

    fn record(name: &str, codepoint: u32, steps: Vec<BuildStep>) -> GlyphRecord {
        GlyphRecord {
            name: name.to_string(),
            codepoint,
            steps,
        }
    }

    #[test]
    fn test_new_glyph_uses_default_width() {
        let mut acc = GlyphAccumulator::new(&metrics());
        let id = acc.new_glyph("space", 0x20).unwrap();
        acc.attach(id, raw_rect(0.0, 10.0, 10.0, 0.0).unwrap()).unwrap();
        acc.attach(id, raw_rect(20.0, 10.0, 30.0, 0.0).unwrap()).unwrap();
        let font = acc.into_font();
        assert_eq!(font.glyphs[0].advance_width, 1000.0);
        assert_eq!(font.glyphs[0].contours.len(), 2);
        assert_eq!(font.encoding_size, 1_114_112);
    }

    #[test]
    fn test_attach_to_unknown_glyph_fails() {
        let mut acc = GlyphAccumulator::new(&metrics());
        acc.new_glyph("a", 0x61).unwrap();
        let shape = raw_rect(0.0, 10.0, 10.0, 0.0).unwrap();
        let err = acc.attach(GlyphId(1), shape).unwrap_err();
        assert!(matches!(err, SlcError::InvalidParameter { name: "glyph id", .. }));
        assert!(acc.into_font().glyphs[0].contours.is_empty());
    }

    #[test]
    fn test_parallel_and_serial_builds_are_identical() {
        let m = metrics();
        let records = crate::catalog::legacy_catalog(&m);
        let serial = build_glyphs(&m, &GeoOps, ArcStyle::Polygon, &records, false).unwrap();
        let parallel = build_glyphs(&m, &GeoOps, ArcStyle::Polygon, &records, true).unwrap();
        assert_eq!(serial.len(), records.len());
        assert!(serial == parallel, "glyphs differ between serial and parallel builds");

        let font = build_font(&m, &GeoOps, ArcStyle::Polygon, &records).unwrap();
        let mut reference = GlyphAccumulator::new(&m);
        for glyph in serial {
            let id = reference.new_glyph(&glyph.name, glyph.codepoint).unwrap();
            reference.attach(id, glyph.contours.into_iter().collect()).unwrap();
        }
        assert!(
            sfd::serialize(&font) == sfd::serialize(&reference.into_font()),
            "serialized bytes differ"
        );
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut acc = GlyphAccumulator::new(&metrics());
        acc.new_glyph("a", 0x61).unwrap();
        let err = acc.new_glyph("a", 0x62).unwrap_err();
        assert!(matches!(err, SlcError::DuplicateGlyph { name } if name == "a"));
    }

    #[test]
    fn test_build_font_keeps_record_order() {
        let m = metrics();
        let records = vec![
            record("uni2588", 0x2588, vec![BuildStep::Rect { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 }]),
            record("space", 0x20, vec![]),
            record(
                "uni2500",
                0x2500,
                vec![BuildStep::BoxDrawLight(vec![vec![(0.0, 0.5), (1.0, 0.5)]])],
            ),
        ];
        let font = build_font(&m, &GeoOps, ArcStyle::Polygon, &records).unwrap();
        let names: Vec<&str> = font.glyphs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["uni2588", "space", "uni2500"]);
        assert_eq!(font.contour_count(), 2);
        assert!(font.glyph("space").unwrap().contours.is_empty());
    }

    #[test]
    fn test_build_font_reports_failing_glyph() {
        let m = metrics();
        let records = vec![record(
            "bad",
            0xE000,
            vec![BuildStep::Poly(vec![(0.0, 0.0), (1.0, 0.0)])],
        )];
        let err = build_font(&m, &GeoOps, ArcStyle::Polygon, &records).unwrap_err();
        assert!(matches!(err, SlcError::Geometry { glyph, .. } if glyph == "bad"));
    }
}
