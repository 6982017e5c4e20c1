//! Glyph builder
//!
//! [`GlyphBuilder`] is the only way shapes reach a glyph. Every operation
//! consumes the builder and hands back a new one with the operation's contours
//! appended, or an error that names the glyph being built.

use super::steps::{ArcStyle, BuildStep, UnitPoint};
use crate::core::errors::{GeomResult, SlcResult};
use crate::data::font::Glyph;
use crate::font_source::Metrics;
use crate::geometry::boolean::{GeoOps, PolygonOps};
use crate::geometry::contour::Shape;
use crate::geometry::point::CoordinateMapper;
use crate::geometry::stroke::{box_draw, Polyline};
use crate::geometry::{arc, patterns, primitives};
use kurbo::{Point, Vec2};
use tracing::trace;

pub struct GlyphBuilder<'a, P: PolygonOps + ?Sized = GeoOps> {
    metrics: &'a Metrics,
    ops: &'a P,
    arc_style: ArcStyle,
    glyph: Glyph,
}

impl<'a, P: PolygonOps + ?Sized> GlyphBuilder<'a, P> {
    /// Start an empty glyph as wide as the em box.
    pub fn new(metrics: &'a Metrics, ops: &'a P, name: impl Into<String>, codepoint: u32) -> Self {
        Self {
            metrics,
            ops,
            arc_style: ArcStyle::default(),
            glyph: Glyph::new(name, codepoint, metrics.width),
        }
    }

    pub fn with_arc_style(mut self, arc_style: ArcStyle) -> Self {
        self.arc_style = arc_style;
        self
    }

    pub fn name(&self) -> &str {
        &self.glyph.name
    }

    fn mapper(&self) -> CoordinateMapper<'a> {
        CoordinateMapper::new(self.metrics)
    }

    fn attach(mut self, shape: GeomResult<Shape>) -> SlcResult<Self> {
        let shape = shape.map_err(|fault| fault.in_glyph(&self.glyph.name))?;
        self.glyph.contours.extend(shape.contours);
        Ok(self)
    }

    pub fn rect(self, x1: f64, y1: f64, x2: f64, y2: f64) -> SlcResult<Self> {
        let shape = primitives::rect(&self.mapper(), x1, y1, x2, y2);
        self.attach(shape)
    }

    pub fn raw_rect(self, x1: f64, y1: f64, x2: f64, y2: f64) -> SlcResult<Self> {
        self.attach(primitives::raw_rect(x1, y1, x2, y2))
    }

    pub fn poly(self, points: &[UnitPoint]) -> SlcResult<Self> {
        let shape = primitives::poly(&self.mapper(), points);
        self.attach(shape)
    }

    pub fn raw_poly(self, points: &[UnitPoint]) -> SlcResult<Self> {
        let points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        self.attach(primitives::raw_poly(&points))
    }

    pub fn shade(self, rows: u32, cols: u32, inverse: bool) -> SlcResult<Self> {
        let shape = patterns::shade(self.metrics, rows, cols, inverse);
        self.attach(shape)
    }

    pub fn ltshade(self, rows: u32, cols: u32) -> SlcResult<Self> {
        let shape = patterns::light_shade(self.metrics, rows, cols);
        self.attach(shape)
    }

    pub fn dkshade(self, rows: u32, cols: u32) -> SlcResult<Self> {
        let shape = patterns::dark_shade(self.ops, self.metrics, rows, cols);
        self.attach(shape)
    }

    pub fn shadepart(
        self,
        rows: u32,
        cols: u32,
        inverse: bool,
        points: &[UnitPoint],
        union: bool,
    ) -> SlcResult<Self> {
        let shape = patterns::shade_part(self.ops, self.metrics, rows, cols, inverse, points, union);
        self.attach(shape)
    }

    pub fn bitmap(self, rows: u32, cols: u32, bits: u32) -> SlcResult<Self> {
        let shape = patterns::bitmap(self.ops, self.metrics, rows, cols, bits);
        self.attach(shape)
    }

    pub fn sepmap(self, rows: u32, cols: u32, bits: u32) -> SlcResult<Self> {
        let shape = patterns::separated_map(self.metrics, rows, cols, bits);
        self.attach(shape)
    }

    pub fn diagfill(self, angle: f64) -> SlcResult<Self> {
        let shape = patterns::diagonal_fill(self.ops, self.metrics, angle);
        self.attach(shape)
    }

    pub fn box_draw_light(self, lines: &[Polyline]) -> SlcResult<Self> {
        let shape = box_draw(self.ops, self.metrics, lines, &[], false);
        self.attach(shape)
    }

    pub fn box_draw_heavy(self, lines: &[Polyline]) -> SlcResult<Self> {
        let shape = box_draw(self.ops, self.metrics, &[], lines, false);
        self.attach(shape)
    }

    pub fn box_draw_mixed(self, light: &[Polyline], heavy: &[Polyline]) -> SlcResult<Self> {
        let shape = box_draw(self.ops, self.metrics, light, heavy, false);
        self.attach(shape)
    }

    /// Light lines, truncated at the em box when the metrics ask for it.
    pub fn box_draw_diag(self, lines: &[Polyline]) -> SlcResult<Self> {
        let truncate = self.metrics.box_line_truncate;
        let shape = box_draw(self.ops, self.metrics, lines, &[], truncate);
        self.attach(shape)
    }

    pub fn box_draw_arc(self, dx: i32, dy: i32) -> SlcResult<Self> {
        let shape = match self.arc_style {
            ArcStyle::Polygon => arc::box_draw_arc(self.ops, self.metrics, dx, dy),
            ArcStyle::Curve => arc::arc_corner(self.metrics, dx, dy),
        };
        self.attach(shape)
    }

    pub fn arc_corner(self, dx: i32, dy: i32) -> SlcResult<Self> {
        let shape = arc::arc_corner(self.metrics, dx, dy);
        self.attach(shape)
    }

    /// Elliptical ring in unit-square terms: x radii scale with the width,
    /// y radii with the height.
    pub fn ellipse(
        self,
        center: UnitPoint,
        outer: UnitPoint,
        inner: UnitPoint,
        bounds: [UnitPoint; 2],
    ) -> SlcResult<Self> {
        let mapper = self.mapper();
        let scale = |(rx, ry): UnitPoint| Vec2::new(mapper.scale_x(rx), mapper.scale_y(ry));
        let shape = arc::raw_ellipse(
            self.ops,
            mapper.map(center.0, center.1),
            scale(outer),
            scale(inner),
            mapper.map(bounds[0].0, bounds[0].1),
            mapper.map(bounds[1].0, bounds[1].1),
        );
        self.attach(shape)
    }

    pub fn raw_ellipse(
        self,
        center: Point,
        outer: Vec2,
        inner: Vec2,
        b1: Point,
        b2: Point,
    ) -> SlcResult<Self> {
        let shape = arc::raw_ellipse(self.ops, center, outer, inner, b1, b2);
        self.attach(shape)
    }

    /// Interpret one build step.
    pub fn apply(self, step: &BuildStep) -> SlcResult<Self> {
        trace!("{}: {}", self.glyph.name, step.name());
        match step {
            BuildStep::Rect { x1, y1, x2, y2 } => self.rect(*x1, *y1, *x2, *y2),
            BuildStep::RawRect { x1, y1, x2, y2 } => self.raw_rect(*x1, *y1, *x2, *y2),
            BuildStep::Poly(points) => self.poly(points),
            BuildStep::RawPoly(points) => self.raw_poly(points),
            BuildStep::Shade {
                rows,
                cols,
                inverse,
            } => self.shade(*rows, *cols, *inverse),
            BuildStep::LightShade { rows, cols } => self.ltshade(*rows, *cols),
            BuildStep::DarkShade { rows, cols } => self.dkshade(*rows, *cols),
            BuildStep::ShadePart {
                rows,
                cols,
                inverse,
                points,
                union,
            } => self.shadepart(*rows, *cols, *inverse, points, *union),
            BuildStep::Bitmap { rows, cols, bits } => self.bitmap(*rows, *cols, *bits),
            BuildStep::SepMap { rows, cols, bits } => self.sepmap(*rows, *cols, *bits),
            BuildStep::DiagFill { angle } => self.diagfill(*angle),
            BuildStep::BoxDrawLight(lines) => self.box_draw_light(lines),
            BuildStep::BoxDrawHeavy(lines) => self.box_draw_heavy(lines),
            BuildStep::BoxDrawMixed { light, heavy } => self.box_draw_mixed(light, heavy),
            BuildStep::BoxDrawDiag(lines) => self.box_draw_diag(lines),
            BuildStep::BoxDrawArc { dx, dy } => self.box_draw_arc(*dx, *dy),
            BuildStep::ArcCorner { dx, dy } => self.arc_corner(*dx, *dy),
            BuildStep::Ellipse {
                center,
                outer,
                inner,
                bounds,
            } => self.ellipse(*center, *outer, *inner, *bounds),
        }
    }

    /// Interpret every step in order.
    pub fn apply_all<'s>(self, steps: impl IntoIterator<Item = &'s BuildStep>) -> SlcResult<Self> {
        steps.into_iter().try_fold(self, |builder, step| builder.apply(step))
    }

    pub fn finish(self) -> Glyph {
        self.glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SlcError;
    use crate::font_source::MetricOverrides;
    use crate::geometry::contour::Segment;

    fn metrics() -> Metrics {
        Metrics::resolve(&MetricOverrides::default()).unwrap()
    }

    #[test]
    fn test_contours_accumulate_in_call_order() {
        let m = metrics();
        let glyph = GlyphBuilder::new(&m, &GeoOps, "corner", 0x2588)
            .rect(0.0, 0.0, 0.5, 1.0)
            .and_then(|b| b.rect(0.5, 0.5, 1.0, 1.0))
            .unwrap()
            .finish();
        assert_eq!(glyph.contours.len(), 2);
        assert_eq!(glyph.contours[0].start, Point::new(0.0, 800.0));
        assert_eq!(glyph.contours[1].start, Point::new(500.0, 300.0));
        assert_eq!(glyph.advance_width, 1000.0);
    }

    #[test]
    fn test_geometry_errors_name_the_glyph() {
        let m = metrics();
        let err = GlyphBuilder::new(&m, &GeoOps, "broken", 0xE000)
            .poly(&[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)])
            .err()
            .unwrap();
        match err {
            SlcError::Geometry {
                glyph, operation, ..
            } => {
                assert_eq!(glyph, "broken");
                assert_eq!(operation, "polygon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let m = metrics();
        let line = vec![vec![(0.0, 0.5), (1.0, 0.5)]];
        let direct = GlyphBuilder::new(&m, &GeoOps, "a", 0x2500)
            .box_draw_light(&line)
            .unwrap()
            .finish();
        let stepped = GlyphBuilder::new(&m, &GeoOps, "a", 0x2500)
            .apply_all(&[BuildStep::BoxDrawLight(line)])
            .unwrap()
            .finish();
        assert_eq!(direct, stepped);
    }

    #[test]
    fn test_arc_style_selects_construction() {
        let m = metrics();
        let has_curves = |style| {
            GlyphBuilder::new(&m, &GeoOps, "arc", 0x256D)
                .with_arc_style(style)
                .box_draw_arc(1, 1)
                .unwrap()
                .finish()
                .contours
                .iter()
                .flat_map(|c| c.segments.iter())
                .any(|s| matches!(s, Segment::Curve(..)))
        };
        assert!(!has_curves(ArcStyle::Polygon));
        assert!(has_curves(ArcStyle::Curve));
    }

    #[test]
    fn test_ellipse_scales_radii_per_axis() {
        let m = Metrics::resolve(&MetricOverrides {
            width: Some(500.0),
            ..Default::default()
        })
        .unwrap();
        let glyph = GlyphBuilder::new(&m, &GeoOps, "disc", 0x1FBE8)
            .ellipse((0.5, 0.5), (0.5, 0.5), (0.0, 0.0), [(0.0, 0.0), (1.0, 1.0)])
            .unwrap()
            .finish();
        let points = glyph.contours[0].on_curve_points();
        let min_x = points.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        // Flattening may shave a unit off the extremes.
        assert!(min_x >= 0.0 && min_x <= 2.0, "{min_x}");
        assert!(max_x <= 500.0 && max_x >= 498.0, "{max_x}");
        assert!(max_y <= 800.0 && max_y >= 798.0, "{max_y}");
    }

    #[test]
    fn test_empty_bitmap_adds_nothing() {
        let m = metrics();
        let glyph = GlyphBuilder::new(&m, &GeoOps, "blank", 0x1CD00)
            .bitmap(4, 2, 0)
            .unwrap()
            .finish();
        assert!(glyph.contours.is_empty());
    }
}
