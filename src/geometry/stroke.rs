//! Box-drawing strokes
//!
//! A polyline becomes one rectangle per segment plus a mitre wedge at every
//! corner; the pieces overlap and are merged by the boolean backend.
//!
//! Non-truncated strokes end flush with their end points. Truncated strokes
//! first push each end point one segment further out, use square caps, and
//! are then clipped to the em box so that lines meet cleanly at the glyph
//! edges.

use super::boolean::{finalize, PolygonOps};
use super::contour::{Contour, Shape, Winding};
use super::point::CoordinateMapper;
use super::primitives::rect;
use crate::core::errors::{GeomResult, GeometryFault};
use crate::font_source::Metrics;
use kurbo::{Point, Vec2};

/// Unit-square polyline
pub type Polyline = Vec<(f64, f64)>;

/// Longest mitre allowed, as a multiple of half the stroke weight.
pub const MITER_LIMIT: f64 = 5.0;

/// Replace each end point with its mirror image across its neighbour.
pub fn extend_ends(line: &[(f64, f64)]) -> Polyline {
    let mut out = line.to_vec();
    let n = line.len();
    if n >= 2 {
        let (x0, y0) = line[0];
        let (x1, y1) = line[1];
        let (x2, y2) = line[n - 2];
        let (x3, y3) = line[n - 1];
        out[0] = (x0 - (x1 - x0), y0 - (y1 - y0));
        out[n - 1] = (x3 - (x2 - x3), y3 - (y2 - y3));
    }
    out
}

fn clockwise(points: &[Point]) -> Contour {
    Contour::polygon(points).with_winding(Winding::Clockwise)
}

/// Stroke pieces for one polyline already in design units.
fn stroke_pieces(points: &[Point], weight: f64, square_caps: bool) -> GeomResult<Shape> {
    let mut pts: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if pts.last() != Some(p) {
            pts.push(*p);
        }
    }
    if pts.len() < 2 {
        return Err(GeometryFault::new(
            "stroke",
            "a line needs two distinct points",
        ));
    }
    let half = weight / 2.0;
    let n = pts.len();

    if square_caps {
        let head = (pts[0] - pts[1]).normalize();
        let tail = (pts[n - 1] - pts[n - 2]).normalize();
        pts[0] += head * half;
        pts[n - 1] += tail * half;
    }

    let mut shape = Shape::new();
    for pair in pts.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let d = (b - a).normalize();
        let normal = Vec2::new(-d.y, d.x) * half;
        shape.push(clockwise(&[a + normal, b + normal, b - normal, a - normal]));
    }

    for corner in pts.windows(3) {
        let (a, p, b) = (corner[0], corner[1], corner[2]);
        let d1 = (p - a).normalize();
        let d2 = (b - p).normalize();
        let turn = d1.cross(d2);
        if turn.abs() < 1e-9 {
            // Straight on, or a full reversal: nothing to fill.
            continue;
        }
        // The gap opens on the outside of the turn.
        let side = if turn > 0.0 { -1.0 } else { 1.0 };
        let na = Vec2::new(-d1.y, d1.x) * side;
        let nb = Vec2::new(-d2.y, d2.x) * side;
        let cos = na.dot(nb);
        let reach = (2.0 / (1.0 + cos)).sqrt();
        if reach <= MITER_LIMIT {
            let miter = p + (na + nb) * (half / (1.0 + cos));
            shape.push(clockwise(&[p, p + na * half, miter, p + nb * half]));
        } else {
            shape.push(clockwise(&[p, p + na * half, p + nb * half]));
        }
    }
    Ok(shape)
}

/// Stroke one unit-square polyline at `weight` design units.
pub fn stroke_line<P: PolygonOps + ?Sized>(
    ops: &P,
    m: &Metrics,
    line: &[(f64, f64)],
    weight: f64,
    truncate: bool,
) -> GeomResult<Shape> {
    let mapper = CoordinateMapper::new(m);
    if truncate {
        let extended = extend_ends(line);
        let points: Vec<Point> = extended.iter().map(|&(x, y)| mapper.to_design(x, y)).collect();
        let pieces = stroke_pieces(&points, weight, true)?;
        let em_box = rect(&mapper, 0.0, 0.0, 1.0, 1.0)?;
        ops.intersect(&pieces, &em_box)
    } else {
        let points: Vec<Point> = line.iter().map(|&(x, y)| mapper.to_design(x, y)).collect();
        stroke_pieces(&points, weight, false)
    }
}

/// Stroke light and heavy polylines and merge them into one outline.
pub fn box_draw<P: PolygonOps + ?Sized>(
    ops: &P,
    m: &Metrics,
    light: &[Polyline],
    heavy: &[Polyline],
    truncate: bool,
) -> GeomResult<Shape> {
    let strokes = light
        .iter()
        .map(|line| (line, m.box_light_weight))
        .chain(heavy.iter().map(|line| (line, m.box_heavy_weight)))
        .map(|(line, weight)| stroke_line(ops, m, line, weight, truncate))
        .collect::<GeomResult<Vec<_>>>()?;
    if strokes.is_empty() {
        return Ok(Shape::new());
    }
    Ok(finalize(ops, &ops.union(&strokes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::MetricOverrides;
    use crate::geometry::boolean::GeoOps;

    fn metrics() -> Metrics {
        Metrics::resolve(&MetricOverrides::default()).unwrap()
    }

    fn bounds(shape: &Shape) -> (f64, f64, f64, f64) {
        let mut b = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for c in &shape.contours {
            for p in c.on_curve_points() {
                b = (b.0.min(p.x), b.1.min(p.y), b.2.max(p.x), b.3.max(p.y));
            }
        }
        b
    }

    #[test]
    fn test_extend_ends_mirrors_neighbours() {
        let line = extend_ends(&[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]);
        assert_eq!(line, vec![(0.5, 1.5), (0.5, 0.5), (1.5, 0.5)]);
    }

    #[test]
    fn test_horizontal_light_line_is_a_rectangle() {
        let m = metrics();
        let shape = box_draw(&GeoOps, &m, &[vec![(0.0, 0.5), (1.0, 0.5)]], &[], false).unwrap();
        assert_eq!(shape.len(), 1);
        let (x0, y0, x1, y1) = bounds(&shape);
        assert_eq!((x0, x1), (0.0, 1000.0));
        // Centred on y = 300 (the glyph's vertical middle).
        assert!(((y0 + y1) / 2.0 - 300.0).abs() <= 0.5);
        let w = m.box_light_weight;
        assert!((y1 - y0 - w).abs() <= 1.0);
        assert!((shape.signed_area().abs() - w * 1000.0).abs() <= 1000.0);
    }

    #[test]
    fn test_corner_has_a_square_outer_edge() {
        let m = metrics();
        let shape = box_draw(
            &GeoOps,
            &m,
            &[vec![(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]],
            &[],
            false,
        )
        .unwrap();
        assert_eq!(shape.len(), 1);
        let c = &shape.contours[0];
        assert_eq!(c.winding(), Winding::Clockwise);
        // Mitred corner: an L has exactly six vertices.
        assert_eq!(c.on_curve_points().len(), 6);
        let (x0, _, _, y1) = bounds(&shape);
        assert_eq!(x0, 444.0);
        assert_eq!(y1, 356.0);
    }

    #[test]
    fn test_heavy_is_wider_than_light() {
        let m = metrics();
        let line = vec![(0.5, 0.0), (0.5, 1.0)];
        let light = box_draw(&GeoOps, &m, &[line.clone()], &[], false).unwrap();
        let heavy = box_draw(&GeoOps, &m, &[], &[line], false).unwrap();
        assert!(heavy.signed_area().abs() > light.signed_area().abs() * 1.9);
    }

    #[test]
    fn test_truncated_diagonal_is_clipped_to_em_box() {
        let m = metrics();
        let shape = box_draw(&GeoOps, &m, &[vec![(0.0, 0.0), (1.0, 1.0)]], &[], true).unwrap();
        let (x0, y0, x1, y1) = bounds(&shape);
        assert_eq!((x0, y0, x1, y1), (0.0, -200.0, 1000.0, 800.0));
    }

    #[test]
    fn test_untruncated_diagonal_overhangs() {
        let m = metrics();
        let shape = box_draw(&GeoOps, &m, &[vec![(0.0, 0.0), (1.0, 1.0)]], &[], false).unwrap();
        let (x0, _, _, _) = bounds(&shape);
        assert!(x0 < 0.0);
    }

    #[test]
    fn test_single_point_line_fails() {
        let m = metrics();
        let err = box_draw(&GeoOps, &m, &[vec![(0.5, 0.5), (0.5, 0.5)]], &[], false).unwrap_err();
        assert_eq!(err.operation, "stroke");
    }

    #[test]
    fn test_sharp_turn_falls_back_to_bevel() {
        let pieces = stroke_pieces(
            &[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(0.0, 5.0),
            ],
            10.0,
            false,
        )
        .unwrap();
        // Two segments and a three-point bevel.
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces.contours[2].on_curve_points().len(), 3);
    }
}
