//! Rectangles and polygons
//!
//! Both primitives round their vertices to whole design units and follow the
//! vertex order they are given: a rectangle always runs
//! `(x1,y1) → (x2,y1) → (x2,y2) → (x1,y2)`.

use super::contour::{Contour, Shape};
use super::point::{passthrough_round, CoordinateMapper};
use crate::core::errors::{GeomResult, GeometryFault};
use kurbo::Point;

/// Rectangle from two corners in design units.
pub fn raw_rect(x1: f64, y1: f64, x2: f64, y2: f64) -> GeomResult<Shape> {
    raw_poly(&[
        Point::new(x1, y1),
        Point::new(x2, y1),
        Point::new(x2, y2),
        Point::new(x1, y2),
    ])
}

/// Rectangle from two corners of the unit square.
pub fn rect(mapper: &CoordinateMapper, x1: f64, y1: f64, x2: f64, y2: f64) -> GeomResult<Shape> {
    let a = mapper.map(x1, y1);
    let b = mapper.map(x2, y2);
    raw_rect(a.x, a.y, b.x, b.y)
}

/// Closed polygon in design units. Consecutive points that round to the same
/// position are merged.
pub fn raw_poly(points: &[Point]) -> GeomResult<Shape> {
    let mut rounded: Vec<Point> = Vec::with_capacity(points.len());
    for point in points.iter().copied().map(passthrough_round) {
        if rounded.last() != Some(&point) {
            rounded.push(point);
        }
    }
    while rounded.len() > 1 && rounded.first() == rounded.last() {
        rounded.pop();
    }
    check_simple(&rounded)?;
    Ok(Shape::single(Contour::polygon(&rounded)))
}

/// Closed polygon through unit-square points.
pub fn poly(mapper: &CoordinateMapper, points: &[(f64, f64)]) -> GeomResult<Shape> {
    let mapped: Vec<Point> = points.iter().map(|&(x, y)| mapper.map(x, y)).collect();
    raw_poly(&mapped)
}

/// Reject rings that cannot bound a region.
fn check_simple(points: &[Point]) -> GeomResult<()> {
    if points.len() < 3 {
        return Err(GeometryFault::new(
            "polygon",
            format!("needs at least 3 distinct points, got {}", points.len()),
        ));
    }
    if Contour::polygon(points).signed_area() == 0.0 {
        return Err(GeometryFault::new("polygon", "zero area"));
    }
    let n = points.len();
    for i in 0..n {
        let (a, b) = (points[i], points[(i + 1) % n]);
        // Skip the edge itself and its two neighbours.
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c, d) = (points[j], points[(j + 1) % n]);
            if segments_cross(a, b, c, d) {
                return Err(GeometryFault::new(
                    "polygon",
                    format!("edges {i} and {j} cross at ({}, {})..({}, {})", c.x, c.y, d.x, d.y),
                ));
            }
        }
    }
    Ok(())
}

/// True when the open segments `ab` and `cd` cross at a single interior point.
fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    fn side(p: Point, q: Point, r: Point) -> i8 {
        let v = (q - p).cross(r - p);
        if v > 0.0 {
            1
        } else if v < 0.0 {
            -1
        } else {
            0
        }
    }
    side(a, b, c) * side(a, b, d) < 0 && side(c, d, a) * side(c, d, b) < 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::{MetricOverrides, Metrics};
    use crate::geometry::contour::Winding;

    fn metrics() -> Metrics {
        Metrics::resolve(&MetricOverrides::default()).unwrap()
    }

    #[test]
    fn test_rect_vertex_order() {
        let m = metrics();
        let shape = rect(&CoordinateMapper::new(&m), 0.0, 0.0, 1.0, 1.0).unwrap();
        let points = shape.contours[0].on_curve_points();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 800.0),
                Point::new(1000.0, 800.0),
                Point::new(1000.0, -200.0),
                Point::new(0.0, -200.0),
            ]
        );
        assert_eq!(shape.contours[0].winding(), Winding::Clockwise);
    }

    #[test]
    fn test_swapped_corners_keep_area() {
        let m = metrics();
        let mapper = CoordinateMapper::new(&m);
        let a = rect(&mapper, 0.25, 0.1, 0.75, 0.6).unwrap();
        let b = rect(&mapper, 0.75, 0.6, 0.25, 0.1).unwrap();
        let c = rect(&mapper, 0.25, 0.6, 0.75, 0.1).unwrap();
        assert_eq!(a.signed_area().abs(), b.signed_area().abs());
        assert_eq!(a.signed_area(), -c.signed_area());
    }

    #[test]
    fn test_poly_merges_duplicate_points() {
        let shape = raw_poly(&[
            Point::new(0.0, 0.0),
            Point::new(0.2, 0.1),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ])
        .unwrap();
        assert_eq!(shape.contours[0].on_curve_points().len(), 3);
    }

    #[test]
    fn test_degenerate_polygons_fail() {
        assert!(raw_poly(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]).is_err());
        assert!(raw_rect(0.0, 0.0, 10.0, 0.3).is_err());
        let err = raw_poly(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 10.0),
        ])
        .unwrap_err();
        assert_eq!(err.reason, "zero area");
    }

    #[test]
    fn test_bow_tie_is_rejected() {
        let err = raw_poly(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap_err();
        assert_eq!(err.operation, "polygon");
    }
}
