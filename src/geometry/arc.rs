//! Circular and elliptical arcs as cubic Béziers
//!
//! Quarter turns use the usual `4(√2−1)/3` handle length. Two constructions
//! are offered for the rounded box-drawing corners:
//!
//! - [`arc_corner`] writes the corner as a single contour with explicit
//!   cubic segments,
//! - [`annulus`] + [`box_draw_arc`] cut the corner out of a ring with the
//!   boolean backend and return straight edges only.
//!
//! For radii up to half the em box both give the same outline.

use super::boolean::{finalize, PolygonOps};
use super::contour::{Contour, Segment, Shape};
use super::point::passthrough_round;
use super::primitives::raw_rect;
use crate::core::errors::{GeomResult, GeometryFault};
use crate::font_source::Metrics;
use kurbo::{Point, Vec2};

/// Handle length of a quarter-circle cubic, relative to the radius
pub const KAPPA: f64 = 0.552_284_749_831;

/// Full ellipse, clockwise, starting at its left-most point.
pub fn ellipse_contour(center: Point, radii: Vec2) -> Contour {
    let (cx, cy) = (center.x, center.y);
    let (rx, ry) = (radii.x, radii.y);
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);
    Contour::new(
        Point::new(cx - rx, cy),
        [
            Segment::Curve(
                Point::new(cx - rx, cy + ky),
                Point::new(cx - kx, cy + ry),
                Point::new(cx, cy + ry),
            ),
            Segment::Curve(
                Point::new(cx + kx, cy + ry),
                Point::new(cx + rx, cy + ky),
                Point::new(cx + rx, cy),
            ),
            Segment::Curve(
                Point::new(cx + rx, cy - ky),
                Point::new(cx + kx, cy - ry),
                Point::new(cx, cy - ry),
            ),
            Segment::Curve(
                Point::new(cx - kx, cy - ry),
                Point::new(cx - rx, cy - ky),
                Point::new(cx - rx, cy),
            ),
        ],
    )
}

/// Outer ellipse plus a reversed inner ellipse. A zero radius leaves that
/// contour out, so `inner = 0` gives a filled ellipse.
pub fn annulus(center: Point, outer: Vec2, inner: Vec2) -> Shape {
    let mut shape = Shape::new();
    if outer.x > 0.0 && outer.y > 0.0 {
        shape.push(ellipse_contour(center, outer));
    }
    if inner.x > 0.0 && inner.y > 0.0 {
        shape.push(ellipse_contour(center, inner).reversed());
    }
    shape
}

/// Ring clipped to the rectangle with corners `b1` and `b2`, in design units.
pub fn raw_ellipse<P: PolygonOps + ?Sized>(
    ops: &P,
    center: Point,
    outer: Vec2,
    inner: Vec2,
    b1: Point,
    b2: Point,
) -> GeomResult<Shape> {
    let ring = annulus(center, outer, inner);
    if ring.is_empty() {
        return Ok(Shape::new());
    }
    let bounds = raw_rect(b1.x, b1.y, b2.x, b2.y)?;
    Ok(finalize(ops, &ops.intersect(&ring, &bounds)?))
}

/// Rounded box-drawing corner built from a clipped ring and straight stubs.
///
/// `dx` and `dy` are ±1 and point from the glyph centre towards the centre of
/// the circle the corner follows (`dy` positive is downwards).
pub fn box_draw_arc<P: PolygonOps + ?Sized>(
    ops: &P,
    m: &Metrics,
    dx: i32,
    dy: i32,
) -> GeomResult<Shape> {
    let (dx, dy) = (f64::from(dx.signum()), f64::from(dy.signum()));
    let radius = m.box_arc_radius;
    let half = m.box_light_weight / 2.0;
    let (mx, my) = (m.width / 2.0, m.middle());

    let ring = annulus(
        Point::new(mx + radius * dx, my - radius * dy),
        Vec2::new(radius + half, radius + half),
        Vec2::new(radius - half, radius - half),
    );
    let bounds = raw_rect(mx - radius, my + radius, mx + radius, my - radius)?;
    let mut parts = vec![ops.intersect(&ring, &bounds)?];

    if dx < 0.0 && mx - radius > 0.0 {
        parts.push(raw_rect(0.0, my + half, mx - radius, my - half)?);
    }
    if dx > 0.0 && mx + radius < m.width {
        parts.push(raw_rect(mx + radius, my + half, m.width, my - half)?);
    }
    if dy < 0.0 && my + radius < m.top() {
        parts.push(raw_rect(mx - half, m.top(), mx + half, my + radius)?);
    }
    if dy > 0.0 && my - radius > m.bottom() {
        parts.push(raw_rect(mx - half, my - radius, mx + half, m.bottom())?);
    }
    Ok(finalize(ops, &ops.union(&parts)?))
}

/// The same corner as [`box_draw_arc`], as one contour with cubic segments.
pub fn arc_corner(m: &Metrics, dx: i32, dy: i32) -> GeomResult<Shape> {
    let rx = m.width / 2.0;
    let ry = m.middle();
    let rr = m.box_arc_radius;
    let re = m.box_light_weight / 2.0;
    let ro = rr + re;
    let ri = rr - re;
    if rr > rx || rr > m.height / 2.0 {
        return Err(GeometryFault::new(
            "arc",
            "radius exceeds half the em box",
        ));
    }
    if ri < 0.0 {
        return Err(GeometryFault::new(
            "arc",
            "radius is smaller than half the line weight",
        ));
    }

    // Corner opening to the right and downwards; the others are mirror images.
    let k = KAPPA;
    let bottom = m.bottom();
    let template = [
        Segment::Line(Point::new(rx - re, ry - rr)),
        Segment::Curve(
            Point::new(rx - re, ry - rr + ro * k),
            Point::new(rx + rr - ro * k, ry + re),
            Point::new(rx + rr, ry + re),
        ),
        Segment::Line(Point::new(m.width, ry + re)),
        Segment::Line(Point::new(m.width, ry - re)),
        Segment::Line(Point::new(rx + rr, ry - re)),
        Segment::Curve(
            Point::new(rx + rr - ri * k, ry - re),
            Point::new(rx + re, ry - rr + ri * k),
            Point::new(rx + re, ry - rr),
        ),
        Segment::Line(Point::new(rx + re, bottom)),
    ];

    let flip_x = dx < 0;
    let flip_y = dy < 0;
    let mirror = |p: Point| {
        passthrough_round(Point::new(
            if flip_x { 2.0 * rx - p.x } else { p.x },
            if flip_y { 2.0 * ry - p.y } else { p.y },
        ))
    };
    let start = mirror(Point::new(rx - re, bottom));
    let segments = template.iter().map(|segment| match *segment {
        Segment::Line(p) => Segment::Line(mirror(p)),
        Segment::Curve(a, b, p) => Segment::Curve(mirror(a), mirror(b), mirror(p)),
    });
    let contour = Contour::new(start, segments);
    // One mirror flips the direction; restore clockwise.
    let contour = if flip_x != flip_y {
        contour.reversed()
    } else {
        contour
    };
    Ok(Shape::single(contour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::MetricOverrides;
    use crate::geometry::boolean::GeoOps;
    use crate::geometry::contour::Winding;
    use std::f64::consts::PI;

    fn metrics() -> Metrics {
        Metrics::resolve(&MetricOverrides::default()).unwrap()
    }

    #[test]
    fn test_kappa_matches_closed_form() {
        let exact = 4.0 * (2f64.sqrt() - 1.0) / 3.0;
        assert!((KAPPA - exact).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_contour_is_clockwise_and_close_to_pi() {
        let c = ellipse_contour(Point::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        assert_eq!(c.winding(), Winding::Clockwise);
        let area = c.signed_area().abs();
        assert!((area - PI * 10_000.0).abs() / (PI * 10_000.0) < 1e-3);
    }

    #[test]
    fn test_annulus_inner_is_reversed() {
        let shape = annulus(
            Point::new(0.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(50.0, 50.0),
        );
        assert_eq!(shape.len(), 2);
        assert_eq!(shape.contours[1].winding(), Winding::CounterClockwise);
    }

    #[test]
    fn test_zero_inner_radius_gives_disc() {
        let shape = annulus(Point::new(0.0, 0.0), Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(shape.len(), 1);
    }

    #[test]
    fn test_corner_curve_mode_shape() {
        let m = metrics();
        let shape = arc_corner(&m, 1, 1).unwrap();
        let c = &shape.contours[0];
        assert_eq!(c.winding(), Winding::Clockwise);
        assert_eq!(c.start, Point::new(444.0, -200.0));
        let curves = c
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Curve(..)))
            .count();
        assert_eq!(curves, 2);
    }

    #[test]
    fn test_every_corner_is_clockwise() {
        let m = metrics();
        for (dx, dy) in [(1, 1), (-1, 1), (-1, -1), (1, -1)] {
            let a = arc_corner(&m, dx, dy).unwrap();
            assert_eq!(a.contours[0].winding(), Winding::Clockwise, "{dx},{dy}");
            let b = box_draw_arc(&GeoOps, &m, dx, dy).unwrap();
            assert!(b.contours.iter().all(|c| c.winding() == Winding::Clockwise));
        }
    }

    #[test]
    fn test_both_modes_agree() {
        for radius in [500.0, 300.0] {
            let m = Metrics::resolve(&MetricOverrides {
                box_arc_radius: Some(radius),
                ..Default::default()
            })
            .unwrap();
            for (dx, dy) in [(1, 1), (-1, 1), (-1, -1), (1, -1)] {
                let curve = arc_corner(&m, dx, dy).unwrap().signed_area();
                let flat = box_draw_arc(&GeoOps, &m, dx, dy).unwrap().signed_area();
                assert!(
                    (curve - flat).abs() / flat.abs() < 0.02,
                    "r={radius} ({dx},{dy}): {curve} vs {flat}"
                );
            }
        }
    }

    #[test]
    fn test_quarter_ring_area() {
        let m = metrics();
        let shape = box_draw_arc(&GeoOps, &m, 1, 1).unwrap();
        let outer = 500.0 + m.box_light_weight / 2.0;
        let inner = 500.0 - m.box_light_weight / 2.0;
        let expected = PI / 4.0 * (outer * outer - inner * inner);
        let actual = shape.signed_area().abs();
        assert!((actual - expected).abs() / expected < 0.02);
    }

    #[test]
    fn test_curve_mode_rejects_large_radius() {
        let m = Metrics::resolve(&MetricOverrides {
            box_arc_radius: Some(900.0),
            ..Default::default()
        })
        .unwrap();
        assert!(arc_corner(&m, 1, 1).is_err());
    }

    #[test]
    fn test_clipped_ellipse_stays_in_bounds() {
        let shape = raw_ellipse(
            &GeoOps,
            Point::new(0.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            Point::new(0.0, 100.0),
            Point::new(100.0, 0.0),
        )
        .unwrap();
        for c in &shape.contours {
            for p in c.on_curve_points() {
                assert!((0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y));
            }
        }
        let expected = PI * 10_000.0 / 4.0;
        assert!((shape.signed_area().abs() - expected).abs() / expected < 0.01);
    }
}
