//! Boolean composition of shapes
//!
//! The engine only talks to [`PolygonOps`]. [`GeoOps`] implements it on top
//! of the `geo` crate's boolean operations; curves are flattened before they
//! reach the backend, so everything that comes back is straight-edged.
//!
//! Input contours are read with the nonzero rule: a contour counts as a hole
//! only when it cancels the winding of the contours around it.

use super::contour::{Contour, Shape, Winding};
use crate::core::errors::{GeomResult, GeometryFault};
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use kurbo::{PathEl, Point, Vec2};

/// Chord tolerance, in design units, used when flattening curves.
pub const FLATTEN_TOLERANCE: f64 = 0.25;

/// Tolerance, in design units, of the simplify step after every composition.
pub const SIMPLIFY_TOLERANCE: f64 = 0.5;

/// The boolean-geometry capability the glyph builders rely on.
pub trait PolygonOps: Sync {
    /// Union of every shape in `shapes`.
    fn union(&self, shapes: &[Shape]) -> GeomResult<Shape>;

    fn intersect(&self, a: &Shape, b: &Shape) -> GeomResult<Shape>;

    /// `a` with `b` removed.
    fn difference(&self, a: &Shape, b: &Shape) -> GeomResult<Shape>;

    /// Drop near-duplicate and nearly collinear vertices.
    fn simplify(&self, shape: &Shape, tolerance: f64) -> Shape {
        shape
            .contours
            .iter()
            .filter_map(|contour| {
                if !contour.is_polygon() {
                    return Some(contour.clone());
                }
                let ring = simplify_ring(contour.on_curve_points(), tolerance);
                (ring.len() >= 3).then(|| Contour::polygon(&ring))
            })
            .collect()
    }

    /// Replace every contour with the polygon through its on-curve points.
    fn to_polygon(&self, shape: &Shape) -> Shape {
        shape
            .contours
            .iter()
            .map(|contour| Contour::polygon(&contour.on_curve_points()))
            .collect()
    }
}

/// Simplify, strip curves and round: the fixed tail of every composed step.
pub fn finalize<P: PolygonOps + ?Sized>(ops: &P, shape: &Shape) -> Shape {
    let simplified = ops.simplify(shape, SIMPLIFY_TOLERANCE);
    ops.to_polygon(&simplified)
        .contours
        .iter()
        .map(Contour::rounded)
        .filter(|contour| contour.segments.len() >= 2 && contour.signed_area() != 0.0)
        .map(Contour::canonical_start)
        .collect()
}

/// [`PolygonOps`] backed by `geo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoOps;

impl PolygonOps for GeoOps {
    fn union(&self, shapes: &[Shape]) -> GeomResult<Shape> {
        let mut acc = MultiPolygon::new(Vec::new());
        for shape in shapes {
            acc = acc.union(&to_region(shape, "union")?);
        }
        Ok(from_region(&acc))
    }

    fn intersect(&self, a: &Shape, b: &Shape) -> GeomResult<Shape> {
        let a = to_region(a, "intersect")?;
        let b = to_region(b, "intersect")?;
        Ok(from_region(&a.intersection(&b)))
    }

    fn difference(&self, a: &Shape, b: &Shape) -> GeomResult<Shape> {
        let a = to_region(a, "difference")?;
        let b = to_region(b, "difference")?;
        Ok(from_region(&a.difference(&b)))
    }
}

/// Flatten a contour into a ring of points without the closing duplicate.
fn flatten(contour: &Contour) -> Vec<Point> {
    if contour.is_polygon() {
        return contour.on_curve_points();
    }
    let mut ring = Vec::new();
    kurbo::flatten(contour.to_bezpath(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => {
            if ring.last() != Some(&p) {
                ring.push(p);
            }
        }
        _ => {}
    });
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// A point just inside `ring`, next to the middle of its longest edge.
fn probe_point(ring: &[Point], winding: Winding) -> Point {
    let n = ring.len();
    let (a, b) = (0..n)
        .map(|i| (ring[i], ring[(i + 1) % n]))
        .max_by(|(a0, a1), (b0, b1)| (*a1 - *a0).hypot2().total_cmp(&(*b1 - *b0).hypot2()))
        .unwrap_or((Point::ORIGIN, Point::ORIGIN));
    let dir = (b - a).normalize();
    // Filled regions lie to the right of a clockwise ring.
    let inward = match winding {
        Winding::Clockwise => Vec2::new(dir.y, -dir.x),
        Winding::CounterClockwise => Vec2::new(-dir.y, dir.x),
    };
    a.midpoint(b) + inward * 1e-3
}

fn to_region(shape: &Shape, operation: &'static str) -> GeomResult<MultiPolygon<f64>> {
    let rings: Vec<Contour> = shape
        .contours
        .iter()
        .map(|contour| Contour::polygon(&flatten(contour)))
        .collect();
    for ring in &rings {
        if ring.segments.len() < 2 || ring.signed_area() == 0.0 {
            return Err(GeometryFault::new(operation, "degenerate contour"));
        }
    }

    let mut fills = MultiPolygon::new(Vec::new());
    let mut holes = MultiPolygon::new(Vec::new());
    for (i, ring) in rings.iter().enumerate() {
        let points = ring.on_curve_points();
        let probe = probe_point(&points, ring.winding());
        let own = ring.winding_at(probe);
        let others: i32 = rings
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| other.winding_at(probe))
            .sum();
        let polygon = MultiPolygon::new(vec![to_polygon(&points)]);
        if others != 0 && others + own == 0 {
            holes = holes.union(&polygon);
        } else {
            fills = fills.union(&polygon);
        }
    }
    if holes.0.is_empty() {
        Ok(fills)
    } else {
        Ok(fills.difference(&holes))
    }
}

fn to_polygon(points: &[Point]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    Polygon::new(LineString::new(coords), Vec::new())
}

fn ring_contour(ring: &LineString<f64>, winding: Winding) -> Option<Contour> {
    let mut points: Vec<Point> = ring.coords().map(|c| Point::new(c.x, c.y)).collect();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    let contour = Contour::polygon(&points);
    if contour.segments.len() < 2 || contour.signed_area() == 0.0 {
        return None;
    }
    Some(contour.with_winding(winding).canonical_start())
}

/// Convert backend output into oriented, canonically ordered contours.
fn from_region(region: &MultiPolygon<f64>) -> Shape {
    let mut polygons: Vec<(Contour, Vec<Contour>)> = region
        .iter()
        .filter_map(|polygon| {
            let outer = ring_contour(polygon.exterior(), Winding::Clockwise)?;
            let mut holes: Vec<Contour> = polygon
                .interiors()
                .iter()
                .filter_map(|ring| ring_contour(ring, Winding::CounterClockwise))
                .collect();
            holes.sort_by(|a, b| start_order(a, b));
            Some((outer, holes))
        })
        .collect();
    polygons.sort_by(|(a, _), (b, _)| start_order(a, b));
    polygons
        .into_iter()
        .flat_map(|(outer, holes)| std::iter::once(outer).chain(holes))
        .collect()
}

fn start_order(a: &Contour, b: &Contour) -> std::cmp::Ordering {
    a.start
        .x
        .total_cmp(&b.start.x)
        .then(b.start.y.total_cmp(&a.start.y))
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}

/// Remove vertices that sit within `tolerance` of the edge joining their
/// neighbours, repeating until nothing changes.
fn simplify_ring(mut ring: Vec<Point>, tolerance: f64) -> Vec<Point> {
    loop {
        let n = ring.len();
        if n < 3 {
            return ring;
        }
        let victim = (0..n).find(|&i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            distance_to_segment(ring[i], prev, next) < tolerance
        });
        match victim {
            Some(i) => {
                ring.remove(i);
            }
            None => return ring,
        }
    }
}
