//! Outline data model
//!
//! A [`Contour`] is a closed run of straight and cubic segments starting at
//! `start`; the edge from the last segment back to `start` is implicit. A
//! [`Shape`] is the set of contours one build step produces.
//!
//! Filled regions wind clockwise in design space (y up), holes wind
//! counter-clockwise.

use super::point::passthrough_round;
use kurbo::{Affine, BezPath, Point, Shape as _};

/// One edge of a contour, identified by where it ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Point),
    Curve(Point, Point, Point),
}

impl Segment {
    /// The on-curve point this segment ends at
    pub fn end(&self) -> Point {
        match *self {
            Segment::Line(p) => p,
            Segment::Curve(_, _, p) => p,
        }
    }

    fn map(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            Segment::Line(p) => Segment::Line(f(p)),
            Segment::Curve(a, b, p) => Segment::Curve(f(a), f(b), f(p)),
        }
    }
}

/// Traversal direction of a closed contour in design space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub start: Point,
    pub segments: Vec<Segment>,
}

impl Contour {
    /// Build a contour, dropping zero-length lines and any explicit closing line.
    pub fn new(start: Point, segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut kept: Vec<Segment> = Vec::new();
        let mut current = start;
        for segment in segments {
            if let Segment::Line(p) = segment {
                if p == current {
                    continue;
                }
            }
            current = segment.end();
            kept.push(segment);
        }
        if let Some(Segment::Line(p)) = kept.last() {
            if *p == start {
                kept.pop();
            }
        }
        Self {
            start,
            segments: kept,
        }
    }

    /// A straight-edged contour through `points` in order.
    pub fn polygon(points: &[Point]) -> Self {
        match points.split_first() {
            Some((first, rest)) => Self::new(*first, rest.iter().copied().map(Segment::Line)),
            None => Self::new(Point::ORIGIN, []),
        }
    }

    /// True when every segment is a straight line
    pub fn is_polygon(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Line(_)))
    }

    /// On-curve points in order, starting with `start`.
    pub fn on_curve_points(&self) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(self.segments.iter().map(Segment::end))
            .collect()
    }

    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        for segment in &self.segments {
            match *segment {
                Segment::Line(p) => path.line_to(p),
                Segment::Curve(a, b, p) => path.curve_to(a, b, p),
            }
        }
        path.close_path();
        path
    }

    /// Signed area, positive for counter-clockwise contours.
    pub fn signed_area(&self) -> f64 {
        self.to_bezpath().area()
    }

    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Winding number of `self` around `point`.
    pub fn winding_at(&self, point: Point) -> i32 {
        self.to_bezpath().winding(point)
    }

    /// Same outline, opposite direction, same start point.
    pub fn reversed(&self) -> Self {
        let points = self.on_curve_points();
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        // The implicit closing edge becomes the first explicit one.
        if let Some(last) = points.last() {
            segments.push(Segment::Line(*last));
        }
        for (i, segment) in self.segments.iter().enumerate().rev() {
            let back_to = points[i];
            segments.push(match *segment {
                Segment::Line(_) => Segment::Line(back_to),
                Segment::Curve(a, b, _) => Segment::Curve(b, a, back_to),
            });
        }
        Self::new(self.start, segments)
    }

    pub fn with_winding(self, winding: Winding) -> Self {
        if self.winding() == winding {
            self
        } else {
            self.reversed()
        }
    }

    pub fn transform(&self, affine: Affine) -> Self {
        Self::new(
            affine * self.start,
            self.segments.iter().map(|s| s.map(|p| affine * p)),
        )
    }

    /// Round every point, then drop edges that collapsed.
    pub fn rounded(&self) -> Self {
        Self::new(
            passthrough_round(self.start),
            self.segments.iter().map(|s| s.map(passthrough_round)),
        )
    }

    /// Rotate a straight contour so it starts at its left-most vertex
    /// (top-most among ties). Curved contours are returned unchanged.
    pub fn canonical_start(self) -> Self {
        if !self.is_polygon() {
            return self;
        }
        let points = self.on_curve_points();
        let Some(first) = (0..points.len()).min_by(|&a, &b| {
            let (pa, pb) = (points[a], points[b]);
            pa.x.total_cmp(&pb.x).then(pb.y.total_cmp(&pa.y))
        }) else {
            return self;
        };
        let rotated: Vec<Point> = points[first..]
            .iter()
            .chain(points[..first].iter())
            .copied()
            .collect();
        Contour::polygon(&rotated)
    }
}

/// The contours produced by one build step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub contours: Vec<Contour>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(contour: Contour) -> Self {
        Self {
            contours: vec![contour],
        }
    }

    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    pub fn extend(&mut self, other: Shape) {
        self.contours.extend(other.contours);
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn transform(&self, affine: Affine) -> Self {
        Self {
            contours: self.contours.iter().map(|c| c.transform(affine)).collect(),
        }
    }

    /// Total signed area of all contours.
    pub fn signed_area(&self) -> f64 {
        self.contours.iter().map(Contour::signed_area).sum()
    }
}

impl FromIterator<Contour> for Shape {
    fn from_iter<I: IntoIterator<Item = Contour>>(iter: I) -> Self {
        Self {
            contours: iter.into_iter().collect(),
        }
    }
}
