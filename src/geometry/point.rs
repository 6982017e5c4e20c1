//! Coordinate mapping between glyph space and design space
//!
//! Glyph space is the unit square with its origin at the top-left corner and
//! y growing downwards. Design space is the font's em box, y growing upwards,
//! with the baseline at zero.

use crate::font_source::Metrics;
use kurbo::Point;

/// Round to the nearest integer, halves away from zero.
///
/// Every coordinate that reaches the output goes through this function so that
/// a given set of metrics always produces the same bytes.
#[inline]
pub fn round_half_away(value: f64) -> f64 {
    value.round()
}

/// Round both coordinates of a point already in design units.
#[inline]
pub fn passthrough_round(point: Point) -> Point {
    Point::new(round_half_away(point.x), round_half_away(point.y))
}

/// Maps glyph-space coordinates onto the em box of one set of metrics.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    metrics: &'a Metrics,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(metrics: &'a Metrics) -> Self {
        Self { metrics }
    }

    /// Exact design-space position of a glyph-space point.
    pub fn map(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.metrics.width * x,
            self.metrics.ascent - self.metrics.height * y,
        )
    }

    /// Design-space position, rounded to whole units.
    pub fn to_design(&self, x: f64, y: f64) -> Point {
        passthrough_round(self.map(x, y))
    }

    /// Scale a glyph-space horizontal distance.
    pub fn scale_x(&self, dx: f64) -> f64 {
        self.metrics.width * dx
    }

    /// Scale a glyph-space vertical distance.
    pub fn scale_y(&self, dy: f64) -> f64 {
        self.metrics.height * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::MetricOverrides;

    #[test]
    fn test_unit_square_corners() {
        let m = Metrics::resolve(&MetricOverrides::default()).unwrap();
        let mapper = CoordinateMapper::new(&m);
        assert_eq!(mapper.to_design(0.0, 0.0), Point::new(0.0, 800.0));
        assert_eq!(mapper.to_design(1.0, 1.0), Point::new(1000.0, -200.0));
        assert_eq!(mapper.to_design(0.5, 0.5), Point::new(500.0, 300.0));
    }

    #[test]
    fn test_thirds_round_to_nearest() {
        let m = Metrics::resolve(&MetricOverrides::default()).unwrap();
        let mapper = CoordinateMapper::new(&m);
        // 333.33 and 466.67
        assert_eq!(mapper.to_design(1.0 / 3.0, 1.0 / 3.0), Point::new(333.0, 467.0));
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(round_half_away(2.5), 3.0);
        assert_eq!(round_half_away(-2.5), -3.0);
        assert_eq!(round_half_away(0.49), 0.0);
        assert_eq!(
            passthrough_round(Point::new(-0.5, 55.5)),
            Point::new(-1.0, 56.0)
        );
    }
}
