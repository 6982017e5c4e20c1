//! Font metrics for generated glyphs
//!
//! A run starts from a sparse set of [`MetricOverrides`] (from the command
//! line and the settings file) and resolves them once into a complete,
//! immutable [`Metrics`] record shared by every glyph builder.

use crate::core::errors::{SlcError, SlcResult};
use serde::{Deserialize, Serialize};

/// Overrides supplied by the user. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricOverrides {
    pub ascent: Option<f64>,
    pub descent: Option<f64>,
    pub width: Option<f64>,
    pub pixel_height: Option<u32>,
    pub pixel_width: Option<u32>,
    pub diagonal_fill_angle: Option<f64>,
    pub diagonal_fill_weight: Option<f64>,
    pub diagonal_space_weight: Option<f64>,
    pub box_light_weight: Option<f64>,
    pub box_heavy_weight: Option<f64>,
    pub box_double_gap: Option<f64>,
    pub box_arc_radius: Option<f64>,
    pub box_tick_length: Option<f64>,
    pub box_line_truncate: Option<bool>,
    pub separation_top: Option<f64>,
    pub separation_right: Option<f64>,
    pub separation_bottom: Option<f64>,
    pub separation_left: Option<f64>,
}

impl MetricOverrides {
    /// Layer `self` over `base`: any field set here wins.
    pub fn or(self, base: MetricOverrides) -> MetricOverrides {
        MetricOverrides {
            ascent: self.ascent.or(base.ascent),
            descent: self.descent.or(base.descent),
            width: self.width.or(base.width),
            pixel_height: self.pixel_height.or(base.pixel_height),
            pixel_width: self.pixel_width.or(base.pixel_width),
            diagonal_fill_angle: self.diagonal_fill_angle.or(base.diagonal_fill_angle),
            diagonal_fill_weight: self.diagonal_fill_weight.or(base.diagonal_fill_weight),
            diagonal_space_weight: self.diagonal_space_weight.or(base.diagonal_space_weight),
            box_light_weight: self.box_light_weight.or(base.box_light_weight),
            box_heavy_weight: self.box_heavy_weight.or(base.box_heavy_weight),
            box_double_gap: self.box_double_gap.or(base.box_double_gap),
            box_arc_radius: self.box_arc_radius.or(base.box_arc_radius),
            box_tick_length: self.box_tick_length.or(base.box_tick_length),
            box_line_truncate: self.box_line_truncate.or(base.box_line_truncate),
            separation_top: self.separation_top.or(base.separation_top),
            separation_right: self.separation_right.or(base.separation_right),
            separation_bottom: self.separation_bottom.or(base.separation_bottom),
            separation_left: self.separation_left.or(base.separation_left),
        }
    }
}

/// The complete metrics for one run. Never mutated after [`Metrics::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub width: f64,
    pub pixel_height: u32,
    pub pixel_width: u32,
    pub diagonal_fill_angle: f64,
    pub diagonal_fill_weight: f64,
    pub diagonal_space_weight: f64,
    pub box_light_weight: f64,
    pub box_heavy_weight: f64,
    pub box_double_gap: f64,
    pub box_arc_radius: f64,
    pub box_tick_length: f64,
    pub box_line_truncate: bool,
    pub separation_top: f64,
    pub separation_right: f64,
    pub separation_bottom: f64,
    pub separation_left: f64,
}

impl Metrics {
    /// Fill in every metric the overrides leave open.
    pub fn resolve(o: &MetricOverrides) -> SlcResult<Self> {
        let ascent = o
            .ascent
            .unwrap_or_else(|| o.descent.map_or(800.0, |d| d * 4.0));
        let descent = o
            .descent
            .unwrap_or_else(|| o.ascent.map_or(200.0, |a| a / 4.0));
        let height = ascent + descent;
        let width = o.width.unwrap_or(height);

        let pixel_height = o.pixel_height.or(o.pixel_width).unwrap_or(20);
        let pixel_width = o.pixel_width.or(o.pixel_height).unwrap_or(20);

        let diagonal_fill_angle = o
            .diagonal_fill_angle
            .unwrap_or_else(|| height.atan2(width).to_degrees());
        let (diagonal_fill_weight, diagonal_space_weight) =
            match (o.diagonal_fill_weight, o.diagonal_space_weight) {
                (None, None) => {
                    let theta = diagonal_fill_angle.to_radians();
                    let weight = (height * theta.cos().abs() + width * theta.sin().abs()) / 16.0;
                    (weight, weight)
                }
                (fill, space) => (
                    fill.or(space).unwrap_or_default(),
                    space.or(fill).unwrap_or_default(),
                ),
            };

        let (box_light_weight, box_heavy_weight) = match (o.box_light_weight, o.box_heavy_weight) {
            (None, None) => (height / 9.0, height / 9.0 * 2.0),
            (Some(light), None) => (light, light * 2.0),
            (None, Some(heavy)) => (heavy / 2.0, heavy),
            (Some(light), Some(heavy)) => (light, heavy),
        };
        let box_double_gap = o.box_double_gap.unwrap_or(box_light_weight);
        let box_arc_radius = o.box_arc_radius.unwrap_or(height.min(width) / 2.0);
        let box_tick_length = o
            .box_tick_length
            .unwrap_or((height.max(width) / 3.0).min(height.min(width) / 2.0));
        let box_line_truncate = o.box_line_truncate.unwrap_or(true);

        let fallback = height / 18.0;
        let (top, right, bottom, left) = (
            o.separation_top,
            o.separation_right,
            o.separation_bottom,
            o.separation_left,
        );
        let separation_top = separation(top, bottom, right, left, fallback);
        let separation_right = separation(right, left, top, bottom, fallback);
        let separation_bottom = separation(bottom, top, right, left, fallback);
        let separation_left = separation(left, right, top, bottom, fallback);

        let metrics = Self {
            ascent,
            descent,
            height,
            width,
            pixel_height,
            pixel_width,
            diagonal_fill_angle,
            diagonal_fill_weight,
            diagonal_space_weight,
            box_light_weight,
            box_heavy_weight,
            box_double_gap,
            box_arc_radius,
            box_tick_length,
            box_line_truncate,
            separation_top,
            separation_right,
            separation_bottom,
            separation_left,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Reject metrics that would divide by zero or produce inverted geometry.
    fn validate(&self) -> SlcResult<()> {
        // Height and pixel height first: width and pixel width fall back to them.
        positive("height", self.height)?;
        positive("width", self.width)?;
        positive("pixel_height", f64::from(self.pixel_height))?;
        positive("pixel_width", f64::from(self.pixel_width))?;
        positive(
            "diagonal_fill_weight + diagonal_space_weight",
            self.diagonal_fill_weight + self.diagonal_space_weight,
        )?;
        positive("box_light_weight", self.box_light_weight)?;
        positive("box_heavy_weight", self.box_heavy_weight)?;
        for (name, value) in [
            ("ascent", self.ascent),
            ("descent", self.descent),
            ("diagonal_fill_angle", self.diagonal_fill_angle),
            ("box_double_gap", self.box_double_gap),
            ("box_arc_radius", self.box_arc_radius),
            ("box_tick_length", self.box_tick_length),
            ("separation_top", self.separation_top),
            ("separation_right", self.separation_right),
            ("separation_bottom", self.separation_bottom),
            ("separation_left", self.separation_left),
        ] {
            if !value.is_finite() {
                return Err(SlcError::InvalidParameter {
                    name,
                    value,
                    reason: "must be a finite number",
                });
            }
        }
        Ok(())
    }

    /// Top edge of the em box
    pub fn top(&self) -> f64 {
        self.ascent
    }

    /// Bottom edge of the em box
    pub fn bottom(&self) -> f64 {
        -self.descent
    }

    /// Vertical centre of the em box
    pub fn middle(&self) -> f64 {
        self.ascent - self.height / 2.0
    }
}

fn positive(name: &'static str, value: f64) -> SlcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SlcError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        })
    }
}

/// Own edge, then the opposite edge, then a lone value from the other axis.
fn separation(
    own: Option<f64>,
    opposite: Option<f64>,
    cross_a: Option<f64>,
    cross_b: Option<f64>,
    fallback: f64,
) -> f64 {
    own.or(opposite)
        .or(match (cross_a, cross_b) {
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            _ => None,
        })
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_defaults() {
        let m = Metrics::resolve(&MetricOverrides::default()).unwrap();
        assert_eq!(m.ascent, 800.0);
        assert_eq!(m.descent, 200.0);
        assert_eq!(m.height, 1000.0);
        assert_eq!(m.width, 1000.0);
        assert_eq!((m.pixel_height, m.pixel_width), (20, 20));
        assert!(approx(m.diagonal_fill_angle, 45.0));
        assert!(approx(m.box_light_weight, 1000.0 / 9.0));
        assert!(approx(m.box_heavy_weight, 2000.0 / 9.0));
        assert!(approx(m.box_double_gap, m.box_light_weight));
        assert_eq!(m.box_arc_radius, 500.0);
        assert!(approx(m.box_tick_length, 1000.0 / 3.0));
        assert!(m.box_line_truncate);
        assert!(approx(m.separation_top, 1000.0 / 18.0));
    }

    #[test]
    fn test_descent_only_derives_ascent() {
        let m = Metrics::resolve(&MetricOverrides {
            descent: Some(200.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.ascent, 800.0);
        assert_eq!(m.height, 1000.0);
        assert_eq!(m.width, 1000.0);
    }

    #[test]
    fn test_ascent_only_derives_descent() {
        let m = Metrics::resolve(&MetricOverrides {
            ascent: Some(1200.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.descent, 300.0);
        assert_eq!(m.width, 1500.0);
    }

    #[test]
    fn test_pixel_axis_falls_back_to_other_axis() {
        let m = Metrics::resolve(&MetricOverrides {
            pixel_width: Some(8),
            ..Default::default()
        })
        .unwrap();
        assert_eq!((m.pixel_height, m.pixel_width), (8, 8));
    }

    #[test]
    fn test_diagonal_weights() {
        // Default: both weights from the projected em box.
        let m = Metrics::resolve(&MetricOverrides {
            width: Some(500.0),
            ..Default::default()
        })
        .unwrap();
        let theta = 1000f64.atan2(500.0);
        let expected = (1000.0 * theta.cos() + 500.0 * theta.sin()) / 16.0;
        assert!(approx(m.diagonal_fill_weight, expected));
        assert!(approx(m.diagonal_space_weight, expected));

        // One given: the other copies it.
        let m = Metrics::resolve(&MetricOverrides {
            diagonal_space_weight: Some(30.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.diagonal_fill_weight, 30.0);
        assert_eq!(m.diagonal_space_weight, 30.0);
    }

    #[test]
    fn test_box_weights_fall_back_to_each_other() {
        let m = Metrics::resolve(&MetricOverrides {
            box_heavy_weight: Some(100.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.box_light_weight, 50.0);
        assert_eq!(m.box_double_gap, 50.0);

        let m = Metrics::resolve(&MetricOverrides {
            box_light_weight: Some(40.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.box_heavy_weight, 80.0);
    }

    #[test]
    fn test_separation_fallbacks() {
        // A single edge propagates to its opposite and to the lone cross axis.
        let m = Metrics::resolve(&MetricOverrides {
            separation_top: Some(10.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.separation_top, 10.0);
        assert_eq!(m.separation_bottom, 10.0);
        assert_eq!(m.separation_left, 10.0);
        assert_eq!(m.separation_right, 10.0);

        // Both edges of an axis given: the other axis does not borrow them.
        let m = Metrics::resolve(&MetricOverrides {
            separation_top: Some(10.0),
            separation_bottom: Some(20.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(m.separation_top, 10.0);
        assert_eq!(m.separation_bottom, 20.0);
        assert!(approx(m.separation_left, 1000.0 / 18.0));
        assert!(approx(m.separation_right, 1000.0 / 18.0));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let err = Metrics::resolve(&MetricOverrides {
            width: Some(0.0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, SlcError::InvalidParameter { name: "width", .. }));
    }

    #[test]
    fn test_zero_pixels_are_rejected() {
        let err = Metrics::resolve(&MetricOverrides {
            pixel_height: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SlcError::InvalidParameter {
                name: "pixel_height",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = Metrics::resolve(&MetricOverrides {
            ascent: Some(0.0),
            descent: Some(0.0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, SlcError::InvalidParameter { name: "height", .. }));

        // An explicit width does not mask the zero height.
        let err = Metrics::resolve(&MetricOverrides {
            ascent: Some(0.0),
            descent: Some(0.0),
            width: Some(600.0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, SlcError::InvalidParameter { name: "height", .. }));
    }

    #[test]
    fn test_zero_pixel_width_is_rejected() {
        let err = Metrics::resolve(&MetricOverrides {
            pixel_height: Some(4),
            pixel_width: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SlcError::InvalidParameter {
                name: "pixel_width",
                ..
            }
        ));
    }

    #[test]
    fn test_overrides_layering() {
        let cli = MetricOverrides {
            width: Some(600.0),
            ..Default::default()
        };
        let file = MetricOverrides {
            width: Some(900.0),
            ascent: Some(700.0),
            ..Default::default()
        };
        let merged = cli.or(file);
        assert_eq!(merged.width, Some(600.0));
        assert_eq!(merged.ascent, Some(700.0));
    }
}
