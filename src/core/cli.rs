//! Command line interface for slcgen
//!
//! Every metric the generator derives can be pinned from the command line.
//! Values left out fall back to the settings file, then to the built-in
//! derivation (see [`crate::font_source::Metrics::resolve`]).

use crate::font_source::MetricOverrides;
use crate::tools::ArcStyle;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How box-drawing lines end at the glyph edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineEnds {
    /// Extend diagonal lines past the em box and clip them there
    Truncate,
    /// Stop diagonal lines at their end points
    Cute,
}

/// slcgen CLI arguments
///
/// Examples:
///   slcgen                              # Write out.sfd with default metrics
///   slcgen -a 900 -d 300 -o wide.sfd    # Taller em box
///   slcgen --box-light 80 --line-ends cute
///   slcgen --sep-all 40                 # Separation of every mosaic edge
///   slcgen -o - > font.sfd              # Write to stdout
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "slcgen",
    version,
    about = "Generate a FontForge file of Symbols for Legacy Computing",
    long_about = "slcgen draws box-drawing, block, shade, mosaic and diagonal-fill glyphs from a handful of font metrics and writes them as a FontForge spline font database (SFD)."
)]
pub struct CliArgs {
    /// Ascent in em units
    #[clap(long, short = 'a', value_parser = non_negative)]
    pub ascent: Option<f64>,

    /// Descent in em units
    #[clap(long, short = 'd', value_parser = non_negative)]
    pub descent: Option<f64>,

    /// Advance width in em units
    #[clap(long, short = 'w', value_parser = non_negative)]
    pub width: Option<f64>,

    /// Height of medium shade characters in pixels
    #[clap(long = "pixel-height", value_name = "PIXELS")]
    pub pixel_height: Option<u32>,

    /// Width of medium shade characters in pixels
    #[clap(long = "pixel-width", value_name = "PIXELS")]
    pub pixel_width: Option<u32>,

    /// Angle of diagonal fill characters in degrees (0-90)
    #[clap(long = "diagonal-angle", value_parser = non_negative)]
    pub diagonal_angle: Option<f64>,

    /// Weight of lines in diagonal fill characters in em units
    #[clap(long = "diagonal-fill", value_parser = non_negative)]
    pub diagonal_fill: Option<f64>,

    /// Weight of spaces in diagonal fill characters in em units
    #[clap(long = "diagonal-space", value_parser = non_negative)]
    pub diagonal_space: Option<f64>,

    /// Line weight of light box drawing characters in em units
    #[clap(long = "box-light", value_parser = non_negative)]
    pub box_light: Option<f64>,

    /// Line weight of heavy box drawing characters in em units
    #[clap(long = "box-heavy", value_parser = non_negative)]
    pub box_heavy: Option<f64>,

    /// Gap in double box drawing characters in em units
    #[clap(long = "box-gap", value_parser = non_negative)]
    pub box_gap: Option<f64>,

    /// Radius of arc box drawing characters in em units
    #[clap(long = "box-radius", value_parser = non_negative)]
    pub box_radius: Option<f64>,

    /// Length of ticks in box drawing characters in em units
    #[clap(long = "box-tick", value_parser = non_negative)]
    pub box_tick: Option<f64>,

    /// Line ending style of box drawing characters
    #[clap(long = "line-ends", value_enum)]
    pub line_ends: Option<LineEnds>,

    /// Top padding of separated block mosaic characters in em units
    #[clap(long = "sep-top", value_parser = non_negative)]
    pub sep_top: Option<f64>,

    /// Right padding of separated block mosaic characters in em units
    #[clap(long = "sep-right", value_parser = non_negative)]
    pub sep_right: Option<f64>,

    /// Bottom padding of separated block mosaic characters in em units
    #[clap(long = "sep-bottom", value_parser = non_negative)]
    pub sep_bottom: Option<f64>,

    /// Left padding of separated block mosaic characters in em units
    #[clap(long = "sep-left", value_parser = non_negative)]
    pub sep_left: Option<f64>,

    /// Top and bottom padding together
    #[clap(long = "sep-vertical", value_parser = non_negative)]
    pub sep_vertical: Option<f64>,

    /// Right and left padding together
    #[clap(long = "sep-horizontal", value_parser = non_negative)]
    pub sep_horizontal: Option<f64>,

    /// Padding on all four edges
    #[clap(long = "sep-all", value_parser = non_negative)]
    pub sep_all: Option<f64>,

    /// Path to the output file, or `-` for stdout (default: out.sfd)
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// How rounded box-drawing corners are drawn
    #[clap(long = "arc-style", value_enum)]
    pub arc_style: Option<ArcStyle>,

    /// Settings file to use instead of the default location
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Write a settings template to the default location and exit
    #[clap(long = "new-config")]
    pub new_config: bool,

    /// Print the glyph table (code point and name) and exit
    #[clap(long)]
    pub list: bool,

    /// Read the written file back and check it
    #[clap(long)]
    pub verify: bool,

    /// Log level: error, warn, info, debug or trace
    #[clap(long = "log-level", default_value = "warn")]
    pub log_level: String,

    /// Directory for a dated log file instead of stderr
    #[clap(long = "log-dir")]
    pub log_dir: Option<PathBuf>,
}

fn non_negative(value: &str) -> Result<f64, String> {
    let number: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !number.is_finite() || number < 0.0 {
        return Err(format!("'{value}' must be a non-negative number"));
    }
    Ok(number)
}

impl CliArgs {
    /// Metric overrides given on the command line. Per-edge separation flags
    /// win over the grouped ones, and the axis groups over `--sep-all`.
    pub fn overrides(&self) -> MetricOverrides {
        let vertical = self.sep_vertical.or(self.sep_all);
        let horizontal = self.sep_horizontal.or(self.sep_all);
        MetricOverrides {
            ascent: self.ascent,
            descent: self.descent,
            width: self.width,
            pixel_height: self.pixel_height,
            pixel_width: self.pixel_width,
            diagonal_fill_angle: self.diagonal_angle,
            diagonal_fill_weight: self.diagonal_fill,
            diagonal_space_weight: self.diagonal_space,
            box_light_weight: self.box_light,
            box_heavy_weight: self.box_heavy,
            box_double_gap: self.box_gap,
            box_arc_radius: self.box_radius,
            box_tick_length: self.box_tick,
            box_line_truncate: self.line_ends.map(|ends| ends == LineEnds::Truncate),
            separation_top: self.sep_top.or(vertical),
            separation_right: self.sep_right.or(horizontal),
            separation_bottom: self.sep_bottom.or(vertical),
            separation_left: self.sep_left.or(horizontal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("slcgen").chain(args.iter().copied()))
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-a", "900", "-d", "300", "-w", "600", "-o", "x.sfd"]).unwrap();
        let o = args.overrides();
        assert_eq!((o.ascent, o.descent, o.width), (Some(900.0), Some(300.0), Some(600.0)));
        assert_eq!(args.output, Some(PathBuf::from("x.sfd")));
    }

    #[test]
    fn test_line_ends_map_to_truncation() {
        let cute = parse(&["--line-ends", "cute"]).unwrap();
        assert_eq!(cute.overrides().box_line_truncate, Some(false));
        let truncate = parse(&["--line-ends", "truncate"]).unwrap();
        assert_eq!(truncate.overrides().box_line_truncate, Some(true));
        assert_eq!(parse(&[]).unwrap().overrides().box_line_truncate, None);
    }

    #[test]
    fn test_separation_groups() {
        let args = parse(&["--sep-all", "10", "--sep-vertical", "20", "--sep-left", "30"]).unwrap();
        let o = args.overrides();
        assert_eq!(o.separation_top, Some(20.0));
        assert_eq!(o.separation_bottom, Some(20.0));
        assert_eq!(o.separation_right, Some(10.0));
        assert_eq!(o.separation_left, Some(30.0));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(parse(&["--ascent", "-5"]).is_err());
        assert!(parse(&["--ascent", "tall"]).is_err());
        assert!(parse(&["--line-ends", "round"]).is_err());
        assert!(parse(&["--pixel-width", "1.5"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn test_arc_style_flag() {
        let args = parse(&["--arc-style", "curve"]).unwrap();
        assert_eq!(args.arc_style, Some(ArcStyle::Curve));
    }
}
