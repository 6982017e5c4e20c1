#[cfg(test)]
mod pipeline_tests {
    use crate::catalog::legacy_catalog;
    use crate::data::{build_font, sfd, Font, Glyph};
    use crate::font_source::{MetricOverrides, Metrics};
    use crate::geometry::GeoOps;
    use crate::tools::ArcStyle;

    fn build(overrides: MetricOverrides, arc_style: ArcStyle) -> Font {
        let metrics = Metrics::resolve(&overrides).unwrap();
        build_font(&metrics, &GeoOps, arc_style, &legacy_catalog(&metrics)).unwrap()
    }

    fn bounds(glyph: &Glyph) -> (f64, f64, f64, f64) {
        let mut b = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for contour in &glyph.contours {
            for p in contour.on_curve_points() {
                b = (b.0.min(p.x), b.1.min(p.y), b.2.max(p.x), b.3.max(p.y));
            }
        }
        b
    }

    #[test]
    fn test_full_catalog_builds() {
        let font = build(MetricOverrides::default(), ArcStyle::Polygon);
        assert_eq!(font.glyphs.len(), 814);
        assert!(font.glyph("space").unwrap().contours.is_empty());
        for glyph in &font.glyphs {
            for contour in &glyph.contours {
                for p in contour.on_curve_points() {
                    assert_eq!(p.x, p.x.round(), "{} has a fractional x", glyph.name);
                    assert_eq!(p.y, p.y.round(), "{} has a fractional y", glyph.name);
                }
            }
        }
    }

    #[test]
    fn test_full_block_fills_the_em_box() {
        let font = build(MetricOverrides::default(), ArcStyle::Polygon);
        let block = font.glyph("block").unwrap();
        assert_eq!(block.contours.len(), 1);
        assert_eq!(block.contours[0].on_curve_points().len(), 4);
        assert_eq!(bounds(block), (0.0, -200.0, 1000.0, 800.0));
    }

    #[test]
    fn test_box_drawing_bars() {
        let font = build(MetricOverrides::default(), ArcStyle::Polygon);
        // Light weight is 1000/9, heavy twice that, centered on y = 300.
        assert_eq!(bounds(font.glyph("SF100000").unwrap()), (0.0, 244.0, 1000.0, 356.0));
        assert_eq!(bounds(font.glyph("uni2501").unwrap()), (0.0, 189.0, 1000.0, 411.0));
        assert_eq!(bounds(font.glyph("SF110000").unwrap()), (444.0, -200.0, 556.0, 800.0));
    }

    #[test]
    fn test_width_override_reaches_every_glyph() {
        let font = build(
            MetricOverrides {
                width: Some(600.0),
                ..Default::default()
            },
            ArcStyle::Polygon,
        );
        assert!(font.glyphs.iter().all(|g| g.advance_width == 600.0));
        assert_eq!(bounds(font.glyph("block").unwrap()), (0.0, -200.0, 600.0, 800.0));
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = sfd::serialize(&build(MetricOverrides::default(), ArcStyle::Polygon));
        let second = sfd::serialize(&build(MetricOverrides::default(), ArcStyle::Polygon));
        assert!(first == second, "two runs produced different files");
    }

    #[test]
    fn test_full_font_reads_back() {
        for style in [ArcStyle::Polygon, ArcStyle::Curve] {
            let font = build(MetricOverrides::default(), style);
            let text = sfd::serialize(&font);
            let back = sfd::read(&text).unwrap();
            assert_eq!(back.glyphs.len(), font.glyphs.len());
            assert_eq!(back.contour_count(), font.contour_count());
            assert!(sfd::serialize(&back) == text, "{style:?} font changed on re-read");
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::core::cli::CliArgs;
    use crate::core::config_file::ConfigFile;
    use crate::font_source::Metrics;
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_command_line_beats_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "metrics": { "ascent": 900, "descent": 100, "box_light_weight": 80 } }"#,
        )
        .unwrap();
        let config = ConfigFile::load(Some(&path)).unwrap();
        let cli = CliArgs::try_parse_from(["slcgen", "-a", "700"]).unwrap();

        let metrics = Metrics::resolve(&cli.overrides().or(config.metrics)).unwrap();
        assert_eq!(metrics.ascent, 700.0);
        assert_eq!(metrics.descent, 100.0);
        assert_eq!(metrics.box_light_weight, 80.0);
        // Heavy weight is still derived, now from the overridden light weight.
        assert_eq!(metrics.box_heavy_weight, 160.0);
    }
}
