//! Application runner logic
//!
//! One run: resolve the metrics, build every glyph, write the font.

use crate::catalog::{legacy_catalog, GlyphRecord};
use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::data::{build_font, sfd, Font};
use crate::font_source::Metrics;
use crate::geometry::GeoOps;
use crate::logging;
use anyhow::{bail, Context as _, Result};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output path used when neither the command line nor the settings name one
pub const DEFAULT_OUTPUT: &str = "out.sfd";

/// Create and run the application with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("initializing config directory");
    }

    let _guard = logging::init(&cli_args.log_level, cli_args.log_dir.as_deref())?;

    let config = ConfigFile::load(cli_args.config.as_deref())?;
    let metrics = Metrics::resolve(&cli_args.overrides().or(config.metrics))?;
    info!(
        "Metrics: ascent {} descent {} width {}",
        metrics.ascent, metrics.descent, metrics.width
    );
    let records = legacy_catalog(&metrics);

    if cli_args.list {
        return print_table(&records);
    }

    let arc_style = cli_args.arc_style.or(config.arc_style).unwrap_or_default();
    let font = build_font(&metrics, &GeoOps, arc_style, &records)?;
    let text = sfd::serialize(&font);

    let output = cli_args
        .output
        .or(config.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if is_stdout(&output) {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .context("writing to stdout")?;
        if cli_args.verify {
            verify(&font, &text)?;
        }
    } else {
        sfd::write_atomic(&output, &text)?;
        info!("Wrote {} glyphs to {}", font.glyphs.len(), output.display());
        if cli_args.verify {
            let written = std::fs::read_to_string(&output)
                .with_context(|| format!("reading back {}", output.display()))?;
            verify(&font, &written)?;
        }
    }
    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn print_table(records: &[GlyphRecord]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for record in records {
        writeln!(stdout, "U+{:04X} {}", record.codepoint, record.name)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Parse `text` back and compare it with the font it was written from.
fn verify(font: &Font, text: &str) -> Result<()> {
    let read = sfd::read(text).context("verifying output")?;
    if read.glyphs.len() != font.glyphs.len() {
        bail!(
            "verification failed: wrote {} glyphs, read back {}",
            font.glyphs.len(),
            read.glyphs.len()
        );
    }
    if read.contour_count() != font.contour_count() {
        bail!(
            "verification failed: wrote {} contours, read back {}",
            font.contour_count(),
            read.contour_count()
        );
    }
    eprintln!(
        "Verified {} glyphs, {} contours",
        read.glyphs.len(),
        read.contour_count()
    );
    Ok(())
}
