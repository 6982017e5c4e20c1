//! FontForge spline font database (SFD) output
//!
//! The writer emits a fixed header, one `StartChar`…`EndChar` block per glyph
//! in font order, and a footer. Every coordinate is written as a whole number,
//! so a given [`Font`] always serializes to the same bytes.
//!
//! [`read`] accepts the subset of the format that [`serialize`] produces and
//! is used to check written files.

use super::font::{Font, Glyph};
use crate::core::errors::{FileContext, SlcError, SlcResult};
use crate::geometry::contour::{Contour, Segment};
use crate::geometry::point::round_half_away;
use kurbo::Point;
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;
use tempfile::NamedTempFile;

const FORMAT_LINE: &str = "SplineFontDB: 3.0";

/// Whole-number rendering of a design value.
fn int(value: f64) -> i64 {
    round_half_away(value) as i64
}

fn write_point(out: &mut String, p: Point) {
    out.push_str(&format!("{} {}", int(p.x), int(p.y)));
}

fn write_header(out: &mut String, font: &Font) {
    out.push_str(&format!("{FORMAT_LINE}\n"));
    out.push_str(
        "FontName: SLC\n\
         FullName: SLC\n\
         FamilyName: SLC\n\
         Weight: Regular\n\
         Copyright: Created by slcgen\n\
         UComments: \"Created by slcgen\"\n\
         Version: 001.000\n\
         ItalicAngle: 0\n\
         UnderlinePosition: -100\n\
         UnderlineWidth: 50\n",
    );
    out.push_str(&format!("Ascent: {}\n", int(font.ascent)));
    out.push_str(&format!("Descent: {}\n", int(font.descent)));
    out.push_str(
        "InvalidEm: 0\n\
         LayerCount: 2\n\
         Layer: 0 0 \"Back\" 1\n\
         Layer: 1 0 \"Fore\" 0\n\
         OS2Version: 0\n\
         OS2_WeightWidthSlopeOnly: 0\n\
         OS2_UseTypoMetrics: 1\n\
         OS2TypoAscent: 0\n\
         OS2TypoAOffset: 1\n\
         OS2TypoDescent: 0\n\
         OS2TypoDOffset: 1\n\
         OS2TypoLinegap: 0\n\
         OS2WinAscent: 0\n\
         OS2WinAOffset: 1\n\
         OS2WinDescent: 0\n\
         OS2WinDOffset: 1\n\
         HheadAscent: 0\n\
         HheadAOffset: 1\n\
         HheadDescent: 0\n\
         HheadDOffset: 1\n\
         OS2Vendor: 'slcg'\n\
         DEI: 91125\n\
         Encoding: UnicodeFull\n\
         UnicodeInterp: none\n\
         NameList: AGL For New Fonts\n\
         DisplaySize: -36\n\
         AntiAlias: 1\n\
         FitToEm: 0\n\
         WinInfo: 0 16 16\n",
    );
    out.push_str(&format!("BeginChars: {} {}\n", font.encoding_size, font.glyphs.len()));
}

/// One contour as opcode lines. A straight last edge back to the start is
/// written out, since SFD closes a spline set only when it returns to its
/// first point.
fn write_contour(out: &mut String, contour: &Contour) {
    write_point(out, contour.start);
    out.push_str(" m 1\n");
    for segment in &contour.segments {
        out.push(' ');
        match *segment {
            Segment::Line(p) => {
                write_point(out, p);
                out.push_str(" l 1\n");
            }
            Segment::Curve(a, b, p) => {
                write_point(out, a);
                out.push(' ');
                write_point(out, b);
                out.push(' ');
                write_point(out, p);
                out.push_str(" c 1\n");
            }
        }
    }
    let end = contour.segments.last().map_or(contour.start, Segment::end);
    if end != contour.start {
        out.push(' ');
        write_point(out, contour.start);
        out.push_str(" l 1\n");
    }
}

fn write_glyph(out: &mut String, index: usize, glyph: &Glyph) {
    out.push_str(&format!("\nStartChar: {}\n", glyph.name));
    out.push_str(&format!("Encoding: {0} {0} {1}\n", glyph.codepoint, index));
    out.push_str(&format!("Width: {}\n", int(glyph.advance_width)));
    out.push_str("VWidth: 0\nFlags: HW\nLayerCount: 2\nFore\n");
    if !glyph.contours.is_empty() {
        out.push_str("SplineSet\n");
        for contour in &glyph.contours {
            write_contour(out, contour);
        }
        out.push_str("EndSplineSet\n");
    }
    out.push_str("EndChar\n");
}

/// Render a whole font.
pub fn serialize(font: &Font) -> String {
    let mut out = String::with_capacity(256 + font.glyphs.len() * 512);
    write_header(&mut out, font);
    for (index, glyph) in font.glyphs.iter().enumerate() {
        write_glyph(&mut out, index, glyph);
    }
    out.push_str("EndChars\nEndSplineFont\n");
    out
}

/// Temporary file in `dir` with the mode a plain create would give it.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".slcgen-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;
        // The umask still applies, as it does for File::create.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Replace `path` with `text` in one step: the bytes go to a temporary file
/// next to it, which is then renamed over the destination. An existing
/// destination keeps its permissions.
pub fn write_atomic(path: &Path, text: &str) -> SlcResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = temp_file_in(dir).with_file_context("create a temporary file in", dir)?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .with_file_context("set permissions of", file.path())?;
    }
    file.write_all(text.as_bytes())
        .with_file_context("write", file.path())?;
    file.as_file()
        .sync_all()
        .with_file_context("flush", file.path())?;
    file.persist(path)
        .map_err(|err| err.error)
        .with_file_context("replace", path)?;
    Ok(())
}

fn parse_error(line: usize, reason: impl Into<String>) -> SlcError {
    SlcError::Parse {
        line,
        reason: reason.into(),
    }
}

fn number(line: usize, token: &str) -> SlcResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| parse_error(line, format!("expected a number, got '{token}'")))
}

fn numbers(line: usize, tokens: &[&str]) -> SlcResult<Vec<f64>> {
    tokens.iter().map(|token| number(line, token)).collect()
}

/// Contour under construction while reading a spline set
struct OpenContour {
    start: Point,
    segments: Vec<Segment>,
}

impl OpenContour {
    fn close(self) -> Contour {
        Contour::new(self.start, self.segments)
    }
}

fn spline_line(
    line: usize,
    text: &str,
    open: &mut Option<OpenContour>,
    contours: &mut Vec<Contour>,
) -> SlcResult<()> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some((op, coords)) = tokens.split_last().and_then(|(_flags, rest)| rest.split_last()) else {
        return Err(parse_error(line, "empty spline line"));
    };
    let values = numbers(line, coords)?;
    let point = |i: usize| Point::new(values[i], values[i + 1]);
    match (*op, values.len()) {
        ("m", 2) => {
            if let Some(previous) = open.take() {
                contours.push(previous.close());
            }
            *open = Some(OpenContour {
                start: point(0),
                segments: Vec::new(),
            });
        }
        ("l", 2) | ("c", 6) => {
            let Some(current) = open.as_mut() else {
                return Err(parse_error(line, "segment before the first move"));
            };
            current.segments.push(if *op == "l" {
                Segment::Line(point(0))
            } else {
                Segment::Curve(point(0), point(2), point(4))
            });
        }
        (op, n) => {
            return Err(parse_error(
                line,
                format!("unexpected opcode '{op}' with {n} coordinates"),
            ))
        }
    }
    Ok(())
}

/// Parse text produced by [`serialize`].
pub fn read(text: &str) -> SlcResult<Font> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
    match lines.next() {
        Some((_, FORMAT_LINE)) => {}
        _ => return Err(parse_error(1, "not an SFD 3.0 file")),
    }

    let mut ascent = None;
    let mut descent = None;
    let mut declared = None;
    let mut glyphs: Vec<Glyph> = Vec::new();
    let mut current: Option<Glyph> = None;
    let mut in_splines = false;
    let mut open: Option<OpenContour> = None;
    let mut finished = false;

    for (n, line) in lines {
        if in_splines {
            if line == "EndSplineSet" {
                in_splines = false;
                if let (Some(glyph), Some(contour)) = (current.as_mut(), open.take()) {
                    glyph.contours.push(contour.close());
                }
            } else if let Some(glyph) = current.as_mut() {
                spline_line(n, line, &mut open, &mut glyph.contours)?;
            }
            continue;
        }
        let (key, value) = line.split_once(':').map_or((line, ""), |(k, v)| (k, v.trim()));
        match key {
            "Ascent" => ascent = Some(number(n, value)?),
            "Descent" => descent = Some(number(n, value)?),
            "BeginChars" => {
                let fields = numbers(n, &value.split_whitespace().collect::<Vec<_>>())?;
                let [size, count] = fields.as_slice() else {
                    return Err(parse_error(n, "BeginChars needs two values"));
                };
                declared = Some((*size as u32, *count as usize));
            }
            "StartChar" => {
                if current.is_some() {
                    return Err(parse_error(n, "StartChar inside another glyph"));
                }
                current = Some(Glyph::new(value, 0, 0.0));
            }
            "Encoding" if current.is_some() => {
                let first = value.split_whitespace().next().unwrap_or_default();
                let codepoint = first
                    .parse::<u32>()
                    .map_err(|_| parse_error(n, format!("bad code point '{first}'")))?;
                if let Some(glyph) = current.as_mut() {
                    glyph.codepoint = codepoint;
                }
            }
            "Width" => {
                let width = number(n, value)?;
                if let Some(glyph) = current.as_mut() {
                    glyph.advance_width = width;
                }
            }
            "SplineSet" => {
                if current.is_none() {
                    return Err(parse_error(n, "SplineSet outside a glyph"));
                }
                in_splines = true;
            }
            "EndChar" => match current.take() {
                Some(glyph) => glyphs.push(glyph),
                None => return Err(parse_error(n, "EndChar without StartChar")),
            },
            "EndSplineFont" => finished = true,
            _ => {}
        }
    }

    if !finished {
        return Err(parse_error(text.lines().count(), "missing EndSplineFont"));
    }
    let (encoding_size, count) =
        declared.ok_or_else(|| parse_error(1, "missing BeginChars"))?;
    if count != glyphs.len() {
        return Err(parse_error(
            1,
            format!("BeginChars declares {count} glyphs, found {}", glyphs.len()),
        ));
    }
    Ok(Font {
        ascent: ascent.ok_or_else(|| parse_error(1, "missing Ascent"))?,
        descent: descent.ok_or_else(|| parse_error(1, "missing Descent"))?,
        // SFD has no font-wide default width.
        advance_width: glyphs.first().map_or(0.0, |glyph| glyph.advance_width),
        encoding_size,
        glyphs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::{MetricOverrides, Metrics};
    use crate::geometry::primitives::raw_rect;
    use pretty_assertions::assert_eq;

    fn sample_font() -> Font {
        let m = Metrics::resolve(&MetricOverrides::default()).unwrap();
        let mut font = Font::new(&m);
        font.glyphs.push(Glyph::new("space", 0x20, 1000.0));
        let mut block = Glyph::new("uni2580", 0x2580, 1000.0);
        block.contours = raw_rect(0.0, 800.0, 1000.0, 300.0).unwrap().contours;
        font.glyphs.push(block);
        let mut arc = Glyph::new("uni256D", 0x256D, 1000.0);
        arc.contours.push(Contour::new(
            Point::new(444.0, -200.0),
            [
                Segment::Line(Point::new(444.0, 0.0)),
                Segment::Curve(
                    Point::new(444.0, 100.0),
                    Point::new(500.0, 356.0),
                    Point::new(1000.0, 356.0),
                ),
                Segment::Line(Point::new(1000.0, -200.0)),
            ],
        ));
        font.glyphs.push(arc);
        font
    }

    #[test]
    fn test_glyph_blocks() {
        let text = serialize(&sample_font());
        let body = text.split_once("BeginChars: 1114112 3\n").unwrap().1;
        assert_eq!(
            body,
            "\n\
             StartChar: space\n\
             Encoding: 32 32 0\n\
             Width: 1000\n\
             VWidth: 0\n\
             Flags: HW\n\
             LayerCount: 2\n\
             Fore\n\
             EndChar\n\
             \n\
             StartChar: uni2580\n\
             Encoding: 9600 9600 1\n\
             Width: 1000\n\
             VWidth: 0\n\
             Flags: HW\n\
             LayerCount: 2\n\
             Fore\n\
             SplineSet\n\
             0 800 m 1\n \
             1000 800 l 1\n \
             1000 300 l 1\n \
             0 300 l 1\n \
             0 800 l 1\n\
             EndSplineSet\n\
             EndChar\n\
             \n\
             StartChar: uni256D\n\
             Encoding: 9581 9581 2\n\
             Width: 1000\n\
             VWidth: 0\n\
             Flags: HW\n\
             LayerCount: 2\n\
             Fore\n\
             SplineSet\n\
             444 -200 m 1\n \
             444 0 l 1\n \
             444 100 500 356 1000 356 c 1\n \
             1000 -200 l 1\n \
             444 -200 l 1\n\
             EndSplineSet\n\
             EndChar\n\
             EndChars\n\
             EndSplineFont\n"
        );
    }

    #[test]
    fn test_header_metrics() {
        let text = serialize(&sample_font());
        assert!(text.starts_with("SplineFontDB: 3.0\nFontName: SLC\n"));
        assert!(text.contains("\nAscent: 800\nDescent: 200\n"));
        assert!(text.contains("\nEncoding: UnicodeFull\n"));
    }

    #[test]
    fn test_fractional_metrics_are_rounded() {
        let mut font = sample_font();
        font.ascent = 799.5;
        font.glyphs[0].advance_width = 600.4;
        let text = serialize(&font);
        assert!(text.contains("\nAscent: 800\n"));
        assert!(text.contains("\nWidth: 600\n"));
    }

    #[test]
    fn test_round_trip() {
        let font = sample_font();
        let back = read(&serialize(&font)).unwrap();
        assert_eq!(back, font);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        assert_eq!(serialize(&sample_font()), serialize(&sample_font()));
    }

    #[test]
    fn test_read_rejects_foreign_input() {
        assert!(matches!(read("hello\n"), Err(SlcError::Parse { line: 1, .. })));
        let truncated = serialize(&sample_font()).replace("EndSplineFont\n", "");
        assert!(read(&truncated).is_err());
        let bad = serialize(&sample_font()).replace("1000 300 l 1", "1000 300 q 1");
        assert!(matches!(read(&bad), Err(SlcError::Parse { .. })));
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sfd");
        std::fs::write(&path, "old").unwrap();
        write_atomic(&path, "new contents").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new contents");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_uses_default_file_mode() {
        use std::os::unix::fs::PermissionsExt as _;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sfd");
        write_atomic(&path, "new contents").unwrap();

        // A file created the ordinary way gets 0o666 less the umask.
        let sibling = dir.path().join("plain.sfd");
        std::fs::File::create(&sibling).unwrap();
        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&sibling));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt as _;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sfd");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();
        write_atomic(&path, "new contents").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new contents");
    }

    #[test]
    fn test_write_atomic_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.sfd");
        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, SlcError::Serialization { .. }));
        assert!(!path.exists());
    }
}
