//! Grid-based fill patterns
//!
//! Every pattern works on a `rows × cols` grid laid over the unit square;
//! cell `(x, y)` covers `[x/cols, (x+1)/cols] × [y/rows, (y+1)/rows]`.

use super::boolean::{finalize, PolygonOps};
use super::contour::Shape;
use super::point::CoordinateMapper;
use super::primitives::{poly, raw_rect, rect};
use crate::core::errors::{GeomResult, GeometryFault};
use crate::font_source::Metrics;
use kurbo::Affine;

fn cell(mapper: &CoordinateMapper, rows: u32, cols: u32, x: u32, y: u32) -> GeomResult<Shape> {
    let (r, c) = (f64::from(rows), f64::from(cols));
    rect(
        mapper,
        f64::from(x) / c,
        f64::from(y) / r,
        f64::from(x + 1) / c,
        f64::from(y + 1) / r,
    )
}

/// Checkerboard selection of the medium shade.
#[inline]
pub fn shade_selects(rows: u32, cols: u32, x: u32, y: u32, inverse: bool) -> bool {
    // Keep this expression exactly as is; it decides which corner is filled.
    ((x + y) & 1) ^ ((rows + cols) & 1) ^ u32::from(!inverse) != 0
}

/// Selection of the light shade, over the even rows only.
#[inline]
pub fn light_shade_selects(rows: u32, cols: u32, x: u32, half_row: u32) -> bool {
    ((x + half_row) & 1) == ((rows + cols) & 1)
}

/// Medium shade: one rectangle per selected cell.
///
/// Selected cells meet at corners at most, so the cell set already is the
/// union and no boolean pass is needed.
pub fn shade(m: &Metrics, rows: u32, cols: u32, inverse: bool) -> GeomResult<Shape> {
    let mapper = CoordinateMapper::new(m);
    let mut shape = Shape::new();
    for y in 0..rows {
        for x in 0..cols {
            if shade_selects(rows, cols, x, y, inverse) {
                shape.extend(cell(&mapper, rows, cols, x, y)?);
            }
        }
    }
    Ok(shape)
}

/// Light shade: checkerboard cells on every other row.
pub fn light_shade(m: &Metrics, rows: u32, cols: u32) -> GeomResult<Shape> {
    let mapper = CoordinateMapper::new(m);
    let mut shape = Shape::new();
    for y in 0..rows / 2 {
        for x in 0..cols {
            if light_shade_selects(rows, cols, x, y) {
                shape.extend(cell(&mapper, rows, cols, x, y * 2)?);
            }
        }
    }
    Ok(shape)
}

/// Dark shade: the whole cell area minus the light-shade cells.
pub fn dark_shade<P: PolygonOps + ?Sized>(
    ops: &P,
    m: &Metrics,
    rows: u32,
    cols: u32,
) -> GeomResult<Shape> {
    let mapper = CoordinateMapper::new(m);
    let full = rect(&mapper, 0.0, 0.0, 1.0, 1.0)?;
    let light = light_shade(m, rows, cols)?;
    Ok(finalize(ops, &ops.difference(&full, &light)?))
}

/// Medium shade merged with, or clipped to, a polygon.
pub fn shade_part<P: PolygonOps + ?Sized>(
    ops: &P,
    m: &Metrics,
    rows: u32,
    cols: u32,
    inverse: bool,
    points: &[(f64, f64)],
    union: bool,
) -> GeomResult<Shape> {
    let cells = shade(m, rows, cols, inverse)?;
    let clip = poly(&CoordinateMapper::new(m), points)?;
    let combined = if union {
        ops.union(&[cells, clip])?
    } else {
        ops.intersect(&cells, &clip)?
    };
    Ok(finalize(ops, &combined))
}

/// Cells selected by the bits of `n`, least significant bit first, row by row.
fn selected_cells(rows: u32, cols: u32, mut n: u32) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            if n & 1 == 1 {
                cells.push((x, y));
            }
            n >>= 1;
        }
    }
    cells
}

/// Union of the cells selected by `n`.
pub fn bitmap<P: PolygonOps + ?Sized>(
    ops: &P,
    m: &Metrics,
    rows: u32,
    cols: u32,
    n: u32,
) -> GeomResult<Shape> {
    let mapper = CoordinateMapper::new(m);
    let cells = selected_cells(rows, cols, n)
        .into_iter()
        .map(|(x, y)| cell(&mapper, rows, cols, x, y))
        .collect::<GeomResult<Vec<_>>>()?;
    if cells.is_empty() {
        return Ok(Shape::new());
    }
    Ok(finalize(ops, &ops.union(&cells)?))
}

/// Cells selected by `n`, each shrunk by the separation margins.
pub fn separated_map(m: &Metrics, rows: u32, cols: u32, n: u32) -> GeomResult<Shape> {
    let (r, c) = (f64::from(rows), f64::from(cols));
    if m.separation_left + m.separation_right >= m.width / c
        || m.separation_top + m.separation_bottom >= m.height / r
    {
        return Err(GeometryFault::new(
            "sepmap",
            "separation leaves no room inside the cell",
        ));
    }
    let mut shape = Shape::new();
    for (x, y) in selected_cells(rows, cols, n) {
        let (x, y) = (f64::from(x), f64::from(y));
        shape.extend(raw_rect(
            m.width * x / c + m.separation_left,
            m.ascent - m.height * y / r - m.separation_top,
            m.width * (x + 1.0) / c - m.separation_right,
            m.ascent - m.height * (y + 1.0) / r + m.separation_bottom,
        )?);
    }
    Ok(shape)
}

/// Parallel stripes rotated by `angle` degrees and clipped to the em box.
pub fn diagonal_fill<P: PolygonOps + ?Sized>(
    ops: &P,
    m: &Metrics,
    angle: f64,
) -> GeomResult<Shape> {
    let reach = m.height + m.width;
    let fill = m.diagonal_fill_weight;
    let space = m.diagonal_space_weight;

    let mut stripes = raw_rect(-reach, fill * 0.5, reach, -fill * 0.5)?;
    let count = (reach / (fill + space)).round() as u32;
    for i in 0..count {
        let i = f64::from(i);
        let y1 = (i + 1.5) * fill + (i + 1.0) * space;
        let y2 = (i + 0.5) * fill + (i + 1.0) * space;
        stripes.extend(raw_rect(-reach, y1, reach, y2)?);
        stripes.extend(raw_rect(-reach, -y2, reach, -y1)?);
    }

    let placed = stripes.transform(
        Affine::translate((m.width * 0.5, m.middle())) * Affine::rotate(angle.to_radians()),
    );
    let em_box = rect(&CoordinateMapper::new(m), 0.0, 0.0, 1.0, 1.0)?;
    Ok(finalize(ops, &ops.intersect(&placed, &em_box)?))
}
