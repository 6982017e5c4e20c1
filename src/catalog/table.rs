//! The glyph repertoire as data.

use super::*;
use crate::font_source::Metrics;

/// Codes of the 4x2 bitmaps that already have a home elsewhere in Unicode.
pub(super) const KAYPRO_ENCODED_ELSEWHERE: [u32; 26] = [
    0x00, 0x01, 0x02, 0x03, 0x05, 0x0A, 0x0F, 0x14, 0x28, 0x3F, 0x40, 0x50, 0x55, 0x5A, 0x5F, 0x80,
    0xA0, 0xA5, 0xAA, 0xAF, 0xC0, 0xF0, 0xF5, 0xFA, 0xFC, 0xFF,
];

#[rustfmt::skip]
pub(crate) fn records(m: &Metrics) -> Vec<GlyphRecord> {
    let Offsets { xe, ye, xg, yg, xgd, ygd, tx, ty } = Offsets::new(m);
    let mut t = Vec::with_capacity(820);

    // Miscellaneous Technical block.
    t.push(named("space", 0x0020, vec![]));
    t.push(named("uni00A0", 0x00A0, vec![]));
    t.push(named("uni23B8", 0x23B8, vec![light(lines![[(xe, 0.0), (xe, 1.0)]])]));
    t.push(named("uni23B9", 0x23B9, vec![light(lines![[(1.0 - xe, 0.0), (1.0 - xe, 1.0)]])]));
    t.push(named("uni23BA", 0x23BA, vec![light(lines![[(0.0, ye), (1.0, ye)]])]));
    t.push(named("uni23BB", 0x23BB, vec![light(lines![[(0.0, 0.25 + (ye * 0.5)), (1.0, 0.25 + (ye * 0.5))]])]));
    t.push(named("uni23BC", 0x23BC, vec![light(lines![[(0.0, 0.75 - (ye * 0.5)), (1.0, 0.75 - (ye * 0.5))]])]));
    t.push(named("uni23BD", 0x23BD, vec![light(lines![[(0.0, 1.0 - ye), (1.0, 1.0 - ye)]])]));
    // Box Drawing block.
    t.push(named("SF100000", 0x2500, vec![light(lines![[(0.0, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2501", 0x2501, vec![heavy(lines![[(0.0, 0.5), (1.0, 0.5)]])]));
    t.push(named("SF110000", 0x2502, vec![light(lines![[(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("uni2503", 0x2503, vec![heavy(lines![[(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("uni2504", 0x2504, vec![light(lines![[(0.0 + xe, 0.5), (1.0 / 3.0 - xe, 0.5)], [(1.0 / 3.0 + xe, 0.5), (2.0 / 3.0 - xe, 0.5)], [(2.0 / 3.0 + xe, 0.5), (1.0 - xe, 0.5)]])]));
    t.push(named("uni2505", 0x2505, vec![heavy(lines![[(0.0 + xe, 0.5), (1.0 / 3.0 - xe, 0.5)], [(1.0 / 3.0 + xe, 0.5), (2.0 / 3.0 - xe, 0.5)], [(2.0 / 3.0 + xe, 0.5), (1.0 - xe, 0.5)]])]));
    t.push(named("uni2506", 0x2506, vec![light(lines![[(0.5, 0.0 + ye), (0.5, 1.0 / 3.0 - ye)], [(0.5, 1.0 / 3.0 + ye), (0.5, 2.0 / 3.0 - ye)], [(0.5, 2.0 / 3.0 + ye), (0.5, 1.0 - ye)]])]));
    t.push(named("uni2507", 0x2507, vec![heavy(lines![[(0.5, 0.0 + ye), (0.5, 1.0 / 3.0 - ye)], [(0.5, 1.0 / 3.0 + ye), (0.5, 2.0 / 3.0 - ye)], [(0.5, 2.0 / 3.0 + ye), (0.5, 1.0 - ye)]])]));
    t.push(named("uni2508", 0x2508, vec![light(lines![[(0.0 + xe, 0.5), (0.25 - xe, 0.5)], [(0.25 + xe, 0.5), (0.5 - xe, 0.5)], [(0.5 + xe, 0.5), (0.75 - xe, 0.5)], [(0.75 + xe, 0.5), (1.0 - xe, 0.5)]])]));
    t.push(named("uni2509", 0x2509, vec![heavy(lines![[(0.0 + xe, 0.5), (0.25 - xe, 0.5)], [(0.25 + xe, 0.5), (0.5 - xe, 0.5)], [(0.5 + xe, 0.5), (0.75 - xe, 0.5)], [(0.75 + xe, 0.5), (1.0 - xe, 0.5)]])]));
    t.push(named("uni250A", 0x250A, vec![light(lines![[(0.5, 0.0 + ye), (0.5, 0.25 - ye)], [(0.5, 0.25 + ye), (0.5, 0.5 - ye)], [(0.5, 0.5 + ye), (0.5, 0.75 - ye)], [(0.5, 0.75 + ye), (0.5, 1.0 - ye)]])]));
    t.push(named("uni250B", 0x250B, vec![heavy(lines![[(0.5, 0.0 + ye), (0.5, 0.25 - ye)], [(0.5, 0.25 + ye), (0.5, 0.5 - ye)], [(0.5, 0.5 + ye), (0.5, 0.75 - ye)], [(0.5, 0.75 + ye), (0.5, 1.0 - ye)]])]));
    t.push(named("SF010000", 0x250C, vec![light(lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni250D", 0x250D, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5)]], lines![[(0.5 - xe, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni250E", 0x250E, vec![mixed(lines![[(0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5 - ye)]])]));
    t.push(named("uni250F", 0x250F, vec![heavy(lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("SF030000", 0x2510, vec![light(lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2511", 0x2511, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5)]], lines![[(0.5 + xe, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2512", 0x2512, vec![mixed(lines![[(0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5 - ye)]])]));
    t.push(named("uni2513", 0x2513, vec![heavy(lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("SF020000", 0x2514, vec![light(lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2515", 0x2515, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5)]], lines![[(0.5 - xe, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2516", 0x2516, vec![mixed(lines![[(0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5 + ye)]])]));
    t.push(named("uni2517", 0x2517, vec![heavy(lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("SF040000", 0x2518, vec![light(lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2519", 0x2519, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5)]], lines![[(0.5 + xe, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni251A", 0x251A, vec![mixed(lines![[(0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5 + ye)]])]));
    t.push(named("uni251B", 0x251B, vec![heavy(lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("SF080000", 0x251C, vec![light(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni251D", 0x251D, vec![mixed(lines![[(0.5, 0.0), (0.5, 1.0)]], lines![[(0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni251E", 0x251E, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5 + ye)]])]));
    t.push(named("uni251F", 0x251F, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5 - ye)]])]));
    t.push(named("uni2520", 0x2520, vec![mixed(lines![[(0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("uni2521", 0x2521, vec![mixed(lines![[(0.5, 0.5), (0.5, 1.0)]], lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2522", 0x2522, vec![mixed(lines![[(0.5, 0.5), (0.5, 0.0)]], lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2523", 0x2523, vec![heavy(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("SF090000", 0x2524, vec![light(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2525", 0x2525, vec![mixed(lines![[(0.5, 0.0), (0.5, 1.0)]], lines![[(0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2526", 0x2526, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5 + ye)]])]));
    t.push(named("uni2527", 0x2527, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5 - ye)]])]));
    t.push(named("uni2528", 0x2528, vec![mixed(lines![[(0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("uni2529", 0x2529, vec![mixed(lines![[(0.5, 0.5), (0.5, 1.0)]], lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni252A", 0x252A, vec![mixed(lines![[(0.5, 0.5), (0.5, 0.0)]], lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni252B", 0x252B, vec![heavy(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("SF060000", 0x252C, vec![light(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.5), (0.5, 1.0)]])]));
    t.push(named("uni252D", 0x252D, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]], lines![[(0.0, 0.5), (0.5 + xe, 0.5)]])]));
    t.push(named("uni252E", 0x252E, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]], lines![[(1.0, 0.5), (0.5 - xe, 0.5)]])]));
    t.push(named("uni252F", 0x252F, vec![mixed(lines![[(0.5, 0.5), (0.5, 1.0)]], lines![[(0.0, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2530", 0x2530, vec![mixed(lines![[(0.0, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.5), (0.5, 1.0)]])]));
    t.push(named("uni2531", 0x2531, vec![mixed(lines![[(0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2532", 0x2532, vec![mixed(lines![[(0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2533", 0x2533, vec![heavy(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.5), (0.5, 1.0)]])]));
    t.push(named("SF070000", 0x2534, vec![light(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.5), (0.5, 0.0)]])]));
    t.push(named("uni2535", 0x2535, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]], lines![[(0.0, 0.5), (0.5 + xe, 0.5)]])]));
    t.push(named("uni2536", 0x2536, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]], lines![[(1.0, 0.5), (0.5 - xe, 0.5)]])]));
    t.push(named("uni2537", 0x2537, vec![mixed(lines![[(0.5, 0.5), (0.5, 0.0)]], lines![[(0.0, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2538", 0x2538, vec![mixed(lines![[(0.0, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.5), (0.5, 0.0)]])]));
    t.push(named("uni2539", 0x2539, vec![mixed(lines![[(0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni253A", 0x253A, vec![mixed(lines![[(0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni253B", 0x253B, vec![heavy(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.5), (0.5, 0.0)]])]));
    t.push(named("SF050000", 0x253C, vec![light(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("uni253D", 0x253D, vec![mixed(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5), (1.0, 0.5)]], lines![[(0.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni253E", 0x253E, vec![mixed(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5), (0.0, 0.5)]], lines![[(1.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni253F", 0x253F, vec![mixed(lines![[(0.5, 0.0), (0.5, 1.0)]], lines![[(0.0, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2540", 0x2540, vec![mixed(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.5), (0.5, 1.0)]], lines![[(0.5, 0.0), (0.5, 0.5)]])]));
    t.push(named("uni2541", 0x2541, vec![mixed(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.5), (0.5, 0.0)]], lines![[(0.5, 1.0), (0.5, 0.5)]])]));
    t.push(named("uni2542", 0x2542, vec![mixed(lines![[(0.0, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("uni2543", 0x2543, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2544", 0x2544, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2545", 0x2545, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5), (0.0, 0.5)]])]));
    t.push(named("uni2546", 0x2546, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5), (1.0, 0.5)]])]));
    t.push(named("uni2547", 0x2547, vec![mixed(lines![[(0.5, 0.5), (0.5, 1.0)]], lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.0), (0.5, 0.5)]])]));
    t.push(named("uni2548", 0x2548, vec![mixed(lines![[(0.5, 0.5), (0.5, 0.0)]], lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 1.0), (0.5, 0.5)]])]));
    t.push(named("uni2549", 0x2549, vec![mixed(lines![[(0.5, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 1.0)], [(0.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni254A", 0x254A, vec![mixed(lines![[(0.5, 0.5), (0.0, 0.5)]], lines![[(0.5, 0.0), (0.5, 1.0)], [(1.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni254B", 0x254B, vec![heavy(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("uni254C", 0x254C, vec![light(lines![[(0.0 + xe, 0.5), (0.5 - xe, 0.5)], [(0.5 + xe, 0.5), (1.0 - xe, 0.5)]])]));
    t.push(named("uni254D", 0x254D, vec![heavy(lines![[(0.0 + xe, 0.5), (0.5 - xe, 0.5)], [(0.5 + xe, 0.5), (1.0 - xe, 0.5)]])]));
    t.push(named("uni254E", 0x254E, vec![light(lines![[(0.5, 0.0 + ye), (0.5, 0.5 - ye)], [(0.5, 0.5 + ye), (0.5, 1.0 - ye)]])]));
    t.push(named("uni254F", 0x254F, vec![heavy(lines![[(0.5, 0.0 + ye), (0.5, 0.5 - ye)], [(0.5, 0.5 + ye), (0.5, 1.0 - ye)]])]));
    t.push(named("SF430000", 0x2550, vec![light(lines![[(0.0, 0.5 - yg), (1.0, 0.5 - yg)], [(0.0, 0.5 + yg), (1.0, 0.5 + yg)]])]));
    t.push(named("SF240000", 0x2551, vec![light(lines![[(0.5 - xg, 0.0), (0.5 - xg, 1.0)], [(0.5 + xg, 0.0), (0.5 + xg, 1.0)]])]));
    t.push(named("SF510000", 0x2552, vec![light(lines![[(0.5, 1.0), (0.5, 0.5 - yg), (1.0, 0.5 - yg)], [(0.5, 0.5 + yg), (1.0, 0.5 + yg)]])]));
    t.push(named("SF520000", 0x2553, vec![light(lines![[(1.0, 0.5), (0.5 - xg, 0.5), (0.5 - xg, 1.0)], [(0.5 + xg, 0.5), (0.5 + xg, 1.0)]])]));
    t.push(named("SF390000", 0x2554, vec![light(lines![[(0.5 - xg, 1.0), (0.5 - xg, 0.5 - yg), (1.0, 0.5 - yg)], [(0.5 + xg, 1.0), (0.5 + xg, 0.5 + yg), (1.0, 0.5 + yg)]])]));
    t.push(named("SF220000", 0x2555, vec![light(lines![[(0.5, 1.0), (0.5, 0.5 - yg), (0.0, 0.5 - yg)], [(0.5, 0.5 + yg), (0.0, 0.5 + yg)]])]));
    t.push(named("SF210000", 0x2556, vec![light(lines![[(0.0, 0.5), (0.5 + xg, 0.5), (0.5 + xg, 1.0)], [(0.5 - xg, 0.5), (0.5 - xg, 1.0)]])]));
    t.push(named("SF250000", 0x2557, vec![light(lines![[(0.5 + xg, 1.0), (0.5 + xg, 0.5 - yg), (0.0, 0.5 - yg)], [(0.5 - xg, 1.0), (0.5 - xg, 0.5 + yg), (0.0, 0.5 + yg)]])]));
    t.push(named("SF500000", 0x2558, vec![light(lines![[(0.5, 0.0), (0.5, 0.5 + yg), (1.0, 0.5 + yg)], [(0.5, 0.5 - yg), (1.0, 0.5 - yg)]])]));
    t.push(named("SF490000", 0x2559, vec![light(lines![[(1.0, 0.5), (0.5 - xg, 0.5), (0.5 - xg, 0.0)], [(0.5 + xg, 0.5), (0.5 + xg, 0.0)]])]));
    t.push(named("SF380000", 0x255A, vec![light(lines![[(0.5 - xg, 0.0), (0.5 - xg, 0.5 + yg), (1.0, 0.5 + yg)], [(0.5 + xg, 0.0), (0.5 + xg, 0.5 - yg), (1.0, 0.5 - yg)]])]));
    t.push(named("SF280000", 0x255B, vec![light(lines![[(0.5, 0.0), (0.5, 0.5 + yg), (0.0, 0.5 + yg)], [(0.5, 0.5 - yg), (0.0, 0.5 - yg)]])]));
    t.push(named("SF270000", 0x255C, vec![light(lines![[(0.0, 0.5), (0.5 + xg, 0.5), (0.5 + xg, 0.0)], [(0.5 - xg, 0.5), (0.5 - xg, 0.0)]])]));
    t.push(named("SF260000", 0x255D, vec![light(lines![[(0.5 + xg, 0.0), (0.5 + xg, 0.5 + yg), (0.0, 0.5 + yg)], [(0.5 - xg, 0.0), (0.5 - xg, 0.5 - yg), (0.0, 0.5 - yg)]])]));
    t.push(named("SF360000", 0x255E, vec![light(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5 - yg), (1.0, 0.5 - yg)], [(0.5, 0.5 + yg), (1.0, 0.5 + yg)]])]));
    t.push(named("SF370000", 0x255F, vec![light(lines![[(0.5 - xg, 0.0), (0.5 - xg, 1.0)], [(0.5 + xg, 0.0), (0.5 + xg, 1.0)], [(0.5 + xg, 0.5), (1.0, 0.5)]])]));
    t.push(named("SF420000", 0x2560, vec![light(lines![[(0.5 - xg, 0.0), (0.5 - xg, 1.0)], [(0.5 + xg, 0.0), (0.5 + xg, 0.5 - yg), (1.0, 0.5 - yg)], [(0.5 + xg, 1.0), (0.5 + xg, 0.5 + yg), (1.0, 0.5 + yg)]])]));
    t.push(named("SF190000", 0x2561, vec![light(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5, 0.5 - yg), (0.0, 0.5 - yg)], [(0.5, 0.5 + yg), (0.0, 0.5 + yg)]])]));
    t.push(named("SF200000", 0x2562, vec![light(lines![[(0.5 + xg, 0.0), (0.5 + xg, 1.0)], [(0.5 - xg, 0.0), (0.5 - xg, 1.0)], [(0.5 - xg, 0.5), (0.0, 0.5)]])]));
    t.push(named("SF230000", 0x2563, vec![light(lines![[(0.5 + xg, 0.0), (0.5 + xg, 1.0)], [(0.5 - xg, 0.0), (0.5 - xg, 0.5 - yg), (0.0, 0.5 - yg)], [(0.5 - xg, 1.0), (0.5 - xg, 0.5 + yg), (0.0, 0.5 + yg)]])]));
    t.push(named("SF470000", 0x2564, vec![light(lines![[(0.0, 0.5 - yg), (1.0, 0.5 - yg)], [(0.0, 0.5 + yg), (1.0, 0.5 + yg)], [(0.5, 0.5 + yg), (0.5, 1.0)]])]));
    t.push(named("SF480000", 0x2565, vec![light(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5 - xg, 0.5), (0.5 - xg, 1.0)], [(0.5 + xg, 0.5), (0.5 + xg, 1.0)]])]));
    t.push(named("SF410000", 0x2566, vec![light(lines![[(0.0, 0.5 - yg), (1.0, 0.5 - yg)], [(0.0, 0.5 + yg), (0.5 - xg, 0.5 + yg), (0.5 - xg, 1.0)], [(1.0, 0.5 + yg), (0.5 + xg, 0.5 + yg), (0.5 + xg, 1.0)]])]));
    t.push(named("SF450000", 0x2567, vec![light(lines![[(0.0, 0.5 + yg), (1.0, 0.5 + yg)], [(0.0, 0.5 - yg), (1.0, 0.5 - yg)], [(0.5, 0.5 - yg), (0.5, 0.0)]])]));
    t.push(named("SF460000", 0x2568, vec![light(lines![[(0.0, 0.5), (1.0, 0.5)], [(0.5 - xg, 0.5), (0.5 - xg, 0.0)], [(0.5 + xg, 0.5), (0.5 + xg, 0.0)]])]));
    t.push(named("SF400000", 0x2569, vec![light(lines![[(0.0, 0.5 + yg), (1.0, 0.5 + yg)], [(0.0, 0.5 - yg), (0.5 - xg, 0.5 - yg), (0.5 - xg, 0.0)], [(1.0, 0.5 - yg), (0.5 + xg, 0.5 - yg), (0.5 + xg, 0.0)]])]));
    t.push(named("SF540000", 0x256A, vec![light(lines![[(0.0, 0.5 - yg), (1.0, 0.5 - yg)], [(0.0, 0.5 + yg), (1.0, 0.5 + yg)], [(0.5, 0.0), (0.5, 1.0)]])]));
    t.push(named("SF530000", 0x256B, vec![light(lines![[(0.5 - xg, 0.0), (0.5 - xg, 1.0)], [(0.5 + xg, 0.0), (0.5 + xg, 1.0)], [(0.0, 0.5), (1.0, 0.5)]])]));
    t.push(named("SF440000", 0x256C, vec![light(lines![[(0.5 - xg, 0.0), (0.5 - xg, 0.5 - yg), (0.0, 0.5 - yg)], [(0.5 + xg, 0.0), (0.5 + xg, 0.5 - yg), (1.0, 0.5 - yg)], [(0.5 - xg, 1.0), (0.5 - xg, 0.5 + yg), (0.0, 0.5 + yg)], [(0.5 + xg, 1.0), (0.5 + xg, 0.5 + yg), (1.0, 0.5 + yg)]])]));
    t.push(named("uni256D", 0x256D, vec![arc(1, 1)]));
    t.push(named("uni256E", 0x256E, vec![arc(-1, 1)]));
    t.push(named("uni256F", 0x256F, vec![arc(-1, -1)]));
    t.push(named("uni2570", 0x2570, vec![arc(1, -1)]));
    t.push(named("uni2571", 0x2571, vec![diag(lines![[(1.0, 0.0), (0.0, 1.0)]])]));
    t.push(named("uni2572", 0x2572, vec![diag(lines![[(0.0, 0.0), (1.0, 1.0)]])]));
    t.push(named("uni2573", 0x2573, vec![diag(lines![[(1.0, 0.0), (0.0, 1.0)], [(0.0, 0.0), (1.0, 1.0)]])]));
    t.push(named("uni2574", 0x2574, vec![light(lines![[(0.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni2575", 0x2575, vec![light(lines![[(0.5, 0.0), (0.5, 0.5)]])]));
    t.push(named("uni2576", 0x2576, vec![light(lines![[(1.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni2577", 0x2577, vec![light(lines![[(0.5, 1.0), (0.5, 0.5)]])]));
    t.push(named("uni2578", 0x2578, vec![heavy(lines![[(0.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni2579", 0x2579, vec![heavy(lines![[(0.5, 0.0), (0.5, 0.5)]])]));
    t.push(named("uni257A", 0x257A, vec![heavy(lines![[(1.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni257B", 0x257B, vec![heavy(lines![[(0.5, 1.0), (0.5, 0.5)]])]));
    t.push(named("uni257C", 0x257C, vec![mixed(lines![[(0.0, 0.5), (0.5, 0.5)]], lines![[(1.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni257D", 0x257D, vec![mixed(lines![[(0.5, 0.0), (0.5, 0.5)]], lines![[(0.5, 1.0), (0.5, 0.5)]])]));
    t.push(named("uni257E", 0x257E, vec![mixed(lines![[(1.0, 0.5), (0.5, 0.5)]], lines![[(0.0, 0.5), (0.5, 0.5)]])]));
    t.push(named("uni257F", 0x257F, vec![mixed(lines![[(0.5, 1.0), (0.5, 0.5)]], lines![[(0.5, 0.0), (0.5, 0.5)]])]));
    // Block Elements block.
    t.push(named("upblock", 0x2580, vec![rect(0.0, 0.0, 1.0, 0.5)]));
    t.push(named("uni2581", 0x2581, vec![rect(0.0, 0.875, 1.0, 1.0)]));
    t.push(named("uni2582", 0x2582, vec![rect(0.0, 0.75, 1.0, 1.0)]));
    t.push(named("uni2583", 0x2583, vec![rect(0.0, 0.625, 1.0, 1.0)]));
    t.push(named("dnblock", 0x2584, vec![rect(0.0, 0.5, 1.0, 1.0)]));
    t.push(named("uni2585", 0x2585, vec![rect(0.0, 0.375, 1.0, 1.0)]));
    t.push(named("uni2586", 0x2586, vec![rect(0.0, 0.25, 1.0, 1.0)]));
    t.push(named("uni2587", 0x2587, vec![rect(0.0, 0.125, 1.0, 1.0)]));
    t.push(named("block", 0x2588, vec![rect(0.0, 0.0, 1.0, 1.0)]));
    t.push(named("uni2589", 0x2589, vec![rect(0.0, 0.0, 0.875, 1.0)]));
    t.push(named("uni258A", 0x258A, vec![rect(0.0, 0.0, 0.75, 1.0)]));
    t.push(named("uni258B", 0x258B, vec![rect(0.0, 0.0, 0.625, 1.0)]));
    t.push(named("lfblock", 0x258C, vec![rect(0.0, 0.0, 0.5, 1.0)]));
    t.push(named("uni258D", 0x258D, vec![rect(0.0, 0.0, 0.375, 1.0)]));
    t.push(named("uni258E", 0x258E, vec![rect(0.0, 0.0, 0.25, 1.0)]));
    t.push(named("uni258F", 0x258F, vec![rect(0.0, 0.0, 0.125, 1.0)]));
    t.push(named("rtblock", 0x2590, vec![rect(0.5, 0.0, 1.0, 1.0)]));
    t.push(named("ltshade", 0x2591, vec![ltshade(m.pixel_height, m.pixel_width)]));
    t.push(named("shade", 0x2592, vec![shade(m.pixel_height, m.pixel_width, false)]));
    t.push(named("dkshade", 0x2593, vec![dkshade(m.pixel_height, m.pixel_width)]));
    t.push(named("uni2594", 0x2594, vec![rect(0.0, 0.0, 1.0, 0.125)]));
    t.push(named("uni2595", 0x2595, vec![rect(0.875, 0.0, 1.0, 1.0)]));
    t.push(named("uni2596", 0x2596, vec![rect(0.0, 0.5, 0.5, 1.0)]));
    t.push(named("uni2597", 0x2597, vec![rect(0.5, 0.5, 1.0, 1.0)]));
    t.push(named("uni2598", 0x2598, vec![rect(0.0, 0.0, 0.5, 0.5)]));
    t.push(named("uni2599", 0x2599, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.5, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("uni259A", 0x259A, vec![rect(0.0, 0.0, 0.5, 0.5), rect(0.5, 0.5, 1.0, 1.0)]));
    t.push(named("uni259B", 0x259B, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.5, 0.5), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("uni259C", 0x259C, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (0.5, 0.5), (0.0, 0.5)])]));
    t.push(named("uni259D", 0x259D, vec![rect(0.5, 0.0, 1.0, 0.5)]));
    t.push(named("uni259E", 0x259E, vec![rect(0.5, 0.0, 1.0, 0.5), rect(0.0, 0.5, 0.5, 1.0)]));
    t.push(named("uni259F", 0x259F, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.5), (0.5, 0.5)])]));
    // Geometric Shapes block.
    t.push(named("uni25E2", 0x25E2, vec![poly(&[(0.0, 1.0), (1.0, 0.0), (1.0, 1.0)])]));
    t.push(named("uni25E3", 0x25E3, vec![poly(&[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("uni25E4", 0x25E4, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])]));
    t.push(named("uni25E5", 0x25E5, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])]));
    t.push(named("uni27CA", 0x27CA, vec![mixed(lines![[(0.5, 0.0), (0.5, 1.0)]], lines![[(0.25, 0.5), (0.75, 0.5)]])]));
    // Symbols for Legacy Computing block.
    t.push(named("u1FB00", 0x1FB00, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0)]));
    t.push(named("u1FB01", 0x1FB01, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0)]));
    t.push(named("u1FB02", 0x1FB02, vec![rect(0.0, 0.0, 1.0, 1.0 / 3.0)]));
    t.push(named("u1FB03", 0x1FB03, vec![rect(0.0, 1.0 / 3.0, 0.5, 2.0 / 3.0)]));
    t.push(named("u1FB04", 0x1FB04, vec![rect(0.0, 0.0, 0.5, 2.0 / 3.0)]));
    t.push(named("u1FB05", 0x1FB05, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0), rect(0.0, 1.0 / 3.0, 0.5, 2.0 / 3.0)]));
    t.push(named("u1FB06", 0x1FB06, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0), (0.5, 1.0 / 3.0), (0.5, 2.0 / 3.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB07", 0x1FB07, vec![rect(0.5, 1.0 / 3.0, 1.0, 2.0 / 3.0)]));
    t.push(named("u1FB08", 0x1FB08, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0), rect(0.5, 1.0 / 3.0, 1.0, 2.0 / 3.0)]));
    t.push(named("u1FB09", 0x1FB09, vec![rect(0.5, 0.0, 1.0, 2.0 / 3.0)]));
    t.push(named("u1FB0A", 0x1FB0A, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.5, 2.0 / 3.0), (0.5, 1.0 / 3.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB0B", 0x1FB0B, vec![rect(0.0, 1.0 / 3.0, 1.0, 2.0 / 3.0)]));
    t.push(named("u1FB0C", 0x1FB0C, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 2.0 / 3.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB0D", 0x1FB0D, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.0, 2.0 / 3.0), (0.0, 1.0 / 3.0), (0.5, 1.0 / 3.0)])]));
    t.push(named("u1FB0E", 0x1FB0E, vec![rect(0.0, 0.0, 1.0, 2.0 / 3.0)]));
    t.push(named("u1FB0F", 0x1FB0F, vec![rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB10", 0x1FB10, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0), rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB11", 0x1FB11, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0), rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB12", 0x1FB12, vec![rect(0.0, 0.0, 1.0, 1.0 / 3.0), rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB13", 0x1FB13, vec![rect(0.0, 1.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB14", 0x1FB14, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0), rect(0.0, 1.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB15", 0x1FB15, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0), (0.5, 1.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB16", 0x1FB16, vec![rect(0.5, 1.0 / 3.0, 1.0, 2.0 / 3.0), rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB17", 0x1FB17, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0), rect(0.5, 1.0 / 3.0, 1.0, 2.0 / 3.0), rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB18", 0x1FB18, vec![rect(0.5, 0.0, 1.0, 2.0 / 3.0), rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB19", 0x1FB19, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.5, 2.0 / 3.0), (0.5, 1.0 / 3.0), (0.0, 1.0 / 3.0)]), rect(0.0, 2.0 / 3.0, 0.5, 1.0)]));
    t.push(named("u1FB1A", 0x1FB1A, vec![poly(&[(0.0, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 2.0 / 3.0), (0.5, 2.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB1B", 0x1FB1B, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 2.0 / 3.0), (0.5, 2.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB1C", 0x1FB1C, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.5, 2.0 / 3.0), (0.5, 1.0), (0.0, 1.0), (0.0, 1.0 / 3.0), (0.5, 1.0 / 3.0)])]));
    t.push(named("u1FB1D", 0x1FB1D, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.5, 2.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB1E", 0x1FB1E, vec![rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB1F", 0x1FB1F, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0), rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB20", 0x1FB20, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0), rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB21", 0x1FB21, vec![rect(0.0, 0.0, 1.0, 1.0 / 3.0), rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB22", 0x1FB22, vec![rect(0.0, 1.0 / 3.0, 0.5, 2.0 / 3.0), rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB23", 0x1FB23, vec![rect(0.0, 0.0, 0.5, 2.0 / 3.0), rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB24", 0x1FB24, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0), rect(0.0, 1.0 / 3.0, 0.5, 2.0 / 3.0), rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB25", 0x1FB25, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0), (0.5, 1.0 / 3.0), (0.5, 2.0 / 3.0), (0.0, 2.0 / 3.0)]), rect(0.5, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB26", 0x1FB26, vec![rect(0.5, 1.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB27", 0x1FB27, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0), rect(0.5, 1.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB28", 0x1FB28, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (0.5, 1.0 / 3.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB29", 0x1FB29, vec![poly(&[(0.0, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.5, 1.0), (0.5, 2.0 / 3.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB2A", 0x1FB2A, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.5, 1.0), (0.5, 2.0 / 3.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB2B", 0x1FB2B, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (0.5, 2.0 / 3.0), (0.0, 2.0 / 3.0), (0.0, 1.0 / 3.0), (0.5, 1.0 / 3.0)])]));
    t.push(named("u1FB2C", 0x1FB2C, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (0.5, 2.0 / 3.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB2D", 0x1FB2D, vec![rect(0.0, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB2E", 0x1FB2E, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0), rect(0.0, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB2F", 0x1FB2F, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0), rect(0.0, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB30", 0x1FB30, vec![rect(0.0, 0.0, 1.0, 1.0 / 3.0), rect(0.0, 2.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB31", 0x1FB31, vec![poly(&[(0.0, 1.0 / 3.0), (0.5, 1.0 / 3.0), (0.5, 2.0 / 3.0), (1.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB32", 0x1FB32, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.5, 2.0 / 3.0), (1.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB33", 0x1FB33, vec![rect(0.5, 0.0, 1.0, 1.0 / 3.0), poly(&[(0.0, 1.0 / 3.0), (0.5, 1.0 / 3.0), (0.5, 2.0 / 3.0), (1.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB34", 0x1FB34, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0), (0.5, 1.0 / 3.0), (0.5, 2.0 / 3.0), (1.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB35", 0x1FB35, vec![poly(&[(0.5, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.0, 1.0), (0.0, 2.0 / 3.0), (0.5, 2.0 / 3.0)])]));
    t.push(named("u1FB36", 0x1FB36, vec![rect(0.0, 0.0, 0.5, 1.0 / 3.0), poly(&[(0.5, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.0, 1.0), (0.0, 2.0 / 3.0), (0.5, 2.0 / 3.0)])]));
    t.push(named("u1FB37", 0x1FB37, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 2.0 / 3.0), (0.5, 2.0 / 3.0)])]));
    t.push(named("u1FB38", 0x1FB38, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 2.0 / 3.0), (0.5, 2.0 / 3.0), (0.5, 1.0 / 3.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB39", 0x1FB39, vec![rect(0.0, 1.0 / 3.0, 1.0, 1.0)]));
    t.push(named("u1FB3A", 0x1FB3A, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB3B", 0x1FB3B, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 1.0 / 3.0), (0.5, 1.0 / 3.0)])]));
    t.push(named("u1FB3C", 0x1FB3C, vec![poly(&[(0.0, 2.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB3D", 0x1FB3D, vec![poly(&[(0.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB3E", 0x1FB3E, vec![poly(&[(0.0, 1.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB3F", 0x1FB3F, vec![poly(&[(0.0, 1.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB40", 0x1FB40, vec![poly(&[(0.0, 0.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB41", 0x1FB41, vec![poly(&[(0.0, 1.0 / 3.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB42", 0x1FB42, vec![poly(&[(0.0, 1.0 / 3.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB43", 0x1FB43, vec![poly(&[(0.0, 2.0 / 3.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB44", 0x1FB44, vec![poly(&[(0.0, 2.0 / 3.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB45", 0x1FB45, vec![poly(&[(0.0, 1.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0)])]));
    t.push(named("u1FB46", 0x1FB46, vec![poly(&[(0.0, 2.0 / 3.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB47", 0x1FB47, vec![poly(&[(0.5, 1.0), (1.0, 2.0 / 3.0), (1.0, 1.0)])]));
    t.push(named("u1FB48", 0x1FB48, vec![poly(&[(0.0, 1.0), (1.0, 2.0 / 3.0), (1.0, 1.0)])]));
    t.push(named("u1FB49", 0x1FB49, vec![poly(&[(0.5, 1.0), (1.0, 1.0 / 3.0), (1.0, 1.0)])]));
    t.push(named("u1FB4A", 0x1FB4A, vec![poly(&[(0.0, 1.0), (1.0, 1.0 / 3.0), (1.0, 1.0)])]));
    t.push(named("u1FB4B", 0x1FB4B, vec![poly(&[(0.5, 1.0), (1.0, 0.0), (1.0, 1.0)])]));
    t.push(named("u1FB4C", 0x1FB4C, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB4D", 0x1FB4D, vec![poly(&[(0.0, 0.0), (1.0, 1.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB4E", 0x1FB4E, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (1.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB4F", 0x1FB4F, vec![poly(&[(0.0, 0.0), (1.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB50", 0x1FB50, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB51", 0x1FB51, vec![poly(&[(0.0, 1.0 / 3.0), (1.0, 2.0 / 3.0), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB52", 0x1FB52, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB53", 0x1FB53, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB54", 0x1FB54, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB55", 0x1FB55, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB56", 0x1FB56, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0)])]));
    t.push(named("u1FB57", 0x1FB57, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB58", 0x1FB58, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB59", 0x1FB59, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB5A", 0x1FB5A, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB5B", 0x1FB5B, vec![poly(&[(0.0, 0.0), (0.5, 0.0), (0.0, 1.0)])]));
    t.push(named("u1FB5C", 0x1FB5C, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0), (0.0, 2.0 / 3.0)])]));
    t.push(named("u1FB5D", 0x1FB5D, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB5E", 0x1FB5E, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.0, 1.0)])]));
    t.push(named("u1FB5F", 0x1FB5F, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB60", 0x1FB60, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0), (0.0, 1.0)])]));
    t.push(named("u1FB61", 0x1FB61, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB62", 0x1FB62, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0)])]));
    t.push(named("u1FB63", 0x1FB63, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 / 3.0)])]));
    t.push(named("u1FB64", 0x1FB64, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0)])]));
    t.push(named("u1FB65", 0x1FB65, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0)])]));
    t.push(named("u1FB66", 0x1FB66, vec![poly(&[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0)])]));
    t.push(named("u1FB67", 0x1FB67, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0 / 3.0), (0.0, 1.0 / 3.0)])]));
    t.push(named("u1FB68", 0x1FB68, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)])]));
    t.push(named("u1FB69", 0x1FB69, vec![poly(&[(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (0.5, 0.5)])]));
    t.push(named("u1FB6A", 0x1FB6A, vec![poly(&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (0.5, 0.5)])]));
    t.push(named("u1FB6B", 0x1FB6B, vec![poly(&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 0.5)])]));
    t.push(named("u1FB6C", 0x1FB6C, vec![poly(&[(0.0, 1.0), (0.0, 0.0), (0.5, 0.5)])]));
    t.push(named("u1FB6D", 0x1FB6D, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (0.5, 0.5)])]));
    t.push(named("u1FB6E", 0x1FB6E, vec![poly(&[(1.0, 0.0), (1.0, 1.0), (0.5, 0.5)])]));
    t.push(named("u1FB6F", 0x1FB6F, vec![poly(&[(1.0, 1.0), (0.0, 1.0), (0.5, 0.5)])]));
    t.push(named("u1FB70", 0x1FB70, vec![rect(0.125, 0.0, 0.25, 1.0)]));
    t.push(named("u1FB71", 0x1FB71, vec![rect(0.25, 0.0, 0.375, 1.0)]));
    t.push(named("u1FB72", 0x1FB72, vec![rect(0.375, 0.0, 0.5, 1.0)]));
    t.push(named("u1FB73", 0x1FB73, vec![rect(0.5, 0.0, 0.625, 1.0)]));
    t.push(named("u1FB74", 0x1FB74, vec![rect(0.625, 0.0, 0.75, 1.0)]));
    t.push(named("u1FB75", 0x1FB75, vec![rect(0.75, 0.0, 0.875, 1.0)]));
    t.push(named("u1FB76", 0x1FB76, vec![rect(0.0, 0.125, 1.0, 0.25)]));
    t.push(named("u1FB77", 0x1FB77, vec![rect(0.0, 0.25, 1.0, 0.375)]));
    t.push(named("u1FB78", 0x1FB78, vec![rect(0.0, 0.375, 1.0, 0.5)]));
    t.push(named("u1FB79", 0x1FB79, vec![rect(0.0, 0.5, 1.0, 0.625)]));
    t.push(named("u1FB7A", 0x1FB7A, vec![rect(0.0, 0.625, 1.0, 0.75)]));
    t.push(named("u1FB7B", 0x1FB7B, vec![rect(0.0, 0.75, 1.0, 0.875)]));
    t.push(named("u1FB7C", 0x1FB7C, vec![poly(&[(0.0, 0.0), (0.125, 0.0), (0.125, 0.875), (1.0, 0.875), (1.0, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB7D", 0x1FB7D, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.125), (0.125, 0.125), (0.125, 1.0), (0.0, 1.0)])]));
    t.push(named("u1FB7E", 0x1FB7E, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.875, 1.0), (0.875, 0.125), (0.0, 0.125)])]));
    t.push(named("u1FB7F", 0x1FB7F, vec![poly(&[(0.875, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.875), (0.875, 0.875)])]));
    t.push(named("u1FB80", 0x1FB80, vec![rect(0.0, 0.0, 1.0, 0.125), rect(0.0, 0.875, 1.0, 1.0)]));
    t.push(named("u1FB81", 0x1FB81, vec![rect(0.0, 0.0, 1.0, 0.125), rect(0.0, 0.25, 1.0, 0.375), rect(0.0, 0.5, 1.0, 0.625), rect(0.0, 0.875, 1.0, 1.0)]));
    t.push(named("u1FB82", 0x1FB82, vec![rect(0.0, 0.0, 1.0, 0.25)]));
    t.push(named("u1FB83", 0x1FB83, vec![rect(0.0, 0.0, 1.0, 0.375)]));
    t.push(named("u1FB84", 0x1FB84, vec![rect(0.0, 0.0, 1.0, 0.625)]));
    t.push(named("u1FB85", 0x1FB85, vec![rect(0.0, 0.0, 1.0, 0.75)]));
    t.push(named("u1FB86", 0x1FB86, vec![rect(0.0, 0.0, 1.0, 0.875)]));
    t.push(named("u1FB87", 0x1FB87, vec![rect(0.75, 0.0, 1.0, 1.0)]));
    t.push(named("u1FB88", 0x1FB88, vec![rect(0.625, 0.0, 1.0, 1.0)]));
    t.push(named("u1FB89", 0x1FB89, vec![rect(0.375, 0.0, 1.0, 1.0)]));
    t.push(named("u1FB8A", 0x1FB8A, vec![rect(0.25, 0.0, 1.0, 1.0)]));
    t.push(named("u1FB8B", 0x1FB8B, vec![rect(0.125, 0.0, 1.0, 1.0)]));
    t.push(named("u1FB8C", 0x1FB8C, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (0.0, 1.0)], false)]));
    t.push(named("u1FB8D", 0x1FB8D, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0)], false)]));
    t.push(named("u1FB8E", 0x1FB8E, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)], false)]));
    t.push(named("u1FB8F", 0x1FB8F, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)], false)]));
    t.push(named("u1FB90", 0x1FB90, vec![shade(m.pixel_height, m.pixel_width, true)]));
    t.push(named("u1FB91", 0x1FB91, vec![shadepart(m.pixel_height, m.pixel_width, true, &[(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)], true)]));
    t.push(named("u1FB92", 0x1FB92, vec![shadepart(m.pixel_height, m.pixel_width, true, &[(0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)], true)]));
    t.push(named("u1FB93", 0x1FB93, vec![shadepart(m.pixel_height, m.pixel_width, true, &[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (0.0, 1.0)], true)]));
    t.push(named("u1FB94", 0x1FB94, vec![shadepart(m.pixel_height, m.pixel_width, true, &[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0)], true)]));
    t.push(named("u1FB95", 0x1FB95, vec![shade(4, 4, false)]));
    t.push(named("u1FB96", 0x1FB96, vec![shade(4, 4, true)]));
    t.push(named("u1FB97", 0x1FB97, vec![rect(0.0, 0.25, 1.0, 0.5), rect(0.0, 0.75, 1.0, 1.0)]));
    t.push(named("u1FB98", 0x1FB98, vec![diagfill(-m.diagonal_fill_angle)]));
    t.push(named("u1FB99", 0x1FB99, vec![diagfill(m.diagonal_fill_angle)]));
    t.push(named("u1FB9A", 0x1FB9A, vec![poly(&[(0.0, 0.0), (1.0, 0.0), (0.5, 0.5)]), poly(&[(1.0, 1.0), (0.0, 1.0), (0.5, 0.5)])]));
    t.push(named("u1FB9B", 0x1FB9B, vec![poly(&[(0.0, 1.0), (0.0, 0.0), (0.5, 0.5)]), poly(&[(1.0, 0.0), (1.0, 1.0), (0.5, 0.5)])]));
    t.push(named("u1FB9C", 0x1FB9C, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], false)]));
    t.push(named("u1FB9D", 0x1FB9D, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], false)]));
    t.push(named("u1FB9E", 0x1FB9E, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.0, 1.0), (1.0, 0.0), (1.0, 1.0)], false)]));
    t.push(named("u1FB9F", 0x1FB9F, vec![shadepart(m.pixel_height, m.pixel_width, false, &[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0)], false)]));
    t.push(named("u1FBA0", 0x1FBA0, vec![diag(lines![[(0.0, 0.5), (0.5, 0.0)]])]));
    t.push(named("u1FBA1", 0x1FBA1, vec![diag(lines![[(0.5, 0.0), (1.0, 0.5)]])]));
    t.push(named("u1FBA2", 0x1FBA2, vec![diag(lines![[(0.0, 0.5), (0.5, 1.0)]])]));
    t.push(named("u1FBA3", 0x1FBA3, vec![diag(lines![[(0.5, 1.0), (1.0, 0.5)]])]));
    t.push(named("u1FBA4", 0x1FBA4, vec![diag(lines![[(0.5, 0.0), (0.0, 0.5), (0.5, 1.0)]])]));
    t.push(named("u1FBA5", 0x1FBA5, vec![diag(lines![[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0)]])]));
    t.push(named("u1FBA6", 0x1FBA6, vec![diag(lines![[(0.0, 0.5), (0.5, 1.0), (1.0, 0.5)]])]));
    t.push(named("u1FBA7", 0x1FBA7, vec![diag(lines![[(0.0, 0.5), (0.5, 0.0), (1.0, 0.5)]])]));
    t.push(named("u1FBA8", 0x1FBA8, vec![diag(lines![[(0.0, 0.5), (0.5, 0.0)], [(0.5, 1.0), (1.0, 0.5)]])]));
    t.push(named("u1FBA9", 0x1FBA9, vec![diag(lines![[(0.5, 0.0), (1.0, 0.5)], [(0.0, 0.5), (0.5, 1.0)]])]));
    t.push(named("u1FBAA", 0x1FBAA, vec![diag(lines![[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)]])]));
    t.push(named("u1FBAB", 0x1FBAB, vec![diag(lines![[(0.5, 0.0), (0.0, 0.5), (0.5, 1.0), (1.0, 0.5)]])]));
    t.push(named("u1FBAC", 0x1FBAC, vec![diag(lines![[(0.0, 0.5), (0.5, 0.0), (1.0, 0.5), (0.5, 1.0)]])]));
    t.push(named("u1FBAD", 0x1FBAD, vec![diag(lines![[(1.0, 0.5), (0.5, 0.0), (0.0, 0.5), (0.5, 1.0)]])]));
    t.push(named("u1FBAE", 0x1FBAE, vec![diag(lines![[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5), (0.5, 0.0)]])]));
    t.push(named("u1FBAF", 0x1FBAF, vec![mixed(lines![[(0.0, 0.5), (1.0, 0.5)]], lines![[(0.5, 0.25), (0.5, 0.75)]])]));
    t.push(named("u1FBCE", 0x1FBCE, vec![rect(0.0, 0.0, 2.0 / 3.0, 1.0)]));
    t.push(named("u1FBCF", 0x1FBCF, vec![rect(0.0, 0.0, 1.0 / 3.0, 1.0)]));
    t.push(named("u1FBD0", 0x1FBD0, vec![diag(lines![[(0.0, 1.0), (1.0, 0.5)]])]));
    t.push(named("u1FBD1", 0x1FBD1, vec![diag(lines![[(0.0, 0.5), (1.0, 0.0)]])]));
    t.push(named("u1FBD2", 0x1FBD2, vec![diag(lines![[(0.0, 0.0), (1.0, 0.5)]])]));
    t.push(named("u1FBD3", 0x1FBD3, vec![diag(lines![[(0.0, 0.5), (1.0, 1.0)]])]));
    t.push(named("u1FBD4", 0x1FBD4, vec![diag(lines![[(0.0, 0.0), (0.5, 1.0)]])]));
    t.push(named("u1FBD5", 0x1FBD5, vec![diag(lines![[(0.5, 0.0), (1.0, 1.0)]])]));
    t.push(named("u1FBD6", 0x1FBD6, vec![diag(lines![[(1.0, 0.0), (0.5, 1.0)]])]));
    t.push(named("u1FBD7", 0x1FBD7, vec![diag(lines![[(0.5, 0.0), (0.0, 1.0)]])]));
    t.push(named("u1FBD8", 0x1FBD8, vec![diag(lines![[(0.0, 0.0), (0.5, 0.5), (1.0, 0.0)]])]));
    t.push(named("u1FBD9", 0x1FBD9, vec![diag(lines![[(1.0, 0.0), (0.5, 0.5), (1.0, 1.0)]])]));
    t.push(named("u1FBDA", 0x1FBDA, vec![diag(lines![[(0.0, 1.0), (0.5, 0.5), (1.0, 1.0)]])]));
    t.push(named("u1FBDB", 0x1FBDB, vec![diag(lines![[(0.0, 0.0), (0.5, 0.5), (0.0, 1.0)]])]));
    t.push(named("u1FBDC", 0x1FBDC, vec![diag(lines![[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]])]));
    t.push(named("u1FBDD", 0x1FBDD, vec![diag(lines![[(1.0, 0.0), (0.0, 0.5), (1.0, 1.0)]])]));
    t.push(named("u1FBDE", 0x1FBDE, vec![diag(lines![[(0.0, 1.0), (0.5, 0.0), (1.0, 1.0)]])]));
    t.push(named("u1FBDF", 0x1FBDF, vec![diag(lines![[(0.0, 0.0), (1.0, 0.5), (0.0, 1.0)]])]));
    t.push(named("u1FBE0", 0x1FBE0, vec![ellipse(0.5, 0.0, 0.5, 0.5, 0.5 - (xe * 2.0), 0.5 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBE1", 0x1FBE1, vec![ellipse(1.0, 0.5, 0.5, 0.5, 0.5 - (xe * 2.0), 0.5 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBE2", 0x1FBE2, vec![ellipse(0.5, 1.0, 0.5, 0.5, 0.5 - (xe * 2.0), 0.5 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBE3", 0x1FBE3, vec![ellipse(0.0, 0.5, 0.5, 0.5, 0.5 - (xe * 2.0), 0.5 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBE4", 0x1FBE4, vec![rect(0.25, 0.0, 0.75, 0.5)]));
    t.push(named("u1FBE5", 0x1FBE5, vec![rect(0.25, 0.5, 0.75, 1.0)]));
    t.push(named("u1FBE6", 0x1FBE6, vec![rect(0.0, 0.25, 0.5, 0.75)]));
    t.push(named("u1FBE7", 0x1FBE7, vec![rect(0.5, 0.25, 1.0, 0.75)]));
    t.push(named("u1FBE8", 0x1FBE8, vec![ellipse(0.5, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBE9", 0x1FBE9, vec![ellipse(1.0, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBEA", 0x1FBEA, vec![ellipse(0.5, 1.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBEB", 0x1FBEB, vec![ellipse(0.0, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBEC", 0x1FBEC, vec![ellipse(1.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBED", 0x1FBED, vec![ellipse(0.0, 1.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBEE", 0x1FBEE, vec![ellipse(1.0, 1.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1FBEF", 0x1FBEF, vec![ellipse(0.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0)]));
    // Symbols for Legacy Computing Supplement block, Sharp MZ section.
    t.push(named("u1CC1B", 0x1CC1B, vec![light(lines![[(0.0, 0.5), (1.0 - xe, 0.5), (1.0 - xe, 0.0)]])]));
    t.push(named("u1CC1C", 0x1CC1C, vec![light(lines![[(0.0, 0.5), (1.0 - xe, 0.5), (1.0 - xe, 1.0)]])]));
    t.push(named("u1CC1D", 0x1CC1D, vec![light(lines![[(xe, 0.5 + ye), (xe, ye), (1.0, ye)]])]));
    t.push(named("u1CC1E", 0x1CC1E, vec![light(lines![[(xe, 0.5 - ye), (xe, 1.0 - ye), (1.0, 1.0 - ye)]])]));
    t.push(named("u1CC1F", 0x1CC1F, vec![diag(lines![[(1.0 - xgd, 0.0), (0.0, 1.0 - ygd)], [(1.0, ygd), (xgd, 1.0)]])]));
    t.push(named("u1CC20", 0x1CC20, vec![diag(lines![[(0.0, ygd), (1.0 - xgd, 1.0)], [(xgd, 0.0), (1.0, 1.0 - ygd)]])]));
    for n in 1..16 {
        t.push(coded(0x1CC20 + n, vec![sepmap(2, 2, n)]));
    }
    t.push(named("u1CC30", 0x1CC30, vec![ellipse(2.0, 2.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC31", 0x1CC31, vec![ellipse(1.0, 2.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC32", 0x1CC32, vec![ellipse(0.0, 2.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC33", 0x1CC33, vec![ellipse(-1.0, 2.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC34", 0x1CC34, vec![ellipse(2.0, 1.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC35", 0x1CC35, vec![ellipse(1.0, 1.0, 1.0, 1.0, 1.0 - (xe * 2.0), 1.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC36", 0x1CC36, vec![ellipse(0.0, 1.0, 1.0, 1.0, 1.0 - (xe * 2.0), 1.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC37", 0x1CC37, vec![ellipse(-1.0, 1.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC38", 0x1CC38, vec![ellipse(2.0, 0.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC39", 0x1CC39, vec![ellipse(1.0, 0.0, 1.0, 1.0, 1.0 - (xe * 2.0), 1.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC3A", 0x1CC3A, vec![ellipse(0.0, 0.0, 1.0, 1.0, 1.0 - (xe * 2.0), 1.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC3B", 0x1CC3B, vec![ellipse(-1.0, 0.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC3C", 0x1CC3C, vec![ellipse(2.0, -1.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC3D", 0x1CC3D, vec![ellipse(1.0, -1.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC3E", 0x1CC3E, vec![ellipse(0.0, -1.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    t.push(named("u1CC3F", 0x1CC3F, vec![ellipse(-1.0, -1.0, 2.0, 2.0, 2.0 - (xe * 2.0), 2.0 - (ye * 2.0), 0.0, 0.0, 1.0, 1.0)]));
    // Symbols for Legacy Computing Supplement block, Kaypro/Aquarius section.
    let kaypro = (0..0x100).filter(|n| !KAYPRO_ENCODED_ELSEWHERE.contains(n));
    for (i, n) in (0u32..).zip(kaypro) {
        t.push(coded(0x1CD00 + i, vec![bitmap(4, 2, n)]));
    }
    t.push(named("u1CDF4", 0x1CDF4, vec![rect(0.25, 0.0, 0.75, 1.0)]));
    // Symbols for Legacy Computing Supplement block, OSI/HP/Teletext/Robotron section.
    t.push(named("u1CE0D", 0x1CE0D, vec![light(lines![[(0.0, 0.5), (1.0 / 3.0, 0.5)], [(2.0 / 3.0, 0.5), (1.0, 0.5)]])]));
    t.push(named("u1CE0E", 0x1CE0E, vec![light(lines![[(1.0 / 3.0, 0.5), (2.0 / 3.0, 0.5)]])]));
    t.push(named("u1CE0F", 0x1CE0F, vec![light(lines![[(0.0, 0.5), (1.0 - xe, 0.5), (1.0 - xe, 0.5 + ty)]])]));
    t.push(named("u1CE10", 0x1CE10, vec![light(lines![[(0.0, 0.5), (1.0, 0.5)], [(2.0 / 3.0 - xe, 0.5), (2.0 / 3.0 - xe, 0.5 + ty)]])]));
    t.push(named("u1CE11", 0x1CE11, vec![light(lines![[(0.0, 0.5), (1.0 - xe, 0.5), (1.0 - xe, 0.5 + ty)], [(1.0 / 3.0 - xe, 0.5), (1.0 / 3.0 - xe, 0.5 + ty)]])]));
    t.push(named("u1CE12", 0x1CE12, vec![light(lines![[(0.0, 0.5), (1.0 - xe, 0.5), (1.0 - xe, 0.5 + ty)], [(2.0 / 3.0 - xe, 0.5), (2.0 / 3.0 - xe, 0.5 + ty)], [(1.0 / 3.0 - xe, 0.5), (1.0 / 3.0 - xe, 0.5 + ty)]])]));
    t.push(named("u1CE13", 0x1CE13, vec![light(lines![[(0.5, 0.0), (0.5, 1.0)], [(0.5 - tx, 1.0 / 3.0 + ye), (0.5, 1.0 / 3.0 + ye)]])]));
    t.push(named("u1CE14", 0x1CE14, vec![light(lines![[(0.5 - tx, ye), (0.5, ye), (0.5, 1.0)], [(0.5 - tx, 2.0 / 3.0 + ye), (0.5, 2.0 / 3.0 + ye)]])]));
    t.push(named("u1CE15", 0x1CE15, vec![light(lines![[(0.5 - tx, ye), (0.5, ye), (0.5, 1.0)], [(0.5 - tx, 1.0 / 3.0 + ye), (0.5, 1.0 / 3.0 + ye)], [(0.5 - tx, 2.0 / 3.0 + ye), (0.5, 2.0 / 3.0 + ye)]])]));
    t.push(named("u1CE16", 0x1CE16, vec![light(lines![[(0.5, 1.0), (0.5, ye), (1.0, ye)]])]));
    t.push(named("u1CE17", 0x1CE17, vec![light(lines![[(0.5, 0.0), (0.5, 1.0 - ye), (1.0, 1.0 - ye)]])]));
    t.push(named("u1CE18", 0x1CE18, vec![light(lines![[(0.5, 1.0), (0.5, ye), (0.0, ye)]])]));
    t.push(named("u1CE19", 0x1CE19, vec![light(lines![[(0.5, 0.0), (0.5, 1.0 - ye), (0.0, 1.0 - ye)]])]));
    t.push(named("u1CE1A", 0x1CE1A, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.8), (1.0, 0.4), (1.0, 0.6), (2.0 / 3.0, 0.8), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE1B", 0x1CE1B, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.4), (1.0, 0.4), (1.0, 0.6), (2.0 / 3.0, 0.6), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE1C", 0x1CE1C, vec![rect(1.0 / 3.0, 0.4, 2.0 / 3.0, 1.0)]));
    t.push(named("u1CE1D", 0x1CE1D, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.4), (2.0 / 3.0, 0.4), (1.0, 0.6), (1.0, 0.8), (2.0 / 3.0, 0.6), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE1E", 0x1CE1E, vec![rect(1.0 / 3.0, 0.4, 1.0, 0.6)]));
    t.push(named("u1CE1F", 0x1CE1F, vec![rect(0.0, 0.4, 1.0, 0.6)]));
    t.push(named("u1CE20", 0x1CE20, vec![poly(&[(0.0, 0.6), (0.0, 0.4), (1.0, 0.4), (1.0, 0.6), (2.0 / 3.0, 0.6), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6)])]));
    t.push(named("u1CE21", 0x1CE21, vec![poly(&[(0.0, 0.6), (0.5, 0.9), (1.0, 0.6), (1.0, 0.8), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (0.0, 0.8)])]));
    t.push(named("u1CE22", 0x1CE22, vec![poly(&[(0.0, 0.6), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (0.0, 0.8)])]));
    t.push(named("u1CE23", 0x1CE23, vec![rect(1.0 / 3.0, 0.8, 2.0 / 3.0, 1.0)]));
    t.push(named("u1CE24", 0x1CE24, vec![poly(&[(0.0, 0.6), (0.0, 0.4), (2.0 / 3.0, 0.8), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (1.0 / 3.0, 0.8)])]));
    t.push(named("u1CE25", 0x1CE25, vec![rect(0.0, 0.4, 2.0 / 3.0, 0.6)]));
    t.push(named("u1CE26", 0x1CE26, vec![poly(&[(0.0, 0.8), (0.0, 0.6), (1.0 / 3.0, 0.4), (2.0 / 3.0, 0.4), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6)])]));
    t.push(named("u1CE27", 0x1CE27, vec![poly(&[(0.0, 0.6), (0.0, 0.4), (2.0 / 3.0, 0.4), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6)])]));
    t.push(named("u1CE28", 0x1CE28, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.4), (1.0, 0.4), (1.0, 0.6), (2.0 / 3.0, 0.6), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE29", 0x1CE29, vec![rect(1.0 / 3.0, 0.0, 2.0 / 3.0, 1.0)]));
    t.push(named("u1CE2A", 0x1CE2A, vec![poly(&[(1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (1.0, 0.2), (1.0, 0.4)]), poly(&[(1.0 / 3.0, 1.0), (1.0, 0.6), (1.0, 0.8), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE2B", 0x1CE2B, vec![poly(&[(1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (1.0, 0.2), (1.0, 0.4)])]));
    t.push(named("u1CE2C", 0x1CE2C, vec![poly(&[(1.0 / 3.0, 1.0), (1.0, 0.6), (1.0, 0.8), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE2D", 0x1CE2D, vec![rect(1.0 / 3.0, 0.0, 2.0 / 3.0, 0.2)]));
    t.push(named("u1CE2E", 0x1CE2E, vec![poly(&[(1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.2), (1.0, 0.4), (1.0, 0.6), (2.0 / 3.0, 0.8), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (1.0 / 3.0, 0.8), (5.0 / 6.0, 0.5), (1.0 / 3.0, 0.2)])]));
    t.push(named("u1CE2F", 0x1CE2F, vec![poly(&[(0.0, 0.4), (0.5, 0.4), (1.0, 0.2), (1.0, 0.4), (0.75, 0.5), (1.0, 0.6), (1.0, 0.8), (0.5, 0.6), (0.0, 0.6)])]));
    t.push(named("u1CE30", 0x1CE30, vec![poly(&[(1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (0.5, 0.1)])]));
    t.push(named("u1CE31", 0x1CE31, vec![poly(&[(2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (0.5, 0.9)])]));
    t.push(named("u1CE32", 0x1CE32, vec![poly(&[(0.0, 0.2), (0.5, 0.4), (1.0, 0.2), (1.0, 0.4), (0.75, 0.5), (1.0, 0.6), (1.0, 0.8), (0.5, 0.6), (0.0, 0.8), (0.0, 0.6), (0.25, 0.5), (0.0, 0.4)])]));
    t.push(named("u1CE33", 0x1CE33, vec![poly(&[(0.0, 0.2), (0.5, 0.5), (1.0, 0.2), (1.0, 0.4), (2.0 / 3.0, 0.6), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6), (0.0, 0.4)])]));
    t.push(named("u1CE34", 0x1CE34, vec![poly(&[(0.0, 0.4), (0.5, 0.4), (1.0, 0.2), (1.0, 0.6), (0.5, 0.6), (0.0, 0.8)])]));
    t.push(named("u1CE35", 0x1CE35, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6), (1.0, 0.2), (1.0, 0.4), (2.0 / 3.0, 0.6), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE36", 0x1CE36, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6), (0.0, 0.6), (0.0, 0.4), (1.0 / 3.0, 0.4), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE37", 0x1CE37, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.8), (0.0, 0.6), (0.0, 0.4), (1.0 / 3.0, 0.2), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.2), (1.0 / 6.0, 0.5), (2.0 / 3.0, 0.8), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE38", 0x1CE38, vec![poly(&[(0.0, 0.2), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (0.0, 0.4)]), poly(&[(0.0, 0.6), (2.0 / 3.0, 1.0), (1.0 / 3.0, 1.0), (0.0, 0.8)])]));
    t.push(named("u1CE39", 0x1CE39, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6), (0.0, 0.4), (0.0, 0.2), (1.0 / 3.0, 0.4), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE3A", 0x1CE3A, vec![poly(&[(1.0 / 3.0, 1.0), (1.0 / 3.0, 0.6), (0.0, 0.6), (0.0, 0.4), (1.0 / 3.0, 0.4), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.4), (1.0, 0.4), (1.0, 0.6), (2.0 / 3.0, 0.6), (2.0 / 3.0, 1.0)])]));
    t.push(named("u1CE3B", 0x1CE3B, vec![poly(&[(0.0, 0.2), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (0.0, 0.4)])]));
    t.push(named("u1CE3C", 0x1CE3C, vec![rect(1.0 / 3.0, 0.0, 2.0 / 3.0, 0.6)]));
    t.push(named("u1CE3D", 0x1CE3D, vec![poly(&[(1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.4), (1.0, 0.4), (1.0, 0.6), (1.0 / 3.0, 0.6)])]));
    t.push(named("u1CE3E", 0x1CE3E, vec![poly(&[(1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.2), (1.0, 0.4), (1.0, 0.6), (1.0 / 3.0, 0.2)])]));
    t.push(named("u1CE3F", 0x1CE3F, vec![poly(&[(1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.4), (1.0, 0.2), (1.0, 0.4), (2.0 / 3.0, 0.6), (1.0 / 3.0, 0.6)])]));
    t.push(named("u1CE40", 0x1CE40, vec![poly(&[(0.0, 0.4), (1.0 / 3.0, 0.4), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.4), (1.0, 0.4), (1.0, 0.6), (0.0, 0.6)])]));
    t.push(named("u1CE41", 0x1CE41, vec![poly(&[(0.0, 0.2), (0.5, 0.5), (1.0, 0.2), (1.0, 0.4), (0.5, 0.7), (0.0, 0.4)])]));
    t.push(named("u1CE42", 0x1CE42, vec![poly(&[(0.0, 0.2), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (1.0, 0.2), (1.0, 0.4), (0.5, 0.1), (0.0, 0.4)])]));
    t.push(named("u1CE43", 0x1CE43, vec![poly(&[(0.0, 0.4), (1.0 / 3.0, 0.2), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.2), (0.0, 0.6)])]));
    t.push(named("u1CE44", 0x1CE44, vec![poly(&[(0.0, 0.4), (1.0 / 3.0, 0.4), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.6), (0.0, 0.6)])]));
    t.push(named("u1CE45", 0x1CE45, vec![poly(&[(0.0, 0.0), (1.0 / 3.0, 0.2), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.2), (0.5, 0.3), (2.0 / 3.0, 0.4), (2.0 / 3.0, 0.6), (1.0 / 3.0, 0.4), (0.0, 0.6), (0.0, 0.4), (1.0 / 6.0, 0.3), (0.0, 0.2)])]));
    t.push(named("u1CE46", 0x1CE46, vec![poly(&[(0.0, 0.2), (1.0 / 3.0, 0.4), (1.0 / 3.0, 0.0), (2.0 / 3.0, 0.0), (2.0 / 3.0, 0.6), (1.0 / 3.0, 0.6), (0.0, 0.4)])]));
    t.push(named("u1CE47", 0x1CE47, vec![rect(1.0 / 3.0, 0.6, 2.0 / 3.0, 1.0)]));
    t.push(named("u1CE48", 0x1CE48, vec![rect(1.0 / 3.0, 0.2, 2.0 / 3.0, 1.0)]));
    t.push(named("u1CE49", 0x1CE49, vec![rect(1.0 / 3.0, 0.6, 2.0 / 3.0, 0.8)]));
    t.push(named("u1CE4A", 0x1CE4A, vec![rect(1.0 / 3.0, 0.4, 2.0 / 3.0, 0.8)]));
    t.push(named("u1CE4B", 0x1CE4B, vec![rect(1.0 / 3.0, 0.2, 2.0 / 3.0, 0.8)]));
    t.push(named("u1CE4C", 0x1CE4C, vec![rect(1.0 / 3.0, 0.0, 2.0 / 3.0, 0.8)]));
    t.push(named("u1CE4D", 0x1CE4D, vec![rect(1.0 / 3.0, 0.4, 2.0 / 3.0, 0.6)]));
    t.push(named("u1CE4E", 0x1CE4E, vec![rect(1.0 / 3.0, 0.2, 2.0 / 3.0, 0.6)]));
    t.push(named("u1CE4F", 0x1CE4F, vec![rect(1.0 / 3.0, 0.2, 2.0 / 3.0, 0.4)]));
    t.push(named("u1CE50", 0x1CE50, vec![rect(1.0 / 3.0, 0.0, 2.0 / 3.0, 0.4)]));
    for n in 1..64 {
        t.push(coded(0x1CE50 + n, vec![sepmap(3, 2, n)]));
    }
    t.push(named("u1CE90", 0x1CE90, vec![rect(0.0, 0.0, 0.25, 0.25)]));
    t.push(named("u1CE91", 0x1CE91, vec![rect(0.25, 0.0, 0.5, 0.25)]));
    t.push(named("u1CE92", 0x1CE92, vec![rect(0.5, 0.0, 0.75, 0.25)]));
    t.push(named("u1CE93", 0x1CE93, vec![rect(0.75, 0.0, 1.0, 0.25)]));
    t.push(named("u1CE94", 0x1CE94, vec![rect(0.0, 0.25, 0.25, 0.5)]));
    t.push(named("u1CE95", 0x1CE95, vec![rect(0.25, 0.25, 0.5, 0.5)]));
    t.push(named("u1CE96", 0x1CE96, vec![rect(0.5, 0.25, 0.75, 0.5)]));
    t.push(named("u1CE97", 0x1CE97, vec![rect(0.75, 0.25, 1.0, 0.5)]));
    t.push(named("u1CE98", 0x1CE98, vec![rect(0.0, 0.5, 0.25, 0.75)]));
    t.push(named("u1CE99", 0x1CE99, vec![rect(0.25, 0.5, 0.5, 0.75)]));
    t.push(named("u1CE9A", 0x1CE9A, vec![rect(0.5, 0.5, 0.75, 0.75)]));
    t.push(named("u1CE9B", 0x1CE9B, vec![rect(0.75, 0.5, 1.0, 0.75)]));
    t.push(named("u1CE9C", 0x1CE9C, vec![rect(0.0, 0.75, 0.25, 1.0)]));
    t.push(named("u1CE9D", 0x1CE9D, vec![rect(0.25, 0.75, 0.5, 1.0)]));
    t.push(named("u1CE9E", 0x1CE9E, vec![rect(0.5, 0.75, 0.75, 1.0)]));
    t.push(named("u1CE9F", 0x1CE9F, vec![rect(0.75, 0.75, 1.0, 1.0)]));
    t.push(named("u1CEA0", 0x1CEA0, vec![rect(0.5, 0.75, 1.0, 1.0)]));
    t.push(named("u1CEA1", 0x1CEA1, vec![rect(0.25, 0.75, 1.0, 1.0)]));
    t.push(named("u1CEA2", 0x1CEA2, vec![rect(0.0, 0.75, 0.75, 1.0)]));
    t.push(named("u1CEA3", 0x1CEA3, vec![rect(0.0, 0.75, 0.5, 1.0)]));
    t.push(named("u1CEA4", 0x1CEA4, vec![rect(0.0, 0.5, 0.25, 1.0)]));
    t.push(named("u1CEA5", 0x1CEA5, vec![rect(0.0, 0.25, 0.25, 1.0)]));
    t.push(named("u1CEA6", 0x1CEA6, vec![rect(0.0, 0.0, 0.25, 0.75)]));
    t.push(named("u1CEA7", 0x1CEA7, vec![rect(0.0, 0.0, 0.25, 0.5)]));
    t.push(named("u1CEA8", 0x1CEA8, vec![rect(0.0, 0.0, 0.5, 0.25)]));
    t.push(named("u1CEA9", 0x1CEA9, vec![rect(0.0, 0.0, 0.75, 0.25)]));
    t.push(named("u1CEAA", 0x1CEAA, vec![rect(0.25, 0.0, 1.0, 0.25)]));
    t.push(named("u1CEAB", 0x1CEAB, vec![rect(0.5, 0.0, 1.0, 0.25)]));
    t.push(named("u1CEAC", 0x1CEAC, vec![rect(0.75, 0.0, 1.0, 0.5)]));
    t.push(named("u1CEAD", 0x1CEAD, vec![rect(0.75, 0.0, 1.0, 0.75)]));
    t.push(named("u1CEAE", 0x1CEAE, vec![rect(0.75, 0.25, 1.0, 1.0)]));
    t.push(named("u1CEAF", 0x1CEAF, vec![rect(0.75, 0.5, 1.0, 1.0)]));

    t
}
