//! A minimal TrueType font assembled in memory, for tests.
//!
//! Glyph 0 is an empty `.notdef`, glyph 1 is a 500×700 rectangle mapped
//! from `A`, glyph 2 is an empty glyph mapped from space. The font has
//! 1000 units per em and only the tables `ttf-parser` needs to trace
//! outlines: `cmap`, `glyf`, `head`, `hhea`, `loca` and `maxp`.

/// Units per em of [`rect_font`].
pub const UNITS_PER_EM: u16 = 1000;

/// Width and height of the rectangle drawn for `A`.
pub const RECT_SIZE: (i16, i16) = (500, 700);

fn put16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

/// Build the font file.
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "fixture tables are tiny")]
pub fn rect_font() -> Vec<u8> {
    // Table records must be sorted by tag.
    let tables: [(&[u8; 4], Vec<u8>); 6] = [
        (b"cmap", cmap()),
        (b"glyf", glyf()),
        (b"head", head()),
        (b"hhea", hhea()),
        (b"loca", loca()),
        (b"maxp", maxp()),
    ];

    let mut out = Vec::new();
    put32(&mut out, 0x0001_0000);
    put16(&mut out, tables.len() as u16);
    put16(&mut out, 64); // searchRange
    put16(&mut out, 2); // entrySelector
    put16(&mut out, 32); // rangeShift

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        out.extend_from_slice(*tag);
        put32(&mut out, 0); // checksum, not verified by parsers
        put32(&mut out, offset as u32);
        put32(&mut out, data.len() as u32);
        offset += data.len().next_multiple_of(4);
    }
    for (_, data) in &tables {
        out.extend_from_slice(data);
        out.resize(out.len().next_multiple_of(4), 0);
    }
    out
}

fn head() -> Vec<u8> {
    let mut t = Vec::with_capacity(54);
    put32(&mut t, 0x0001_0000); // version
    put32(&mut t, 0x0001_0000); // fontRevision
    put32(&mut t, 0); // checksumAdjustment
    put32(&mut t, 0x5F0F_3CF5); // magic
    put16(&mut t, 0); // flags
    put16(&mut t, UNITS_PER_EM);
    t.extend_from_slice(&[0; 16]); // created, modified
    put_i16(&mut t, 0);
    put_i16(&mut t, 0);
    put_i16(&mut t, RECT_SIZE.0);
    put_i16(&mut t, RECT_SIZE.1);
    put16(&mut t, 0); // macStyle
    put16(&mut t, 8); // lowestRecPPEM
    put_i16(&mut t, 2); // fontDirectionHint
    put16(&mut t, 0); // indexToLocFormat: short offsets
    put16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea() -> Vec<u8> {
    let mut t = Vec::with_capacity(36);
    put32(&mut t, 0x0001_0000);
    put_i16(&mut t, 800); // ascender
    put_i16(&mut t, -200); // descender
    t.extend_from_slice(&[0; 26]);
    put16(&mut t, 1); // numberOfHMetrics
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    put32(&mut t, 0x0000_5000);
    put16(&mut t, 3);
    t
}

fn cmap() -> Vec<u8> {
    let mut t = Vec::new();
    put16(&mut t, 0); // version
    put16(&mut t, 1); // numTables
    put16(&mut t, 3); // Windows
    put16(&mut t, 10); // Unicode full repertoire
    put32(&mut t, 12); // subtable offset

    // Format 12: segmented coverage.
    let groups: [(u32, u32, u32); 2] = [(0x20, 0x20, 2), (0x41, 0x41, 1)];
    put16(&mut t, 12);
    put16(&mut t, 0);
    put32(&mut t, 16 + 12 * 2); // length
    put32(&mut t, 0); // language
    put32(&mut t, 2);
    for (start, end, glyph) in groups {
        put32(&mut t, start);
        put32(&mut t, end);
        put32(&mut t, glyph);
    }
    t
}

/// Short offsets (halved): glyph 1 spans bytes 0..34, glyphs 0 and 2 are empty.
fn loca() -> Vec<u8> {
    let mut t = Vec::new();
    for half in [0, 0, 17, 17] {
        put16(&mut t, half);
    }
    t
}

fn glyf() -> Vec<u8> {
    let (w, h) = RECT_SIZE;
    let mut t = Vec::with_capacity(34);
    put_i16(&mut t, 1); // numberOfContours
    put_i16(&mut t, 0);
    put_i16(&mut t, 0);
    put_i16(&mut t, w);
    put_i16(&mut t, h);
    put16(&mut t, 3); // endPtsOfContours
    put16(&mut t, 0); // instructionLength
    t.extend_from_slice(&[0x01; 4]); // on-curve, 16-bit deltas
    for dx in [0, w, 0, -w] {
        put_i16(&mut t, dx);
    }
    for dy in [0, 0, h, 0] {
        put_i16(&mut t, dy);
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_aligned() {
        let font = rect_font();
        assert_eq!(font.len() % 4, 0);
        assert_eq!(&font[12..16], b"cmap");
        assert_eq!(head().len(), 54);
        assert_eq!(hhea().len(), 36);
        assert_eq!(glyf().len(), 34);
        assert_eq!(cmap().len(), 52);
    }
}
