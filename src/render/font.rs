//! Embedded 5×7 bitmap face.
//!
//! Each glyph is nine rows of five bits, top to bottom. Bit 4 is the
//! leftmost column. Rows 0-6 sit on or above the baseline (row 6 touches
//! it); rows 7-8 hold descenders.

/// Glyph width in cells.
pub const GLYPH_WIDTH: usize = 5;

/// Rows above the baseline (the cap height).
pub const CAP_ROWS: usize = 7;

/// Total rows including descenders.
pub const GLYPH_ROWS: usize = 9;

/// Horizontal advance per character, in cells.
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

type Glyph = [u8; GLYPH_ROWS];

const fn g7(r: [u8; 7]) -> Glyph {
    [r[0], r[1], r[2], r[3], r[4], r[5], r[6], 0, 0]
}

#[rustfmt::skip]
const GLYPHS: &[(char, Glyph)] = &[
    (' ', g7([0, 0, 0, 0, 0, 0, 0])),
    ('A', g7([0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001])),
    ('B', g7([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110])),
    ('C', g7([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('D', g7([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100])),
    ('E', g7([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111])),
    ('F', g7([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('G', g7([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111])),
    ('H', g7([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('I', g7([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('J', g7([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('K', g7([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001])),
    ('L', g7([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', g7([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001])),
    ('N', g7([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001])),
    ('O', g7([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', g7([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('Q', g7([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', g7([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('S', g7([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('T', g7([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', g7([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', g7([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', g7([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010])),
    ('X', g7([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001])),
    ('Y', g7([0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100])),
    ('Z', g7([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111])),
    ('a', g7([0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111])),
    ('b', g7([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110])),
    ('c', g7([0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('d', g7([0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111])),
    ('e', g7([0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110])),
    ('f', g7([0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000])),
    ('g', [0b00000, 0b00000, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('h', g7([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001])),
    ('i', g7([0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('j', [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('k', g7([0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010])),
    ('l', g7([0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('m', g7([0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001])),
    ('n', g7([0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001])),
    ('o', g7([0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('p', [0b00000, 0b00000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000]),
    ('q', [0b00000, 0b00000, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001]),
    ('r', g7([0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000])),
    ('s', g7([0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110])),
    ('t', g7([0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110])),
    ('u', g7([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101])),
    ('v', g7([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('w', g7([0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010])),
    ('x', g7([0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001])),
    ('y', [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('z', g7([0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111])),
    ('0', g7([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110])),
    ('1', g7([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('2', g7([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111])),
    ('3', g7([0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110])),
    ('4', g7([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010])),
    ('5', g7([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110])),
    ('6', g7([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110])),
    ('7', g7([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000])),
    ('8', g7([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110])),
    ('9', g7([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100])),
    ('.', g7([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100])),
    (',', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000, 0]),
    (':', g7([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000])),
    (';', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000, 0, 0]),
    ('-', g7([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000])),
    ('_', [0, 0, 0, 0, 0, 0, 0, 0b11111, 0]),
    ('!', g7([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100])),
    ('?', g7([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100])),
    ('\'', g7([0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('"', g7([0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('&', g7([0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101])),
    ('(', g7([0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010])),
    (')', g7([0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000])),
    ('/', g7([0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000])),
    ('#', g7([0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010])),
    ('+', g7([0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000])),
    ('=', g7([0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000])),
    ('*', g7([0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000])),
    ('%', g7([0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011])),
    ('•', g7([0b00000, 0b00000, 0b01110, 0b01110, 0b01110, 0b00000, 0b00000])),
];

/// Look up a glyph's rows.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|(g, _)| *g == c).map(|(_, rows)| rows)
}

/// Lit column runs in one glyph row, as `(first, last_exclusive)`.
pub fn row_runs(bits: u8) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for col in 0..=GLYPH_WIDTH {
        let lit = col < GLYPH_WIDTH && bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0;
        match (lit, start) {
            (true, None) => start = Some(col),
            (false, Some(s)) => {
                runs.push((s, col));
                start = None;
            }
            _ => {}
        }
    }
    runs
}
