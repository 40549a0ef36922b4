//! Title text overlay.
//!
//! Lines are set in the embedded bitmap face, left aligned with the given
//! point as the start of the baseline. Every lit run of cells becomes a
//! rectangle and a whole line is filled as one layer.

use serde::{Deserialize, Serialize};

use crate::types::{Colour, Point};

use super::font::{self, ADVANCE, CAP_ROWS};
use super::Canvas;

/// Cap height as a fraction of the font size.
const CAP_HEIGHT_EM: f64 = 0.72;

/// Extra width added to every lit run for bold text, in cells.
const BOLD_EXTRA: f64 = 0.45;

/// One line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLine {
    pub text: String,
    /// Baseline start in canvas coordinates.
    pub position: Point,
    /// Font size in points.
    pub size: f64,
    pub colour: Colour,
    pub bold: bool,
}

impl Default for TextLine {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: Point::new(0.06, 0.9),
            size: 12.0,
            colour: Colour::BLACK,
            bold: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSpec {
    pub lines: Vec<TextLine>,
}

impl Default for TitleSpec {
    fn default() -> Self {
        Self {
            lines: vec![
                TextLine {
                    text: "Generative Poster".to_string(),
                    position: Point::new(0.06, 0.955),
                    size: 18.0,
                    colour: Colour::rgb(0.15, 0.18, 0.22),
                    bold: true,
                },
                TextLine {
                    text: "Week 9 • Arts & Advanced Big Data".to_string(),
                    position: Point::new(0.06, 0.915),
                    size: 11.0,
                    colour: Colour::rgb(0.25, 0.30, 0.36),
                    bold: false,
                },
            ],
        }
    }
}

/// Cell size in canvas units for a font size in points.
fn cell_size(canvas: &Canvas, size: f64) -> (f64, f64) {
    let cell_px = canvas.points_to_pixels(size) * CAP_HEIGHT_EM / CAP_ROWS as f64;
    (
        cell_px / canvas.width() as f64,
        cell_px / canvas.height() as f64,
    )
}

/// Build the rectangles for one line of text.
///
/// `cell` is the `(width, height)` of one font cell in canvas units.
/// Characters without a glyph advance as blanks and are returned in the
/// second element.
pub fn layout_line(line: &TextLine, cell: (f64, f64)) -> (Vec<Vec<Point>>, Vec<char>) {
    let (cw, ch) = cell;
    let extra = if line.bold { BOLD_EXTRA } else { 0.0 };
    let mut rects = Vec::new();
    let mut missing = Vec::new();

    for (i, c) in line.text.chars().enumerate() {
        let Some(rows) = font::glyph(c) else {
            if !missing.contains(&c) {
                missing.push(c);
            }
            continue;
        };
        let left = line.position.x + (i * ADVANCE) as f64 * cw;
        for (r, bits) in rows.iter().enumerate() {
            // Row CAP_ROWS - 1 rests on the baseline.
            let bottom = line.position.y + (CAP_ROWS as f64 - 1.0 - r as f64) * ch;
            let top = bottom + ch;
            for (start, end) in font::row_runs(*bits) {
                let x0 = left + start as f64 * cw;
                let x1 = left + (end as f64 + extra) * cw;
                rects.push(vec![
                    Point::new(x0, bottom),
                    Point::new(x1, bottom),
                    Point::new(x1, top),
                    Point::new(x0, top),
                ]);
            }
        }
    }

    (rects, missing)
}

/// Draw every line of the title. Returns the number of lines drawn.
pub fn draw_title(canvas: &mut Canvas, spec: &TitleSpec) -> usize {
    let mut drawn = 0;
    for line in spec.lines.iter().filter(|l| !l.text.trim().is_empty()) {
        let (rects, missing) = layout_line(line, cell_size(canvas, line.size));
        if !missing.is_empty() {
            let chars: String = missing.iter().collect();
            tracing::warn!(missing = %chars, "no glyph for some title characters");
        }
        canvas.fill_polygons(&rects, line.colour);
        drawn += 1;
    }
    tracing::debug!(lines = drawn, "drew title");
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> TextLine {
        TextLine {
            text: text.to_string(),
            position: Point::new(0.1, 0.5),
            ..TextLine::default()
        }
    }

    #[test]
    fn test_layout_advances_per_character() {
        let (a, _) = layout_line(&line("I"), (0.01, 0.01));
        let (b, _) = layout_line(&line(" I"), (0.01, 0.01));
        let min_x = |rects: &[Vec<Point>]| {
            rects
                .iter()
                .flatten()
                .map(|p| p.x)
                .fold(f64::INFINITY, f64::min)
        };
        assert!((min_x(&b) - min_x(&a) - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_cap_height_sits_on_baseline() {
        let (rects, _) = layout_line(&line("H"), (0.01, 0.01));
        let ys: Vec<f64> = rects.iter().flatten().map(|p| p.y).collect();
        let lo = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((lo - 0.5).abs() < 1e-12);
        assert!((hi - 0.57).abs() < 1e-12);
    }

    #[test]
    fn test_descender_drops_below_baseline() {
        let (rects, _) = layout_line(&line("g"), (0.01, 0.01));
        let lo = rects
            .iter()
            .flatten()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);
        assert!((lo - 0.48).abs() < 1e-12);
    }

    #[test]
    fn test_bold_widens_runs() {
        let regular = layout_line(&line("l"), (0.01, 0.01)).0;
        let mut bold_line = line("l");
        bold_line.bold = true;
        let bold = layout_line(&bold_line, (0.01, 0.01)).0;
        assert_eq!(regular.len(), bold.len());
        assert!(bold[0][1].x > regular[0][1].x);
    }

    #[test]
    fn test_missing_glyphs_reported_once() {
        let (_, missing) = layout_line(&line("a~b~"), (0.01, 0.01));
        assert_eq!(missing, vec!['~']);
    }

    #[test]
    fn test_draw_title_marks_canvas() {
        let mut canvas = Canvas::new(300, 300, 300.0);
        canvas.fill(Colour::WHITE);
        let before = canvas.clone();
        assert_eq!(draw_title(&mut canvas, &TitleSpec::default()), 2);
        assert_ne!(canvas, before);

        // Lower half has no text.
        for y in 150..300 {
            for x in 0..300 {
                assert_eq!(canvas.get(x, y).unwrap(), Colour::WHITE);
            }
        }
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut canvas = Canvas::new(10, 10, 72.0);
        let spec = TitleSpec {
            lines: vec![line("  ")],
        };
        assert_eq!(draw_title(&mut canvas, &spec), 0);
    }
}
