//! Advance-width metrics for the four built-in Helvetica faces.
//!
//! Widths are the Type1 AFM values at 1000 units/em for the printable ASCII
//! range. The oblique faces share their upright widths, so only two tables
//! are needed. Everything the layout crate measures goes through
//! [`FontMetrics::text_width`], with the exact [`TextStyle`] that will be
//! active at paint time.

use kneeboard_style::font::{FontFace, FontWeight};
use kneeboard_style::text::{PT_TO_MM, TextStyle};

/// Helvetica advance widths for chars 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for chars 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn advance_units(face: FontFace, c: char) -> u16 {
    let table = match face {
        FontFace::Helvetica | FontFace::HelveticaOblique => &HELVETICA,
        FontFace::HelveticaBold | FontFace::HelveticaBoldOblique => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 0x20],
        // The handful of non-ASCII glyphs the aviation records use.
        '\u{00B0}' => 400, // degree sign
        '\u{2022}' => 350, // bullet
        '\u{2019}' => table[b'\'' as usize - 0x20],
        '\u{2013}' | '\u{2014}' => table[b'-' as usize - 0x20],
        _ => 556,
    }
}

/// Width queries against the built-in face tables, in millimeters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontMetrics;

impl FontMetrics {
    pub fn new() -> Self {
        Self
    }

    pub fn text_width(&self, text: &str, style: &TextStyle) -> f32 {
        let face = style.face();
        let units: u32 = text.chars().map(|c| advance_units(face, c) as u32).sum();
        units as f32 / 1000.0 * style.size * PT_TO_MM
    }

    pub fn char_width(&self, c: char, style: &TextStyle) -> f32 {
        advance_units(style.face(), c) as f32 / 1000.0 * style.size * PT_TO_MM
    }
}
