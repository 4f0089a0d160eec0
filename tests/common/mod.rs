#![allow(dead_code)]

use kneeboard::Surface;
use kneeboard_layout::{PaintElement, Stroke};
use kneeboard_style::text::TextStyle;

pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// One painted text element, flattened for assertions.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub content: String,
    pub x: f32,
    pub baseline: f32,
    pub style: TextStyle,
}

pub fn text_runs(surface: &Surface, page: usize) -> Vec<TextRun> {
    surface.pages[page]
        .iter()
        .filter_map(|element| match element {
            PaintElement::Text {
                x,
                baseline,
                content,
                style,
            } => Some(TextRun {
                content: content.clone(),
                x: *x,
                baseline: *baseline,
                style: *style,
            }),
            _ => None,
        })
        .collect()
}

/// First text run on `page` containing `needle`. Panics when absent so the
/// failure names the missing text.
pub fn find_run(surface: &Surface, page: usize, needle: &str) -> TextRun {
    text_runs(surface, page)
        .into_iter()
        .find(|run| run.content.contains(needle))
        .unwrap_or_else(|| panic!("no text containing {needle:?} on page {page}"))
}

pub fn count_runs(surface: &Surface, page: usize, needle: &str) -> usize {
    text_runs(surface, page)
        .iter()
        .filter(|run| run.content.contains(needle))
        .count()
}

/// All painted line segments on `page` as `(from, to, stroke)`.
pub fn lines(surface: &Surface, page: usize) -> Vec<((f32, f32), (f32, f32), Stroke)> {
    surface.pages[page]
        .iter()
        .filter_map(|element| match element {
            PaintElement::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
        .collect()
}
