//! The paint surface: an ordered list of primitive draw commands per page.
//!
//! Layout code emits into a `Surface`; a backend walks the pages and paints.
//! Coordinates are millimeters with the origin at the top-left of the page,
//! y growing downward. Text positions name the baseline, not the cap line.

use kneeboard_style::text::TextStyle;
use kneeboard_types::{Color, Rect, Size};

/// Stroke state for rules and outlines. Width in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// `(on, off)` dash lengths in millimeters, solid when `None`.
    pub dash: Option<(f32, f32)>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Color, width: f32, on: f32, off: f32) -> Self {
        Self {
            color,
            width,
            dash: Some((on, off)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintElement {
    Text {
        x: f32,
        /// Baseline position measured from the page top.
        baseline: f32,
        content: String,
        style: TextStyle,
    },
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
}

/// All pages of one document, uniform in size.
#[derive(Debug, Clone)]
pub struct Surface {
    pub page_size: Size,
    pub pages: Vec<Vec<PaintElement>>,
}

impl Surface {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            pages: Vec::new(),
        }
    }

    /// Grows the page list so `index` exists. Revisiting an existing page is
    /// allowed; multi-panel layouts paint the same page in several passes.
    pub fn ensure_page(&mut self, index: usize) {
        while self.pages.len() <= index {
            self.pages.push(Vec::new());
        }
    }

    pub fn push(&mut self, page: usize, element: PaintElement) {
        self.ensure_page(page);
        self.pages[page].push(element);
    }

    pub fn text(&mut self, page: usize, x: f32, baseline: f32, content: impl Into<String>, style: TextStyle) {
        self.push(
            page,
            PaintElement::Text {
                x,
                baseline,
                content: content.into(),
                style,
            },
        );
    }

    pub fn fill_rect(&mut self, page: usize, rect: Rect, fill: Color) {
        self.push(
            page,
            PaintElement::Rect {
                rect,
                fill: Some(fill),
                stroke: None,
            },
        );
    }

    pub fn stroke_rect(&mut self, page: usize, rect: Rect, stroke: Stroke) {
        self.push(
            page,
            PaintElement::Rect {
                rect,
                fill: None,
                stroke: Some(stroke),
            },
        );
    }

    pub fn rect(&mut self, page: usize, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(page, PaintElement::Rect { rect, fill, stroke });
    }

    pub fn line(&mut self, page: usize, from: (f32, f32), to: (f32, f32), stroke: Stroke) {
        self.push(page, PaintElement::Line { from, to, stroke });
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
