//! Translates a laid-out surface into PDF content-stream operations.
//!
//! Layout coordinates are millimeters, top-left origin; the content stream
//! wants points, bottom-left origin. Graphics state (font, colors, line
//! width, dash) is deduplicated so repeated rows don't bloat the stream.

use kneeboard_layout::surface::{PaintElement, Stroke};
use kneeboard_style::font::FontFace;
use kneeboard_style::text::TextStyle;
use kneeboard_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

pub const MM_TO_PT: f32 = 72.0 / 25.4;

#[derive(Default, Clone, PartialEq)]
struct GraphicsState {
    font: Option<(FontFace, f32)>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
    dash: Option<Option<(f32, f32)>>,
}

pub struct PagePainter {
    page_height: f32,
    content: Content,
    state: GraphicsState,
}

impl PagePainter {
    /// `page_height` in millimeters.
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: GraphicsState::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn draw(&mut self, element: &PaintElement) {
        match element {
            PaintElement::Text {
                x,
                baseline,
                content,
                style,
            } => self.draw_text(*x, *baseline, content, style),
            PaintElement::Rect { rect, fill, stroke } => self.draw_rect(rect, *fill, *stroke),
            PaintElement::Line { from, to, stroke } => self.draw_line(*from, *to, *stroke),
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn pt_x(&self, x_mm: f32) -> f32 {
        x_mm * MM_TO_PT
    }

    fn pt_y(&self, y_mm: f32) -> f32 {
        (self.page_height - y_mm) * MM_TO_PT
    }

    fn set_font(&mut self, style: &TextStyle) {
        let wanted = Some((style.face(), style.size));
        if self.state.font != wanted {
            self.op(
                "Tf",
                vec![
                    Object::Name(style.face().resource_name().as_bytes().to_vec()),
                    style.size.into(),
                ],
            );
            self.state.font = wanted;
        }
    }

    fn set_fill(&mut self, color: Color) {
        if self.state.fill != Some(color) {
            self.op("rg", color_operands(color));
            self.state.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        if self.state.stroke != Some(stroke.color) {
            self.op("RG", color_operands(stroke.color));
            self.state.stroke = Some(stroke.color);
        }
        let width_pt = stroke.width * MM_TO_PT;
        if self.state.line_width != Some(width_pt) {
            self.op("w", vec![width_pt.into()]);
            self.state.line_width = Some(width_pt);
        }
        if self.state.dash != Some(stroke.dash) {
            let pattern: Vec<Object> = match stroke.dash {
                Some((on, off)) => vec![(on * MM_TO_PT).into(), (off * MM_TO_PT).into()],
                None => vec![],
            };
            self.op("d", vec![pattern.into(), 0.into()]);
            self.state.dash = Some(stroke.dash);
        }
    }

    fn draw_text(&mut self, x: f32, baseline: f32, content: &str, style: &TextStyle) {
        if content.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(style);
        self.set_fill(style.color);
        self.op("Td", vec![self.pt_x(x).into(), self.pt_y(baseline).into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, rect: &Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        let x = self.pt_x(rect.x);
        let y = self.pt_y(rect.y + rect.height);
        let w = rect.width * MM_TO_PT;
        let h = rect.height * MM_TO_PT;

        if let Some(color) = fill {
            self.set_fill(color);
            self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
            self.op("f", vec![]);
        }
        if let Some(s) = stroke {
            self.set_stroke(s);
            self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
            self.op("S", vec![]);
        }
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: Stroke) {
        self.set_stroke(stroke);
        self.op("m", vec![self.pt_x(from.0).into(), self.pt_y(from.1).into()]);
        self.op("l", vec![self.pt_x(to.0).into(), self.pt_y(to.1).into()]);
        self.op("S", vec![]);
    }
}

fn color_operands(color: Color) -> Vec<Object> {
    vec![
        (color.r as f32 / 255.0).into(),
        (color.g as f32 / 255.0).into(),
        (color.b as f32 / 255.0).into(),
    ]
}

/// WinAnsi is close enough to Latin-1 for this document set; everything the
/// fonts can't encode becomes '?'. The typographic characters the source
/// data actually uses get their WinAnsi code points.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}
