//! Rich-text paragraph blocks.

use crate::blocks::Block;
use crate::flow::Cursor;
use crate::metrics::FontMetrics;
use crate::surface::Surface;
use crate::text::tokens::{SUBSCRIPT_DROP, TokenKind, resolved_style, tokenize};
use crate::text::wrapper::{Line, wrap};
use kneeboard_style::page::PageGeometry;
use kneeboard_style::text::{PT_TO_MM, TextStyle};
use kneeboard_types::Color;

/// A body of `**bold**` / `*italic*` markup, wrapped to the block width and
/// painted token by token so style runs survive line breaks.
#[derive(Debug, Clone)]
pub struct RichText {
    pub content: String,
    pub base: TextStyle,
}

impl RichText {
    pub fn new(content: impl Into<String>, base: TextStyle) -> Self {
        Self {
            content: content.into(),
            base,
        }
    }

    fn lines(&self, width: f32, metrics: &FontMetrics) -> Vec<Line> {
        wrap(&tokenize(&self.content, &self.base, metrics), width)
    }

    /// Paints pre-wrapped lines and returns the height consumed. Shared by
    /// every block that embeds rich text.
    pub fn paint_lines(
        surface: &mut Surface,
        lines: &[Line],
        cursor: Cursor,
        base: &TextStyle,
    ) -> f32 {
        let line_height = base.line_height();
        // First baseline sits one cap height below the block top.
        let mut baseline = cursor.y + base.size * PT_TO_MM;

        for line in lines {
            let mut x = cursor.x;
            for token in &line.tokens {
                let style = resolved_style(base, token.kind);
                let y = if token.kind == TokenKind::Subscript {
                    baseline + SUBSCRIPT_DROP
                } else {
                    baseline
                };
                if !token.is_whitespace() {
                    surface.text(cursor.page, x, y, token.text.clone(), style);
                }
                x += token.width;
            }
            baseline += line_height;
        }
        lines.len() as f32 * line_height
    }
}

impl Block for RichText {
    fn measure(&self, _geo: &PageGeometry, width: f32, metrics: &FontMetrics) -> f32 {
        self.lines(width, metrics).len() as f32 * self.base.line_height()
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let lines = self.lines(width, metrics);
        Self::paint_lines(surface, &lines, cursor, &self.base)
    }
}

/// One pre-takeoff briefing entry: an optional small blue type tag, a
/// centered uppercase title and a rich-text body.
#[derive(Debug, Clone)]
pub struct BriefingSection {
    pub type_tag: Option<String>,
    pub title: String,
    pub content: String,
    pub compact: bool,
}

const TYPE_TAG_COLOR: Color = Color::new(0, 0, 139);
const TYPE_TAG_ADVANCE: f32 = 3.5;
const TITLE_LINE_ADVANCE: f32 = 3.2;

impl BriefingSection {
    fn title_style(&self) -> TextStyle {
        TextStyle::bold(if self.compact { 7.0 } else { 7.5 })
    }

    fn body(&self) -> RichText {
        RichText::new(
            self.content.clone(),
            TextStyle::new(if self.compact { 8.0 } else { 8.5 }),
        )
    }

    fn trailing_gap(&self) -> f32 {
        if self.compact { 3.0 } else { 5.0 }
    }

    fn title_lines(&self, width: f32, metrics: &FontMetrics) -> Vec<Line> {
        let style = self.title_style();
        wrap(&tokenize(&self.title.to_uppercase(), &style, metrics), width)
    }
}

impl Block for BriefingSection {
    fn measure(&self, geo: &PageGeometry, width: f32, metrics: &FontMetrics) -> f32 {
        let mut height = 0.0;
        if self.type_tag.is_some() {
            height += TYPE_TAG_ADVANCE;
        }
        height += self.title_lines(width, metrics).len() as f32 * TITLE_LINE_ADVANCE;
        height += 1.0;
        height += self.body().measure(geo, width, metrics);
        height + self.trailing_gap()
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let mut y = cursor.y;

        if let Some(tag) = &self.type_tag {
            let style = TextStyle::bold(if self.compact { 6.0 } else { 6.5 })
                .with_color(TYPE_TAG_COLOR);
            surface.text(cursor.page, cursor.x, y, tag.to_uppercase(), style);
            y += TYPE_TAG_ADVANCE;
        }

        let title_style = self.title_style();
        for line in self.title_lines(width, metrics) {
            let x = cursor.x + (width - line.width) / 2.0;
            let mut token_x = x;
            for token in &line.tokens {
                surface.text(cursor.page, token_x, y, token.text.clone(), title_style);
                token_x += token.width;
            }
            y += TITLE_LINE_ADVANCE;
        }
        y += 1.0;

        let body = self.body();
        let body_cursor = Cursor { y, ..cursor };
        y += body.render(surface, body_cursor, geo, width, metrics);

        y + self.trailing_gap() - cursor.y
    }
}
