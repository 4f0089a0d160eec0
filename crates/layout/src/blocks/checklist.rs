//! Checklist content: the item/group/script data model and the blocks that
//! paint them.
//!
//! An item is one of four kinds. `CHECK_LINE` is a dot-leader row tying an
//! action to its desired state; `SUBTITLE`, `CONDITION` and `INFO` are
//! annotation lines between actions. A group wraps items and may carry a
//! dashed accent border when highlighted.

use crate::blocks::Block;
use crate::blocks::dot_row::{DotRow, DotRowStyle};
use crate::flow::Cursor;
use crate::metrics::FontMetrics;
use crate::surface::{Stroke, Surface};
use crate::text::tokens::{SUBSCRIPT_DROP, TokenKind, resolved_style, tokenize};
use crate::text::wrapper::{Line, wrap};
use kneeboard_style::page::PageGeometry;
use kneeboard_style::text::TextStyle;
use kneeboard_types::{Color, Rect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistItem {
    #[serde(rename_all = "camelCase")]
    CheckLine {
        title: String,
        #[serde(default)]
        desired_state: Option<String>,
        #[serde(default, rename = "isHighlighted")]
        highlighted: bool,
    },
    Subtitle {
        title: String,
    },
    Condition {
        title: String,
    },
    Info {
        title: String,
        #[serde(default)]
        content: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistGroup {
    #[serde(default)]
    pub title: Option<String>,
    pub items: Vec<ChecklistItem>,
    #[serde(default, rename = "isHighlighted")]
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    Item { item: ChecklistItem },
    Group { group: ChecklistGroup },
}

/// One procedure: an ordered run of steps, optionally titled (required when
/// a section carries several) and tagged with an internal reference code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistScript {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub internal_code: Option<String>,
    pub steps: Vec<Step>,
}

const CHECK_LINE_ADVANCE: f32 = 5.0;
const SUBTITLE_ADVANCE: f32 = 5.0;
const CONDITION_LINE_ADVANCE: f32 = 3.5;
const INFO_TITLE_LINE_ADVANCE: f32 = 3.5;
const INFO_BODY_LINE_ADVANCE: f32 = 3.2;

fn wrapped(text: &str, style: &TextStyle, width: f32, metrics: &FontMetrics) -> Vec<Line> {
    wrap(&tokenize(text, style, metrics), width)
}

fn condition_style() -> TextStyle {
    TextStyle::italic(6.0).with_color(Color::gray(100))
}

fn info_title_style() -> TextStyle {
    TextStyle::bold(6.0).with_color(Color::gray(80))
}

fn info_body_style() -> TextStyle {
    TextStyle::new(6.0).with_color(Color::gray(100))
}

/// A single checklist item placed at a column cursor. `accent` is the
/// section's emergency/abnormal color, used for highlighted check lines.
#[derive(Debug, Clone)]
pub struct ItemBlock {
    pub item: ChecklistItem,
    pub accent: Color,
    /// Extra inset on both edges, nonzero inside a highlighted group.
    pub indent: f32,
}

impl ItemBlock {
    pub fn new(item: ChecklistItem, accent: Color) -> Self {
        Self {
            item,
            accent,
            indent: 0.0,
        }
    }

    fn inner_width(&self, width: f32) -> f32 {
        width - 2.0 * self.indent
    }

    /// Wrap width for the annotation kinds, inside the 2mm item padding.
    fn wrap_width(&self, width: f32) -> f32 {
        self.inner_width(width) - 4.0
    }
}

impl Block for ItemBlock {
    fn measure(&self, _geo: &PageGeometry, width: f32, metrics: &FontMetrics) -> f32 {
        match &self.item {
            ChecklistItem::CheckLine { .. } => CHECK_LINE_ADVANCE,
            ChecklistItem::Subtitle { .. } => SUBTITLE_ADVANCE,
            ChecklistItem::Condition { title } => {
                let lines = wrapped(title, &condition_style(), self.wrap_width(width), metrics);
                lines.len().max(1) as f32 * CONDITION_LINE_ADVANCE
            }
            ChecklistItem::Info { title, content } => {
                let w = self.wrap_width(width);
                let title_lines = wrapped(title, &info_title_style(), w, metrics);
                let mut height = title_lines.len().max(1) as f32 * INFO_TITLE_LINE_ADVANCE;
                if let Some(body) = content.as_deref().filter(|c| !c.trim().is_empty()) {
                    let body_lines = wrapped(body, &info_body_style(), w, metrics);
                    height += body_lines.len() as f32 * INFO_BODY_LINE_ADVANCE;
                }
                height + 1.0
            }
        }
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let x = cursor.x + self.indent;
        let inner = self.inner_width(width);

        match &self.item {
            ChecklistItem::CheckLine {
                title,
                desired_state,
                highlighted,
            } => {
                let style = DotRowStyle::check_line(*highlighted, self.accent);
                match desired_state.as_deref().filter(|s| !s.is_empty()) {
                    Some(state) => {
                        let row = DotRow::new(title.clone(), state, style);
                        let row_cursor = Cursor { x, ..cursor };
                        row.render(surface, row_cursor, geo, inner, metrics);
                    }
                    None => {
                        surface.text(cursor.page, x + 2.0, cursor.y + 3.0, title.clone(), style.label);
                    }
                }
                CHECK_LINE_ADVANCE
            }
            ChecklistItem::Subtitle { title } => {
                let style = TextStyle::bold(6.5).with_color(Color::gray(80));
                let text = title.to_uppercase();
                let text_width = metrics.text_width(&text, &style);
                surface.text(
                    cursor.page,
                    x + (inner - text_width) / 2.0,
                    cursor.y + 3.0,
                    text,
                    style,
                );
                SUBTITLE_ADVANCE
            }
            ChecklistItem::Condition { title } => {
                let style = condition_style();
                let lines = wrapped(title, &style, self.wrap_width(width), metrics);
                let mut y = cursor.y;
                for line in &lines {
                    paint_line(surface, cursor.page, x + 2.0, y + 3.0, line, &style);
                    y += CONDITION_LINE_ADVANCE;
                }
                lines.len().max(1) as f32 * CONDITION_LINE_ADVANCE
            }
            ChecklistItem::Info { title, content } => {
                let w = self.wrap_width(width);
                let mut y = cursor.y;

                let title_style = info_title_style();
                let title_lines = wrapped(title, &title_style, w, metrics);
                for line in &title_lines {
                    paint_line(surface, cursor.page, x + 2.0, y + 3.0, line, &title_style);
                    y += INFO_TITLE_LINE_ADVANCE;
                }
                y = y.max(cursor.y + INFO_TITLE_LINE_ADVANCE);

                if let Some(body) = content.as_deref().filter(|c| !c.trim().is_empty()) {
                    let body_style = info_body_style();
                    for line in &wrapped(body, &body_style, w, metrics) {
                        paint_line(surface, cursor.page, x + 2.0, y + 3.0, line, &body_style);
                        y += INFO_BODY_LINE_ADVANCE;
                    }
                }
                y + 1.0 - cursor.y
            }
        }
    }
}

// Paints each token at the style it was measured at.
fn paint_line(
    surface: &mut Surface,
    page: usize,
    x: f32,
    baseline: f32,
    line: &Line,
    style: &TextStyle,
) {
    let mut token_x = x;
    for token in &line.tokens {
        if !token.is_whitespace() {
            let resolved = resolved_style(style, token.kind);
            let y = if token.kind == TokenKind::Subscript {
                baseline + SUBSCRIPT_DROP
            } else {
                baseline
            };
            surface.text(page, token_x, y, token.text.clone(), resolved);
        }
        token_x += token.width;
    }
}

/// A named group of items, boxed with a dashed accent border when
/// highlighted. The border spans the title line and the items.
#[derive(Debug, Clone)]
pub struct GroupBlock {
    pub group: ChecklistGroup,
    pub accent: Color,
    items: Vec<ItemBlock>,
}

impl GroupBlock {
    pub fn new(group: ChecklistGroup, accent: Color) -> Self {
        let indent = if group.highlighted { 2.0 } else { 0.0 };
        let items = group
            .items
            .iter()
            .cloned()
            .map(|item| ItemBlock {
                item,
                accent,
                indent,
            })
            .collect();
        Self {
            group,
            accent,
            items,
        }
    }

    fn content_height(&self, geo: &PageGeometry, width: f32, metrics: &FontMetrics) -> f32 {
        let mut height = 0.0;
        if self.group.title.is_some() {
            height += 5.0;
        }
        if self.group.highlighted {
            height += 1.0;
        }
        for item in &self.items {
            height += item.measure(geo, width, metrics);
        }
        height
    }
}

impl Block for GroupBlock {
    fn measure(&self, geo: &PageGeometry, width: f32, metrics: &FontMetrics) -> f32 {
        self.content_height(geo, width, metrics) + 1.0
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

        if let Some(title) = &self.group.title {
            let color = if self.group.highlighted {
                self.accent
            } else {
                Color::gray(60)
            };
            let style = TextStyle::bold(6.5).with_color(color);
            surface.text(cursor.page, cursor.x + 4.0, y + 3.0, title.to_uppercase(), style);
            y += 5.0;
        }
        if self.group.highlighted {
            y += 1.0;
        }

        for item in &self.items {
            let item_cursor = Cursor { y, ..cursor };
            y += item.render(surface, item_cursor, geo, width, metrics);
        }

        if self.group.highlighted {
            surface.stroke_rect(
                cursor.page,
                Rect::new(cursor.x + 1.0, cursor.y - 1.0, width - 2.0, y - cursor.y + 1.0),
                Stroke::dashed(self.accent, 0.6, 1.0, 1.0),
            );
        }

        y + 1.0 - cursor.y
    }

    fn sub_units(&self) -> Vec<&dyn Block> {
        self.items.iter().map(|i| i as &dyn Block).collect()
    }
}

/// Centered script title above a multi-procedure section's column.
#[derive(Debug, Clone)]
pub struct ScriptHeader {
    pub title: String,
}

impl Block for ScriptHeader {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        6.0
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let style = TextStyle::bold(8.0).with_color(Color::gray(60));
        let text = self.title.to_uppercase();
        let text_width = metrics.text_width(&text, &style);
        surface.text(
            cursor.page,
            cursor.x + (width - text_width) / 2.0,
            cursor.y + 4.0,
            text,
            style,
        );
        6.0
    }
}

/// The small solid band carrying a script's internal reference code.
#[derive(Debug, Clone)]
pub struct CodeBand {
    pub code: String,
    pub accent: Color,
}

const CODE_BAND_HEIGHT: f32 = 5.0;

impl Block for CodeBand {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        CODE_BAND_HEIGHT
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let padding = 15.0;
        surface.fill_rect(
            cursor.page,
            Rect::new(
                cursor.x + padding,
                cursor.y,
                width - 2.0 * padding,
                CODE_BAND_HEIGHT,
            ),
            self.accent,
        );

        let style = TextStyle::bold(8.0).with_color(Color::new(255, 255, 255));
        let text = self.code.to_uppercase();
        let text_width = metrics.text_width(&text, &style);
        surface.text(
            cursor.page,
            cursor.x + (width - text_width) / 2.0,
            cursor.y + 3.5,
            text,
            style,
        );
        CODE_BAND_HEIGHT
    }
}
