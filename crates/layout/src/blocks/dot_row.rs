//! The dot-leader row: left label, right value, a run of period glyphs
//! tying them together. Both the speeds card and checklist check-lines are
//! built on this block with different styling.

use crate::blocks::Block;
use crate::flow::Cursor;
use crate::metrics::FontMetrics;
use crate::surface::Surface;
use crate::text::tokens::{SUBSCRIPT_DROP, split_subscript};
use kneeboard_style::font::FontWeight;
use kneeboard_style::page::PageGeometry;
use kneeboard_style::text::TextStyle;
use kneeboard_types::Color;

#[derive(Debug, Clone)]
pub struct DotRowStyle {
    pub label: TextStyle,
    pub value: TextStyle,
    /// Font size of subscript parts in `base_sub` labels, in points.
    pub sub_size: f32,
    pub dot_color: Color,
    /// Gap between the label's end and the first dot.
    pub dot_lead: f32,
    /// Gap reserved between the last dot and the value.
    pub value_gap: f32,
    /// Row advance in mm.
    pub spacing: f32,
    /// Inner padding from the block edges to the label/value.
    pub left_pad: f32,
    pub right_pad: f32,
}

impl DotRowStyle {
    /// Styling of the speeds card rows.
    pub fn speeds(compact: bool) -> Self {
        let size = if compact { 8.0 } else { 8.5 };
        Self {
            label: TextStyle::new(size),
            value: TextStyle::bold(size),
            sub_size: if compact { 6.0 } else { 6.5 },
            dot_color: Color::gray(180),
            dot_lead: 2.0,
            value_gap: 2.0,
            spacing: if compact { 5.0 } else { 5.5 },
            left_pad: 0.0,
            right_pad: 0.0,
        }
    }

    /// Styling of a checklist check-line; `accent` colors a highlighted row.
    pub fn check_line(highlighted: bool, accent: Color) -> Self {
        let ink = if highlighted { accent } else { Color::gray(40) };
        let label = if highlighted {
            TextStyle::bold(7.0)
        } else {
            TextStyle::new(7.0)
        };
        Self {
            label: label.with_color(ink),
            value: TextStyle::bold(7.0).with_color(ink),
            sub_size: 5.5,
            dot_color: Color::gray(180),
            dot_lead: 2.0,
            value_gap: 0.0,
            spacing: 5.0,
            left_pad: 2.0,
            right_pad: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DotRow {
    pub label: String,
    pub value: String,
    pub style: DotRowStyle,
}

impl DotRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>, style: DotRowStyle) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            style,
        }
    }

    fn sub_style(&self) -> TextStyle {
        TextStyle {
            size: self.style.sub_size,
            weight: FontWeight::Bold,
            ..self.style.label
        }
    }

    /// Paints the label, splitting `base_sub` words into base plus a
    /// smaller, baseline-dropped subscript. Returns the x past the label.
    fn paint_label(&self, surface: &mut Surface, cursor: Cursor, metrics: &FontMetrics) -> f32 {
        let baseline = cursor.y + 3.0;
        let mut x = cursor.x + self.style.left_pad;
        let sub_style = self.sub_style();

        for word in self.label.split_inclusive(' ') {
            let trimmed = word.trim_end();
            let trailing = &word[trimmed.len()..];
            if let Some((base, sub)) = split_subscript(trimmed) {
                surface.text(cursor.page, x, baseline, base, self.style.label);
                x += metrics.text_width(base, &self.style.label);
                surface.text(cursor.page, x + 0.1, baseline + SUBSCRIPT_DROP, sub, sub_style);
                x += metrics.text_width(sub, &sub_style) + 0.2;
            } else {
                surface.text(cursor.page, x, baseline, trimmed, self.style.label);
                x += metrics.text_width(trimmed, &self.style.label);
            }
            x += metrics.text_width(trailing, &self.style.label);
        }
        x
    }
}

impl Block for DotRow {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        self.style.spacing
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let baseline = cursor.y + 3.0;
        let right_edge = cursor.x + width - self.style.right_pad;
        let label_end = self.paint_label(surface, cursor, metrics);

        let value_width = metrics.text_width(&self.value, &self.style.value);
        let dots_start = label_end + self.style.dot_lead;
        let dots_end = right_edge - value_width - self.style.value_gap;

        if dots_end > dots_start {
            let dot_style = TextStyle {
                color: self.style.dot_color,
                ..self.style.label
            };
            let dot_width = metrics.char_width('.', &dot_style);
            let count = ((dots_end - dots_start) / dot_width).floor() as usize;
            surface.text(cursor.page, dots_start, baseline, ".".repeat(count), dot_style);
        } else {
            log::warn!(
                "dot row '{}' has no room for a leader, value may overlap the label",
                self.label
            );
        }

        // Value right edge lands exactly on the row's right edge.
        surface.text(
            cursor.page,
            right_edge - value_width,
            baseline,
            self.value.clone(),
            self.style.value,
        );
        self.style.spacing
    }
}
