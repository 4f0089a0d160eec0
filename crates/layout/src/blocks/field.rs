//! Labeled form fields: a bordered box with a small uppercase caption and a
//! bold value, laid out in rows by the form-sheet assemblers.

use crate::blocks::Block;
use crate::flow::Cursor;
use crate::metrics::FontMetrics;
use crate::surface::{Stroke, Surface};
use kneeboard_style::page::PageGeometry;
use kneeboard_style::text::TextStyle;
use kneeboard_types::{Color, Rect};

pub const FIELD_HEIGHT: f32 = 9.0;

#[derive(Debug, Clone)]
pub struct FieldBox {
    pub label: String,
    pub value: String,
}

impl FieldBox {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Block for FieldBox {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        FIELD_HEIGHT
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        _metrics: &FontMetrics,
    ) -> f32 {
        surface.rect(
            cursor.page,
            Rect::new(cursor.x, cursor.y, width, FIELD_HEIGHT),
            Some(Color::new(255, 255, 255)),
            Some(Stroke::solid(Color::gray(180), 0.3)),
        );

        let label_style = TextStyle::new(5.5).with_color(Color::gray(100));
        surface.text(
            cursor.page,
            cursor.x + 1.5,
            cursor.y + 3.0,
            self.label.to_uppercase(),
            label_style,
        );

        let value_style = TextStyle::bold(8.0).with_color(Color::new(30, 30, 30));
        surface.text(cursor.page, cursor.x + 1.5, cursor.y + 7.0, self.value.clone(), value_style);

        FIELD_HEIGHT
    }
}
