//! Header blocks: the light-filled section header of the speeds strip, the
//! solid color band of the emergency checklist and the ruled headline of the
//! form sheets.

use crate::blocks::Block;
use crate::flow::Cursor;
use crate::metrics::FontMetrics;
use crate::surface::{Stroke, Surface};
use kneeboard_style::page::PageGeometry;
use kneeboard_style::text::TextStyle;
use kneeboard_types::{Color, Rect};

/// Centered bold uppercase title over a light fill. The emergency variant
/// tints the fill and text toward red.
#[derive(Debug, Clone)]
pub struct SectionHeader {
    pub text: String,
    pub emergency: bool,
    /// Tighter sizing for the 3-up combo sheet.
    pub compact: bool,
}

impl SectionHeader {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emergency: false,
            compact: false,
        }
    }

    pub fn emergency(mut self) -> Self {
        self.emergency = true;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn band_height(&self) -> f32 {
        if self.compact { 6.0 } else { 7.0 }
    }
}

impl Block for SectionHeader {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        if self.compact { 7.0 } else { 8.0 }
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let fill = if self.emergency {
            Color::new(255, 235, 235)
        } else {
            Color::new(242, 242, 242)
        };
        let text_color = if self.emergency {
            Color::new(180, 0, 0)
        } else {
            Color::new(40, 0, 0)
        };

        surface.fill_rect(
            cursor.page,
            Rect::new(cursor.x, cursor.y, width, self.band_height()),
            fill,
        );

        let style = TextStyle::bold(if self.compact { 10.0 } else { 11.0 }).with_color(text_color);
        let title = self.text.to_uppercase();
        let text_width = metrics.text_width(&title, &style);
        surface.text(
            cursor.page,
            cursor.x + (width - text_width) / 2.0,
            cursor.y + self.band_height() - 1.5,
            title,
            style,
        );

        self.measure(geo, width, metrics)
    }
}

/// Solid accent band with white bold text, used per checklist section.
#[derive(Debug, Clone)]
pub struct BandHeader {
    pub text: String,
    pub accent: Color,
}

impl BandHeader {
    pub fn new(text: impl Into<String>, accent: Color) -> Self {
        Self {
            text: text.into(),
            accent,
        }
    }
}

impl Block for BandHeader {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        8.0
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        let band = Rect::new(cursor.x, cursor.y, width, 7.0);
        surface.rect(
            cursor.page,
            band,
            Some(self.accent),
            Some(Stroke::solid(Color::new(255, 255, 255), 0.5)),
        );

        let style = TextStyle::bold(11.0).with_color(Color::new(255, 255, 255));
        let title = self.text.to_uppercase();
        let text_width = metrics.text_width(&title, &style);
        surface.text(
            cursor.page,
            cursor.x + (width - text_width) / 2.0,
            cursor.y + 4.5,
            title,
            style,
        );
        8.0
    }
}

/// Left-aligned bold headline with a full-width underline, used by the
/// weight-and-balance and flight-plan sheets.
#[derive(Debug, Clone)]
pub struct RuledHeader {
    pub text: String,
}

/// Ink color of the form sheets' headlines and rules.
pub const FORM_ACCENT: Color = Color::new(20, 50, 100);

impl RuledHeader {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Block for RuledHeader {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        5.0
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        _metrics: &FontMetrics,
    ) -> f32 {
        let style = TextStyle::bold(9.0).with_color(FORM_ACCENT);
        surface.text(cursor.page, cursor.x, cursor.y, self.text.clone(), style);
        surface.line(
            cursor.page,
            (cursor.x, cursor.y + 1.5),
            (cursor.x + width, cursor.y + 1.5),
            Stroke::solid(FORM_ACCENT, 0.5),
        );
        5.0
    }
}
