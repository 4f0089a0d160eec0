//! Page furniture painted outside the flow: borders, footers, cut marks and
//! aligned one-off text.

use crate::metrics::FontMetrics;
use crate::surface::{Stroke, Surface};
use kneeboard_style::page::PageGeometry;
use kneeboard_style::text::TextStyle;
use kneeboard_types::{Color, Rect};

/// Thin border inset 2mm from the panel edges.
pub fn draw_page_border(surface: &mut Surface, page: usize, geo: &PageGeometry) {
    surface.stroke_rect(
        page,
        Rect::new(geo.x_offset + 2.0, 2.0, geo.width - 4.0, geo.height - 4.0),
        Stroke::solid(Color::gray(40), 0.4),
    );
}

/// Centered running footer near the panel's bottom edge.
pub fn draw_footer(
    surface: &mut Surface,
    page: usize,
    geo: &PageGeometry,
    text: &str,
    style: TextStyle,
    metrics: &FontMetrics,
) {
    let center = geo.x_offset + geo.width / 2.0;
    text_centered(surface, page, center, geo.height - 6.0, text, style, metrics);
}

/// Dashed vertical cut marks between the panels of a multi-up sheet, at
/// `panel_width` multiples.
pub fn draw_cut_marks(
    surface: &mut Surface,
    page: usize,
    panel_width: f32,
    sheet_height: f32,
    panel_count: usize,
) {
    let stroke = Stroke::dashed(Color::gray(180), 0.1, 2.0, 2.0);
    for i in 1..panel_count.max(1) {
        let x = panel_width * i as f32;
        surface.line(page, (x, 0.0), (x, sheet_height), stroke);
    }
}

pub fn text_centered(
    surface: &mut Surface,
    page: usize,
    center_x: f32,
    baseline: f32,
    text: &str,
    style: TextStyle,
    metrics: &FontMetrics,
) {
    let width = metrics.text_width(text, &style);
    surface.text(page, center_x - width / 2.0, baseline, text, style);
}

pub fn text_right(
    surface: &mut Surface,
    page: usize,
    right_x: f32,
    baseline: f32,
    text: &str,
    style: TextStyle,
    metrics: &FontMetrics,
) {
    let width = metrics.text_width(text, &style);
    surface.text(page, right_x - width, baseline, text, style);
}
