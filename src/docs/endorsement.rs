//! The CFI endorsement label: wrapped title over a rule, the rich-text
//! endorsement body, and a signature footer pinned to the label bottom.
//!
//! Prints either as one standalone 2" x 4" label or into a chosen slot of
//! an Avery 2x5 letter sheet (the 18163/5163/8163 family shares that grid).

use chrono::Local;
use kneeboard_layout::blocks::RichText;
use kneeboard_layout::chrome;
use kneeboard_layout::text::{tokenize, wrap};
use kneeboard_layout::{Cursor, FontMetrics, Stroke, Surface};
use kneeboard_style::text::PT_TO_MM;
use kneeboard_style::TextStyle;
use kneeboard_style::page::{LABEL_2X4, LETTER};
use kneeboard_types::Color;

use crate::model::EndorsementRecord;

const LABEL_WIDTH: f32 = 101.6;
const LABEL_HEIGHT: f32 = 50.8;
const PADDING: f32 = 2.5;
const FOOTER_HEIGHT: f32 = 11.0;

const AVERY_TOP_MARGIN: f32 = 12.7;
const AVERY_LEFT_MARGIN: f32 = 4.0;
const AVERY_HORIZ_GUTTER: f32 = 4.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// One standalone 2" x 4" label page.
    Single2x4,
    /// A letter Avery sheet; `position` is the 1-based slot, two columns
    /// by five rows.
    Avery { position: u8 },
}

pub fn build(record: &EndorsementRecord, mode: LabelMode) -> Surface {
    let date = Local::now().format("%-m/%-d/%Y").to_string();
    build_dated(record, mode, &date)
}

pub(crate) fn build_dated(record: &EndorsementRecord, mode: LabelMode, date: &str) -> Surface {
    let metrics = FontMetrics::new();
    match mode {
        LabelMode::Single2x4 => {
            let mut surface = Surface::new(LABEL_2X4);
            draw_label(&mut surface, 0.0, 0.0, record, date, &metrics);
            surface
        }
        LabelMode::Avery { position } => {
            let mut surface = Surface::new(LETTER);
            surface.ensure_page(0);
            let slot = position.clamp(1, 10) as usize - 1;
            let x = AVERY_LEFT_MARGIN + (slot % 2) as f32 * (LABEL_WIDTH + AVERY_HORIZ_GUTTER);
            let y = AVERY_TOP_MARGIN + (slot / 2) as f32 * LABEL_HEIGHT;
            draw_label(&mut surface, x, y, record, date, &metrics);
            surface
        }
    }
}

fn draw_label(
    surface: &mut Surface,
    x: f32,
    y: f32,
    record: &EndorsementRecord,
    date: &str,
    metrics: &FontMetrics,
) {
    let content_width = LABEL_WIDTH - 2.0 * PADDING;
    let start_x = x + PADDING;
    let ink = Color::new(0, 0, 0);
    let mut cursor_y = y + PADDING + 3.0;

    // Centered, wrapped title.
    let title_style = TextStyle::bold(9.0).with_color(ink);
    let title = if record.endorsement_title.is_empty() {
        "Endorsement"
    } else {
        record.endorsement_title.as_str()
    };
    for line in &wrap(&tokenize(title, &title_style, metrics), content_width) {
        let mut token_x = x + (LABEL_WIDTH - line.width) / 2.0;
        for token in &line.tokens {
            if !token.is_whitespace() {
                surface.text(0, token_x, cursor_y, token.text.clone(), title_style);
            }
            token_x += token.width;
        }
        cursor_y += title_style.line_height();
    }

    cursor_y += 1.0;
    surface.line(
        0,
        (start_x, cursor_y),
        (start_x + content_width, cursor_y),
        Stroke::solid(ink, 0.4),
    );
    cursor_y += 3.5;

    // Body, first baseline on cursor_y itself.
    let body_style = TextStyle::new(7.5).with_color(ink);
    let body = record.body_text();
    let lines = wrap(&tokenize(&body, &body_style, metrics), content_width);
    let body_cursor = Cursor {
        page: 0,
        column: 0,
        x: start_x,
        y: cursor_y - body_style.size * PT_TO_MM,
    };
    RichText::paint_lines(surface, &lines, body_cursor, &body_style);

    // Signature footer.
    let footer_y = y + LABEL_HEIGHT - PADDING - FOOTER_HEIGHT;
    let right = start_x + content_width;
    let caption = TextStyle::new(4.5).with_color(Color::gray(150));

    chrome::text_right(
        surface,
        0,
        right,
        footer_y + 2.0,
        date,
        TextStyle::bold(5.5).with_color(ink),
        metrics,
    );
    chrome::text_right(surface, 0, right, footer_y + 4.0, "DATE", caption, metrics);

    surface.line(
        0,
        (start_x, footer_y + 3.0),
        (start_x + content_width * 0.6, footer_y + 3.0),
        Stroke::solid(ink, 0.15),
    );
    surface.text(0, start_x, footer_y + 5.5, "CFI SIGNATURE", caption);

    let bottom_row = footer_y + 8.5;
    let name_style = TextStyle::bold(6.5).with_color(ink);
    surface.text(0, start_x, bottom_row, record.cfi_name.clone(), name_style);
    if !record.cfi_number.is_empty() {
        let certificate = format!("{} (Exp: {})", record.cfi_number, record.expiration_date);
        chrome::text_right(surface, 0, right, bottom_row, &certificate, name_style, metrics);
    }
    surface.text(0, start_x, bottom_row + 2.0, "CFI NAME", caption);
    chrome::text_right(surface, 0, right, bottom_row + 2.0, "CERT. NUMBER", caption, metrics);
}
