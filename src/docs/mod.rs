//! Document assemblers. Each takes a validated record, lays it out onto a
//! paint surface and leaves serialization to the PDF backend.

pub mod emergency;
pub mod endorsement;
pub mod flight_plan;
pub mod speeds;
pub mod weight_balance;

use kneeboard_layout::blocks::header::FORM_ACCENT;
use kneeboard_layout::chrome;
use kneeboard_layout::{FontMetrics, Stroke, Surface};
use kneeboard_style::{PageGeometry, TextStyle};
use kneeboard_types::{Color, Rect};

/// Print layout of the strip and checklist documents: one standalone cut
/// size, or several copies ganged onto a letter sheet with cut marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetMode {
    #[default]
    Single,
    Combo,
}

/// Banner shared by the form sheets: accent bar, tinted title area and a
/// heavy rule under centered title and subtitle.
pub(crate) fn draw_form_banner(
    surface: &mut Surface,
    geo: &PageGeometry,
    title: &str,
    subtitle: &str,
    metrics: &FontMetrics,
) {
    let left = geo.content_left();
    let width = geo.content_width();
    let top = geo.margin;

    surface.fill_rect(0, Rect::new(left, top, width, 2.0), FORM_ACCENT);
    surface.fill_rect(
        0,
        Rect::new(left, top + 2.0, width, 14.0),
        Color::new(245, 247, 250),
    );
    surface.line(
        0,
        (left, top + 16.0),
        (left + width, top + 16.0),
        Stroke::solid(FORM_ACCENT, 0.8),
    );

    let center = left + width / 2.0;
    chrome::text_centered(
        surface,
        0,
        center,
        top + 9.0,
        title,
        TextStyle::bold(14.0).with_color(FORM_ACCENT),
        metrics,
    );
    chrome::text_centered(
        surface,
        0,
        center,
        top + 13.0,
        subtitle,
        TextStyle::new(7.0).with_color(Color::gray(100)),
        metrics,
    );
}

/// The form sheets' bottom rule with a left and right caption. Skipped when
/// the content has already run past the reserved space.
pub(crate) fn draw_form_footer(
    surface: &mut Surface,
    page: usize,
    geo: &PageGeometry,
    y: f32,
    left_text: &str,
    right_text: &str,
    metrics: &FontMetrics,
) {
    if y + 8.0 >= geo.height {
        return;
    }
    surface.line(
        page,
        (geo.content_left(), y),
        (geo.content_right(), y),
        Stroke::solid(FORM_ACCENT, 0.5),
    );
    let style = TextStyle::new(6.0).with_color(Color::gray(100));
    surface.text(page, geo.content_left(), y + 4.0, left_text, style);
    chrome::text_right(surface, page, geo.content_right(), y + 4.0, right_text, style, metrics);
}
