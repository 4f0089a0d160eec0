//! The airspeeds strip and its pre-takeoff briefing page.
//!
//! The single mode produces a narrow kneeboard strip, one page per side.
//! The combo mode gangs three copies of each side onto a landscape letter
//! sheet separated by cut marks.

use kneeboard_layout::blocks::{BriefingSection, DotRow, DotRowStyle, SectionHeader};
use kneeboard_layout::chrome;
use kneeboard_layout::{FlowController, FontMetrics, Surface};
use kneeboard_style::page::{LETTER, SPEED_STRIP};
use kneeboard_style::{PageGeometry, TextStyle};
use kneeboard_types::{Color, Size};

use super::SheetMode;
use crate::model::{SpeedEntry, SpeedsRecord};

const STRIP_MARGIN: f32 = 6.0;
const COMBO_PANELS: usize = 3;

pub fn build(record: &SpeedsRecord, mode: SheetMode) -> Surface {
    let metrics = FontMetrics::new();
    match mode {
        SheetMode::Single => {
            let mut surface = Surface::new(SPEED_STRIP);
            let geo = PageGeometry::single_column(SPEED_STRIP, STRIP_MARGIN);
            draw_speeds_panel(&mut surface, &geo, 0, record, false, &metrics);
            draw_briefing_panel(&mut surface, &geo, 1, record, false, &metrics);
            surface
        }
        SheetMode::Combo => {
            let sheet = LETTER.rotated();
            let panel = Size::new(sheet.width / COMBO_PANELS as f32, sheet.height);
            let mut surface = Surface::new(sheet);
            for index in 0..COMBO_PANELS {
                let geo = PageGeometry::single_column(panel, STRIP_MARGIN)
                    .at_offset(panel.width * index as f32);
                draw_speeds_panel(&mut surface, &geo, 0, record, true, &metrics);
            }
            chrome::draw_cut_marks(&mut surface, 0, panel.width, sheet.height, COMBO_PANELS);
            for index in 0..COMBO_PANELS {
                let geo = PageGeometry::single_column(panel, STRIP_MARGIN)
                    .at_offset(panel.width * index as f32);
                draw_briefing_panel(&mut surface, &geo, 1, record, true, &metrics);
            }
            chrome::draw_cut_marks(&mut surface, 1, panel.width, sheet.height, COMBO_PANELS);
            surface
        }
    }
}

fn draw_speeds_panel(
    surface: &mut Surface,
    geo: &PageGeometry,
    page: usize,
    record: &SpeedsRecord,
    compact: bool,
    metrics: &FontMetrics,
) {
    surface.ensure_page(page);
    chrome::draw_page_border(surface, page, geo);

    let top = if compact { 8.0 } else { 10.0 };
    chrome::text_centered(
        surface,
        page,
        geo.x_offset + geo.width / 2.0,
        top + 4.0,
        &record.aircraft_model,
        TextStyle::bold(if compact { 11.0 } else { 13.0 }),
        metrics,
    );

    let mut flow = FlowController::starting_at(*geo, page);
    flow.set_y(top + if compact { 9.0 } else { 12.0 });

    let sections: [(&str, &[SpeedEntry], bool); 4] = [
        ("Airspeeds", &record.speeds, false),
        ("Takeoff", &record.takeoff, false),
        ("Landing", &record.landing, false),
        ("Emergency Operations", &record.emergency, true),
    ];
    for (index, (title, entries, emergency)) in sections.into_iter().enumerate() {
        if index > 0 {
            flow.advance(if compact { 2.0 } else { 4.0 });
        }
        let mut header = SectionHeader::new(title).compact(compact);
        if emergency {
            header = header.emergency();
        }
        flow.place(surface, &header, metrics);
        for entry in entries {
            let row = DotRow::new(
                entry.label.clone(),
                entry.value.clone(),
                DotRowStyle::speeds(compact),
            );
            flow.place(surface, &row, metrics);
        }
    }

    draw_strip_footer(surface, page, geo, &record.footer, 1, metrics);
}

fn draw_briefing_panel(
    surface: &mut Surface,
    geo: &PageGeometry,
    page: usize,
    record: &SpeedsRecord,
    compact: bool,
    metrics: &FontMetrics,
) {
    surface.ensure_page(page);
    chrome::draw_page_border(surface, page, geo);

    let top = if compact { 8.0 } else { 10.0 };
    chrome::text_centered(
        surface,
        page,
        geo.x_offset + geo.width / 2.0,
        top + 4.0,
        &record.aircraft_model,
        TextStyle::bold(if compact { 10.0 } else { 11.0 }),
        metrics,
    );

    let mut flow = FlowController::starting_at(*geo, page);
    flow.set_y(top + if compact { 8.0 } else { 10.0 });

    flow.place(
        surface,
        &SectionHeader::new("Pre-Takeoff Briefing").compact(compact),
        metrics,
    );
    for entry in &record.briefing {
        let section = BriefingSection {
            type_tag: entry.type_tag.clone(),
            title: entry.title.clone(),
            content: entry.content.clone(),
            compact,
        };
        flow.place(surface, &section, metrics);
    }

    draw_strip_footer(surface, page, geo, &record.footer, 2, metrics);
}

fn draw_strip_footer(
    surface: &mut Surface,
    page: usize,
    geo: &PageGeometry,
    footer: &str,
    page_number: usize,
    metrics: &FontMetrics,
) {
    let style = TextStyle::bold(8.0).with_color(Color::gray(150));
    chrome::draw_footer(
        surface,
        page,
        geo,
        &format!("{footer} | Page {page_number}"),
        style,
        metrics,
    );
}
