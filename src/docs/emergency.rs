//! The two-column emergency and abnormal procedures booklet.
//!
//! Sections with one script alternate between the left and right column;
//! sections with several get a full-width band and lay their scripts out
//! side by side. A red masthead repeats on continuation pages. The combo
//! mode runs the whole layout twice onto a landscape letter sheet, two
//! booklet panels per page, with a center cut mark.

use kneeboard_layout::blocks::checklist::{CodeBand, ScriptHeader};
use kneeboard_layout::blocks::{BandHeader, Block, ChecklistScript, GroupBlock, ItemBlock, Step};
use kneeboard_layout::chrome;
use kneeboard_layout::{Cursor, FlowController, FontMetrics, Surface};
use kneeboard_style::page::{HALF_LETTER, LETTER};
use kneeboard_style::{PageGeometry, TextStyle};
use kneeboard_types::Color;

use super::SheetMode;
use crate::model::{ChecklistSection, EmergencyRecord, SectionKind};

const MARGIN: f32 = 8.0;
const GUTTER: f32 = 4.0;
const FOOTER_HEIGHT: f32 = 12.0;
/// Where content resumes below the repeated masthead on later pages.
const CONTINUATION_TOP: f32 = MARGIN + 12.0;
/// Minimum room a script may start in before forcing a page break.
const MIN_SCRIPT_ROOM: f32 = 30.0;

const EMERGENCY_ACCENT: Color = Color::new(220, 38, 38);
const ABNORMAL_ACCENT: Color = Color::new(217, 119, 6);

fn accent(kind: SectionKind) -> Color {
    match kind {
        SectionKind::Emergency => EMERGENCY_ACCENT,
        SectionKind::Abnormal => ABNORMAL_ACCENT,
    }
}

pub fn build(record: &EmergencyRecord, mode: SheetMode) -> Surface {
    let metrics = FontMetrics::new();
    match mode {
        SheetMode::Single => {
            let mut surface = Surface::new(HALF_LETTER);
            render_pass(&mut surface, record, 0.0, &metrics);
            surface
        }
        SheetMode::Combo => {
            let mut surface = Surface::new(LETTER.rotated());
            render_pass(&mut surface, record, 0.0, &metrics);
            render_pass(&mut surface, record, HALF_LETTER.width, &metrics);
            let sheet_height = surface.page_size.height;
            for page in 0..surface.page_count() {
                chrome::draw_cut_marks(&mut surface, page, HALF_LETTER.width, sheet_height, 2);
            }
            surface
        }
    }
}

/// Lays the full booklet out at `x_offset`. The combo sheet calls this
/// twice; the second pass lands on the pages the first one created.
fn render_pass(
    surface: &mut Surface,
    record: &EmergencyRecord,
    x_offset: f32,
    metrics: &FontMetrics,
) {
    let geo = PageGeometry::columns(HALF_LETTER, MARGIN, 2, GUTTER)
        .with_footer(FOOTER_HEIGHT)
        .at_offset(x_offset);

    let masthead = masthead_text(record);
    draw_masthead(surface, 0, &geo, &masthead, metrics);

    let mut flow = FlowController::new(geo);
    flow.set_page_top(CONTINUATION_TOP);
    for column in (0..2).rev() {
        flow.select_column(column);
        flow.set_y(26.0);
    }

    let mut use_left = true;
    for section in &record.sections {
        if section.scripts.len() > 1 {
            place_multi_script_section(surface, &mut flow, section, metrics);
            use_left = true;
        } else {
            place_single_script_section(surface, &mut flow, section, use_left, metrics);
            use_left = !use_left;
        }
    }

    for page in 1..flow.page_count() {
        draw_masthead_repeat(surface, page, &geo, &masthead, metrics);
    }
    let footer_style = TextStyle::bold(7.0).with_color(Color::gray(120));
    for page in 0..flow.page_count() {
        chrome::draw_footer(surface, page, &geo, &record.footer, footer_style, metrics);
    }
}

fn masthead_text(record: &EmergencyRecord) -> String {
    let mut parts = Vec::new();
    if !record.aircraft.is_empty() {
        parts.push(record.aircraft.as_str());
    }
    if !record.tail_number.is_empty() {
        parts.push(record.tail_number.as_str());
    }
    parts.join(" \u{2022} ").to_uppercase()
}

/// First-page masthead: the aircraft line repeated across the content
/// width, then the oversized IMMEDIATE ACTION headline.
fn draw_masthead(
    surface: &mut Surface,
    page: usize,
    geo: &PageGeometry,
    masthead: &str,
    metrics: &FontMetrics,
) {
    surface.ensure_page(page);
    let style = TextStyle::bold(7.0).with_color(EMERGENCY_ACCENT);
    let spacing = 4.0;
    let unit = metrics.text_width(masthead, &style);
    if unit > 0.0 {
        let content = geo.content_width();
        let repeat = (((content + spacing) / (unit + spacing)).floor() as usize).max(1);
        let total = repeat as f32 * unit + repeat.saturating_sub(1) as f32 * spacing;
        let start = geo.content_left() + (content - total) / 2.0;
        for index in 0..repeat {
            surface.text(
                page,
                start + index as f32 * (unit + spacing),
                MARGIN + 3.0,
                masthead,
                style,
            );
        }
    }

    let headline = TextStyle::bold(36.0).with_color(EMERGENCY_ACCENT);
    let center = geo.x_offset + geo.width / 2.0;
    // Struck twice for a heavier face.
    chrome::text_centered(surface, page, center, 23.5, "IMMEDIATE ACTION", headline, metrics);
    chrome::text_centered(surface, page, center, 23.5, "IMMEDIATE ACTION", headline, metrics);
}

fn draw_masthead_repeat(
    surface: &mut Surface,
    page: usize,
    geo: &PageGeometry,
    masthead: &str,
    metrics: &FontMetrics,
) {
    let style = TextStyle::bold(7.0).with_color(EMERGENCY_ACCENT);
    chrome::text_centered(
        surface,
        page,
        geo.x_offset + geo.width / 2.0,
        MARGIN + 3.0,
        masthead,
        style,
        metrics,
    );
}

/// The renderable parts of one script, in order.
fn script_blocks(
    script: &ChecklistScript,
    accent: Color,
    with_header: bool,
) -> Vec<Box<dyn Block>> {
    let mut blocks: Vec<Box<dyn Block>> = Vec::new();
    if with_header {
        if let Some(title) = script.title.as_deref().filter(|t| !t.is_empty()) {
            blocks.push(Box::new(ScriptHeader {
                title: title.to_string(),
            }));
        }
    }
    for step in &script.steps {
        match step {
            Step::Item { item } => blocks.push(Box::new(ItemBlock::new(item.clone(), accent))),
            Step::Group { group } => blocks.push(Box::new(GroupBlock::new(group.clone(), accent))),
        }
    }
    if let Some(code) = script.internal_code.as_deref().filter(|c| !c.is_empty()) {
        blocks.push(Box::new(CodeBand {
            code: code.to_string(),
            accent,
        }));
    }
    blocks
}

fn blocks_height(
    blocks: &[Box<dyn Block>],
    geo: &PageGeometry,
    width: f32,
    metrics: &FontMetrics,
) -> f32 {
    blocks.iter().map(|b| b.measure(geo, width, metrics)).sum()
}

fn place_single_script_section(
    surface: &mut Surface,
    flow: &mut FlowController,
    section: &ChecklistSection,
    use_left: bool,
    metrics: &FontMetrics,
) {
    let column = if use_left { 0 } else { 1 };
    flow.select_column(column);

    let ink = accent(section.kind);
    let geo = *flow.geometry();
    let width = geo.column_width();

    let header = BandHeader::new(section.title.clone(), ink);
    let blocks = match section.scripts.first() {
        Some(script) => script_blocks(script, ink, false),
        None => Vec::new(),
    };
    let height = header.measure(&geo, width, metrics)
        + 2.0
        + blocks_height(&blocks, &geo, width, metrics);
    if height > flow.available() {
        flow.break_page(surface);
    }

    flow.place(surface, &header, metrics);
    flow.advance(2.0);
    for block in &blocks {
        flow.place(surface, block.as_ref(), metrics);
    }
    flow.advance(2.0);
}

fn place_multi_script_section(
    surface: &mut Surface,
    flow: &mut FlowController,
    section: &ChecklistSection,
    metrics: &FontMetrics,
) {
    let ink = accent(section.kind);
    let geo = *flow.geometry();
    let column_width = geo.column_width();

    flow.sync_columns(2.0);
    flow.select_column(0);

    let tallest = section
        .scripts
        .iter()
        .map(|script| {
            blocks_height(&script_blocks(script, ink, true), &geo, column_width, metrics)
        })
        .fold(0.0, f32::max);
    if 10.0 + tallest > flow.available() {
        flow.break_page(surface);
    }

    // Full-width band above both columns.
    let header = BandHeader::new(section.title.clone(), ink);
    surface.ensure_page(flow.page());
    let cursor = Cursor {
        page: flow.page(),
        column: 0,
        x: geo.content_left(),
        y: flow.cursor().y,
    };
    let below_band = cursor.y + header.render(surface, cursor, &geo, geo.content_width(), metrics) + 2.0;
    for column in (0..2).rev() {
        flow.select_column(column);
        flow.set_y(below_band);
    }

    for (index, script) in section.scripts.iter().enumerate() {
        let column = index % 2;
        flow.select_column(column);
        let blocks = script_blocks(script, ink, true);
        let height = blocks_height(&blocks, &geo, column_width, metrics);
        if height.max(MIN_SCRIPT_ROOM) > flow.available() {
            flow.break_page(surface);
            flow.select_column(column);
        }
        for block in &blocks {
            flow.place(surface, block.as_ref(), metrics);
        }
        flow.advance(1.0);
    }

    flow.sync_columns(2.0);
    flow.select_column(0);
}
