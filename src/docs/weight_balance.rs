//! The half-letter weight and balance form: banner, aircraft info fields,
//! loading table with a computed totals band, and a notes box.

use kneeboard_layout::blocks::field::FIELD_HEIGHT;
use kneeboard_layout::blocks::{Block, FieldBox, RuledHeader, Table, TotalsBand};
use kneeboard_layout::{Cursor, FlowController, FontMetrics, LayoutError, Stroke, Surface};
use kneeboard_style::page::HALF_LETTER;
use kneeboard_style::{PageGeometry, TextStyle};
use kneeboard_types::{Color, Rect};

use crate::model::WeightBalanceRecord;

const MARGIN: f32 = 8.0;
const NAME_LIMIT: usize = 15;

const NOTES: [&str; 4] = [
    "1. Verify all weights with actual measurements before flight.",
    "2. Ensure aircraft is within weight and balance limits per POH/AFM.",
    "3. Consult qualified instructor for unfamiliar aircraft configurations.",
    "4. This form is for reference only - official documentation takes precedence.",
];

pub fn build(record: &WeightBalanceRecord) -> Result<Surface, LayoutError> {
    let metrics = FontMetrics::new();
    let mut surface = Surface::new(HALF_LETTER);
    let geo = PageGeometry::single_column(HALF_LETTER, MARGIN);
    let width = geo.content_width();
    let left = geo.content_left();

    super::draw_form_banner(
        &mut surface,
        &geo,
        "WEIGHT AND BALANCE FORM",
        "AIRCRAFT LOADING CALCULATION",
        &metrics,
    );

    let mut flow = FlowController::new(geo);
    flow.set_y(MARGIN + 25.0);

    flow.place(&mut surface, &RuledHeader::new("AIRCRAFT INFORMATION"), &metrics);
    let gap = 1.0;
    let col3 = (width - gap * 2.0) / 3.0;
    let col2 = (width - gap) / 2.0;
    let mut y = flow.cursor().y;

    draw_field(&mut surface, &geo, left, y, col3, "Aircraft", &record.aircraft, &metrics);
    draw_field(&mut surface, &geo, left + col3 + gap, y, col3, "Tail Number", &record.tail_number, &metrics);
    draw_field(&mut surface, &geo, left + (col3 + gap) * 2.0, y, col3, "Date", &record.date, &metrics);
    y += FIELD_HEIGHT + gap;
    draw_field(&mut surface, &geo, left, y, col2, "Make/Model", &record.make_model, &metrics);
    draw_field(&mut surface, &geo, left + col2 + gap, y, col2, "Category", &record.category, &metrics);
    y += FIELD_HEIGHT + gap;
    draw_field(&mut surface, &geo, left, y, col2, "Max Takeoff Weight (lbs)", &record.max_takeoff_weight, &metrics);
    draw_field(&mut surface, &geo, left + col2 + gap, y, col2, "Reference Datum (in)", &record.reference_datum, &metrics);
    y += FIELD_HEIGHT;
    flow.set_y(y + 6.0);

    flow.place(&mut surface, &RuledHeader::new("WEIGHT AND BALANCE DATA"), &metrics);
    let column_widths = vec![50.0, 25.0, 25.0, 30.0];
    let headers = ["POSITION", "WEIGHT", "ARM", "MOMENT"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = record
        .positions
        .iter()
        .map(|position| {
            vec![
                truncate_name(&position.name),
                position.weight.clone(),
                position.arm.clone(),
                position.moment.clone(),
            ]
        })
        .collect();
    let table = Table::standard(headers, rows, column_widths.clone());
    flow.place_atomic(&mut surface, &table, &metrics)?;
    flow.advance(5.0);

    let total_weight: f32 = record
        .positions
        .iter()
        .map(|p| p.weight.parse::<f32>().unwrap_or(0.0))
        .sum();
    let total_moment: f32 = record
        .positions
        .iter()
        .map(|p| p.moment.parse::<f32>().unwrap_or(0.0))
        .sum();
    let cg = if total_weight > 0.0 {
        format!("CG: {:.1}", total_moment / total_weight)
    } else {
        "CG: 0.0".to_string()
    };
    let totals = TotalsBand {
        cells: vec![
            "TOTALS".to_string(),
            format!("{total_weight:.1}"),
            cg,
            format!("{total_moment:.1}"),
        ],
        column_widths,
    };
    flow.place(&mut surface, &totals, &metrics);
    flow.advance(4.0);

    flow.place(&mut surface, &RuledHeader::new("NOTES & CERTIFICATION"), &metrics);
    let notes_top = flow.cursor().y;
    surface.rect(
        flow.page(),
        Rect::new(left, notes_top, width, 22.0),
        Some(Color::new(252, 252, 252)),
        Some(Stroke::solid(Color::gray(180), 0.3)),
    );
    let note_style = TextStyle::new(6.0).with_color(Color::gray(60));
    for (index, note) in NOTES.iter().enumerate() {
        surface.text(
            flow.page(),
            left + 2.0,
            notes_top + 4.0 + index as f32 * 4.5,
            *note,
            note_style,
        );
    }
    flow.advance(25.0);

    super::draw_form_footer(
        &mut surface,
        flow.page(),
        &geo,
        flow.cursor().y + 3.0,
        &record.footer,
        "Weight & Balance Form",
        &metrics,
    );
    Ok(surface)
}

#[allow(clippy::too_many_arguments)]
fn draw_field(
    surface: &mut Surface,
    geo: &PageGeometry,
    x: f32,
    y: f32,
    width: f32,
    label: &str,
    value: &str,
    metrics: &FontMetrics,
) {
    let block = FieldBox::new(label, value);
    let cursor = Cursor {
        page: 0,
        column: 0,
        x,
        y,
    };
    block.render(surface, cursor, geo, width, metrics);
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
