//! The half-letter VFR navigation log: airport frequencies for departure
//! and arrival, climb/cruise/descent planning figures and the legs grid.

use kneeboard_layout::blocks::header::FORM_ACCENT;
use kneeboard_layout::blocks::{RuledHeader, Table};
use kneeboard_layout::{FlowController, FontMetrics, LayoutError, Surface};
use kneeboard_style::page::HALF_LETTER;
use kneeboard_style::text::TextAlign;
use kneeboard_style::{PageGeometry, TextStyle};
use kneeboard_types::Color;

use crate::model::{Airport, FlightPlanRecord};

const MARGIN: f32 = 8.0;
const AIRPORT_BLOCK_HEIGHT: f32 = 32.0;

pub fn build(record: &FlightPlanRecord) -> Result<Surface, LayoutError> {
    let metrics = FontMetrics::new();
    let mut surface = Surface::new(HALF_LETTER);
    let geo = PageGeometry::single_column(HALF_LETTER, MARGIN);
    let left = geo.content_left();

    super::draw_form_banner(
        &mut surface,
        &geo,
        "VFR FLIGHT PLAN",
        "VISUAL FLIGHT RULES NAVIGATION LOG",
        &metrics,
    );

    let mut flow = FlowController::new(geo);
    flow.set_y(MARGIN + 25.0);

    flow.place(&mut surface, &RuledHeader::new("AIRPORT INFORMATION"), &metrics);
    let airports_top = flow.cursor().y;
    draw_airport(&mut surface, left, airports_top, "DEPARTURE", &record.departure);
    draw_airport(
        &mut surface,
        left + geo.content_width() / 2.0 + 5.0,
        airports_top,
        "ARRIVAL",
        &record.arrival,
    );
    flow.advance(AIRPORT_BLOCK_HEIGHT + 5.0);

    flow.place(&mut surface, &RuledHeader::new("PERFORMANCE PLANNING"), &metrics);
    let label_style = TextStyle::bold(8.0).with_color(FORM_ACCENT);
    let value_style = TextStyle::new(7.0).with_color(Color::gray(40));
    let value_x = left + 20.0;
    let second_x = left + 65.0;
    let mut y = flow.cursor().y;

    surface.text(0, left, y, "CLIMB", label_style);
    surface.text(0, value_x, y, format!("Cruise Alt: {}", display(&record.climb.cruise_alt)), value_style);
    surface.text(0, second_x, y, format!("Field Elev: {}", display(&record.climb.field_elev)), value_style);
    y += 3.0;
    surface.text(0, value_x, y, format!("Climb FPM: {}", display(&record.climb.climb_fpm)), value_style);
    surface.text(0, second_x, y, format!("Climb GPH: {}", display(&record.climb.climb_gph)), value_style);

    y += 4.0;
    surface.text(0, left, y, "CRUISE", label_style);
    surface.text(0, value_x, y, format!("Power: {}%", display(&record.cruise.power_percent)), value_style);
    surface.text(0, second_x, y, format!("Manifold: {}", display(&record.cruise.manifold_pressure)), value_style);
    y += 3.0;
    surface.text(0, value_x, y, format!("RPM: {}", display(&record.cruise.rpm)), value_style);
    surface.text(0, second_x, y, format!("GPH: {}", display(&record.cruise.gph)), value_style);
    y += 3.0;
    surface.text(0, value_x, y, format!("TAS: {}", display(&record.cruise.tas)), value_style);

    y += 4.0;
    surface.text(0, left, y, "DESCENT", label_style);
    surface.text(0, value_x, y, format!("Descent Rate: {} FPM", display(&record.descent.descent_rate)), value_style);
    flow.set_y(y + 8.0);

    flow.place(&mut surface, &RuledHeader::new("FLIGHT LEGS"), &metrics);
    let headers = [
        "WAYPOINT", "VOR", "ALT", "WIND", "TEMP", "TAS", "TC", "MH", "HDG", "GS", "DIST", "ETE",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let column_widths = vec![18.0, 12.0, 10.0, 10.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0];
    let rows = record
        .legs
        .iter()
        .map(|leg| {
            vec![
                leg.name.clone(),
                leg.vor_freq.clone(),
                leg.altitude.clone(),
                format!("{}\u{b0}{}", leg.wind_direction, leg.wind_velocity),
                leg.temperature.clone(),
                leg.tas.clone(),
                leg.true_course.clone(),
                leg.magnetic_heading.clone(),
                leg.heading.clone(),
                leg.ground_speed.clone(),
                leg.distance.clone(),
                leg.ete.clone(),
            ]
        })
        .collect();
    // Waypoint names read left-aligned, the numeric columns center.
    let mut aligns = vec![TextAlign::Center; 12];
    aligns[0] = TextAlign::Left;
    let table = Table::compact(headers, rows, column_widths).with_aligns(aligns);
    flow.place_atomic(&mut surface, &table, &metrics)?;
    flow.advance(5.0);

    super::draw_form_footer(
        &mut surface,
        flow.page(),
        &geo,
        flow.cursor().y + 3.0,
        &record.footer,
        "VFR Flight Plan",
        &metrics,
    );
    Ok(surface)
}

fn draw_airport(surface: &mut Surface, x: f32, y: f32, title: &str, airport: &Airport) {
    surface.text(0, x, y, title, TextStyle::bold(8.0).with_color(FORM_ACCENT));

    let style = TextStyle::new(7.0).with_color(Color::gray(40));
    let fields = [
        ("Code:", &airport.code),
        ("Elevation:", &airport.elevation),
        ("WX:", &airport.wx_freq),
        ("Approach:", &airport.approach_freq),
        ("Tower:", &airport.tower_freq),
        ("Ground:", &airport.ground_freq),
        ("CTAF:", &airport.ctaf_freq),
        ("FSS:", &airport.fss_freq),
        ("UNICOM:", &airport.unicom_freq),
    ];
    for (index, (label, value)) in fields.iter().enumerate() {
        surface.text(
            0,
            x,
            y + 4.0 + index as f32 * 3.0,
            format!("{label} {}", display(value.as_str())),
            style,
        );
    }
}

fn display(value: &str) -> &str {
    if value.is_empty() { "--" } else { value }
}
