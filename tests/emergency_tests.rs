mod common;

use common::{TestResult, count_runs, find_run, lines, text_runs};
use kneeboard::docs::SheetMode;
use kneeboard::{DocumentKind, layout};
use serde_json::json;

fn build_single() -> Result<kneeboard::Surface, Box<dyn std::error::Error>> {
    let json = common::fixtures::emergency_record().to_string();
    Ok(layout(DocumentKind::Emergency(SheetMode::Single), &json)?)
}

#[test]
fn masthead_repeats_the_aircraft_line_and_strikes_the_headline_twice() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    assert!(count_runs(&surface, 0, "C172S \u{2022} N12345") >= 2);
    // The headline is painted twice in place for a heavier face.
    assert_eq!(count_runs(&surface, 0, "IMMEDIATE ACTION"), 2);
    Ok(())
}

#[test]
fn single_script_sections_land_in_one_column() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    // First section goes to the left column, centered in its 59.85mm span.
    let header = find_run(&surface, 0, "ENGINE FAILURE");
    assert!(header.x >= 8.0);
    assert!(header.x < 8.0 + 59.85);

    let check = find_run(&surface, 0, "Airspeed");
    assert!(check.x < 8.0 + 59.85);
    assert_eq!(count_runs(&surface, 0, "68 KIAS"), 1);
    assert_eq!(count_runs(&surface, 0, "EMERGENCY 3-5"), 1);
    Ok(())
}

#[test]
fn multi_script_sections_span_both_columns() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    // The band is centered over the full 123.7mm content width, so its
    // title starts well past the left column's midline.
    let band = find_run(&surface, 0, "ELECTRICAL MALFUNCTIONS");
    let content_center = 139.7 / 2.0;
    assert!(band.x < content_center && band.x > 8.0 + 59.85 / 2.0);

    let right_column_x = 8.0 + 59.85 + 4.0;
    let alternator = find_run(&surface, 0, "ALTERNATOR");
    let battery = find_run(&surface, 0, "BATTERY");
    assert!(alternator.x < right_column_x);
    assert!(battery.x >= right_column_x);
    // Scripts of one section start level under the band.
    assert!((alternator.baseline - battery.baseline).abs() < 0.01);
    Ok(())
}

#[test]
fn footer_text_runs_on_the_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    let footer = find_run(&surface, 0, "POH Section 3 governs");
    assert!((footer.baseline - (215.9 - 6.0)).abs() < 0.01);
    Ok(())
}

#[test]
fn overflow_continues_below_a_repeated_masthead() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let steps: Vec<_> = (0..28)
        .map(|i| {
            json!({ "type": "ITEM", "item": {
                "type": "CHECK_LINE",
                "title": format!("Step {i}"),
                "desiredState": "SET"
            } })
        })
        .collect();
    let record = json!({
        "aircraft": "C172S",
        "tailNumber": "N12345",
        "footer": "POH Section 3 governs",
        "sections": [
            { "type": "EMERGENCY", "title": "FIRST", "scripts": [{ "steps": steps }] },
            { "type": "EMERGENCY", "title": "SECOND", "scripts": [{ "steps": steps }] },
            { "type": "EMERGENCY", "title": "THIRD", "scripts": [{ "steps": steps }] }
        ]
    });
    let surface = layout(DocumentKind::Emergency(SheetMode::Single), &record.to_string())?;

    assert!(surface.pages.len() >= 2);
    // Later pages carry one centered masthead line and no headline.
    assert_eq!(count_runs(&surface, 1, "C172S \u{2022} N12345"), 1);
    assert_eq!(count_runs(&surface, 1, "IMMEDIATE ACTION"), 0);
    for page in 0..surface.pages.len() {
        assert_eq!(count_runs(&surface, page, "POH Section 3 governs"), 1);
    }
    // Continued content starts below the masthead, not at the margin.
    let first_content = text_runs(&surface, 1)
        .into_iter()
        .filter(|run| run.content.starts_with("Step") || run.content.contains("THIRD"))
        .map(|run| run.baseline)
        .fold(f32::INFINITY, f32::min);
    assert!(first_content > 20.0);
    Ok(())
}

#[test]
fn combo_sheet_lays_two_booklets_side_by_side() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::emergency_record().to_string();
    let surface = layout(DocumentKind::Emergency(SheetMode::Combo), &json)?;

    assert!((surface.page_size.width - 279.4).abs() < 0.01);
    assert_eq!(count_runs(&surface, 0, "IMMEDIATE ACTION"), 4);
    assert_eq!(count_runs(&surface, 0, "ENGINE FAILURE"), 2);

    let engine: Vec<_> = text_runs(&surface, 0)
        .into_iter()
        .filter(|run| run.content.contains("ENGINE FAILURE"))
        .collect();
    assert!(engine.iter().any(|run| run.x < 139.7));
    assert!(engine.iter().any(|run| run.x >= 139.7));

    let cuts: Vec<f32> = lines(&surface, 0)
        .into_iter()
        .filter(|(_, _, stroke)| stroke.dash.is_some())
        .map(|(from, _, _)| from.0)
        .collect();
    assert_eq!(cuts, vec![139.7]);
    Ok(())
}
