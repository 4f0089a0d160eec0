mod common;

use common::{TestResult, count_runs, find_run, lines, text_runs};
use kneeboard::docs::SheetMode;
use kneeboard::{DocumentKind, layout};
use kneeboard_layout::{FontMetrics, TextStyle};
use kneeboard_style::font::FontWeight;

fn build_single() -> Result<kneeboard::Surface, Box<dyn std::error::Error>> {
    let json = common::fixtures::speeds_record().to_string();
    Ok(layout(DocumentKind::Speeds(SheetMode::Single), &json)?)
}

#[test]
fn single_strip_has_a_speeds_side_and_a_briefing_side() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    assert_eq!(surface.pages.len(), 2);
    assert_eq!(count_runs(&surface, 0, "Cessna 172S"), 1);
    assert_eq!(count_runs(&surface, 0, "EMERGENCY OPERATIONS"), 1);
    assert_eq!(count_runs(&surface, 1, "PRE-TAKEOFF BRIEFING"), 1);
    // Briefing titles render uppercased, one token per run.
    assert_eq!(count_runs(&surface, 1, "RUNWAY"), 1);
    assert_eq!(count_runs(&surface, 1, "ROTATION"), 1);
    Ok(())
}

#[test]
fn speed_values_right_align_on_the_content_edge() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;
    let metrics = FontMetrics::new();

    // Strip is 72mm wide with a 6mm margin.
    let right_edge = 66.0;
    for value in ["129", "163", "68"] {
        let run = find_run(&surface, 0, value);
        let width = metrics.text_width(value, &run.style);
        assert!(
            (run.x + width - right_edge).abs() < 0.05,
            "value {value} ends at {} instead of {right_edge}",
            run.x + width
        );
    }
    Ok(())
}

#[test]
fn v_speed_labels_drop_their_subscripts() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    let sub = text_runs(&surface, 0)
        .into_iter()
        .find(|run| run.content == "NO")
        .ok_or("no subscript run for V_NO")?;
    assert!((sub.style.size - 6.5).abs() < 0.01);
    assert_eq!(sub.style.weight, FontWeight::Bold);

    // Subscript baseline sits below the row baseline the value uses.
    let value = find_run(&surface, 0, "129");
    assert!(sub.baseline > value.baseline);
    Ok(())
}

#[test]
fn strip_footers_count_their_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    assert_eq!(count_runs(&surface, 0, "N12345 | KPAO | Page 1"), 1);
    assert_eq!(count_runs(&surface, 1, "N12345 | KPAO | Page 2"), 1);
    Ok(())
}

#[test]
fn briefing_markup_renders_bold_runs() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = build_single()?;

    let run = find_run(&surface, 1, "straight");
    assert_eq!(run.style.weight, FontWeight::Bold);
    assert_eq!(count_runs(&surface, 1, "**"), 0);
    Ok(())
}

#[test]
fn combo_sheet_gangs_three_panels_with_cut_marks() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::speeds_record().to_string();
    let surface = layout(DocumentKind::Speeds(SheetMode::Combo), &json)?;

    assert_eq!(surface.pages.len(), 2);
    assert!((surface.page_size.width - 279.4).abs() < 0.01);
    assert_eq!(count_runs(&surface, 0, "Cessna 172S"), 3);
    assert_eq!(count_runs(&surface, 1, "PRE-TAKEOFF BRIEFING"), 3);

    let panel = 279.4 / 3.0;
    for page in 0..2 {
        let dashed: Vec<f32> = lines(&surface, page)
            .into_iter()
            .filter(|(_, _, stroke)| stroke.dash.is_some())
            .map(|(from, _, _)| from.0)
            .collect();
        assert_eq!(dashed.len(), 2);
        assert!((dashed[0] - panel).abs() < 0.01);
        assert!((dashed[1] - 2.0 * panel).abs() < 0.01);
    }
    Ok(())
}

#[test]
fn combo_panels_repeat_the_same_rows() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::speeds_record().to_string();
    let surface = layout(DocumentKind::Speeds(SheetMode::Combo), &json)?;
    let metrics = FontMetrics::new();

    // Compact rows use the 8pt value face; each panel right-aligns its copy
    // against its own content edge.
    let panel = 279.4 / 3.0;
    let runs: Vec<_> = text_runs(&surface, 0)
        .into_iter()
        .filter(|run| run.content == "129")
        .collect();
    assert_eq!(runs.len(), 3);
    let width = metrics.text_width("129", &TextStyle::bold(8.0));
    for (index, run) in runs.iter().enumerate() {
        let edge = index as f32 * panel + panel - 6.0;
        assert!((run.x + width - edge).abs() < 0.05);
    }
    Ok(())
}
