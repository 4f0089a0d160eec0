mod common;

use common::{TestResult, find_run, text_runs};
use kneeboard::docs::endorsement::LabelMode;
use kneeboard::{DocumentKind, layout};
use kneeboard_layout::FontMetrics;
use kneeboard_style::font::FontWeight;

fn expected_body() -> String {
    let record = common::fixtures::endorsement_record();
    let mut body = record["endorsementText"].as_str().unwrap().to_string();
    for (key, value) in record["fieldValues"].as_object().unwrap() {
        body = body.replace(&format!("[{key}]"), value.as_str().unwrap());
    }
    body
}

#[test]
fn single_label_uses_the_2x4_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::endorsement_record().to_string();
    let surface = layout(DocumentKind::Endorsement(LabelMode::Single2x4), &json)?;

    assert_eq!(surface.pages.len(), 1);
    assert!((surface.page_size.width - 101.6).abs() < 0.01);
    assert!((surface.page_size.height - 50.8).abs() < 0.01);

    let title = find_run(&surface, 0, "Flight");
    assert_eq!(title.style.weight, FontWeight::Bold);
    assert!((title.style.size - 9.0).abs() < 0.01);
    Ok(())
}

#[test]
fn body_keeps_every_word_with_fields_substituted() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::endorsement_record().to_string();
    let surface = layout(DocumentKind::Endorsement(LabelMode::Single2x4), &json)?;

    let body_runs: Vec<_> = text_runs(&surface, 0)
        .into_iter()
        .filter(|run| (run.style.size - 7.5).abs() < 0.01)
        .collect();

    for word in expected_body().split_whitespace() {
        assert!(
            body_runs.iter().any(|run| run.content == word),
            "body word {word:?} missing from the label"
        );
    }
    assert!(!body_runs.iter().any(|run| run.content.contains('[')));
    Ok(())
}

#[test]
fn long_body_stays_inside_the_label_padding() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::endorsement_record().to_string();
    let surface = layout(DocumentKind::Endorsement(LabelMode::Single2x4), &json)?;
    let metrics = FontMetrics::new();

    for run in text_runs(&surface, 0) {
        let width = metrics.text_width(&run.content, &run.style);
        assert!(run.x >= 2.4, "run {:?} starts left of the padding", run.content);
        assert!(
            run.x + width <= 101.6 - 2.4 + 0.05,
            "run {:?} overruns the right padding",
            run.content
        );
    }
    Ok(())
}

#[test]
fn signature_footer_pins_to_the_label_bottom() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::endorsement_record().to_string();
    let surface = layout(DocumentKind::Endorsement(LabelMode::Single2x4), &json)?;

    let footer_y = 50.8 - 2.5 - 11.0;
    let signature = find_run(&surface, 0, "CFI SIGNATURE");
    assert!((signature.baseline - (footer_y + 5.5)).abs() < 0.01);

    let name = find_run(&surface, 0, "A. Instructor");
    assert_eq!(name.style.weight, FontWeight::Bold);
    assert_eq!(
        find_run(&surface, 0, "1234567CFI (Exp: 10/2027)").baseline,
        name.baseline
    );
    find_run(&surface, 0, "DATE");
    find_run(&surface, 0, "CERT. NUMBER");
    Ok(())
}

#[test]
fn avery_slot_offsets_the_label_on_a_letter_sheet() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::endorsement_record().to_string();
    let surface = layout(
        DocumentKind::Endorsement(LabelMode::Avery { position: 4 }),
        &json,
    )?;

    assert!((surface.page_size.width - 215.9).abs() < 0.01);
    assert!((surface.page_size.height - 279.4).abs() < 0.01);

    // Slot 4 is the second column of the second row.
    let label_x = 4.0 + 101.6 + 4.8;
    let label_y = 12.7 + 50.8;
    let signature = find_run(&surface, 0, "CFI SIGNATURE");
    assert!((signature.x - (label_x + 2.5)).abs() < 0.01);

    let title = find_run(&surface, 0, "Flight");
    assert!((title.baseline - (label_y + 2.5 + 3.0)).abs() < 0.01);
    Ok(())
}

#[test]
fn out_of_range_avery_positions_clamp_to_the_grid() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = common::fixtures::endorsement_record().to_string();

    let first = layout(
        DocumentKind::Endorsement(LabelMode::Avery { position: 0 }),
        &json,
    )?;
    assert!((find_run(&first, 0, "CFI SIGNATURE").x - (4.0 + 2.5)).abs() < 0.01);

    let last = layout(
        DocumentKind::Endorsement(LabelMode::Avery { position: 40 }),
        &json,
    )?;
    let signature = find_run(&last, 0, "CFI SIGNATURE");
    assert!((signature.x - (4.0 + 101.6 + 4.8 + 2.5)).abs() < 0.01);
    assert!(signature.baseline > 12.7 + 4.0 * 50.8);
    Ok(())
}
