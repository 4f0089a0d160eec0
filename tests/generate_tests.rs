mod common;

use common::TestResult;
use kneeboard::docs::SheetMode;
use kneeboard::{DocumentError, DocumentKind, generate};

#[test]
fn every_document_kind_serializes_to_pdf() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let cases = [
        (
            DocumentKind::Speeds(SheetMode::Single),
            common::fixtures::speeds_record(),
        ),
        (
            DocumentKind::Emergency(SheetMode::Combo),
            common::fixtures::emergency_record(),
        ),
        (DocumentKind::WeightBalance, common::fixtures::weight_balance_record()),
        (DocumentKind::FlightPlan, common::fixtures::flight_plan_record()),
    ];

    for (kind, record) in cases {
        let bytes = generate(kind, &record.to_string())?;
        assert!(bytes.starts_with(b"%PDF-1.7"), "{kind:?} lacks a PDF header");
        assert!(bytes.ends_with(b"%%EOF"), "{kind:?} lacks a PDF trailer");
    }
    Ok(())
}

#[test]
fn malformed_records_surface_a_parse_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    let result = generate(DocumentKind::FlightPlan, "{ \"departure\": 4 }");
    assert!(matches!(result, Err(DocumentError::Parse(_))));
}

#[test]
fn selector_round_trip_drives_generation() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let kind = DocumentKind::parse("speeds-combo")?;
    let bytes = generate(kind, &common::fixtures::speeds_record().to_string())?;
    assert!(!bytes.is_empty());
    Ok(())
}
