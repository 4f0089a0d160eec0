//! Aviation kneeboard documents: airspeed strips with pre-takeoff
//! briefings, emergency procedure booklets, CFI endorsement labels, weight
//! and balance forms and VFR navigation logs, laid out in millimeters and
//! rendered to print-ready PDFs.

pub mod docs;
pub mod error;
pub mod model;

pub use error::DocumentError;
pub use kneeboard_layout::Surface;

use docs::SheetMode;
use docs::endorsement::LabelMode;

/// A generation request: which document to build, and its print layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Speeds(SheetMode),
    Emergency(SheetMode),
    Endorsement(LabelMode),
    WeightBalance,
    FlightPlan,
}

impl DocumentKind {
    /// Parses a CLI selector: `speeds`, `speeds-combo`, `emergency`,
    /// `emergency-combo`, `endorsement`, `endorsement-avery:N` (label slot
    /// 1-10), `weight-balance` or `flight-plan`.
    pub fn parse(selector: &str) -> Result<Self, DocumentError> {
        let kind = match selector {
            "speeds" => Self::Speeds(SheetMode::Single),
            "speeds-combo" => Self::Speeds(SheetMode::Combo),
            "emergency" => Self::Emergency(SheetMode::Single),
            "emergency-combo" => Self::Emergency(SheetMode::Combo),
            "endorsement" => Self::Endorsement(LabelMode::Single2x4),
            "weight-balance" => Self::WeightBalance,
            "flight-plan" => Self::FlightPlan,
            other => {
                if let Some(slot) = other.strip_prefix("endorsement-avery:") {
                    let position = slot
                        .parse::<u8>()
                        .map_err(|_| DocumentError::UnknownDocument(other.to_string()))?;
                    Self::Endorsement(LabelMode::Avery { position })
                } else {
                    return Err(DocumentError::UnknownDocument(other.to_string()));
                }
            }
        };
        Ok(kind)
    }
}

/// Lays the named document out from its JSON record.
pub fn layout(kind: DocumentKind, json: &str) -> Result<Surface, DocumentError> {
    let surface = match kind {
        DocumentKind::Speeds(mode) => docs::speeds::build(&serde_json::from_str(json)?, mode),
        DocumentKind::Emergency(mode) => docs::emergency::build(&serde_json::from_str(json)?, mode),
        DocumentKind::Endorsement(mode) => {
            docs::endorsement::build(&serde_json::from_str(json)?, mode)
        }
        DocumentKind::WeightBalance => docs::weight_balance::build(&serde_json::from_str(json)?)?,
        DocumentKind::FlightPlan => docs::flight_plan::build(&serde_json::from_str(json)?)?,
    };
    Ok(surface)
}

/// Builds the named document and serializes it to PDF bytes.
pub fn generate(kind: DocumentKind, json: &str) -> Result<Vec<u8>, DocumentError> {
    let surface = layout(kind, json)?;
    Ok(kneeboard_render_pdf::render(&surface)?)
}
