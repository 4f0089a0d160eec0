//! Validated kneeboard records as handed over by the form layer.
//!
//! Every field arrives as display-ready text; this layer renders and never
//! computes (moments, headings and totals are the caller's job, except the
//! weight/moment sums repeated on the weight-and-balance totals band).

use kneeboard_layout::blocks::ChecklistScript;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefingEntry {
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,
    pub title: String,
    /// Rich-text body. Older saved data called this field `steps`.
    #[serde(alias = "steps")]
    pub content: String,
}

/// Record behind the speeds strip and its pre-takeoff briefing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedsRecord {
    pub aircraft_model: String,
    pub footer: String,
    #[serde(default)]
    pub speeds: Vec<SpeedEntry>,
    #[serde(default)]
    pub takeoff: Vec<SpeedEntry>,
    #[serde(default)]
    pub landing: Vec<SpeedEntry>,
    #[serde(default)]
    pub emergency: Vec<SpeedEntry>,
    #[serde(default)]
    pub briefing: Vec<BriefingEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionKind {
    Emergency,
    Abnormal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistSection {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    pub scripts: Vec<ChecklistScript>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyRecord {
    pub aircraft: String,
    pub tail_number: String,
    #[serde(default)]
    pub make_model: String,
    pub footer: String,
    pub sections: Vec<ChecklistSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndorsementKind {
    Template,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementRecord {
    pub cfi_name: String,
    pub cfi_number: String,
    pub expiration_date: String,
    pub endorsement_title: String,
    pub endorsement_text: String,
    pub endorsement_type: EndorsementKind,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub field_values: Option<BTreeMap<String, String>>,
}

impl EndorsementRecord {
    /// Body text with `[field]` placeholders substituted for template
    /// endorsements. Unfilled fields keep their bracketed placeholder.
    pub fn body_text(&self) -> String {
        let mut text = self.endorsement_text.clone();
        if self.endorsement_type == EndorsementKind::Template {
            if let Some(values) = &self.field_values {
                for (key, value) in values {
                    if !value.is_empty() {
                        text = text.replace(&format!("[{key}]"), value);
                    }
                }
            }
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBalancePosition {
    pub name: String,
    pub weight: String,
    pub arm: String,
    pub moment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightBalanceRecord {
    pub aircraft: String,
    pub tail_number: String,
    pub make_model: String,
    pub date: String,
    pub category: String,
    pub max_takeoff_weight: String,
    pub reference_datum: String,
    pub positions: Vec<WeightBalancePosition>,
    pub footer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub elevation: String,
    #[serde(default)]
    pub wx_freq: String,
    #[serde(default)]
    pub approach_freq: String,
    #[serde(default)]
    pub tower_freq: String,
    #[serde(default)]
    pub ground_freq: String,
    #[serde(default)]
    pub ctaf_freq: String,
    #[serde(default)]
    pub fss_freq: String,
    #[serde(default)]
    pub unicom_freq: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimbPlan {
    #[serde(default)]
    pub cruise_alt: String,
    #[serde(default)]
    pub field_elev: String,
    #[serde(default)]
    pub climb_fpm: String,
    #[serde(default)]
    pub climb_gph: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CruisePlan {
    #[serde(default)]
    pub power_percent: String,
    #[serde(default)]
    pub manifold_pressure: String,
    #[serde(default)]
    pub rpm: String,
    #[serde(default)]
    pub gph: String,
    #[serde(default)]
    pub tas: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescentPlan {
    #[serde(default)]
    pub descent_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlanLeg {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vor_freq: String,
    #[serde(default)]
    pub altitude: String,
    #[serde(default)]
    pub wind_direction: String,
    #[serde(default)]
    pub wind_velocity: String,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub tas: String,
    #[serde(default)]
    pub true_course: String,
    #[serde(default)]
    pub magnetic_heading: String,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub ground_speed: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub ete: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlanRecord {
    pub departure: Airport,
    pub arrival: Airport,
    #[serde(default)]
    pub climb: ClimbPlan,
    #[serde(default)]
    pub cruise: CruisePlan,
    #[serde(default)]
    pub descent: DescentPlan,
    #[serde(default)]
    pub legs: Vec<FlightPlanLeg>,
    pub footer: String,
}
