use serde::{Deserialize, Serialize};

use crate::model::records::GradeEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionStats {
    pub section_id: String,
    pub section_name: String,
    pub mean_raw: f64,
    pub leniency: f64,
}

/// Trimmed averages of the four scored roles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoleAverages {
    pub sci: f64,
    pub rep: f64,
    pub opp: f64,
    pub rev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub place: u32,
    pub team_id: String,
    pub team_name: String,
    pub nationality: String,
    pub section_id: String,
    pub section_name: String,

    #[serde(rename = "sci_raw", default)]
    pub sci_raw: f64,
    #[serde(rename = "rep_raw", default)]
    pub rep_raw: f64,
    #[serde(rename = "opp_raw", default)]
    pub opp_raw: f64,
    #[serde(rename = "rev_raw", default)]
    pub rev_raw: f64,
    #[serde(default)]
    pub sci: f64,
    #[serde(default)]
    pub rep: f64,
    #[serde(default)]
    pub opp: f64,
    #[serde(default)]
    pub rev: f64,

    #[serde(rename = "rawTP")]
    pub raw_tp: f64,
    pub tp: f64,
    #[serde(rename = "z_score")]
    pub z_score: f64,
    pub rp: f64,
    /// Same value as `rp`; kept for viewers that read `score`.
    #[serde(default)]
    pub score: f64,
    pub leniency: f64,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
}
