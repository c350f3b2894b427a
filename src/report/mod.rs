pub mod json;
pub mod text;

use crate::model::results::TeamResult;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    pub section_id: String,
    pub section_name: String,
    pub leniency: f64,
    pub n_teams: usize,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

/// Sections present in a leaderboard, in order of their best-placed team.
pub fn summarize_sections(results: &[TeamResult]) -> Vec<SectionSummary> {
    let mut out: Vec<SectionSummary> = Vec::new();
    for r in results {
        match out.iter_mut().find(|s| s.section_id == r.section_id) {
            Some(s) => s.n_teams += 1,
            None => out.push(SectionSummary {
                section_id: r.section_id.clone(),
                section_name: r.section_name.clone(),
                leniency: r.leniency,
                n_teams: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
