use crate::model::constants::{OPP_WEIGHT, PRESENTER_WEIGHT, REV_WEIGHT, SCI_WEIGHT};
use crate::model::results::{RoleAverages, TeamResult};
use crate::model::roles::Role;
use crate::pipeline::stage1_parse::ParsedTeam;
use crate::pipeline::stage2_sections::Stage2Output;
use crate::pipeline::stage3_trim::trimmed_average;

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub parsed: &'a [ParsedTeam<'a>],
    pub sections: &'a Stage2Output,
}

/// One unranked result per team, grouped by section in first-appearance order.
pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Vec<TeamResult> {
    let mut out = Vec::with_capacity(inputs.parsed.len());
    for group in &inputs.sections.groups {
        let leniency = group.stats.leniency;
        for &idx in &group.members {
            let parsed = &inputs.parsed[idx];
            let raw = role_averages(parsed, 1.0);
            let adjusted = role_averages(parsed, leniency);
            let team = parsed.team;
            out.push(TeamResult {
                place: 0,
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                nationality: team.nationality.clone(),
                section_id: group.stats.section_id.clone(),
                section_name: group.stats.section_name.clone(),
                sci_raw: raw.sci,
                rep_raw: raw.rep,
                opp_raw: raw.opp,
                rev_raw: raw.rev,
                sci: adjusted.sci,
                rep: adjusted.rep,
                opp: adjusted.opp,
                rev: adjusted.rev,
                raw_tp: total_points(&raw),
                tp: total_points(&adjusted),
                z_score: 0.0,
                rp: 0.0,
                score: 0.0,
                leniency,
                tasks: team.grades.iter().map(|g| g.role.label().to_string()).collect(),
                grades: team.grades.clone(),
            });
        }
    }
    out
}

pub fn role_averages(parsed: &ParsedTeam<'_>, leniency: f64) -> RoleAverages {
    RoleAverages {
        sci: trimmed_average(parsed.scores_for(&Role::ScienceReport), leniency),
        rep: trimmed_average(parsed.scores_for(&Role::PresentationReport), leniency),
        opp: trimmed_average(parsed.scores_for(&Role::Opposition), leniency),
        rev: trimmed_average(parsed.scores_for(&Role::Review), leniency),
    }
}

pub fn total_points(avg: &RoleAverages) -> f64 {
    SCI_WEIGHT * (avg.sci + avg.rep * PRESENTER_WEIGHT) + OPP_WEIGHT * avg.opp + REV_WEIGHT * avg.rev
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_aggregate.rs"]
mod tests;
