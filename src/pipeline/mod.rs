pub mod stage1_parse;
pub mod stage2_sections;
pub mod stage3_trim;
pub mod stage4_aggregate;
pub mod stage5_rank;

use crate::model::records::{Section, Team};
use crate::model::results::TeamResult;
use stage1_parse::run_stage1;
use stage2_sections::run_stage2;
use stage4_aggregate::{Stage4Inputs, run_stage4};
use stage5_rank::run_stage5;

/// Teams and sections to a ranked leaderboard. Pure: caller data is only read,
/// and the same snapshot always yields the same results.
pub fn score_teams(teams: &[Team], sections: &[Section]) -> Vec<TeamResult> {
    if teams.is_empty() {
        return Vec::new();
    }

    let parsed = run_stage1(teams);
    let stage2 = run_stage2(&parsed, sections);
    let unranked = run_stage4(&Stage4Inputs {
        parsed: &parsed,
        sections: &stage2,
    });
    let ranked = run_stage5(unranked);

    for r in &ranked {
        tracing::debug!(
            "{}. {} (Section: {}, L: {:.3}, Raw TP: {:.1}, Adj TP: {:.1}, RP: {:.2})",
            r.place,
            r.team_name,
            r.section_name,
            r.leniency,
            r.raw_tp,
            r.tp,
            r.rp
        );
    }
    ranked
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
