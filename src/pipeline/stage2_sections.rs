use std::collections::HashMap;

use crate::model::constants::{
    DEFAULT_SECTION_ID, LENIENCY_DAMPING, LENIENCY_MAX, LENIENCY_MIN, NEUTRAL_LENIENCY,
    SCALE_MIDPOINT,
};
use crate::model::records::Section;
use crate::model::results::SectionStats;
use crate::pipeline::stage1_parse::ParsedTeam;

#[derive(Debug, Clone)]
pub struct SectionGroup {
    pub stats: SectionStats,
    /// Indices into the parsed team list, in snapshot order.
    pub members: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    /// Sections in order of first appearance among the teams.
    pub groups: Vec<SectionGroup>,
    pub global_mean: f64,
}

pub fn run_stage2(parsed: &[ParsedTeam<'_>], sections: &[Section]) -> Stage2Output {
    let names: HashMap<&str, &str> = sections
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();

    let mut groups: Vec<SectionGroup> = Vec::new();
    let mut group_scores: Vec<Vec<f64>> = Vec::new();
    let mut index_by_id: HashMap<&str, usize> = HashMap::new();

    for (idx, team) in parsed.iter().enumerate() {
        let section_id = team
            .team
            .section_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SECTION_ID);
        let g = *index_by_id.entry(section_id).or_insert_with(|| {
            groups.push(SectionGroup {
                stats: SectionStats {
                    section_id: section_id.to_string(),
                    section_name: names
                        .get(section_id)
                        .copied()
                        .filter(|n| !n.is_empty())
                        .unwrap_or(section_id)
                        .to_string(),
                    mean_raw: 0.0,
                    leniency: NEUTRAL_LENIENCY,
                },
                members: Vec::new(),
            });
            group_scores.push(Vec::new());
            groups.len() - 1
        });
        groups[g].members.push(idx);
        group_scores[g].extend(team.all_scores());
    }

    for (group, scores) in groups.iter_mut().zip(&group_scores) {
        if !scores.is_empty() {
            group.stats.mean_raw = scores.iter().sum::<f64>() / scores.len() as f64;
        }
    }

    let global_count: usize = group_scores.iter().map(Vec::len).sum();
    let global_mean = if global_count > 0 {
        group_scores.iter().flatten().sum::<f64>() / global_count as f64
    } else {
        SCALE_MIDPOINT
    };
    tracing::debug!(global_mean, "global mean raw score");

    for group in &mut groups {
        group.stats.leniency = damped_leniency(group.stats.mean_raw, global_mean);
        tracing::debug!(
            section = %group.stats.section_name,
            mean = group.stats.mean_raw,
            raw_ratio = group.stats.mean_raw / global_mean,
            leniency = group.stats.leniency,
            "section leniency"
        );
    }

    Stage2Output {
        groups,
        global_mean,
    }
}

/// Half of the section's deviation from the global mean, clamped to the allowed band.
pub fn damped_leniency(mean_raw: f64, global_mean: f64) -> f64 {
    let leniency = if mean_raw > 0.0 && global_mean > 0.0 {
        let raw_ratio = mean_raw / global_mean;
        NEUTRAL_LENIENCY + (raw_ratio - 1.0) * LENIENCY_DAMPING
    } else {
        NEUTRAL_LENIENCY
    };
    leniency.clamp(LENIENCY_MIN, LENIENCY_MAX)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_sections.rs"]
mod tests;
