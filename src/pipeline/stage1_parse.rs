use crate::model::constants::grade_value;
use crate::model::records::Team;
use crate::model::roles::Role;

#[derive(Debug, Clone)]
pub struct RoleScores<'a> {
    pub role: &'a Role,
    pub scores: Vec<f64>,
}

/// A team with every grade entry converted to its sub-scores.
#[derive(Debug, Clone)]
pub struct ParsedTeam<'a> {
    pub team: &'a Team,
    pub roles: Vec<RoleScores<'a>>,
}

impl ParsedTeam<'_> {
    /// Scores recorded for `role`; the last entry wins if a role repeats.
    pub fn scores_for(&self, role: &Role) -> &[f64] {
        self.roles
            .iter()
            .rev()
            .find(|r| r.role == role)
            .map(|r| r.scores.as_slice())
            .unwrap_or(&[])
    }

    pub fn all_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.roles.iter().flat_map(|r| r.scores.iter().copied())
    }
}

/// Whitespace-separated grade tokens to sub-scores. Unknown tokens are not observations.
pub fn parse_grade_string(raw: &str) -> Vec<f64> {
    raw.split_whitespace()
        .filter_map(grade_value)
        .filter(|v| *v > 0.0)
        .collect()
}

pub fn run_stage1(teams: &[Team]) -> Vec<ParsedTeam<'_>> {
    teams
        .iter()
        .map(|team| ParsedTeam {
            team,
            roles: team
                .grades
                .iter()
                .map(|g| RoleScores {
                    role: &g.role,
                    scores: parse_grade_string(&g.token),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_parse.rs"]
mod tests;
