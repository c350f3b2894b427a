pub mod external;

use crate::model::records::{Section, Team};
use crate::model::results::TeamResult;
use crate::pipeline::score_teams;

pub use external::ExternalScorer;

/// Interchangeable ranking implementation. Every strategy must return the
/// same leaderboard the in-process engine would for the same snapshot.
pub trait RankingStrategy: Send + Sync {
    fn name(&self) -> &str;
    fn rank(&self, teams: &[Team], sections: &[Section]) -> Vec<TeamResult>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InProcess;

impl RankingStrategy for InProcess {
    fn name(&self) -> &str {
        "in-process"
    }

    fn rank(&self, teams: &[Team], sections: &[Section]) -> Vec<TeamResult> {
        score_teams(teams, sections)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScorerConfig {
    InProcess,
    External {
        program: std::path::PathBuf,
        args: Vec<String>,
    },
}

pub fn build_strategy(config: &ScorerConfig) -> Box<dyn RankingStrategy> {
    match config {
        ScorerConfig::InProcess => Box::new(InProcess),
        ScorerConfig::External { program, args } => {
            Box::new(ExternalScorer::new(program.clone(), args.clone()))
        }
    }
}
