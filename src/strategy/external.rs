use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::input::InputError;
use crate::input::lines::encode_lines;
use crate::model::records::{Section, Team};
use crate::model::results::TeamResult;
use crate::pipeline::score_teams;
use crate::strategy::RankingStrategy;

#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    #[error("snapshot cannot be encoded: {0}")]
    Unrepresentable(#[from] InputError),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O with scorer process failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("scorer exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },
    #[error("malformed scorer output: {0}")]
    Malformed(String),
}

/// Runs a separately built scorer over the line protocol and falls back to
/// the in-process engine whenever that run cannot be trusted.
#[derive(Debug, Clone)]
pub struct ExternalScorer {
    program: PathBuf,
    args: Vec<String>,
}

impl ExternalScorer {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }

    pub fn try_rank(&self, teams: &[Team], sections: &[Section]) -> Result<Vec<TeamResult>, ScorerError> {
        let payload = encode_lines(teams, sections)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ScorerError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ScorerError::Malformed("scorer stdin unavailable".to_string()))?;
        let writer = std::thread::spawn(move || stdin.write_all(payload.as_bytes()));

        let output = child.wait_with_output()?;
        match writer.join() {
            Ok(Ok(())) => {}
            // the scorer may legitimately stop reading early
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(ScorerError::Io(e)),
            Err(_) => return Err(ScorerError::Malformed("stdin writer panicked".to_string())),
        }

        if !output.status.success() {
            return Err(ScorerError::ExitStatus {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_external_output(&output.stdout, teams)
    }
}

impl RankingStrategy for ExternalScorer {
    fn name(&self) -> &str {
        "external"
    }

    fn rank(&self, teams: &[Team], sections: &[Section]) -> Vec<TeamResult> {
        match self.try_rank(teams, sections) {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(
                    program = %self.program.display(),
                    error = %err,
                    "external scorer failed; falling back to in-process ranking"
                );
                score_teams(teams, sections)
            }
        }
    }
}

/// Decodes the scorer's JSON, requiring exactly one row per snapshot team,
/// and re-attaches the snapshot's grade entries.
pub fn parse_external_output(stdout: &[u8], teams: &[Team]) -> Result<Vec<TeamResult>, ScorerError> {
    let mut results: Vec<TeamResult> =
        serde_json::from_slice(stdout).map_err(|e| ScorerError::Malformed(e.to_string()))?;

    if results.len() != teams.len() {
        return Err(ScorerError::Malformed(format!(
            "expected {} results, got {}",
            teams.len(),
            results.len()
        )));
    }

    let mut by_id: HashMap<&str, &Team> = teams.iter().map(|t| (t.id.as_str(), t)).collect();
    for r in &mut results {
        let team = by_id
            .remove(r.team_id.as_str())
            .ok_or_else(|| ScorerError::Malformed(format!("unexpected or repeated team id {:?}", r.team_id)))?;
        if r.place == 0 {
            return Err(ScorerError::Malformed(format!("team {:?} has no place", r.team_id)));
        }
        r.score = r.rp;
        r.grades = team.grades.clone();
        if r.tasks.is_empty() {
            r.tasks = team.grades.iter().map(|g| g.role.label().to_string()).collect();
        }
    }

    Ok(results)
}

#[cfg(test)]
#[path = "../../tests/src_inline/strategy/external.rs"]
mod tests;
