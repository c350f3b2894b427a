use crate::input::bulk::{BulkReport, apply_bulk, parse_bulk};
use crate::input::store::{RecordStore, StoreError};
use crate::model::records::{Records, Section, Team};
use crate::model::results::TeamResult;
use crate::model::roles::Role;
use crate::notify::LeaderboardNotifier;
use crate::strategy::RankingStrategy;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown team: {0}")]
    UnknownTeam(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no valid entries in bulk upload ({issues} skipped)")]
    EmptyUpload { issues: usize },
}

/// Owns the durable records and recomputes, persists and publishes the
/// leaderboard after every change.
pub struct LeaderboardService<S: RecordStore> {
    store: S,
    records: Records,
    strategy: Box<dyn RankingStrategy>,
    notifier: LeaderboardNotifier,
}

impl<S: RecordStore> LeaderboardService<S> {
    pub fn open(store: S, strategy: Box<dyn RankingStrategy>) -> Result<Self, ServiceError> {
        let records = store.load()?;
        tracing::debug!(
            sections = records.sections.len(),
            teams = records.teams.len(),
            strategy = strategy.name(),
            "records loaded"
        );
        Ok(Self {
            store,
            records,
            strategy,
            notifier: LeaderboardNotifier::new(),
        })
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn notifier(&self) -> &LeaderboardNotifier {
        &self.notifier
    }

    pub fn sections(&self) -> &[Section] {
        &self.records.sections
    }

    pub fn teams(&self) -> &[Team] {
        &self.records.teams
    }

    pub fn add_section(&mut self, name: &str) -> Result<String, ServiceError> {
        let name = required(name, "section name")?;
        let id = self.records.insert_section(name);
        tracing::info!(id = %id, name, "section added");
        self.commit()?;
        Ok(id)
    }

    /// Teams of the removed section become sectionless.
    pub fn delete_section(&mut self, id: &str) -> Result<(), ServiceError> {
        let before = self.records.sections.len();
        self.records.sections.retain(|s| s.id != id);
        if self.records.sections.len() == before {
            return Err(ServiceError::UnknownSection(id.to_string()));
        }
        for team in &mut self.records.teams {
            if team.section_id.as_deref() == Some(id) {
                team.section_id = None;
            }
        }
        tracing::info!(id, "section deleted");
        self.commit()?;
        Ok(())
    }

    pub fn add_team(
        &mut self,
        name: &str,
        nationality: &str,
        section_id: Option<&str>,
    ) -> Result<String, ServiceError> {
        let name = required(name, "team name")?;
        let nationality = required(nationality, "nationality")?;
        let section_id = match section_id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(sid) if self.records.section(sid).is_none() => {
                return Err(ServiceError::UnknownSection(sid.to_string()));
            }
            other => other.map(str::to_string),
        };
        let id = self.records.insert_team(name, nationality, section_id);
        tracing::info!(id = %id, name, "team added");
        self.commit()?;
        Ok(id)
    }

    pub fn delete_team(&mut self, id: &str) -> Result<(), ServiceError> {
        let before = self.records.teams.len();
        self.records.teams.retain(|t| t.id != id);
        if self.records.teams.len() == before {
            return Err(ServiceError::UnknownTeam(id.to_string()));
        }
        tracing::info!(id, "team deleted");
        self.commit()?;
        Ok(())
    }

    pub fn set_grade(&mut self, team_id: &str, role: &str, grade: &str) -> Result<(), ServiceError> {
        let role = Role::from_label(required(role, "role")?);
        let grade = required(grade, "grade")?;
        let team = self
            .records
            .team_mut(team_id)
            .ok_or_else(|| ServiceError::UnknownTeam(team_id.to_string()))?;
        team.upsert_grade(role, grade);
        self.commit()?;
        Ok(())
    }

    pub fn upload_bulk(&mut self, text: &str) -> Result<BulkReport, ServiceError> {
        let (entries, mut issues) = parse_bulk(text);
        let mut report = apply_bulk(&mut self.records, &entries);
        issues.append(&mut report.issues);
        issues.sort_by_key(|i| i.index);
        for issue in &issues {
            tracing::warn!(entry = issue.index, reason = %issue.reason, "bulk entry skipped");
        }
        report.issues = issues;

        if report.processed == 0 {
            return Err(ServiceError::EmptyUpload {
                issues: report.issues.len(),
            });
        }
        tracing::info!(processed = report.processed, "bulk upload applied");
        self.commit()?;
        Ok(report)
    }

    /// Recomputes from the current records without modifying them.
    pub fn recompute(&mut self) -> Result<Vec<TeamResult>, ServiceError> {
        let results = self
            .strategy
            .rank(&self.records.teams, &self.records.sections);
        self.store.save_leaderboard(&results)?;
        self.notifier.publish(&results);
        Ok(results)
    }

    pub fn leaderboard(&self) -> Result<Vec<TeamResult>, ServiceError> {
        Ok(self.store.load_leaderboard()?)
    }

    fn commit(&mut self) -> Result<(), ServiceError> {
        self.store.save(&self.records)?;
        self.recompute()?;
        Ok(())
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../tests/src_inline/service.rs"]
mod tests;
