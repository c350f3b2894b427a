//! Bulk grade upload: `entry;entry;...` where an entry is
//! `identifier:role:grade,role:grade` and the identifier is a team id or a
//! `section|team|nationality` triple.

use crate::model::records::Records;
use crate::model::roles::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkTarget {
    TeamId(String),
    Named {
        section: String,
        team: String,
        nationality: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry {
    pub index: usize,
    pub target: BulkTarget,
    pub grades: Vec<(Role, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkIssue {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    pub processed: usize,
    pub issues: Vec<BulkIssue>,
}

pub fn parse_bulk(text: &str) -> (Vec<BulkEntry>, Vec<BulkIssue>) {
    let mut entries = Vec::new();
    let mut issues = Vec::new();

    for (index, raw) in text.split(';').enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match parse_entry(index, raw) {
            Ok(entry) => entries.push(entry),
            Err(reason) => issues.push(BulkIssue { index, reason }),
        }
    }

    (entries, issues)
}

fn parse_entry(index: usize, raw: &str) -> Result<BulkEntry, String> {
    let (ident, grade_list) = raw
        .split_once(':')
        .ok_or_else(|| format!("missing ':' after identifier in {raw:?}"))?;
    let ident = ident.trim();
    if ident.is_empty() {
        return Err("empty identifier".to_string());
    }

    let target = if ident.contains('|') {
        let parts: Vec<&str> = ident.split('|').map(str::trim).collect();
        let [section, team, nationality] = parts.as_slice() else {
            return Err(format!("expected section|team|nationality, got {ident:?}"));
        };
        if team.is_empty() {
            return Err(format!("empty team name in {ident:?}"));
        }
        BulkTarget::Named {
            section: section.to_string(),
            team: team.to_string(),
            nationality: nationality.to_string(),
        }
    } else {
        BulkTarget::TeamId(ident.to_string())
    };

    let mut grades = Vec::new();
    for pair in grade_list.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        match pair.split_once(':') {
            Some((role, token)) if !role.trim().is_empty() && !token.trim().is_empty() => {
                grades.push((Role::from_label(role.trim()), token.trim().to_string()));
            }
            _ => {
                tracing::warn!(entry = index, pair, "skipping malformed role:grade pair");
            }
        }
    }
    if grades.is_empty() {
        return Err(format!("no role:grade pairs for {ident:?}"));
    }

    Ok(BulkEntry {
        index,
        target,
        grades,
    })
}

/// Upserts every entry into `records`. Re-applying the same text leaves the records unchanged.
pub fn apply_bulk(records: &mut Records, entries: &[BulkEntry]) -> BulkReport {
    let mut report = BulkReport::default();

    for entry in entries {
        let team_id = match &entry.target {
            BulkTarget::TeamId(id) => {
                if records.team(id).is_none() {
                    report.issues.push(BulkIssue {
                        index: entry.index,
                        reason: format!("unknown team id {id:?}"),
                    });
                    continue;
                }
                id.clone()
            }
            BulkTarget::Named {
                section,
                team,
                nationality,
            } => resolve_named(records, section, team, nationality),
        };

        if let Some(team) = records.team_mut(&team_id) {
            for (role, token) in &entry.grades {
                team.upsert_grade(role.clone(), token);
            }
            report.processed += 1;
        }
    }

    report
}

fn resolve_named(records: &mut Records, section: &str, team: &str, nationality: &str) -> String {
    let section_id = if section.is_empty() {
        None
    } else {
        Some(match records.section_by_name(section) {
            Some(s) => s.id.clone(),
            None => {
                let id = records.insert_section(section);
                tracing::info!(section, id = %id, "created section from bulk upload");
                id
            }
        })
    };

    let existing = records
        .teams
        .iter()
        .position(|t| t.name == team && t.section_id == section_id);
    match existing {
        Some(pos) => {
            let t = &mut records.teams[pos];
            if !nationality.is_empty() {
                t.nationality = nationality.to_string();
            }
            t.id.clone()
        }
        None => {
            let id = records.insert_team(team, nationality, section_id);
            tracing::info!(team, id = %id, "created team from bulk upload");
            id
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/bulk.rs"]
mod tests;
