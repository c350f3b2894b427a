//! Line protocol shared with out-of-process scorers:
//! `sectionId|sectionName|teamId|teamName|nationality|role:grade,role:grade`.

use std::collections::HashMap;

use crate::input::InputError;
use crate::model::records::{GradeEntry, Section, Team};
use crate::model::roles::Role;

pub fn encode_lines(teams: &[Team], sections: &[Section]) -> Result<String, InputError> {
    let names: HashMap<&str, &str> = sections
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();

    let mut out = String::new();
    for team in teams {
        let section_id = team.section_id.as_deref().unwrap_or("");
        let section_name = names.get(section_id).copied().unwrap_or(section_id);
        for field in [
            section_id,
            section_name,
            team.id.as_str(),
            team.name.as_str(),
            team.nationality.as_str(),
        ] {
            check_field(field, &team.id, &['|', '\n', '\r'])?;
        }
        out.push_str(&format!(
            "{section_id}|{section_name}|{}|{}|{}|",
            team.id, team.name, team.nationality
        ));
        for (i, g) in team.grades.iter().enumerate() {
            let role = g.role.label();
            check_field(role, &team.id, &['|', '\n', '\r', ',', ':'])?;
            check_field(&g.token, &team.id, &['|', '\n', '\r', ','])?;
            if role.trim().is_empty() {
                return Err(InputError::InvalidInput(format!(
                    "team {}: role {role:?} cannot be encoded",
                    team.id
                )));
            }
            if i > 0 {
                out.push(',');
            }
            out.push_str(&format!("{role}:{}", g.token));
        }
        out.push('\n');
    }
    Ok(out)
}

fn check_field(value: &str, team_id: &str, forbidden: &[char]) -> Result<(), InputError> {
    if value.contains(forbidden) {
        return Err(InputError::InvalidInput(format!(
            "team {team_id}: field {value:?} contains a delimiter"
        )));
    }
    Ok(())
}

/// Lines without `|` are ignored. Sections are collected from non-empty section ids.
pub fn decode_lines(text: &str) -> (Vec<Team>, Vec<Section>) {
    let mut teams = Vec::new();
    let mut sections: Vec<Section> = Vec::new();

    for line in text.lines() {
        if !line.contains('|') {
            continue;
        }
        let mut parts = line.splitn(6, '|');
        let section_id = parts.next().unwrap_or("").trim();
        let section_name = parts.next().unwrap_or("").trim();
        let team_id = parts.next().unwrap_or("").trim();
        let team_name = parts.next().unwrap_or("").trim();
        let nationality = parts.next().unwrap_or("").trim();
        let grades_raw = parts.next().unwrap_or("");

        if !section_id.is_empty() && !sections.iter().any(|s| s.id == section_id) {
            sections.push(Section {
                id: section_id.to_string(),
                name: if section_name.is_empty() {
                    section_id.to_string()
                } else {
                    section_name.to_string()
                },
            });
        }

        let grades = grades_raw
            .split(',')
            .filter_map(|pair| pair.split_once(':'))
            .map(|(role, token)| GradeEntry {
                role: Role::from_label(role.trim()),
                token: token.trim().to_string(),
            })
            .collect();

        teams.push(Team {
            id: team_id.to_string(),
            name: team_name.to_string(),
            nationality: nationality.to_string(),
            section_id: (!section_id.is_empty()).then(|| section_id.to_string()),
            grades,
        });
    }

    (teams, sections)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/lines.rs"]
mod tests;
