use serde::{Deserialize, Serialize};

use crate::model::roles::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    #[serde(rename = "task")]
    pub role: Role,
    #[serde(rename = "grade")]
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub nationality: String,
    #[serde(rename = "section", default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
}

impl Team {
    /// Last write per role wins; a new role is appended. The last entry for a
    /// role is the one scored, so it is updated and earlier duplicates dropped.
    pub fn upsert_grade(&mut self, role: Role, token: &str) {
        let token = token.trim().to_string();
        let Some(last) = self.grades.iter().rposition(|g| g.role == role) else {
            self.grades.push(GradeEntry { role, token });
            return;
        };
        self.grades[last].token = token;
        let mut idx = 0;
        self.grades.retain(|g| {
            let keep = g.role != role || idx == last;
            idx += 1;
            keep
        });
    }

    pub fn grade_for(&self, role: &Role) -> Option<&GradeEntry> {
        self.grades.iter().rev().find(|g| &g.role == role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
}

/// Durable records, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub next_id: u64,
}

impl Records {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_by_name(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn allocate_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    pub fn insert_section(&mut self, name: &str) -> String {
        let id = self.allocate_id("s");
        self.sections.push(Section {
            id: id.clone(),
            name: name.to_string(),
        });
        id
    }

    pub fn insert_team(&mut self, name: &str, nationality: &str, section_id: Option<String>) -> String {
        let id = self.allocate_id("t");
        self.teams.push(Team {
            id: id.clone(),
            name: name.to_string(),
            nationality: nationality.to_string(),
            section_id,
            grades: Vec::new(),
        });
        id
    }
}
