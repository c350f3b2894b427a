use std::fmt;

use serde::{Deserialize, Serialize};

/// A judged responsibility. Labels outside the four scored roles are kept
/// for display and never enter the weighted total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    ScienceReport,
    PresentationReport,
    Opposition,
    Review,
    Other(String),
}

impl Role {
    pub fn from_label(label: &str) -> Self {
        match label {
            "reporter_sci" => Role::ScienceReport,
            "reporter_pres" => Role::PresentationReport,
            "opponent" => Role::Opposition,
            "reviewer" => Role::Review,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Role::ScienceReport => "reporter_sci",
            Role::PresentationReport => "reporter_pres",
            Role::Opposition => "opponent",
            Role::Review => "reviewer",
            Role::Other(name) => name,
        }
    }

    pub fn is_scored(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

pub fn scored_roles() -> &'static [Role] {
    &[
        Role::ScienceReport,
        Role::PresentationReport,
        Role::Opposition,
        Role::Review,
    ]
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from_label(&value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Other(name) => name,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
