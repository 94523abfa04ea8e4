use serde::{Deserialize, Serialize};

/// A single link nested under an expandable navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavChild {
    pub route: String,
    pub name: String,
}

impl NavChild {
    pub fn new(route: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            name: name.into(),
        }
    }
}

/// A top-level entry of a side navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEntry {
    /// Plain link row
    Link { route: String, name: String },
    /// Label row that toggles a list of nested links
    Expandable {
        label: String,
        #[serde(default)]
        nested: Vec<NavChild>,
    },
}

impl NavEntry {
    /// Text shown on the entry's row
    pub fn label(&self) -> &str {
        match self {
            NavEntry::Link { name, .. } => name,
            NavEntry::Expandable { label, .. } => label,
        }
    }
}
