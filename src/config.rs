//! Loading a side navigation tree from JSON.

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::types::{NavChild, NavEntry};

/// Navigation tree as stored on disk or embedded in an app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub entries: Vec<NavEntry>,
}

impl NavConfig {
    /// Parse and validate a config from a JSON string
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::info!(entries = config.entries.len(), "loaded navigation config");
        Ok(config)
    }

    /// Read the whole of `reader` and parse it as JSON
    pub fn from_reader<R: Read>(mut reader: R) -> NavResult<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Reject links that cannot be rendered: every route and name must be non-empty.
    ///
    /// Duplicate nested names are allowed, but they share a list key, so they are
    /// reported with a warning.
    pub fn validate(&self) -> NavResult<()> {
        for entry in &self.entries {
            match entry {
                NavEntry::Link { route, name } => check_link(route, name)?,
                NavEntry::Expandable { label, nested } => {
                    let mut seen = HashSet::new();
                    for NavChild { route, name } in nested {
                        check_link(route, name)?;
                        if !seen.insert(name.as_str()) {
                            tracing::warn!(
                                label = %label,
                                name = %name,
                                "duplicate nested navigation name"
                            );
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_link(route: &str, name: &str) -> NavResult<()> {
    if route.is_empty() {
        return Err(NavError::EmptyRoute {
            name: name.to_string(),
        });
    }
    if name.is_empty() {
        return Err(NavError::EmptyName {
            route: route.to_string(),
        });
    }
    Ok(())
}
