//! Standard-json input (`solc --standard-json`).
//!
//! Only the parts that matter for version selection are modelled; the full
//! document is handed to solc unchanged.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ResolveError;
use crate::pragma;
use crate::range::ANY;

#[derive(Debug, Clone, Deserialize)]
pub struct StandardJsonInput {
    #[serde(default)]
    pub sources: BTreeMap<String, SourceEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceEntry {
    #[serde(default)]
    pub content: Option<String>,
}

impl StandardJsonInput {
    /// Version rules of every embedded source, by source name.
    ///
    /// All sources are compiled together, so the chosen version has to
    /// satisfy every one of them. Sources without declarations add nothing;
    /// if no source declares anything the result is `["*"]`.
    pub fn source_rules(&self) -> Vec<String> {
        let mut rules = Vec::new();
        for (name, entry) in &self.sources {
            let Some(content) = entry.content.as_deref() else {
                tracing::debug!(source = %name, "source has no inline content, skipping");
                continue;
            };
            rules.extend(
                pragma::rules_from_source(content)
                    .into_iter()
                    .filter(|rule| rule != ANY),
            );
        }
        if rules.is_empty() {
            rules.push(ANY.to_string());
        }
        rules
    }
}

impl FromStr for StandardJsonInput {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
