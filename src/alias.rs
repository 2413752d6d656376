use log::info;
use serde_json::from_slice;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::data::{DataError, Dataset, MatchRecord};

/// Country-name consolidation table: historical name -> current name.
/// The same table is applied to winners and runner-ups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasMap {
    aliases: BTreeMap<String, String>,
}

impl AliasMap {
    /// Table used when no aliases.json sits next to the dataset.
    pub fn default_table() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert("West Germany".to_string(), "Germany".to_string());
        Self { aliases }
    }

    /// Reads aliases.json (a string -> string object). A missing file falls
    /// back to the built-in table; a malformed one is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "no alias table at {}, using built-in defaults",
                    path.as_ref().display()
                );
                return Ok(Self::default_table());
            }
            Err(e) => return Err(e.into()),
        };
        let aliases: BTreeMap<String, String> = from_slice(&raw)?;
        Self::validated(aliases)
    }

    /// Rejects chained aliases (a target that is itself remapped); with none
    /// of those, normalizing twice is the same as normalizing once.
    fn validated(aliases: BTreeMap<String, String>) -> Result<Self, DataError> {
        for (from, to) in &aliases {
            if let Some(next) = aliases.get(to) {
                if next != to {
                    return Err(DataError::AliasChain {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
        Ok(Self { aliases })
    }

    /// Canonical form of a single name; unknown names pass through.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Rewrites winner and runner-up through the same table in one pass.
    /// The input dataset is left untouched.
    pub fn normalize(&self, dataset: &Dataset) -> Dataset {
        let records = dataset
            .records()
            .iter()
            .map(|r| MatchRecord {
                year: r.year,
                winner: self.canonical(&r.winner).to_string(),
                runner_up: self.canonical(&r.runner_up).to_string(),
            })
            .collect();
        Dataset::from_records(records)
    }
}
