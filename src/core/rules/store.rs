//! Rule Persistence
//!
//! Loads and saves the ordered rule list as one JSON document.
//! Storage: `{dir}/clip_preview_rules.json`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::fs::atomic_write_json_pretty;
use crate::core::rules::{PreviewRule, RuleSet};
use crate::core::{AssetPath, CoreResult};

/// Rule file schema version for migration support
pub const RULES_VERSION: u32 = 1;

/// Rule file name, fixed relative to the store directory
pub const RULES_FILE: &str = "clip_preview_rules.json";

/// Persisted form of one rule. The resolved object handle is derived state
/// and is never written.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRule {
    #[serde(default)]
    clip_path_prefix: String,
    #[serde(default)]
    preview_asset_path: AssetPath,
}

/// On-disk rule document
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RulesFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    rules: Vec<StoredRule>,
}

fn default_version() -> u32 {
    RULES_VERSION
}

/// Loads and saves the ordered rule list for one store directory.
pub struct RuleStore {
    rules_path: PathBuf,
}

impl RuleStore {
    /// Creates a store rooted at `dir`; the backing file is
    /// [`RULES_FILE`] inside it.
    pub fn new(dir: &Path) -> Self {
        Self {
            rules_path: dir.join(RULES_FILE),
        }
    }

    /// Returns the backing file path
    pub fn rules_path(&self) -> &Path {
        &self.rules_path
    }

    /// Loads the rule list, preserving order.
    ///
    /// A missing backing file is not an error: it yields an empty rule set.
    /// A malformed file is surfaced to the caller. Cached object handles
    /// start out unresolved; the session re-resolves them.
    pub fn load<O>(&self) -> CoreResult<RuleSet<O>> {
        if !self.rules_path.exists() {
            info!("Rule file not found, starting with an empty rule set");
            return Ok(RuleSet::new());
        }

        let content = std::fs::read_to_string(&self.rules_path)?;
        let file: RulesFile = serde_json::from_str(&content)?;

        info!(
            "Loaded {} preview rules from {}",
            file.rules.len(),
            self.rules_path.display()
        );
        Ok(RuleSet::from_rules(
            file.rules
                .into_iter()
                .map(|rule| PreviewRule {
                    clip_path_prefix: rule.clip_path_prefix,
                    preview_asset_path: rule.preview_asset_path,
                    preview_object: None,
                })
                .collect(),
        ))
    }

    /// Saves the whole rule list, overwriting the backing file atomically.
    pub fn save<O>(&self, rules: &RuleSet<O>) -> CoreResult<()> {
        let file = RulesFile {
            version: RULES_VERSION,
            rules: rules
                .iter()
                .map(|rule| StoredRule {
                    clip_path_prefix: rule.clip_path_prefix.clone(),
                    preview_asset_path: rule.preview_asset_path.clone(),
                })
                .collect(),
        };

        atomic_write_json_pretty(&self.rules_path, &file)?;
        info!(
            "Saved {} preview rules to {}",
            file.rules.len(),
            self.rules_path.display()
        );
        Ok(())
    }
}
