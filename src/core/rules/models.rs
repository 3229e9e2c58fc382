//! Rule Model Definitions
//!
//! Defines the in-memory rule types. `O` is the host's opaque object handle
//! type (see [`crate::core::host::EditorHost`]).

use crate::core::{AssetPath, CoreError, CoreResult};

/// One (clip path prefix, preview target) association.
#[derive(Clone, Debug)]
pub struct PreviewRule<O> {
    /// Literal prefix matched against a clip's asset path. Case-sensitive,
    /// no globbing; the empty prefix matches every path.
    pub clip_path_prefix: String,

    /// Canonical asset path of the preview object. Rewritten whenever the
    /// user picks a different object for this rule.
    pub preview_asset_path: AssetPath,

    /// Cached host handle for `preview_asset_path`. Derived state: never
    /// persisted, may be `None` between saves/loads, re-resolved lazily.
    pub preview_object: Option<O>,
}

impl<O> PreviewRule<O> {
    /// Creates a rule with no cached handle.
    pub fn new(clip_path_prefix: &str, preview_asset_path: &str) -> Self {
        Self {
            clip_path_prefix: clip_path_prefix.to_string(),
            preview_asset_path: preview_asset_path.to_string(),
            preview_object: None,
        }
    }

    /// Creates the blank rule appended by the panel's add-row action.
    pub fn empty() -> Self {
        Self::new("", "")
    }

    /// Whether this rule applies to `clip_path`.
    ///
    /// Plain string prefix comparison, deliberately: prefix `"Assets/Char"`
    /// matches `"Assets/Char2/Run.anim"` too.
    pub fn matches(&self, clip_path: &str) -> bool {
        clip_path.starts_with(&self.clip_path_prefix)
    }
}

/// Ordered collection of preview rules.
///
/// Order is part of the data: resolution is first-match-wins, and the order
/// survives save/load round-trips.
#[derive(Clone, Debug)]
pub struct RuleSet<O> {
    rules: Vec<PreviewRule<O>>,
}

impl<O> RuleSet<O> {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a rule set from an already-ordered list.
    pub fn from_rules(rules: Vec<PreviewRule<O>>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PreviewRule<O>> {
        self.rules.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PreviewRule<O>> {
        self.rules.get_mut(index)
    }

    /// Appends a rule at the end of the list.
    pub fn push(&mut self, rule: PreviewRule<O>) {
        self.rules.push(rule);
    }

    /// Removes one rule by index, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> CoreResult<PreviewRule<O>> {
        if index >= self.rules.len() {
            return Err(CoreError::RuleIndexOutOfBounds(index));
        }
        Ok(self.rules.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreviewRule<O>> {
        self.rules.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PreviewRule<O>> {
        self.rules.iter_mut()
    }
}

impl<O> Default for RuleSet<O> {
    fn default() -> Self {
        Self::new()
    }
}
