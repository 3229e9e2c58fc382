//! Preview Rules
//!
//! The ordered rule list mapping clip path prefixes to preview targets,
//! and its JSON-backed persistence.

mod models;
mod store;

pub use models::{PreviewRule, RuleSet};
pub use store::{RuleStore, RULES_FILE, RULES_VERSION};
