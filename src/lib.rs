//! Previewbind Core Library
//!
//! Rule-driven preview object binding for animation clip inspector panes.
//! An ordered list of (clip path prefix, preview asset path) rules is
//! persisted as JSON and consulted once per editor refresh cycle to decide
//! which object the host's clip preview pane should show.
//!
//! The host editor itself is not part of this crate: everything it must
//! provide (finding the active clip inspector, mapping asset handles to
//! canonical paths, and the actual preview binding call) sits behind the
//! [`EditorHost`] trait, implemented by a host-specific adapter. Host
//! adapters typically reach into undocumented editor internals and break
//! across host versions; keeping them behind this one seam keeps that
//! breakage out of the rule engine.
//!
//! Typical embedding:
//!
//! ```ignore
//! let store = RuleStore::new(project_dir);
//! let mut session = PreviewSession::open(store, &host)?;
//! // per editor refresh cycle:
//! session.tick(&mut host);
//! // on panel close:
//! if session.has_unsaved_changes() { /* prompt, then session.save()? */ }
//! ```

pub mod core;

pub use crate::core::host::EditorHost;
pub use crate::core::preview::{resolve_preview, should_rebind, PreviewSession, TickOutcome};
pub use crate::core::rules::{PreviewRule, RuleSet, RuleStore};
pub use crate::core::{CoreError, CoreResult};
