//! Preview Session
//!
//! Tick-driven bookkeeping between the host editor's rule panel and the
//! rule engine: edit operations, the two dirty flags, and the per-tick push
//! into the host preview binding.
//!
//! Two flags with different lifetimes drive everything:
//! - the *unsaved* flag is set by any edit and cleared only by an explicit
//!   save (or by reloading); the host panel uses it for its save-on-close
//!   prompt,
//! - the *apply* flag is set by any edit and by a (re)load, and is cleared
//!   once a rebind has been pushed at a live inspector.

use tracing::warn;

use crate::core::host::EditorHost;
use crate::core::preview::resolve_preview;
use crate::core::rules::{PreviewRule, RuleSet, RuleStore};
use crate::core::{CoreError, CoreResult};

/// What a single tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do: no pending edits and the inspected clip did not
    /// change.
    Idle,
    /// A rebind is pending but no clip inspector is open to push it to. The
    /// rebind stays pending.
    NoInspector,
    /// The preview binding was updated. `matched` is `false` when no rule
    /// matched and the preview was explicitly unbound.
    Rebound { matched: bool },
    /// The host rejected the preview binding call. Rule state is unchanged;
    /// the failure is not retried.
    BindingFailed,
}

/// Pure per-tick decision: rebind when the inspected clip changed or when
/// rule state changed.
pub fn should_rebind(inspector_changed: bool, rules_dirty: bool) -> bool {
    inspector_changed || rules_dirty
}

/// One editing session over the rule list, owned by the host's rule panel.
///
/// All methods run on the host's single UI/update thread.
pub struct PreviewSession<H: EditorHost> {
    store: RuleStore,
    rules: RuleSet<H::Object>,
    dirty_for_save: bool,
    dirty_for_apply: bool,
    last_inspector: Option<H::Inspector>,
}

impl<H: EditorHost> PreviewSession<H> {
    /// Opens a session, loading rules from the store. A missing rule file
    /// yields an empty session.
    pub fn open(store: RuleStore, host: &H) -> CoreResult<Self> {
        let mut session = Self {
            store,
            rules: RuleSet::new(),
            dirty_for_save: false,
            dirty_for_apply: false,
            last_inspector: None,
        };
        session.reload(host)?;
        Ok(session)
    }

    /// Reloads rules from disk, dropping unsaved edits.
    ///
    /// Each rule's cached handle is re-resolved from its stored asset path;
    /// paths the host cannot load stay unresolved and are retried lazily.
    /// The next tick rebinds the preview.
    pub fn reload(&mut self, host: &H) -> CoreResult<()> {
        let mut rules: RuleSet<H::Object> = self.store.load()?;
        for rule in rules.iter_mut() {
            rule.preview_object = host.load_asset(&rule.preview_asset_path);
        }
        self.rules = rules;
        self.dirty_for_save = false;
        self.dirty_for_apply = true;
        Ok(())
    }

    /// Saves the current rules, clearing the unsaved-changes flag.
    pub fn save(&mut self) -> CoreResult<()> {
        self.store.save(&self.rules)?;
        self.dirty_for_save = false;
        Ok(())
    }

    /// The current rule list, in resolution order.
    pub fn rules(&self) -> &RuleSet<H::Object> {
        &self.rules
    }

    /// Whether there are edits not yet written to disk. The host panel
    /// checks this on close to drive its save confirmation prompt.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty_for_save
    }

    /// Appends a blank rule row.
    pub fn add_rule(&mut self) {
        self.rules.push(PreviewRule::empty());
        self.mark_edited();
    }

    /// Removes one rule by index, preserving the order of the rest.
    pub fn remove_rule(&mut self, index: usize) -> CoreResult<()> {
        self.rules.remove(index)?;
        self.mark_edited();
        Ok(())
    }

    /// Rewrites a rule's clip path prefix. An unchanged value is a no-op
    /// and does not mark the session dirty.
    pub fn set_rule_prefix(&mut self, index: usize, prefix: &str) -> CoreResult<()> {
        let rule = self
            .rules
            .get_mut(index)
            .ok_or(CoreError::RuleIndexOutOfBounds(index))?;
        if rule.clip_path_prefix == prefix {
            return Ok(());
        }
        rule.clip_path_prefix = prefix.to_string();
        self.mark_edited();
        Ok(())
    }

    /// Replaces a rule's preview object from the panel's object picker.
    ///
    /// The stored asset path is rewritten to the new object's canonical
    /// path (empty when the picker was cleared or the host cannot map the
    /// object back to an asset). An unchanged object is a no-op.
    pub fn set_rule_target(
        &mut self,
        index: usize,
        object: Option<H::Object>,
        host: &H,
    ) -> CoreResult<()> {
        let rule = self
            .rules
            .get_mut(index)
            .ok_or(CoreError::RuleIndexOutOfBounds(index))?;
        if rule.preview_object == object {
            return Ok(());
        }
        rule.preview_asset_path = object
            .as_ref()
            .and_then(|o| host.asset_path(o))
            .unwrap_or_default();
        rule.preview_object = object;
        self.mark_edited();
        Ok(())
    }

    /// Runs one editor refresh cycle.
    ///
    /// Rebinds the preview when the inspected clip changed since the last
    /// tick or when edits are pending, resolving through the rule list and
    /// pushing the result (a miss pushes an explicit unbind) into the host
    /// preview binding.
    pub fn tick(&mut self, host: &mut H) -> TickOutcome {
        let inspector = host.find_active_clip_inspector();
        let inspector_changed = inspector.is_some() && inspector != self.last_inspector;

        let outcome = if !should_rebind(inspector_changed, self.dirty_for_apply) {
            TickOutcome::Idle
        } else {
            match &inspector {
                None => TickOutcome::NoInspector,
                Some(pane) => {
                    let clip_path = host.clip_asset_path(pane).unwrap_or_default();
                    let object = resolve_preview(&mut self.rules, &clip_path, host);
                    let matched = object.is_some();
                    // Pending edits are consumed by the push attempt either
                    // way; a rejected binding is surfaced, not retried.
                    self.dirty_for_apply = false;
                    if host.bind_preview_object(pane, object.as_ref()) {
                        TickOutcome::Rebound { matched }
                    } else {
                        warn!("Host rejected preview binding for clip {clip_path}");
                        TickOutcome::BindingFailed
                    }
                }
            }
        };

        self.last_inspector = inspector;
        outcome
    }

    fn mark_edited(&mut self) {
        self.dirty_for_save = true;
        self.dirty_for_apply = true;
    }
}
