//! Preview Resolution
//!
//! Maps a clip's asset path to a preview object via first-matching-rule
//! lookup.

use tracing::debug;

use crate::core::host::EditorHost;
use crate::core::rules::RuleSet;

/// Returns the preview object for `clip_path`, or `None` when no rule
/// matches.
///
/// Rules are scanned in list order and the **first** rule whose prefix is a
/// literal prefix of `clip_path` wins, never the longest prefix. If the
/// matched rule's cached handle is unresolved it is re-resolved from the
/// stored asset path and cached back onto the rule; a path the host cannot
/// load resolves to `None` without consulting later rules, and is retried
/// on the next call.
pub fn resolve_preview<H: EditorHost>(
    rules: &mut RuleSet<H::Object>,
    clip_path: &str,
    host: &H,
) -> Option<H::Object> {
    for rule in rules.iter_mut() {
        if !rule.matches(clip_path) {
            continue;
        }
        if rule.preview_object.is_none() {
            rule.preview_object = host.load_asset(&rule.preview_asset_path);
            if rule.preview_object.is_none() {
                debug!(
                    "Preview asset not resolvable: {}",
                    rule.preview_asset_path
                );
            }
        }
        return rule.preview_object.clone();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::testing::ScriptedHost;
    use crate::core::rules::PreviewRule;

    const HERO: u32 = 1;
    const DEFAULT: u32 = 2;

    fn host_with_prefabs() -> ScriptedHost {
        ScriptedHost::new()
            .with_asset("Assets/Prefabs/Hero.prefab", HERO)
            .with_asset("Assets/Prefabs/Default.prefab", DEFAULT)
    }

    fn char_then_catchall() -> RuleSet<u32> {
        RuleSet::from_rules(vec![
            PreviewRule::new("Assets/Char/", "Assets/Prefabs/Hero.prefab"),
            PreviewRule::new("Assets/", "Assets/Prefabs/Default.prefab"),
        ])
    }

    #[test]
    fn first_matching_rule_wins() {
        let host = host_with_prefabs();
        let mut rules = char_then_catchall();

        assert_eq!(
            resolve_preview(&mut rules, "Assets/Char/Run.anim", &host),
            Some(HERO)
        );
        assert_eq!(
            resolve_preview(&mut rules, "Assets/Env/Sway.anim", &host),
            Some(DEFAULT)
        );
    }

    #[test]
    fn list_order_beats_prefix_specificity() {
        let host = host_with_prefabs();
        // Catch-all first: it shadows the more specific rule below it.
        let mut rules = RuleSet::from_rules(vec![
            PreviewRule::new("Assets/", "Assets/Prefabs/Default.prefab"),
            PreviewRule::new("Assets/Char/", "Assets/Prefabs/Hero.prefab"),
        ]);

        assert_eq!(
            resolve_preview(&mut rules, "Assets/Char/Run.anim", &host),
            Some(DEFAULT)
        );
    }

    #[test]
    fn no_matching_rule_is_not_an_error() {
        let host = host_with_prefabs();
        let mut rules = char_then_catchall();

        assert_eq!(resolve_preview(&mut rules, "Other/Clip.anim", &host), None);
    }

    #[test]
    fn resolution_is_cached_on_the_rule() {
        let mut host = host_with_prefabs();
        let mut rules = char_then_catchall();

        assert_eq!(
            resolve_preview(&mut rules, "Assets/Char/Run.anim", &host),
            Some(HERO)
        );
        assert_eq!(rules.get(0).unwrap().preview_object, Some(HERO));

        // The cached handle is served even after the host forgets the asset.
        host.remove_asset("Assets/Prefabs/Hero.prefab");
        assert_eq!(
            resolve_preview(&mut rules, "Assets/Char/Run.anim", &host),
            Some(HERO)
        );
    }

    #[test]
    fn unresolvable_reference_stays_unresolved_and_is_retried() {
        let mut host = ScriptedHost::new();
        let mut rules = char_then_catchall();

        assert_eq!(
            resolve_preview(&mut rules, "Assets/Char/Run.anim", &host),
            None
        );
        assert!(rules.get(0).unwrap().preview_object.is_none());

        host.insert_asset("Assets/Prefabs/Hero.prefab", HERO);
        assert_eq!(
            resolve_preview(&mut rules, "Assets/Char/Run.anim", &host),
            Some(HERO)
        );
    }

    #[test]
    fn matched_rule_shadows_later_rules_even_when_unresolvable() {
        let host = ScriptedHost::new().with_asset("Assets/Prefabs/Default.prefab", DEFAULT);
        let mut rules = RuleSet::from_rules(vec![
            PreviewRule::new("Assets/Char/", "Assets/Prefabs/Missing.prefab"),
            PreviewRule::new("Assets/", "Assets/Prefabs/Default.prefab"),
        ]);

        // The first rule matches and stays matched; its unresolvable target
        // does not fall through to the catch-all.
        assert_eq!(
            resolve_preview(&mut rules, "Assets/Char/Run.anim", &host),
            None
        );
    }

    #[test]
    fn empty_prefix_rule_catches_everything() {
        let host = host_with_prefabs();
        let mut rules = RuleSet::from_rules(vec![PreviewRule::new(
            "",
            "Assets/Prefabs/Default.prefab",
        )]);

        assert_eq!(
            resolve_preview(&mut rules, "Anything/At/All.anim", &host),
            Some(DEFAULT)
        );
    }
}
