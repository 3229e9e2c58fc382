//! Editor Host Capability
//!
//! The narrow seam between the rule engine and the host editor. Everything
//! the engine needs from the host (enumerating inspector panes, mapping
//! asset handles to canonical paths, and the preview binding call itself)
//! goes through this trait, so a broken host adapter never leaks into the
//! rule engine. Host adapters usually poke at private editor internals and
//! are expected to break across host versions.

use crate::core::AssetPath;

/// Host editor capabilities required by the preview engine.
///
/// All calls run on the host's single UI/update thread; implementations do
/// not need to be thread-safe.
pub trait EditorHost {
    /// Handle identifying one open clip inspector pane. Identity comparison
    /// is used to detect that the user switched to a different clip.
    type Inspector: Clone + PartialEq;

    /// Opaque handle to an asset object usable as a preview target.
    type Object: Clone + PartialEq;

    /// Returns the inspector pane currently showing an animation clip, if
    /// any.
    fn find_active_clip_inspector(&mut self) -> Option<Self::Inspector>;

    /// Returns the canonical asset path of the clip shown in `inspector`.
    fn clip_asset_path(&self, inspector: &Self::Inspector) -> Option<AssetPath>;

    /// Loads the asset at `path`, returning `None` when it does not exist
    /// or cannot be loaded.
    fn load_asset(&self, path: &str) -> Option<Self::Object>;

    /// Returns the canonical asset path for `object`, `None` when the host
    /// cannot map it back to an asset.
    fn asset_path(&self, object: &Self::Object) -> Option<AssetPath>;

    /// Pushes `object` into the inspector's preview pane (`None` unbinds).
    ///
    /// Returns `false` when the host's preview binding is unavailable or
    /// rejects the call. The binding reaches into host internals that may
    /// change shape between host versions, so callers must treat failure as
    /// an expected outcome.
    fn bind_preview_object(
        &mut self,
        inspector: &Self::Inspector,
        object: Option<&Self::Object>,
    ) -> bool;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory host double shared by the engine's unit tests.

    use std::collections::BTreeMap;

    use super::EditorHost;
    use crate::core::AssetPath;

    /// An inspector pane showing one clip.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) struct InspectorPane {
        pub id: u32,
        pub clip_path: String,
    }

    /// Scriptable in-memory editor host. Assets are (path -> handle)
    /// entries; every accepted binding call is recorded.
    pub(crate) struct ScriptedHost {
        assets: BTreeMap<AssetPath, u32>,
        pub active: Option<InspectorPane>,
        pub accept_bindings: bool,
        pub bound: Vec<Option<u32>>,
    }

    impl ScriptedHost {
        pub fn new() -> Self {
            Self {
                assets: BTreeMap::new(),
                active: None,
                accept_bindings: true,
                bound: Vec::new(),
            }
        }

        pub fn with_asset(mut self, path: &str, handle: u32) -> Self {
            self.assets.insert(path.to_string(), handle);
            self
        }

        pub fn insert_asset(&mut self, path: &str, handle: u32) {
            self.assets.insert(path.to_string(), handle);
        }

        pub fn remove_asset(&mut self, path: &str) {
            self.assets.remove(path);
        }

        pub fn show_clip(&mut self, pane_id: u32, clip_path: &str) {
            self.active = Some(InspectorPane {
                id: pane_id,
                clip_path: clip_path.to_string(),
            });
        }

        pub fn close_inspector(&mut self) {
            self.active = None;
        }
    }

    impl EditorHost for ScriptedHost {
        type Inspector = InspectorPane;
        type Object = u32;

        fn find_active_clip_inspector(&mut self) -> Option<InspectorPane> {
            self.active.clone()
        }

        fn clip_asset_path(&self, inspector: &InspectorPane) -> Option<AssetPath> {
            Some(inspector.clip_path.clone())
        }

        fn load_asset(&self, path: &str) -> Option<u32> {
            self.assets.get(path).copied()
        }

        fn asset_path(&self, object: &u32) -> Option<AssetPath> {
            self.assets
                .iter()
                .find_map(|(path, handle)| (handle == object).then(|| path.clone()))
        }

        fn bind_preview_object(
            &mut self,
            _inspector: &InspectorPane,
            object: Option<&u32>,
        ) -> bool {
            if !self.accept_bindings {
                return false;
            }
            self.bound.push(object.copied());
            true
        }
    }
}
