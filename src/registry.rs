//! Modifier registry and the best-match resolver.
//!
//! The host wires one registry per server and hands plugins a reference to
//! register against at load time. Resolution scans the registered set and
//! keeps the modifier whose declared target kind is the closest supertype
//! of the requested kind.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::group_type::GroupType;
use crate::modifier::GroupModifier;
use crate::modifiers::{DefaultGroupModifier, FolderModifier};

/// Registry of the relocation modifiers known to the server.
///
/// Modifiers are registered once during host or plugin load and are
/// effectively immutable afterwards. `resolve` reads a point-in-time
/// snapshot, so a scan racing a late registration sees an unspecified
/// view; no ordering is guaranteed across registrations.
#[derive(Debug, Default)]
pub struct ModifierRegistry {
    modifiers: RwLock<Vec<Arc<dyn GroupModifier>>>,
}

impl ModifierRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the modifiers every server carries.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(DefaultGroupModifier));
        registry.register(Arc::new(FolderModifier));
        registry
    }

    /// Register a modifier.
    pub fn register(&self, modifier: Arc<dyn GroupModifier>) {
        log::debug!(
            "registered modifier for group type '{}'",
            modifier.target_type().name()
        );
        self.modifiers.write().push(modifier);
    }

    /// All registered modifiers, in registration order.
    pub fn list(&self) -> Vec<Arc<dyn GroupModifier>> {
        self.modifiers.read().clone()
    }

    /// Number of registered modifiers.
    pub fn len(&self) -> usize {
        self.modifiers.read().len()
    }

    /// Whether no modifiers are registered.
    pub fn is_empty(&self) -> bool {
        self.modifiers.read().is_empty()
    }

    /// Resolve the most specific modifier for the given group kind.
    ///
    /// Every modifier whose declared target kind is a supertype of (or
    /// equal to) `target` is a candidate; among candidates the one with
    /// the most specific declared kind wins. `None` means no modifier
    /// covers the kind, which is a normal outcome: callers fall back to
    /// treating the relocation as unsupported.
    ///
    /// When two candidates declare kinds with no subtype relation to each
    /// other, the survivor depends on registration order. This is a known
    /// nondeterminism, not a tie-break rule; callers must not rely on
    /// which of the two wins.
    pub fn resolve(&self, target: &GroupType) -> Option<Arc<dyn GroupModifier>> {
        let mut best: Option<Arc<dyn GroupModifier>> = None;
        for modifier in self.modifiers.read().iter() {
            if !modifier.target_type().is_supertype_of(target) {
                continue;
            }
            match &best {
                None => best = Some(Arc::clone(modifier)),
                Some(current)
                    if current
                        .target_type()
                        .is_supertype_of(modifier.target_type()) =>
                {
                    // closer fit
                    best = Some(Arc::clone(modifier));
                }
                Some(_) => {}
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelocateError;
    use crate::group_type::{FOLDER, GROUP, ORG_FOLDER, ROOT};
    use crate::item::{Item, ItemGroup};

    /// Resolution-only stand-in with a distinguishing tag.
    #[derive(Debug)]
    struct TaggedModifier {
        tag: &'static str,
        target: &'static GroupType,
    }

    impl GroupModifier for TaggedModifier {
        fn target_type(&self) -> &'static GroupType {
            self.target
        }

        fn can_add(&self, _target: &dyn ItemGroup, _item: &dyn Item) -> bool {
            false
        }

        fn add(
            &self,
            target: &mut dyn ItemGroup,
            item: Box<dyn Item>,
        ) -> Result<Box<dyn Item>, RelocateError> {
            Err(RelocateError::Rejected {
                group: target.name().to_string(),
                item: item.name().to_string(),
            })
        }

        fn remove(
            &self,
            _target: &mut dyn ItemGroup,
            _item: &dyn Item,
        ) -> Result<(), RelocateError> {
            Ok(())
        }
    }

    fn tagged(tag: &'static str, target: &'static GroupType) -> Arc<dyn GroupModifier> {
        Arc::new(TaggedModifier { tag, target })
    }

    fn tag_of(modifier: &Arc<dyn GroupModifier>) -> String {
        format!("{:?}", modifier)
    }

    #[test]
    fn test_empty_registry_resolves_to_none() {
        let registry = ModifierRegistry::new();
        assert!(registry.resolve(&FOLDER).is_none());
    }

    #[test]
    fn test_single_matching_modifier_is_returned() {
        let registry = ModifierRegistry::new();
        registry.register(tagged("only", &FOLDER));

        let resolved = registry.resolve(&FOLDER).unwrap();
        assert!(tag_of(&resolved).contains("only"));
    }

    #[test]
    fn test_unrelated_kind_resolves_to_none() {
        let registry = ModifierRegistry::new();
        registry.register(tagged("folders", &FOLDER));

        assert!(registry.resolve(&ROOT).is_none());
    }

    #[test]
    fn test_most_specific_candidate_wins() {
        let registry = ModifierRegistry::new();
        registry.register(tagged("base", &GROUP));
        registry.register(tagged("derived", &FOLDER));

        let resolved = registry.resolve(&FOLDER).unwrap();
        assert!(tag_of(&resolved).contains("derived"));
        let resolved = registry.resolve(&GROUP).unwrap();
        assert!(tag_of(&resolved).contains("base"));
    }

    #[test]
    fn test_most_specific_wins_regardless_of_registration_order() {
        let registry = ModifierRegistry::new();
        registry.register(tagged("derived", &FOLDER));
        registry.register(tagged("base", &GROUP));

        let resolved = registry.resolve(&ORG_FOLDER).unwrap();
        assert!(tag_of(&resolved).contains("derived"));
    }

    #[test]
    fn test_supertype_covers_subtype_requests() {
        let registry = ModifierRegistry::new();
        registry.register(tagged("folders", &FOLDER));

        let resolved = registry.resolve(&ORG_FOLDER).unwrap();
        assert!(tag_of(&resolved).contains("folders"));
    }

    #[test]
    fn test_equal_declared_kinds_later_registration_wins() {
        let registry = ModifierRegistry::new();
        registry.register(tagged("first", &FOLDER));
        registry.register(tagged("second", &FOLDER));

        let resolved = registry.resolve(&FOLDER).unwrap();
        assert!(tag_of(&resolved).contains("second"));
    }

    #[test]
    fn test_resolve_is_readonly_and_idempotent() {
        let registry = ModifierRegistry::new();
        registry.register(tagged("base", &GROUP));
        registry.register(tagged("derived", &FOLDER));

        let first = registry.resolve(&FOLDER).unwrap();
        let second = registry.resolve(&FOLDER).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_with_defaults_covers_standard_kinds() {
        let registry = ModifierRegistry::with_defaults();

        // Folder kinds land on the folder modifier, everything else on
        // the fallback.
        let folder = registry.resolve(&ORG_FOLDER).unwrap();
        assert!(tag_of(&folder).contains("FolderModifier"));
        let root = registry.resolve(&ROOT).unwrap();
        assert!(tag_of(&root).contains("DefaultGroupModifier"));
    }
}
