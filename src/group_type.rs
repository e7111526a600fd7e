//! Container-type descriptors.
//!
//! The server cannot ask the language whether one group kind is a subtype
//! of another, so every kind of container group carries a static
//! [`GroupType`] descriptor. Descriptors form a forest through `parent`
//! links, and walking a chain answers the one question the resolver needs:
//! is this declared target a supertype of the requested kind?

/// A static descriptor for a kind of container group.
///
/// Descriptors are declared once as `static` items and referenced by every
/// group instance and modifier of that kind. Identity is by name, so a
/// plugin can re-declare a built-in kind without sharing the static.
///
/// # Example
///
/// ```rust
/// use convoy_relocate::group_type::{GroupType, FOLDER};
///
/// static LOCKED_FOLDER: GroupType = GroupType::subtype("locked-folder", &FOLDER);
///
/// assert!(FOLDER.is_supertype_of(&LOCKED_FOLDER));
/// assert!(!LOCKED_FOLDER.is_supertype_of(&FOLDER));
/// ```
#[derive(Debug)]
pub struct GroupType {
    name: &'static str,
    parent: Option<&'static GroupType>,
}

impl GroupType {
    /// Declare a descriptor with no supertype.
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Declare a descriptor as a subtype of `parent`.
    pub const fn subtype(name: &'static str, parent: &'static GroupType) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// The stable name of this kind.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The direct supertype, if any.
    pub fn parent(&self) -> Option<&'static GroupType> {
        self.parent
    }

    /// Returns `true` if `self` is `other` or an ancestor of `other`.
    ///
    /// This is the specificity relation used during modifier resolution: a
    /// subtype is more specific than its supertypes, and kinds on separate
    /// branches are incomparable.
    pub fn is_supertype_of(&self, other: &GroupType) -> bool {
        let mut cursor = Some(other);
        while let Some(ty) = cursor {
            if ty.name == self.name {
                return true;
            }
            cursor = ty.parent;
        }
        false
    }
}

impl PartialEq for GroupType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for GroupType {}

// ---------------------------------------------------------------------------
// Built-in kinds
// ---------------------------------------------------------------------------

/// Any container group; every other kind descends from it.
pub static GROUP: GroupType = GroupType::root("group");

/// The server's top-level job tree.
pub static ROOT: GroupType = GroupType::subtype("root", &GROUP);

/// A nestable folder.
pub static FOLDER: GroupType = GroupType::subtype("folder", &GROUP);

/// An organization folder: a folder populated from an SCM organization.
pub static ORG_FOLDER: GroupType = GroupType::subtype("org-folder", &FOLDER);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supertype_is_reflexive() {
        assert!(FOLDER.is_supertype_of(&FOLDER));
        assert!(GROUP.is_supertype_of(&GROUP));
    }

    #[test]
    fn test_supertype_walks_the_chain() {
        assert!(GROUP.is_supertype_of(&ORG_FOLDER));
        assert!(FOLDER.is_supertype_of(&ORG_FOLDER));
        assert!(!ORG_FOLDER.is_supertype_of(&FOLDER));
        assert!(!ORG_FOLDER.is_supertype_of(&GROUP));
    }

    #[test]
    fn test_separate_branches_are_incomparable() {
        assert!(!ROOT.is_supertype_of(&FOLDER));
        assert!(!FOLDER.is_supertype_of(&ROOT));
    }

    #[test]
    fn test_plugin_declared_subtype() {
        static LOCKED: GroupType = GroupType::subtype("locked-folder", &FOLDER);

        assert!(FOLDER.is_supertype_of(&LOCKED));
        assert!(GROUP.is_supertype_of(&LOCKED));
        assert!(!ROOT.is_supertype_of(&LOCKED));
        assert_eq!(LOCKED.parent(), Some(&FOLDER));
    }
}
