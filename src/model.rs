//! Standard item and group kinds shipped with the server.
//!
//! Plugins contribute their own [`Item`]/[`ItemGroup`] implementations;
//! these are the kinds every installation carries.

use std::any::Any;
use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::group_type::GroupType;
use crate::item::{Item, ItemGroup, MutableGroup};
use crate::storage::{GroupStore, MemoryStore, StoredMember};

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// The standard buildable item: a named job with a JSON configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Item name, unique within its group.
    pub name: String,
    /// Classification tag.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Group-qualified path stamped by the containing group, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Configuration payload.
    #[serde(default)]
    pub config: Value,
}

fn default_kind() -> String {
    "job".to_string()
}

impl Job {
    /// Create a job with the default `"job"` kind and no configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: default_kind(),
            full_name: None,
            config: Value::Null,
        }
    }

    /// Override the classification tag.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Attach a configuration payload.
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    /// A copy of this job stamped with its group-qualified path.
    pub(crate) fn located_in(&self, group_name: &str) -> Self {
        let mut located = self.clone();
        located.full_name = Some(format!("{}/{}", group_name, self.name));
        located
    }
}

impl Item for Job {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn clone_box(&self) -> Box<dyn Item> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Folder
// ---------------------------------------------------------------------------

/// The standard mutable group.
///
/// The descriptor is chosen at construction, so the same storage backs
/// `ROOT`, `FOLDER`, and `ORG_FOLDER` trees. Membership changes persist
/// through the folder's [`GroupStore`]; the default store keeps nothing.
#[derive(Debug)]
pub struct Folder {
    name: String,
    group_type: &'static GroupType,
    items: BTreeMap<String, Box<dyn Item>>,
    accepted_kinds: Option<Vec<String>>,
    store: Box<dyn GroupStore>,
}

impl Folder {
    /// Create an empty folder of the given kind, backed by [`MemoryStore`].
    pub fn new(name: impl Into<String>, group_type: &'static GroupType) -> Self {
        Self {
            name: name.into(),
            group_type,
            items: BTreeMap::new(),
            accepted_kinds: None,
            store: Box::new(MemoryStore),
        }
    }

    /// Replace the membership store.
    pub fn with_store(mut self, store: Box<dyn GroupStore>) -> Self {
        self.store = store;
        self
    }

    /// Restrict the item kinds this folder accepts.
    pub fn restrict_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_kinds = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Rebuild a folder from its persisted manifest.
    ///
    /// Members are restored as [`Job`] items. A missing manifest yields an
    /// empty folder.
    pub fn restore(
        name: impl Into<String>,
        group_type: &'static GroupType,
        store: Box<dyn GroupStore>,
    ) -> io::Result<Self> {
        let name = name.into();
        let mut items: BTreeMap<String, Box<dyn Item>> = BTreeMap::new();
        if let Some(members) = store.load(&name)? {
            for member in members {
                let job = Job {
                    name: member.name.clone(),
                    kind: member.kind,
                    full_name: None,
                    config: member.config,
                };
                items.insert(member.name, Box::new(job));
            }
        }
        Ok(Self {
            name,
            group_type,
            items,
            accepted_kinds: None,
            store,
        })
    }

    fn members(&self) -> Vec<StoredMember> {
        self.items
            .values()
            .map(|item| StoredMember {
                name: item.name().to_string(),
                kind: item.kind().to_string(),
                config: item
                    .as_any()
                    .downcast_ref::<Job>()
                    .map(|job| job.config.clone())
                    .unwrap_or(Value::Null),
            })
            .collect()
    }
}

impl ItemGroup for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn group_type(&self) -> &'static GroupType {
        self.group_type
    }

    fn item_names(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<&dyn Item> {
        self.items.get(name).map(|item| item.as_ref())
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn accepts(&self, item: &dyn Item) -> bool {
        match &self.accepted_kinds {
            None => true,
            Some(kinds) => kinds.iter().any(|kind| kind == item.kind()),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_mutable(&self) -> bool {
        true
    }

    fn as_mutable(&mut self) -> Option<&mut dyn MutableGroup> {
        Some(self)
    }
}

impl MutableGroup for Folder {
    fn insert(&mut self, item: Box<dyn Item>) -> io::Result<()> {
        self.items.insert(item.name().to_string(), item);
        let members = self.members();
        self.store.persist(&self.name, &members)
    }

    fn eject(&mut self, name: &str) -> io::Result<Option<Box<dyn Item>>> {
        let removed = self.items.remove(name);
        if removed.is_some() {
            let members = self.members();
            self.store.persist(&self.name, &members)?;
        }
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// SealedGroup
// ---------------------------------------------------------------------------

/// A read-only group used for archived trees.
///
/// Exposes no mutation surface, so no shipped modifier will touch it.
#[derive(Debug)]
pub struct SealedGroup {
    name: String,
    group_type: &'static GroupType,
    items: BTreeMap<String, Box<dyn Item>>,
}

impl SealedGroup {
    /// Seal the given items into a read-only group.
    pub fn new(
        name: impl Into<String>,
        group_type: &'static GroupType,
        items: Vec<Box<dyn Item>>,
    ) -> Self {
        Self {
            name: name.into(),
            group_type,
            items: items
                .into_iter()
                .map(|item| (item.name().to_string(), item))
                .collect(),
        }
    }
}

impl ItemGroup for SealedGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn group_type(&self) -> &'static GroupType {
        self.group_type
    }

    fn item_names(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<&dyn Item> {
        self.items.get(name).map(|item| item.as_ref())
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
