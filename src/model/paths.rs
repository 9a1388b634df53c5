use crate::extensions::{deserialize_keyed, model_object, serialize_keyed, Extensions};
use crate::model::PathItem;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Path templates (`/pets/{petId}`) mapped to the operations they expose.
/// Templates keep the order they were inserted or read in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    items: IndexMap<String, PathItem>,
    extensions: Extensions,
}

impl Paths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_items(&self) -> &IndexMap<String, PathItem> {
        &self.items
    }

    pub fn set_path_items(&mut self, items: IndexMap<String, PathItem>) {
        self.items = items;
    }

    pub fn with_path_items(&mut self, items: IndexMap<String, PathItem>) -> &mut Self {
        self.set_path_items(items);
        self
    }

    /// Inserts or replaces the item for `name`, returning the item it
    /// replaced.
    pub fn insert(&mut self, name: impl Into<String>, item: PathItem) -> Option<PathItem> {
        self.items.insert(name.into(), item)
    }

    pub fn add_path_item(&mut self, name: impl Into<String>, item: PathItem) -> &mut Self {
        self.insert(name, item);
        self
    }

    pub fn remove_path_item(&mut self, name: &str) -> Option<PathItem> {
        self.items.shift_remove(name)
    }

    pub fn path_item(&self, name: &str) -> Option<&PathItem> {
        self.items.get(name)
    }

    pub fn path_item_mut(&mut self, name: &str) -> Option<&mut PathItem> {
        self.items.get_mut(name)
    }

    pub fn has_path_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PathItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Paths {
    type Item = (&'a String, &'a PathItem);
    type IntoIter = indexmap::map::Iter<'a, String, PathItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for Paths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_keyed(&self.items, &self.extensions, serializer)
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (items, extensions) = deserialize_keyed(deserializer)?;
        Ok(Paths { items, extensions })
    }
}

model_object!(Paths);
