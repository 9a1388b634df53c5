use crate::EXTENSION_PREFIX;
use indexmap::IndexMap;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::ops::{Deref, DerefMut};

/// Vendor extensions attached to a model object.
///
/// Entries are kept in insertion order. Only keys starting with `x-` are
/// written out or read back; any other key stays in memory but is dropped by
/// serialization (see [`crate::inspect`] to find them beforehand).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    pub fn new() -> Self {
        Extensions(IndexMap::new())
    }

    pub fn is_extension_key(key: &str) -> bool {
        key.starts_with(EXTENSION_PREFIX)
    }

    /// Keys that would not survive serialization.
    pub fn invalid_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !Self::is_extension_key(key))
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }
}

impl Deref for Extensions {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Extensions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<IndexMap<String, Value>> for Extensions {
    fn from(map: IndexMap<String, Value>) -> Self {
        Extensions(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Extensions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Extensions(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Serialize for Extensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let filtered = self
            .0
            .iter()
            .filter(|(key, _)| Self::is_extension_key(key));
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in filtered {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = IndexMap::<String, Value>::deserialize(deserializer)?;

        // Fields that are neither declared nor vendor extensions are ignored.
        map.retain(|key, _| Self::is_extension_key(key));

        Ok(Extensions(map))
    }
}

/// Serializes a keyed object whose entries share the object with its
/// extensions, such as paths or responses.
pub(crate) fn serialize_keyed<S, T>(
    entries: &IndexMap<String, T>,
    extensions: &Extensions,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(None)?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    for (key, value) in extensions.iter().filter(|(key, _)| Extensions::is_extension_key(key)) {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Counterpart of [`serialize_keyed`]: `x-` keys become extensions, every
/// other key is decoded as an entry.
pub(crate) fn deserialize_keyed<'de, D, T>(
    deserializer: D,
) -> Result<(IndexMap<String, T>, Extensions), D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    let mut entries = IndexMap::with_capacity(raw.len());
    let mut extensions = Extensions::new();
    for (key, value) in raw {
        if Extensions::is_extension_key(&key) {
            extensions.insert(key, value);
        } else {
            let entry = serde_json::from_value(value).map_err(|e| {
                <D::Error as serde::de::Error>::custom(format!("invalid entry '{}': {}", key, e))
            })?;
            entries.insert(key, entry);
        }
    }
    Ok((entries, extensions))
}

/// Capability shared by every model object: a map of vendor extensions.
pub trait Extensible {
    fn extensions(&self) -> &Extensions;

    fn extensions_mut(&mut self) -> &mut Extensions;

    fn set_extensions(&mut self, extensions: Extensions) {
        *self.extensions_mut() = extensions;
    }

    /// Inserts or replaces one extension and returns the same object.
    fn add_extension(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        self.extensions_mut().insert(name.into(), value.into());
        self
    }

    fn remove_extension(&mut self, name: &str) -> Option<Value> {
        self.extensions_mut().shift_remove(name)
    }

    fn extension(&self, name: &str) -> Option<&Value> {
        self.extensions().get(name)
    }
}

/// Capability shared by every model object: it can be created empty and
/// mapped to and from its document encoding.
pub trait Constructible:
    Default + Clone + PartialEq + Serialize + DeserializeOwned + Extensible
{
}

/// Creates an empty instance of any model object.
pub fn create<T: Constructible>() -> T {
    T::default()
}

/// Implements [`Extensible`] and [`Constructible`] for structs that store
/// their extensions in an `extensions` field.
macro_rules! model_object {
    ($($model:ty),+ $(,)?) => {
        $(
            impl $crate::extensions::Extensible for $model {
                fn extensions(&self) -> &$crate::extensions::Extensions {
                    &self.extensions
                }

                fn extensions_mut(&mut self) -> &mut $crate::extensions::Extensions {
                    &mut self.extensions
                }
            }

            impl $crate::extensions::Constructible for $model {}
        )+
    };
}

pub(crate) use model_object;
