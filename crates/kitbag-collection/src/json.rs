//! Serde support for [`Collection`].
//!
//! A collection whose keys are exactly `0..len` serializes as a sequence;
//! anything else serializes as a map with stringified keys. Deserialization
//! accepts both shapes, turning plain decimal map keys back into indices.

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::collection::Collection;
use crate::key::Key;

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

struct CollectionVisitor<V> {
    _phantom: PhantomData<fn() -> V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
    type Value = Collection<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence or a map")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut collection = Collection::new();
        while let Some(value) = seq.next_element()? {
            collection.push(value);
        }
        Ok(collection)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut collection = Collection::new();
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            collection.insert(Key::parse(&key), value);
        }
        Ok(collection)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CollectionVisitor {
            _phantom: PhantomData,
        })
    }
}

impl<V: Serialize> Collection<V> {
    /// Serializes the collection to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the collection to an indented JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<V: for<'de> Deserialize<'de>> Collection<V> {
    /// Parses a collection from a JSON array or object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
