use std::collections::BTreeMap;
use std::collections::btree_map;

use super::Variant;

/// String-keyed map of variants. Values may hold further dictionaries, so
/// a dictionary is the root of an owned value tree.
///
/// Backed by a `BTreeMap`: iteration and encoding order are the key order,
/// which keeps encoded bytes deterministic. Insertion order is not kept.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Dictionary {
    #[prost(btree_map = "string, message", tag = "1")]
    pub key_value_list: BTreeMap<::prost::alloc::string::String, Variant>,
}

impl Dictionary {
    pub const fn new() -> Self {
        Self { key_value_list: BTreeMap::new() }
    }

    /// Last write wins; the displaced value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Variant>) -> Option<Variant> {
        self.key_value_list.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.key_value_list.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Variant> {
        self.key_value_list.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Variant> {
        self.key_value_list.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.key_value_list.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.key_value_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_value_list.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Variant> {
        self.key_value_list.iter()
    }

    /// Nesting depth counting this dictionary as level 1.
    pub fn depth(&self) -> usize {
        1 + self
            .key_value_list
            .values()
            .map(Variant::dictionary_depth)
            .max()
            .unwrap_or(0)
    }
}

impl<K: Into<String>, V: Into<Variant>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, V: Into<Variant>> Extend<(K, V)> for Dictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Variant);
    type IntoIter = btree_map::Iter<'a, String, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, Variant);
    type IntoIter = btree_map::IntoIter<String, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.key_value_list.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn insert_overwrites_same_key() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("k", 1).is_none());
        let previous = dict.insert("k", "two");
        assert_eq!(previous, Some(Variant::from(1)));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("k").map(Variant::which), Some(Kind::String));
        assert_eq!(dict.get("k").map(Variant::string_value), Some("two"));
    }

    #[test]
    fn depth_follows_deepest_branch() {
        assert_eq!(Dictionary::new().depth(), 1);

        let leaf: Dictionary = [("x", 1)].into_iter().collect();
        let mut mid = Dictionary::new();
        mid.insert("leaf", leaf);
        mid.insert("flat", true);
        let mut root = Dictionary::new();
        root.insert("mid", mid);
        root.insert("n", 0u64);
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn iteration_is_key_ordered() {
        let dict: Dictionary = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        let keys: Vec<&str> = dict.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert!(dict.contains_key("a"));
        let mut dict = dict;
        assert_eq!(dict.remove("a"), Some(Variant::from(1)));
        assert!(!dict.contains_key("a"));
    }
}
