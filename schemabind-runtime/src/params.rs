//! The per-call wire contract: a flat parameter map and upload parts.

use std::collections::{BTreeMap, btree_map};

use crate::NamedFile;

/// Flat string-keyed request parameters, keyed by wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Side-channel uploads of a multi-part request, keyed by part name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parts(BTreeMap<String, NamedFile>);

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an upload under `name`; `attach://<name>` refers to it.
    pub fn insert(&mut self, name: impl Into<String>, file: NamedFile) {
        self.0.insert(name.into(), file);
    }

    pub fn get(&self, name: &str) -> Option<&NamedFile> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, NamedFile> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_insert_replaces() {
        let mut params = Params::new();
        params.insert("chat_id", "1");
        params.insert("chat_id", "2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("chat_id"), Some("2"));
    }

    #[test]
    fn test_params_iterate_in_key_order() {
        let mut params = Params::new();
        params.insert("text", "hi");
        params.insert("chat_id", "1");
        let keys: Vec<_> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["chat_id", "text"]);
    }

    #[test]
    fn test_parts() {
        let mut parts = Parts::new();
        assert!(parts.is_empty());
        parts.insert("photo", NamedFile::new("cat.jpg", vec![1, 2, 3]));
        assert_eq!(parts.get("photo").map(|f| f.file_name.as_str()), Some("cat.jpg"));
    }
}
