use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Class;

/// Intermediate document: the flat class list produced by one extraction
/// run, stored so later runs can combine it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDocument {
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl ClassDocument {
    pub fn new(classes: Vec<Class>) -> Self {
        Self { classes }
    }
}

impl From<Vec<Class>> for ClassDocument {
    fn from(classes: Vec<Class>) -> Self {
        Self::new(classes)
    }
}

/// Classes grouped by namespace. Buckets are sorted by namespace name; the
/// classes inside a bucket keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespaces(pub BTreeMap<String, Vec<Class>>);

impl Namespaces {
    pub fn insert(&mut self, namespace: String, class: Class) {
        self.0.entry(namespace).or_default().push(class);
    }

    pub fn get(&self, namespace: &str) -> Option<&[Class]> {
        self.0.get(namespace).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Class])> {
        self.0.iter().map(|(ns, classes)| (ns.as_str(), classes.as_slice()))
    }

    pub fn class_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The final, render-ready document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub namespaces: Namespaces,
}
