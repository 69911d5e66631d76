//! # Namespace Normalization
//!
//! Turns the flat class list into render-ready [`Namespaces`]:
//!
//! - qualified names (`geo::shapes::Circle`) are split into a dotted namespace
//!   (`geo.shapes`) and a display name (`Circle`); unqualified names land in
//!   [`GLOBAL_NAMESPACE`]
//! - classes without a reference id get one derived from namespace and name
//! - every method and constructor gets its `returns.skip` flag
//!
//! Duplicate fully-qualified names are kept as separate entries in the same
//! bucket.

use crate::models::{Class, Namespaces};

pub const DEFAULT_NAMESPACE_SEPARATOR: &str = "::";
pub const GLOBAL_NAMESPACE: &str = "Global";
const NAMESPACE_JOIN: &str = ".";

/// Splits a possibly qualified class name into `(namespace, display_name)`.
pub fn split_name(name: &str, separator: &str) -> (String, String) {
    if separator.is_empty() {
        return (GLOBAL_NAMESPACE.to_string(), name.to_string());
    }
    let segments: Vec<&str> = name.split(separator).collect();
    match segments.split_last() {
        Some((last, namespace)) if !namespace.is_empty() => {
            (namespace.join(NAMESPACE_JOIN), last.to_string())
        }
        _ => (GLOBAL_NAMESPACE.to_string(), name.to_string()),
    }
}

/// Anchor-safe id for a class. ASCII alphanumerics and `_` pass through, every
/// other character becomes `-<hex>-`, so distinct pairs never collide.
pub fn reference_id(namespace: &str, name: &str) -> String {
    format!("{}.{}", escape(namespace), escape(name))
}

fn escape(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push_str(&format!("-{:x}-", c as u32));
        }
    }
    out
}

/// Normalizes one class in place and returns its namespace.
pub fn normalize_class(class: &mut Class, separator: &str) -> String {
    let (namespace, name) = split_name(&class.name, separator);
    class.name = name;
    if class.reference_id.is_empty() {
        class.reference_id = reference_id(&namespace, &class.name);
    }
    for method in class.all_methods_mut() {
        method.returns.skip = method.returns.should_skip();
    }
    namespace
}

pub fn normalize(classes: Vec<Class>, separator: &str) -> Namespaces {
    let mut namespaces = Namespaces::default();
    for mut class in classes {
        let namespace = normalize_class(&mut class, separator);
        namespaces.insert(namespace, class);
    }
    namespaces
}
