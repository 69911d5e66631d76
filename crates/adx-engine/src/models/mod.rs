pub mod class;
pub mod document;

pub use class::{Class, Method, Parameter, Property, Returns};
pub use document::{ApiDocument, ClassDocument, Namespaces};
