use serde::{Deserialize, Serialize};

/// Access marker carried by static methods and properties.
pub const STATIC_ACCESS: &str = "static";

/// Return type sentinel meaning "returns nothing".
pub const VOID_TYPE: &str = "void";

/// A documented class and everything declared inside it.
///
/// `access`, `virtual` and `fires` are opaque strings passed through from
/// structured extractors; the comment engine leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Class {
    pub name: String,
    pub description: String,
    pub access: String,
    #[serde(rename = "virtual")]
    pub is_virtual: String,
    pub fires: String,
    pub constructors: Vec<Method>,
    pub methods: Vec<Method>,
    pub properties: Vec<Property>,
    /// Stable anchor for cross-linking. Empty until normalized unless the
    /// producing extractor supplied one.
    pub reference_id: String,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a finished method to the constructor or method list.
    pub fn push_method(&mut self, method: Method) {
        if method.is_constructor {
            self.constructors.push(method);
        } else {
            self.methods.push(method);
        }
    }

    /// Iterate constructors followed by methods.
    pub fn all_methods_mut(&mut self) -> impl Iterator<Item = &mut Method> {
        self.constructors.iter_mut().chain(self.methods.iter_mut())
    }
}

/// A method or constructor. Constructors live in [`Class::constructors`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Method {
    pub name: String,
    pub description: String,
    /// `""` or [`STATIC_ACCESS`].
    pub access: String,
    #[serde(rename = "virtual")]
    pub is_virtual: String,
    #[serde(rename = "constructor", skip_serializing_if = "std::ops::Not::not")]
    pub is_constructor: bool,
    pub parameters: Vec<Parameter>,
    pub returns: Returns,
}

impl Method {
    pub fn new(name: impl Into<String>, access: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: access.into(),
            ..Self::default()
        }
    }

    pub fn constructor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_constructor: true,
            ..Self::default()
        }
    }

    pub fn is_static(&self) -> bool {
        self.access == STATIC_ACCESS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub name: String,
    pub description: String,
    pub access: String,
    #[serde(rename = "virtual")]
    pub is_virtual: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Property {
    pub fn new(name: impl Into<String>, access: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: access.into(),
            ..Self::default()
        }
    }
}

/// A method parameter. Only `name` and `description` are filled by the
/// comment engine; the rest come from structured extractors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    pub default: String,
    pub optional: String,
    pub nullable: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

impl From<&Property> for Parameter {
    fn from(property: &Property) -> Self {
        Self::new(property.name.clone(), property.description.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Returns {
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    /// Set by the normalizer when there is nothing worth rendering.
    pub skip: bool,
}

impl Returns {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// True for void returns and for returns carrying no information at all.
    pub fn should_skip(&self) -> bool {
        self.ty == VOID_TYPE || (self.ty.is_empty() && self.description.is_empty())
    }
}
