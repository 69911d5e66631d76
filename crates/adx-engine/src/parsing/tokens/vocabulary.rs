use regex::Regex;

use crate::models::class::STATIC_ACCESS;
use crate::parsing::grammar::GrammarError;

/// The entity a declaration token introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Constructor,
    StaticMethod,
    Method,
    StaticProperty,
    Property,
}

impl DeclarationKind {
    /// Access marker given to the declared entity.
    pub fn access(self) -> &'static str {
        match self {
            Self::StaticMethod | Self::StaticProperty => STATIC_ACCESS,
            _ => "",
        }
    }

    pub fn is_method(self) -> bool {
        matches!(self, Self::Constructor | Self::StaticMethod | Self::Method)
    }

    pub fn is_property(self) -> bool {
        matches!(self, Self::StaticProperty | Self::Property)
    }
}

/// Declaration prefixes in match order. `Static Method:` has to be tried
/// before `Method:`, and `Static Property:` before `Property:`.
pub const DEFAULT_DECLARATIONS: [(DeclarationKind, &str); 6] = [
    (DeclarationKind::Class, "Class:"),
    (DeclarationKind::Constructor, "Constructor:"),
    (DeclarationKind::StaticMethod, "Static Method:"),
    (DeclarationKind::Method, "Method:"),
    (DeclarationKind::StaticProperty, "Static Property:"),
    (DeclarationKind::Property, "Property:"),
];

pub const PROPERTY_TAG: &str = "@property";
pub const CONSTRUCTOR_TAG: &str = "@constructor";

pub const DEFAULT_PARAMETER_PATTERN: &str =
    r"^@param\s+(?P<name>\S+)(?:\s+(?P<description>.*))?$";
pub const DEFAULT_RETURN_PATTERN: &str = r"^@returns?(?:\s+(?P<description>.*))?$";

/// Patterns for method-level field tokens.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    /// Must define the `name` and `description` captures.
    pub parameter: Regex,
    /// Must define the `description` capture.
    pub returns: Regex,
}

impl FieldPatterns {
    pub fn new(parameter: Option<&str>, returns: Option<&str>) -> Result<Self, GrammarError> {
        let parameter = compile(
            "parameter",
            parameter.unwrap_or(DEFAULT_PARAMETER_PATTERN),
            &["name", "description"],
        )?;
        let returns = compile(
            "return",
            returns.unwrap_or(DEFAULT_RETURN_PATTERN),
            &["description"],
        )?;
        Ok(Self { parameter, returns })
    }
}

impl Default for FieldPatterns {
    fn default() -> Self {
        Self {
            parameter: Regex::new(DEFAULT_PARAMETER_PATTERN).expect("default parameter pattern"),
            returns: Regex::new(DEFAULT_RETURN_PATTERN).expect("default return pattern"),
        }
    }
}

fn compile(
    field: &'static str,
    pattern: &str,
    captures: &[&'static str],
) -> Result<Regex, GrammarError> {
    let regex = Regex::new(pattern).map_err(|source| GrammarError::InvalidPattern { field, source })?;
    for &capture in captures {
        if !regex.capture_names().flatten().any(|name| name == capture) {
            return Err(GrammarError::MissingCapture {
                field,
                pattern: pattern.to_string(),
                capture,
            });
        }
    }
    Ok(regex)
}

/// Every token the classifier knows about.
#[derive(Debug, Clone)]
pub struct TokenVocabulary {
    /// Declaration prefixes, tried in order.
    pub declarations: Vec<(DeclarationKind, String)>,
    pub property_tag: String,
    pub constructor_tag: String,
    pub fields: FieldPatterns,
}

impl TokenVocabulary {
    pub fn with_fields(fields: FieldPatterns) -> Self {
        Self {
            declarations: DEFAULT_DECLARATIONS
                .iter()
                .map(|(kind, prefix)| (*kind, prefix.to_string()))
                .collect(),
            property_tag: PROPERTY_TAG.to_string(),
            constructor_tag: CONSTRUCTOR_TAG.to_string(),
            fields,
        }
    }
}

impl Default for TokenVocabulary {
    fn default() -> Self {
        Self::with_fields(FieldPatterns::default())
    }
}
