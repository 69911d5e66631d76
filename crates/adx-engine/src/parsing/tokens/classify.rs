use regex::Captures;

use super::vocabulary::{DeclarationKind, TokenVocabulary};

/// Class-level field tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassField<'a> {
    /// `@property <name> <description>`
    Property { name: &'a str, description: &'a str },
    /// `@constructor <description>`
    Constructor { description: &'a str },
}

/// Method-level field tokens, matched by the configured patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodField<'a> {
    Parameter { name: &'a str, description: &'a str },
    Returns { description: &'a str },
}

/// What one content line means, without regard to context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToken<'a> {
    Declaration { kind: DeclarationKind, name: &'a str },
    ClassField(ClassField<'a>),
    MethodField(MethodField<'a>),
    Text(&'a str),
}

/// Classifies block content lines against a [`TokenVocabulary`].
#[derive(Debug, Clone, Copy)]
pub struct TokenClassifier<'v> {
    vocabulary: &'v TokenVocabulary,
}

impl<'v> TokenClassifier<'v> {
    pub fn new(vocabulary: &'v TokenVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Priority: declaration, class field, method field, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineToken<'a> {
        if let Some(token) = self.declaration(line) {
            return token;
        }
        if let Some(field) = self.class_field(line) {
            return LineToken::ClassField(field);
        }
        if let Some(field) = self.method_field(line) {
            return LineToken::MethodField(field);
        }
        LineToken::Text(line)
    }

    fn declaration<'a>(&self, line: &'a str) -> Option<LineToken<'a>> {
        self.vocabulary
            .declarations
            .iter()
            .find_map(|(kind, prefix)| {
                line.strip_prefix(prefix.as_str())
                    .map(|rest| LineToken::Declaration {
                        kind: *kind,
                        name: rest.trim(),
                    })
            })
    }

    fn class_field<'a>(&self, line: &'a str) -> Option<ClassField<'a>> {
        if let Some(rest) = strip_tag(line, &self.vocabulary.property_tag) {
            let (name, description) = match rest.split_once(char::is_whitespace) {
                Some((name, description)) => (name, description.trim()),
                None => (rest, ""),
            };
            if name.is_empty() {
                return None;
            }
            return Some(ClassField::Property { name, description });
        }
        strip_tag(line, &self.vocabulary.constructor_tag)
            .map(|description| ClassField::Constructor { description })
    }

    fn method_field<'a>(&self, line: &'a str) -> Option<MethodField<'a>> {
        let fields = &self.vocabulary.fields;
        if let Some(caps) = fields.parameter.captures(line) {
            return Some(MethodField::Parameter {
                name: capture(&caps, "name"),
                description: capture(&caps, "description"),
            });
        }
        fields
            .returns
            .captures(line)
            .map(|caps| MethodField::Returns {
                description: capture(&caps, "description"),
            })
    }
}

/// Strips a tag that must stand alone or be followed by whitespace, returning
/// the trimmed remainder.
fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(tag)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

fn capture<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tokens::FieldPatterns;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::LazyLock;

    static DEFAULT: LazyLock<TokenVocabulary> = LazyLock::new(TokenVocabulary::default);

    fn classify(line: &str) -> LineToken<'_> {
        TokenClassifier::new(&DEFAULT).classify(line)
    }

    #[rstest]
    #[case("Class: Shape", DeclarationKind::Class, "Shape")]
    #[case("Constructor: Shape", DeclarationKind::Constructor, "Shape")]
    #[case("Static Method: foo", DeclarationKind::StaticMethod, "foo")]
    #[case("Method: foo", DeclarationKind::Method, "foo")]
    #[case("Static Property: MAX", DeclarationKind::StaticProperty, "MAX")]
    #[case("Property: width", DeclarationKind::Property, "width")]
    #[case("Class:   geo::Circle  ", DeclarationKind::Class, "geo::Circle")]
    #[case("Method:", DeclarationKind::Method, "")]
    fn declarations(#[case] line: &str, #[case] kind: DeclarationKind, #[case] name: &str) {
        assert_eq!(classify(line), LineToken::Declaration { kind, name });
    }

    #[test]
    fn static_method_never_classifies_as_method() {
        assert!(matches!(
            classify("Static Method: foo"),
            LineToken::Declaration {
                kind: DeclarationKind::StaticMethod,
                ..
            }
        ));
    }

    #[rstest]
    #[case("@property prop The sample property.", "prop", "The sample property.")]
    #[case("@property   prop    spaced out  ", "prop", "spaced out")]
    #[case("@property lonely", "lonely", "")]
    fn property_tags(#[case] line: &str, #[case] name: &str, #[case] description: &str) {
        assert_eq!(
            classify(line),
            LineToken::ClassField(ClassField::Property { name, description })
        );
    }

    #[rstest]
    #[case("@constructor Build an instance.", "Build an instance.")]
    #[case("@constructor", "")]
    fn constructor_tags(#[case] line: &str, #[case] description: &str) {
        assert_eq!(
            classify(line),
            LineToken::ClassField(ClassField::Constructor { description })
        );
    }

    #[rstest]
    #[case("@param arg The sample argument.", "arg", "The sample argument.")]
    #[case("@param unit", "unit", "")]
    fn default_parameter_pattern(#[case] line: &str, #[case] name: &str, #[case] description: &str) {
        assert_eq!(
            classify(line),
            LineToken::MethodField(MethodField::Parameter { name, description })
        );
    }

    #[rstest]
    #[case("@return The area.", "The area.")]
    #[case("@returns The area.", "The area.")]
    #[case("@return", "")]
    fn default_return_pattern(#[case] line: &str, #[case] description: &str) {
        assert_eq!(
            classify(line),
            LineToken::MethodField(MethodField::Returns { description })
        );
    }

    #[rstest]
    #[case("A basic shape.")]
    #[case("")]
    #[case("@properties are glued")]
    #[case("@property")]
    #[case("@param")]
    #[case("@returnvalue x")]
    #[case("class: lowercase is not a token")]
    fn plain_text(#[case] line: &str) {
        assert_eq!(classify(line), LineToken::Text(line));
    }

    #[test]
    fn custom_field_patterns() {
        let vocabulary = TokenVocabulary::with_fields(
            FieldPatterns::new(
                Some(r"^- Parameter (?P<name>\w+):\s*(?P<description>.*)$"),
                Some(r"^- Returns:\s*(?P<description>.*)$"),
            )
            .unwrap(),
        );
        let classifier = TokenClassifier::new(&vocabulary);

        assert_eq!(
            classifier.classify("- Parameter value: The value."),
            LineToken::MethodField(MethodField::Parameter {
                name: "value",
                description: "The value.",
            })
        );
        assert_eq!(
            classifier.classify("- Returns: A Bar instance."),
            LineToken::MethodField(MethodField::Returns {
                description: "A Bar instance.",
            })
        );
        assert_eq!(
            classifier.classify("@param x y"),
            LineToken::Text("@param x y")
        );
    }
}
