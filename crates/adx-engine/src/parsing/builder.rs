use crate::models::{Class, Method, Parameter, Property, Returns};

use super::tokens::{ClassField, DeclarationKind, LineToken, MethodField, TokenClassifier};

/// Which open entity receives plain-text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionContext {
    #[default]
    None,
    Class,
    Method,
    Property,
}

/// Assembles classes from classified block lines.
///
/// Open entities are held by value and appended to their parent when they are
/// flushed; nothing is touched after that. The open class, method and property
/// survive block boundaries, the description context does not.
pub struct ClassBuilder<'v> {
    classifier: TokenClassifier<'v>,
    class: Option<Class>,
    method: Option<Method>,
    property: Option<Property>,
    context: DescriptionContext,
    out: Vec<Class>,
}

impl<'v> ClassBuilder<'v> {
    pub fn new(classifier: TokenClassifier<'v>) -> Self {
        Self {
            classifier,
            class: None,
            method: None,
            property: None,
            context: DescriptionContext::None,
            out: vec![],
        }
    }

    pub fn begin_block(&mut self) {
        self.context = DescriptionContext::None;
    }

    pub fn push_block(&mut self, lines: &[String]) {
        self.begin_block();
        for line in lines {
            self.push(line);
        }
    }

    pub fn push(&mut self, line: &str) {
        match self.classifier.classify(line) {
            LineToken::Declaration {
                kind: DeclarationKind::Class,
                name,
            } => self.open_class(name),
            LineToken::Declaration { kind, name } if self.class.is_some() && kind.is_method() => {
                self.open_method(kind, name)
            }
            LineToken::Declaration { kind, name } if self.class.is_some() && kind.is_property() => {
                self.open_property(kind, name)
            }
            LineToken::ClassField(field) if self.class.is_some() => {
                self.flush_property();
                self.apply_class_field(field);
                self.context = DescriptionContext::None;
            }
            LineToken::MethodField(field) if self.method.is_some() => {
                self.apply_method_field(field);
                self.context = DescriptionContext::None;
            }
            _ => self.append_description(line),
        }
    }

    pub fn finish(mut self) -> Vec<Class> {
        self.flush_class();
        self.out
    }

    fn open_class(&mut self, name: &str) {
        self.flush_class();
        self.class = Some(Class::new(name));
        self.context = DescriptionContext::Class;
    }

    fn open_method(&mut self, kind: DeclarationKind, name: &str) {
        self.flush_method();
        self.method = Some(match kind {
            DeclarationKind::Constructor => Method::constructor(name),
            _ => Method::new(name, kind.access()),
        });
        self.context = DescriptionContext::Method;
    }

    fn open_property(&mut self, kind: DeclarationKind, name: &str) {
        self.flush_property();
        self.property = Some(Property::new(name, kind.access()));
        self.context = DescriptionContext::Property;
    }

    fn apply_class_field(&mut self, field: ClassField<'_>) {
        let Some(class) = self.class.as_mut() else {
            return;
        };
        match field {
            ClassField::Property { name, description } => {
                let mut property = Property::new(name, "");
                property.description = description.to_string();
                class.properties.push(property);
            }
            ClassField::Constructor { description } => {
                // Only properties already on the class become parameters.
                let mut constructor = Method::constructor("");
                constructor.description = description.to_string();
                constructor.parameters = class.properties.iter().map(Parameter::from).collect();
                class.constructors.push(constructor);
            }
        }
    }

    fn apply_method_field(&mut self, field: MethodField<'_>) {
        let Some(method) = self.method.as_mut() else {
            return;
        };
        match field {
            MethodField::Parameter { name, description } => {
                method.parameters.push(Parameter::new(name, description));
            }
            MethodField::Returns { description } => {
                method.returns = Returns::described(description);
            }
        }
    }

    fn append_description(&mut self, line: &str) {
        let target = match self.context {
            DescriptionContext::None => None,
            DescriptionContext::Class => self.class.as_mut().map(|c| &mut c.description),
            DescriptionContext::Method => self.method.as_mut().map(|m| &mut m.description),
            DescriptionContext::Property => self.property.as_mut().map(|p| &mut p.description),
        };
        if let Some(description) = target {
            if !description.is_empty() {
                description.push('\n');
            }
            description.push_str(line);
        }
    }

    fn flush_property(&mut self) {
        if let Some(property) = self.property.take()
            && let Some(class) = self.class.as_mut()
        {
            class.properties.push(property);
        }
    }

    fn flush_method(&mut self) {
        if let Some(method) = self.method.take()
            && let Some(class) = self.class.as_mut()
        {
            class.push_method(method);
        }
    }

    fn flush_class(&mut self) {
        self.flush_property();
        self.flush_method();
        if let Some(class) = self.class.take() {
            self.out.push(class);
        }
        self.context = DescriptionContext::None;
    }
}
