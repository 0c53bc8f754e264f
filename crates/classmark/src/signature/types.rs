//! Typed signatures produced by the matcher

use std::fmt;

use crate::core::{Modifier, Visibility};

/// A single normalized declaration statement
///
/// Never spans more than one declaration and never contains `{` or `;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedLine(String);

impl NormalizedLine {
    pub(crate) fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

/// The `abstract`/`static` qualifier of a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassQualifier {
    Abstract,
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSignature {
    pub visibility: Visibility,
    pub qualifier: Option<ClassQualifier>,
    pub kind: ClassKind,
    pub name: String,
    pub type_parameters: Vec<String>,
    pub supertypes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySignature {
    pub visibility: Visibility,
    pub modifiers: Vec<Modifier>,
    pub type_name: String,
    pub name: String,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub visibility: Visibility,
    pub modifiers: Vec<Modifier>,
    pub return_type: String,
    pub name: String,
    /// Raw text between the parentheses
    pub parameters: String,
}

impl MethodSignature {
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(&Modifier::Abstract)
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorSignature {
    pub visibility: Visibility,
    pub name: String,
    /// Raw text between the parentheses
    pub parameters: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSignature {
    pub visibility: Visibility,
    pub modifiers: Vec<Modifier>,
    pub handler_type: String,
    pub name: String,
}

/// One parameter of a method or constructor parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSignature {
    pub type_name: String,
    pub name: String,
    pub default_value: Option<String>,
}

/// A classified declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    Class(ClassSignature),
    Property(PropertySignature),
    Method(MethodSignature),
    Constructor(ConstructorSignature),
    Event(EventSignature),
}

impl Signature {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Signature::Class(_) => "class",
            Signature::Property(_) => "property",
            Signature::Method(_) => "method",
            Signature::Constructor(_) => "constructor",
            Signature::Event(_) => "event",
        }
    }
}

/// All signatures of one source file, in declaration order per kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSignatures {
    pub class: ClassSignature,
    pub properties: Vec<PropertySignature>,
    pub events: Vec<EventSignature>,
    pub constructors: Vec<ConstructorSignature>,
    pub methods: Vec<MethodSignature>,
}

impl FileSignatures {
    pub fn new(class: ClassSignature) -> Self {
        Self {
            class,
            properties: Vec::new(),
            events: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn member_count(&self) -> usize {
        self.properties.len() + self.events.len() + self.constructors.len() + self.methods.len()
    }
}
