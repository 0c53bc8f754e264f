//! Class-level lexers: stereotype line, class header and inheritance edges

use std::fmt;

use crate::core::{Stereotype, INHERITANCE_ARROW};
use crate::signature::{ClassQualifier, ClassSignature};

/// `Super<|--<header>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceEdge {
    pub supertype: String,
    pub subtype_header: String,
}

impl fmt::Display for InheritanceEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.supertype, INHERITANCE_ARROW, self.subtype_header)
    }
}

/// Header of one class as it appears in a diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    /// Bare class name, used for `class <name> {`
    pub name: String,
    /// Visibility glyph followed by the name, used on the subtype side of edges
    pub header: String,
    /// `Super<|--<header>` per supertype, in declaration order
    pub edges: Vec<String>,
}

/// `\t<<abstract>>\n`, `\t<<static>>\n` or nothing
pub fn class_type_lexer(class: &ClassSignature) -> String {
    let stereotype = match class.qualifier {
        Some(ClassQualifier::Abstract) => Stereotype::Abstract,
        Some(ClassQualifier::Static) => Stereotype::Static,
        None => return String::new(),
    };
    format!("\t{}\n", stereotype)
}

pub fn class_lexer(class: &ClassSignature) -> ClassHeader {
    let header = format!("{}{}", class.visibility.glyph(), class.name);
    let edges = class
        .supertypes
        .iter()
        .map(|supertype| {
            InheritanceEdge {
                supertype: supertype.clone(),
                subtype_header: header.clone(),
            }
            .to_string()
        })
        .collect();

    ClassHeader {
        name: class.name.clone(),
        header,
        edges,
    }
}

/// Inheritance edges of a class without the rest of its header
pub fn inheritance_lexer(class: &ClassSignature) -> Vec<String> {
    class_lexer(class).edges
}
