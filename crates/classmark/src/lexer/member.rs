//! Member lexers: one Mermaid body line per property, method, constructor or event
//!
//! Every lexer returns a complete line (`\t...\n`) or an empty string when
//! the member is filtered out, so callers can concatenate results directly.

use crate::core::{Classifier, DiagramConfig};
use crate::signature::{
    ConstructorSignature, EventSignature, MethodSignature, PropertySignature,
};

use super::escape::escape_type;
use super::parameter::parameter_lexer;

/// `\t<glyph><name> : <type>\n`, or empty for a filtered underscore member
pub fn property_lexer(property: &PropertySignature, config: &DiagramConfig) -> String {
    if !config.keeps_member(&property.name) {
        return String::new();
    }
    format!(
        "\t{}{} : {}\n",
        property.visibility.glyph(),
        property.name,
        property.type_name
    )
}

/// `\t<glyph><name>(<params>)<classifiers> <return type>\n`
///
/// `*` marks an abstract method, `$` a static one.
pub fn method_lexer(method: &MethodSignature, config: &DiagramConfig) -> String {
    let mut classifiers = String::new();
    if method.is_abstract() {
        classifiers.push(Classifier::Abstract.to_char());
    }
    if method.is_static() {
        classifiers.push(Classifier::Static.to_char());
    }

    format!(
        "\t{}{}({}){} {}\n",
        method.visibility.glyph(),
        method.name,
        parameter_lexer(&method.parameters, config),
        classifiers,
        escape_type(&method.return_type)
    )
}

pub fn constructor_lexer(constructor: &ConstructorSignature, config: &DiagramConfig) -> String {
    format!(
        "\t{}{}({})\n",
        constructor.visibility.glyph(),
        constructor.name,
        parameter_lexer(&constructor.parameters, config)
    )
}

/// Events render like properties typed by their handler, and only when enabled
pub fn event_lexer(event: &EventSignature, config: &DiagramConfig) -> String {
    if !config.include_events || !config.keeps_member(&event.name) {
        return String::new();
    }
    format!(
        "\t{}{} : {}\n",
        event.visibility.glyph(),
        event.name,
        escape_type(&event.handler_type)
    )
}
