//! Signature grammar using chumsky
//!
//! A PEG over one normalized line. Each entry point either yields a typed
//! signature or fails; nothing here decides precedence between kinds, that
//! is the matcher's job.

use chumsky::prelude::*;
use chumsky::text::ident;

use super::types::{
    ClassKind, ClassQualifier, ClassSignature, ConstructorSignature, EventSignature,
    MethodSignature, ParameterSignature, PropertySignature,
};
use crate::core::chumsky_utils::{
    comma_separator, inline_whitespace, inline_whitespace_required, rest_of_line,
};
use crate::core::{Modifier, Visibility};

/// Words that can never be a type or member name
const RESERVED: &[&str] = &[
    "class", "interface", "struct", "enum", "record", "event", "delegate", "namespace", "using",
    "return", "where", "operator", "implicit", "explicit", "ref", "out", "params", "this",
];

fn is_reserved(word: &str) -> bool {
    RESERVED.contains(&word)
        || Visibility::from_keyword(word).is_some()
        || Modifier::from_keyword(word).is_some()
}

/// Constructor-shaped line; the name is checked against the class by the matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConstructorCandidate {
    pub visibility: Visibility,
    pub name: String,
    pub parameters: String,
}

impl ConstructorCandidate {
    pub fn into_signature(self) -> ConstructorSignature {
        ConstructorSignature {
            visibility: self.visibility,
            name: self.name,
            parameters: self.parameters,
        }
    }
}

pub(crate) fn parse_class(line: &str) -> Option<ClassSignature> {
    class_signature().parse(line).into_result().ok()
}

pub(crate) fn parse_property(line: &str) -> Option<PropertySignature> {
    property_signature().parse(line).into_result().ok()
}

pub(crate) fn parse_method(line: &str) -> Option<MethodSignature> {
    method_signature().parse(line).into_result().ok()
}

pub(crate) fn parse_constructor(line: &str) -> Option<ConstructorCandidate> {
    constructor_signature().parse(line).into_result().ok()
}

pub(crate) fn parse_event(line: &str) -> Option<EventSignature> {
    event_signature().parse(line).into_result().ok()
}

pub(crate) fn parse_parameter(text: &str) -> Option<ParameterSignature> {
    parameter_signature().parse(text).into_result().ok()
}

/// Access modifier; `protected internal` and `private protected` keep the first keyword
fn visibility<'src>() -> impl Parser<'src, &'src str, Visibility> + Clone {
    let keyword = choice((
        text::keyword("public").to(Visibility::Public),
        text::keyword("private").to(Visibility::Private),
        text::keyword("protected").to(Visibility::Protected),
        text::keyword("internal").to(Visibility::Internal),
    ));

    keyword
        .clone()
        .then_ignore(inline_whitespace_required().then(keyword).or_not())
}

fn modifier<'src>() -> impl Parser<'src, &'src str, Modifier> + Clone {
    choice((
        text::keyword("static").to(Modifier::Static),
        text::keyword("virtual").to(Modifier::Virtual),
        text::keyword("override").to(Modifier::Override),
        text::keyword("abstract").to(Modifier::Abstract),
        text::keyword("sealed").to(Modifier::Sealed),
        text::keyword("readonly").to(Modifier::Readonly),
        text::keyword("const").to(Modifier::Const),
        text::keyword("new").to(Modifier::New),
        text::keyword("async").to(Modifier::Async),
        text::keyword("extern").to(Modifier::Extern),
        text::keyword("partial").to(Modifier::Partial),
        text::keyword("volatile").to(Modifier::Volatile),
        text::keyword("unsafe").to(Modifier::Unsafe),
        text::keyword("required").to(Modifier::Required),
    ))
}

/// Zero or more modifiers, each preceded by whitespace
fn modifiers<'src>() -> impl Parser<'src, &'src str, Vec<Modifier>> + Clone {
    inline_whitespace_required()
        .ignore_then(modifier())
        .repeated()
        .collect()
}

fn member_name<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    ident()
        .filter(|name: &&str| !is_reserved(name))
        .map(|name: &str| name.to_string())
}

/// `Name`, `Ns.Name`, `List<int>`, `Dictionary<string, List<int>>`, `int[]`, `int?`
fn type_name<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    recursive(|ty| {
        let path = ident()
            .filter(|segment: &&str| !is_reserved(segment))
            .then(just('.').then(ident()).repeated())
            .to_slice();

        let arguments = ty
            .separated_by(comma_separator())
            .at_least(1)
            .collect::<Vec<String>>()
            .delimited_by(just('<'), just('>'))
            .map(|arguments: Vec<String>| format!("<{}>", arguments.join(", ")));

        let suffix = one_of("[]?").repeated().to_slice();

        path.then(arguments.or_not())
            .then(suffix)
            .map(|((path, arguments), suffix): ((&str, Option<String>), &str)| {
                format!("{}{}{}", path, arguments.unwrap_or_default(), suffix)
            })
    })
}

/// `<T>` or `<TKey, TValue>` after a type or method name
fn type_parameters<'src>() -> impl Parser<'src, &'src str, Vec<String>> + Clone {
    ident()
        .map(|name: &str| name.to_string())
        .separated_by(comma_separator())
        .at_least(1)
        .collect::<Vec<String>>()
        .delimited_by(just('<'), just('>'))
}

/// `= value` with the value kept verbatim
fn default_value<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    inline_whitespace()
        .ignore_then(just('='))
        .ignore_then(inline_whitespace())
        .ignore_then(rest_of_line())
        .map(|value: &str| value.trim().to_string())
}

/// `(...)` up to the matching parenthesis, optionally followed by a `where` clause
fn parameter_list<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    just('(')
        .ignore_then(rest_of_line())
        .filter(|rest: &&str| split_parameter_text(rest).is_some())
        .map(|rest: &str| {
            split_parameter_text(rest)
                .unwrap_or_default()
                .to_string()
        })
}

fn split_parameter_text(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (index, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let trailing = rest[index + 1..].trim();
                    let complete = trailing.is_empty() || trailing.starts_with("where ");
                    return complete.then(|| rest[..index].trim());
                }
            }
            _ => {}
        }
    }
    None
}

fn where_clause<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    inline_whitespace_required()
        .then(text::keyword("where"))
        .then(rest_of_line())
        .ignored()
}

fn class_signature<'src>() -> impl Parser<'src, &'src str, ClassSignature> + Clone {
    let kind = choice((
        text::keyword("class").to(ClassKind::Class),
        text::keyword("interface").to(ClassKind::Interface),
    ));

    let supertypes = inline_whitespace()
        .ignore_then(just(':'))
        .ignore_then(inline_whitespace())
        .ignore_then(
            type_name()
                .separated_by(comma_separator())
                .at_least(1)
                .collect::<Vec<String>>(),
        );

    visibility()
        .then(modifiers())
        .then_ignore(inline_whitespace_required())
        .then(kind)
        .then_ignore(inline_whitespace_required())
        .then(member_name())
        .then(type_parameters().or_not())
        .then(supertypes.or_not())
        .then_ignore(where_clause().or_not())
        .then_ignore(inline_whitespace())
        .then_ignore(end())
        .map(
            |(((((visibility, modifiers), kind), name), type_parameters), supertypes)| {
                let qualifier = if modifiers.contains(&Modifier::Abstract) {
                    Some(ClassQualifier::Abstract)
                } else if modifiers.contains(&Modifier::Static) {
                    Some(ClassQualifier::Static)
                } else {
                    None
                };
                ClassSignature {
                    visibility,
                    qualifier,
                    kind,
                    name,
                    type_parameters: type_parameters.unwrap_or_default(),
                    supertypes: supertypes.unwrap_or_default(),
                }
            },
        )
}

fn property_signature<'src>() -> impl Parser<'src, &'src str, PropertySignature> + Clone {
    visibility()
        .then(modifiers())
        .then_ignore(inline_whitespace_required())
        .then(type_name())
        .then_ignore(inline_whitespace_required())
        .then(member_name())
        .then(default_value().or_not())
        .then_ignore(inline_whitespace())
        .then_ignore(end())
        .map(
            |((((visibility, modifiers), type_name), name), default_value)| PropertySignature {
                visibility,
                modifiers,
                type_name,
                name,
                default_value,
            },
        )
}

fn method_signature<'src>() -> impl Parser<'src, &'src str, MethodSignature> + Clone {
    visibility()
        .then(modifiers())
        .then_ignore(inline_whitespace_required())
        .then(type_name())
        .then_ignore(inline_whitespace_required())
        .then(member_name())
        .then_ignore(type_parameters().or_not())
        .then_ignore(inline_whitespace())
        .then(parameter_list())
        .then_ignore(end())
        .map(
            |((((visibility, modifiers), return_type), name), parameters)| MethodSignature {
                visibility,
                modifiers,
                return_type,
                name,
                parameters,
            },
        )
}

fn constructor_signature<'src>() -> impl Parser<'src, &'src str, ConstructorCandidate> + Clone {
    visibility()
        .then_ignore(inline_whitespace_required())
        .then(member_name())
        .then_ignore(inline_whitespace())
        .then(parameter_list())
        .then_ignore(end())
        .map(|((visibility, name), parameters)| ConstructorCandidate {
            visibility,
            name,
            parameters,
        })
}

fn event_signature<'src>() -> impl Parser<'src, &'src str, EventSignature> + Clone {
    visibility()
        .then(modifiers())
        .then_ignore(inline_whitespace_required())
        .then_ignore(text::keyword("event"))
        .then_ignore(inline_whitespace_required())
        .then(type_name())
        .then_ignore(inline_whitespace_required())
        .then(member_name())
        .then_ignore(inline_whitespace())
        .then_ignore(end())
        .map(
            |(((visibility, modifiers), handler_type), name)| EventSignature {
                visibility,
                modifiers,
                handler_type,
                name,
            },
        )
}

fn parameter_signature<'src>() -> impl Parser<'src, &'src str, ParameterSignature> + Clone {
    let passing = choice((
        text::keyword("ref"),
        text::keyword("out"),
        text::keyword("in"),
        text::keyword("params"),
        text::keyword("this"),
    ))
    .then(inline_whitespace_required())
    .repeated();

    inline_whitespace()
        .ignore_then(passing)
        .ignore_then(type_name())
        .then_ignore(inline_whitespace_required())
        .then(member_name())
        .then(default_value().or_not())
        .then_ignore(inline_whitespace())
        .then_ignore(end())
        .map(|((type_name, name), default_value)| ParameterSignature {
            type_name,
            name,
            default_value,
        })
}
