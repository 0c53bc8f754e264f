//! Parameter list lexer

use tracing::debug;

use crate::core::DiagramConfig;
use crate::signature::{parse_parameter, ParameterSignature};

/// Render a raw parameter list as `name: type, name: type`
///
/// Empty when parameters are disabled or the list is empty. Defaults are
/// dropped and parameters that do not parse are skipped.
pub fn parameter_lexer(raw: &str, config: &DiagramConfig) -> String {
    if !config.include_parameters || raw.trim().is_empty() {
        return String::new();
    }

    parse_parameters(raw)
        .iter()
        .map(|parameter| format!("{}: {}", parameter.name, parameter.type_name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse every parameter of a raw list, in source order
pub fn parse_parameters(raw: &str) -> Vec<ParameterSignature> {
    split_top_level(raw)
        .into_iter()
        .filter_map(|text| {
            let parameter = parse_parameter(text);
            if parameter.is_none() {
                debug!(parameter = text, "Skipping unparseable parameter");
            }
            parameter
        })
        .collect()
}

/// Split at commas outside brackets and string literals
fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (index, c) in raw.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(raw[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(raw[start..].trim());

    parts.into_iter().filter(|part| !part.is_empty()).collect()
}
