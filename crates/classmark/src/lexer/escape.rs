//! Type-name escaping for Mermaid member lines
//!
//! Mermaid reads `<`/`>` as generics markers and `[`/`]` as shape syntax, so
//! type names are rewritten before they reach a diagram. Only the first
//! occurrence of each bracket is replaced.

/// Escape the first `[`, `]`, `<` and `>` of a type name
///
/// `[` becomes `@`, `]` becomes `%%`, `<` and `>` become `~`.
pub fn escape_type(type_name: &str) -> String {
    type_name
        .replacen('[', "@", 1)
        .replacen(']', "%%", 1)
        .replacen('<', "~", 1)
        .replacen('>', "~", 1)
}

/// Turn array placeholders in rendered output back into `[]`
pub fn restore_placeholders(rendered: &str) -> String {
    rendered.replace("@%%", "[]")
}
