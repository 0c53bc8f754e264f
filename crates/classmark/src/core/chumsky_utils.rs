//! Shared chumsky parser utilities for signature parsing
//!
//! Normalized lines are single-line, so none of these consume newlines.

use chumsky::prelude::*;

/// Parse inline whitespace only (spaces and tabs, no newlines).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just(' ').or(just('\t')).repeated().ignored()
}

/// Parse required inline whitespace (at least one space or tab).
///
/// Uses explicit character matching to avoid the "repeated combinator making no progress"
/// issue.
pub fn inline_whitespace_required<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

/// Parse a comma separator with optional surrounding inline whitespace.
pub fn comma_separator<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just(',').padded_by(inline_whitespace()).ignored()
}

/// Parse the rest of the line verbatim.
pub fn rest_of_line<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any().repeated().to_slice()
}
