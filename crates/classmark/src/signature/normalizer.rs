//! Source normalizer
//!
//! Turns the text of one source file into single-line declaration
//! statements: bodies, accessor blocks, initializers, terminators and
//! chained constructor calls are removed, and declarations that wrap over
//! several physical lines are joined.

use tracing::{span, trace, Level};

use super::matcher::SignatureMatcher;
use super::types::NormalizedLine;
use crate::core::Visibility;

/// Words allowed inside an auto-property accessor block
const ACCESSOR_WORDS: &[&str] = &[
    "get", "set", "init", "public", "private", "protected", "internal",
];

/// Normalizes raw source text
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    matcher: SignatureMatcher,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            matcher: SignatureMatcher::new(),
        }
    }

    /// Normalize one source file into ordered declaration statements
    pub fn normalize(&self, raw: &str) -> Vec<NormalizedLine> {
        let normalize_span = span!(Level::DEBUG, "normalize", input_len = raw.len());
        let _enter = normalize_span.enter();

        let mut statements = Vec::new();
        let mut definition: Option<String> = None;
        let mut in_block_comment = false;

        for physical in raw.lines() {
            let CleanLine { text: line, terminated } = clean_line(physical, &mut in_block_comment);

            if let Some(mut buffer) = definition.take() {
                if Visibility::starts_line(&line) {
                    trace!(definition = %buffer, "Definition left open by next declaration");
                    push_statement(&mut statements, &buffer);
                } else {
                    if !line.is_empty() {
                        buffer.push(' ');
                        buffer.push_str(&line);
                    }
                    if terminated || is_complete(&buffer) {
                        push_statement(&mut statements, &buffer);
                    } else {
                        definition = Some(buffer);
                    }
                    continue;
                }
            }

            if !Visibility::starts_line(&line) {
                if !line.is_empty() {
                    trace!(line = %line, "Ignoring line without access modifier");
                }
                continue;
            }

            let statement = finish_statement(&line);
            if terminated
                || is_complete(&line)
                || self.matcher.is_single_line_declaration(&statement)
            {
                push_statement(&mut statements, &line);
            } else {
                trace!(line = %line, "Buffering multi-line definition");
                definition = Some(line);
            }
        }

        if let Some(buffer) = definition {
            trace!(definition = %buffer, "Flushing definition open at end of input");
            push_statement(&mut statements, &buffer);
        }

        trace!(statement_count = statements.len(), "Normalization completed");
        statements
    }
}

fn push_statement(statements: &mut Vec<NormalizedLine>, definition: &str) {
    let statement = finish_statement(definition);
    if !statement.is_empty() {
        statements.push(NormalizedLine::new(statement));
    }
}

/// A buffered definition is complete once its body starts or it is terminated
fn is_complete(definition: &str) -> bool {
    definition.contains('{') || definition.trim_end().ends_with(';')
}

/// A physical line with comments, attributes and accessor blocks removed
struct CleanLine {
    text: String,
    /// An auto-property accessor block closed the declaration
    terminated: bool,
}

fn clean_line(physical: &str, in_block_comment: &mut bool) -> CleanLine {
    let uncommented = strip_comments(physical, in_block_comment);
    let line = strip_leading_attributes(uncommented.trim());
    let (line, terminated) = strip_accessor_blocks(line);
    CleanLine {
        text: collapse_whitespace(&line),
        terminated,
    }
}

/// Drop `//` and `/* */` comments outside string and char literals
fn strip_comments(line: &str, in_block_comment: &mut bool) -> String {
    let mut kept = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if *in_block_comment {
            if c == '*' && chars.next_if_eq(&'/').is_some() {
                *in_block_comment = false;
                kept.push(' ');
            }
            continue;
        }
        if let Some(open) = quote {
            kept.push(c);
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
            '"' | '\'' => {
                quote = Some(c);
                kept.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => break,
                Some('*') => {
                    chars.next();
                    *in_block_comment = true;
                }
                _ => kept.push(c),
            },
            _ => kept.push(c),
        }
    }

    kept
}

/// Everything that turns a complete definition into a statement
fn finish_statement(definition: &str) -> String {
    let mut statement = definition;
    if let Some(brace) = statement.find('{') {
        statement = &statement[..brace];
    }
    if let Some(terminator) = statement.find(';') {
        statement = &statement[..terminator];
    }
    let statement = strip_initializer(statement);
    let statement = remove_chained_constructor_call(statement);
    collapse_whitespace(statement)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_leading_attributes(mut line: &str) -> &str {
    while line.starts_with('[') {
        match matching_close(line, '[', ']') {
            Some(close) => line = line[close + 1..].trim_start(),
            None => break,
        }
    }
    line
}

/// Remove `{ get; set; }`-style blocks, leaving bodied accessors alone.
/// The flag reports whether any block was removed.
fn strip_accessor_blocks(line: &str) -> (String, bool) {
    let mut result = String::with_capacity(line.len());
    let mut stripped = false;
    let mut rest = line;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };
        let inner = &rest[open + 1..close];
        let is_accessor_block = inner.contains(';')
            && inner
                .split(|c: char| c == ';' || c.is_whitespace())
                .filter(|word| !word.is_empty())
                .all(|word| ACCESSOR_WORDS.contains(&word));

        if is_accessor_block {
            result.push_str(&rest[..open]);
            stripped = true;
        } else {
            result.push_str(&rest[..=close]);
        }
        rest = &rest[close + 1..];
    }

    result.push_str(rest);
    (result, stripped)
}

/// Cut an `= value` or `=> body` that is not inside brackets
fn strip_initializer(statement: &str) -> &str {
    let mut depth = 0usize;
    for (index, c) in statement.char_indices() {
        match c {
            '(' | '[' | '<' => depth += 1,
            ')' | ']' | '>' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => return statement[..index].trim_end(),
            _ => {}
        }
    }
    statement
}

/// `public Shape(int sides) : base(sides)` becomes `public Shape(int sides)`
fn remove_chained_constructor_call(statement: &str) -> &str {
    let Some(open) = statement.find('(') else {
        return statement;
    };
    let Some(close) = matching_close(&statement[open..], '(', ')').map(|offset| open + offset)
    else {
        return statement;
    };

    let after = statement[close + 1..].trim_start();
    let Some(call) = after.strip_prefix(':') else {
        return statement;
    };
    let call = call.trim_start();
    let chains = ["base", "this"].iter().any(|keyword| {
        call.strip_prefix(keyword).is_some_and(|rest| {
            rest.trim_start().starts_with('(')
        })
    });

    if chains {
        &statement[..=close]
    } else {
        statement
    }
}

/// Byte index of the bracket closing the one at the start of `text`
fn matching_close(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}
