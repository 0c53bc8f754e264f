//! Signature matcher
//!
//! Classifies normalized lines into typed signatures. A file is matched in a
//! single left-to-right pass: the first class line names the file's type,
//! every other line is classified once and appended to its kind's list, so
//! declaration order within a kind is the source order.

use tracing::{debug, span, trace, Level};

use super::grammar;
use super::types::{FileSignatures, NormalizedLine, Signature};
use crate::core::{DiagramError, Result};

/// Classifies normalized lines
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureMatcher;

impl SignatureMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Whether a line is already a complete single-line declaration
    ///
    /// Used by the normalizer to decide whether a line needs its
    /// continuation lines. Constructors are not included: they are only
    /// recognisable once the class name is known.
    pub fn is_single_line_declaration(&self, line: &str) -> bool {
        grammar::parse_class(line).is_some()
            || grammar::parse_method(line).is_some()
            || grammar::parse_property(line).is_some()
            || grammar::parse_event(line).is_some()
    }

    /// Classify one line
    ///
    /// Class lines win over everything. For member lines the order is
    /// event, constructor (only when `class_name` is known and matches),
    /// method, property; the grammar keeps method and property disjoint.
    pub fn classify(&self, line: &str, class_name: Option<&str>) -> Option<Signature> {
        if let Some(class) = grammar::parse_class(line) {
            return Some(Signature::Class(class));
        }
        if let Some(event) = grammar::parse_event(line) {
            return Some(Signature::Event(event));
        }
        if let Some(name) = class_name {
            if let Some(candidate) = grammar::parse_constructor(line) {
                if candidate.name == name {
                    return Some(Signature::Constructor(candidate.into_signature()));
                }
            }
        }
        if let Some(method) = grammar::parse_method(line) {
            return Some(Signature::Method(method));
        }
        grammar::parse_property(line).map(Signature::Property)
    }

    /// Classify one line, failing when it is not a recognisable declaration
    pub fn classify_strict(&self, line: &str, class_name: Option<&str>) -> Result<Signature> {
        self.classify(line, class_name)
            .ok_or_else(|| DiagramError::malformed(line, "not a class, member, or event signature"))
    }

    /// Match every signature of one normalized file
    ///
    /// Fails with [`DiagramError::MissingClassSignature`] when no line is a
    /// class or interface declaration.
    pub fn match_file(&self, lines: &[NormalizedLine]) -> Result<FileSignatures> {
        let match_span = span!(Level::DEBUG, "match_file", line_count = lines.len());
        let _enter = match_span.enter();

        let (class_index, class) = lines
            .iter()
            .enumerate()
            .find_map(|(index, line)| grammar::parse_class(line.as_str()).map(|c| (index, c)))
            .ok_or_else(DiagramError::missing_class_signature)?;

        trace!(class = %class.name, "Found class signature");

        let class_name = class.name.clone();
        let mut file = FileSignatures::new(class);

        for (index, line) in lines.iter().enumerate() {
            if index == class_index {
                continue;
            }
            match self.classify(line.as_str(), Some(&class_name)) {
                Some(Signature::Class(nested)) => {
                    debug!(class = %class_name, nested = %nested.name, "Skipping nested type declaration");
                }
                Some(Signature::Property(property)) => file.properties.push(property),
                Some(Signature::Event(event)) => file.events.push(event),
                Some(Signature::Constructor(constructor)) => file.constructors.push(constructor),
                Some(Signature::Method(method)) => file.methods.push(method),
                None => {
                    debug!(class = %class_name, line = %line, "Skipping unrecognised declaration");
                }
            }
        }

        debug!(
            class = %class_name,
            properties = file.properties.len(),
            events = file.events.len(),
            constructors = file.constructors.len(),
            methods = file.methods.len(),
            "Matched file signatures"
        );

        Ok(file)
    }
}
