//! Signature extraction
//!
//! Raw source text goes through the [`Normalizer`] to become one declaration
//! per line, then through the [`SignatureMatcher`] to become typed
//! [`Signature`] values grouped in a [`FileSignatures`].

mod grammar;
mod matcher;
mod normalizer;
mod types;

pub use matcher::SignatureMatcher;
pub use normalizer::Normalizer;
pub use types::*;

pub(crate) use grammar::parse_parameter;

use crate::core::Result;

/// Normalize and match one source file
pub fn extract_signatures(source: &str) -> Result<FileSignatures> {
    let lines = Normalizer::new().normalize(source);
    SignatureMatcher::new().match_file(&lines)
}
