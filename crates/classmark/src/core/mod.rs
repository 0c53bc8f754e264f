//! Core building blocks shared by every stage of the pipeline
//!
//! Symbols, configuration, errors and logging live here; the signature,
//! lexer and diagram stages only depend on this module and on each other
//! in that order.

pub mod chumsky_utils;
mod config;
mod error;
pub mod logging;
mod symbols;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use symbols::*;
