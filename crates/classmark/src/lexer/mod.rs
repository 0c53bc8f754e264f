//! Lexers turning typed signatures into Mermaid class-diagram text
//!
//! Each lexer is a pure function of one signature and the
//! [`DiagramConfig`](crate::core::DiagramConfig).

mod class;
mod escape;
mod member;
mod parameter;

pub use class::{class_lexer, class_type_lexer, inheritance_lexer, ClassHeader, InheritanceEdge};
pub use escape::{escape_type, restore_placeholders};
pub use member::{constructor_lexer, event_lexer, method_lexer, property_lexer};
pub use parameter::{parameter_lexer, parse_parameters};
