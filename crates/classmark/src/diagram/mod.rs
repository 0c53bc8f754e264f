//! Diagram assembly: lexed classes collected into Mermaid documents

mod assembler;
mod model;

pub use assembler::DiagramAssembler;
pub use model::{DiagramDocument, DiagramModel, DocumentKind};
