//! classmark - Generate Mermaid class diagrams from C# source signatures
//!
//! Source files are reduced to their declaration signatures, classified by
//! a small grammar, and lexed into Mermaid `classDiagram` text. Method
//! bodies are never parsed.
//!
//! # Quick Start
//!
//! ```rust
//! use classmark::{generate_from_source, DiagramConfig};
//!
//! let source = "public abstract class Shape : IDrawable\n{\n    public abstract double Area();\n}";
//! let markdown = generate_from_source(source, &DiagramConfig::default()).unwrap();
//! assert!(markdown.contains("IDrawable<|--+Shape"));
//! assert!(markdown.contains("\t+Area()* double\n"));
//! ```
//!
//! # Advanced Usage
//!
//! For whole projects, point an [`Orchestrator`](orchestrator::Orchestrator)
//! at an input directory; it writes one `model.md` or `viewmodel.md` per
//! directory of model files:
//!
//! ```rust,no_run
//! use classmark::prelude::*;
//!
//! let config = DiagramConfig::default()
//!     .with_input_dir("MyApp")
//!     .with_output_dir("docs");
//! let summary = Orchestrator::new(config).run().unwrap();
//! for failure in &summary.failures {
//!     eprintln!("{}: {}", failure.directory.display(), failure.message);
//! }
//! ```

pub mod core;
pub mod diagram;
pub mod discovery;
pub mod lexer;
pub mod orchestrator;
pub mod signature;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{DiagramConfig, DiagramError, Result, Visibility};
    pub use crate::diagram::{DiagramAssembler, DiagramDocument, DiagramModel, DocumentKind};
    pub use crate::discovery::{discover_sources, group_by_parent, SourceGroup};
    pub use crate::orchestrator::{Orchestrator, RunSummary};
    pub use crate::signature::{NormalizedLine, Normalizer, Signature, SignatureMatcher};
}

/// Render the Markdown document of a single source text
///
/// # Example
/// ```rust
/// use classmark::{generate_from_source, DiagramConfig};
///
/// let markdown = generate_from_source("public class Point\n{\n    public int X;\n}", &DiagramConfig::default()).unwrap();
/// assert!(markdown.starts_with("```mermaid\nclassDiagram\n"));
/// assert!(markdown.contains("class Point {\n\t+X : int\n}\n"));
/// ```
pub fn generate_from_source(source: &str, config: &DiagramConfig) -> Result<String> {
    use crate::diagram::{DiagramAssembler, DiagramDocument, DocumentKind};

    let model = DiagramAssembler::new(config).assemble_source(source)?;
    Ok(DiagramDocument::from_models(DocumentKind::Model, &[model]).render())
}

/// Normalize source text into its declaration lines
pub fn normalize(source: &str) -> Vec<signature::NormalizedLine> {
    signature::Normalizer::new().normalize(source)
}
