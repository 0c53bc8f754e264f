//! Assembled diagram values
//!
//! A [`DiagramModel`] is one class; a [`DiagramDocument`] is the Markdown
//! document built from every class of a directory.

use std::path::Path;

/// Which document a directory produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Model,
    ViewModel,
}

impl DocumentKind {
    /// `ViewModel` when the directory's own name mentions `viewmodel`, any case
    pub fn for_directory(directory: &Path) -> Self {
        let is_view_model = directory
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase().contains("viewmodel"))
            .unwrap_or(false);

        if is_view_model {
            DocumentKind::ViewModel
        } else {
            DocumentKind::Model
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Model => "model.md",
            DocumentKind::ViewModel => "viewmodel.md",
        }
    }
}

/// One class: its inheritance edges and its lexed member lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramModel {
    class_name: String,
    edges: Vec<String>,
    lines: Vec<String>,
}

impl DiagramModel {
    /// `lines` are complete body lines (`\t...\n`), stereotype first
    pub fn new(class_name: impl Into<String>, edges: Vec<String>, lines: Vec<String>) -> Self {
        Self {
            class_name: class_name.into(),
            edges,
            lines,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Edges joined one per line
    pub fn edge_fragment(&self) -> String {
        self.edges.join("\n")
    }

    /// `class Name {` block, closed and newline terminated
    pub fn body(&self) -> String {
        let mut body = format!("class {} {{\n", self.class_name);
        for line in &self.lines {
            body.push_str(line);
        }
        body.push_str("}\n");
        body
    }
}

/// Mermaid document for one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDocument {
    kind: DocumentKind,
    edge_fragments: Vec<String>,
    bodies: Vec<String>,
}

impl DiagramDocument {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            edge_fragments: Vec::new(),
            bodies: Vec::new(),
        }
    }

    /// Build a document from models in file order
    pub fn from_models(kind: DocumentKind, models: &[DiagramModel]) -> Self {
        let mut document = Self::new(kind);
        for model in models {
            document.push_model(model);
        }
        document
    }

    pub fn push_model(&mut self, model: &DiagramModel) {
        self.edge_fragments.push(model.edge_fragment());
        self.bodies.push(model.body());
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    pub fn class_count(&self) -> usize {
        self.bodies.len()
    }

    /// Fenced Markdown text: every edge fragment precedes every class body
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> =
            Vec::with_capacity(self.edge_fragments.len() + self.bodies.len() + 3);
        parts.push("```mermaid");
        parts.push("classDiagram\n");
        parts.extend(self.edge_fragments.iter().map(String::as_str));
        parts.extend(self.bodies.iter().map(String::as_str));
        parts.push("```");
        parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> DiagramModel {
        DiagramModel::new(
            "Shape",
            vec!["IDrawable<|--+Shape".to_string()],
            vec!["\t<<abstract>>\n".to_string(), "\t+Area()* double\n".to_string()],
        )
    }

    #[test]
    fn test_document_kind_for_directory() {
        assert_eq!(
            DocumentKind::for_directory(Path::new("App/Models")),
            DocumentKind::Model
        );
        assert_eq!(
            DocumentKind::for_directory(Path::new("App/Models/ViewModels")),
            DocumentKind::ViewModel
        );
        assert_eq!(
            DocumentKind::for_directory(Path::new("ViewModels/Models")),
            DocumentKind::Model
        );
        assert_eq!(DocumentKind::ViewModel.file_name(), "viewmodel.md");
    }

    #[test]
    fn test_model_body() {
        assert_eq!(
            shape().body(),
            "class Shape {\n\t<<abstract>>\n\t+Area()* double\n}\n"
        );
        assert_eq!(shape().edge_fragment(), "IDrawable<|--+Shape");
    }

    #[test]
    fn test_render_single_model() {
        let document = DiagramDocument::from_models(DocumentKind::Model, &[shape()]);
        assert_eq!(
            document.render(),
            "```mermaid\nclassDiagram\n\nIDrawable<|--+Shape\nclass Shape {\n\t<<abstract>>\n\t+Area()* double\n}\n\n```"
        );
    }

    #[test]
    fn test_render_places_edges_before_bodies() {
        let circle = DiagramModel::new(
            "Circle",
            vec!["Shape<|--+Circle".to_string()],
            vec!["\t+Radius : double\n".to_string()],
        );
        let rendered =
            DiagramDocument::from_models(DocumentKind::Model, &[shape(), circle]).render();

        let last_edge = rendered.find("Shape<|--+Circle").unwrap();
        let first_body = rendered.find("class Shape {").unwrap();
        assert!(last_edge < first_body);
        assert!(rendered.find("class Circle {").unwrap() > first_body);
    }

    #[test]
    fn test_empty_document() {
        let document = DiagramDocument::new(DocumentKind::ViewModel);
        assert_eq!(document.class_count(), 0);
        assert_eq!(document.render(), "```mermaid\nclassDiagram\n\n```");
    }
}
