//! Diagram assembler
//!
//! Drives one file or one directory group through the pipeline:
//! read, normalize, match, lex. Member lines are ordered stereotype,
//! properties, events, constructors, methods.

use std::path::Path;

use tracing::{debug, info, span, trace, Level};

use super::model::{DiagramDocument, DiagramModel};
use crate::core::{DiagramConfig, DiagramError, Result};
use crate::discovery::SourceGroup;
use crate::lexer::{
    class_lexer, class_type_lexer, constructor_lexer, event_lexer, method_lexer, property_lexer,
};
use crate::signature::{FileSignatures, Normalizer, SignatureMatcher};

/// Assembles diagram models under one configuration
#[derive(Debug, Clone, Copy)]
pub struct DiagramAssembler<'a> {
    config: &'a DiagramConfig,
    normalizer: Normalizer,
    matcher: SignatureMatcher,
}

impl<'a> DiagramAssembler<'a> {
    pub fn new(config: &'a DiagramConfig) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
            matcher: SignatureMatcher::new(),
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        self.config
    }

    fn signatures(&self, source: &str) -> Result<FileSignatures> {
        let lines = self.normalizer.normalize(source);
        trace!(line_count = lines.len(), "Source normalized");
        self.matcher.match_file(&lines)
    }

    /// Build the model of one source text
    pub fn assemble_source(&self, source: &str) -> Result<DiagramModel> {
        let signatures = self.signatures(source)?;
        Ok(self.lex(&signatures))
    }

    /// Read and build the model of one file
    pub fn assemble_file(&self, path: &Path) -> Result<DiagramModel> {
        let file_span = span!(Level::DEBUG, "assemble_file", path = %path.display());
        let _enter = file_span.enter();

        let source = std::fs::read_to_string(path).map_err(|e| DiagramError::read(path, e))?;
        let model = self
            .assemble_source(&source)
            .map_err(|e| e.at_path(path))?;

        debug!(
            class = model.class_name(),
            edges = model.edges().len(),
            lines = model.lines().len(),
            "Assembled class"
        );
        Ok(model)
    }

    /// Inheritance edges of one source text
    pub fn inheritance_from_source(&self, source: &str) -> Result<Vec<String>> {
        let signatures = self.signatures(source)?;
        Ok(class_lexer(&signatures.class).edges)
    }

    /// Build the document of one directory group
    ///
    /// Every file is read and assembled before the document is built, so a
    /// failing file leaves no partial document behind.
    pub fn assemble_group(&self, group: &SourceGroup) -> Result<DiagramDocument> {
        let group_span = span!(
            Level::INFO,
            "assemble_group",
            directory = %group.directory.display(),
            files = group.files.len()
        );
        let _enter = group_span.enter();

        let models = group
            .files
            .iter()
            .map(|path| self.assemble_file(path))
            .collect::<Result<Vec<_>>>()?;

        let document = DiagramDocument::from_models(group.document_kind(), &models);
        info!(
            document = document.file_name(),
            classes = document.class_count(),
            "Group assembled"
        );
        Ok(document)
    }

    fn lex(&self, signatures: &FileSignatures) -> DiagramModel {
        let header = class_lexer(&signatures.class);

        let stereotype = std::iter::once(class_type_lexer(&signatures.class));
        let properties = signatures
            .properties
            .iter()
            .map(|property| property_lexer(property, self.config));
        let events = signatures
            .events
            .iter()
            .map(|event| event_lexer(event, self.config));
        let constructors = signatures
            .constructors
            .iter()
            .map(|constructor| constructor_lexer(constructor, self.config));
        let methods = signatures
            .methods
            .iter()
            .map(|method| method_lexer(method, self.config));

        let lines = stereotype
            .chain(properties)
            .chain(events)
            .chain(constructors)
            .chain(methods)
            .filter(|line| !line.is_empty())
            .collect();

        DiagramModel::new(header.name, header.edges, lines)
    }
}
