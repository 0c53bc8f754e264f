//! Run orchestration
//!
//! Discovery → grouping → assembly → writing. A failing group is logged and
//! recorded in the [`RunSummary`]; only discovery failures abort the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, span, warn, Level};

use crate::core::{DiagramConfig, DiagramError, Result};
use crate::diagram::{DiagramAssembler, DiagramDocument};
use crate::discovery::{discover_sources, group_by_parent, SourceGroup};

/// A group that produced no document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupFailure {
    pub directory: PathBuf,
    pub message: String,
}

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Documents written, in group order; a path appears once per write
    pub written: Vec<PathBuf>,
    pub failures: Vec<GroupFailure>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the whole pipeline for one configuration
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: DiagramConfig,
}

impl Orchestrator {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Discover, assemble and write every group under the configured input directory
    pub fn run(&self) -> Result<RunSummary> {
        let run_span = span!(
            Level::INFO,
            "run",
            input_dir = %self.config.input_dir.display(),
            output_dir = %self.config.output_dir.display()
        );
        let _enter = run_span.enter();

        info!("Starting diagram generation");

        let files = discover_sources(&self.config.input_dir, &self.config)?;
        let groups = group_by_parent(files);
        debug!(group_count = groups.len(), "Sources grouped");

        let assembler = DiagramAssembler::new(&self.config);
        let mut summary = RunSummary::default();
        let mut targets = HashSet::new();

        for group in &groups {
            match self.run_group(&assembler, group, &mut targets) {
                Ok(path) => summary.written.push(path),
                Err(e) => {
                    error!(
                        directory = %group.directory.display(),
                        error = %e,
                        "Group failed, continuing with the next one"
                    );
                    summary.failures.push(GroupFailure {
                        directory: group.directory.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            written = summary.written.len(),
            failed = summary.failures.len(),
            "Diagram generation completed"
        );
        Ok(summary)
    }

    fn run_group(
        &self,
        assembler: &DiagramAssembler<'_>,
        group: &SourceGroup,
        targets: &mut HashSet<PathBuf>,
    ) -> Result<PathBuf> {
        let document = assembler.assemble_group(group)?;
        let target = self.config.output_dir.join(document.file_name());

        if !targets.insert(target.clone()) {
            warn!(
                path = %target.display(),
                directory = %group.directory.display(),
                "Overwriting document written earlier in this run"
            );
        }

        write_document(&document, &target)?;
        Ok(target)
    }

    /// Assemble a single file into a document without writing it
    pub fn render_file(&self, path: &Path) -> Result<DiagramDocument> {
        let group = SourceGroup {
            directory: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            files: vec![path.to_path_buf()],
        };
        DiagramAssembler::new(&self.config).assemble_group(&group)
    }
}

/// Write a rendered document, creating its directory first
pub fn write_document(document: &DiagramDocument, target: &Path) -> Result<()> {
    if let Some(directory) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(directory).map_err(|e| DiagramError::write(directory, e))?;
    }
    fs::write(target, document.render()).map_err(|e| DiagramError::write(target, e))?;
    debug!(path = %target.display(), "Document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_run_writes_documents() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("App");
        let output = dir.path().join("out/docs");
        write(&input, "Models/Shape.cs", "public class Shape\n{\n public int Sides;\n}\n");
        write(
            &input,
            "Models/ViewModels/ShapeViewModel.cs",
            "public class ShapeViewModel : Observable\n{\n}\n",
        );

        let config = DiagramConfig::default()
            .with_input_dir(&input)
            .with_output_dir(&output);
        let summary = Orchestrator::new(config).run().unwrap();

        assert!(summary.is_success());
        assert_eq!(
            summary.written,
            vec![output.join("model.md"), output.join("viewmodel.md")]
        );
        let model = fs::read_to_string(output.join("model.md")).unwrap();
        assert!(model.contains("class Shape {\n\t+Sides : int\n}\n"));
        let view_model = fs::read_to_string(output.join("viewmodel.md")).unwrap();
        assert!(view_model.contains("Observable<|--+ShapeViewModel"));
    }

    #[test]
    fn test_failing_group_does_not_stop_the_run() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("App");
        let output = dir.path().join("out");
        write(&input, "Models/Broken.cs", "namespace Nothing\n{\n}\n");
        write(&input, "Models/ViewModels/Main.cs", "public class Main\n{\n}\n");

        let config = DiagramConfig::default()
            .with_input_dir(&input)
            .with_output_dir(&output);
        let summary = Orchestrator::new(config).run().unwrap();

        assert_eq!(summary.written, vec![output.join("viewmodel.md")]);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].directory.ends_with("Models"));
        assert!(summary.failures[0].message.contains("Broken.cs"));
        assert!(!output.join("model.md").exists());
    }

    #[test]
    fn test_colliding_groups_overwrite() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("App");
        let output = dir.path().join("out");
        write(&input, "Models/First.cs", "public class First\n{\n}\n");
        write(&input, "Models/Nested/Second.cs", "public class Second\n{\n}\n");

        let config = DiagramConfig::default()
            .with_input_dir(&input)
            .with_output_dir(&output);
        let summary = Orchestrator::new(config).run().unwrap();

        assert_eq!(summary.written.len(), 2);
        let model = fs::read_to_string(output.join("model.md")).unwrap();
        assert!(model.contains("class Second {"));
        assert!(!model.contains("class First {"));
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = DiagramConfig::default().with_input_dir(dir.path().join("missing"));
        let err = Orchestrator::new(config).run().unwrap_err();
        assert!(err.is_fatal_for_run());
    }

    #[test]
    fn test_render_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Models/Shape.cs", "public static class Shape\n{\n}\n");

        let config = DiagramConfig::default();
        let document = Orchestrator::new(config)
            .render_file(&dir.path().join("Models/Shape.cs"))
            .unwrap();
        assert!(document.render().contains("class Shape {\n\t<<static>>\n}\n"));
    }
}
