//! Source discovery and grouping
//!
//! Walks an input tree for model source files and groups them by the
//! directory they live in; each group becomes one diagram document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, span, trace, Level};
use walkdir::WalkDir;

use crate::core::{DiagramConfig, DiagramError, Result};
use crate::diagram::DocumentKind;

/// Model files sharing a parent directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

impl SourceGroup {
    pub fn document_kind(&self) -> DocumentKind {
        DocumentKind::for_directory(&self.directory)
    }
}

/// Recursively collect model source files under `root`, sorted by file name
///
/// Path filters apply to the path starting at `root`'s own directory name,
/// so whatever lies above the input directory never selects or skips a file.
pub fn discover_sources(root: &Path, config: &DiagramConfig) -> Result<Vec<PathBuf>> {
    let discover_span = span!(Level::INFO, "discover_sources", root = %root.display());
    let _enter = discover_span.enter();

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            DiagramError::discovery(path, e.to_string())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if config.selects_path(filter_path(root, path)) {
            trace!(path = %path.display(), "Selected source file");
            files.push(path.to_path_buf());
        }
    }

    debug!(file_count = files.len(), "Discovery completed");
    Ok(files)
}

fn filter_path<'p>(root: &Path, path: &'p Path) -> &'p Path {
    root.parent()
        .and_then(|parent| path.strip_prefix(parent).ok())
        .unwrap_or(path)
}

/// Group files by parent directory; groups are sorted, files keep their order
pub fn group_by_parent(files: impl IntoIterator<Item = PathBuf>) -> Vec<SourceGroup> {
    let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for file in files {
        let directory = file.parent().map(Path::to_path_buf).unwrap_or_default();
        groups.entry(directory).or_default().push(file);
    }

    groups
        .into_iter()
        .map(|(directory, files)| SourceGroup { directory, files })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "public class X\n").unwrap();
    }

    fn project() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("App");
        touch(&root, "Models/Shape.cs");
        touch(&root, "Models/Circle.cs");
        touch(&root, "Models/ViewModels/ShapeViewModel.cs");
        touch(&root, "Models/readme.md");
        touch(&root, "Services/Renderer.cs");
        touch(&root, "bin/Models/Shape.cs");
        touch(&root, "Models/Shape_Test.cs");
        (dir, root)
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let (_dir, root) = project();
        let files = discover_sources(&root, &DiagramConfig::default()).unwrap();
        assert_eq!(
            relative(&root, &files),
            vec![
                "Models/Circle.cs",
                "Models/Shape.cs",
                "Models/ViewModels/ShapeViewModel.cs",
            ]
        );
    }

    #[test]
    fn test_discover_custom_skip_list() {
        let (_dir, root) = project();
        let config = DiagramConfig::default().with_paths_to_skip(["viewmodels"]);
        let files = discover_sources(&root, &config).unwrap();
        assert!(relative(&root, &files).contains(&"bin/Models/Shape.cs".to_string()));
        assert!(!relative(&root, &files)
            .iter()
            .any(|f| f.contains("ViewModels")));
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = discover_sources(&dir.path().join("missing"), &DiagramConfig::default())
            .unwrap_err();
        assert!(matches!(err, DiagramError::Discovery { .. }));
        assert!(err.is_fatal_for_run());
    }

    #[test]
    fn test_group_by_parent() {
        let groups = group_by_parent(vec![
            PathBuf::from("App/Models/Shape.cs"),
            PathBuf::from("App/Models/ViewModels/ShapeViewModel.cs"),
            PathBuf::from("App/Models/Circle.cs"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].directory, PathBuf::from("App/Models"));
        assert_eq!(
            groups[0].files,
            vec![
                PathBuf::from("App/Models/Shape.cs"),
                PathBuf::from("App/Models/Circle.cs"),
            ]
        );
        assert_eq!(groups[0].document_kind(), DocumentKind::Model);
        assert_eq!(groups[1].document_kind(), DocumentKind::ViewModel);
    }
}
