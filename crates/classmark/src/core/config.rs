//! Diagram generation configuration
//!
//! A [`DiagramConfig`] is built once (defaults, then an optional JSON file,
//! then CLI overrides) and passed by reference to every component. Nothing
//! mutates it afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{DiagramError, Result};

/// Options recognised by the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DiagramConfig {
    /// Render interface implementation as a lollipop instead of a dashed arrow.
    /// Recognised but not applied: every edge is drawn with `<|--`.
    pub use_lollipop: bool,
    /// Use cursive text for abstract members instead of `<<abstract>>`. Not applied.
    pub use_cursive_abstract: bool,
    /// Group members under access headings. Not applied.
    pub group_by_access: bool,
    /// Keep members whose name starts with `_`
    pub include_underscored_properties: bool,
    /// Render method and constructor parameter lists
    pub include_parameters: bool,
    /// Render `event` members like properties
    pub include_events: bool,
    /// Substrings that exclude a lower-cased path from discovery
    pub paths_to_skip: Vec<String>,
    /// Substring a lower-cased path must contain to be a model file
    pub model_marker: String,
    /// Substring a lower-cased path must contain to be a source file
    pub source_marker: String,
    /// Root directory scanned for model files
    pub input_dir: PathBuf,
    /// Directory the diagram documents are written to
    pub output_dir: PathBuf,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            use_lollipop: true,
            use_cursive_abstract: false,
            group_by_access: false,
            include_underscored_properties: false,
            include_parameters: true,
            include_events: false,
            paths_to_skip: [
                "bin",
                "debug",
                "venv",
                "node_modules",
                ".csproj",
                "xaml",
                "assembly",
                "_test",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            model_marker: "models".to_string(),
            source_marker: ".cs".to_string(),
            input_dir: PathBuf::from("../"),
            output_dir: PathBuf::new(),
        }
    }
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DiagramError::config(e.to_string()))
    }

    /// Load a configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");
        let content =
            std::fs::read_to_string(path).map_err(|e| DiagramError::read(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| DiagramError::config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_underscored_properties(mut self, include: bool) -> Self {
        self.include_underscored_properties = include;
        self
    }

    pub fn with_parameters(mut self, include: bool) -> Self {
        self.include_parameters = include;
        self
    }

    pub fn with_events(mut self, include: bool) -> Self {
        self.include_events = include;
        self
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_paths_to_skip<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths_to_skip = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a member with this name is kept under the underscore policy
    pub fn keeps_member(&self, name: &str) -> bool {
        self.include_underscored_properties || !name.starts_with('_')
    }

    /// Whether a discovered file path belongs to the model set
    pub fn selects_path(&self, path: &Path) -> bool {
        let lower = path.to_string_lossy().to_lowercase();
        let contains = |marker: &str| lower.contains(&marker.to_lowercase());
        contains(&self.model_marker)
            && contains(&self.source_marker)
            && !self.paths_to_skip.iter().any(|skip| contains(skip))
    }
}
