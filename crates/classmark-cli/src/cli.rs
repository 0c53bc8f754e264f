//! Command-line interface for the classmark utility
//!
//! Provides a CLI to turn C# model folders into Mermaid class diagrams.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use classmark::core::logging::init_logging;
use classmark::orchestrator::{Orchestrator, RunSummary};
use classmark::{generate_from_source, normalize, DiagramConfig};

/// classmark - Generate Mermaid class diagrams from C# models
#[derive(Parser)]
#[command(name = "classmark")]
#[command(about = "Generate Mermaid.js class diagrams from C# model folders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Options that override the configuration file
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramFlags {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep members whose name starts with an underscore
    #[arg(long)]
    pub include_underscored: bool,

    /// Leave method and constructor parameter lists empty
    #[arg(long)]
    pub no_parameters: bool,

    /// Render events as members
    #[arg(long)]
    pub include_events: bool,
}

impl DiagramFlags {
    /// Defaults, then the configuration file, then the flags
    pub fn load(&self) -> Result<DiagramConfig> {
        let mut config = match &self.config {
            Some(path) => DiagramConfig::from_json_file(path)?,
            None => DiagramConfig::default(),
        };
        if self.include_underscored {
            config = config.with_underscored_properties(true);
        }
        if self.no_parameters {
            config = config.with_parameters(false);
        }
        if self.include_events {
            config = config.with_events(true);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate model.md / viewmodel.md for every model folder under a directory
    Generate {
        /// Directory to scan (defaults to the configured input directory)
        input_dir: Option<PathBuf>,

        /// Directory the documents are written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        flags: DiagramFlags,
    },

    /// Render the diagram of a single source file
    File {
        /// Input source file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the Markdown document (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: DiagramFlags,
    },

    /// Print the normalized declaration lines of a source file
    Normalize {
        /// Input source file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Main CLI application
#[derive(Default)]
pub struct ClassmarkApp;

impl ClassmarkApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over the CLI flags
        let log_level_str = std::env::var("CLASSMARK_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("CLASSMARK_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            tracing::debug!(error = %e, "Logging already initialized");
        }

        if cli.verbose {
            eprintln!("classmark v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input_dir,
                output_dir,
                json,
                flags,
            } => self.generate_command(input_dir, output_dir, json, &flags, cli.verbose),
            Commands::File {
                input,
                output,
                flags,
            } => self.file_command(input, output, &flags, cli.verbose),
            Commands::Normalize { input } => self.normalize_command(input, cli.verbose),
        }
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        json: bool,
        flags: &DiagramFlags,
        verbose: bool,
    ) -> Result<()> {
        let mut config = flags.load()?;
        if let Some(dir) = input_dir {
            config = config.with_input_dir(dir);
        }
        if let Some(dir) = output_dir {
            config = config.with_output_dir(dir);
        }

        if verbose {
            eprintln!(
                "Scanning {} for model files",
                config.input_dir.display()
            );
        }

        let summary = Orchestrator::new(config).run()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&summary);
        }
        Ok(())
    }

    /// Handle the file command
    fn file_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        flags: &DiagramFlags,
        verbose: bool,
    ) -> Result<()> {
        let config = flags.load()?;

        let markdown = match input.as_deref().filter(|path| !is_stdio(path)) {
            Some(path) => Orchestrator::new(config).render_file(path)?.render(),
            None => {
                let content = self.read_input(None)?;
                if verbose {
                    eprintln!("Read {} bytes of input", content.len());
                }
                generate_from_source(&content, &config)?
            }
        };

        self.write_output(output, &markdown)
    }

    /// Handle the normalize command
    fn normalize_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let lines = normalize(&content);
        let text = lines
            .iter()
            .map(|line| line.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.write_output(None, &text)
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if !is_stdio(&path) => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if !is_stdio(&path) => fs::write(&path, content)
                .with_context(|| format!("Failed to write output file '{}'", path.display())),
            _ => {
                let stdout_content = if content.is_empty() || content.ends_with('\n') {
                    content.to_string()
                } else {
                    format!("{}\n", content)
                };
                print!("{}", stdout_content);
                io::stdout().flush()?;
                Ok(())
            }
        }
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn print_summary(summary: &RunSummary) {
    for path in &summary.written {
        println!("wrote {}", path.display());
    }
    for failure in &summary.failures {
        eprintln!("failed {}: {}", failure.directory.display(), failure.message);
    }
    println!(
        "{} document(s) written, {} group(s) failed",
        summary.written.len(),
        summary.failures.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_generate_command() {
        let args = vec![
            "classmark",
            "generate",
            "../MyApp",
            "--output-dir",
            "docs",
            "--include-underscored",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Generate {
                input_dir,
                output_dir,
                json,
                flags,
            } => {
                assert_eq!(input_dir.unwrap(), PathBuf::from("../MyApp"));
                assert_eq!(output_dir.unwrap(), PathBuf::from("docs"));
                assert!(json);
                assert!(flags.include_underscored);
                assert!(!flags.no_parameters);
                assert!(flags.config.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_parsing_file_command() {
        let args = vec![
            "classmark",
            "--log-level",
            "debug",
            "file",
            "--input",
            "Shape.cs",
            "--no-parameters",
            "--include-events",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Commands::File {
                input,
                output,
                flags,
            } => {
                assert_eq!(input.unwrap().to_string_lossy(), "Shape.cs");
                assert!(output.is_none());
                assert!(flags.no_parameters);
                assert!(flags.include_events);
            }
            _ => panic!("Expected File command"),
        }
    }

    #[test]
    fn test_cli_parsing_normalize_command() {
        let cli = Cli::try_parse_from(vec!["classmark", "normalize", "-i", "-"]).unwrap();
        match cli.command {
            Commands::Normalize { input } => assert_eq!(input.unwrap(), PathBuf::from("-")),
            _ => panic!("Expected Normalize command"),
        }
    }

    #[test]
    fn test_log_flags_after_subcommand() {
        let args = vec![
            "classmark",
            "generate",
            "App",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Generate { .. }));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(vec!["classmark", "convert"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("classmark.json");
        fs::write(
            &path,
            r#"{ "includeParameters": true, "modelMarker": "entities" }"#,
        )
        .unwrap();

        let flags = DiagramFlags {
            config: Some(path),
            no_parameters: true,
            ..DiagramFlags::default()
        };
        let config = flags.load().unwrap();
        assert!(!config.include_parameters);
        assert_eq!(config.model_marker, "entities");
    }

    #[test]
    fn test_flags_reject_bad_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("classmark.json");
        fs::write(&path, r#"{ "unknownOption": 1 }"#).unwrap();

        let flags = DiagramFlags {
            config: Some(path),
            ..DiagramFlags::default()
        };
        assert!(flags.load().is_err());
    }

    #[test]
    fn test_file_command_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Shape.cs");
        let output = dir.path().join("shape.md");
        fs::write(
            &input,
            "public abstract class Shape : IDrawable\n{\n    public abstract double Area();\n}\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from(vec![
            "classmark",
            "file",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        ClassmarkApp::new().run(cli).unwrap();

        let markdown = fs::read_to_string(&output).unwrap();
        assert!(markdown.starts_with("```mermaid\n"));
        assert!(markdown.contains("IDrawable<|--+Shape"));
        assert!(markdown.contains("\t+Area()* double\n"));
    }

    #[test]
    fn test_file_command_missing_input() {
        let dir = tempdir().unwrap();
        let cli = Cli::try_parse_from(vec![
            "classmark",
            "file",
            "--input",
            dir.path().join("Missing.cs").to_str().unwrap(),
        ])
        .unwrap();
        let err = ClassmarkApp::new().run(cli).unwrap_err();
        assert!(err.to_string().contains("Missing.cs"));
    }

    #[test]
    fn test_generate_command_writes_documents() {
        let dir = tempdir().unwrap();
        let models = dir.path().join("App/Models");
        fs::create_dir_all(&models).unwrap();
        fs::write(models.join("Point.cs"), "public class Point\n{\n    public int X;\n}\n").unwrap();
        let output = dir.path().join("docs");

        let cli = Cli::try_parse_from(vec![
            "classmark",
            "generate",
            dir.path().join("App").to_str().unwrap(),
            "--output-dir",
            output.to_str().unwrap(),
        ])
        .unwrap();
        ClassmarkApp::new().run(cli).unwrap();

        let markdown = fs::read_to_string(output.join("model.md")).unwrap();
        assert!(markdown.contains("class Point {\n\t+X : int\n}\n"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.md");
        ClassmarkApp::new()
            .write_output(Some(path.clone()), "content")
            .unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "content");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = ClassmarkApp::new()
            .read_input(Some(PathBuf::from("/nonexistent/Shape.cs")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
