//! Argument parsing and command execution for the petersen CLI.

use std::io::{self, BufRead, Write};

use clap::Parser;
use thiserror::Error;
use tracing::{field, info, instrument, warn, Span};

use crate::config::{ConfigError, GenerationConfig, OutputFormat, RawParameter};
use crate::graph::export::ExportError;
use crate::graph::generate::{Generate, Weighting};
use crate::graph::{Graph, GraphError};

const VERTICES_PROMPT: &str = "Enter number of vertices: ";
const SKIP_PROMPT: &str = "Enter skip: ";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "petersen", about = "Generate generalized Petersen graphs GP(n, k).")]
pub struct Cli {
    /// Number of outer vertices `n`, at least 2. Prompted for if missing.
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub vertices: Option<String>,

    /// Step `k` of the inner circulant, between 1 and n / 2. Prompted for if missing.
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    pub skip: Option<String>,

    /// Label edges with graceful-style weights.
    #[arg(long)]
    pub weighted: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Report)]
    pub format: OutputFormat,

    /// Graph name used in dot and svg output. Defaults to `GP(n, k)`.
    #[arg(long)]
    pub name: Option<String>,

    /// Generate from every yaml or ron config matching this glob pattern instead.
    #[arg(long, conflicts_with_all = ["vertices", "skip", "weighted", "name"])]
    pub config: Option<String>,

    /// Report progress on stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before a value for `{0}` was entered")]
    MissingInput(&'static str),
    #[error("no config file matches `{pattern}`")]
    NoConfigMatched { pattern: String },
}

/// One rendered graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub name: String,
    pub output: String,
}

/// Executes the CLI. Missing parameters are asked for on `prompt` and read from `input`.
pub fn run_cli<R: BufRead, W: Write>(
    cli: Cli,
    input: &mut R,
    prompt: &mut W,
) -> Result<Vec<Rendered>, CliError> {
    if let Some(pattern) = cli.config.as_deref() {
        return run_configs(pattern);
    }

    let config = config_from_args(cli, input, prompt)?;
    Ok(vec![render(&config)?])
}

fn run_configs(pattern: &str) -> Result<Vec<Rendered>, CliError> {
    let configs = GenerationConfig::load_matching(pattern)?;
    if configs.is_empty() {
        return Err(CliError::NoConfigMatched {
            pattern: pattern.to_owned(),
        });
    }

    configs
        .iter()
        .map(|(path, config)| {
            info!(path = %path.display(), "generating from config");
            render(config)
        })
        .collect()
}

fn config_from_args<R: BufRead, W: Write>(
    cli: Cli,
    input: &mut R,
    prompt: &mut W,
) -> Result<GenerationConfig, CliError> {
    let vertices = match cli.vertices {
        Some(vertices) => vertices,
        None => ask(input, prompt, VERTICES_PROMPT, "vertices")?,
    };
    let skip = match cli.skip {
        Some(skip) => skip,
        None => ask(input, prompt, SKIP_PROMPT, "skip")?,
    };

    let mut config = GenerationConfig::new(RawParameter::Text(vertices), RawParameter::Text(skip));
    config.name = cli.name;
    config.format = cli.format;
    if cli.weighted {
        config.weighting = Weighting::Graceful;
    }
    Ok(config)
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
    question: &str,
    field: &'static str,
) -> Result<String, CliError> {
    write!(prompt, "{}", question)?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::MissingInput(field));
    }
    Ok(line)
}

/// Generates and exports the graph described by `config`.
#[instrument(skip_all, fields(graph = field::Empty))]
pub fn render(config: &GenerationConfig) -> Result<Rendered, CliError> {
    let generator = config.generator()?;
    let params = generator.params();
    Span::current().record("graph", field::display(params));

    let graph = generator.generate();
    info!(
        vertices = graph.order(),
        edges = graph.size(),
        weighted = graph.is_weighted(),
        "generated graph"
    );
    if !graph.is_simple() {
        warn!("skip equals n / 2, the inner circulant contains parallel edges");
    }
    if graph.is_weighted() && !graph.has_distinct_weights() {
        warn!("edge weights repeat, the labelling is not graceful");
    }

    let name = config.display_name(params);
    let output = config.exporter().export(&graph, &name)?;
    Ok(Rendered { name, output })
}

/// Writes rendered graphs to `writer`, separated by blank lines.
pub fn write_rendered<W: Write>(rendered: &[Rendered], writer: &mut W) -> io::Result<()> {
    for (i, graph) in rendered.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write!(writer, "{}", graph.output)?;
        if !graph.output.ends_with('\n') {
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::InvalidReason;
    use std::io::Cursor;

    fn run(args: &[&str], stdin: &str) -> (Result<Vec<Rendered>, CliError>, String) {
        let cli = Cli::try_parse_from(args).expect("arguments must parse");
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut prompt = Vec::new();
        let result = run_cli(cli, &mut input, &mut prompt);
        (result, String::from_utf8(prompt).unwrap())
    }

    #[test]
    fn arguments_generate_report() {
        let (result, prompt) = run(&["petersen", "-n", "5", "-k", "2"], "");
        let rendered = result.unwrap();

        assert!(prompt.is_empty(), "Nothing should be asked: {}", prompt);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].name, "GP(5, 2)");
        assert!(rendered[0].output.starts_with("1: [6, 2, 5]\n"));
    }

    #[test]
    fn missing_parameters_are_prompted() {
        let (result, prompt) = run(&["petersen", "--format", "dot"], "6\n1\n");
        let rendered = result.unwrap();

        assert_eq!(prompt, format!("{}{}", VERTICES_PROMPT, SKIP_PROMPT));
        assert!(rendered[0].output.starts_with("graph \"GP(6, 1)\""));
    }

    #[test]
    fn closed_input_is_reported() {
        let (result, _) = run(&["petersen", "-n", "5"], "");

        assert!(matches!(result, Err(CliError::MissingInput("skip"))));
    }

    #[test]
    fn non_integer_input_is_rejected() {
        let (result, _) = run(&["petersen"], "10.5\n2\n");

        assert!(matches!(
            result,
            Err(CliError::Graph(GraphError::InvalidParameter(
                InvalidReason::NotInteger(_)
            )))
        ));
    }

    #[test]
    fn negative_skip_is_out_of_range() {
        let (result, _) = run(&["petersen", "-n", "10", "-k", "-1"], "");

        assert!(matches!(
            result,
            Err(CliError::Graph(GraphError::InvalidParameter(
                InvalidReason::SkipOutOfRange { skip: -1, .. }
            )))
        ));
    }

    #[test]
    fn oversized_vertex_count_is_an_error() {
        let (result, _) = run(&["petersen", "-n", "9223372036854775807", "-k", "1"], "");

        assert!(matches!(
            result,
            Err(CliError::Graph(GraphError::InvalidParameter(
                InvalidReason::TooManyVertices { .. }
            )))
        ));
    }

    #[test]
    fn weighted_svg_is_rendered() {
        let (result, _) = run(
            &[
                "petersen", "-n", "5", "-k", "2", "--weighted", "--format", "svg", "--name",
                "petersen",
            ],
            "",
        );
        let rendered = result.unwrap();

        assert_eq!(rendered[0].name, "petersen");
        assert!(rendered[0].output.contains(">29</text>"));
    }

    #[test]
    fn config_conflicts_with_parameters() {
        let parsed = Cli::try_parse_from(["petersen", "--config", "*.yaml", "-n", "5"]);

        assert!(parsed.is_err());
    }

    #[test]
    fn verbosity_is_counted() {
        let quiet = Cli::try_parse_from(["petersen", "-n", "5", "-k", "2"]).unwrap();
        let loud = Cli::try_parse_from(["petersen", "-vv", "--config", "*.yaml"]).unwrap();

        assert_eq!(quiet.verbose, 0);
        assert_eq!(loud.verbose, 2);
    }

    #[test]
    fn configs_are_rendered_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "vertex_count: 5\nskip: 2\n").unwrap();
        std::fs::write(
            dir.path().join("b.ron"),
            "(name: Some(\"prism\"), vertex_count: 4, skip: 1, format: dot)",
        )
        .unwrap();
        let pattern = format!("{}/*", dir.path().display());

        let (result, _) = run(&["petersen", "--config", &pattern], "");
        let rendered = result.unwrap();

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].name, "GP(5, 2)");
        assert_eq!(rendered[1].name, "prism");
        assert!(rendered[1].output.starts_with("graph \"prism\""));
    }

    #[test]
    fn unmatched_config_pattern_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.yaml", dir.path().display());

        let (result, _) = run(&["petersen", "--config", &pattern], "");

        assert!(matches!(result, Err(CliError::NoConfigMatched { .. })));
    }

    #[test]
    fn write_rendered_separates_graphs() {
        let rendered = vec![
            Rendered {
                name: "a".to_owned(),
                output: "1: [2]\n".to_owned(),
            },
            Rendered {
                name: "b".to_owned(),
                output: "graph \"b\" {}".to_owned(),
            },
        ];
        let mut out = Vec::new();

        write_rendered(&rendered, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1: [2]\n\ngraph \"b\" {}\n");
    }
}
