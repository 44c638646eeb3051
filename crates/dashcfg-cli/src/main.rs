//! dashcfg CLI tool
//!
//! Examples:
//!   dashcfg tree dashboard.yaml          - show the parsed tree
//!   dashcfg json dashboard.yaml -o out   - export as JSON
//!   dashcfg check -                      - validate stdin
//!   dashcfg build Jan_2026 --root site   - build docs/Jan_2026/

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dashcfg_parse::{Mapping, Node, ParseError, ParseOptions, TabPolicy, parse_document_with};
use dashcfg_site::{SiteError, SiteLayout, build_site};
use tracing::debug;

// ============================================================================
// Exit codes
// ============================================================================

const EXIT_SUCCESS: i32 = 0;
const EXIT_SYNTAX_ERROR: i32 = 1;
const EXIT_IO_ERROR: i32 = 3;

// ============================================================================
// Arguments
// ============================================================================

#[derive(Parser)]
#[command(name = "dashcfg")]
#[command(version, about = "Parse dashboard configuration files and build dashboard pages")]
struct Cli {
    #[command(flatten)]
    parse: ParseArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ParseArgs {
    /// Reject lines indented deeper than their block
    #[arg(long, global = true)]
    strict_indent: bool,

    /// Reject mapping lines without a `:`
    #[arg(long, global = true)]
    strict_keys: bool,

    /// How tabs in indentation are treated
    #[arg(long, global = true, value_enum, default_value_t = TabsArg::Content)]
    tabs: TabsArg,

    /// Maximum block nesting depth
    #[arg(long, global = true, default_value_t = 64)]
    max_depth: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum TabsArg {
    /// Tabs are ordinary content
    Content,
    /// Tabs in indentation are an error
    Reject,
}

#[derive(Subcommand)]
enum Command {
    /// Show the parse tree
    Tree {
        /// Input file ('-' for stdin)
        file: String,
    },

    /// Export the document as JSON
    Json {
        /// Input file ('-' for stdin)
        file: String,

        /// Write output to FILE ('-' for stdout)
        #[arg(short = 'o', long, default_value = "-")]
        output: String,
    },

    /// Parse a file and report errors only
    Check {
        /// Input file ('-' for stdin)
        file: String,
    },

    /// Build docs/<period>/ from dashboards/<period>/
    Build {
        /// Dashboard subfolder name, e.g. Jan_2026
        period: String,

        /// Project root directory
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

impl ParseArgs {
    fn options(&self) -> ParseOptions {
        let tabs = match self.tabs {
            TabsArg::Content => TabPolicy::Content,
            TabsArg::Reject => TabPolicy::Reject,
        };
        ParseOptions::new()
            .strict_indentation(self.strict_indent)
            .strict_keys(self.strict_keys)
            .tabs(tabs)
            .max_depth(self.max_depth)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.parse.options();

    let result = match &cli.command {
        Command::Tree { file } => run_tree(file, options),
        Command::Json { file, output } => run_json(file, output, options),
        Command::Check { file } => run_check(file, options),
        Command::Build { period, root } => run_build(root, period, &options),
    };

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            match &e {
                CliError::ParseDiagnostic {
                    error,
                    source,
                    filename,
                } => error.write_report(filename, source, std::io::stderr()),
                CliError::Site(SiteError::Parse { .. }) => eprint!("{}", e.render()),
                _ => eprintln!("error: {e}"),
            }
            std::process::exit(e.exit_code());
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    ParseDiagnostic {
        error: ParseError,
        source: String,
        filename: String,
    },
    Site(SiteError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => EXIT_IO_ERROR,
            CliError::ParseDiagnostic { .. } => EXIT_SYNTAX_ERROR,
            CliError::Site(SiteError::Parse { .. }) => EXIT_SYNTAX_ERROR,
            CliError::Site(_) => EXIT_IO_ERROR,
        }
    }

    fn render(&self) -> String {
        match self {
            CliError::Site(e) => e.render(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::ParseDiagnostic { error, .. } => write!(f, "{error}"),
            CliError::Site(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<SiteError> for CliError {
    fn from(e: SiteError) -> Self {
        CliError::Site(e)
    }
}

// ============================================================================
// Subcommand implementations
// ============================================================================

fn run_tree(file: &str, options: ParseOptions) -> Result<(), CliError> {
    let root = parse_file(file, options)?;
    print!("{}", dashcfg_tree::outline_mapping(&root));
    Ok(())
}

fn run_json(file: &str, output: &str, options: ParseOptions) -> Result<(), CliError> {
    let root = parse_file(file, options)?;
    let json = serde_json::Value::Object(mapping_to_json(&root));
    let mut text = serde_json::to_string_pretty(&json)
        .map_err(|e| CliError::Io(io::Error::other(e)))?;
    text.push('\n');
    write_output(output, &text)?;
    Ok(())
}

fn run_check(file: &str, options: ParseOptions) -> Result<(), CliError> {
    let root = parse_file(file, options)?;
    debug!(file, entries = root.len(), "document is valid");
    Ok(())
}

fn run_build(root: &std::path::Path, period: &str, options: &ParseOptions) -> Result<(), CliError> {
    let layout = SiteLayout::new(root);
    let report = build_site(&layout, period, options)?;
    eprintln!(
        "Wrote {} ({} plots, {} logos)",
        report.index.display(),
        report.plots.len(),
        report.logos.len()
    );
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_file(file: &str, options: ParseOptions) -> Result<Mapping, CliError> {
    let source = read_input(file)?;
    let filename = if file == "-" { "<stdin>" } else { file };
    parse_document_with(&source, options).map_err(|error| CliError::ParseDiagnostic {
        error,
        filename: filename.to_string(),
        source,
    })
}

fn read_input(file: &str) -> Result<String, io::Error> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}

fn write_output(path: &str, content: &str) -> Result<(), io::Error> {
    if path == "-" {
        print!("{content}");
        Ok(())
    } else {
        std::fs::write(path, content)
    }
}

fn node_to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Mapping(map) => serde_json::Value::Object(mapping_to_json(map)),
        Node::Sequence(seq) => serde_json::Value::Array(seq.iter().map(node_to_json).collect()),
        Node::Scalar(s) => serde_json::Value::String(s.clone()),
        Node::Empty => serde_json::Value::Null,
    }
}

fn mapping_to_json(map: &Mapping) -> serde_json::Map<String, serde_json::Value> {
    map.iter()
        .map(|(key, value)| (key.to_string(), node_to_json(value)))
        .collect()
}
