//! PolyEval Command Line Interface
//!
//! Usage:
//!   polyeval [OPTIONS] [input-file]
//!   polyeval --help
//!
//! Examples:
//!   polyeval program.txt                 # Run the program's own TASKS
//!   polyeval < program.txt               # Read the program from stdin
//!   polyeval --tasks=2,5 program.txt     # Override the TASKS section
//!   polyeval --emit=ast program.txt      # Just parse and dump the AST as JSON

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use polyeval::frontend::{self, Token};
use polyeval::pipeline::TaskSet;
use polyeval::utils::errors::{PolyError, SYNTAX_ERROR_BANNER};
use polyeval::RunConfig;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// PolyEval - polynomial program analyzer and interpreter
#[derive(Parser, Debug)]
#[command(name = "polyeval")]
#[command(author = "PolyEval Contributors")]
#[command(version)]
#[command(about = "Analyze and execute polynomial programs", long_about = None)]
struct Cli {
    /// Program to run (reads stdin when absent)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(long, default_value = "run")]
    emit: EmitKind,

    /// Task numbers replacing the TASKS section (comma-separated)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    tasks: Option<Vec<i32>>,

    /// Maximum parenthesis and nested-call depth
    #[arg(long, value_name = "N", default_value_t = frontend::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress warnings)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmitKind {
    /// Run the enabled tasks
    Run,
    /// Token stream, one token per line
    Tokens,
    /// Parsed program as JSON
    Ast,
    /// Stored polynomials in source form
    Polys,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    info!("PolyEval v{}", polyeval::VERSION);
    debug!("Input file: {:?}", cli.input);

    let bytes = read_source(&cli.input)?;
    let config = build_config(&cli);
    debug!("Run config: {:?}", config);

    let result = match frontend::decode_source(&bytes) {
        Ok(source) => render(cli.emit, source, &config)?,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(content) => {
            write_output(&cli.output, &content)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_syntax() => {
            info!("{}", e);
            write_output(&cli.output, &format!("{}\n", SYNTAX_ERROR_BANNER))?;
            Ok(ExitCode::FAILURE)
        }
        Err(PolyError::Semantic(e)) => {
            write_output(&cli.output, &format!("{}\n", e))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e.into()),
    }
}

/// Produce the stdout text for one emit mode. The outer error is an
/// internal failure, the inner one a diagnostic about the program.
fn render(emit: EmitKind, source: &str, config: &RunConfig) -> Result<Result<String, PolyError>> {
    let rendered = match emit {
        EmitKind::Run => polyeval::run(source, config).map(|report| report.to_string()),
        EmitKind::Tokens => frontend::tokenize(source).map(|tokens| render_tokens(&tokens)),
        EmitKind::Ast => match polyeval::parse(source, config) {
            Ok(program) => {
                let json = serde_json::to_string_pretty(&program)
                    .context("Failed to serialize program")?;
                Ok(format!("{}\n", json))
            }
            Err(e) => Err(e),
        },
        EmitKind::Polys => polyeval::parse(source, config).map(|program| {
            program.polys.iter().map(|poly| format!("{}\n", poly)).collect()
        }),
    };
    Ok(rendered)
}

fn build_config(cli: &Cli) -> RunConfig {
    let mut config = RunConfig::default().with_max_depth(cli.max_depth);
    if let Some(ref numbers) = cli.tasks {
        config = config.with_tasks(TaskSet::from_numbers(numbers));
    }
    config
}

fn read_source(path: &Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("Failed to read input file: {:?}", p)),
        None => {
            let mut source = Vec::new();
            io::stdin()
                .read_to_end(&mut source)
                .context("Failed to read program from stdin")?;
            Ok(source)
        }
    }
}

fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|tok| format!("{}: {}\n", tok.line(), tok))
        .collect()
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content)
                .with_context(|| format!("Failed to write output file: {:?}", p))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
