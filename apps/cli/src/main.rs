use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lumafmt_core::{ResultKind, is_error_line, load_response};

/// CLI wrapper for ResultKind enum (needed for clap ValueEnum)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum CliKind {
    #[default]
    Video,
    Task,
    Batch,
}

impl From<CliKind> for ResultKind {
    fn from(cli: CliKind) -> Self {
        match cli {
            CliKind::Video => ResultKind::Video,
            CliKind::Task => ResultKind::Task,
            CliKind::Batch => ResultKind::Batch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumafmt")]
#[command(about = "Render video generation task results as human-readable text")]
struct Cli {
    /// Shape of the response to format
    kind: CliKind,

    /// JSON response file. Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Print only the formatted text, without header or colors
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Formatted blocks may already end in a newline; `println!` supplies the last one
fn display_text(output: &str) -> &str {
    output.strip_suffix('\n').unwrap_or(output)
}

async fn run(cli: &Cli) -> Result<()> {
    let kind: ResultKind = cli.kind.into();
    let source = cli
        .input_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let data = load_response(cli.input_path())
        .await
        .with_context(|| format!("Failed to load response from {}", source))?;
    debug!(kind = kind.name(), %source, "response loaded");

    let formatted = kind.format(&data);
    let output = display_text(&formatted);

    if cli.plain {
        println!("{}", output);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("lumafmt").cyan().bold(),
        style(format!("{} result", kind.name())).dim()
    );
    if is_error_line(output) {
        println!("{}", style(output).red().bold());
    } else {
        println!("{}", output);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
