use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use jdiff::config::DiffConfig;
use jdiff::domain::differ::Differ;
use jdiff::output::Output;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "jdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two JSON documents line by line",
    long_about = "This tool pretty-prints two JSON documents with sorted keys, \
    aligns their lines and highlights the changed tokens inside every modified line.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Show the differences between two JSON documents",
        long_about = "This command compares two JSON documents. \
        Either path may be '-' to read that document from standard input."
    )]
    Compare {
        #[arg(index = 1, help = "The original document")]
        left: PathBuf,
        #[arg(index = 2, help = "The changed document")]
        right: PathBuf,
        #[command(flatten)]
        config: DiffConfig,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,jdiff={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compare {
            left,
            right,
            config,
        } => {
            config.color.apply();
            let exit_code = config.exit_code;

            let output = Output::select(config.pager);
            let differ = Differ::new(output.writer(), config);
            let summary = differ.compare(&left, &right)?;
            drop(differ);
            output.finish()?;

            if exit_code && !summary.is_identical() {
                return Ok(ExitCode::from(1));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
