use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{init_tracing, load_config, Config};
use core_types::Operation;

mod render;
mod repl;
mod session;

use repl::Repl;
use session::Session;

/// The main entry point for the Abacus calculator.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    // Keeps the file appender flushing until we return.
    let _guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Eval(args) => handle_eval(args, &config),
        Commands::Stats(args) => handle_stats(args, &config),
        Commands::Repl => handle_repl(&config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A validated calculator with scientific functions, statistics and history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (default: ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operation and print its result.
    Eval(EvalArgs),
    /// Print descriptive statistics for a sample.
    Stats(StatsArgs),
    /// Start the interactive calculator (the default).
    Repl,
}

#[derive(Parser)]
struct EvalArgs {
    /// The operation to perform.
    #[arg(value_enum)]
    operation: Operation,

    /// One operand for unary operations, two for binary ones.
    #[arg(allow_negative_numbers = true, required = true)]
    operands: Vec<f64>,
}

#[derive(Parser)]
struct StatsArgs {
    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// The sample to analyze.
    #[arg(allow_negative_numbers = true, required = true)]
    values: Vec<f64>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_eval(args: EvalArgs, config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new();
    let calc = session.calculate(args.operation, &args.operands)?;
    println!(
        "{}",
        render::format_result(&calc.label, calc.result, config.display.result_precision)
    );
    Ok(())
}

fn handle_stats(args: StatsArgs, config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new();
    let report = session.analyze(&args.values)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}",
            render::statistics_table(&report, config.display.statistics_precision)
        );
    }
    Ok(())
}

fn handle_repl(config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    Repl::new(&mut session, &config.display).run(
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    println!("Goodbye.");
    Ok(())
}
