use std::path::PathBuf;

use alaias::{analyze, format_tokens, format_tree, statistics};
use anyhow::{Context, Result};
use clap::Parser as CliParser;
use colored::Colorize;
use log::{info, LevelFilter};

#[derive(CliParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to a `.als` source file.
    #[arg(short, long)]
    file: PathBuf,

    /// Print tokens as JSON instead of the fixed-width table.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to initialize logger")?;

    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("could not read file: '{}'", args.file.display()))?;

    info!("analyzing '{}'", args.file.display());
    let (tokens, tree, syntactic_errors) = analyze(&source);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        println!("{}", format_tokens(&tokens));
    }

    println!("{}", format_tree(&tree));

    let stats = statistics(&tokens);
    println!(
        "tokens: {} total, {} valid, {} errors",
        stats.total, stats.valid, stats.errors
    );

    if syntactic_errors.is_empty() {
        println!("{}", "no syntactic errors".green());
    } else {
        println!("{}", format!("{} syntactic error(s):", syntactic_errors.len()).red());
        for error in &syntactic_errors {
            println!("{}", error.render(&source));
        }
    }

    let lexical_errors = stats.errors;
    if lexical_errors > 0 || !syntactic_errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
