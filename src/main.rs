//! The Zen front-end CLI.
//!
//! This binary provides `zen check` and `zen dump` commands for running the
//! lexer and parser over a source file: `check` reports diagnostics and sets
//! the exit code, `dump` prints the parsed tree.

use clap::{ArgAction, Parser, Subcommand};

mod report;

/// Command-line interface for the Zen front-end.
#[derive(Parser)]
#[command(name = "zen")]
#[command(about = "The Zen language front-end", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity. Use up to 3 times.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Parse a Zen source file and report any syntax errors.
    Check {
        /// The source file to check (e.g., `hello.zen`).
        file: String,
    },
    /// Parse a Zen source file and print its syntax tree.
    Dump {
        /// The source file to dump (e.g., `hello.zen`).
        file: String,
    },
}

/// Entry point for the Zen front-end.
fn main() {
    let cli = Cli::parse();
    init_log(cli.verbose).expect("Unknown error initializing logging");

    let status = match &cli.command {
        Commands::Check { file } => check(file),
        Commands::Dump { file } => dump(file),
    };
    std::process::exit(status);
}

/// Maps `-v` occurrences onto log levels and installs the logger.
fn init_log(verbosity: u8) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _3_or_more => log::LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn check(file: &str) -> i32 {
    let Some(source) = read_source(file) else {
        return 1;
    };
    let result = zen::parser::Parser::new(&source).parse();
    if result.success {
        0
    } else {
        report::render(file, &source, &result);
        1
    }
}

fn dump(file: &str) -> i32 {
    let Some(source) = read_source(file) else {
        return 1;
    };
    let result = zen::parser::Parser::new(&source).parse();
    print!("{}", result.arena.dump(result.program));
    if result.success {
        0
    } else {
        report::render(file, &source, &result);
        1
    }
}

fn read_source(file: &str) -> Option<String> {
    match std::fs::read_to_string(file) {
        Ok(source) => Some(source),
        Err(error) => {
            eprintln!("Error: could not read '{}': {}", file, error);
            None
        }
    }
}
