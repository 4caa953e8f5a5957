use clap::{Parser as ClapParser, Subcommand};
use sift_lang::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - a filter expression language for boolean predicates over named fields")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a filter expression
    Check {
        /// The filter expression (reads from stdin if not provided)
        filter: Option<String>,

        /// Print the parsed tree as JSON
        #[arg(long)]
        ast: bool,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Reprint a filter expression in canonical form
    Fmt {
        /// The filter expression (reads from stdin if not provided)
        filter: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            filter,
            ast,
            pretty,
        } => run_check(filter, ast, pretty),
        Commands::Fmt { filter } => run_fmt(filter),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_filter(filter: Option<String>) -> Result<String, CliError> {
    match filter {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(filter: Option<String>, ast: bool, pretty: bool) -> Result<(), CliError> {
    let filter = read_filter(filter)?;

    let options = CheckOptions {
        filter,
        ast,
        pretty,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Ast(value) => {
            let json = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            }
            .unwrap();
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_fmt(filter: Option<String>) -> Result<(), CliError> {
    let filter = read_filter(filter)?;
    let out = cli::execute_fmt(&filter)?;
    println!("{}", out);
    Ok(())
}
