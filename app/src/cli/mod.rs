use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use opal_lang_ast::Program;

use crate::result::AppError;

mod check;
mod lookup;
mod symbols;

pub fn exec() -> miette::Result<()> {
    use Command::*;
    let cli = Cli::parse();
    match cli.command {
        Check(args) => check::exec(args),
        Symbols(args) => symbols::exec(args),
        Lookup(args) => lookup::exec(args),
    }
}

#[derive(Parser)]
#[clap(version, author, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the declarations of a program for conflicts
    Check(check::Args),
    /// Print the symbol table of a program
    Symbols(symbols::Args),
    /// Look up a single entry of the symbol table
    Lookup(lookup::Args),
}

/// Read a program tree as written by the parser.
fn read_program(path: &Path) -> Result<Program, AppError> {
    log::debug!("Reading program tree from {}", path.display());
    let input = fs::read_to_string(path)
        .map_err(|source| AppError::Io { path: path.to_owned(), source })?;
    serde_json::from_str(&input)
        .map_err(|source| AppError::MalformedInput { path: path.to_owned(), source })
}
