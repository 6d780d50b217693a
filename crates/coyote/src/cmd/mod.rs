use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::exit::{io_error, CliResult};
use crate::output::OutputFormat;

pub mod ast;
pub mod check;
pub mod fmt;
pub mod tokens;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate JSON data against a schema.
    Check(CheckArgs),
    /// Print the token stream of a schema.
    Tokens(SchemaArgs),
    /// Print the parsed field tree of a schema.
    Ast(SchemaArgs),
    /// Print a schema in canonical layout.
    Fmt(FmtArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Tokens(args) => tokens::run(args, format),
        Command::Ast(args) => ast::run(args, format),
        Command::Fmt(args) => fmt::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file to validate against.
    pub schema: PathBuf,
    /// Inline JSON data.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read JSON data from file. Data is read from stdin when neither flag is given.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Schema file.
    pub schema: PathBuf,
}

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Schema file.
    pub schema: PathBuf,
    /// Exit with a failure code instead of printing when the file is not canonical.
    #[arg(long)]
    pub check: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn read_schema(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}
