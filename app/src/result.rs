use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// User facing errors which are not diagnostics about the program itself
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error("Could not read {}", path.display())]
    #[diagnostic(code("E-001"))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} does not contain a valid program tree", path.display())]
    #[diagnostic(
        code("E-002"),
        help("The input must be a JSON encoded Opal program, as written by the parser.")
    )]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
