use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type LookupResult<T> = Result<T, LookupError>;

/// A conflict between two declarations of the same name in one scope.
///
/// Every variant records the line of the declaration that is kept (`first_line`)
/// and the line of the one that is rejected (`line`).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("class \"{name}\" already declared at line {first_line}")]
    #[diagnostic(code("D-001"))]
    DuplicateClass {
        /// The spelling of the class that is kept
        name: String,
        first_line: usize,
        line: usize,
        #[label("redeclared here")]
        span: Option<SourceSpan>,
    },
    #[error("function \"{name}\" already declared at line {first_line}")]
    #[diagnostic(code("D-002"))]
    DuplicateFunction {
        name: String,
        first_line: usize,
        line: usize,
        #[label("redeclared here")]
        span: Option<SourceSpan>,
    },
    #[error("variable \"{name}\" already declared at line {first_line}")]
    #[diagnostic(code("D-003"))]
    DuplicateVariable {
        name: String,
        first_line: usize,
        line: usize,
        #[label("redeclared here")]
        span: Option<SourceSpan>,
    },
}

impl DeclarationError {
    /// The line of the rejected declaration.
    pub fn line(&self) -> usize {
        match self {
            DeclarationError::DuplicateClass { line, .. }
            | DeclarationError::DuplicateFunction { line, .. }
            | DeclarationError::DuplicateVariable { line, .. } => *line,
        }
    }

    /// Whether this conflict makes the symbol table unusable.
    ///
    /// A redeclared class is dropped as a whole, so the remaining table is still
    /// consistent. Conflicts inside a class are not recoverable.
    pub fn fails_build(&self) -> bool {
        !matches!(self, DeclarationError::DuplicateClass { .. })
    }
}

/// The symbol table could not be built.
///
/// `errors` lists every conflict found in the program, in the order in which
/// they were discovered.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("Declaration analysis failed with {} error(s)", errors.len())]
#[diagnostic(
    code("D-000"),
    help("Every method must be declared once per class, and every parameter and local once per method.")
)]
pub struct BuildFailure {
    pub errors: Vec<DeclarationError>,
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Undefined class {name}")]
    #[diagnostic(code("L-001"))]
    UndefinedClass { name: String },
    #[error("Class {class} has no field {name}")]
    #[diagnostic(code("L-002"))]
    UndefinedField { class: String, name: String },
    #[error("Class {class} has no method {name}")]
    #[diagnostic(code("L-003"))]
    UndefinedMethod { class: String, name: String },
    #[error("Method {function} has no variable {name}")]
    #[diagnostic(code("L-004"))]
    UndefinedVariable { function: String, name: String },
}
