use std::fmt;

use codespan::Span;
use serde_derive::{Deserialize, Serialize};

use crate::HasLine;
use crate::HasSpan;

use super::ident::Ident;
use super::stmt::Statement;

/// A complete program
///
/// ```text
/// program Zoo;
///         ^^^----- name
/// class Animal ... end
/// ^^^^^^^^^^^^^^^^^^^^----- classes
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub name: Ident,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

/// Class declaration
///
/// ```text
/// class Dog extends Animal begin ... end
///       ^^^         ^^^^^^       ^^^----- block
///        |            \------------------ parent
///        \------------------------------- name
/// ```
/// The parent is recorded as written; it is not resolved against the
/// declared classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: Ident,
    #[serde(default)]
    pub parent: Option<Ident>,
    #[serde(default)]
    pub block: ClassBlock,
}

impl HasLine for ClassDecl {
    fn line(&self) -> usize {
        self.name.line
    }
}

impl HasSpan for ClassDecl {
    fn span(&self) -> Option<Span> {
        self.name.span
    }
}

/// The members of a class: field declarations followed by methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassBlock {
    #[serde(default)]
    pub fields: Vec<VarDecl>,
    #[serde(default)]
    pub methods: Vec<FunctionDecl>,
}

/// A group of variables sharing one type
///
/// ```text
/// var a, b: integer;
///     ^^^^  ^^^^^^^----- typ
///       \--------------- names
/// ```
/// The same node is used for class fields, formal parameter sections and
/// function locals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarDecl {
    pub names: Vec<Ident>,
    pub typ: TypeDenoter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDenoter {
    Integer,
    Real,
    Char,
    Boolean,
    /// A class used as a type; the name is not resolved
    Class(Ident),
    Array(Box<ArrayType>),
}

impl fmt::Display for TypeDenoter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDenoter::Integer => write!(f, "integer"),
            TypeDenoter::Real => write!(f, "real"),
            TypeDenoter::Char => write!(f, "char"),
            TypeDenoter::Boolean => write!(f, "boolean"),
            TypeDenoter::Class(name) => write!(f, "{name}"),
            TypeDenoter::Array(array) => write!(f, "{array}"),
        }
    }
}

/// ```text
/// array[1..10] of integer
///       ^  ^^     ^^^^^^^----- element
///       |   \----------------- max
///       \--------------------- min
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayType {
    pub min: i64,
    pub max: i64,
    pub element: TypeDenoter,
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ArrayType { min, max, element } = self;
        write!(f, "array[{min}..{max}] of {element}")
    }
}

/// Method declaration
///
/// ```text
/// function area(w, h: integer): integer; var a: integer; begin ... end
///          ^^^^ ^^^^^^^^^^^^^   ^^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^----- block
///           |        |             \------------------------------------- return_type
///           |        \--------------------------------------------------- params
///           \------------------------------------------------------------ name
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: Ident,
    #[serde(default)]
    pub params: Vec<VarDecl>,
    pub return_type: TypeDenoter,
    #[serde(default)]
    pub block: FunctionBlock,
}

impl HasLine for FunctionDecl {
    fn line(&self) -> usize {
        self.name.line
    }
}

impl HasSpan for FunctionDecl {
    fn span(&self) -> Option<Span> {
        self.name.span
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionBlock {
    #[serde(default)]
    pub locals: Vec<VarDecl>,
    #[serde(default)]
    pub body: Vec<Statement>,
}
