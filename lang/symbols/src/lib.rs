//! Declaration analysis: turns a parsed program into a symbol table.
//!
//! Names are scoped at three levels: the program (classes), a class (fields
//! and methods, in separate namespaces) and a method (its own name, its
//! parameters and its locals, in one namespace). Names compare
//! case-insensitively at every level.

mod insensitive_map;
mod report;
mod result;
mod symbol_table;

pub use insensitive_map::{InsensitiveMap, NotFound};
pub use report::{Reporter, StreamReporter};
pub use result::*;
pub use symbol_table::build::build_symbol_table;
pub use symbol_table::{
    ClassSymbolTable, FunctionSymbolTable, FunctionVariable, SymbolTable, VariableKind,
};
