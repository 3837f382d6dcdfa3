use std::fmt;

use opal_lang_ast::{ClassDecl, FunctionDecl, Ident, TypeDenoter, VarDecl};

use crate::insensitive_map::InsensitiveMap;

pub mod build;
pub mod lookup;

/// The symbol table of a program: one entry per class.
///
/// The table borrows the program it was built from. Once built it is only
/// read, through the lookup methods.
#[derive(Debug, Default)]
pub struct SymbolTable<'a> {
    pub(crate) classes: InsensitiveMap<ClassSymbolTable<'a>>,
}

/// The members of one class.
///
/// Fields and methods live in separate namespaces.
#[derive(Debug)]
pub struct ClassSymbolTable<'a> {
    pub(crate) decl: &'a ClassDecl,
    pub(crate) fields: InsensitiveMap<&'a VarDecl>,
    pub(crate) methods: InsensitiveMap<FunctionSymbolTable<'a>>,
}

impl<'a> ClassSymbolTable<'a> {
    pub(crate) fn new(decl: &'a ClassDecl) -> Self {
        ClassSymbolTable { decl, fields: InsensitiveMap::new(), methods: InsensitiveMap::new() }
    }
}

/// The names visible inside one method.
///
/// The method's own name, its parameters and its locals share one namespace.
#[derive(Debug)]
pub struct FunctionSymbolTable<'a> {
    pub(crate) decl: &'a FunctionDecl,
    pub(crate) variables: InsensitiveMap<FunctionVariable<'a>>,
}

impl<'a> FunctionSymbolTable<'a> {
    pub(crate) fn new(decl: &'a FunctionDecl) -> Self {
        FunctionSymbolTable { decl, variables: InsensitiveMap::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionVariable<'a> {
    pub name: &'a Ident,
    pub typ: &'a TypeDenoter,
    /// The line on which the name is declared
    pub line: usize,
    pub kind: VariableKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VariableKind {
    /// The method's own name, standing for its return value
    Result,
    Parameter,
    Local,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Result => write!(f, "result"),
            VariableKind::Parameter => write!(f, "parameter"),
            VariableKind::Local => write!(f, "local"),
        }
    }
}
