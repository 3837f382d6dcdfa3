use opal_lang_ast::{ClassDecl, FunctionDecl, Ident, VarDecl};

use crate::{LookupError, LookupResult};

use super::{ClassSymbolTable, FunctionSymbolTable, FunctionVariable, SymbolTable};

impl<'a> SymbolTable<'a> {
    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn lookup_class(&self, name: &str) -> LookupResult<&ClassSymbolTable<'a>> {
        self.classes.get(name).map_err(|err| LookupError::UndefinedClass { name: err.key })
    }

    /// All classes, in unspecified order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassSymbolTable<'a>> {
        self.classes.iter().map(|(_, class)| class)
    }
}

impl<'a> ClassSymbolTable<'a> {
    pub fn decl(&self) -> &'a ClassDecl {
        self.decl
    }

    pub fn name(&self) -> &'a Ident {
        &self.decl.name
    }

    /// The parent class as written in the declaration; it is not resolved.
    pub fn parent(&self) -> Option<&'a Ident> {
        self.decl.parent.as_ref()
    }

    /// The declaration group which introduces the field `name`.
    pub fn lookup_field(&self, name: &str) -> LookupResult<&'a VarDecl> {
        self.fields.get(name).copied().map_err(|err| LookupError::UndefinedField {
            class: self.decl.name.id.clone(),
            name: err.key,
        })
    }

    pub fn lookup_method(&self, name: &str) -> LookupResult<&FunctionSymbolTable<'a>> {
        self.methods.get(name).map_err(|err| LookupError::UndefinedMethod {
            class: self.decl.name.id.clone(),
            name: err.key,
        })
    }

    /// Fields with the spelling of their declaration, in unspecified order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &'a VarDecl)> {
        self.fields.iter().map(|(name, decl)| (name, *decl))
    }

    /// All methods, in unspecified order.
    pub fn methods(&self) -> impl Iterator<Item = &FunctionSymbolTable<'a>> {
        self.methods.iter().map(|(_, method)| method)
    }
}

impl<'a> FunctionSymbolTable<'a> {
    pub fn decl(&self) -> &'a FunctionDecl {
        self.decl
    }

    pub fn name(&self) -> &'a Ident {
        &self.decl.name
    }

    pub fn lookup_variable(&self, name: &str) -> LookupResult<&FunctionVariable<'a>> {
        self.variables.get(name).map_err(|err| LookupError::UndefinedVariable {
            function: self.decl.name.id.clone(),
            name: err.key,
        })
    }

    /// The method's own name, its parameters and locals with the spelling of
    /// their declaration, in unspecified order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &FunctionVariable<'a>)> {
        self.variables.iter()
    }
}
