//! The result of a successful parse

use crate::items::{FunctionDecl, Program};
use crate::scope::{ArenaDump, ScopeArena, ScopeDump, ScopeId};
use crate::symbol::Symbol;

/// A checked program along with every scope created while parsing it.
///
/// `global` is the outermost scope; every function and procedure declaration refers to its own
/// scope within `scopes`.
#[derive(Debug)]
pub struct TranslationUnit {
    pub program: Program,
    pub scopes: ScopeArena,
    pub global: ScopeId,
}

impl TranslationUnit {
    pub fn new(program: Program, scopes: ScopeArena, global: ScopeId) -> Self {
        Self {
            program,
            scopes,
            global,
        }
    }

    /// Finds a function or procedure declaration by name
    pub fn function(&self, name: &str) -> Option<&FunctionDecl> {
        self.program.functions().find(|f| f.name == name)
    }

    /// Looks up a symbol declared in the global scope
    pub fn global_symbol(&self, name: &str) -> Option<&Symbol> {
        self.scopes.lookup_local(self.global, name)
    }

    /// Looks up a symbol visible from within the named function's body
    pub fn function_symbol(&self, function: &str, name: &str) -> Option<&Symbol> {
        let function = self.function(function)?;
        self.scopes.lookup(function.scope, name)
    }

    /// Dumps the global scope
    pub fn symbol_dump(&self) -> ScopeDump<'_> {
        self.scopes.dump(self.global)
    }

    /// Dumps every scope, the global scope first
    pub fn full_symbol_dump(&self) -> ArenaDump<'_> {
        self.scopes.dump_all()
    }
}
