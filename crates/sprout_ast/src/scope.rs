//! Lexical scopes and the arena that owns them.
//!
//! Every scope is a fixed-size hash table of symbol chains with an optional parent. Scopes are
//! stored in a [ScopeArena] and referred to by [ScopeId], so syntax tree nodes can hold on to the
//! scope they introduced without owning it.
//!
//! The bucket count is static. A scope with many names hashing to one bucket degrades to a linear
//! scan of that bucket; source files of this language are small enough that this is acceptable.

use crate::symbol::Symbol;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The number of hash buckets in each scope
pub const BUCKET_COUNT: usize = 256;

/// DJB2 over the bytes of `name`, folded into [BUCKET_COUNT] buckets
pub fn bucket_of(name: &str) -> usize {
    let hash = name.bytes().fold(5381u64, |hash, byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(byte as u64)
    });
    (hash % BUCKET_COUNT as u64) as usize
}

/// A handle to a scope within a [ScopeArena]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The position of this scope within its arena
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for ScopeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// Errors raised by scope operations
#[derive(Debug, Error, PartialEq)]
pub enum ScopeError {
    #[error("identifier '{name}' was already declared in this scope on line {previous_line}")]
    Redeclaration { name: String, previous_line: usize },
}

/// A single lexical scope
#[derive(Debug)]
pub struct Scope {
    buckets: Vec<Vec<Symbol>>,
    parent: Option<ScopeId>,
    len: usize,
}

impl Scope {
    fn new(parent: Option<ScopeId>) -> Self {
        Self {
            buckets: (0..BUCKET_COUNT).map(|_| Vec::new()).collect(),
            parent,
            len: 0,
        }
    }

    /// The enclosing scope, if any
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Gets a symbol declared directly in this scope
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        // chains are walked newest first
        self.buckets[bucket_of(name)]
            .iter()
            .rev()
            .find(|symbol| symbol.name == name)
    }

    /// All symbols declared in this scope, bucket by bucket, newest first within a bucket
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.buckets.iter().flat_map(|bucket| bucket.iter().rev())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn insert(&mut self, symbol: Symbol) -> Result<(), ScopeError> {
        if let Some(previous) = self.get(&symbol.name) {
            return Err(ScopeError::Redeclaration {
                name: symbol.name,
                previous_line: previous.line,
            });
        }
        self.buckets[bucket_of(&symbol.name)].push(symbol);
        self.len += 1;
        Ok(())
    }

    fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }
}

/// Owns every scope created during a parse.
///
/// [ScopeId]s are only meaningful for the arena that created them; using a handle from another
/// arena panics or refers to an unrelated scope.
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl ScopeArena {
    /// Creates a new, empty arena
    pub fn new() -> Self {
        Self { scopes: vec![] }
    }

    /// Creates a new, empty scope with no parent
    pub fn create(&mut self) -> ScopeId {
        self.push(Scope::new(None))
    }

    /// Creates a new, empty scope nested within `parent`
    pub fn enter(&mut self, parent: ScopeId) -> ScopeId {
        self.push(Scope::new(Some(parent)))
    }

    fn push(&mut self, scope: Scope) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(scope);
        id
    }

    /// Gets a scope
    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    /// Gets the parent of a scope
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.get(id).parent
    }

    /// Iterates from `id` up through its parents to the outermost scope
    pub fn chain(&self, id: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(id), |&id| self.parent(id))
    }

    /// Declares a symbol in `scope`.
    ///
    /// Only `scope` itself is checked for an existing declaration, so names of enclosing scopes
    /// may be shadowed.
    pub fn insert(&mut self, scope: ScopeId, symbol: Symbol) -> Result<(), ScopeError> {
        self.scopes[scope.0].insert(symbol)
    }

    /// Looks up a name in `scope` only
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.get(scope).get(name)
    }

    /// Looks up a name in `scope` and then each enclosing scope, nearest declaration first
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.chain(scope)
            .find_map(|scope| self.lookup_local(scope, name))
    }

    /// Releases the symbols of `scope`. Parents are untouched.
    pub fn destroy(&mut self, scope: ScopeId) {
        self.scopes[scope.0].clear();
    }

    /// The number of scopes in this arena
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// All scope ids, in creation order
    pub fn ids(&self) -> impl Iterator<Item = ScopeId> {
        (0..self.scopes.len()).map(ScopeId)
    }

    /// A listing of `scope` followed by each of its enclosing scopes
    pub fn dump(&self, scope: ScopeId) -> ScopeDump<'_> {
        ScopeDump { arena: self, scope }
    }

    /// A listing of every scope in this arena, in creation order
    pub fn dump_all(&self) -> ArenaDump<'_> {
        ArenaDump { arena: self }
    }

    fn write_scope(&self, f: &mut Formatter<'_>, header: &str, id: ScopeId) -> std::fmt::Result {
        writeln!(f, "--- {header} ({id}) ---")?;
        for symbol in self.get(id).symbols() {
            writeln!(
                f,
                "  -> {:<15} {:<10} {:<10} line {:<4} address {}",
                symbol.name, symbol.kind, symbol.ty, symbol.line, symbol.address
            )?;
        }
        Ok(())
    }
}

/// Displays a scope and its enclosing scopes, outermost last
#[derive(Debug)]
pub struct ScopeDump<'a> {
    arena: &'a ScopeArena,
    scope: ScopeId,
}

impl Display for ScopeDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- symbol table ---")?;
        for (level, id) in self.arena.chain(self.scope).enumerate() {
            self.arena.write_scope(f, &format!("scope level {level}"), id)?;
        }
        writeln!(f, "--------------------")
    }
}

/// Displays every scope in an arena
#[derive(Debug)]
pub struct ArenaDump<'a> {
    arena: &'a ScopeArena,
}

impl Display for ArenaDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- all scopes ---")?;
        for id in self.arena.ids() {
            let header = match self.arena.parent(id) {
                Some(parent) => format!("nested in {parent}"),
                None => "outermost".to_string(),
            };
            self.arena.write_scope(f, &header, id)?;
        }
        writeln!(f, "------------------")
    }
}
