//! Declared symbols

/// The kind of declaration a symbol came from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SymbolKind {
    Variable,
    Parameter,
    Function,
    Procedure,
}

impl SymbolKind {
    /// Whether a symbol of this kind can be the target of a call
    pub fn is_callable(&self) -> bool {
        matches!(self, SymbolKind::Function | SymbolKind::Procedure)
    }
}

/// The data types known to the language
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DataType {
    Integer,
    Float,
    Character,
    Void,
}

/// A recorded declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub ty: DataType,
    /// The line the symbol was declared on
    pub line: usize,
    /// Sequential storage slot within the declaring scope
    pub address: u32,
}

impl Symbol {
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        ty: DataType,
        line: usize,
        address: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
            line,
            address,
        }
    }
}
