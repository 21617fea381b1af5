//! The sprout abstract syntax tree, along with the scope tables built while parsing it.

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
        impl sprout_tokens::spanned::Spanned for $ty {
            fn span(&self) -> sprout_tokens::spanned::Span {
                self.span
            }
        }
        )*
    };
}
pub(crate) use impl_spanned;

pub mod block;
pub mod expr;
pub mod items;
pub mod node;
pub mod scope;
pub mod statements;
pub mod symbol;
pub mod translation_unit;
pub mod tree;
pub mod visitor;
