//! Macros for declaring visitor traits over a tree of types.

/// Creates a read-only visitor.
///
/// Each `visit` entry generates a free function `visit_<snake name>` holding the default walk,
/// and a trait method of the same name that delegates to it. Implementors override a method
/// and call the free function to keep walking into children.
///
/// # Example
/// ```
/// use sprout_visitor_gen::visit;
///
/// pub struct Leaf(pub u32);
/// pub struct Pair(pub Leaf, pub Leaf);
///
/// visit! {
///     pub trait Visitor {
///         pub visit(v, pair: &Pair) -> Result<()> {
///             v.visit_leaf(&pair.0)?;
///             v.visit_leaf(&pair.1)
///         }
///         pub visit(_v, _leaf: &Leaf) -> Result<()> {
///             Ok(())
///         }
///     }
/// }
///
/// struct Sum(u32);
///
/// impl Visitor for Sum {
///     type Err = ();
///
///     fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), ()> {
///         self.0 += leaf.0;
///         Ok(())
///     }
/// }
///
/// let mut sum = Sum(0);
/// sum.visit_pair(&Pair(Leaf(1), Leaf(2))).unwrap();
/// assert_eq!(sum.0, 3);
/// ```
#[macro_export]
macro_rules! visit {
    (
        $trait_vis:vis trait $id:ident {
            $($vis:vis visit ($visitor_id:ident, $visited_id:ident: &$visited:ident) -> Result<()> $block:block)+
        }
    ) => {
        $(
        $crate::__paste! {
            #[allow(unused_variables)]
            $vis fn [<visit_ $visited:snake>]<V : $id + ?Sized>($visitor_id: &mut V, $visited_id: &$visited) -> std::result::Result<(), V::Err> {
                $block
            }
        }
        )*

        $trait_vis trait $id {
            type Err;

            $(
            $crate::__paste! {
                fn [<visit_ $visited:snake>](&mut self, $visited_id: &$visited) -> std::result::Result<(), Self::Err> {
                    [<visit_ $visited:snake>](self, $visited_id)
                }
            }
            )*
        }
    };
}

#[doc(hidden)]
pub use paste::paste as __paste;
