//! An ordered collection backed by a left-leaning red-black tree, with lazy,
//! optionally bounded, ascending and descending walks.
//!
//! ```
//! use llrb::Llrb;
//!
//! let t = Llrb::from_iter([7, 1, 9, 3, 5]);
//!
//! // Walk all values in order.
//! assert_eq!(t.ascend().collect::<Vec<_>>(), [&1, &3, &5, &7, &9]);
//! assert_eq!(t.descend().collect::<Vec<_>>(), [&9, &7, &5, &3, &1]);
//!
//! // Or only those on one side of a pivot, which need not be in the tree.
//! assert_eq!(t.ascend_above(&5).collect::<Vec<_>>(), [&7, &9]);
//! assert_eq!(t.descend_at_or_below(&4).collect::<Vec<_>>(), [&3, &1]);
//! ```
//!
//! A walk ([`Iter`]) holds an explicit stack of pending subtrees and values,
//! expanding the tree one node at a time as values are pulled from it, so
//! stopping early never pays for the unvisited remainder of the tree.
//!
//! # Features
//!
//! * `serde`: [`Serialize`] and [`Deserialize`] implementations for [`Llrb`],
//!   encoding the tree as an ordered sequence of values.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::todo,
    clippy::use_self,
    missing_debug_implementations,
    missing_docs
)]

mod iter;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod tree;

#[cfg(test)]
mod test_utils;

pub use iter::{IntoIter, Iter};
pub use tree::*;

