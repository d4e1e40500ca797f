mod filter;
mod owned_iter;
mod walker;

pub(crate) use filter::*;
pub use owned_iter::*;
pub use walker::*;
