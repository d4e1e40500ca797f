use std::{borrow::Borrow, iter::FusedIterator};

use log::trace;

use super::filter::{Filter, Side};
use crate::node::Node;

/// The order in which a walk yields values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Smallest value first.
    Ascend,
    /// Largest value first.
    Descend,
}

/// A unit of outstanding work in a walk.
#[derive(Debug)]
enum Work<'a, T> {
    /// A subtree that has not yet been expanded.
    Node(&'a Node<T>),
    /// A value ready to be yielded.
    Value(&'a T),
}

impl<T> Clone for Work<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Work<'_, T> {}

/// A lazy, depth-first walk over an [`Llrb`] that yields values in ascending
/// or descending order, optionally bounded relative to a pivot.
///
/// Only as much of the tree as is needed to produce the next value is
/// expanded on each call to [`Iterator::next()`], and subtrees that cannot
/// contain an in-range value are never visited.
///
/// Once [`None`] has been returned, every subsequent call also returns
/// [`None`].
///
/// An [`Iter`] borrows the tree it walks, preventing the tree from being
/// mutated until the [`Iter`] is dropped. Cloning an [`Iter`] produces an
/// independent walk continuing from the same position.
///
/// [`Llrb`]: crate::Llrb
#[derive(Debug)]
pub struct Iter<'a, T, Q: ?Sized = T> {
    /// A LIFO stack of outstanding work - the last unit pushed is the next to
    /// be processed.
    stack: Vec<Work<'a, T>>,
    direction: Direction,
    filter: Filter<'a, Q>,
}

impl<T, Q: ?Sized> Clone for Iter<'_, T, Q> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            direction: self.direction,
            filter: self.filter,
        }
    }
}

impl<'a, T, Q> Iter<'a, T, Q>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    pub(crate) fn new(
        root: Option<&'a Node<T>>,
        direction: Direction,
        filter: Filter<'a, Q>,
    ) -> Self {
        trace!(
            "new tree walk direction={:?} bound={} empty={}",
            direction,
            filter.name(),
            root.is_none()
        );

        Self {
            stack: root.map(Work::Node).into_iter().collect(),
            direction,
            filter,
        }
    }

    /// Push the parts of the subtree rooted at `n` admitted by the filter onto
    /// the stack, in the reverse of the order they are to be yielded.
    fn expand(&mut self, n: &'a Node<T>) {
        let sides = self.filter.sides(n.value());

        let below = n
            .left()
            .filter(|_| sides.contains(Side::Below))
            .map(Work::Node);
        let at = sides.contains(Side::At).then_some(Work::Value(n.value()));
        let above = n
            .right()
            .filter(|_| sides.contains(Side::Above))
            .map(Work::Node);

        let order = match self.direction {
            Direction::Ascend => [above, at, below],
            Direction::Descend => [below, at, above],
        };

        self.stack.extend(order.into_iter().flatten());
    }
}

impl<'a, T, Q> Iterator for Iter<'a, T, Q>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Work::Node(n) => self.expand(n),
                Work::Value(v) => return Some(v),
            }
        }
    }
}

// Nothing is ever pushed onto an empty stack.
impl<T, Q> FusedIterator for Iter<'_, T, Q>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
}
