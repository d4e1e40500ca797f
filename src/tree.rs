use std::borrow::Borrow;

use log::trace;

use crate::{
    iter::{Direction, Filter, IntoIter, Iter},
    node::{self, Color, InsertMode, Node},
};

/// An ordered collection of values stored in a left-leaning red-black tree
/// (LLRB), supporting lazy ascending and descending walks, optionally bounded
/// relative to a pivot value.
///
/// # Balanced
///
/// The tree is a 2-3 variant LLRB: red links always lean left and no node has
/// two red links, so every path from the root to a leaf contains at most twice
/// as many links as the shortest. Lookups, inserts and removals are
/// logarithmic in the worst case.
///
/// # Walks
///
/// Ordered traversal is performed by [`Iter`], which expands only as much of
/// the tree as is needed to yield the next value and never visits a subtree
/// that cannot contain an in-range value. There are ten ways to construct one:
///
/// | Method                       | Yields                        |
/// |------------------------------|-------------------------------|
/// | [`ascend()`]                 | all values, smallest first    |
/// | [`descend()`]                | all values, largest first     |
/// | [`ascend_above()`]           | `v > pivot`, smallest first   |
/// | [`descend_above()`]          | `v > pivot`, largest first    |
/// | [`ascend_at_or_above()`]     | `v >= pivot`, smallest first  |
/// | [`descend_at_or_above()`]    | `v >= pivot`, largest first   |
/// | [`ascend_below()`]           | `v < pivot`, smallest first   |
/// | [`descend_below()`]          | `v < pivot`, largest first    |
/// | [`ascend_at_or_below()`]     | `v <= pivot`, smallest first  |
/// | [`descend_at_or_below()`]    | `v <= pivot`, largest first   |
///
/// An [`Iter`] borrows the tree, so the tree cannot be modified while a walk
/// is in progress.
///
/// # Duplicates
///
/// [`Llrb::insert()`] replaces an existing equal value, while
/// [`Llrb::insert_no_replace()`] stores the new value alongside it, after any
/// existing equal values in an ascending walk. Removing a value never reorders
/// the values that remain, so equal values that have only ever been added with
/// [`Llrb::insert_no_replace()`] are yielded in insertion order.
///
/// [`ascend()`]: Llrb::ascend
/// [`descend()`]: Llrb::descend
/// [`ascend_above()`]: Llrb::ascend_above
/// [`descend_above()`]: Llrb::descend_above
/// [`ascend_at_or_above()`]: Llrb::ascend_at_or_above
/// [`descend_at_or_above()`]: Llrb::descend_at_or_above
/// [`ascend_below()`]: Llrb::ascend_below
/// [`descend_below()`]: Llrb::descend_below
/// [`ascend_at_or_below()`]: Llrb::ascend_at_or_below
/// [`descend_at_or_below()`]: Llrb::descend_at_or_below
#[derive(Debug, Clone)]
pub struct Llrb<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Llrb<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> Llrb<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Return the smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(Node::min)
    }

    /// Return the largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(Node::max)
    }

    /// Remove and return the smallest value in the tree, if any.
    pub fn remove_min(&mut self) -> Option<T> {
        self.prepare_remove();
        let v = node::remove_min(&mut self.root);
        self.finish_remove(v)
    }

    /// Remove and return the largest value in the tree, if any.
    pub fn remove_max(&mut self) -> Option<T> {
        self.prepare_remove();
        let v = node::remove_max(&mut self.root);
        self.finish_remove(v)
    }

    /// If both children of the root are black, colour the root red so the
    /// removal descent always starts from a node that is not a 2-node.
    fn prepare_remove(&mut self) {
        if let Some(root) = self.root.as_mut() {
            if !node::is_red(root.left()) && !node::is_red(root.right()) {
                root.set_color(Color::Red);
            }
        }
    }

    fn finish_remove(&mut self, removed: Option<T>) -> Option<T> {
        if let Some(root) = self.root.as_mut() {
            root.set_color(Color::Black);
        }

        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }
}

impl<T> Llrb<T>
where
    T: Ord,
{
    /// Insert `value` into the tree, returning the existing equal value it
    /// replaced, if any.
    pub fn insert(&mut self, value: T) -> Option<T> {
        let replaced = self.insert_mode(value, InsertMode::Replace);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Insert `value` into the tree, retaining any existing equal values.
    ///
    /// The new value is yielded after all existing equal values in an
    /// ascending walk.
    pub fn insert_no_replace(&mut self, value: T) {
        let replaced = self.insert_mode(value, InsertMode::Duplicate);
        debug_assert!(replaced.is_none());
        self.len += 1;
    }

    fn insert_mode(&mut self, value: T, mode: InsertMode) -> Option<T> {
        let replaced = node::insert(&mut self.root, value, mode);

        if let Some(root) = self.root.as_mut() {
            root.set_color(Color::Black);
        }

        replaced
    }

    /// Return a reference to a value in the tree equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_ref().and_then(|v| v.get(key))
    }

    /// Return true if the tree contains a value equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove and return one value equal to `key`, if any.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // The removal descent restructures the tree on the way down on the
        // assumption the key will be found.
        if !self.contains(key) {
            trace!("remove key not found in tree");
            return None;
        }

        self.prepare_remove();
        let v = node::remove(&mut self.root, key);
        debug_assert!(v.is_some());
        self.finish_remove(v)
    }

    /// Return an [`Iter`] yielding all values in ascending order.
    ///
    /// Equivalent to [`Llrb::ascend()`].
    pub fn iter(&self) -> Iter<'_, T> {
        self.ascend()
    }

    /// Return an [`Iter`] yielding all values, smallest first.
    ///
    /// ```
    /// use llrb::Llrb;
    ///
    /// let t = Llrb::from_iter([5, 1, 3]);
    /// assert_eq!(t.ascend().collect::<Vec<_>>(), [&1, &3, &5]);
    /// ```
    pub fn ascend(&self) -> Iter<'_, T> {
        self.walk(Direction::Ascend, Filter::Any)
    }

    /// Return an [`Iter`] yielding all values, largest first.
    ///
    /// ```
    /// use llrb::Llrb;
    ///
    /// let t = Llrb::from_iter([5, 1, 3]);
    /// assert_eq!(t.descend().collect::<Vec<_>>(), [&5, &3, &1]);
    /// ```
    pub fn descend(&self) -> Iter<'_, T> {
        self.walk(Direction::Descend, Filter::Any)
    }

    /// Return an [`Iter`] yielding values strictly greater than `pivot`,
    /// smallest first.
    ///
    /// ```
    /// use llrb::Llrb;
    ///
    /// let t = Llrb::from_iter([1, 3, 5, 7, 9]);
    /// assert_eq!(t.ascend_above(&5).collect::<Vec<_>>(), [&7, &9]);
    /// ```
    pub fn ascend_above<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Ascend, Filter::Above(pivot))
    }

    /// Return an [`Iter`] yielding values strictly greater than `pivot`,
    /// largest first.
    pub fn descend_above<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Descend, Filter::Above(pivot))
    }

    /// Return an [`Iter`] yielding values greater than or equal to `pivot`,
    /// smallest first.
    ///
    /// ```
    /// use llrb::Llrb;
    ///
    /// let t = Llrb::from_iter([1, 3, 5, 7, 9]);
    /// assert_eq!(t.ascend_at_or_above(&5).collect::<Vec<_>>(), [&5, &7, &9]);
    /// ```
    pub fn ascend_at_or_above<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Ascend, Filter::AtOrAbove(pivot))
    }

    /// Return an [`Iter`] yielding values greater than or equal to `pivot`,
    /// largest first.
    pub fn descend_at_or_above<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Descend, Filter::AtOrAbove(pivot))
    }

    /// Return an [`Iter`] yielding values strictly less than `pivot`, smallest
    /// first.
    pub fn ascend_below<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Ascend, Filter::Below(pivot))
    }

    /// Return an [`Iter`] yielding values strictly less than `pivot`, largest
    /// first.
    ///
    /// ```
    /// use llrb::Llrb;
    ///
    /// let t = Llrb::from_iter([1, 3, 5, 7, 9]);
    /// assert_eq!(t.descend_below(&5).collect::<Vec<_>>(), [&3, &1]);
    /// ```
    pub fn descend_below<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Descend, Filter::Below(pivot))
    }

    /// Return an [`Iter`] yielding values less than or equal to `pivot`,
    /// smallest first.
    pub fn ascend_at_or_below<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Ascend, Filter::AtOrBelow(pivot))
    }

    /// Return an [`Iter`] yielding values less than or equal to `pivot`,
    /// largest first.
    pub fn descend_at_or_below<'a, Q>(&'a self, pivot: &'a Q) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.walk(Direction::Descend, Filter::AtOrBelow(pivot))
    }

    fn walk<'a, Q>(&'a self, direction: Direction, filter: Filter<'a, Q>) -> Iter<'a, T, Q>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Iter::new(self.root.as_deref(), direction, filter)
    }
}

impl<T> PartialEq for Llrb<T>
where
    T: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same values may differ in shape.
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Llrb<T> where T: Ord {}

impl<'a, T> IntoIterator for &'a Llrb<T>
where
    T: Ord,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Llrb<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<T> FromIterator<T> for Llrb<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T> Extend<T> for Llrb<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}
