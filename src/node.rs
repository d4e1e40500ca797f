use std::{borrow::Borrow, cmp::Ordering};

/// The colour of the link from a parent to a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

/// Controls how [`insert()`] treats a value equal to one already in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertMode {
    /// Swap the existing value out for the new value.
    Replace,

    /// Keep the existing value and add the new value after it.
    Duplicate,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The colour of the link pointing at this node from its parent.
    ///
    /// New nodes are always red. The root is always black outside of a
    /// mutation.
    color: Color,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            left: None,
            right: None,
            color: Color::Red,
            value,
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = match key.cmp(self.value.borrow()) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.value),
            Ordering::Greater => self.right(),
        }?;

        node.get(key)
    }

    /// Return the left-most (smallest) value in the subtree rooted at `self`.
    pub(crate) fn min(&self) -> &T {
        let mut n = self;
        while let Some(v) = n.left() {
            n = v;
        }
        &n.value
    }

    /// Return the right-most (largest) value in the subtree rooted at `self`.
    pub(crate) fn max(&self) -> &T {
        let mut n = self;
        while let Some(v) = n.right() {
            n = v;
        }
        &n.value
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Consume this [`Node`], returning the value it holds.
    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Insert `value` into the subtree rooted at `slot`, restoring the LLRB
/// invariants on the way back up.
///
/// Returns the replaced value when `mode` is [`InsertMode::Replace`] and an
/// equal value already existed.
///
/// The caller is responsible for colouring the tree root black.
pub(crate) fn insert<T>(slot: &mut Option<Box<Node<T>>>, value: T, mode: InsertMode) -> Option<T>
where
    T: Ord,
{
    let node = match slot {
        Some(v) => v,
        None => {
            *slot = Some(Box::new(Node::new(value)));
            return None;
        }
    };

    let replaced = match (value.cmp(&node.value), mode) {
        (Ordering::Less, _) => insert(&mut node.left, value, mode),
        (Ordering::Equal, InsertMode::Replace) => {
            return Some(std::mem::replace(&mut node.value, value));
        }
        // Duplicates are placed to the right, after all existing equal values
        // in an in-order walk.
        (Ordering::Equal | Ordering::Greater, _) => insert(&mut node.right, value, mode),
    };

    if replaced.is_some() {
        // The tree structure has not been modified, so it does not require
        // rebalancing.
        return replaced;
    }

    fix_up(node);
    None
}

/// Remove the minimum value from the subtree rooted at `slot`.
///
/// The caller is responsible for the root colouring described in
/// [`crate::Llrb::remove_min()`].
pub(crate) fn remove_min<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let h = slot.as_mut()?;

    if h.left.is_none() {
        // A node without a left child cannot have a right child in a
        // left-leaning tree: it would either be a right-leaning red link, or
        // unbalance the black height.
        debug_assert!(h.right.is_none());
        return slot.take().map(|v| v.into_value());
    }

    // Ensure the left child is not a 2-node before descending into it.
    if !is_red(h.left()) && !is_red(h.left().and_then(Node::left)) {
        move_red_left(h);
    }

    let v = remove_min(&mut h.left);
    fix_up(h);
    v
}

/// Remove the maximum value from the subtree rooted at `slot`.
pub(crate) fn remove_max<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let h = slot.as_mut()?;

    // Lean any red left link to the right so it can be carried down the right
    // spine.
    if is_red(h.left()) {
        rotate_right(h);
    }

    if h.right.is_none() {
        debug_assert!(h.left.is_none());
        return slot.take().map(|v| v.into_value());
    }

    if !is_red(h.right()) && !is_red(h.right().and_then(Node::left)) {
        move_red_right(h);
    }

    let v = remove_max(&mut h.right);
    fix_up(h);
    v
}

/// Remove one value equal to `key` from the subtree rooted at `slot`.
///
/// The subtree MUST contain a value equal to `key`; the red-link shuffling
/// performed on the way down relies on the search path ending at a match.
pub(crate) fn remove<T, Q>(slot: &mut Option<Box<Node<T>>>, key: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let h = slot.as_mut()?;

    let removed = if key.cmp(h.value.borrow()) == Ordering::Less {
        if !is_red(h.left()) && !is_red(h.left().and_then(Node::left)) {
            move_red_left(h);
        }
        remove(&mut h.left, key)
    } else {
        // Set when a rotation replaces `h` with its left child. The key is at
        // least the value of the node that was rotated down into the right
        // subtree, so with duplicates the new `h` may compare equal while that
        // subtree is not yet in shape to give up its minimum.
        let mut rotated = false;

        if is_red(h.left()) {
            rotate_right(h);
            rotated = true;
        }

        if key.cmp(h.value.borrow()) == Ordering::Equal && h.right.is_none() {
            // A matching leaf: unlink it from the parent.
            debug_assert!(h.left.is_none());
            return slot.take().map(|v| v.into_value());
        }

        if !is_red(h.right()) && !is_red(h.right().and_then(Node::left)) {
            rotated |= move_red_right(h);
        }

        if !rotated && key.cmp(h.value.borrow()) == Ordering::Equal {
            // Replace this node's value with its in-order successor, removing
            // the successor from the right subtree.
            let Some(successor) = remove_min(&mut h.right) else {
                unreachable!("internal node has a right subtree");
            };
            Some(std::mem::replace(&mut h.value, successor))
        } else {
            remove(&mut h.right, key)
        }
    };

    fix_up(h);
    removed
}

pub(crate) fn is_red<T>(n: Option<&Node<T>>) -> bool {
    n.map(Node::is_red).unwrap_or_default()
}

/// Flip the colour of `h` and both of its children, splitting (or forming) a
/// temporary 4-node.
fn flip<T>(h: &mut Node<T>) {
    h.color = h.color.flip();
    for child in [h.left.as_mut(), h.right.as_mut()].into_iter().flatten() {
        child.color = child.color.flip();
    }
}

/// Restore the left-leaning invariants of `h` after a mutation below it.
fn fix_up<T>(h: &mut Box<Node<T>>) {
    if is_red(h.right()) && !is_red(h.left()) {
        rotate_left(h);
    }
    if is_red(h.left()) && is_red(h.left().and_then(Node::left)) {
        rotate_right(h);
    }
    if is_red(h.left()) && is_red(h.right()) {
        flip(h);
    }
}

/// Assuming `h` is red and both `h.left` and `h.left.left` are black, make
/// `h.left` or one of its children red.
fn move_red_left<T>(h: &mut Box<Node<T>>) {
    flip(h);
    if is_red(h.right().and_then(Node::left)) {
        if let Some(r) = h.right_mut() {
            rotate_right(r);
        }
        rotate_left(h);
        flip(h);
    }
}

/// Assuming `h` is red and both `h.right` and `h.right.left` are black, make
/// `h.right` or one of its children red.
///
/// Returns true if `h` was rotated right, replacing it with its left child.
fn move_red_right<T>(h: &mut Box<Node<T>>) -> bool {
    flip(h);
    if is_red(h.left().and_then(Node::left)) {
        rotate_right(h);
        flip(h);
        return true;
    }
    false
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`,
/// moving the red link from `x -> P` to `P -> x`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x.right.take().unwrap();
    x.right = p.left.take();

    p.color = x.color;
    x.color = Color::Red;

    std::mem::swap(x, &mut p);
    x.left = Some(p);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`,
/// moving the red link from `P -> y` to `y -> P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().unwrap();
    y.left = p.right.take();

    p.color = y.color;
    y.color = Color::Red;

    std::mem::swap(y, &mut p);
    y.right = Some(p);
}
