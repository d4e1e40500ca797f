use std::borrow::Borrow;

use enumset::{EnumSet, EnumSetType};

/// The parts of a subtree, relative to the subtree root, that a walk may visit.
#[derive(Debug, EnumSetType)]
pub(crate) enum Side {
    /// The left subtree.
    Below,
    /// The subtree root's own value.
    At,
    /// The right subtree.
    Above,
}

/// A bound on the values yielded by a walk, relative to a pivot.
///
/// Each node is evaluated in isolation. A side is excluded only when the
/// search-order invariant proves it cannot hold an in-range value, so every
/// node that is visited is itself re-evaluated before its value is yielded.
#[derive(Debug)]
pub(crate) enum Filter<'a, Q: ?Sized> {
    /// Every value.
    Any,
    /// Values strictly greater than the pivot.
    Above(&'a Q),
    /// Values greater than or equal to the pivot.
    AtOrAbove(&'a Q),
    /// Values strictly less than the pivot.
    Below(&'a Q),
    /// Values less than or equal to the pivot.
    AtOrBelow(&'a Q),
}

impl<Q: ?Sized> Clone for Filter<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: ?Sized> Copy for Filter<'_, Q> {}

impl<Q: ?Sized> Filter<'_, Q> {
    /// A short, human readable name of the bound.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Above(_) => "above",
            Self::AtOrAbove(_) => "at_or_above",
            Self::Below(_) => "below",
            Self::AtOrBelow(_) => "at_or_below",
        }
    }
}

impl<Q> Filter<'_, Q>
where
    Q: Ord + ?Sized,
{
    /// Return the [`Side`]s of the subtree rooted at a node holding `value`
    /// that may contain in-range values.
    pub(crate) fn sides<T>(&self, value: &T) -> EnumSet<Side>
    where
        T: Borrow<Q>,
    {
        let value = value.borrow();

        match *self {
            Self::Any => EnumSet::all(),

            // Everything at or left of a value <= pivot is out of range.
            Self::Above(pivot) if value <= pivot => EnumSet::only(Side::Above),
            // Everything at or left of a value < pivot is out of range.
            Self::AtOrAbove(pivot) if value < pivot => EnumSet::only(Side::Above),
            // Everything at or right of a value >= pivot is out of range.
            Self::Below(pivot) if value >= pivot => EnumSet::only(Side::Below),
            // Everything at or right of a value > pivot is out of range.
            Self::AtOrBelow(pivot) if value > pivot => EnumSet::only(Side::Below),

            Self::Above(_) | Self::AtOrAbove(_) | Self::Below(_) | Self::AtOrBelow(_) => {
                EnumSet::all()
            }
        }
    }
}
