//! Ordering strategies for sorted enumeration of a [`Set`].
//!
//! A set never relies on the order of its members for anything but [`Set::sorted`] and its
//! relatives, including its [`Display`] form. The strategy is chosen once, when the set is built,
//! and is inherited by every set derived from it.
//!
//! All strategies sort stably. Members which the strategy considers tied keep the order in which
//! the underlying hash table yielded them, which is only reproducible within a single call.

use crate::prelude::*;
use crate::utils::{stable_sort_by, stable_sort_by_cached_key};

/// A strategy for ordering the members of a set.
///
/// The comparison must be a [strict weak
/// ordering](https://en.wikipedia.org/wiki/Weak_ordering#Strict_weak_orderings). Under any other
/// comparison the resulting order is unspecified, but sorting still terminates and keeps every
/// member.
pub trait Order<T: ?Sized> {
    /// Compares two members.
    fn cmp(&self, fst: &T, snd: &T) -> Ordering;

    /// Stably sorts a list of members.
    fn sort<'a>(&self, list: &mut [&'a T]) {
        stable_sort_by(list, |fst, snd| self.cmp(*fst, *snd));
    }
}

/// The natural order of a type, given by its [`Ord`] implementation.
///
/// This covers numbers, strings, `bool` (with `false < true`), and any type deriving [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Order<T> for Natural {
    fn cmp(&self, fst: &T, snd: &T) -> Ordering {
        fst.cmp(snd)
    }
}

/// Orders members lexicographically by their [`Debug`] representation.
///
/// This is a fallback for types without a natural order. It is deterministic and total over
/// distinct representations, but not necessarily meaningful.
///
/// Distinct members with the same representation are tied. Their relative order then follows the
/// hash table, which may differ between runs. A custom [`Debug`] implementation that hides fields
/// can cause this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Canonical;

/// The canonical representation of a member.
fn canonical<T: Debug + ?Sized>(el: &T) -> String {
    format!("{el:?}")
}

impl<T: Debug + ?Sized> Order<T> for Canonical {
    fn cmp(&self, fst: &T, snd: &T) -> Ordering {
        canonical(fst).cmp(&canonical(snd))
    }

    /// Each representation is built only once.
    fn sort<'a>(&self, list: &mut [&'a T]) {
        stable_sort_by_cached_key(list, canonical);
    }
}

/// A user-supplied "less than" relation: `less(a, b)` states that `a` orders before `b`.
///
/// Two members are tied when neither orders before the other.
#[derive(Clone, Copy)]
pub struct LessThan<F>(pub F);

impl<F> Debug for LessThan<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("LessThan(..)")
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Order<T> for LessThan<F> {
    fn cmp(&self, fst: &T, snd: &T) -> Ordering {
        if (self.0)(fst, snd) {
            Ordering::Less
        } else if (self.0)(snd, fst) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Orders members by a key extracted from each of them.
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<F> Debug for ByKey<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("ByKey(..)")
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Order<T> for ByKey<F> {
    fn cmp(&self, fst: &T, snd: &T) -> Ordering {
        (self.0)(fst).cmp(&(self.0)(snd))
    }

    fn sort<'a>(&self, list: &mut [&'a T]) {
        stable_sort_by_cached_key(list, |el| (self.0)(el));
    }
}
