//! Finite sets [`Set`].

use crate::prelude::*;
use std::ops::{BitAnd, BitOr, Sub};

/// A finite set of distinct values, backed by a hash table.
///
/// Every set carries an ordering strategy `O` (see [`Order`]), which is only used to enumerate its
/// members in sorted order, and therefore to display it. Sets derived from another one, such as
/// through [`Set::union`], inherit its strategy.
///
/// Mutating methods work in place. Derived sets are always built in fresh storage, so that no two
/// sets ever share members.
///
/// ## Invariants
///
/// Every two members of a [`Set`] are distinct.
#[derive(Clone, IntoIterator)]
pub struct Set<T, O = Natural> {
    /// The members of the set.
    #[into_iterator(owned, ref)]
    members: HashSet<T>,
    /// The strategy for sorting the members.
    order: O,
}

// -------------------- Constructions -------------------- //

impl<T: Hash + Eq> Set<T> {
    /// Builds a set from its members, ordered by their natural order.
    pub fn new<I: IntoIterator<Item = T>>(members: I) -> Self {
        Self::with_order(Natural, members)
    }

    /// The empty set Ø.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_order(Natural, [])
    }
}

impl<T: Hash + Eq> Set<T, Canonical> {
    /// Builds a set from its members, ordered by their [`Debug`] representation.
    ///
    /// Only [`Debug`] is needed to sort such a set through [`Set::sorted`] or
    /// [`Set::as_sorted_list`]. Displaying it still needs the members to implement [`Display`].
    /// See [`Canonical`].
    pub fn canonical<I: IntoIterator<Item = T>>(members: I) -> Self {
        Self::with_order(Canonical, members)
    }
}

impl<T: Hash + Eq, F: Fn(&T, &T) -> bool> Set<T, LessThan<F>> {
    /// Builds a set from its members, ordered by a "less than" relation: `cmp(a, b)` states that
    /// `a` orders before `b`.
    pub fn with_comparator<I: IntoIterator<Item = T>>(cmp: F, members: I) -> Self {
        Self::with_order(LessThan(cmp), members)
    }
}

impl<T: Hash + Eq, K: Ord, F: Fn(&T) -> K> Set<T, ByKey<F>> {
    /// Builds a set from its members, ordered by some key.
    pub fn with_key<I: IntoIterator<Item = T>>(key: F, members: I) -> Self {
        Self::with_order(ByKey(key), members)
    }
}

impl<T: Hash + Eq, O> Set<T, O> {
    /// Builds a set from its members, sorted with the given strategy.
    ///
    /// Repeated members collapse silently.
    pub fn with_order<I: IntoIterator<Item = T>>(order: O, members: I) -> Self {
        Self {
            members: members.into_iter().collect(),
            order,
        }
    }

    /// The ordering strategy for the set.
    pub const fn order(&self) -> &O {
        &self.order
    }

    /// An empty set with the same ordering strategy.
    fn empty_like(&self) -> Self
    where
        O: Clone,
    {
        Self::with_order(self.order.clone(), [])
    }
}

// -------------------- Mutation -------------------- //

impl<T: Hash + Eq, O> Set<T, O> {
    /// In-place insertion of a single member. Returns whether it was absent.
    pub fn insert_mut(&mut self, member: T) -> bool {
        self.members.insert(member)
    }

    /// In-place insertion of members. Members already in the set are ignored.
    ///
    /// Returns the same set, so that calls can be chained.
    pub fn add_mut<I: IntoIterator<Item = T>>(&mut self, members: I) -> &mut Self {
        self.members.extend(members);
        self
    }

    /// Set insertion x ∪ {y, z, ...}.
    #[must_use]
    pub fn add<I: IntoIterator<Item = T>>(mut self, members: I) -> Self {
        self.add_mut(members);
        self
    }
}

// -------------------- Queries -------------------- //

impl<T: Hash + Eq, O> Set<T, O> {
    /// Set cardinality.
    pub fn card(&self) -> usize {
        self.members.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the members of the set, in no particular order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<T> {
        self.members.iter()
    }

    /// Membership relation ∈.
    pub fn contains<Q: Hash + Eq + ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.members.contains(value)
    }

    /// Whether every one of the values is in the set. This is vacuously true when there are no
    /// values.
    pub fn contains_all<'a, Q, I>(&self, values: I) -> bool
    where
        Q: Hash + Eq + ?Sized + 'a,
        T: Borrow<Q>,
        I: IntoIterator<Item = &'a Q>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Set equality. Both sets may use different ordering strategies.
    pub fn equals<P>(&self, other: &Set<T, P>) -> bool {
        self.card() == other.card() && self.iter().all(|el| other.contains(el))
    }

    /// Subset relation ⊆.
    pub fn subset<P>(&self, other: &Set<T, P>) -> bool {
        self.card() <= other.card() && self.iter().all(|el| other.contains(el))
    }

    /// Strict subset relation ⊂.
    pub fn ssubset<P>(&self, other: &Set<T, P>) -> bool {
        self.card() < other.card() && self.subset(other)
    }

    /// Superset relation ⊇.
    pub fn superset<P>(&self, other: &Set<T, P>) -> bool {
        other.subset(self)
    }

    /// Strict superset relation ⊃.
    pub fn ssuperset<P>(&self, other: &Set<T, P>) -> bool {
        other.ssubset(self)
    }
}

// -------------------- Derived sets -------------------- //

impl<T: Hash + Eq + Clone, O: Clone> Set<T, O> {
    /// Intersection x ∩ y.
    #[must_use]
    pub fn inter<P>(&self, other: &Set<T, P>) -> Self {
        // Iterate over the smaller set.
        let members = if self.card() <= other.card() {
            self.iter().filter(|el| other.contains(*el)).cloned().collect()
        } else {
            other.iter().filter(|el| self.contains(*el)).cloned().collect()
        };

        Self {
            members,
            order: self.order.clone(),
        }
    }

    /// Union x ∪ y.
    #[must_use]
    pub fn union<P>(&self, other: &Set<T, P>) -> Self {
        self.clone().add(other.iter().cloned())
    }

    /// Difference x − y, the members of x not in y.
    #[must_use]
    pub fn minus<P>(&self, other: &Set<T, P>) -> Self {
        let mut set = self.empty_like();
        set.add_mut(self.iter().filter(|el| !other.contains(*el)).cloned());
        set
    }

    /// The members of the set, in no particular order.
    ///
    /// The order depends on the hash table and may change between calls and runs.
    #[must_use]
    pub fn as_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// -------------------- Sorted enumeration -------------------- //

impl<T: Hash + Eq, O: Order<T>> Set<T, O> {
    /// The members of the set, sorted by its ordering strategy.
    ///
    /// The sort is stable. Members tied by the strategy keep the order in which the hash table
    /// yields them, so their relative order is only reproducible when the strategy has no ties.
    #[must_use]
    pub fn sorted(&self) -> Vec<&T> {
        let mut list: Vec<_> = self.iter().collect();
        self.order.sort(&mut list);
        list
    }

    /// Owned version of [`Set::sorted`].
    #[must_use]
    pub fn as_sorted_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.sorted().into_iter().cloned().collect()
    }
}

// -------------------- Basic traits -------------------- //

impl<T, O: Default> Default for Set<T, O> {
    fn default() -> Self {
        Self {
            members: HashSet::new(),
            order: O::default(),
        }
    }
}

impl<T: Hash + Eq, O: Default> FromIterator<T> for Set<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_order(O::default(), iter)
    }
}

impl<T: Hash + Eq, O> Extend<T> for Set<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_mut(iter);
    }
}

impl<T: Hash + Eq, O> From<Set<T, O>> for Vec<T> {
    fn from(set: Set<T, O>) -> Self {
        set.members.into_iter().collect()
    }
}

impl<T: Hash + Eq, O, P> PartialEq<Set<T, P>> for Set<T, O> {
    fn eq(&self, other: &Set<T, P>) -> bool {
        self.equals(other)
    }
}

impl<T: Hash + Eq, O> Eq for Set<T, O> {}

/// Sets are partially ordered by inclusion.
impl<T: Hash + Eq, O, P> PartialOrd<Set<T, P>> for Set<T, O> {
    fn le(&self, other: &Set<T, P>) -> bool {
        self.subset(other)
    }

    fn ge(&self, other: &Set<T, P>) -> bool {
        self.superset(other)
    }

    fn lt(&self, other: &Set<T, P>) -> bool {
        self.ssubset(other)
    }

    fn gt(&self, other: &Set<T, P>) -> bool {
        self.ssuperset(other)
    }

    fn partial_cmp(&self, other: &Set<T, P>) -> Option<Ordering> {
        let cmp = self.card().cmp(&other.card());
        let test = match cmp {
            Ordering::Equal => self.equals(other),
            Ordering::Less => self.subset(other),
            Ordering::Greater => self.superset(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}

/// Implements a binary operator on references through a derived set method.
macro_rules! impl_op {
    ($trait: ident, $fn: ident, $method: ident) => {
        impl<T: Hash + Eq + Clone, O: Clone, P> $trait<&Set<T, P>> for &Set<T, O> {
            type Output = Set<T, O>;

            fn $fn(self, other: &Set<T, P>) -> Set<T, O> {
                self.$method(other)
            }
        }
    };
}

impl_op!(BitAnd, bitand, inter);
impl_op!(BitOr, bitor, union);
impl_op!(Sub, sub, minus);

// -------------------- Formatting -------------------- //

/// Succintly writes the members of a set as stored in memory.
impl<T: Debug, O> Debug for Set<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(&self.members).finish()
    }
}

/// Displays a set as its type, followed by its sorted members in roster notation.
///
/// Members are rendered through their own [`Display`] implementation, whatever the ordering
/// strategy, so a [canonical](Set::canonical) set of `Debug`-only members can't be displayed.
impl<T: Hash + Eq + Display, O: Order<T>> Display for Set<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Set<{}>{{", type_tag::<T>())?;

        let mut iter = self.sorted().into_iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for el in iter {
            write!(f, ", {el}")?;
        }

        f.write_char('}')
    }
}

// -------------------- String parsing -------------------- //

/// Error in parsing a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError<E> {
    /// Missing, mismatched, or nested brackets.
    Brackets,
    /// Something other than a `Set<...>` tag before the opening bracket.
    Tag,
    /// A member could not be parsed.
    Member(E),
}

impl<E: Display> Display for SetError<E> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Brackets => f.write_str("mismatched brackets"),
            Self::Tag => f.write_str("invalid set tag"),
            Self::Member(err) => write!(f, "invalid member: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SetError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Member(err) => Some(err),
            _ => None,
        }
    }
}

/// Sets are parsed from the notation they're displayed in. The `Set<...>` tag is optional and not
/// checked against the member type. Members are separated by commas and trimmed, so they can't
/// themselves contain commas or brackets.
impl<T: Hash + Eq + FromStr, O: Default> FromStr for Set<T, O> {
    type Err = SetError<T::Err>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (tag, rest) = s.split_once('{').ok_or(SetError::Brackets)?;

        let tag = tag.trim_end();
        if !tag.is_empty() && !(tag.starts_with("Set<") && tag.ends_with('>')) {
            return Err(SetError::Tag);
        }

        let inner = rest.strip_suffix('}').ok_or(SetError::Brackets)?;
        if inner.chars().any(|c| ['{', '}'].contains(&c)) {
            return Err(SetError::Brackets);
        }

        let mut set = Self::default();
        if inner.trim().is_empty() {
            return Ok(set);
        }

        for member in inner.split(',') {
            set.insert_mut(member.trim().parse().map_err(SetError::Member)?);
        }
        Ok(set)
    }
}
