//! General library tests.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;
use proptest::prelude::*;
use std::ops::Range;

/// Creates analogous tests for sets of [`String`] and of [`i32`].
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = string, $name {
                #[test]
                fn fn_name() {
                    <String as Suite>::$name();
                }
            });

            concat_idents!(fn_name = int, $name {
                #[test]
                fn fn_name() {
                    <i32 as Suite>::$name();
                }
            });
        )*
    };
}

/// Every set in a suite is a subset of [`MEMBERS`](Suite::MEMBERS), encoded as a bitmask.
trait Suite: Sized + Clone + Debug + Display + FromStr + Hash + Ord {
    /// Members for general-purpose testing, written as they're displayed.
    ///
    /// The list must be in increasing order.
    const MEMBERS: &'static [&'static str];

    /// Parses a value, or panics.
    fn parse(str: &str) -> Self {
        str.parse()
            .unwrap_or_else(|_| panic!("{str} must parse as a member"))
    }

    /// Our [`MEMBERS`](Suite::MEMBERS) as values.
    fn members() -> Vec<Self> {
        Self::MEMBERS.iter().map(|str| Self::parse(str)).collect()
    }

    /// Every valid bitmask.
    fn masks() -> Range<u32> {
        0..(1 << Self::MEMBERS.len())
    }

    /// The members selected by a bitmask, in increasing order.
    fn select(mask: u32) -> Vec<Self> {
        Self::members()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, el)| el)
            .collect()
    }

    /// The set selected by a bitmask.
    fn set(mask: u32) -> Set<Self> {
        Set::new(Self::select(mask))
    }

    /// Our sets as `(mask, Set)` pairs.
    fn suite() -> impl Iterator<Item = (u32, Set<Self>)> {
        Self::masks().map(|mask| (mask, Self::set(mask)))
    }

    /// Verify round-trip conversion between a set and a string.
    fn roundtrip(set: &Set<Self>, str: &str) {
        let parsed: Set<Self> = str
            .parse()
            .unwrap_or_else(|_| panic!("{str} must parse as a set"));
        assert_eq!(set, &parsed);
        assert_eq!(set.to_string(), str);
    }

    /// Test that our [`MEMBERS`](Suite::MEMBERS) are well-formatted.
    fn _suite() {
        let members = Self::members();
        for i in 1..members.len() {
            assert!(
                members[i - 1] < members[i],
                "test suite must be increasingly ordered\n\
                indices {} and {i}",
                i - 1
            );
        }

        for (str, el) in Self::MEMBERS.iter().zip(&members) {
            assert_eq!(str, &el.to_string(), "test suite must round-trip");
        }
    }

    /// Test [`Set::empty`].
    fn _empty() {
        let empty = Set::<Self>::empty();
        assert_eq!(empty.card(), 0);
        assert!(empty.is_empty());
        Self::roundtrip(&empty, &format!("Set<{}>{{}}", type_tag::<Self>()));
    }

    /// Test the [`Display`] and [`FromStr`] implementations of [`Set`].
    fn _display() {
        for (mask, set) in Self::suite() {
            let selected: Vec<_> = Self::select(mask).iter().map(ToString::to_string).collect();
            let str = format!("Set<{}>{{{}}}", type_tag::<Self>(), selected.join(", "));
            Self::roundtrip(&set, &str);
        }
    }

    /// Test [`Set::new`] and [`Set::add_mut`].
    fn _add() {
        for (mask, mut set) in Self::suite() {
            // Insertion order and repetition don't matter.
            let mut rev = Self::select(mask);
            rev.reverse();
            let twice = Set::new(rev.iter().chain(&rev).cloned());
            assert_eq!(set, twice);

            let card = set.card();
            set.add_mut(Self::select(mask));
            assert_eq!(set.card(), card, "adding members must be idempotent");

            set.add_mut(Self::members());
            assert_eq!(set.card(), Self::MEMBERS.len());
        }
    }

    /// Test [`Set::contains`] and [`Set::contains_all`].
    fn _contains() {
        let members = Self::members();
        for (i, set) in Self::suite() {
            for (k, el) in members.iter().enumerate() {
                assert_eq!(set.contains(el), i & (1 << k) != 0);
            }

            for j in Self::masks() {
                assert_eq!(
                    set.contains_all(&Self::select(j)),
                    j & !i == 0,
                    "membership fail at {i}, {j}: {set}"
                );
            }
        }
    }

    /// Test [`Set::equals`].
    fn _eq() {
        for (i, set_1) in Self::suite() {
            for (j, set_2) in Self::suite() {
                assert_eq!(i == j, set_1 == set_2, "set equality fail at {i}, {j}");
                assert_eq!(set_1.equals(&set_2), set_2.equals(&set_1));
            }
        }
    }

    /// Test [`Set::inter`].
    fn _inter() {
        for (i, set_1) in Self::suite() {
            for (j, set_2) in Self::suite() {
                let inter = set_1.inter(&set_2);
                assert_eq!(inter, Self::set(i & j), "intersection fail at {i}, {j}");
                assert_eq!(inter, &set_2 & &set_1);
            }
        }
    }

    /// Test [`Set::union`].
    fn _union() {
        for (i, set_1) in Self::suite() {
            for (j, set_2) in Self::suite() {
                let union = set_1.union(&set_2);
                assert_eq!(union, Self::set(i | j), "union fail at {i}, {j}");
                assert_eq!(union, &set_2 | &set_1);
            }
        }
    }

    /// Test [`Set::minus`].
    fn _minus() {
        for (i, set_1) in Self::suite() {
            for (j, set_2) in Self::suite() {
                let minus = set_1.minus(&set_2);
                assert_eq!(minus, Self::set(i & !j), "difference fail at {i}, {j}");
                assert_eq!(minus, &set_1 - &set_2);
            }
        }
    }

    /// Test [`Set::subset`] and its relatives.
    fn _subset() {
        for (i, set_1) in Self::suite() {
            for (j, set_2) in Self::suite() {
                let subset = i & !j == 0;
                assert_eq!(set_1.subset(&set_2), subset, "subset fail at {i}, {j}");
                assert_eq!(set_1.subset(&set_2), set_1.inter(&set_2) == set_1);
                assert_eq!(set_1.ssubset(&set_2), subset && i != j);
                assert_eq!(set_2.superset(&set_1), subset);
                assert_eq!(set_2.ssuperset(&set_1), subset && i != j);
                assert_eq!(set_1 <= set_2, subset);
            }
        }
    }

    /// Test [`Clone`] for [`Set`].
    fn _clone() {
        let members = Self::members();
        let (fst, snd) = (&members[0], &members[1]);

        for (mask, mut set) in Self::suite().filter(|(mask, _)| mask & 0b11 == 0) {
            let mut clone = set.clone();
            assert_eq!(clone, set);

            clone.add_mut([fst.clone()]);
            set.add_mut([snd.clone()]);
            assert!(!set.contains(fst), "clone affected original at {mask}");
            assert!(!clone.contains(snd), "original affected clone at {mask}");
        }
    }

    /// Test [`Set::as_sorted_list`].
    fn _sorted() {
        for (mask, set) in Self::suite() {
            let sorted = set.as_sorted_list();
            assert_eq!(sorted, Self::select(mask));
            assert_eq!(sorted, set.as_sorted_list());

            let mut list = set.as_list();
            list.sort();
            assert_eq!(list, sorted);
        }
    }
}

impl Suite for String {
    const MEMBERS: &'static [&'static str] = &["balrog", "cammy", "chun-li", "guile", "ken"];
}

impl Suite for i32 {
    const MEMBERS: &'static [&'static str] = &["-12", "-5", "0", "3", "44"];
}

test!(
    _suite, _empty, _display, _add, _contains, _eq, _inter, _union, _minus, _subset, _clone,
    _sorted
);

// -------------------- Algebraic laws -------------------- //

/// Sets of small integers, so that members collide often.
fn small_set() -> impl Strategy<Value = Set<i8>> {
    proptest::collection::vec(-16i8..16, 0..24).prop_map(Set::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn union_commutes(a in small_set(), b in small_set()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_associates(a in small_set(), b in small_set(), c in small_set()) {
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn identities(a in small_set()) {
        let empty = Set::empty();
        prop_assert_eq!(a.union(&empty), a.clone());
        prop_assert_eq!(a.inter(&a), a.clone());
        prop_assert_eq!(a.minus(&empty), a.clone());
        prop_assert_eq!(empty.minus(&a), empty.clone());
    }

    #[test]
    fn subset_consistency(a in small_set(), b in small_set()) {
        prop_assert_eq!(a.subset(&b), a.inter(&b) == a);
        prop_assert_eq!(a.ssubset(&b), a.subset(&b) && a != b);
        prop_assert_eq!(a.superset(&b), b.subset(&a));
        prop_assert_eq!(a.ssuperset(&b), b.ssubset(&a));
    }

    #[test]
    fn add_idempotent(mut a in small_set(), x in -16i8..16) {
        a.add_mut([x]);
        let card = a.card();
        a.add_mut([x]);
        prop_assert_eq!(a.card(), card);
    }

    #[test]
    fn sorted_determinism(a in small_set()) {
        let sorted = a.as_sorted_list();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(sorted, a.as_sorted_list());
    }

    #[test]
    fn parse_display(a in small_set()) {
        prop_assert_eq!(a.to_string().parse::<Set<i8>>().ok(), Some(a));
    }
}
