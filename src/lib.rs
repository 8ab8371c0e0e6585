//! # Finite sets
//!
//! A [`Set`] is a hash-backed collection of distinct values supporting the usual set algebra:
//! union, intersection, difference, subset and superset tests, and equality. Each set carries an
//! ordering strategy (see [`Order`]) used only when its members are enumerated in sorted order,
//! which is also how sets are displayed.
//!
//! ```
//! let fighters = fset::set!["ryu", "ken", "balrog", "cammy"];
//! assert_eq!(fighters.to_string(), "Set<&str>{balrog, cammy, ken, ryu}");
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod order;
pub mod prelude;
pub mod set;
pub mod utils;

mod tests;

pub use order::Order;
pub use set::Set;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// Builds a [`Set`] with [natural ordering](order::Natural) from a list of members.
///
/// Repeated members collapse silently.
///
/// ```
/// let set = fset::set![3, 1, 2, 3];
/// assert_eq!(set.card(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => (
        $crate::Set::empty()
    );
    ($($x: expr), +$(,)*) => (
        $crate::Set::new([$($x,)+])
    );
}
