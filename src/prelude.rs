//! Crate prelude.

// The actual prelude.
pub use crate::{
    order::{ByKey, Canonical, LessThan, Natural, Order},
    set::{Set, SetError},
};

// Convenient imports within the crate.
pub(crate) use crate::{utils::type_tag, SmallVec};
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::HashSet,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::Hash,
    str::FromStr,
};
