//! The contract every node and edge label satisfies.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A caller-supplied value identifying a node or an edge.
///
/// Labels are compared, hashed, ordered (for deterministic listings) and
/// rendered (for `child(edge)` strings). `is_absent` is the hook for values
/// that stand for "no label at all"; those are never stored in a graph.
pub trait Label: Clone + Ord + Hash + Display + Debug {
    /// Whether this value carries no usable label.
    fn is_absent(&self) -> bool {
        false
    }
}

impl Label for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Label for &str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Label for char {}

macro_rules! impl_integer_label {
    ($($t:ty),*) => {
        $(impl Label for $t {})*
    };
}

impl_integer_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
