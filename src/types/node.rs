//! Node: identity wrapper around a node label.

use std::borrow::Borrow;
use std::fmt;

use super::Label;

/// A graph node. Two nodes are equal iff their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node<N> {
    label: N,
}

impl<N: Label> Node<N> {
    pub(crate) fn new(label: N) -> Self {
        Self { label }
    }

    /// The label this node was created with.
    pub fn label(&self) -> &N {
        &self.label
    }
}

// Lets the node index be queried with a bare `&N`.
impl<N> Borrow<N> for Node<N> {
    fn borrow(&self) -> &N {
        &self.label
    }
}

impl<N: fmt::Display> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
