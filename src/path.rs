//! Immutable, cost-accumulating paths.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

/// One hop of a path: where it left from, where it arrived, the edge label
/// it followed (`()` when only the cost matters), and what it cost.
#[derive(Debug, Clone, Serialize)]
pub struct Segment<N, E = ()> {
    start: N,
    end: N,
    edge: E,
    cost: f64,
}

impl<N, E> Segment<N, E> {
    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    /// The edge label followed by this hop.
    pub fn edge(&self) -> &E {
        &self.edge
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for Segment<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.edge == other.edge
            && self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl<N: fmt::Display, E> fmt::Display for Segment<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {} ({:.3})]", self.start, self.end, self.cost)
    }
}

/// A walk from a fixed start node with a cached total cost.
///
/// Paths are values: `extend` returns a new path and leaves the receiver
/// untouched, so many partial paths sharing a prefix can live side by side.
#[derive(Debug, Clone, Serialize)]
pub struct Path<N, E = ()> {
    start: N,
    segments: Vec<Segment<N, E>>,
    cost: f64,
}

impl<N: Clone, E: Clone> Path<N, E> {
    /// A path with no segments, starting and ending at `start`.
    pub fn new(start: N) -> Self {
        Self {
            start,
            segments: Vec::new(),
            cost: 0.0,
        }
    }

    /// Return a copy of this path with one more hop to `end` over `edge`.
    ///
    /// The cost must be finite and non-negative, and the new total must
    /// stay finite.
    pub fn extend_via(&self, end: N, edge: E, cost: f64) -> GraphResult<Self> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost(cost));
        }
        let total = self.cost + cost;
        if !total.is_finite() {
            return Err(GraphError::InvalidCost(total));
        }

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(Segment {
            start: self.end().clone(),
            end,
            edge,
            cost,
        });
        Ok(Self {
            start: self.start.clone(),
            segments,
            cost: total,
        })
    }
}

impl<N: Clone> Path<N> {
    /// Return a copy of this path with one more hop to `end`.
    pub fn extend(&self, end: N, cost: f64) -> GraphResult<Self> {
        self.extend_via(end, (), cost)
    }
}

impl<N, E> Path<N, E> {
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Destination of the last segment, or the start of an empty path.
    pub fn end(&self) -> &N {
        self.segments.last().map_or(&self.start, |s| &s.end)
    }

    /// Total cost of all segments.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of segments (hops).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in order from start to end.
    pub fn segments(&self) -> std::slice::Iter<'_, Segment<N, E>> {
        self.segments.iter()
    }

    /// Total order by accumulated cost.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

impl<'a, N, E> IntoIterator for &'a Path<N, E> {
    type Item = &'a Segment<N, E>;
    type IntoIter = std::slice::Iter<'a, Segment<N, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for Path<N, E> {
    fn eq(&self, other: &Self) -> bool {
        if self.segments.len() != other.segments.len() {
            return false;
        }
        if self.segments.is_empty() {
            return self.start == other.start;
        }
        self.segments == other.segments
    }
}

impl<N: fmt::Display, E> fmt::Display for Path<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for segment in &self.segments {
            write!(f, " =({:.3})=> {}", segment.cost, segment.end)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_leaves_original_untouched() {
        let base: Path<&str> = Path::new("a");
        let longer = base.extend("b", 2.0).unwrap();
        assert!(base.is_empty());
        assert_eq!(base.end(), &"a");
        assert_eq!(longer.end(), &"b");
        assert_eq!(longer.cost(), 2.0);
    }

    #[test]
    fn rejects_unusable_costs() {
        let base: Path<&str> = Path::new("a");
        assert!(matches!(base.extend("b", f64::NAN), Err(GraphError::InvalidCost(_))));
        assert!(base.extend("b", f64::INFINITY).is_err());
        assert!(base.extend("b", -0.5).is_err());
        let huge = base.extend("b", f64::MAX).unwrap();
        assert!(huge.extend("c", f64::MAX).is_err());
    }

    #[test]
    fn empty_paths_compare_by_start() {
        let a: Path<&str> = Path::new("a");
        assert_eq!(a, Path::new("a"));
        assert_ne!(a, Path::new("b"));
    }

    #[test]
    fn display_renders_each_hop() {
        let base: Path<&str> = Path::new("a");
        let p = base.extend("b", 1.0).unwrap().extend("c", 0.5).unwrap();
        assert_eq!(p.to_string(), "a =(1.000)=> b =(0.500)=> c");
    }
}
