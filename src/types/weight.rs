//! Edge costs for weighted search.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{GraphError, GraphResult, Label};

/// Anything an edge label can be read as when searching by cost.
pub trait Cost {
    /// The non-negative cost of traversing an edge with this label.
    fn cost(&self) -> f64;
}

/// A finite, non-negative edge cost usable as an edge label.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Reject NaN, infinite and negative values.
    pub fn new(value: f64) -> GraphResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(GraphError::InvalidCost(value));
        }
        // Fold -0.0 into 0.0 so equality and hashing agree.
        Ok(Self(value + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Weight {}

impl Hash for Weight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl std::str::FromStr for Weight {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| GraphError::InvalidArgument(format!("not a number: {}", s)))?;
        Self::new(value)
    }
}

impl Label for Weight {}

impl Cost for Weight {
    fn cost(&self) -> f64 {
        self.0
    }
}

macro_rules! impl_integer_cost {
    ($($t:ty),*) => {
        $(impl Cost for $t {
            fn cost(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

impl_integer_cost!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_costs() {
        assert!(Weight::new(f64::NAN).is_err());
        assert!(Weight::new(f64::INFINITY).is_err());
        assert!(Weight::new(-1.0).is_err());
        assert_eq!(Weight::new(-0.0).unwrap(), Weight::new(0.0).unwrap());
    }

    #[test]
    fn parses_and_renders_three_decimals() {
        let w: Weight = "2.5".parse().unwrap();
        assert_eq!(w.to_string(), "2.500");
        assert!("abc".parse::<Weight>().is_err());
    }
}
