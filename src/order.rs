use std::fmt;

use super::lines::Element;

/// Direction in which the input files are sorted and the output is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending
}

impl Default for Order {
    fn default() -> Self {
        Order::Ascending
    }
}

impl Order {
    /// Returns `true` if `candidate` cannot follow `previous` in a sequence
    /// sorted in this order. Equal keys never violate the order.
    pub fn violates<E: Element>(self, previous: &E, candidate: &E) -> bool {
        match self {
            Order::Ascending => previous.key() > candidate.key(),
            Order::Descending => previous.key() < candidate.key()
        }
    }

    /// Returns `true` if `candidate` must be emitted strictly before `best`.
    /// Equal keys are not preferred, so the first one seen keeps winning.
    pub fn prefers<E: Element>(self, candidate: &E, best: &E) -> bool {
        match self {
            Order::Ascending => candidate.key() < best.key(),
            Order::Descending => candidate.key() > best.key()
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "ascending"),
            Order::Descending => write!(f, "descending")
        }
    }
}

/// Type of the elements stored in the input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Integer,
    String
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::String => write!(f, "string")
        }
    }
}
