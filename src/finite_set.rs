// Copyright 2025 Cowboy AI, LLC.

//! Finite sets
//!
//! A finite set is an ordered sequence of distinct elements. The order is the
//! order in which elements were first seen; it keeps enumeration
//! deterministic but plays no part in equality.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::Element;
use crate::errors::{FinSetError, FinSetResult};
use crate::identifiers::ElementNamer;

/// Immutable finite set of elements, distinct by string form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiniteSet {
    elements: IndexSet<Element>,
}

impl FiniteSet {
    /// The empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from its elements, keeping the first occurrence of each
    /// string form and discarding later duplicates
    pub fn explicit<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a set of `n` freshly named elements
    pub fn natural<N: ElementNamer>(n: i64, mut namer: N) -> FinSetResult<Self> {
        if n < 0 {
            return Err(FinSetError::InvalidCardinality(n));
        }
        let mut elements = IndexSet::new();
        for _ in 0..n {
            let name = namer.next_name();
            if elements.contains(&name) {
                return Err(FinSetError::NameCollision(name.to_string()));
            }
            elements.insert(name);
        }
        Ok(Self { elements })
    }

    /// Cardinality
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter()
    }

    /// Membership by string form
    pub fn contains(&self, element: &Element) -> bool {
        self.elements.contains(element)
    }

    /// Position of an element in the set's order
    pub fn position(&self, element: &Element) -> Option<usize> {
        self.elements.get_index_of(element)
    }

    /// Element at a position in the set's order
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get_index(index)
    }

    /// The distinguished element picked by the enumerators
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// A new set with `element` removed; `self` is untouched
    pub fn without(&self, element: &Element) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|e| *e != element)
                .cloned()
                .collect(),
        }
    }

    /// Whether every element of `self` is in `other`
    pub fn is_subset(&self, other: &FiniteSet) -> bool {
        self.elements.is_subset(&other.elements)
    }
}

impl fmt::Display for FiniteSet {
    /// Canonical rendering: elements sorted by string form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<&Element> = self.elements.iter().collect();
        elements.sort_unstable();
        let rendered: Vec<String> = elements.iter().map(ToString::to_string).collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

impl<E: Into<Element>> FromIterator<E> for FiniteSet {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::explicit(iter)
    }
}

impl<'a> IntoIterator for &'a FiniteSet {
    type Item = &'a Element;
    type IntoIter = indexmap::set::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
