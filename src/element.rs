// Copyright 2025 Cowboy AI, LLC.

//! Set elements and arrows
//!
//! An element is an opaque value identified by its string form: two elements
//! are the same iff they render to the same string. Elements are either atoms
//! (plain named points) or morphisms, which lets a hom-set be used as a set in
//! its own right.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::morphism::FinMap;

/// A point of a finite set.
///
/// Equality, hashing and ordering only look at the string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ElementRepr", into = "ElementRepr")]
pub enum Element {
    /// A named point
    Atom(String),
    /// A function viewed as a point of a hom-set
    Morphism {
        /// Unambiguous identity key of the map
        key: String,
        /// The map itself
        map: Arc<FinMap>,
    },
}

impl Element {
    /// Create an atom from anything with a string form
    pub fn atom(value: impl fmt::Display) -> Self {
        Element::Atom(value.to_string())
    }

    /// Wrap a map as an element; its string form is an unambiguous
    /// encoding of the map's graph, domain and codomain
    pub fn morphism(map: FinMap) -> Self {
        Element::Morphism {
            key: map.identity_key(),
            map: Arc::new(map),
        }
    }

    /// The string form that determines this element's identity
    pub fn key(&self) -> &str {
        match self {
            Element::Atom(name) => name,
            Element::Morphism { key, .. } => key,
        }
    }

    /// Whether this element is a morphism
    pub fn is_morphism(&self) -> bool {
        matches!(self, Element::Morphism { .. })
    }

    /// The underlying map, if this element is a morphism
    pub fn as_morphism(&self) -> Option<&FinMap> {
        match self {
            Element::Atom(_) => None,
            Element::Morphism { map, .. } => Some(map),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Atom(name) => f.write_str(name),
            Element::Morphism { map, .. } => write!(f, "{map}"),
        }
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Atom(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Atom(s)
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Atom(c.to_string())
    }
}

impl From<usize> for Element {
    fn from(n: usize) -> Self {
        Element::Atom(n.to_string())
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Atom(n.to_string())
    }
}

impl From<FinMap> for Element {
    fn from(map: FinMap) -> Self {
        Element::morphism(map)
    }
}

/// Wire shape: atoms as strings, morphisms as map records
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ElementRepr {
    Atom(String),
    Morphism(FinMap),
}

impl From<ElementRepr> for Element {
    fn from(repr: ElementRepr) -> Self {
        match repr {
            ElementRepr::Atom(name) => Element::Atom(name),
            ElementRepr::Morphism(map) => Element::morphism(map),
        }
    }
}

impl From<Element> for ElementRepr {
    fn from(element: Element) -> Self {
        match element {
            Element::Atom(name) => ElementRepr::Atom(name),
            Element::Morphism { map, .. } => ElementRepr::Morphism((*map).clone()),
        }
    }
}

/// One point of a function's graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrow {
    source: Element,
    target: Element,
}

impl Arrow {
    /// Create an arrow `source ↦ target`
    pub fn new(source: impl Into<Element>, target: impl Into<Element>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The element the arrow leaves
    pub fn source(&self) -> &Element {
        &self.source
    }

    /// The element the arrow points at
    pub fn target(&self) -> &Element {
        &self.target
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}↦{}", self.source, self.target)
    }
}
