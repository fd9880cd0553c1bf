// Copyright 2025 Cowboy AI, LLC.

//! Element name generation
//!
//! Sets built from a cardinality need fresh, globally unique element names.
//! Name generation is a capability handed to the constructor rather than a
//! process-wide source, so tests can pin it down with a seed or a counter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

use crate::element::Element;

/// Source of fresh element names
pub trait ElementNamer {
    /// Produce the next fresh name
    fn next_name(&mut self) -> Element;
}

impl<N: ElementNamer + ?Sized> ElementNamer for &mut N {
    fn next_name(&mut self) -> Element {
        (**self).next_name()
    }
}

/// Names elements with random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidNamer;

impl UuidNamer {
    /// Create a new UUID namer
    pub fn new() -> Self {
        Self
    }
}

impl ElementNamer for UuidNamer {
    fn next_name(&mut self) -> Element {
        Element::Atom(Uuid::new_v4().to_string())
    }
}

/// Names elements with v4 UUIDs drawn from a seeded generator
///
/// Two namers built from the same seed produce the same names.
#[derive(Debug, Clone)]
pub struct SeededUuidNamer {
    rng: StdRng,
}

impl SeededUuidNamer {
    /// Create a namer from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ElementNamer for SeededUuidNamer {
    fn next_name(&mut self) -> Element {
        let bytes: [u8; 16] = self.rng.gen();
        Element::Atom(Builder::from_random_bytes(bytes).into_uuid().to_string())
    }
}

/// Names elements `prefix0`, `prefix1`, ...
#[derive(Debug, Clone)]
pub struct SequentialNamer {
    prefix: String,
    next: u64,
}

impl SequentialNamer {
    /// Create a namer counting from zero
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for SequentialNamer {
    fn default() -> Self {
        Self::new("x")
    }
}

impl ElementNamer for SequentialNamer {
    fn next_name(&mut self) -> Element {
        let name = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        Element::Atom(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_namer_yields_distinct_uuids() {
        let mut namer = UuidNamer::new();
        let a = namer.next_name();
        let b = namer.next_name();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.key()).is_ok());
    }

    #[test]
    fn test_seeded_namer_is_deterministic() {
        let mut first = SeededUuidNamer::from_seed(42);
        let mut second = SeededUuidNamer::from_seed(42);
        for _ in 0..4 {
            assert_eq!(first.next_name(), second.next_name());
        }

        let parsed = Uuid::parse_str(SeededUuidNamer::from_seed(1).next_name().key()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_sequential_namer_counts() {
        let mut namer = SequentialNamer::new("p");
        assert_eq!(namer.next_name().key(), "p0");
        assert_eq!(namer.next_name().key(), "p1");
        assert_eq!(SequentialNamer::default().next_name().key(), "x0");
    }
}
