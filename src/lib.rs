// Copyright 2025 Cowboy AI, LLC.

//! # CIM FinSet
//!
//! Finite sets and the functions between them, for the Composable Information
//! Machine.
//!
//! This crate provides a small finite-category algebra engine:
//! - **Sets**: ordered, deduplicated collections of elements identified by
//!   their string form
//! - **Maps**: a domain, a codomain and a list of arrows
//! - **Composition**: the unique composite of two composable maps
//! - **Hom-sets**: every function between two sets, eagerly or lazily
//! - **Hom-functor**: the maps between hom-sets induced by pre- and
//!   post-composition
//! - **Injections**: every injective function between two sets
//!
//! ## Example
//!
//! ```
//! use cim_finset::{hom_set, injections, FiniteSet};
//!
//! let x = FiniteSet::explicit(["a", "b"]);
//! let y = FiniteSet::explicit(["x", "y", "z"]);
//!
//! assert_eq!(hom_set(&x, &y).len(), 9);
//! assert_eq!(injections(&x, &y).len(), 6);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Immutability**: every operation returns new values
//! 2. **String identity**: elements are equal iff their string forms are
//! 3. **Explicit dispatch**: the hom-functor takes a tagged [`HomArg`]
//! 4. **Injected naming**: fresh element names come from an [`ElementNamer`]

#![warn(missing_docs)]

mod element;
mod enumeration_policy;
mod errors;
mod finite_set;
mod identifiers;
mod morphism;
pub mod category;

pub use category::{
    compose, hom, hom_arrows, hom_contravariant, hom_covariant, hom_object, hom_set,
    injection_arrows, injections, HomArg, HomIter, HomValue,
};
pub use element::{Arrow, Element};
pub use enumeration_policy::{
    bounded_hom_set, bounded_injections, count_functions, count_injections, EnumerationPolicy,
};
pub use errors::{FinSetError, FinSetResult};
pub use finite_set::FiniteSet;
pub use identifiers::{ElementNamer, SeededUuidNamer, SequentialNamer, UuidNamer};
pub use morphism::FinMap;
