// Copyright 2025 Cowboy AI, LLC.

//! The category of finite sets and functions
//!
//! Composition, hom-sets with the hom-functor, and injections. Everything
//! here is a pure function of immutable values.

pub mod composition;
pub mod hom;
pub mod injection;

pub use composition::compose;
pub use hom::{
    hom, hom_arrows, hom_contravariant, hom_covariant, hom_object, hom_set, HomArg, HomIter,
    HomValue,
};
pub use injection::{injection_arrows, injections};
