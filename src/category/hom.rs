// Copyright 2025 Cowboy AI, LLC.

//! Hom-sets and the hom-functor
//!
//! `Hom(X, Y)` is the set of all functions `X → Y`; there are `|Y|^|X|` of
//! them. As a functor, `Hom` sends a map `f : A → B` in its second slot to
//! post-composition `Hom(X, A) → Hom(X, B)`, and in its first slot to
//! pre-composition `Hom(B, Y) → Hom(A, Y)`.
//!
//! Base cases: there is exactly one function out of the empty set (the empty
//! mapping), and none from a non-empty set into the empty set.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::composition::compose;
use crate::element::{Arrow, Element};
use crate::errors::{FinSetError, FinSetResult};
use crate::finite_set::FiniteSet;
use crate::morphism::FinMap;

/// Cross-concatenate two families of partial functions, like a matrix
/// product: every left sequence followed by every right sequence, left
/// varying slowest. An empty family leaves the other one unchanged.
pub(crate) fn combine(left: Vec<Vec<Arrow>>, right: Vec<Vec<Arrow>>) -> Vec<Vec<Arrow>> {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }

    let mut combination = Vec::with_capacity(left.len() * right.len());
    for l in &left {
        for r in &right {
            let mut sequence = Vec::with_capacity(l.len() + r.len());
            sequence.extend(l.iter().cloned());
            sequence.extend(r.iter().cloned());
            combination.push(sequence);
        }
    }
    combination
}

/// One-arrow functions out of `{x}`, in the codomain's order
pub(crate) fn singleton_arrows(x: &Element, codomain: &FiniteSet) -> Vec<Vec<Arrow>> {
    codomain
        .iter()
        .map(|y| vec![Arrow::new(x.clone(), y.clone())])
        .collect()
}

/// Every function `X → Y` as a raw arrow sequence
pub fn hom_arrows(domain: &FiniteSet, codomain: &FiniteSet) -> Vec<Vec<Arrow>> {
    let Some(x) = domain.first() else {
        return vec![Vec::new()];
    };
    if codomain.is_empty() {
        return Vec::new();
    }
    if domain.len() == 1 {
        return singleton_arrows(x, codomain);
    }

    combine(
        singleton_arrows(x, codomain),
        hom_arrows(&domain.without(x), codomain),
    )
}

/// Every function `X → Y` as a map record
pub fn hom_set(domain: &FiniteSet, codomain: &FiniteSet) -> Vec<FinMap> {
    debug!(
        domain = domain.len(),
        codomain = codomain.len(),
        "enumerating hom-set"
    );
    hom_arrows(domain, codomain)
        .into_iter()
        .map(|mapping| FinMap::explicit(domain.clone(), mapping, codomain.clone()))
        .collect()
}

/// `Hom(X, Y)` as a finite set whose points are morphisms
pub fn hom_object(domain: &FiniteSet, codomain: &FiniteSet) -> FiniteSet {
    FiniteSet::explicit(hom_set(domain, codomain).into_iter().map(Element::morphism))
}

/// Lazy enumeration of `Hom(X, Y)`
///
/// Yields the same maps in the same order as [`hom_set`], one at a time.
#[derive(Debug, Clone)]
pub struct HomIter {
    domain: FiniteSet,
    codomain: FiniteSet,
    targets: Vec<Element>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl HomIter {
    /// Start enumerating functions `domain → codomain`
    pub fn new(domain: FiniteSet, codomain: FiniteSet) -> Self {
        let exhausted = !domain.is_empty() && codomain.is_empty();
        Self {
            digits: vec![0; domain.len()],
            targets: codomain.iter().cloned().collect(),
            domain,
            codomain,
            exhausted,
        }
    }

    fn current(&self) -> FinMap {
        let mapping = self
            .domain
            .iter()
            .zip(&self.digits)
            .map(|(x, &digit)| Arrow::new(x.clone(), self.targets[digit].clone()))
            .collect();
        FinMap::explicit(self.domain.clone(), mapping, self.codomain.clone())
    }

    /// Advance the odometer, last domain element fastest
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.targets.len() {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for HomIter {
    type Item = FinMap;

    fn next(&mut self) -> Option<FinMap> {
        if self.exhausted {
            return None;
        }
        let map = self.current();
        self.advance();
        Some(map)
    }
}

/// An argument of the hom-functor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomArg {
    /// An object
    Set(FiniteSet),
    /// A morphism
    Map(FinMap),
}

impl HomArg {
    /// Whether the argument is an object
    pub fn is_set(&self) -> bool {
        matches!(self, HomArg::Set(_))
    }

    /// Whether the argument is a morphism
    pub fn is_map(&self) -> bool {
        matches!(self, HomArg::Map(_))
    }
}

impl From<FiniteSet> for HomArg {
    fn from(set: FiniteSet) -> Self {
        HomArg::Set(set)
    }
}

impl From<FinMap> for HomArg {
    fn from(map: FinMap) -> Self {
        HomArg::Map(map)
    }
}

/// The value of the hom-functor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomValue {
    /// `Hom(X, Y)` for two objects
    Object(FiniteSet),
    /// The induced map between hom-sets
    Morphism(FinMap),
}

impl HomValue {
    /// The hom-set, if both arguments were objects
    pub fn into_object(self) -> Option<FiniteSet> {
        match self {
            HomValue::Object(set) => Some(set),
            HomValue::Morphism(_) => None,
        }
    }

    /// The induced map, if one argument was a morphism
    pub fn into_morphism(self) -> Option<FinMap> {
        match self {
            HomValue::Object(_) => None,
            HomValue::Morphism(map) => Some(map),
        }
    }
}

/// The hom-functor on a pair of objects or an object and a morphism
pub fn hom(left: impl Into<HomArg>, right: impl Into<HomArg>) -> FinSetResult<HomValue> {
    match (left.into(), right.into()) {
        (HomArg::Set(x), HomArg::Set(y)) => Ok(HomValue::Object(hom_object(&x, &y))),
        (HomArg::Set(x), HomArg::Map(f)) => hom_covariant(&x, &f).map(HomValue::Morphism),
        (HomArg::Map(f), HomArg::Set(y)) => hom_contravariant(&f, &y).map(HomValue::Morphism),
        (HomArg::Map(_), HomArg::Map(_)) => Err(FinSetError::unsupported(
            "cannot compute the hom of two maps",
        )),
    }
}

/// `Hom(X, f) : Hom(X, A) → Hom(X, B)` for `f : A → B`, sending `g` to
/// `g` followed by `f`
pub fn hom_covariant(x: &FiniteSet, f: &FinMap) -> FinSetResult<FinMap> {
    let hom_xa = hom_set(x, f.domain());
    trace!(size = hom_xa.len(), "post-composing hom-set");
    let mapping = hom_xa
        .iter()
        .map(|g| -> FinSetResult<Arrow> {
            Ok(Arrow::new(
                Element::morphism(g.clone()),
                Element::morphism(compose(g, f)?),
            ))
        })
        .collect::<FinSetResult<Vec<_>>>()?;

    Ok(FinMap::explicit(
        FiniteSet::explicit(hom_xa.into_iter().map(Element::morphism)),
        mapping,
        hom_object(x, f.codomain()),
    ))
}

/// `Hom(f, Y) : Hom(B, Y) → Hom(A, Y)` for `f : A → B`, sending `h` to
/// `f` followed by `h`
pub fn hom_contravariant(f: &FinMap, y: &FiniteSet) -> FinSetResult<FinMap> {
    let hom_by = hom_set(f.codomain(), y);
    trace!(size = hom_by.len(), "pre-composing hom-set");
    let mapping = hom_by
        .iter()
        .map(|h| -> FinSetResult<Arrow> {
            Ok(Arrow::new(
                Element::morphism(h.clone()),
                Element::morphism(compose(f, h)?),
            ))
        })
        .collect::<FinSetResult<Vec<_>>>()?;

    Ok(FinMap::explicit(
        FiniteSet::explicit(hom_by.into_iter().map(Element::morphism)),
        mapping,
        hom_object(f.domain(), y),
    ))
}
