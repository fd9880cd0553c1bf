// Copyright 2025 Cowboy AI, LLC.

//! Maps between finite sets
//!
//! A map is a domain, a codomain and a list of arrows. Constructors take the
//! arrows as given; whether they actually describe a function is checked on
//! demand with [`FinMap::is_well_formed`].

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::element::{Arrow, Element};
use crate::errors::{FinSetError, FinSetResult};
use crate::finite_set::FiniteSet;

/// A morphism `domain → codomain` given by its graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinMap {
    domain: FiniteSet,
    mapping: Vec<Arrow>,
    codomain: FiniteSet,
}

impl FinMap {
    /// Wrap the three components verbatim
    pub fn explicit(domain: FiniteSet, mapping: Vec<Arrow>, codomain: FiniteSet) -> Self {
        Self {
            domain,
            mapping,
            codomain,
        }
    }

    /// Send every domain element to a codomain element drawn uniformly with
    /// replacement
    pub fn random<R: Rng + ?Sized>(
        domain: FiniteSet,
        codomain: FiniteSet,
        rng: &mut R,
    ) -> FinSetResult<Self> {
        let targets: Vec<&Element> = codomain.iter().collect();
        let mut mapping = Vec::with_capacity(domain.len());
        for source in domain.iter() {
            let target = targets.choose(rng).ok_or(FinSetError::EmptyCodomain {
                domain_size: domain.len(),
            })?;
            mapping.push(Arrow::new(source.clone(), (*target).clone()));
        }
        Ok(Self::explicit(domain, mapping, codomain))
    }

    /// The identity map on a set
    pub fn identity(set: FiniteSet) -> Self {
        let mapping = set.iter().map(|x| Arrow::new(x.clone(), x.clone())).collect();
        Self::explicit(set.clone(), mapping, set)
    }

    /// Source set
    pub fn domain(&self) -> &FiniteSet {
        &self.domain
    }

    /// Target set
    pub fn codomain(&self) -> &FiniteSet {
        &self.codomain
    }

    /// Arrows in construction order
    pub fn mapping(&self) -> &[Arrow] {
        &self.mapping
    }

    /// All arrows leaving `element`
    pub fn arrows_from<'a>(&'a self, element: &'a Element) -> impl Iterator<Item = &'a Arrow> + 'a {
        self.mapping.iter().filter(move |arrow| arrow.source() == element)
    }

    /// The image of `element`, if exactly one arrow leaves it
    pub fn image_of(&self, element: &Element) -> Option<&Element> {
        let mut arrows = self.mapping.iter().filter(|arrow| arrow.source() == element);
        match (arrows.next(), arrows.next()) {
            (Some(arrow), None) => Some(arrow.target()),
            _ => None,
        }
    }

    /// Exactly one arrow per domain element, sources in the domain and
    /// targets in the codomain
    pub fn is_well_formed(&self) -> bool {
        if self.mapping.len() != self.domain.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.mapping.len());
        self.mapping.iter().all(|arrow| {
            self.domain.contains(arrow.source())
                && self.codomain.contains(arrow.target())
                && seen.insert(arrow.source())
        })
    }

    /// Distinct sources never share a target
    pub fn is_injective(&self) -> bool {
        let mut targets = HashSet::with_capacity(self.mapping.len());
        self.mapping.iter().all(|arrow| targets.insert(arrow.target()))
    }

    /// Every codomain element is hit
    pub fn is_surjective(&self) -> bool {
        let targets: HashSet<&Element> = self.mapping.iter().map(Arrow::target).collect();
        self.codomain.iter().all(|y| targets.contains(y))
    }

    fn graph_keys(&self) -> Vec<(&str, &str)> {
        let mut keys: Vec<(&str, &str)> = self
            .mapping
            .iter()
            .map(|arrow| (arrow.source().key(), arrow.target().key()))
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Identity of this map as a set element.
    ///
    /// Every element key is JSON-quoted, so separators inside element names
    /// cannot make two different maps collide.
    pub(crate) fn identity_key(&self) -> String {
        let arrows: Vec<String> = self
            .graph_keys()
            .into_iter()
            .map(|(source, target)| format!("{}↦{}", quote(source), quote(target)))
            .collect();
        format!(
            "{{{}}}:{}→{}",
            arrows.join(","),
            quoted_set(&self.domain),
            quoted_set(&self.codomain)
        )
    }
}

fn quote(key: &str) -> String {
    serde_json::Value::String(key.to_owned()).to_string()
}

fn quoted_set(set: &FiniteSet) -> String {
    let mut keys: Vec<String> = set.iter().map(|e| quote(e.key())).collect();
    keys.sort_unstable();
    format!("{{{}}}", keys.join(","))
}

impl PartialEq for FinMap {
    /// Same domain, same codomain, same arrows in any order
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.codomain == other.codomain
            && self.graph_keys() == other.graph_keys()
    }
}

impl Eq for FinMap {}

impl fmt::Display for FinMap {
    /// Canonical rendering `{a↦x, b↦y} : {a, b} → {x, y}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrows: Vec<String> = self
            .graph_keys()
            .into_iter()
            .map(|(source, target)| format!("{source}↦{target}"))
            .collect();
        write!(
            f,
            "{{{}}} : {} → {}",
            arrows.join(", "),
            self.domain,
            self.codomain
        )
    }
}
