// Copyright 2025 Cowboy AI, LLC.

//! Injective functions between finite sets
//!
//! Same recursion as the hom-set enumerator, except that each choice of image
//! for the distinguished element is removed from the pool available to the
//! rest of the domain. There are `|Y|! / (|Y| - |X|)!` injections.

use tracing::debug;

use super::hom::{combine, singleton_arrows};
use crate::element::Arrow;
use crate::finite_set::FiniteSet;
use crate::morphism::FinMap;

/// Every injective function `X → Y` as a raw arrow sequence
pub fn injection_arrows(domain: &FiniteSet, codomain: &FiniteSet) -> Vec<Vec<Arrow>> {
    if domain.len() > codomain.len() {
        return Vec::new();
    }
    let Some(x) = domain.first() else {
        return vec![Vec::new()];
    };
    if domain.len() == 1 {
        return singleton_arrows(x, codomain);
    }

    let rest = domain.without(x);
    singleton_arrows(x, codomain)
        .into_iter()
        .flat_map(|choice| {
            // each branch gets its own reduced pool
            let pool = choice
                .iter()
                .fold(codomain.clone(), |pool, arrow| pool.without(arrow.target()));
            combine(vec![choice], injection_arrows(&rest, &pool))
        })
        .collect()
}

/// Every injective function `X → Y` as a map record
pub fn injections(domain: &FiniteSet, codomain: &FiniteSet) -> Vec<FinMap> {
    debug!(
        domain = domain.len(),
        codomain = codomain.len(),
        "enumerating injections"
    );
    injection_arrows(domain, codomain)
        .into_iter()
        .map(|mapping| FinMap::explicit(domain.clone(), mapping, codomain.clone()))
        .collect()
}
