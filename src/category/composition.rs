// Copyright 2025 Cowboy AI, LLC.

//! Composition of maps between finite sets

use tracing::warn;

use crate::element::Arrow;
use crate::errors::{FinSetError, FinSetResult};
use crate::morphism::FinMap;

/// Given composable maps `f : A → B` and `g : B → C`, produce the unique
/// map `A → C` that follows `f` and then `g`.
///
/// The result keeps `f`'s arrow order. Every intermediate element must have
/// exactly one image under `g`.
pub fn compose(f: &FinMap, g: &FinMap) -> FinSetResult<FinMap> {
    if f.codomain() != g.domain() {
        warn!(
            codomain = %f.codomain(),
            domain = %g.domain(),
            "refusing to compose non-composable maps"
        );
        return Err(FinSetError::Composability {
            codomain: f.codomain().to_string(),
            domain: g.domain().to_string(),
        });
    }

    let mapping = f
        .mapping()
        .iter()
        .map(|f_arrow| {
            let middle = f_arrow.target();
            let mut candidates = g.arrows_from(middle);
            match (candidates.next(), candidates.next()) {
                (Some(g_arrow), None) => {
                    Ok(Arrow::new(f_arrow.source().clone(), g_arrow.target().clone()))
                }
                (first, second) => {
                    let found = usize::from(first.is_some())
                        + usize::from(second.is_some())
                        + candidates.count();
                    warn!(element = %middle, candidates = found, "malformed map in composition");
                    Err(FinSetError::MalformedMap {
                        element: middle.to_string(),
                        candidates: found,
                    })
                }
            }
        })
        .collect::<FinSetResult<Vec<_>>>()?;

    Ok(FinMap::explicit(
        f.domain().clone(),
        mapping,
        g.codomain().clone(),
    ))
}
