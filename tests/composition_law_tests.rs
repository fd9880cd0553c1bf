// Copyright 2025 Cowboy AI, LLC.

use cim_finset::{compose, Arrow, FinMap, FinSetError, FiniteSet, SequentialNamer};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn natural(prefix: &str, n: usize) -> FiniteSet {
    FiniteSet::natural(n as i64, SequentialNamer::new(prefix)).unwrap()
}

fn random(domain: &FiniteSet, codomain: &FiniteSet, rng: &mut StdRng) -> FinMap {
    FinMap::random(domain.clone(), codomain.clone(), rng).unwrap()
}

proptest! {
    #[test]
    fn composition_is_associative(a in 0usize..5, b in 1usize..5, c in 1usize..5, d in 1usize..5,
                                  seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (sa, sb, sc, sd) = (natural("a", a), natural("b", b), natural("c", c), natural("d", d));
        let f = random(&sa, &sb, &mut rng);
        let g = random(&sb, &sc, &mut rng);
        let h = random(&sc, &sd, &mut rng);

        let left = compose(&compose(&f, &g).unwrap(), &h).unwrap();
        let right = compose(&f, &compose(&g, &h).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identities_are_units(a in 0usize..6, b in 1usize..6, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (sa, sb) = (natural("a", a), natural("b", b));
        let f = random(&sa, &sb, &mut rng);

        prop_assert_eq!(compose(&FinMap::identity(sa), &f).unwrap(), f.clone());
        prop_assert_eq!(compose(&f, &FinMap::identity(sb)).unwrap(), f);
    }

    #[test]
    fn composites_of_functions_are_functions(a in 0usize..6, b in 1usize..6, c in 1usize..6,
                                              seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (sa, sb, sc) = (natural("a", a), natural("b", b), natural("c", c));
        let gf = compose(&random(&sa, &sb, &mut rng), &random(&sb, &sc, &mut rng)).unwrap();
        prop_assert!(gf.is_well_formed());
        prop_assert_eq!(gf.domain(), &sa);
        prop_assert_eq!(gf.codomain(), &sc);
    }
}

#[test]
fn associativity_ignores_arrow_order() {
    let set = |xs: &[&str]| FiniteSet::explicit(xs.iter().copied());
    let f = FinMap::explicit(
        set(&["a", "b"]),
        vec![Arrow::new("b", "x"), Arrow::new("a", "y")],
        set(&["x", "y"]),
    );
    let g = FinMap::explicit(
        set(&["y", "x"]),
        vec![Arrow::new("x", "1"), Arrow::new("y", "2")],
        set(&["1", "2"]),
    );
    let h = FinMap::explicit(
        set(&["1", "2"]),
        vec![Arrow::new("2", "q"), Arrow::new("1", "p")],
        set(&["p", "q"]),
    );

    let left = compose(&compose(&f, &g).unwrap(), &h).unwrap();
    let right = compose(&f, &compose(&g, &h).unwrap()).unwrap();
    assert_eq!(left, right);
    assert_eq!(left.to_string(), "{a↦q, b↦p} : {a, b} → {p, q}");
}

#[test]
fn mismatched_maps_do_not_compose() {
    let f = FinMap::identity(FiniteSet::explicit(["a", "b"]));
    let g = FinMap::identity(FiniteSet::explicit(["a"]));
    let err = compose(&f, &g).unwrap_err();
    assert!(err.is_composition_error());
    assert!(matches!(err, FinSetError::Composability { .. }));
}
