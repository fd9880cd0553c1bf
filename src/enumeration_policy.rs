// Copyright 2025 Cowboy AI, LLC.

//! Size limits for hom-set and injection enumeration
//!
//! Enumerations grow as `|Y|^|X|` and `|Y|!/(|Y|-|X|)!`. A policy computes
//! the exact count up front and refuses before any work is done.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::category::{hom_set, injections};
use crate::errors::{FinSetError, FinSetResult};
use crate::finite_set::FiniteSet;
use crate::morphism::FinMap;

/// Policy configuration for bounded enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationPolicy {
    /// Refuse enumerations producing more than this many functions
    pub max_functions: Option<u64>,
}

impl Default for EnumerationPolicy {
    fn default() -> Self {
        Self {
            max_functions: Some(1_000_000),
        }
    }
}

impl EnumerationPolicy {
    /// A policy that never refuses
    pub fn unbounded() -> Self {
        Self { max_functions: None }
    }

    /// A policy with the given ceiling
    pub fn with_limit(max_functions: u64) -> Self {
        Self {
            max_functions: Some(max_functions),
        }
    }

    fn check(&self, count: u128) -> FinSetResult<()> {
        match self.max_functions {
            Some(limit) if count > u128::from(limit) => {
                warn!(count = %count, limit, "enumeration refused by policy");
                Err(FinSetError::EnumerationTooLarge { count, limit })
            }
            _ => {
                debug!(count = %count, "enumeration within policy");
                Ok(())
            }
        }
    }

    /// Fail if `Hom(X, Y)` is larger than the policy allows
    pub fn check_hom(&self, domain: &FiniteSet, codomain: &FiniteSet) -> FinSetResult<()> {
        self.check(count_functions(domain, codomain))
    }

    /// Fail if the injections `X → Y` are more than the policy allows
    pub fn check_injections(&self, domain: &FiniteSet, codomain: &FiniteSet) -> FinSetResult<()> {
        self.check(count_injections(domain, codomain))
    }
}

/// `|Y|^|X|`, saturating at `u128::MAX`
pub fn count_functions(domain: &FiniteSet, codomain: &FiniteSet) -> u128 {
    let base = codomain.len() as u128;
    (0..domain.len()).fold(1u128, |acc, _| acc.saturating_mul(base))
}

/// `|Y|! / (|Y| - |X|)!`, zero when `|X| > |Y|`, saturating at `u128::MAX`
pub fn count_injections(domain: &FiniteSet, codomain: &FiniteSet) -> u128 {
    if domain.len() > codomain.len() {
        return 0;
    }
    let top = codomain.len() as u128;
    (0..domain.len() as u128).fold(1u128, |acc, i| acc.saturating_mul(top - i))
}

/// [`hom_set`] guarded by a policy
pub fn bounded_hom_set(
    domain: &FiniteSet,
    codomain: &FiniteSet,
    policy: &EnumerationPolicy,
) -> FinSetResult<Vec<FinMap>> {
    policy.check_hom(domain, codomain)?;
    Ok(hom_set(domain, codomain))
}

/// [`injections`] guarded by a policy
pub fn bounded_injections(
    domain: &FiniteSet,
    codomain: &FiniteSet,
    policy: &EnumerationPolicy,
) -> FinSetResult<Vec<FinMap>> {
    policy.check_injections(domain, codomain)?;
    Ok(injections(domain, codomain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::SequentialNamer;
    use test_case::test_case;

    fn natural(n: i64) -> FiniteSet {
        FiniteSet::natural(n, SequentialNamer::default()).unwrap()
    }

    #[test_case(0, 0 => 1 ; "empty to empty")]
    #[test_case(0, 3 => 1 ; "empty domain")]
    #[test_case(2, 0 => 0 ; "empty codomain")]
    #[test_case(2, 2 => 4 ; "two to two")]
    #[test_case(3, 4 => 64 ; "three to four")]
    fn test_count_functions(x: i64, y: i64) -> u128 {
        count_functions(&natural(x), &natural(y))
    }

    #[test_case(2, 3 => 6 ; "two into three")]
    #[test_case(3, 2 => 0 ; "pigeonhole")]
    #[test_case(0, 2 => 1 ; "empty domain")]
    #[test_case(4, 4 => 24 ; "permutations")]
    fn test_count_injections(x: i64, y: i64) -> u128 {
        count_injections(&natural(x), &natural(y))
    }

    #[test]
    fn test_counts_saturate() {
        assert_eq!(count_functions(&natural(200), &natural(10)), u128::MAX);
    }

    #[test]
    fn test_policy_refuses_before_enumerating() {
        let policy = EnumerationPolicy::with_limit(10);
        let err = bounded_hom_set(&natural(4), &natural(2), &policy).unwrap_err();
        assert_eq!(err, FinSetError::EnumerationTooLarge { count: 16, limit: 10 });

        assert_eq!(bounded_hom_set(&natural(3), &natural(2), &policy).unwrap().len(), 8);
        assert_eq!(bounded_injections(&natural(2), &natural(3), &policy).unwrap().len(), 6);
        assert!(bounded_injections(&natural(3), &natural(4), &policy).is_err());
    }

    #[test]
    fn test_policy_defaults_and_serde() {
        assert_eq!(EnumerationPolicy::default().max_functions, Some(1_000_000));
        assert!(EnumerationPolicy::unbounded()
            .check_hom(&natural(30), &natural(30))
            .is_ok());

        let policy: EnumerationPolicy =
            serde_json::from_str(r#"{"max_functions": 42}"#).unwrap();
        assert_eq!(policy, EnumerationPolicy::with_limit(42));
    }
}
