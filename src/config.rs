//! Evaluation options.
//!
//! Options passed through model evaluation and goodness-of-fit calculations.
//! They control what happens when an input falls outside the numeric domain
//! of a formula, e.g. a zero standard error or a zero smoothing factor.

/// How numeric-domain problems are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Fail with [`GrbError::NumericDomain`](crate::error::GrbError::NumericDomain)
    Strict,

    /// Log a warning and carry on with IEEE `inf`/`NaN` results. Useful for
    /// exploratory work where an optimizer is expected to walk away from the
    /// bad region on its own.
    Permissive,
}

impl Default for DomainPolicy {
    fn default() -> Self {
        DomainPolicy::Strict
    }
}

/// Options forwarded unchanged to model functions and evaluators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvalOptions {
    /// Numeric-domain policy. Default: Strict
    pub policy: DomainPolicy,
}

impl EvalOptions {
    /// Options with the [`DomainPolicy::Permissive`] policy
    pub fn permissive() -> Self {
        Self {
            policy: DomainPolicy::Permissive,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.policy == DomainPolicy::Strict
    }
}
