//! # Goodness of fit
//!
//! Chi-squared scoring of a proposed solution and conversion of a reduced
//! chi-squared into a tail probability.
//!
//! ```text
//! chi^2     = sum_i (y_i - f(x_i))^2 / sigma_i^2
//! chi^2_nu  = chi^2 / (# data points - # free params)
//! ```

use crate::config::{DomainPolicy, EvalOptions};
use crate::error::{GrbError, Result};
use crate::model::Model;
use ndarray::Array1;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Chi-squared of a fit together with its reduced value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquare {
    /// Chi-square value
    pub chisq: f64,
    /// Reduced chi-square (chisq / nfree). Not finite when `nfree <= 0`.
    pub reduced: f64,
    /// Degrees of freedom (n_points - n_parameters), may be zero or negative
    pub nfree: isize,
}

impl ChiSquare {
    /// Tail probability of the reduced chi-square, see [`probability`]
    pub fn probability(&self) -> Result<f64> {
        probability(self.reduced, self.nfree as f64)
    }
}

/// Chi-squared of the model with parameters `p` against data `(x, y, sigma)`.
///
/// Zero, negative or non-finite `sigma` values are rejected under
/// [`DomainPolicy::Strict`]; under [`DomainPolicy::Permissive`] a warning is
/// logged and the resulting `inf`/`NaN` is returned.
///
/// # Examples
///
/// ```
/// use grblc::config::EvalOptions;
/// use grblc::models::simple_bpl_model;
/// use grblc::statistics::chisq;
/// use ndarray::array;
///
/// let model = simple_bpl_model();
/// let p = [5.0, -12.0, 1.0, 2.0];
/// let x = array![4.0, 5.0, 6.0];
/// let y = model.eval(&x, &p).unwrap();
/// let sigma = array![0.1, 0.1, 0.1];
///
/// let chi2 = chisq(&x, &y, &sigma, &model, &p, &EvalOptions::default()).unwrap();
/// assert_eq!(chi2, 0.0);
/// ```
pub fn chisq(
    x: &Array1<f64>,
    y: &Array1<f64>,
    sigma: &Array1<f64>,
    model: &Model,
    p: &[f64],
    options: &EvalOptions,
) -> Result<f64> {
    check_lengths(x, y, sigma)?;
    check_sigma(sigma, options)?;

    let predicted = model.eval_with(x, p, options)?;
    let r = y - &predicted;

    Ok(r.iter()
        .zip(sigma.iter())
        .map(|(r, s)| (r / s).powi(2))
        .sum())
}

/// Chi-squared and reduced chi-squared.
///
/// The number of free parameters is `p.len()`. When there are no more data
/// points than parameters the reduced value is not finite; this is logged
/// but is not an error, so callers must check [`f64::is_finite`].
pub fn chisq_reduced(
    x: &Array1<f64>,
    y: &Array1<f64>,
    sigma: &Array1<f64>,
    model: &Model,
    p: &[f64],
    options: &EvalOptions,
) -> Result<ChiSquare> {
    let chisq = chisq(x, y, sigma, model, p, options)?;
    let nfree = x.len() as isize - p.len() as isize;

    let reduced = if nfree > 0 {
        chisq / nfree as f64
    } else {
        log::warn!(
            "{} data points for {} free parameters; reduced chi-square is undefined",
            x.len(),
            p.len()
        );
        chisq / 0.0
    };

    Ok(ChiSquare {
        chisq,
        reduced,
        nfree,
    })
}

/// Probability of obtaining a reduced chi-square at least as large as
/// `reduced_chisq` with `nu` degrees of freedom.
///
/// This is the survival function of the chi-squared distribution evaluated at
/// `reduced_chisq * nu`, i.e. the integral of
///
/// ```text
/// f(x) = 2^(-nu/2) / Gamma(nu/2) * exp(-x/2) * x^(nu/2 - 1)
/// ```
///
/// from `reduced_chisq * nu` to infinity. An infinite `reduced_chisq` gives 0.
///
/// # Examples
///
/// ```
/// use grblc::statistics::probability;
///
/// assert_eq!(probability(0.0, 3.0).unwrap(), 1.0);
/// // With two degrees of freedom the tail is exp(-chi^2 / 2)
/// assert!((probability(1.5, 2.0).unwrap() - (-1.5f64).exp()).abs() < 1e-10);
/// ```
pub fn probability(reduced_chisq: f64, nu: f64) -> Result<f64> {
    if !(nu.is_finite() && nu > 0.0) {
        return Err(GrbError::InvalidInput(format!(
            "degrees of freedom must be positive and finite, got {}",
            nu
        )));
    }
    if reduced_chisq.is_nan() {
        return Err(GrbError::InvalidInput(
            "reduced chi-square is NaN".to_string(),
        ));
    }

    let x = reduced_chisq * nu;
    if x <= 0.0 {
        return Ok(1.0);
    }
    if x.is_infinite() {
        return Ok(0.0);
    }

    let dist = ChiSquared::new(nu).map_err(|e| GrbError::InvalidInput(e.to_string()))?;
    Ok(dist.sf(x).clamp(0.0, 1.0))
}

fn check_lengths(x: &Array1<f64>, y: &Array1<f64>, sigma: &Array1<f64>) -> Result<()> {
    if x.len() != y.len() || x.len() != sigma.len() {
        return Err(GrbError::DimensionMismatch(format!(
            "x, y and sigma must have equal lengths, got {}, {} and {}",
            x.len(),
            y.len(),
            sigma.len()
        )));
    }
    Ok(())
}

fn check_sigma(sigma: &Array1<f64>, options: &EvalOptions) -> Result<()> {
    let bad = sigma.iter().filter(|s| !(s.is_finite() && **s > 0.0)).count();
    if bad == 0 {
        return Ok(());
    }

    match options.policy {
        DomainPolicy::Strict => {
            let (index, value) = sigma
                .iter()
                .enumerate()
                .find(|(_, s)| !(s.is_finite() && **s > 0.0))
                .map(|(i, s)| (i, *s))
                .unwrap_or((0, f64::NAN));
            Err(GrbError::NumericDomain(format!(
                "standard error must be positive and finite, got sigma[{}] = {} ({} bad values)",
                index, value, bad
            )))
        }
        DomainPolicy::Permissive => {
            log::warn!(
                "{} standard errors are zero, negative or not finite; chi-square is unreliable",
                bad
            );
            Ok(())
        }
    }
}
