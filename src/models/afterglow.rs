//! Phenomenological afterglow lightcurve shapes.
//!
//! All functions work in log10 space for both the independent variable
//! (log time in seconds) and the result (log flux in erg cm^-2 s^-1). Raw
//! afterglow times and fluxes span many decades and overflow quickly when
//! exponentiated, so the break time `t_break` and break flux `f_break` are
//! logarithmic as well: a plateau ending at 10^5 s has `t_break = 5`.
//!
//! Every function maps elementwise over an array of any dimension and
//! returns an array of the same shape.

use crate::config::{DomainPolicy, EvalOptions};
use crate::error::{GrbError, Result};
use ndarray::{Array, ArrayBase, Data, Dimension};
use std::f64::consts::LN_10;

/// The Willingale et al. (2007) model.
///
/// In linear space the model is
///
/// ```text
/// f(t) = F exp(alpha (1 - t/T)) exp(-t_i/t)      for t <  T
/// f(t) = F (t/T)^(-alpha) exp(-t_i/t)            for t >= T
/// ```
///
/// an exponential plateau that turns into a power law decay at the point
/// `(T, F)`. Here the log10 of that is returned with `T` and `F` given as
/// log10 values. `t_rise` is the (linear) time of the initial rise.
///
/// The break point itself, `x == t_break`, belongs to the power law branch.
///
/// See <https://arxiv.org/abs/astro-ph/0612031>.
pub fn w07<S, D>(
    x: &ArrayBase<S, D>,
    t_break: f64,
    f_break: f64,
    alpha: f64,
    t_rise: f64,
) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|x| {
        if x < t_break {
            (-t_rise * 10f64.powf(-x) + alpha - alpha * 10f64.powf(x - t_break)
                + f_break * LN_10)
                / LN_10
        } else {
            f_break + t_break * alpha - x * alpha - t_rise * 10f64.powf(-x) / LN_10
        }
    })
}

/// A sharply broken power law.
///
/// ```text
/// f(t) = F (t/T)^(-alpha1)    for t <  T
/// f(t) = F (t/T)^(-alpha2)    for t >= T
/// ```
///
/// Evaluated in linear space and returned as log10. At `x == t_break` the
/// ratio is exactly one, so the result is `f_break`.
pub fn sharp_bpl<S, D>(
    x: &ArrayBase<S, D>,
    t_break: f64,
    f_break: f64,
    alpha1: f64,
    alpha2: f64,
) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let lin_t = 10f64.powf(t_break);
    let lin_f = 10f64.powf(f_break);

    x.mapv(|x| {
        let lin_x = 10f64.powf(x);
        let index = if lin_x < lin_t { alpha1 } else { alpha2 };
        (lin_f * (lin_x / lin_t).powf(-index)).log10()
    })
}

/// A smoothly broken power law.
///
/// ```text
/// f(t) = F ((t/T)^(S alpha1) + (t/T)^(S alpha2))^(-1/S)
/// ```
///
/// `smoothing` (`S`) sets how sharp the transition between the two power
/// laws is; as `S` grows (with `alpha1 < alpha2`) the curve approaches
/// [`sharp_bpl`]. The sum is taken in log10 space with the larger term
/// factored out, so large `|S|` stays finite. A smoothing factor of zero
/// divides by zero: with
/// [`DomainPolicy::Strict`] that is a [`GrbError::NumericDomain`] error, with
/// [`DomainPolicy::Permissive`] a warning is logged and the non-finite values
/// are returned as computed.
pub fn smooth_bpl<S, D>(
    x: &ArrayBase<S, D>,
    t_break: f64,
    f_break: f64,
    alpha1: f64,
    alpha2: f64,
    smoothing: f64,
    options: &EvalOptions,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if smoothing == 0.0 {
        match options.policy {
            DomainPolicy::Strict => {
                return Err(GrbError::NumericDomain(
                    "smoothing factor S of the smooth broken power law must be non-zero"
                        .to_string(),
                ))
            }
            DomainPolicy::Permissive => {
                log::warn!("smooth broken power law evaluated with S = 0; result is not finite")
            }
        }
    }

    Ok(x.mapv(|x| {
        let u = x - t_break;
        f_break - log10_sum_pow10(smoothing * alpha1 * u, smoothing * alpha2 * u) / smoothing
    }))
}

/// `log10(10^a + 10^b)` without leaving log space.
fn log10_sum_pow10(a: f64, b: f64) -> f64 {
    let m = a.max(b);
    if m.is_infinite() {
        return m;
    }
    m + (10f64.powf(a - m) + 10f64.powf(b - m)).log10()
}
