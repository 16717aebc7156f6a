//! Built-in afterglow models.
//!
//! This module provides the three standard phenomenological shapes used for
//! GRB optical afterglows, both as raw numeric functions (see [`afterglow`])
//! and as fully configured [`Model`]s carrying default priors.
//!
//! All presets work in log space: `T` is the log10 time (s) at the end of the
//! plateau and `F` the log10 flux (erg cm^-2 s^-1) there, so a plateau ending
//! at 10,000 s has `T = 4`.

use crate::model::{Model, ModelFunction, ModelKind};
use crate::parameters::Parameter;

pub mod afterglow;

pub use afterglow::{sharp_bpl, smooth_bpl, w07};

/// The [`w07`] function with arguments `T, F, alpha, t`
pub fn w07_function() -> ModelFunction {
    ModelFunction::preset(ModelKind::W07, "w07", &["T", "F", "alpha", "t"], |x, p, _| {
        Ok(afterglow::w07(&x, p[0], p[1], p[2], p[3]))
    })
}

/// The [`sharp_bpl`] function with arguments `T, F, alpha1, alpha2`
pub fn sharp_bpl_function() -> ModelFunction {
    ModelFunction::preset(
        ModelKind::SimpleBpl,
        "sharp_bpl",
        &["T", "F", "alpha1", "alpha2"],
        |x, p, _| Ok(afterglow::sharp_bpl(&x, p[0], p[1], p[2], p[3])),
    )
}

/// The [`smooth_bpl`] function with arguments `T, F, alpha1, alpha2, S`
pub fn smooth_bpl_function() -> ModelFunction {
    ModelFunction::preset(
        ModelKind::SmoothBpl,
        "smooth_bpl",
        &["T", "F", "alpha1", "alpha2", "S"],
        |x, p, options| afterglow::smooth_bpl(&x, p[0], p[1], p[2], p[3], p[4], options),
    )
}

/// Willingale et al. (2007) model.
///
/// Priors:
/// * `T`: Uniform(1e-10, 10)
/// * `F`: Uniform(-20, 2)
/// * `alpha`: Uniform(0, 5)
/// * `t`: Uniform(0, inf)
///
/// The rise time `t` often has no visible effect on a lightcurve and is
/// commonly pinned to zero; `vary_t = false` tells optimizers to leave it
/// alone.
///
/// # Examples
///
/// ```
/// use grblc::models::w07_model;
/// use ndarray::Array1;
///
/// let model = w07_model(true);
/// let x = Array1::linspace(2.0, 8.0, 100);
/// let y = model.eval(&x, &[5.0, -12.0, 1.5, 1.0]).unwrap();
/// assert_eq!(y.len(), 100);
/// ```
pub fn w07_model(vary_t: bool) -> Model {
    Model::preset(
        "Willingale 2007",
        "w07",
        w07_function(),
        vec![
            Parameter::preset("T", "log time at end of plateau (log sec)", 1e-10, 10.0),
            Parameter::preset("F", "log flux at end of plateau (log erg/cm^2/s)", -20.0, 2.0),
            Parameter::preset("alpha", "temporal decay index of power law", 0.0, 5.0)
                .with_plot_fmt(r"$\alpha$"),
            Parameter::preset("t", "log time at peak (log sec)", 0.0, f64::INFINITY)
                .with_vary(vary_t),
        ],
    )
}

/// Sharply broken power law model.
///
/// Priors:
/// * `T`: Uniform(1e-5, 10)
/// * `F`: Uniform(-20, -2)
/// * `alpha1`: Uniform(-5, 5)
/// * `alpha2`: Uniform(0, 20)
pub fn simple_bpl_model() -> Model {
    Model::preset(
        "simple broken power law",
        "simple_bpl",
        sharp_bpl_function(),
        bpl_parameters(),
    )
}

/// Smoothly broken power law model.
///
/// Same priors as [`simple_bpl_model`] plus an unbounded smoothing factor `S`.
pub fn smooth_bpl_model() -> Model {
    let mut params = bpl_parameters();
    params.push(Parameter::preset(
        "S",
        "smoothing factor",
        f64::NEG_INFINITY,
        f64::INFINITY,
    ));

    Model::preset(
        "smooth broken power law",
        "smooth_bpl",
        smooth_bpl_function(),
        params,
    )
}

fn bpl_parameters() -> Vec<Parameter> {
    vec![
        Parameter::preset("T", "log time at end of plateau (log sec)", 1e-5, 10.0),
        Parameter::preset("F", "log flux at end of plateau (log erg cm^-2 s^-1)", -20.0, -2.0),
        Parameter::preset("alpha1", "temporal decay index of initial power law", -5.0, 5.0)
            .with_plot_fmt(r"$\alpha_1$"),
        Parameter::preset("alpha2", "temporal decay index of end power law", 0.0, 20.0)
            .with_plot_fmt(r"$\alpha_2$"),
    ]
}

/// The preset model for a given kind, or `None` for [`ModelKind::Custom`]
pub fn preset(kind: ModelKind) -> Option<Model> {
    match kind {
        ModelKind::W07 => Some(w07_model(true)),
        ModelKind::SimpleBpl => Some(simple_bpl_model()),
        ModelKind::SmoothBpl => Some(smooth_bpl_model()),
        ModelKind::Custom => None,
    }
}
