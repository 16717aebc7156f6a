//! Objective functions for external optimizers and samplers.
//!
//! [`Objective`] ties a [`Model`] to a [`LightcurveData`] set and exposes
//! the quantities a fitter needs: chi-squared, a uniform log-prior built from
//! the parameter bounds, and the log-likelihood / log-probability used by
//! MCMC samplers. It also maps between the full parameter vector and the
//! vector of varying parameters an optimizer actually moves.

use crate::config::EvalOptions;
use crate::error::{GrbError, Result};
use crate::model::Model;
use crate::parameters::Bounds;
use crate::statistics::{self, ChiSquare};
use ndarray::Array1;

/// An observed lightcurve: log time, log flux and the flux standard error.
#[derive(Debug, Clone, PartialEq)]
pub struct LightcurveData {
    x: Array1<f64>,
    y: Array1<f64>,
    sigma: Array1<f64>,
}

impl LightcurveData {
    /// Create a data set, checking that all three arrays are non-empty and
    /// of equal length.
    pub fn new(x: Array1<f64>, y: Array1<f64>, sigma: Array1<f64>) -> Result<Self> {
        if x.is_empty() {
            return Err(GrbError::InvalidInput("lightcurve has no data points".to_string()));
        }
        if x.len() != y.len() || x.len() != sigma.len() {
            return Err(GrbError::DimensionMismatch(format!(
                "x, y and sigma must have equal lengths, got {}, {} and {}",
                x.len(),
                y.len(),
                sigma.len()
            )));
        }

        Ok(Self { x, y, sigma })
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn sigma(&self) -> &Array1<f64> {
        &self.sigma
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A model paired with the data it is fit to.
#[derive(Debug, Clone)]
pub struct Objective<'a> {
    model: &'a Model,
    data: &'a LightcurveData,
    options: EvalOptions,
}

impl<'a> Objective<'a> {
    pub fn new(model: &'a Model, data: &'a LightcurveData) -> Self {
        Self {
            model,
            data,
            options: EvalOptions::default(),
        }
    }

    /// Use `options` for every evaluation
    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model(&self) -> &Model {
        self.model
    }

    pub fn data(&self) -> &LightcurveData {
        self.data
    }

    /// Number of data points
    pub fn ndata(&self) -> usize {
        self.data.len()
    }

    /// Number of varying parameters
    pub fn nvarys(&self) -> usize {
        self.model.func_args().varying().len()
    }

    /// Model prediction at the data points
    pub fn predict(&self, p: &[f64]) -> Result<Array1<f64>> {
        self.model.eval_with(self.data.x(), p, &self.options)
    }

    pub fn chisq(&self, p: &[f64]) -> Result<f64> {
        statistics::chisq(
            self.data.x(),
            self.data.y(),
            self.data.sigma(),
            self.model,
            p,
            &self.options,
        )
    }

    pub fn chisq_reduced(&self, p: &[f64]) -> Result<ChiSquare> {
        statistics::chisq_reduced(
            self.data.x(),
            self.data.y(),
            self.data.sigma(),
            self.model,
            p,
            &self.options,
        )
    }

    /// Uniform log-prior: `0` inside every parameter's bounds, `-inf` outside.
    ///
    /// Fixed parameters are checked too.
    pub fn log_prior(&self, p: &[f64]) -> Result<f64> {
        self.check_len(p)?;

        let inside = self
            .model
            .func_args()
            .iter()
            .zip(p)
            .all(|(param, &value)| param.is_within_bounds(value));

        Ok(if inside { 0.0 } else { f64::NEG_INFINITY })
    }

    /// Gaussian log-likelihood up to a constant, `-chisq / 2`
    pub fn log_likelihood(&self, p: &[f64]) -> Result<f64> {
        Ok(-0.5 * self.chisq(p)?)
    }

    /// Log-posterior, skipping the model evaluation outside the prior.
    pub fn log_probability(&self, p: &[f64]) -> Result<f64> {
        let lp = self.log_prior(p)?;
        if !lp.is_finite() {
            return Ok(f64::NEG_INFINITY);
        }
        Ok(lp + self.log_likelihood(p)?)
    }

    /// Build a full parameter vector from the values of the varying
    /// parameters, taking fixed values from `template`.
    ///
    /// ```
    /// use grblc::models::w07_model;
    /// use grblc::objective::{LightcurveData, Objective};
    /// use ndarray::array;
    ///
    /// let model = w07_model(false);
    /// let data = LightcurveData::new(array![4.0], array![-12.0], array![0.1]).unwrap();
    /// let objective = Objective::new(&model, &data);
    ///
    /// let full = objective.expand(&[4.5, -11.0, 2.0], &[5.0, -12.0, 1.5, 0.0]).unwrap();
    /// assert_eq!(full, vec![4.5, -11.0, 2.0, 0.0]);
    /// ```
    pub fn expand(&self, free: &[f64], template: &[f64]) -> Result<Vec<f64>> {
        self.check_len(template)?;
        let nvarys = self.nvarys();
        if free.len() != nvarys {
            return Err(GrbError::DimensionMismatch(format!(
                "model '{}' has {} varying parameters, got {} values",
                self.model.name(),
                nvarys,
                free.len()
            )));
        }

        let mut free = free.iter();
        Ok(self
            .model
            .func_args()
            .iter()
            .zip(template)
            .map(|(param, &fixed)| {
                if param.vary() {
                    free.next().copied().unwrap_or(fixed)
                } else {
                    fixed
                }
            })
            .collect())
    }

    /// Values of the varying parameters within a full parameter vector
    pub fn contract(&self, p: &[f64]) -> Result<Vec<f64>> {
        self.check_len(p)?;
        Ok(self
            .model
            .func_args()
            .iter()
            .zip(p)
            .filter(|(param, _)| param.vary())
            .map(|(_, &value)| value)
            .collect())
    }

    /// Prior bounds of the varying parameters, in order
    pub fn prior_bounds(&self) -> Vec<Bounds> {
        self.model
            .func_args()
            .varying()
            .into_iter()
            .map(|param| *param.bounds())
            .collect()
    }

    fn check_len(&self, p: &[f64]) -> Result<()> {
        if p.len() < self.model.len() {
            return Err(GrbError::DimensionMismatch(format!(
                "model '{}' has {} parameters, got {} values",
                self.model.name(),
                self.model.len(),
                p.len()
            )));
        }
        Ok(())
    }
}
