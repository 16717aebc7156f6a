//! Parameter definition and implementation
//!
//! This module provides the Parameter struct, the descriptor a [`Model`](crate::model::Model)
//! keeps for every argument of its function. A parameter carries no value of
//! its own: values are supplied positionally by whoever evaluates the model.
//! What it does carry is the prior, whether an optimizer may move it, and how
//! it should be labelled on a plot.

use crate::parameters::bounds::{Bounds, BoundsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Description given to parameters that were not explicitly described.
pub const DEFAULT_DESCRIPTION: &str = "Autogenerated argument from input function.";

/// Errors that can occur when working with parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Parameter name must not be empty")]
    EmptyName,

    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    #[error("Parameter '{name}' not found")]
    ParameterNotFound { name: String },
}

/// A fit parameter of a lightcurve model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameter")]
pub struct Parameter {
    /// Name of the parameter, matching an argument of the model function
    name: String,

    /// Free-text explanation
    description: String,

    /// Prior bounds
    #[serde(default)]
    bounds: Bounds,

    /// Whether an optimizer may adjust this parameter
    vary: bool,

    /// Label used when plotting, often LaTeX
    plot_fmt: String,
}

/// Unchecked form of [`Parameter`] read from serialized data
#[derive(Deserialize)]
struct RawParameter {
    name: String,
    description: String,
    #[serde(default)]
    bounds: Bounds,
    vary: bool,
    plot_fmt: String,
}

impl TryFrom<RawParameter> for Parameter {
    type Error = ParameterError;

    fn try_from(raw: RawParameter) -> Result<Self, Self::Error> {
        if raw.name.is_empty() {
            return Err(ParameterError::EmptyName);
        }

        Ok(Self {
            name: raw.name,
            description: raw.description,
            bounds: raw.bounds,
            vary: raw.vary,
            plot_fmt: raw.plot_fmt,
        })
    }
}

impl Parameter {
    /// Create a new unbounded, varying parameter
    ///
    /// # Examples
    ///
    /// ```
    /// use grblc::parameters::Parameter;
    ///
    /// let param = Parameter::new("alpha").unwrap();
    /// assert_eq!(param.name(), "alpha");
    /// assert_eq!(param.plot_fmt(), "alpha");
    /// assert!(param.vary());
    /// assert_eq!(param.min(), f64::NEG_INFINITY);
    /// ```
    pub fn new(name: &str) -> Result<Self, ParameterError> {
        if name.is_empty() {
            return Err(ParameterError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            bounds: Bounds::default(),
            vary: true,
            plot_fmt: name.to_string(),
        })
    }

    /// Parameter of a built-in model; name and prior are known to be valid.
    pub(crate) fn preset(name: &str, description: &str, min: f64, max: f64) -> Self {
        debug_assert!(!name.is_empty() && min <= max);

        Self {
            name: name.to_string(),
            description: description.to_string(),
            bounds: Bounds { min, max },
            vary: true,
            plot_fmt: name.to_string(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the prior bounds, failing if `min > max`
    ///
    /// ```
    /// use grblc::parameters::Parameter;
    ///
    /// let param = Parameter::new("F").unwrap().with_bounds(-20.0, 2.0).unwrap();
    /// assert_eq!(param.min(), -20.0);
    /// assert_eq!(param.max(), 2.0);
    /// assert!(Parameter::new("F").unwrap().with_bounds(2.0, -20.0).is_err());
    /// ```
    pub fn with_bounds(mut self, min: f64, max: f64) -> Result<Self, ParameterError> {
        self.bounds = Bounds::new(min, max)?;
        Ok(self)
    }

    /// Set whether the parameter varies during fitting
    pub fn with_vary(mut self, vary: bool) -> Self {
        self.vary = vary;
        self
    }

    /// Set the plot label
    pub fn with_plot_fmt(mut self, plot_fmt: &str) -> Self {
        self.plot_fmt = plot_fmt.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn plot_fmt(&self) -> &str {
        &self.plot_fmt
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Lower end of the prior
    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    /// Upper end of the prior
    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Check if the parameter is varied during fitting
    pub fn vary(&self) -> bool {
        self.vary
    }

    /// Toggle whether the parameter is varied during fitting.
    ///
    /// This is the only mutation a parameter sees after its model is built.
    pub fn set_vary(&mut self, vary: bool) {
        self.vary = vary;
    }

    /// Check if a proposed value lies inside the prior
    pub fn is_within_bounds(&self, value: f64) -> bool {
        self.bounds.is_within_bounds(value)
    }
}
