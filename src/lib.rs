//! # grblc
//!
//! `grblc` fits phenomenological models to gamma-ray-burst optical afterglow
//! lightcurves.
//!
//! The library provides:
//! - A declarative parameter system with priors and vary flags
//! - A [`Model`] type binding numeric functions to their parameters
//! - The Willingale (2007), sharp and smooth broken power law afterglow shapes
//! - Chi-squared goodness of fit and its tail probability
//! - An [`Objective`](objective::Objective) adapter for external optimizers and samplers
//!
//! ## Basic Usage
//!
//! ```
//! use grblc::models::w07_model;
//! use grblc::statistics::{chisq_reduced, probability};
//! use grblc::EvalOptions;
//! use ndarray::array;
//!
//! let model = w07_model(true);
//! let p = [5.0, -12.0, 1.5, 1.0];
//!
//! let x = array![3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = model.eval(&x, &p).unwrap() + 0.01;
//! let sigma = array![0.05, 0.05, 0.05, 0.05, 0.05, 0.05];
//!
//! let fit = chisq_reduced(&x, &y, &sigma, &model, &p, &EvalOptions::default()).unwrap();
//! let prob = probability(fit.reduced, fit.nfree as f64).unwrap();
//! assert!(prob > 0.8 && prob < 0.9);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod models;
pub mod objective;
pub mod parameters;
pub mod statistics;

// Re-exports for convenience
pub use config::{DomainPolicy, EvalOptions};
pub use error::{GrbError, Result};
pub use model::{Model, ModelFunction, ModelKind};
pub use parameters::{Parameter, ParameterSet};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
