//! # Parameter System
//!
//! Declarative descriptions of the arguments of a lightcurve model.
//!
//! - [`Parameter`]: one fit parameter with its prior bounds, vary flag and plot label
//! - [`ParameterSet`]: an ordered, name-keyed collection of parameters
//! - [`Bounds`]: the prior interval of a parameter
//!
//! ## Example Usage
//!
//! ```rust
//! use grblc::parameters::{Parameter, ParameterSet};
//!
//! let params: ParameterSet = vec![
//!     Parameter::new("T").unwrap().with_bounds(1e-10, 10.0).unwrap(),
//!     Parameter::new("t").unwrap().with_vary(false),
//! ]
//! .into();
//!
//! assert_eq!(params.names(), vec!["T", "t"]);
//! assert_eq!(params.varying().len(), 1);
//! ```

pub mod bounds;
pub mod parameter;
pub mod parameters;

// Re-export key types
pub use bounds::{Bounds, BoundsError};
pub use parameter::{Parameter, ParameterError};
pub use parameters::ParameterSet;
