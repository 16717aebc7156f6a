//! Prior bounds for fit parameters
//!
//! A [`Bounds`] is the closed interval `[min, max]` a parameter is allowed to
//! occupy. In the lightcurve models it doubles as the support of a uniform
//! prior, so either end may be infinite.

use serde::{Deserialize, Serialize};
use std::f64::{INFINITY, NEG_INFINITY};
use thiserror::Error;

/// Errors that can occur when working with parameter bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Invalid bounds: min ({min}) must not exceed max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Bounds may not be NaN")]
    NanBound,

    #[error("Bounds [{min}, {max}] contain no finite value")]
    NoFiniteValue { min: f64, max: f64 },
}

/// Represents the bounds constraints on a parameter
///
/// `min` is finite or `-inf` and `max` is finite or `+inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum allowed value for the parameter
    pub min: f64,

    /// Maximum allowed value for the parameter
    pub max: f64,
}

// JSON has no representation for infinity, so open ends are written as null.
// Only `-inf` can reach `min` and only `+inf` can reach `max`, so null is unambiguous.
impl Serialize for Bounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Bounds", 2)?;
        let min = (self.min != NEG_INFINITY).then_some(self.min);
        let max = (self.max != INFINITY).then_some(self.max);
        state.serialize_field("min", &min)?;
        state.serialize_field("max", &max)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoundsHelper {
            #[serde(default)]
            min: Option<f64>,

            #[serde(default)]
            max: Option<f64>,
        }

        let helper = BoundsHelper::deserialize(deserializer)?;
        Bounds::new(
            helper.min.unwrap_or(NEG_INFINITY),
            helper.max.unwrap_or(INFINITY),
        )
        .map_err(serde::de::Error::custom)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: NEG_INFINITY,
            max: INFINITY,
        }
    }
}

impl Bounds {
    /// Create a new bounds constraint with min and max values
    ///
    /// # Examples
    ///
    /// ```
    /// use grblc::parameters::Bounds;
    ///
    /// let bounds = Bounds::new(0.0, 5.0).unwrap();
    /// assert_eq!(bounds.min, 0.0);
    /// assert_eq!(bounds.max, 5.0);
    /// assert!(Bounds::new(5.0, 0.0).is_err());
    /// assert!(Bounds::new(f64::INFINITY, f64::INFINITY).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        if min.is_nan() || max.is_nan() {
            return Err(BoundsError::NanBound);
        }
        if min > max {
            return Err(BoundsError::InvalidBounds { min, max });
        }
        if min == INFINITY || max == NEG_INFINITY {
            return Err(BoundsError::NoFiniteValue { min, max });
        }

        Ok(Self { min, max })
    }

    /// Create an unbounded constraint (negative infinity to positive infinity)
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Check if a value is within the (closed) bounds
    pub fn is_within_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `true` if neither end of the interval is infinite
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}
