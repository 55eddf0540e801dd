//! Validated travel costs carried by graph edges.

use std::fmt;

use thiserror::Error;

/// Errors returned by [`Weight::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightError {
    /// The cost was below zero.
    ///
    /// Cheapest-path search finalises nodes in distance order, which is only
    /// sound when no edge can shorten an already finalised path.
    #[error("edge weight must not be negative, got {0}")]
    Negative(f64),
    /// The cost was NaN or infinite.
    #[error("edge weight must be a finite number")]
    NonFinite,
}

/// Non-negative, finite travel cost of an edge.
///
/// # Examples
///
/// ```
/// use dispatch_core::{Weight, WeightError};
///
/// assert_eq!(Weight::new(2.5).map(Weight::get), Ok(2.5));
/// assert_eq!(Weight::new(-1.0), Err(WeightError::Negative(-1.0)));
/// assert_eq!(Weight::new(f64::NAN), Err(WeightError::NonFinite));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Weight(f64);

impl Weight {
    /// A free edge.
    pub const ZERO: Self = Self(0.0);

    /// Validates and constructs a [`Weight`].
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::NonFinite`] for NaN or infinite input and
    /// [`WeightError::Negative`] for values below zero. Negative zero is
    /// accepted and normalised to zero.
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NonFinite);
        }
        if value < 0.0 {
            return Err(WeightError::Negative(value));
        }
        Ok(Self(value.abs()))
    }

    /// Return the cost as a float.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = WeightError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
