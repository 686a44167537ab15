//! Overflow threshold applied to every quantity operation.
//!
//! The threshold is process-wide and write-once: an application installs it at start-up (usually from its
//! configuration) and every later operation reads it without locking. Until something is installed the threshold is
//! `f64::MAX`, so only infinities count as overflow.

use crate::error::{Operation, UnitError, UnitResult};
use crate::magnitude::Magnitude;
use once_cell::sync::OnceCell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static INSTALLED: OnceCell<Limits> = OnceCell::new();

/// Numeric limits for quantity magnitudes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Limits {
    max_magnitude: f64,
}

impl Limits {
    /// No limit beyond the range of `f64`.
    pub const DEFAULT: Limits = Limits {
        max_magnitude: f64::MAX,
    };

    /// Creates limits with the given largest admissible absolute magnitude.
    pub fn new(max_magnitude: f64) -> UnitResult<Self> {
        if max_magnitude.is_nan() || max_magnitude <= 0.0 {
            return Err(UnitError::invalid(
                Operation::Construction,
                format!("max_magnitude must be positive, got {max_magnitude}"),
            ));
        }
        Ok(Self { max_magnitude })
    }

    /// Largest admissible absolute magnitude.
    #[inline]
    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    /// Installs these limits for the rest of the process.
    ///
    /// Only the first call wins; later calls return the rejected value.
    pub fn install(self) -> Result<(), Limits> {
        INSTALLED.set(self).map_err(|rejected| {
            log::warn!(
                "arithmetic limits already installed ({:?}); ignoring {:?}",
                INSTALLED.get(),
                rejected
            );
            rejected
        })
    }

    /// The installed limits, or [`Limits::DEFAULT`].
    pub fn current() -> Limits {
        INSTALLED.get().copied().unwrap_or(Limits::DEFAULT)
    }

    /// Rejects NaN elements, infinities and magnitudes beyond the threshold.
    pub fn check(&self, magnitude: &Magnitude, operation: Operation) -> UnitResult<()> {
        if magnitude.has_nan() {
            return Err(UnitError::invalid(operation, "result contains NaN"));
        }
        let largest = magnitude.max_abs();
        if largest.is_infinite() || largest > self.max_magnitude {
            return Err(UnitError::Overflow {
                operation,
                magnitude: largest,
                limit: self.max_magnitude,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::DEFAULT
    }
}
