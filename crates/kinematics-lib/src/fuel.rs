//! Fuel consumption over a single interval.
//!
//! Burning more fuel than the tank holds never yields a negative remaining
//! mass: the result is clamped to zero and the update is flagged exhausted.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::validate::{require_finite, require_non_negative};

/// Outcome of burning fuel for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelUpdate {
    /// Fuel left in the tank (kg), never negative.
    pub remaining_kg: f64,
    /// Fuel actually burned (kg), capped at what the tank held.
    pub consumed_kg: f64,
    /// Requested burn that could not be served (kg); zero when fuel sufficed.
    pub shortfall_kg: f64,
    /// Seconds into the interval at which the tank ran dry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhausted_after_s: Option<f64>,
}

impl FuelUpdate {
    /// Whether the requested burn exceeded the available fuel.
    pub fn is_exhausted(&self) -> bool {
        self.shortfall_kg > 0.0
    }

    /// The [`Error::FuelExhausted`] condition, if the tank ran dry.
    pub fn exhaustion(&self) -> Option<Error> {
        self.is_exhausted().then(|| Error::FuelExhausted {
            requested_kg: self.consumed_kg + self.shortfall_kg,
            available_kg: self.consumed_kg,
        })
    }

    /// Treat exhaustion as a hard failure, returning the remaining fuel otherwise.
    pub fn ensure_sufficient(&self) -> Result<f64> {
        match self.exhaustion() {
            Some(err) => Err(err),
            None => Ok(self.remaining_kg),
        }
    }
}

/// Burn fuel at `burn_rate_kgs` for `elapsed_s` seconds.
///
/// Formula: remaining = fuel − burn_rate · t, clamped to zero.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if any input is non-finite or negative,
/// or if the requested burn overflows. Exhaustion is not an error here; inspect [`FuelUpdate::is_exhausted`] or
/// call [`FuelUpdate::ensure_sufficient`].
///
/// # Examples
/// ```
/// use kinematics_lib::update_fuel;
///
/// let update = update_fuel(100.0, 1.0, 3600.0).unwrap();
/// assert_eq!(update.remaining_kg, 0.0);
/// assert!(update.is_exhausted());
/// assert!(update.ensure_sufficient().is_err());
/// ```
pub fn update_fuel(fuel_kg: f64, burn_rate_kgs: f64, elapsed_s: f64) -> Result<FuelUpdate> {
    let fuel_kg = require_non_negative("fuel mass", fuel_kg)?;
    let burn_rate_kgs = require_non_negative("burn rate", burn_rate_kgs)?;
    let elapsed_s = require_non_negative("elapsed time", elapsed_s)?;

    let requested_kg = require_finite("fuel burned", burn_rate_kgs * elapsed_s)?;
    let raw_remaining = fuel_kg - requested_kg;
    // Rounding noise when the burn drains the tank exactly.
    let tolerance = f64::EPSILON * fuel_kg.max(requested_kg);

    if raw_remaining < -tolerance {
        let update = FuelUpdate {
            remaining_kg: 0.0,
            consumed_kg: fuel_kg,
            shortfall_kg: -raw_remaining,
            exhausted_after_s: endurance_s(fuel_kg, burn_rate_kgs)?,
        };
        warn!(
            fuel_kg,
            requested_kg,
            shortfall_kg = update.shortfall_kg,
            "fuel exhausted during interval; remaining fuel clamped to zero"
        );
        return Ok(update);
    }

    if raw_remaining <= tolerance {
        debug!(fuel_kg, requested_kg, "fuel drained exactly to zero");
        return Ok(FuelUpdate {
            remaining_kg: 0.0,
            consumed_kg: fuel_kg,
            shortfall_kg: 0.0,
            exhausted_after_s: None,
        });
    }

    debug!(
        fuel_kg,
        burn_rate_kgs,
        elapsed_s,
        remaining_kg = raw_remaining,
        "fuel updated"
    );
    Ok(FuelUpdate {
        remaining_kg: raw_remaining,
        consumed_kg: requested_kg,
        shortfall_kg: 0.0,
        exhausted_after_s: None,
    })
}

/// How long `fuel_kg` lasts at `burn_rate_kgs`.
///
/// Returns `Ok(None)` when the burn rate is zero (the tank never empties).
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if either input is non-finite or negative.
pub fn endurance_s(fuel_kg: f64, burn_rate_kgs: f64) -> Result<Option<f64>> {
    let fuel_kg = require_non_negative("fuel mass", fuel_kg)?;
    let burn_rate_kgs = require_non_negative("burn rate", burn_rate_kgs)?;

    if burn_rate_kgs == 0.0 {
        return Ok(None);
    }
    Ok(Some(fuel_kg / burn_rate_kgs))
}
