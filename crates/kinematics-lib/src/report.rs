//! Run all three calculations for a scenario and collect the outcome.
//!
//! Each calculation is independent. A failure in one is recorded as a
//! [`Failure`] and leaves that output empty; the other two still run.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::fuel::{update_fuel, FuelUpdate};
use crate::kinematics::{update_distance, update_velocity};
use crate::scenario::Scenario;

/// Output quantity produced by the orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Velocity,
    Distance,
    Fuel,
}

impl Quantity {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Velocity => "velocity",
            Quantity::Distance => "distance",
            Quantity::Fuel => "remaining fuel",
        }
    }
}

/// A calculation that produced no value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub quantity: Quantity,
    pub message: String,
    #[serde(skip)]
    pub error: Error,
}

impl Failure {
    fn new(quantity: Quantity, error: Error) -> Self {
        Self {
            quantity,
            message: error.to_string(),
            error,
        }
    }
}

/// Result of evaluating one [`Scenario`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KinematicsReport {
    /// Input parameters the report was computed from.
    pub scenario: Scenario,
    /// New velocity (km/h), absent if the calculation failed.
    pub velocity_kmh: Option<f64>,
    /// New position (km), absent if the calculation failed.
    pub distance_km: Option<f64>,
    /// Fuel update, absent if the calculation failed.
    pub fuel: Option<FuelUpdate>,
    /// Calculations that produced no value.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<Failure>,
    /// Non-fatal conditions such as fuel exhaustion.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl KinematicsReport {
    /// Evaluate velocity, distance, and fuel for `scenario`.
    ///
    /// # Examples
    /// ```
    /// use kinematics_lib::{KinematicsReport, Scenario};
    ///
    /// let report = KinematicsReport::evaluate(&Scenario::default());
    /// assert_eq!(report.distance_km, Some(10_000.0));
    /// assert!(report.failures.is_empty());
    /// ```
    pub fn evaluate(scenario: &Scenario) -> Self {
        let mut failures = Vec::new();
        let mut warnings = Vec::new();

        let velocity_kmh = keep_or_record(
            Quantity::Velocity,
            update_velocity(
                scenario.velocity_kmh,
                scenario.acceleration_ms2,
                scenario.elapsed_s,
            ),
            &mut failures,
        );
        let distance_km = keep_or_record(
            Quantity::Distance,
            update_distance(
                scenario.distance_km,
                scenario.velocity_kmh,
                scenario.elapsed_s,
            ),
            &mut failures,
        );
        let fuel = keep_or_record(
            Quantity::Fuel,
            update_fuel(
                scenario.fuel_kg,
                scenario.burn_rate_kgs,
                scenario.elapsed_s,
            ),
            &mut failures,
        );

        if let Some(exhausted) = fuel.as_ref().and_then(FuelUpdate::exhaustion) {
            warnings.push(exhausted.to_string());
        }

        info!(
            failures = failures.len(),
            warnings = warnings.len(),
            "scenario evaluated"
        );

        Self {
            scenario: *scenario,
            velocity_kmh,
            distance_km,
            fuel,
            failures,
            warnings,
        }
    }

    /// Remaining fuel (kg), absent if the fuel calculation failed.
    pub fn remaining_fuel_kg(&self) -> Option<f64> {
        self.fuel.map(|fuel| fuel.remaining_kg)
    }

    /// Whether the tank ran dry during the interval.
    pub fn fuel_exhausted(&self) -> bool {
        self.fuel.is_some_and(|fuel| fuel.is_exhausted())
    }

    /// Whether any calculation failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The failure recorded for `quantity`, if any.
    pub fn failure(&self, quantity: Quantity) -> Option<&Failure> {
        self.failures.iter().find(|f| f.quantity == quantity)
    }
}

fn keep_or_record<T>(
    quantity: Quantity,
    result: Result<T>,
    failures: &mut Vec<Failure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(quantity = quantity.label(), error = %err, "calculation failed");
            failures.push(Failure::new(quantity, err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baked_in_scenario_produces_all_values() {
        let report = KinematicsReport::evaluate(&Scenario::default());

        assert!((report.velocity_kmh.unwrap() - 48_880.0).abs() < 1e-6);
        assert!((report.distance_km.unwrap() - 10_000.0).abs() < 1e-9);
        assert!((report.remaining_fuel_kg().unwrap() - 3200.0).abs() < 1e-9);
        assert!(!report.has_failures());
        assert!(!report.fuel_exhausted());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn velocity_failure_leaves_other_outputs_intact() {
        let scenario = Scenario {
            acceleration_ms2: -1.0,
            ..Scenario::default()
        };
        let report = KinematicsReport::evaluate(&scenario);

        assert_eq!(report.velocity_kmh, None);
        assert!((report.distance_km.unwrap() - 10_000.0).abs() < 1e-9);
        assert!((report.remaining_fuel_kg().unwrap() - 3200.0).abs() < 1e-9);

        let failure = report.failure(Quantity::Velocity).expect("velocity failure");
        assert!(matches!(failure.error, Error::InvalidArgument { .. }));
        assert!(failure.message.contains("acceleration"));
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn negative_time_fails_every_calculation() {
        let scenario = Scenario {
            elapsed_s: -1.0,
            ..Scenario::default()
        };
        let report = KinematicsReport::evaluate(&scenario);

        assert_eq!(report.velocity_kmh, None);
        assert_eq!(report.distance_km, None);
        assert_eq!(report.fuel, None);
        assert_eq!(report.failures.len(), 3);
    }

    #[test]
    fn exhaustion_is_a_warning_not_a_failure() {
        let scenario = Scenario {
            fuel_kg: 100.0,
            burn_rate_kgs: 1.0,
            ..Scenario::default()
        };
        let report = KinematicsReport::evaluate(&scenario);

        assert_eq!(report.remaining_fuel_kg(), Some(0.0));
        assert!(report.fuel_exhausted());
        assert!(!report.has_failures());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("fuel exhausted"));
    }
}
