//! Scenario parameters for one kinematics calculation.

use serde::{Deserialize, Serialize};

/// Baked-in initial velocity (km/h).
pub const DEFAULT_VELOCITY_KMH: f64 = 10_000.0;
/// Baked-in acceleration (m/s²).
pub const DEFAULT_ACCELERATION_MS2: f64 = 3.0;
/// Baked-in interval length (s), one hour.
pub const DEFAULT_ELAPSED_S: f64 = 3600.0;
/// Baked-in starting position (km).
pub const DEFAULT_DISTANCE_KM: f64 = 0.0;
/// Baked-in fuel mass (kg).
pub const DEFAULT_FUEL_KG: f64 = 5000.0;
/// Baked-in fuel burn rate (kg/s).
pub const DEFAULT_BURN_RATE_KGS: f64 = 0.5;

/// The full parameter set for one interval.
///
/// Fields missing from a deserialized scenario fall back to the baked-in
/// defaults, so `{"acceleration_ms2": 1.5}` is a valid scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Initial speed (km/h).
    pub velocity_kmh: f64,
    /// Constant acceleration over the interval (m/s²).
    pub acceleration_ms2: f64,
    /// Interval length (s).
    pub elapsed_s: f64,
    /// Starting position (km).
    pub distance_km: f64,
    /// Fuel in the tank at the start of the interval (kg).
    pub fuel_kg: f64,
    /// Fuel consumption rate (kg/s).
    pub burn_rate_kgs: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            velocity_kmh: DEFAULT_VELOCITY_KMH,
            acceleration_ms2: DEFAULT_ACCELERATION_MS2,
            elapsed_s: DEFAULT_ELAPSED_S,
            distance_km: DEFAULT_DISTANCE_KM,
            fuel_kg: DEFAULT_FUEL_KG,
            burn_rate_kgs: DEFAULT_BURN_RATE_KGS,
        }
    }
}
