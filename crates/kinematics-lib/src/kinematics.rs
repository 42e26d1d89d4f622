//! Velocity and distance updates over a single interval.
//!
//! Both updates assume straight-line motion. Velocity integrates a constant
//! acceleration; distance advances at the *initial* velocity for the whole
//! interval and does not integrate acceleration.

use tracing::debug;

use crate::error::Result;
use crate::units::{kmh_to_ms, ms_to_kmh, seconds_to_hours};
use crate::validate::{require_finite, require_non_negative};

/// Calculate the velocity after `elapsed_s` seconds of constant acceleration.
///
/// Formula: v' = v + a·t, evaluated in m/s and returned in km/h.
///
/// # Arguments
/// - `velocity_kmh`: initial speed in km/h (finite, non-negative)
/// - `acceleration_ms2`: acceleration in m/s² (finite, non-negative)
/// - `elapsed_s`: interval length in seconds (finite, non-negative)
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if any input is non-finite or
/// negative, or if the inputs are so large the result overflows.
///
/// # Examples
/// ```
/// use kinematics_lib::update_velocity;
///
/// // 36 km/h is 10 m/s; +2 m/s² for 5 s gives 20 m/s = 72 km/h.
/// let v = update_velocity(36.0, 2.0, 5.0).unwrap();
/// assert!((v - 72.0).abs() < 1e-9);
/// ```
pub fn update_velocity(velocity_kmh: f64, acceleration_ms2: f64, elapsed_s: f64) -> Result<f64> {
    let velocity_kmh = require_non_negative("velocity", velocity_kmh)?;
    let acceleration_ms2 = require_non_negative("acceleration", acceleration_ms2)?;
    let elapsed_s = require_non_negative("elapsed time", elapsed_s)?;

    let velocity_ms = kmh_to_ms(velocity_kmh) + acceleration_ms2 * elapsed_s;
    let new_velocity_kmh = require_finite("new velocity", ms_to_kmh(velocity_ms))?;

    debug!(
        velocity_kmh,
        acceleration_ms2,
        elapsed_s,
        new_velocity_kmh,
        "velocity updated"
    );
    Ok(new_velocity_kmh)
}

/// Calculate the position after travelling at `velocity_kmh` for `elapsed_s` seconds.
///
/// Formula: d' = d + v·(t / 3600). `distance_km` is a signed position and may
/// be negative; speed and time may not.
///
/// # Errors
/// Returns [`crate::Error::InvalidArgument`] if `distance_km` is non-finite,
/// if `velocity_kmh` or `elapsed_s` is non-finite or negative, or if the
/// result overflows.
pub fn update_distance(distance_km: f64, velocity_kmh: f64, elapsed_s: f64) -> Result<f64> {
    let distance_km = require_finite("distance", distance_km)?;
    let velocity_kmh = require_non_negative("velocity", velocity_kmh)?;
    let elapsed_s = require_non_negative("elapsed time", elapsed_s)?;

    let new_distance_km = require_finite(
        "new distance",
        distance_km + velocity_kmh * seconds_to_hours(elapsed_s),
    )?;

    debug!(
        distance_km,
        velocity_kmh,
        elapsed_s,
        new_distance_km,
        "distance updated"
    );
    Ok(new_distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn velocity_for_baked_in_parameters() {
        // 10000 km/h = 2777.78 m/s; + 3 m/s² · 3600 s = 13577.78 m/s = 48880 km/h
        let v = update_velocity(10_000.0, 3.0, 3600.0).unwrap();
        assert!((v - 48_880.0).abs() < 1e-6);
        assert_eq!(format!("{v:.2}"), "48880.00");
    }

    #[test]
    fn zero_interval_leaves_velocity_unchanged() {
        let v = update_velocity(123.4, 9.81, 0.0).unwrap();
        assert!((v - 123.4).abs() < 1e-9);
    }

    #[test]
    fn negative_acceleration_is_rejected() {
        let err = update_velocity(10_000.0, -1.0, 3600.0).unwrap_err();
        match err {
            Error::InvalidArgument { name, .. } => assert_eq!(name, "acceleration"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_velocity_inputs_are_rejected() {
        assert!(update_velocity(f64::NAN, 3.0, 3600.0).is_err());
        assert!(update_velocity(10.0, f64::INFINITY, 3600.0).is_err());
        assert!(update_velocity(10.0, 3.0, -1.0).is_err());
    }

    #[test]
    fn overflowing_velocity_is_rejected() {
        let err = update_velocity(f64::MAX, f64::MAX, 10.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "new velocity"));
    }

    #[test]
    fn overflowing_distance_is_rejected() {
        let err = update_distance(f64::MAX, f64::MAX, 7200.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "new distance"));
    }

    #[test]
    fn distance_for_one_hour() {
        let d = update_distance(0.0, 10_000.0, 3600.0).unwrap();
        assert!((d - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn distance_accepts_negative_start_position() {
        let d = update_distance(-50.0, 100.0, 1800.0).unwrap();
        assert!((d - 0.0).abs() < 1e-9);
    }

    #[test]
    fn distance_rejects_negative_time_and_non_finite_position() {
        let err = update_distance(0.0, 100.0, -10.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "elapsed time"));
        assert!(update_distance(f64::NAN, 100.0, 10.0).is_err());
        assert!(update_distance(0.0, -100.0, 10.0).is_err());
    }
}
