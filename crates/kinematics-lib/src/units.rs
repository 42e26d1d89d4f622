//! Unit conversion helpers for speed and time.
//!
//! Inputs arrive in mixed units (km/h for speed, m/s² for acceleration,
//! seconds for time). These helpers convert between them so each formula
//! runs in a consistent unit system.

/// Meters per kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Convert a speed from km/h to m/s.
pub fn kmh_to_ms(velocity_kmh: f64) -> f64 {
    velocity_kmh * (METERS_PER_KM / SECONDS_PER_HOUR)
}

/// Convert a speed from m/s to km/h.
pub fn ms_to_kmh(velocity_ms: f64) -> f64 {
    velocity_ms * (SECONDS_PER_HOUR / METERS_PER_KM)
}

/// Convert a duration in seconds to hours.
pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_relative_eq(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= 1e-9 * scale,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn converts_known_speeds() {
        assert_relative_eq(kmh_to_ms(36.0), 10.0);
        assert_relative_eq(ms_to_kmh(10.0), 36.0);
        assert_relative_eq(kmh_to_ms(10_000.0), 2777.777_777_777_778);
    }

    #[test]
    fn conversions_are_inverses() {
        for x in [0.0, 1.0, -42.5, 3.6, 10_000.0, 1e-7, 123_456_789.125] {
            assert_relative_eq(kmh_to_ms(ms_to_kmh(x)), x);
            assert_relative_eq(ms_to_kmh(kmh_to_ms(x)), x);
        }
    }

    #[test]
    fn one_hour_in_seconds() {
        assert_eq!(seconds_to_hours(3600.0), 1.0);
        assert_eq!(seconds_to_hours(0.0), 0.0);
    }
}
