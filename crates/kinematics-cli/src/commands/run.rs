//! Run command handler: evaluate one scenario and print the report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Number, Value};
use tracing::{debug, info};

use kinematics_lib::{parse_quantity, Error as KinematicsError, KinematicsReport, Scenario};

use kinematics_cli::output::{format_diagnostics, OutputFormat};

/// Scenario selection and per-value overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// JSON scenario file; missing fields use the built-in defaults.
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,
    /// Initial velocity in km/h.
    #[arg(long = "velocity", value_name = "KMH", value_parser = parse_velocity, allow_negative_numbers = true)]
    pub velocity_kmh: Option<f64>,
    /// Acceleration in m/s².
    #[arg(long = "acceleration", value_name = "MS2", value_parser = parse_acceleration, allow_negative_numbers = true)]
    pub acceleration_ms2: Option<f64>,
    /// Interval length in seconds.
    #[arg(long = "time", value_name = "SECONDS", value_parser = parse_time, allow_negative_numbers = true)]
    pub elapsed_s: Option<f64>,
    /// Starting position in km.
    #[arg(long = "distance", value_name = "KM", value_parser = parse_distance, allow_negative_numbers = true)]
    pub distance_km: Option<f64>,
    /// Fuel mass in kg.
    #[arg(long = "fuel", value_name = "KG", value_parser = parse_fuel, allow_negative_numbers = true)]
    pub fuel_kg: Option<f64>,
    /// Fuel burn rate in kg/s.
    #[arg(long = "burn-rate", value_name = "KG_PER_S", value_parser = parse_burn_rate, allow_negative_numbers = true)]
    pub burn_rate_kgs: Option<f64>,
}

impl ScenarioArgs {
    /// Build the scenario: file (or defaults) first, then flag overrides.
    pub fn resolve(&self) -> Result<Scenario> {
        let mut scenario = match &self.scenario {
            Some(path) => load_scenario(path)?,
            None => Scenario::default(),
        };

        let overrides = [
            (&mut scenario.velocity_kmh, self.velocity_kmh),
            (&mut scenario.acceleration_ms2, self.acceleration_ms2),
            (&mut scenario.elapsed_s, self.elapsed_s),
            (&mut scenario.distance_km, self.distance_km),
            (&mut scenario.fuel_kg, self.fuel_kg),
            (&mut scenario.burn_rate_kgs, self.burn_rate_kgs),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        debug!(?scenario, "scenario resolved");
        Ok(scenario)
    }
}

/// Load a JSON scenario file.
///
/// Values may be JSON numbers or numeric strings; strings go through
/// [`parse_quantity`], so `"velocity_kmh": "fast"` fails with
/// [`KinematicsError::InvalidArgument`].
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    let mut value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))?;

    if let Value::Object(fields) = &mut value {
        for (name, field) in fields.iter_mut() {
            if let Value::String(raw) = field {
                let quantity = parse_quantity(name, raw)
                    .with_context(|| format!("invalid value in scenario file {}", path.display()))?;
                *field = Number::from_f64(quantity).map(Value::Number).ok_or_else(|| {
                    anyhow::anyhow!("{name} in scenario file {} is not finite", path.display())
                })?;
            }
        }
    }

    serde_json::from_value(value)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))
}

/// Outcome of the run command, used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every value was computed and the tank did not run dry.
    Complete,
    /// At least one value is unavailable or fuel was exhausted.
    Degraded,
}

/// Handle the default run command.
///
/// Prints the report to stdout and any diagnostics to stderr. Failures in
/// individual calculations never abort the run.
pub fn handle_run(args: &ScenarioArgs, format: OutputFormat) -> Result<RunOutcome> {
    let scenario = args.resolve()?;
    let report = KinematicsReport::evaluate(&scenario);

    print!("{}", format.render_report(&report)?);
    for line in format_diagnostics(&report) {
        eprintln!("{line}");
    }

    let outcome = if report.has_failures() || report.fuel_exhausted() {
        RunOutcome::Degraded
    } else {
        RunOutcome::Complete
    };
    info!(?outcome, "run finished");
    Ok(outcome)
}

fn parse_velocity(raw: &str) -> Result<f64, KinematicsError> {
    parse_quantity("velocity", raw)
}

fn parse_acceleration(raw: &str) -> Result<f64, KinematicsError> {
    parse_quantity("acceleration", raw)
}

fn parse_time(raw: &str) -> Result<f64, KinematicsError> {
    parse_quantity("elapsed time", raw)
}

fn parse_distance(raw: &str) -> Result<f64, KinematicsError> {
    parse_quantity("distance", raw)
}

fn parse_fuel(raw: &str) -> Result<f64, KinematicsError> {
    parse_quantity("fuel mass", raw)
}

fn parse_burn_rate(raw: &str) -> Result<f64, KinematicsError> {
    parse_quantity("burn rate", raw)
}
