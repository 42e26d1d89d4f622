//! Output formatting for kinematics reports.
//!
//! This module renders a [`KinematicsReport`] either as the three-line
//! human-readable summary or as pretty-printed JSON.

use anyhow::Result;
use clap::ValueEnum;

use kinematics_lib::{KinematicsReport, Quantity};

/// Placeholder shown in place of a value whose calculation failed.
pub const UNAVAILABLE: &str = "N/A";

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Three lines of text, two decimals each.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

impl OutputFormat {
    /// Render `report` in this format.
    pub fn render_report(self, report: &KinematicsReport) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(format_report_text(report)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(report)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

/// Format a value with two decimals and its unit, or [`UNAVAILABLE`].
pub fn format_quantity(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.2} {unit}"),
        None => UNAVAILABLE.to_string(),
    }
}

/// Render the three corrected values, one per line.
pub fn format_report_text(report: &KinematicsReport) -> String {
    format!(
        "Corrected velocity: {}\nCorrected distance: {}\nCorrected remaining fuel: {}\n",
        format_quantity(report.velocity_kmh, "km/h"),
        format_quantity(report.distance_km, "km"),
        format_quantity(report.remaining_fuel_kg(), "kg"),
    )
}

/// Lines explaining missing values and warnings, intended for stderr.
pub fn format_diagnostics(report: &KinematicsReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .failures
        .iter()
        .map(|failure| {
            format!(
                "error: {} unavailable: {}",
                failure.quantity.label(),
                failure.message
            )
        })
        .collect();

    lines.extend(
        report
            .warnings
            .iter()
            .map(|warning| format!("warning: {warning}")),
    );

    if report.fuel_exhausted() {
        if let Some(after) = report.fuel.and_then(|fuel| fuel.exhausted_after_s) {
            lines.push(format!(
                "warning: {} reached zero after {after:.2} s",
                Quantity::Fuel.label()
            ));
        }
    }

    lines
}
