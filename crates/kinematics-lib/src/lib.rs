//! Vehicle kinematics library entry points.
//!
//! This crate computes the state of a single vehicle after one fixed time
//! interval: new velocity, new position, and remaining fuel. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing the formulas.
//!

#![deny(warnings)]

pub mod error;
pub mod fuel;
pub mod kinematics;
pub mod report;
pub mod scenario;
pub mod units;
mod validate;

pub use error::{Error, Result};
pub use fuel::{endurance_s, update_fuel, FuelUpdate};
pub use kinematics::{update_distance, update_velocity};
pub use report::{Failure, KinematicsReport, Quantity};
pub use scenario::Scenario;
pub use units::{kmh_to_ms, ms_to_kmh, seconds_to_hours};
pub use validate::parse_quantity;
