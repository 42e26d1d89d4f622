//! Vehicle kinematics CLI library.
//!
//! This crate provides the report formatting used by the `kinematics-cli`
//! binary.

pub mod output;
