//! CLI command implementations.

pub mod coerce;
pub mod preview;
pub mod profile;
pub mod repair;

mod common;
