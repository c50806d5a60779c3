//! Weighted multi-criteria scoring for large discretionary purchases.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
