//! Contains executors of the sorting algorithms, gathering the time & memory metrics
//! reported in [crate::types::MeasurementResult]

pub mod common;
pub mod standard;
