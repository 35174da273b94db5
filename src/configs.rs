//! Contains constants used throughout this crate

use crate::types::Metric;

/// How many times a measurement wrapper runs the sort when the caller doesn't say otherwise
pub const DEFAULT_REPETITIONS: u32 = 1;

/// Statistics gathered by [crate::api::builder::SortMeasurer] unless overridden
pub const DEFAULT_METRICS: [Metric; 2] = [Metric::AvgCpuTime, Metric::AvgRssBytes];
