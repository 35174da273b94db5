#![doc = include_str!("../README.md")]

pub mod algorithms;
pub mod api;
pub mod configs;
pub mod features;
pub mod probe;
pub mod runners;
pub mod types;
pub mod utils;


// exported symbols
pub use {
    algorithms::{SortAlgorithm, bubble_sort, insertion_sort, quick_sort, is_sorted},
    api::builder::SortMeasurer,
    configs::DEFAULT_REPETITIONS,
    features::OUTPUT,
    probe::{ProcessProbe, ProbeError, SystemProbe},
    runners::standard::{measure_bubble_cpu, measure_insertion_cpu, measure_insertion_memory, measure_quick_cpu, measure_algorithm},
    types::{Metric, Statistics, MeasurementResult},
};
