//! The ready-made measurement wrappers, one per algorithm, each reporting a fixed set of statistics.\
//! See [measure_algorithm()] for choosing the algorithm & statistics at runtime.

use crate::{
    algorithms::SortAlgorithm,
    api::builder::SortMeasurer,
    probe::ProbeError,
    types::{Metric, MeasurementResult},
};


/// Runs [crate::algorithms::bubble_sort()] `repetitions` times over `input`, reporting `avg_cpu_time` & `avg_rss_bytes`
pub fn measure_bubble_cpu(input: &[i64], repetitions: u32) -> Result<MeasurementResult, ProbeError> {
    measure_algorithm(SortAlgorithm::Bubble, input, repetitions, [Metric::AvgCpuTime, Metric::AvgRssBytes])
}

/// Runs [crate::algorithms::insertion_sort()] `repetitions` times over `input`, reporting `avg_cpu_time` & `avg_rss_bytes`
pub fn measure_insertion_cpu(input: &[i64], repetitions: u32) -> Result<MeasurementResult, ProbeError> {
    measure_algorithm(SortAlgorithm::Insertion, input, repetitions, [Metric::AvgCpuTime, Metric::AvgRssBytes])
}

/// Runs [crate::algorithms::insertion_sort()] `repetitions` times over `input`, reporting `avg_rss_bytes`
/// and `after_rss_bytes` -- the absolute RSS sampled once all repetitions are done
pub fn measure_insertion_memory(input: &[i64], repetitions: u32) -> Result<MeasurementResult, ProbeError> {
    measure_algorithm(SortAlgorithm::Insertion, input, repetitions, [Metric::AvgRssBytes, Metric::AfterRssBytes])
}

/// Runs [crate::algorithms::quick_sort()] `repetitions` times over `input`, reporting `avg_cpu_time` & `avg_rss_bytes`
pub fn measure_quick_cpu(input: &[i64], repetitions: u32) -> Result<MeasurementResult, ProbeError> {
    measure_algorithm(SortAlgorithm::Quick, input, repetitions, [Metric::AvgCpuTime, Metric::AvgRssBytes])
}

/// Measures any `algorithm`, gathering the given `metrics` with the [crate::probe::SystemProbe]
pub fn measure_algorithm(algorithm:   SortAlgorithm,
                         input:       &[i64],
                         repetitions: u32,
                         metrics:     impl IntoIterator<Item=Metric>)
                        -> Result<MeasurementResult, ProbeError> {
    SortMeasurer::new(algorithm)
        .with_repetitions(repetitions)
        .with_metrics(metrics)
        .measure(input)
}
