//! Defines our main API (using the Builder Pattern):
//!
//! ```
//! use int_sort::{SortAlgorithm, SortMeasurer, Metric};
//! let result = SortMeasurer::new(SortAlgorithm::Quick)
//!     .with_repetitions(3)
//!     .with_metrics([Metric::AvgCpuTime, Metric::AvgRssBytes])
//!     .measure(&[5, 3, 1])
//!     .expect("process resources should be available");
//! assert_eq!(result.sorted, vec![1, 3, 5]);
//! ```

use crate::{
    algorithms::SortAlgorithm,
    configs::{DEFAULT_METRICS, DEFAULT_REPETITIONS},
    features::OUTPUT,
    probe::{ProcessProbe, ProbeError, SystemProbe},
    runners::common::run_sorting_passes_verbosely,
    types::{Metric, MeasurementResult},
};


/// Accumulates the configuration for measuring one of the [SortAlgorithm]s
#[derive(Debug, Clone)]
pub struct SortMeasurer<Probe: ProcessProbe = SystemProbe> {
    algorithm:   SortAlgorithm,
    repetitions: u32,
    metrics:     Vec<Metric>,
    probe:       Probe,
}

impl SortMeasurer<SystemProbe> {
    /// Starts with [DEFAULT_REPETITIONS], [DEFAULT_METRICS] and the [SystemProbe]
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self {
            algorithm,
            repetitions: DEFAULT_REPETITIONS,
            metrics:     DEFAULT_METRICS.to_vec(),
            probe:       SystemProbe::new(),
        }
    }
}

impl<Probe: ProcessProbe> SortMeasurer<Probe> {

    /// How many times the algorithm will be run -- statistics are averaged over them.\
    /// `0` is accepted: no measured run happens and all statistics are reported as zero.
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Replaces the statistics to gather. Repeated metrics are only gathered once.
    pub fn with_metrics(mut self, metrics: impl IntoIterator<Item=Metric>) -> Self {
        self.metrics.clear();
        for metric in metrics {
            if !self.metrics.contains(&metric) {
                self.metrics.push(metric);
            }
        }
        self
    }

    /// Samples the process resources through `probe` instead
    pub fn with_probe<OtherProbe: ProcessProbe>(self, probe: OtherProbe) -> SortMeasurer<OtherProbe> {
        SortMeasurer {
            algorithm:   self.algorithm,
            repetitions: self.repetitions,
            metrics:     self.metrics,
            probe,
        }
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Runs & measures the configured algorithm over `input`, which is left untouched.\
    /// A one-line report is sent to [OUTPUT].
    pub fn measure(&self, input: &[i64]) -> Result<MeasurementResult, ProbeError> {
        let algorithm = self.algorithm;
        run_sorting_passes_verbosely(algorithm.name(),
                                     &self.probe,
                                     |sequence: &[i64]| algorithm.sort(sequence),
                                     input,
                                     self.repetitions,
                                     &self.metrics,
                                     OUTPUT)
    }
}
