//! Defines the records returned by this crate's measurement wrappers.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use crate::utils::measurements::presentable_measurements::{bytes_measurement, duration_measurement};


/// The closed set of statistics a measurement may report
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Metric {
    /// average wall-clock seconds spent on each sort call
    AvgCpuTime,
    /// average resident memory change, in bytes, observed across each sort call -- negative if memory was released
    AvgRssBytes,
    /// absolute resident memory, in bytes, sampled once after all repetitions
    AfterRssBytes,
}

impl Metric {

    pub const ALL: [Metric; 3] = [Self::AvgCpuTime, Self::AvgRssBytes, Self::AfterRssBytes];

    /// The canonical statistic name, as used by callers to look it up
    pub fn name(&self) -> &'static str {
        match self {
            Self::AvgCpuTime    => "avg_cpu_time",
            Self::AvgRssBytes   => "avg_rss_bytes",
            Self::AfterRssBytes => "after_rss_bytes",
        }
    }

    /// Reverse of [Self::name()]
    pub fn from_name(name: &str) -> Option<Metric> {
        Self::ALL.into_iter().find(|metric| metric.name() == name)
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Mapping from [Metric] to its measured value -- iteration follows the [Metric] declaration order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Statistics {
    values: BTreeMap<Metric, f64>,
}

impl Statistics {

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, metric: Metric, value: f64) {
        self.values.insert(metric, value);
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    /// Looks up a statistic by its canonical name -- `avg_cpu_time`, `avg_rss_bytes` or `after_rss_bytes`
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        Metric::from_name(name)
            .and_then(|metric| self.get(metric))
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.values.contains_key(&metric)
    }

    pub fn keys(&self) -> impl Iterator<Item=Metric> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item=(Metric, f64)> + '_ {
        self.values.iter().map(|(&metric, &value)| (metric, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut separator = "";
        for (metric, value) in self.iter() {
            let presentable = match metric {
                Metric::AvgCpuTime => duration_measurement(value),
                Metric::AvgRssBytes | Metric::AfterRssBytes => bytes_measurement(value),
            };
            write!(f, "{separator}{metric}={presentable}")?;
            separator = ", ";
        }
        Ok(())
    }
}


/// What a measurement wrapper returns: the sorted output of the last repetition & the averaged statistics.\
/// Built fresh on each call and fully owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementResult {
    pub sorted: Vec<i64>,
    pub statistics: Statistics,
}

impl Display for MeasurementResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} elements sorted; {}", self.sorted.len(), self.statistics)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_name(metric.name()), Some(metric));
        }
        assert_eq!(Metric::from_name("avg_wall_time"), None);
    }

    #[test]
    fn statistics_lookup() {
        let mut statistics = Statistics::new();
        statistics.insert(Metric::AvgRssBytes, -4096.0);
        statistics.insert(Metric::AvgCpuTime, 0.5);
        assert_eq!(statistics.len(), 2);
        assert_eq!(statistics.get_by_name("avg_rss_bytes"), Some(-4096.0));
        assert_eq!(statistics.get(Metric::AvgCpuTime), Some(0.5));
        assert_eq!(statistics.get_by_name("after_rss_bytes"), None);
        assert_eq!(statistics.keys().collect::<Vec<_>>(), vec![Metric::AvgCpuTime, Metric::AvgRssBytes]);
    }

    #[test]
    fn report_line() {
        let mut statistics = Statistics::new();
        statistics.insert(Metric::AvgCpuTime, 0.002);
        statistics.insert(Metric::AvgRssBytes, -2048.0);
        statistics.insert(Metric::AfterRssBytes, 3.0 * 1024.0 * 1024.0);
        let result = MeasurementResult { sorted: vec![1, 3, 5], statistics };
        assert_eq!(result.to_string(), "3 elements sorted; avg_cpu_time=2.000ms, avg_rss_bytes=-2.00KiB, after_rss_bytes=3.00MiB");
    }
}
