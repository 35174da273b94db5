//! Contains the sampling loop shared by every measurement wrapper:
//! sample before, sort, sample after, accumulate -- then average across repetitions.

use crate::{
    probe::{ProcessProbe, ProbeError},
    types::{Metric, Statistics, MeasurementResult},
};
use std::hint::black_box;


/// wrap around the original [run_sorting_passes()] to output the resulting report
pub fn run_sorting_passes_verbosely<_OutputClosure: FnMut(&str)>
                                   (measurement_name: &str,
                                    probe:            &(impl ProcessProbe + ?Sized),
                                    sort_fn:          impl FnMut(&[i64]) -> Vec<i64>,
                                    input:            &[i64],
                                    repetitions:      u32,
                                    metrics:          &[Metric],
                                    mut output:       _OutputClosure)
                                   -> Result<MeasurementResult, ProbeError> {
    let measurement_result = run_sorting_passes(probe, sort_fn, input, repetitions, metrics)?;
    output(&format!("'{}' x{}: {}\n", measurement_name, repetitions, measurement_result));
    Ok(measurement_result)
}

/// Runs `sort_fn` over `input` for `repetitions` times, bracketing each call with the samples needed by `metrics`.\
/// Returns the sorted output of the last repetition along with the average of each requested metric
/// -- or, for `repetitions == 0`, zeroed statistics along with the output of a single, unmeasured call.
///
/// Repetitions are strictly sequential: pass `k`'s "before" samples observe the process after pass `k-1` completed.
pub fn run_sorting_passes(probe:       &(impl ProcessProbe + ?Sized),
                          mut sort_fn: impl FnMut(&[i64]) -> Vec<i64>,
                          input:       &[i64],
                          repetitions: u32,
                          metrics:     &[Metric])
                         -> Result<MeasurementResult, ProbeError> {

    let mut statistics = Statistics::new();

    if repetitions == 0 {
        for &metric in metrics {
            statistics.insert(metric, 0.0);
        }
        return Ok(MeasurementResult { sorted: sort_fn(input), statistics })
    }

    let sample_time   = metrics.contains(&Metric::AvgCpuTime);
    let sample_memory = metrics.contains(&Metric::AvgRssBytes);

    let mut elapsed_seconds_sum = 0.0f64;
    let mut rss_delta_sum = 0i128;
    let mut sorted = Vec::new();
    for _ in 0..repetitions {
        let pass_result = run_sync_pass(probe, &mut sort_fn, input, sample_time, sample_memory)?;
        elapsed_seconds_sum += pass_result.elapsed_seconds;
        rss_delta_sum       += pass_result.rss_delta_bytes;
        sorted = pass_result.sorted;
    }

    if sample_time {
        statistics.insert(Metric::AvgCpuTime, elapsed_seconds_sum / repetitions as f64);
    }
    if sample_memory {
        statistics.insert(Metric::AvgRssBytes, rss_delta_sum as f64 / repetitions as f64);
    }
    if metrics.contains(&Metric::AfterRssBytes) {
        statistics.insert(Metric::AfterRssBytes, probe.resident_memory_bytes()? as f64);
    }

    Ok(MeasurementResult { sorted, statistics })
}

/// Runs a single pass of the given `sort_fn`, sampling wall-clock and/or resident memory
/// immediately before & after it, as requested.
fn run_sync_pass(probe:         &(impl ProcessProbe + ?Sized),
                 sort_fn:       &mut impl FnMut(&[i64]) -> Vec<i64>,
                 input:         &[i64],
                 sample_time:   bool,
                 sample_memory: bool)
                -> Result<PassResult, ProbeError> {

    let rss_before = if sample_memory { probe.resident_memory_bytes()? } else { 0 };
    let start      = if sample_time   { Some(probe.wall_clock()) } else { None };
    let sorted     = black_box(sort_fn(black_box(input)));
    let end        = if sample_time   { Some(probe.wall_clock()) } else { None };
    let rss_after  = if sample_memory { probe.resident_memory_bytes()? } else { 0 };

    let elapsed_seconds = match (start, end) {
        (Some(start), Some(end)) => end.saturating_sub(start).as_secs_f64(),
        _ => 0.0,
    };

    Ok(PassResult {
        sorted,
        elapsed_seconds,
        rss_delta_bytes: rss_after as i128 - rss_before as i128,
    })
}

/// contains the measurements for a pass done in [run_sync_pass()]
struct PassResult {
    sorted:          Vec<i64>,
    elapsed_seconds: f64,
    rss_delta_bytes: i128,
}
