//! Resting place for [PresentableMeasurement]

use std::borrow::Cow;
use std::fmt::Display;
use once_cell::sync::Lazy;

/// := (threshold, scale, unit, format)
type AutoScaleEntry = (f64, f64, Cow<'static, str>, &'static str);

/// Holds and present custom unit measurements with auto-scaling.\
/// Scales are chosen by the magnitude of the value, so negative quantities (freed memory) keep their sign.
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    auto_scale: &'static [AutoScaleEntry],
}

impl Display for PresentableMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let magnitude = self.value.abs();
        let (scaled_value, suffix, format) = self.auto_scale.iter()
            .find(|&&(threshold, _, _, _)| magnitude >= threshold)
            .map_or(
                (self.value, &Cow::Borrowed("<missing_unit_suffix_please_fix>"), ":.2"),
                |(_threshold, rate, suffix, format)| (self.value / rate, suffix, *format));
        match format {
            ":.0"  => write!(f, "{:.0}{}",  scaled_value, suffix),
            ":.2"  => write!(f, "{:.2}{}",  scaled_value, suffix),
            ":.3"  => write!(f, "{:.3}{}",  scaled_value, suffix),
            _ => panic!("Unknown format '{format}'. Please update this code")
        }
    }
}

/// Builds the auto scale table for a `threshold == scale` unit ladder, ending on a zero threshold entry
fn auto_scale_ladder(ladder: &[(f64, &'static str, &'static str)]) -> Vec<AutoScaleEntry> {
    ladder.iter()
        .map(|&(threshold, suffix, format)| (
            threshold,
            if threshold != 0.0 { threshold } else { 1.0 },
            Cow::Borrowed(suffix),
            format
        ))
        .collect()
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a duration, in seconds".
pub fn duration_measurement(seconds: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| auto_scale_ladder(&[
        (1.0,  "s",  ":.3"),
        (1e-3, "ms", ":.3"),
        (1e-6, "µs", ":.3"),
        (1e-9, "ns", ":.0"),
        (0.0,  "s",  ":.0"),
    ]));

    PresentableMeasurement {
        value: seconds,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a number of bytes" -- negative if memory was released.
pub fn bytes_measurement(value: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| auto_scale_ladder(&[
        ((1u64<<40) as f64, "TiB", ":.2"),
        ((1u64<<30) as f64, "GiB", ":.2"),
        ((1u64<<20) as f64, "MiB", ":.2"),
        ((1u64<<10) as f64, "KiB", ":.2"),
        (1.0,               "b",   ":.0"),
        (0.0,               "b",   ":.0"),
    ]));

    PresentableMeasurement {
        value,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_measurement() {
        let expected_representations = [
            (       0.0,  "0s"       ),
            (      60.0,  "60.000s"  ),
            (      1.25,  "1.250s"   ),
            (     0.001,  "1.000ms"  ),
            ( 0.0000015,  "1.500µs"  ),
            (    42e-9,   "42ns"     ),
        ];
        let measurement_fn = duration_measurement;
        for (value, expected_representation) in expected_representations {
            let observed_representation = measurement_fn(value).to_string();
            assert_eq!(&observed_representation, expected_representation, "Measurement representation doesn't match");
        }
    }

    #[test]
    fn test_bytes_measurement() {
        let expected_representations = [
            (                               0.0, "0b"       ),
            (                             10.15, "10b"      ),
            (                            -10.15, "-10b"     ),
            (                      1024.0*10.15, "10.15KiB" ),
            (                     -1024.0*10.15, "-10.15KiB"),
            (               1024.0*1024.0*10.15, "10.15MiB" ),
            (        1024.0*1024.0*1024.0*10.15, "10.15GiB" ),
            ( 1024.0*1024.0*1024.0*1024.0*10.15, "10.15TiB" ),
        ];
        let measurement_fn = bytes_measurement;
        for (value, expected_representation) in expected_representations {
            let observed_representation = measurement_fn(value).to_string();
            assert_eq!(&observed_representation, expected_representation, "Measurement representation doesn't match");
        }
    }
}
