//! Motion event resampling.
//!
//! A resampler synthesizes at most one extra sample per call, aligned to a
//! caller-chosen target time, so the consumer can hand the renderer a
//! pointer position closer to display time than the last transport sample.

mod legacy;
mod window;

pub use legacy::LegacyResampler;

use crate::event::{InputMessage, MotionEvent};

pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;

const fn millis(ms: i64) -> i64 {
    ms * NANOS_PER_MILLI
}

/// Latency the consumer subtracts from the frame time when choosing a
/// resample target.
pub const RESAMPLE_LATENCY_NS: i64 = millis(5);

/// Smallest inter-sample delta a line may be fitted through.
pub const RESAMPLE_MIN_DELTA_NS: i64 = millis(2);

/// Largest inter-sample delta extrapolation accepts; beyond this the signal
/// is considered stale.
pub const RESAMPLE_MAX_DELTA_NS: i64 = millis(20);

/// Longest forward prediction extrapolation may make past the latest sample.
pub const RESAMPLE_MAX_PREDICTION_NS: i64 = millis(8);

/// Number of observed samples the resampler keeps between calls.
pub const WINDOW_CAPACITY: usize = 2;

/// Ratios around the millisecond-scale thresholds are computed in
/// milliseconds as float.
pub(crate) fn nanos_to_millis_f32(nanos: i64) -> f32 {
    nanos as f32 / NANOS_PER_MILLI as f32
}

/// Capability to resample motion events inside the consumer's dispatch
/// logic.
///
/// Implementations must guarantee that a successful call appends exactly one
/// sample to `motion_event` and changes nothing else, and that a refused
/// call leaves the event untouched. `target_time_ns` is expected to be later
/// than the event's latest sample; `future_sample`, when supplied, must
/// carry a sample later than that as well.
pub trait Resampler {
    fn resample(
        &mut self,
        target_time_ns: i64,
        motion_event: &mut MotionEvent,
        future_sample: Option<&InputMessage>,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_in_nanoseconds() {
        assert_eq!(RESAMPLE_MIN_DELTA_NS, 2_000_000);
        assert_eq!(RESAMPLE_MAX_DELTA_NS, 20_000_000);
        assert_eq!(RESAMPLE_MAX_PREDICTION_NS, 8_000_000);
        assert_eq!(RESAMPLE_LATENCY_NS, 5_000_000);
    }

    #[test]
    fn test_nanos_to_millis_conversion() {
        assert_eq!(nanos_to_millis_f32(2_500_000), 2.5);
        assert_eq!(nanos_to_millis_f32(-1_000_000), -1.0);
    }
}
