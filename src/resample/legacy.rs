//! Linear resampling of motion events.
//!
//! [`LegacyResampler`] keeps the last two observed samples across calls and
//! synthesizes one extra sample per invocation: interpolated against a
//! future transport sample when one is available, otherwise extrapolated a
//! bounded distance past the latest sample.

use crate::event::{DeviceId, InputMessage, MotionEvent, Pointer, PointerCoords, ToolType};

use super::window::{Sample, SampleWindow};
use super::{
    nanos_to_millis_f32, Resampler, RESAMPLE_MAX_DELTA_NS, RESAMPLE_MAX_PREDICTION_NS,
    RESAMPLE_MIN_DELTA_NS, WINDOW_CAPACITY,
};

fn lerp(a: f32, b: f32, alpha: f32) -> f32 {
    a + alpha * (b - a)
}

fn can_resample_tool(tool_type: ToolType) -> bool {
    matches!(
        tool_type,
        ToolType::Finger | ToolType::Mouse | ToolType::Stylus | ToolType::Unknown
    )
}

/// Pairwise identity check between the sample being resampled (`target`)
/// and the sample lending the second line endpoint (`auxiliary`). The
/// target may not carry pointers the auxiliary lacks, and every matched
/// pair must agree on id and tool type, with a tool that tracks a single
/// contact.
fn pointers_resampleable(target: &[Pointer], auxiliary: &[Pointer]) -> bool {
    if target.len() > auxiliary.len() {
        return false;
    }
    target.iter().zip(auxiliary.iter()).all(|(t, a)| {
        t.properties.id == a.properties.id
            && t.properties.tool_type == a.properties.tool_type
            && can_resample_tool(t.properties.tool_type)
    })
}

/// Alpha picks which endpoint seeds the axes that are not recomputed.
fn resampled_coords(a: &PointerCoords, b: &PointerCoords, alpha: f32) -> PointerCoords {
    let mut coords = if alpha < 1.0 { a.clone() } else { b.clone() };
    coords.is_resampled = true;
    coords.set_x(lerp(a.x(), b.x(), alpha));
    coords.set_y(lerp(a.y(), b.y(), alpha));
    coords
}

/// Stateful linear resampler.
///
/// Call [`Resampler::resample`] once per event delivery; calls must be
/// serialized by the owner. The resampler survives across events and
/// interactions, and drops its history whenever the event stream switches
/// devices.
#[derive(Debug, Default)]
pub struct LegacyResampler {
    /// Up to the two latest samples observed, refreshed on every call.
    /// Two slots keep the line fit trivial; interpolation only needs the
    /// newest one.
    latest_samples: SampleWindow,
    previous_device_id: Option<DeviceId>,
    debug_logging: bool,
}

impl LegacyResampler {
    pub fn new() -> Self {
        Self::with_debug_logging(false)
    }

    /// `debug_logging` enables per-refusal diagnostics at debug level. The
    /// flag is fixed for the lifetime of the resampler.
    pub fn with_debug_logging(debug_logging: bool) -> Self {
        Self {
            latest_samples: SampleWindow::new(),
            previous_device_id: None,
            debug_logging,
        }
    }

    /// Capture the trailing samples of `motion_event`, every pointer
    /// included, into the history window.
    fn update_latest_samples(&mut self, motion_event: &MotionEvent) {
        let sample_count = motion_event.sample_count();
        let first_ingested = sample_count.saturating_sub(WINDOW_CAPACITY);
        for sample in &motion_event.samples()[first_ingested..] {
            let pointers = motion_event
                .pointer_properties()
                .iter()
                .zip(sample.coords.iter())
                .map(|(properties, coords)| Pointer::new(*properties, coords.clone()))
                .collect();
            self.latest_samples.push_back(Sample {
                event_time_ns: sample.event_time_ns,
                pointers,
            });
        }
    }

    fn attempt_interpolation(
        &self,
        target_time_ns: i64,
        future_sample: &InputMessage,
    ) -> Option<Sample> {
        debug_assert!(
            !self.latest_samples.is_empty(),
            "history must be nonempty after ingest"
        );
        let past = self.latest_samples.latest()?;
        if !pointers_resampleable(&past.pointers, &future_sample.pointers) {
            if self.debug_logging {
                tracing::debug!("not resampled: pointer set changed before future sample");
            }
            return None;
        }
        let delta_ns = future_sample.event_time_ns - past.event_time_ns;
        if delta_ns < RESAMPLE_MIN_DELTA_NS {
            if self.debug_logging {
                tracing::debug!("not resampled: delta {delta_ns}ns is too small");
            }
            return None;
        }

        let alpha = nanos_to_millis_f32(target_time_ns - past.event_time_ns)
            / nanos_to_millis_f32(delta_ns);
        let pointers = past
            .pointers
            .iter()
            .zip(future_sample.pointers.iter())
            .map(|(past_pointer, future_pointer)| {
                Pointer::new(
                    past_pointer.properties,
                    resampled_coords(&past_pointer.coords, &future_pointer.coords, alpha),
                )
            })
            .collect();
        Some(Sample {
            event_time_ns: target_time_ns,
            pointers,
        })
    }

    fn attempt_extrapolation(&self, target_time_ns: i64) -> Option<Sample> {
        if self.latest_samples.len() < WINDOW_CAPACITY {
            if self.debug_logging {
                tracing::debug!("not resampled: not enough data");
            }
            return None;
        }
        let past = self.latest_samples.previous()?;
        let present = self.latest_samples.latest()?;
        if !pointers_resampleable(&present.pointers, &past.pointers) {
            if self.debug_logging {
                tracing::debug!("not resampled: pointer set changed between samples");
            }
            return None;
        }
        let delta_ns = present.event_time_ns - past.event_time_ns;
        if delta_ns < RESAMPLE_MIN_DELTA_NS {
            if self.debug_logging {
                tracing::debug!("not resampled: delta {delta_ns}ns is too small");
            }
            return None;
        }
        if delta_ns > RESAMPLE_MAX_DELTA_NS {
            if self.debug_logging {
                tracing::debug!("not resampled: delta {delta_ns}ns is too large");
            }
            return None;
        }

        // The farthest future time we may predict. A target beyond it is
        // pulled back to the horizon instead of refused.
        let farthest_prediction_ns =
            present.event_time_ns + (delta_ns / 2).min(RESAMPLE_MAX_PREDICTION_NS);
        let effective_time_ns = target_time_ns.min(farthest_prediction_ns);
        if self.debug_logging && effective_time_ns == farthest_prediction_ns {
            tracing::debug!(
                "prediction adjusted from {}ns to {}ns past the latest sample",
                target_time_ns - present.event_time_ns,
                farthest_prediction_ns - present.event_time_ns
            );
        }

        let alpha = nanos_to_millis_f32(effective_time_ns - past.event_time_ns)
            / nanos_to_millis_f32(delta_ns);
        let pointers = present
            .pointers
            .iter()
            .zip(past.pointers.iter())
            .map(|(present_pointer, past_pointer)| {
                Pointer::new(
                    present_pointer.properties,
                    resampled_coords(&past_pointer.coords, &present_pointer.coords, alpha),
                )
            })
            .collect();
        Some(Sample {
            event_time_ns: effective_time_ns,
            pointers,
        })
    }

    fn append_sample_to_event(sample: Sample, motion_event: &mut MotionEvent) {
        let coords = sample
            .pointers
            .into_iter()
            .map(|pointer| pointer.coords)
            .collect();
        // The estimator emits one coordinate record per event pointer, so
        // this only fails if the event mutated mid-call.
        if let Err(err) = motion_event.append_sample(sample.event_time_ns, coords) {
            tracing::error!("dropping resampled sample: {err}");
        }
    }
}

impl Resampler for LegacyResampler {
    fn resample(
        &mut self,
        target_time_ns: i64,
        motion_event: &mut MotionEvent,
        future_sample: Option<&InputMessage>,
    ) {
        if self
            .previous_device_id
            .is_some_and(|id| id != motion_event.device_id())
        {
            self.latest_samples.clear();
        }
        self.previous_device_id = Some(motion_event.device_id());

        self.update_latest_samples(motion_event);

        let sample = match future_sample {
            Some(future_sample) => self.attempt_interpolation(target_time_ns, future_sample),
            None => self.attempt_extrapolation(target_time_ns),
        };
        if let Some(sample) = sample {
            Self::append_sample_to_event(sample, motion_event);
        }
    }
}
