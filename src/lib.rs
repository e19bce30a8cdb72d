//! touch-resampler - motion event resampling for low-latency input delivery
//!
//! An input consumer hands each motion event it is about to dispatch to a
//! [`Resampler`] together with a target time (typically the next frame time
//! minus [`RESAMPLE_LATENCY_NS`]). When the recent sample stream supports
//! it, the resampler appends one synthesized sample aligned to that target,
//! so the position the renderer sees is closer to where the finger actually
//! is at display time.

pub mod event;
pub mod resample;

pub use event::{
    Axis, Classification, DeviceId, EventError, InputMessage, InputSource, MotionAction,
    MotionEvent, MotionEventBuilder, MotionEventSample, Pointer, PointerBuilder, PointerCoords,
    PointerProperties, ToolType,
};
pub use resample::{
    LegacyResampler, Resampler, RESAMPLE_LATENCY_NS, RESAMPLE_MAX_DELTA_NS,
    RESAMPLE_MAX_PREDICTION_NS, RESAMPLE_MIN_DELTA_NS, WINDOW_CAPACITY,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for binaries and harnesses embedding the crate.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "touch_resampler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
