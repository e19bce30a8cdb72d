//! Motion event data model consumed and mutated by the resampler.

mod error;
mod message;
mod motion;
mod types;

pub use error::EventError;
pub use message::InputMessage;
pub use motion::{
    Classification, InputSource, MotionAction, MotionEvent, MotionEventBuilder,
    MotionEventSample, PointerBuilder,
};
pub use types::{Axis, DeviceId, Pointer, PointerCoords, PointerProperties, ToolType};
