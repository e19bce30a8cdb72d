//! Consumer-owned motion events: metadata, pointer identities, and the
//! sample history the resampler reads and appends to.

use serde::{Deserialize, Serialize};

use super::error::EventError;
use super::types::{Axis, DeviceId, Pointer, PointerCoords, PointerProperties, ToolType};

/// Motion action carried by an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionAction {
    Down,
    Up,
    #[default]
    Move,
    Cancel,
    PointerDown,
    PointerUp,
    HoverMove,
    Scroll,
}

/// Gesture classification assigned by the system, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    #[default]
    None,
    AmbiguousGesture,
    DeepPress,
}

/// Class of device the event originated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    #[default]
    Touchscreen,
    Touchpad,
    Mouse,
    Stylus,
    Unknown,
}

/// One timestamped snapshot of every pointer's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionEventSample {
    pub event_time_ns: i64,
    pub coords: Vec<PointerCoords>,
}

/// A motion event: immutable metadata, one pointer-identity list shared by
/// all samples, and a nonempty chronological sample history.
///
/// Events are built with [`MotionEventBuilder`]; additional samples are
/// attached with [`MotionEvent::append_sample`]. Both enforce that every
/// sample carries exactly one coordinate record per pointer, so an event in
/// circulation always has at least one sample and a consistent pointer
/// count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionEvent {
    id: i32,
    device_id: DeviceId,
    source: InputSource,
    display_id: i32,
    action: MotionAction,
    action_button: u32,
    button_state: u32,
    flags: u32,
    edge_flags: u32,
    classification: Classification,
    meta_state: u32,
    x_precision: f32,
    y_precision: f32,
    down_time_ns: i64,
    pointer_properties: Vec<PointerProperties>,
    samples: Vec<MotionEventSample>,
}

impl MotionEvent {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    pub fn display_id(&self) -> i32 {
        self.display_id
    }

    pub fn action(&self) -> MotionAction {
        self.action
    }

    pub fn action_button(&self) -> u32 {
        self.action_button
    }

    pub fn button_state(&self) -> u32 {
        self.button_state
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn edge_flags(&self) -> u32 {
        self.edge_flags
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn meta_state(&self) -> u32 {
        self.meta_state
    }

    pub fn x_precision(&self) -> f32 {
        self.x_precision
    }

    pub fn y_precision(&self) -> f32 {
        self.y_precision
    }

    pub fn down_time_ns(&self) -> i64 {
        self.down_time_ns
    }

    pub fn pointer_count(&self) -> usize {
        self.pointer_properties.len()
    }

    pub fn pointer_properties(&self) -> &[PointerProperties] {
        &self.pointer_properties
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[MotionEventSample] {
        &self.samples
    }

    /// Event time of the most recent sample.
    pub fn event_time_ns(&self) -> i64 {
        // samples is nonempty by construction
        self.samples[self.samples.len() - 1].event_time_ns
    }

    pub fn historical_event_time_ns(&self, sample_index: usize) -> Option<i64> {
        self.samples.get(sample_index).map(|s| s.event_time_ns)
    }

    pub fn historical_pointer_coords(
        &self,
        sample_index: usize,
        pointer_index: usize,
    ) -> Option<&PointerCoords> {
        self.samples.get(sample_index)?.coords.get(pointer_index)
    }

    /// Attach a new sample at the end of the history.
    ///
    /// `coords` must hold exactly one record per pointer, in the event's
    /// pointer order. No other field of the event is touched.
    pub fn append_sample(
        &mut self,
        event_time_ns: i64,
        coords: Vec<PointerCoords>,
    ) -> Result<(), EventError> {
        if coords.len() != self.pointer_count() {
            return Err(EventError::PointerCountMismatch {
                expected: self.pointer_count(),
                got: coords.len(),
            });
        }
        self.samples.push(MotionEventSample {
            event_time_ns,
            coords,
        });
        Ok(())
    }
}

/// Builds one pointer for [`MotionEventBuilder::pointer`] or an
/// [`crate::event::InputMessage`] pointer array.
#[derive(Debug, Clone)]
pub struct PointerBuilder {
    properties: PointerProperties,
    coords: PointerCoords,
}

impl PointerBuilder {
    pub fn new(id: i32, tool_type: ToolType) -> Self {
        Self {
            properties: PointerProperties::new(id, tool_type),
            coords: PointerCoords::new(),
        }
    }

    pub fn x(mut self, x: f32) -> Self {
        self.coords.set_x(x);
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.coords.set_y(y);
        self
    }

    pub fn axis(mut self, axis: Axis, value: f32) -> Self {
        self.coords.set_axis_value(axis, value);
        self
    }

    pub fn build(self) -> Pointer {
        Pointer::new(self.properties, self.coords)
    }
}

/// Builder for [`MotionEvent`].
///
/// The pointers supplied here form the event's first sample, stamped with
/// the builder's event time; further samples go through
/// [`MotionEvent::append_sample`].
#[derive(Debug, Clone)]
pub struct MotionEventBuilder {
    id: i32,
    device_id: DeviceId,
    source: InputSource,
    display_id: i32,
    action: MotionAction,
    action_button: u32,
    button_state: u32,
    flags: u32,
    edge_flags: u32,
    classification: Classification,
    meta_state: u32,
    x_precision: f32,
    y_precision: f32,
    down_time_ns: i64,
    event_time_ns: i64,
    pointers: Vec<Pointer>,
}

impl MotionEventBuilder {
    pub fn new(action: MotionAction, source: InputSource) -> Self {
        Self {
            id: 0,
            device_id: 0,
            source,
            display_id: 0,
            action,
            action_button: 0,
            button_state: 0,
            flags: 0,
            edge_flags: 0,
            classification: Classification::None,
            meta_state: 0,
            x_precision: 1.0,
            y_precision: 1.0,
            down_time_ns: 0,
            event_time_ns: 0,
            pointers: Vec::new(),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = device_id;
        self
    }

    pub fn display_id(mut self, display_id: i32) -> Self {
        self.display_id = display_id;
        self
    }

    pub fn action_button(mut self, action_button: u32) -> Self {
        self.action_button = action_button;
        self
    }

    pub fn button_state(mut self, button_state: u32) -> Self {
        self.button_state = button_state;
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn edge_flags(mut self, edge_flags: u32) -> Self {
        self.edge_flags = edge_flags;
        self
    }

    pub fn classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    pub fn meta_state(mut self, meta_state: u32) -> Self {
        self.meta_state = meta_state;
        self
    }

    pub fn precision(mut self, x_precision: f32, y_precision: f32) -> Self {
        self.x_precision = x_precision;
        self.y_precision = y_precision;
        self
    }

    pub fn down_time_ns(mut self, down_time_ns: i64) -> Self {
        self.down_time_ns = down_time_ns;
        self
    }

    /// Event time of the first sample.
    pub fn event_time_ns(mut self, event_time_ns: i64) -> Self {
        self.event_time_ns = event_time_ns;
        self
    }

    pub fn pointer(mut self, pointer: PointerBuilder) -> Self {
        self.pointers.push(pointer.build());
        self
    }

    pub fn build(self) -> Result<MotionEvent, EventError> {
        if self.pointers.is_empty() {
            return Err(EventError::NoPointers);
        }
        let (pointer_properties, coords): (Vec<_>, Vec<_>) = self
            .pointers
            .into_iter()
            .map(|pointer| (pointer.properties, pointer.coords))
            .unzip();
        Ok(MotionEvent {
            id: self.id,
            device_id: self.device_id,
            source: self.source,
            display_id: self.display_id,
            action: self.action,
            action_button: self.action_button,
            button_state: self.button_state,
            flags: self.flags,
            edge_flags: self.edge_flags,
            classification: self.classification,
            meta_state: self.meta_state,
            x_precision: self.x_precision,
            y_precision: self.y_precision,
            down_time_ns: self.down_time_ns,
            pointer_properties,
            samples: vec![MotionEventSample {
                event_time_ns: self.event_time_ns,
                coords,
            }],
        })
    }
}
