//! Value types shared by motion events, input messages, and the resampler.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Device identifier carried by motion events.
pub type DeviceId = i32;

/// Motion axes a pointer coordinate record can carry.
///
/// `X` and `Y` are the only axes the resampler recomputes; everything else
/// passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Pressure,
    Size,
    TouchMajor,
    TouchMinor,
    ToolMajor,
    ToolMinor,
    Orientation,
}

/// Tool that produced a pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Unknown,
    #[default]
    Finger,
    Stylus,
    Mouse,
    Eraser,
    Palm,
}

/// Per-pointer identity: stable id for the duration of an interaction plus
/// the tool that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerProperties {
    pub id: i32,
    pub tool_type: ToolType,
}

impl PointerProperties {
    pub fn new(id: i32, tool_type: ToolType) -> Self {
        Self { id, tool_type }
    }
}

/// Axis-keyed coordinate record for one pointer at one sample time.
///
/// Absent axes read as 0.0. `is_resampled` marks records synthesized by the
/// resampler rather than received from the transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerCoords {
    values: BTreeMap<Axis, f32>,
    pub is_resampled: bool,
}

impl PointerCoords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record holding only `X` and `Y`.
    pub fn from_xy(x: f32, y: f32) -> Self {
        let mut coords = Self::new();
        coords.set_axis_value(Axis::X, x);
        coords.set_axis_value(Axis::Y, y);
        coords
    }

    /// Read an axis value; 0.0 when the axis was never set.
    pub fn axis_value(&self, axis: Axis) -> f32 {
        self.values.get(&axis).copied().unwrap_or(0.0)
    }

    pub fn set_axis_value(&mut self, axis: Axis, value: f32) {
        self.values.insert(axis, value);
    }

    pub fn x(&self) -> f32 {
        self.axis_value(Axis::X)
    }

    pub fn y(&self) -> f32 {
        self.axis_value(Axis::Y)
    }

    pub fn set_x(&mut self, x: f32) {
        self.set_axis_value(Axis::X, x);
    }

    pub fn set_y(&mut self, y: f32) {
        self.set_axis_value(Axis::Y, y);
    }

    /// Iterate over the axes that have been set.
    pub fn axes(&self) -> impl Iterator<Item = (Axis, f32)> + '_ {
        self.values.iter().map(|(axis, value)| (*axis, *value))
    }
}

/// One pointer inside a sample: identity plus coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub properties: PointerProperties,
    pub coords: PointerCoords,
}

impl Pointer {
    pub fn new(properties: PointerProperties, coords: PointerCoords) -> Self {
        Self { properties, coords }
    }
}
