//! Bounded history of the most recently observed samples.

use std::collections::VecDeque;

use crate::event::Pointer;

use super::WINDOW_CAPACITY;

/// One observed snapshot of every pointer, as captured from a motion event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sample {
    pub event_time_ns: i64,
    pub pointers: Vec<Pointer>,
}

/// Insertion-ordered buffer of the last [`WINDOW_CAPACITY`] samples.
///
/// Two points are enough to fit a line: extrapolation uses both slots,
/// interpolation uses the newest slot plus the supplied future sample.
#[derive(Debug, Default)]
pub(crate) struct SampleWindow {
    samples: VecDeque<Sample>,
}

impl SampleWindow {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(WINDOW_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push_back(&mut self, sample: Sample) {
        if self.samples.len() == WINDOW_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Second most recent sample.
    pub fn previous(&self) -> Option<&Sample> {
        if self.samples.len() < 2 {
            return None;
        }
        self.samples.get(self.samples.len() - 2)
    }
}
