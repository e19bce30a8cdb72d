//! Wire-format carrier of a single future sample.

use serde::{Deserialize, Serialize};

use super::types::Pointer;

/// One motion sample as received from the input transport, ahead of the
/// batch currently being consumed. Supplies the upper endpoint when the
/// resampler interpolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMessage {
    pub event_time_ns: i64,
    pub pointers: Vec<Pointer>,
}

impl InputMessage {
    pub fn new(event_time_ns: i64, pointers: Vec<Pointer>) -> Self {
        Self {
            event_time_ns,
            pointers,
        }
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{PointerCoords, PointerProperties, ToolType};

    #[test]
    fn test_pointer_count_matches_pointer_array() {
        let message = InputMessage::new(
            5_000_000,
            vec![
                Pointer::new(
                    PointerProperties::new(0, ToolType::Finger),
                    PointerCoords::from_xy(1.0, 2.0),
                ),
                Pointer::new(
                    PointerProperties::new(1, ToolType::Stylus),
                    PointerCoords::from_xy(3.0, 4.0),
                ),
            ],
        );

        assert_eq!(message.event_time_ns, 5_000_000);
        assert_eq!(message.pointer_count(), 2);
        assert_eq!(message.pointers[1].properties.tool_type, ToolType::Stylus);
    }

    #[test]
    fn test_empty_message_has_no_pointers() {
        let message = InputMessage::new(0, Vec::new());
        assert_eq!(message.pointer_count(), 0);
    }
}
