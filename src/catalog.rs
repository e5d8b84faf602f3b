//! Built-in frame designs to compare.

use crate::geometry::{Frame, FrameGeometry};

static FRAMES: [Frame; 3] = [
    Frame::new(
        "Jamis Renegade Exploit",
        "gray",
        FrameGeometry {
            chainstay_length: 430.0,
            seat_tube_length: 560.0,
            seat_tube_angle: 73.0,
            bb_drop: 72.0,
            top_tube_length: 570.0,
            head_tube_length: 163.0,
            head_tube_angle: 71.5,
            stack: 595.0,
            reach: 387.0,
            seat_stay_offset: 20.0,
            top_tube_seat_offset: 20.0,
            top_tube_head_offset: 20.0,
            down_tube_head_offset: 20.0,
            fork_rake: 53.0,
            wheel_base: 1042.0,
        },
    ),
    Frame::new(
        "Raleigh Tamland 2",
        "lightblue",
        FrameGeometry {
            chainstay_length: 440.0,
            seat_tube_length: 560.0,
            seat_tube_angle: 73.0,
            bb_drop: 75.0,
            top_tube_length: 560.0,
            head_tube_length: 160.0,
            head_tube_angle: 71.5,
            stack: 590.0,
            reach: 380.0,
            seat_stay_offset: 20.0,
            top_tube_seat_offset: 20.0,
            top_tube_head_offset: 20.0,
            down_tube_head_offset: 20.0,
            fork_rake: 52.0,
            wheel_base: 1043.0,
        },
    ),
    Frame::new(
        "Cinelli Zydeco",
        "black",
        FrameGeometry {
            chainstay_length: 440.0,
            seat_tube_length: 560.0,
            seat_tube_angle: 73.5,
            bb_drop: 70.0,
            top_tube_length: 560.0,
            head_tube_length: 160.0,
            head_tube_angle: 72.0,
            stack: 572.0,
            reach: 390.0,
            seat_stay_offset: 20.0,
            top_tube_seat_offset: 20.0,
            top_tube_head_offset: 20.0,
            down_tube_head_offset: 20.0,
            fork_rake: 47.0,
            wheel_base: 1037.0,
        },
    ),
];

/// Returns the catalog in draw and legend order.
#[must_use]
pub fn frames() -> &'static [Frame] {
    &FRAMES
}

/// Looks up a catalog frame by its name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Frame> {
    FRAMES.iter().find(|frame| frame.name() == name)
}
