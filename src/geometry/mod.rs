mod frame;
mod line;

pub use frame::{Frame, FrameGeometry};
pub use line::Line;
