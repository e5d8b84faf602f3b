mod polar;
mod scale;

pub use polar::{move_along_line, rad};
pub use scale::ScaleFactor;

/// 2D point type, in projected pixel space.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
