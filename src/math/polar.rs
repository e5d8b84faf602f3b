use std::f64::consts::PI;

use super::{Point2, ScaleFactor, Vector2};

/// Converts an angle in degrees to radians.
#[must_use]
pub fn rad(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Returns the point reached by walking `distance` millimeters from `start`
/// at angle `alpha`, in degrees from vertical.
///
/// A positive distance walks up and back in screen space (toward `-y` at
/// 0 degrees, toward `-x` at 90 degrees). A negative distance walks the
/// opposite way along the same line.
#[must_use]
pub fn move_along_line(start: Point2, alpha: f64, distance: f64, scale: ScaleFactor) -> Point2 {
    let d = scale.apply(distance);
    let (sin, cos) = rad(alpha).sin_cos();
    start - Vector2::new(d * sin, d * cos)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn rad_converts_common_angles() {
        assert_relative_eq!(rad(0.0), 0.0);
        assert_relative_eq!(rad(90.0), PI / 2.0, epsilon = TOL);
        assert_relative_eq!(rad(180.0), PI, epsilon = TOL);
        assert_relative_eq!(rad(-45.0), -PI / 4.0, epsilon = TOL);
    }

    #[test]
    fn zero_degrees_moves_straight_up() {
        let p = move_along_line(Point2::new(10.0, 20.0), 0.0, 5.0, ScaleFactor::IDENTITY);
        assert_relative_eq!(p, Point2::new(10.0, 15.0), epsilon = TOL);
    }

    #[test]
    fn ninety_degrees_moves_straight_left() {
        let p = move_along_line(Point2::new(10.0, 20.0), 90.0, 5.0, ScaleFactor::IDENTITY);
        assert_relative_eq!(p, Point2::new(5.0, 20.0), epsilon = TOL);
    }

    #[test]
    fn negative_distance_reverses_direction() {
        let start = Point2::new(0.0, 0.0);
        let fwd = move_along_line(start, 73.0, 100.0, ScaleFactor::IDENTITY);
        let back = move_along_line(start, 73.0, -100.0, ScaleFactor::IDENTITY);
        assert_relative_eq!(fwd.coords, -back.coords, epsilon = TOL);
        assert_relative_eq!(nalgebra::distance(&start, &fwd), 100.0, epsilon = TOL);
    }

    #[test]
    fn scale_multiplies_distance() {
        let k = ScaleFactor::new(2.0).unwrap();
        let p = move_along_line(Point2::origin(), 0.0, 5.0, k);
        assert_relative_eq!(p, Point2::new(0.0, -10.0), epsilon = TOL);
    }
}
