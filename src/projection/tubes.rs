use crate::error::GeometryError;
use crate::geometry::{FrameGeometry, Line};
use crate::math::{move_along_line, Point2, ScaleFactor};

/// Solves the chainstay right triangle. The end point is the bottom-bracket center.
///
/// The horizontal leg is taken as `h * sqrt(1 - (d / h)^2)` so that large
/// lengths do not overflow when squared.
pub(super) fn chainstay(
    geometry: &FrameGeometry,
    origin: Point2,
    scale: ScaleFactor,
) -> Result<Line, GeometryError> {
    let hypotenuse = scale.apply(geometry.chainstay_length);
    let drop = scale.apply(geometry.bb_drop);
    if geometry.chainstay_length <= geometry.bb_drop || drop.abs() > hypotenuse {
        return Err(GeometryError::UnsolvableTriangle {
            field: "chainstay_length",
            hypotenuse: geometry.chainstay_length,
            leg: geometry.bb_drop,
        });
    }
    let run = hypotenuse * (1.0 - (drop / hypotenuse).powi(2)).sqrt();
    Ok(Line::new(origin, Point2::new(origin.x + run, origin.y + drop)))
}

pub(super) fn seat_tube(geometry: &FrameGeometry, bb_center: Point2, scale: ScaleFactor) -> Line {
    let top = move_along_line(
        bb_center,
        geometry.seat_tube_angle,
        geometry.seat_tube_length,
        scale,
    );
    Line::new(bb_center, top)
}

/// Stack and reach place the head tube top directly; the tube then runs
/// down along the head angle.
pub(super) fn head_tube(geometry: &FrameGeometry, bb_center: Point2, scale: ScaleFactor) -> Line {
    let start = Point2::new(
        bb_center.x + scale.apply(geometry.reach),
        bb_center.y - scale.apply(geometry.stack),
    );
    let end = move_along_line(
        start,
        geometry.head_tube_angle,
        -geometry.head_tube_length,
        scale,
    );
    Line::new(start, end)
}

pub(super) fn top_tube(
    geometry: &FrameGeometry,
    head_tube_start: Point2,
    seat_tube_top: Point2,
    scale: ScaleFactor,
) -> Line {
    let start = move_along_line(
        seat_tube_top,
        geometry.seat_tube_angle,
        -geometry.top_tube_seat_offset,
        scale,
    );
    let end = move_along_line(
        head_tube_start,
        geometry.head_tube_angle,
        -geometry.top_tube_head_offset,
        scale,
    );
    Line::new(start, end)
}

pub(super) fn down_tube(
    geometry: &FrameGeometry,
    head_tube_end: Point2,
    bb_center: Point2,
    scale: ScaleFactor,
) -> Line {
    let start = move_along_line(
        head_tube_end,
        geometry.head_tube_angle,
        geometry.down_tube_head_offset,
        scale,
    );
    Line::new(start, bb_center)
}

/// Seat stays leave from the rear axle, not the bottom bracket.
pub(super) fn seat_stay(
    geometry: &FrameGeometry,
    seat_tube_top: Point2,
    rear_axle: Point2,
    scale: ScaleFactor,
) -> Line {
    let end = move_along_line(
        seat_tube_top,
        geometry.seat_tube_angle,
        -geometry.seat_stay_offset,
        scale,
    );
    Line::new(rear_axle, end)
}

/// The front axle sits level with the rear axle at wheelbase distance.
/// Fork rake is not modeled.
pub(super) fn fork(
    geometry: &FrameGeometry,
    head_tube_end: Point2,
    rear_axle: Point2,
    scale: ScaleFactor,
) -> Line {
    let front_axle = Point2::new(rear_axle.x + scale.apply(geometry.wheel_base), rear_axle.y);
    Line::new(head_tube_end, front_axle)
}
