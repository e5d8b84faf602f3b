use crate::error::GeometryError;

/// Tube lengths and angles describing a bicycle frame.
///
/// Lengths are in millimeters. Angles are in degrees measured from
/// vertical. `top_tube_length` and `fork_rake` are carried for reference
/// only; the projection does not read them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub chainstay_length: f64,
    pub seat_tube_length: f64,
    pub seat_tube_angle: f64,
    pub bb_drop: f64,
    pub top_tube_length: f64,
    pub head_tube_length: f64,
    pub head_tube_angle: f64,
    pub stack: f64,
    pub reach: f64,
    pub seat_stay_offset: f64,
    pub top_tube_seat_offset: f64,
    pub top_tube_head_offset: f64,
    pub down_tube_head_offset: f64,
    pub fork_rake: f64,
    pub wheel_base: f64,
}

impl FrameGeometry {
    /// Number of scalar measurements in a geometry record.
    pub const FIELD_COUNT: usize = 15;

    /// Returns every measurement paired with its field name, in declaration order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, f64); Self::FIELD_COUNT] {
        [
            ("chainstay_length", self.chainstay_length),
            ("seat_tube_length", self.seat_tube_length),
            ("seat_tube_angle", self.seat_tube_angle),
            ("bb_drop", self.bb_drop),
            ("top_tube_length", self.top_tube_length),
            ("head_tube_length", self.head_tube_length),
            ("head_tube_angle", self.head_tube_angle),
            ("stack", self.stack),
            ("reach", self.reach),
            ("seat_stay_offset", self.seat_stay_offset),
            ("top_tube_seat_offset", self.top_tube_seat_offset),
            ("top_tube_head_offset", self.top_tube_head_offset),
            ("down_tube_head_offset", self.down_tube_head_offset),
            ("fork_rake", self.fork_rake),
            ("wheel_base", self.wheel_base),
        ]
    }

    /// Checks that every measurement is a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] naming the first offending field.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(GeometryError::NonFinite { field, value }),
            None => Ok(()),
        }
    }
}

/// A named, colored frame design to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    name: &'static str,
    color: &'static str,
    geometry: FrameGeometry,
}

impl Frame {
    /// Creates a new frame. `name` must be unique within a catalog and
    /// `color` is any CSS color.
    #[must_use]
    pub const fn new(name: &'static str, color: &'static str, geometry: FrameGeometry) -> Self {
        Self {
            name,
            color,
            geometry,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        self.color
    }

    #[must_use]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }
}
