//! Projection of a frame geometry onto a 2D line diagram.
//!
//! The construction starts at the rear axle (`origin`), solves the chainstay
//! to find the bottom-bracket center, and places every other tube from
//! there. Each step consumes points produced by earlier steps, so inputs are
//! validated up front and the seven segments are returned together or not
//! at all.

mod tubes;

use tracing::{debug, instrument};

use crate::error::{GeometryError, Result};
use crate::geometry::{FrameGeometry, Line};
use crate::math::{Point2, ScaleFactor};

/// The seven segments making up a frame silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tube {
    Chainstay,
    SeatTube,
    HeadTube,
    TopTube,
    DownTube,
    SeatStay,
    Fork,
}

impl Tube {
    /// All tubes, in draw order.
    pub const ALL: [Tube; 7] = [
        Tube::Chainstay,
        Tube::SeatTube,
        Tube::HeadTube,
        Tube::TopTube,
        Tube::DownTube,
        Tube::SeatStay,
        Tube::Fork,
    ];

    /// Returns a stable kebab-case name usable as a rendering key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tube::Chainstay => "chainstay",
            Tube::SeatTube => "seat-tube",
            Tube::HeadTube => "head-tube",
            Tube::TopTube => "top-tube",
            Tube::DownTube => "down-tube",
            Tube::SeatStay => "seat-stay",
            Tube::Fork => "fork",
        }
    }
}

/// A projected frame: seven connected segments in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub chainstay: Line,
    pub seat_tube: Line,
    pub head_tube: Line,
    pub top_tube: Line,
    pub down_tube: Line,
    pub seat_stay: Line,
    pub fork: Line,
}

impl Projection {
    /// Returns the segment for `tube`.
    #[must_use]
    pub fn line(&self, tube: Tube) -> Line {
        match tube {
            Tube::Chainstay => self.chainstay,
            Tube::SeatTube => self.seat_tube,
            Tube::HeadTube => self.head_tube,
            Tube::TopTube => self.top_tube,
            Tube::DownTube => self.down_tube,
            Tube::SeatStay => self.seat_stay,
            Tube::Fork => self.fork,
        }
    }

    /// Returns every segment tagged with its tube, in draw order.
    #[must_use]
    pub fn segments(&self) -> [(Tube, Line); 7] {
        Tube::ALL.map(|tube| (tube, self.line(tube)))
    }

    /// Iterates over all segment endpoints.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        Tube::ALL.into_iter().flat_map(|tube| {
            let line = self.line(tube);
            [line.start(), line.end()]
        })
    }

    /// Returns whether every endpoint is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.segments().iter().all(|(_, line)| line.is_finite())
    }
}

/// Immutable settings for a [`Projector`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectorConfig {
    scale: ScaleFactor,
}

impl ProjectorConfig {
    /// Creates a config with the given millimeter-to-pixel factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not finite and strictly positive.
    pub fn new(scale: f64) -> Result<Self> {
        Ok(Self {
            scale: ScaleFactor::new(scale)?,
        })
    }

    /// Returns the millimeter-to-pixel factor.
    #[must_use]
    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }
}

/// Projects frame geometries with a fixed configuration.
///
/// Holds no mutable state and may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector {
    config: ProjectorConfig,
}

impl Projector {
    #[must_use]
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Computes the seven-segment projection of `geometry` anchored at `origin`.
    ///
    /// `origin` is the rear axle. The chainstay runs from it to the
    /// bottom-bracket center, which anchors the remaining tubes.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any geometry field or origin
    /// coordinate is not finite, or if a projected endpoint overflows (the
    /// error then names the tube). Returns
    /// [`GeometryError::UnsolvableTriangle`] if the chainstay cannot span
    /// the bottom-bracket drop.
    #[instrument(level = "debug", skip_all, fields(scale = self.config.scale.factor()))]
    pub fn project(&self, geometry: &FrameGeometry, origin: Point2) -> Result<Projection> {
        validate_origin(origin)?;
        geometry.validate()?;

        let scale = self.config.scale;
        let chainstay = tubes::chainstay(geometry, origin, scale)?;
        let bb_center = chainstay.end();
        let seat_tube = tubes::seat_tube(geometry, bb_center, scale);
        let head_tube = tubes::head_tube(geometry, bb_center, scale);
        let top_tube = tubes::top_tube(geometry, head_tube.start(), seat_tube.end(), scale);
        let down_tube = tubes::down_tube(geometry, head_tube.end(), bb_center, scale);
        let seat_stay = tubes::seat_stay(geometry, seat_tube.end(), chainstay.start(), scale);
        let fork = tubes::fork(geometry, head_tube.end(), chainstay.start(), scale);

        let projection = Projection {
            chainstay,
            seat_tube,
            head_tube,
            top_tube,
            down_tube,
            seat_stay,
            fork,
        };
        ensure_finite(&projection)?;

        debug!(bb_x = bb_center.x, bb_y = bb_center.y, "projected frame");
        Ok(projection)
    }
}

/// Projects `geometry` at `origin` with the default one-to-one scale.
///
/// # Errors
///
/// See [`Projector::project`].
pub fn project(geometry: &FrameGeometry, origin: Point2) -> Result<Projection> {
    Projector::default().project(geometry, origin)
}

fn validate_origin(origin: Point2) -> std::result::Result<(), GeometryError> {
    for (field, value) in [("origin.x", origin.x), ("origin.y", origin.y)] {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite { field, value });
        }
    }
    Ok(())
}

fn ensure_finite(projection: &Projection) -> std::result::Result<(), GeometryError> {
    for (tube, line) in projection.segments() {
        for point in [line.start(), line.end()] {
            for value in [point.x, point.y] {
                if !value.is_finite() {
                    return Err(GeometryError::NonFinite {
                        field: tube.name(),
                        value,
                    });
                }
            }
        }
    }
    Ok(())
}
