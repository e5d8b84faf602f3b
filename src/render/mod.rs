//! SVG rendering of projected frames with a name-to-color legend.
//!
//! Rendering is a pure function: it returns the document as a `String` and
//! performs no I/O.

mod svg;

use std::collections::HashSet;
use std::fmt::Write;

use tracing::{info, warn};

use crate::error::{FramegeoError, RenderError, Result};
use crate::geometry::{Frame, Line};
use crate::math::Point2;
use crate::projection::{Projection, Projector, ProjectorConfig};

use svg::{slug, write_preamble, write_segment, xml_escape, Stroke};

const LEGEND_X: f64 = 10.0;
const LEGEND_Y: f64 = 10.0;
const LEGEND_ROW: f64 = 20.0;
const SWATCH: f64 = 14.0;

/// What to do when a frame cannot be projected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop rendering and return the first error.
    #[default]
    Abort,
    /// Log a warning and leave the frame out of the drawing and legend.
    Skip,
}

/// Page layout and stroke styling for [`render_svg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Rear-axle anchor shared by every frame.
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub stroke_opacity: f64,
    /// Extra pixel multiplier applied around `origin` after projection.
    pub multiplier: f64,
    pub projector: ProjectorConfig,
    pub error_policy: ErrorPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            origin: Point2::new(30.0, 580.0),
            width: 1200.0,
            height: 700.0,
            stroke_width: 5.0,
            stroke_opacity: 0.5,
            multiplier: 1.0,
            projector: ProjectorConfig::default(),
            error_policy: ErrorPolicy::Abort,
        }
    }
}

impl RenderOptions {
    /// Checks that the page size, stroke and multiplier are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidOptions`] describing the first bad value.
    pub fn validate(&self) -> std::result::Result<(), RenderError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("stroke_width", self.stroke_width),
            ("multiplier", self.multiplier),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RenderError::InvalidOptions(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(RenderError::InvalidOptions(format!(
                "stroke_opacity must be within [0, 1], got {}",
                self.stroke_opacity
            )));
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(RenderError::InvalidOptions("origin must be finite".to_owned()));
        }
        Ok(())
    }

    fn magnify(&self, line: Line) -> Line {
        let m = self.multiplier;
        let o = self.origin;
        Line::new(o + (line.start() - o) * m, o + (line.end() - o) * m)
    }
}

/// Legend entry pairing a frame's name with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

/// Returns the legend entries for `frames`, in draw order.
#[must_use]
pub fn legend(frames: &[Frame]) -> Vec<LegendEntry<'static>> {
    frames.iter().map(LegendEntry::from).collect()
}

impl From<&Frame> for LegendEntry<'static> {
    fn from(frame: &Frame) -> Self {
        Self {
            name: frame.name(),
            color: frame.color(),
        }
    }
}

/// Renders `frames` into a standalone SVG document.
///
/// Each frame becomes a `<g>` of seven stroked paths, drawn in catalog
/// order, followed by a legend mapping names to colors.
///
/// # Errors
///
/// Returns [`RenderError::InvalidOptions`] for unusable options,
/// [`RenderError::DuplicateName`] if two frames share a name, and the
/// projection error of the first bad frame under [`ErrorPolicy::Abort`].
pub fn render_svg(frames: &[Frame], options: &RenderOptions) -> Result<String> {
    options.validate()?;
    check_unique_names(frames)?;

    let projector = Projector::new(options.projector);
    let mut drawn: Vec<(&Frame, Projection)> = Vec::with_capacity(frames.len());
    for frame in frames {
        match projector.project(frame.geometry(), options.origin) {
            Ok(projection) => drawn.push((frame, projection)),
            Err(FramegeoError::Geometry(err)) if options.error_policy == ErrorPolicy::Skip => {
                warn!(frame = frame.name(), error = %err, "skipping frame");
            }
            Err(err) => return Err(err),
        }
    }

    let mut out = String::new();
    let mut ids = HashSet::with_capacity(drawn.len());
    write_preamble(&mut out, options.width, options.height)?;
    for (frame, projection) in &drawn {
        let id = unique_id(&mut ids, frame.name());
        write_frame(&mut out, &id, frame, projection, options)?;
    }
    let entries: Vec<_> = drawn.iter().map(|(frame, _)| LegendEntry::from(*frame)).collect();
    write_legend(&mut out, &entries)?;
    writeln!(out, "</svg>").map_err(RenderError::from)?;

    info!(
        drawn = drawn.len(),
        skipped = frames.len() - drawn.len(),
        "rendered frame comparison"
    );
    Ok(out)
}

fn check_unique_names(frames: &[Frame]) -> std::result::Result<(), RenderError> {
    let mut seen = HashSet::with_capacity(frames.len());
    for frame in frames {
        if !seen.insert(frame.name()) {
            return Err(RenderError::DuplicateName(frame.name().to_owned()));
        }
    }
    Ok(())
}

/// Slugs `name` into an id, suffixing a counter when two names slug alike.
fn unique_id(taken: &mut HashSet<String>, name: &str) -> String {
    let base = slug(name);
    let mut id = base.clone();
    let mut n = 2;
    while !taken.insert(id.clone()) {
        id = format!("{base}-{n}");
        n += 1;
    }
    id
}

fn write_frame(
    out: &mut String,
    id: &str,
    frame: &Frame,
    projection: &Projection,
    options: &RenderOptions,
) -> std::result::Result<(), RenderError> {
    let stroke = Stroke {
        color: frame.color(),
        width: options.stroke_width,
        opacity: options.stroke_opacity,
    };
    writeln!(
        out,
        r#"  <g class="frame" id="{id}" data-name="{}">"#,
        xml_escape(frame.name())
    )?;
    for (tube, line) in projection.segments() {
        write_segment(out, tube.name(), &options.magnify(line), &stroke)?;
    }
    writeln!(out, "  </g>")?;
    Ok(())
}

fn write_legend(out: &mut String, entries: &[LegendEntry<'_>]) -> std::result::Result<(), RenderError> {
    writeln!(out, r#"  <g class="legend">"#)?;
    let mut y = LEGEND_Y;
    for entry in entries {
        writeln!(
            out,
            r#"    <rect x="{LEGEND_X}" y="{y}" width="{SWATCH}" height="{SWATCH}" fill="{}"/>"#,
            xml_escape(entry.color),
        )?;
        writeln!(
            out,
            r#"    <text x="{}" y="{}" font-family="sans-serif" font-size="12">{}</text>"#,
            LEGEND_X + SWATCH + 6.0,
            y + SWATCH - 2.0,
            xml_escape(entry.name),
        )?;
        y += LEGEND_ROW;
    }
    writeln!(out, "  </g>")?;
    Ok(())
}
