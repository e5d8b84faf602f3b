pub mod catalog;
pub mod error;
pub mod geometry;
pub mod math;
pub mod projection;
pub mod render;

pub use error::{FramegeoError, GeometryError, RenderError, Result};
pub use geometry::{Frame, FrameGeometry, Line};
pub use projection::{project, Projection, Projector, ProjectorConfig, Tube};
