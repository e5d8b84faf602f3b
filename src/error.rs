use thiserror::Error;

/// Top-level error type for frame projection and rendering.
#[derive(Debug, Error)]
pub enum FramegeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised while projecting a frame geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("unsolvable triangle: {field} = {hypotenuse} cannot span a leg of {leg}")]
    UnsolvableTriangle {
        field: &'static str,
        hypotenuse: f64,
        leg: f64,
    },

    #[error("non-finite input: {field} = {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("invalid scale: factor {0} must be finite and positive")]
    InvalidScale(f64),
}

impl GeometryError {
    /// Returns a stable, human-readable name for the error category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsolvableTriangle { .. } => "unsolvable triangle",
            Self::NonFinite { .. } => "non-finite input",
            Self::InvalidScale(_) => "invalid scale",
        }
    }

    /// Returns the name of the offending input field, if there is one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::UnsolvableTriangle { field, .. } | Self::NonFinite { field, .. } => Some(*field),
            Self::InvalidScale(_) => None,
        }
    }
}

/// Errors related to SVG rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render options: {0}")]
    InvalidOptions(String),

    #[error("duplicate frame name: {0}")]
    DuplicateName(String),

    #[error("failed to format svg output")]
    Format(#[from] std::fmt::Error),
}

/// Convenience type alias for results using [`FramegeoError`].
pub type Result<T> = std::result::Result<T, FramegeoError>;
