use crate::error::GeometryError;

/// Linear factor mapping millimeters to output pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// The canonical one-to-one factor.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a new scale factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is not finite or not strictly positive.
    pub fn new(factor: f64) -> Result<Self, GeometryError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GeometryError::InvalidScale(factor));
        }
        Ok(Self(factor))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Converts a length in millimeters to pixels.
    #[must_use]
    pub fn apply(self, mm: f64) -> f64 {
        mm * self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let k = ScaleFactor::default();
        assert!((k.factor() - 1.0).abs() < f64::EPSILON);
        assert!((k.apply(430.0) - 430.0).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_is_linear() {
        let k = ScaleFactor::new(1.3).unwrap();
        assert!((k.apply(100.0) - 130.0).abs() < 1e-9);
        assert!((k.apply(-100.0) + 130.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ScaleFactor::new(bad).unwrap_err();
            assert_eq!(err.kind(), "invalid scale");
        }
    }
}
