//! Error types for geometry generation and view parameters

use std::fmt;
use ndcube_math::MathError;

/// Error building hypercube geometry
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Dimension exceeds what the generator will enumerate
    DimensionTooLarge { dimension: usize, max: usize },
    /// Size is not a positive finite number
    InvalidSize(f64),
    /// Rotation or projection construction failed
    Math(MathError),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DimensionTooLarge { dimension, max } => {
                write!(f, "dimension {} exceeds generator limit {}", dimension, max)
            }
            GeometryError::InvalidSize(s) => write!(f, "invalid hypercube size: {}", s),
            GeometryError::Math(err) => write!(f, "math error: {}", err),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::Math(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MathError> for GeometryError {
    fn from(err: MathError) -> Self {
        GeometryError::Math(err)
    }
}

/// Rejected view parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Dimension outside `1..=max`
    InvalidDimension { value: i64, max: usize },
    /// Size is not a positive finite number
    InvalidSize(f64),
    /// Speed is not finite
    InvalidSpeed(f64),
    /// Recursion depth must be at least 1
    InvalidRecursionDepth(usize),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::InvalidDimension { value, max } => {
                write!(f, "dimension {} not in 1..={}", value, max)
            }
            ParamError::InvalidSize(s) => write!(f, "size must be positive and finite, got {}", s),
            ParamError::InvalidSpeed(s) => write!(f, "speed must be finite, got {}", s),
            ParamError::InvalidRecursionDepth(d) => {
                write!(f, "recursion depth must be at least 1, got {}", d)
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Any error surfaced by the animator
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    Param(ParamError),
    Geometry(GeometryError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Param(err) => write!(f, "{}", err),
            CoreError::Geometry(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::Param(err) => Some(err),
            CoreError::Geometry(err) => Some(err),
        }
    }
}

impl From<ParamError> for CoreError {
    fn from(err: ParamError) -> Self {
        CoreError::Param(err)
    }
}

impl From<GeometryError> for CoreError {
    fn from(err: GeometryError) -> Self {
        CoreError::Geometry(err)
    }
}

impl From<MathError> for CoreError {
    fn from(err: MathError) -> Self {
        CoreError::Geometry(GeometryError::Math(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::DimensionTooLarge { dimension: 30, max: 20 };
        assert_eq!(err.to_string(), "dimension 30 exceeds generator limit 20");
        assert!(GeometryError::InvalidSize(-1.0).to_string().contains("-1"));
    }

    #[test]
    fn test_param_error_display() {
        let err = ParamError::InvalidDimension { value: 0, max: 10 };
        assert_eq!(err.to_string(), "dimension 0 not in 1..=10");
    }

    #[test]
    fn test_error_source() {
        let math = MathError::DegeneratePlane { axis: 1 };
        let err: GeometryError = math.clone().into();
        assert!(err.source().is_some());
        assert!(GeometryError::InvalidSize(0.0).source().is_none());

        let core: CoreError = math.into();
        assert!(matches!(core, CoreError::Geometry(GeometryError::Math(_))));
    }

    #[test]
    fn test_from_param_error() {
        let core: CoreError = ParamError::InvalidSpeed(f64::NAN).into();
        match core {
            CoreError::Param(ParamError::InvalidSpeed(s)) => assert!(s.is_nan()),
            _ => panic!("Expected Param variant"),
        }
    }
}
