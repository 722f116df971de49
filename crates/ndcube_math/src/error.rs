//! Error types for matrix and rotation construction

use std::fmt;

/// Error returned when a rotation or projection is built from bad arguments
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// An axis index is not in `0..dimension`
    AxisOutOfRange { axis: usize, dimension: usize },
    /// Both axes of a rotation plane are the same
    DegeneratePlane { axis: usize },
    /// Operands have different dimensions
    DimensionMismatch { expected: usize, found: usize },
    /// Per-plane angle list does not match the number of planes
    AngleCountMismatch { planes: usize, angles: usize },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::AxisOutOfRange { axis, dimension } => {
                write!(f, "axis {} out of range for dimension {}", axis, dimension)
            }
            MathError::DegeneratePlane { axis } => {
                write!(f, "rotation plane needs two distinct axes, got {} twice", axis)
            }
            MathError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            MathError::AngleCountMismatch { planes, angles } => {
                write!(f, "{} rotation planes but {} angles", planes, angles)
            }
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_out_of_range_display() {
        let err = MathError::AxisOutOfRange { axis: 4, dimension: 3 };
        let msg = err.to_string();
        assert!(msg.contains("axis 4"));
        assert!(msg.contains("dimension 3"));
    }

    #[test]
    fn test_angle_count_display() {
        let err = MathError::AngleCountMismatch { planes: 3, angles: 1 };
        assert_eq!(err.to_string(), "3 rotation planes but 1 angles");
    }
}
