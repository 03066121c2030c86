//! Math error types
//!
//! Every failure here is a deterministic function of the input values, so
//! callers get a value back instead of a matrix full of NaN/Infinity.

use std::fmt;

/// Error type for matrix construction and inversion
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Projection bounds or parameters that would divide by zero or are out of range
    Domain(String),
    /// Determinant is zero (or close enough to zero that the inverse is meaningless)
    SingularMatrix {
        /// The determinant that triggered the failure
        determinant: f32,
    },
}

impl MathError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        MathError::Domain(msg.into())
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Domain(msg) => write!(f, "Domain error: {}", msg),
            MathError::SingularMatrix { determinant } => {
                write!(f, "Singular matrix: determinant {} has no inverse", determinant)
            }
        }
    }
}

impl std::error::Error for MathError {}
