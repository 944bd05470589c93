//! Error types for quadrature operations.

use std::fmt;

/// Result type for quadrature operations.
pub type QuadratureResult<T> = Result<T, QuadratureError>;

/// Errors that can occur during numerical quadrature.
#[derive(Debug, Clone)]
pub enum QuadratureError {
    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// The refinement loop did not converge within the allowed doublings.
    DidNotConverge {
        refinements: u32,
        tolerance: f64,
        context: String,
    },
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::DidNotConverge {
                refinements,
                tolerance,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} refinements (tolerance: {:.2e})",
                    context, refinements, tolerance
                )
            }
        }
    }
}

impl std::error::Error for QuadratureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuadratureError::InvalidParameter {
            parameter: "delta".to_string(),
            message: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("Invalid parameter"));
        assert!(err.to_string().contains("delta"));

        let err = QuadratureError::DidNotConverge {
            refinements: 30,
            tolerance: 1e-12,
            context: "adaptive_integrate".to_string(),
        };
        assert!(err.to_string().contains("did not converge"));
        assert!(err.to_string().contains("30"));
    }
}
