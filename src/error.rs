//! Error types for the Love number integrator.
//!
//! Input problems are reported before any integration step runs. Numeric
//! failures carry the [`IntegrationPoint`] where a divisor vanished or a
//! non-finite value appeared.

use std::fmt;

use thiserror::Error;

/// Errors produced while validating a profile or integrating it.
#[derive(Debug, Error)]
pub enum LoveError {
    /// Radius and density sequences differ in length.
    #[error("radius and density sequences must have equal length (got {radii} radii, {densities} densities)")]
    LengthMismatch { radii: usize, densities: usize },

    /// Fewer than two samples; a single point cannot be integrated.
    #[error("at least 2 samples are required (got {len})")]
    TooFewPoints { len: usize },

    #[error("all radii must be strictly positive (radius[{index}] = {value})")]
    NonPositiveRadius { index: usize, value: f64 },

    #[error("all radii must be finite (radius[{index}] = {value})")]
    NonFiniteRadius { index: usize, value: f64 },

    #[error("radii must be strictly increasing (radius[{index}] = {value} after {prev})")]
    NonIncreasingRadius { index: usize, prev: f64, value: f64 },

    #[error("all densities must be non-negative (density[{index}] = {value})")]
    NegativeDensity { index: usize, value: f64 },

    #[error("all densities must be finite (density[{index}] = {value})")]
    NonFiniteDensity { index: usize, value: f64 },

    /// A divisor vanished or an intermediate went non-finite.
    #[error("numeric domain error at {at}: {quantity}")]
    NumericDomain { at: IntegrationPoint, quantity: &'static str },

    /// Malformed line in a tabulated profile.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Where in the radial march a numeric failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationPoint {
    /// Midpoint step from sample `k` to `k + 1`.
    Step(usize),
    /// Evaluation of k2 from the surface eta.
    Surface,
}

impl fmt::Display for IntegrationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationPoint::Step(k) => write!(f, "step {}", k),
            IntegrationPoint::Surface => write!(f, "surface"),
        }
    }
}

/// A specialized `Result` type for Love number computations.
pub type Result<T> = std::result::Result<T, LoveError>;

impl LoveError {
    /// Returns `true` for contract violations detectable from the inputs alone.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            LoveError::LengthMismatch { .. }
                | LoveError::TooFewPoints { .. }
                | LoveError::NonPositiveRadius { .. }
                | LoveError::NonFiniteRadius { .. }
                | LoveError::NonIncreasingRadius { .. }
                | LoveError::NegativeDensity { .. }
                | LoveError::NonFiniteDensity { .. }
        )
    }

    /// Returns `true` if the failure happened during integration.
    pub fn is_numeric_domain(&self) -> bool {
        matches!(self, LoveError::NumericDomain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_display() {
        let err = LoveError::LengthMismatch { radii: 3, densities: 2 };
        assert_eq!(
            err.to_string(),
            "radius and density sequences must have equal length (got 3 radii, 2 densities)"
        );
    }

    #[test]
    fn categories_are_disjoint() {
        let input = LoveError::NegativeDensity { index: 4, value: -1.0 };
        let numeric = LoveError::NumericDomain {
            at: IntegrationPoint::Step(0),
            quantity: "zero mean density",
        };

        assert!(input.is_invalid_input());
        assert!(!input.is_numeric_domain());
        assert!(numeric.is_numeric_domain());
        assert!(!numeric.is_invalid_input());
    }

    #[test]
    fn domain_error_names_its_location() {
        let step = LoveError::NumericDomain {
            at: IntegrationPoint::Step(7),
            quantity: "non-finite quotient",
        };
        assert_eq!(step.to_string(), "numeric domain error at step 7: non-finite quotient");

        let surface = LoveError::NumericDomain {
            at: IntegrationPoint::Surface,
            quantity: "surface eta equals -2",
        };
        assert_eq!(surface.to_string(), "numeric domain error at surface: surface eta equals -2");
    }

    #[test]
    fn io_and_parse_are_neither_category() {
        let parse = LoveError::Parse { line: 2, message: "bad".into() };
        assert!(!parse.is_invalid_input());
        assert!(!parse.is_numeric_domain());
        assert!(parse.to_string().contains("line 2"));
    }
}
