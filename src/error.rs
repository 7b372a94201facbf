//! # Error Types
//!
//! Custom error types for control curves using `thiserror`.

use std::fmt;

use thiserror::Error;

/// Configuration field checked when a curve is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveField {
    /// Smallest output past the dead zone
    MinimumPower,
    /// Input threshold below which output is zero
    DeadZone,
    /// Output at full deflection
    PowerMultiplier,
}

impl fmt::Display for CurveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MinimumPower => "minimum power",
            Self::DeadZone => "dead zone",
            Self::PowerMultiplier => "power multiplier",
        };
        f.write_str(name)
    }
}

/// Main error type for control curves
#[derive(Debug, Error)]
pub enum CurveError {
    /// A shared curve parameter is outside its valid range
    #[error("{field} must be in {bound}, got {value}")]
    OutOfRange {
        field: CurveField,
        value: f64,
        bound: &'static str,
    },

    /// Power curve exponent below 1
    #[error("power cannot be smaller than 1, got {0}")]
    InvalidPower(i32),

    /// A named curve in a profile failed to build
    #[error("curve '{name}': {source}")]
    Curve {
        name: String,
        #[source]
        source: Box<CurveError>,
    },

    /// Curve profile errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for control curves
pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = CurveError::OutOfRange {
            field: CurveField::DeadZone,
            value: 1.5,
            bound: "[0, 1)",
        };
        let msg = err.to_string();
        assert!(msg.contains("dead zone"));
        assert!(msg.contains("[0, 1)"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_invalid_power_display() {
        let err = CurveError::InvalidPower(0);
        assert_eq!(err.to_string(), "power cannot be smaller than 1, got 0");
    }

    #[test]
    fn test_field_display() {
        assert_eq!(CurveField::MinimumPower.to_string(), "minimum power");
        assert_eq!(CurveField::PowerMultiplier.to_string(), "power multiplier");
    }

    #[test]
    fn test_named_curve_error_keeps_source() {
        use std::error::Error as _;

        let err = CurveError::Curve {
            name: "drive".to_string(),
            source: Box::new(CurveError::InvalidPower(0)),
        };
        assert_eq!(err.to_string(), "curve 'drive': power cannot be smaller than 1, got 0");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CurveError = io.into();
        assert!(matches!(err, CurveError::Io(_)));
    }
}
