//! # Built-in Curves
//!
//! Shortcuts for the curves shipped with this crate.
//!
//! `simple_*` functions return finished curves with no dead zone, no minimum
//! power and a power multiplier of 1. The other functions return builders for
//! custom values.
//!
//! ## Usage
//!
//! ```
//! use control_curves::{curves, ControlCurve, CurveBuilder};
//!
//! let turn = curves::simple_linear();
//! let drive = curves::power(3).with_dead_zone(0.05).build()?;
//!
//! assert_eq!(turn.get(0.5), 0.5);
//! assert_eq!(drive.get(0.04), 0.0);
//! # Ok::<(), control_curves::CurveError>(())
//! ```

use crate::curve::builder::CurveBuilder;
use crate::curve::linear::{LinearCurve, LinearCurveBuilder};
use crate::curve::power::{PowerCurve, PowerCurveBuilder};
use crate::error::Result;

/// Creates a linear curve with no dead zone and no minimum power.
///
/// Use [`linear`] to set custom values.
#[must_use]
pub fn simple_linear() -> LinearCurve {
    LinearCurve::default()
}

/// Creates a power curve with no dead zone and no minimum power.
///
/// Use [`power`] to set custom values. For best results use an odd power.
///
/// # Errors
///
/// Returns [`CurveError::InvalidPower`](crate::CurveError::InvalidPower) if
/// `power` is smaller than 1.
pub fn simple_power(power: i32) -> Result<PowerCurve> {
    PowerCurveBuilder::new(power).build()
}

/// Creates a linear curve builder for custom dead zone, minimum power and
/// power multiplier values.
///
/// Use [`simple_linear`] if defaults are enough.
#[must_use]
pub fn linear() -> LinearCurveBuilder {
    LinearCurveBuilder::new()
}

/// Creates a power curve builder for custom dead zone, minimum power and
/// power multiplier values.
///
/// Use [`simple_power`] if defaults are enough. In most cases `power` should
/// be odd.
#[must_use]
pub fn power(power: i32) -> PowerCurveBuilder {
    PowerCurveBuilder::new(power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::ControlCurve;
    use crate::error::CurveError;

    #[test]
    fn test_simple_linear_defaults() {
        let curve = simple_linear();
        assert_eq!(curve.minimum_power(), 0.0);
        assert_eq!(curve.dead_zone(), 0.0);
        assert_eq!(curve.power_multiplier(), 1.0);
    }

    #[test]
    fn test_simple_power_defaults() {
        let curve = simple_power(5).unwrap();
        assert_eq!(curve.power(), 5);
        assert_eq!(curve.minimum_power(), 0.0);
        assert_eq!(curve.dead_zone(), 0.0);
        assert_eq!(curve.power_multiplier(), 1.0);
    }

    #[test]
    fn test_simple_power_invalid() {
        assert!(matches!(simple_power(0), Err(CurveError::InvalidPower(0))));
    }

    #[test]
    fn test_linear_builder_matches_simple() {
        assert_eq!(linear().build().unwrap(), simple_linear());
    }

    #[test]
    fn test_power_builder_keeps_power() {
        assert_eq!(power(9).power(), 9);
    }
}
