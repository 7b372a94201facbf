//! # Power Curve Module
//!
//! Power-law ramp from the minimum power at the dead zone edge to the power
//! multiplier at full deflection.
//!
//! The exponent is applied to the excursion past the dead zone, so the curve
//! is anchored at the dead zone edge rather than at the origin. Equivalent
//! closed form for `|v| >= dead_zone`:
//!
//! `|output| = (power_multiplier - minimum_power) / (1 - dead_zone)^power * (|v| - dead_zone)^power + minimum_power`
//!
//! Higher powers give finer control near center. Odd powers are recommended;
//! even powers are accepted but reported through [`CurveWarning::EvenPower`].

use tracing::debug;

use super::builder::{CurveBuilder, CurveSettings, CurveWarning};
use super::shape::Shape;
use super::{ControlCurve, CurveConfig};
use crate::error::{CurveError, Result};

/// A power-law control curve.
///
/// # Examples
///
/// ```
/// use control_curves::{curves, ControlCurve};
///
/// let curve = curves::simple_power(3)?;
/// assert!((curve.get(0.5) - 0.125).abs() < 1e-9);
/// assert_eq!(curve.power(), 3);
/// # Ok::<(), control_curves::CurveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurve {
    config: CurveConfig,
    /// Exponent, at least 1.
    power: i32,
}

impl PowerCurve {
    /// Returns the exponent of this curve.
    #[must_use]
    pub fn power(&self) -> i32 {
        self.power
    }
}

impl ControlCurve for PowerCurve {
    fn config(&self) -> &CurveConfig {
        &self.config
    }
}

impl Shape for PowerCurve {
    #[inline]
    fn raw(&self, excursion: f64) -> f64 {
        excursion.powi(self.power)
    }
}

/// Builder for a [`PowerCurve`].
#[derive(Debug, Clone)]
pub struct PowerCurveBuilder {
    settings: CurveSettings,
    power: i32,
}

impl PowerCurveBuilder {
    /// Creates a builder with the given power, the minimum power and dead zone
    /// set to 0 and the power multiplier set to 1.
    ///
    /// The power is checked when the curve is built. In most cases it should
    /// be odd.
    #[must_use]
    pub fn new(power: i32) -> Self {
        Self {
            settings: CurveSettings::default(),
            power,
        }
    }

    /// Returns the configured power.
    #[must_use]
    pub fn power(&self) -> i32 {
        self.power
    }
}

impl CurveBuilder for PowerCurveBuilder {
    type Curve = PowerCurve;

    fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut CurveSettings {
        &mut self.settings
    }

    fn finish(self, config: CurveConfig, warnings: &mut Vec<CurveWarning>) -> Result<PowerCurve> {
        if self.power < 1 {
            return Err(CurveError::InvalidPower(self.power));
        }

        if self.power % 2 == 0 {
            warnings.push(CurveWarning::EvenPower(self.power));
        }

        debug!("Built power curve (power {}): {:?}", self.power, config);
        Ok(PowerCurve {
            config,
            power: self.power,
        })
    }
}
