//! # Linear Curve Module
//!
//! Straight ramp from the minimum power at the dead zone edge to the power
//! multiplier at full deflection.
//!
//! Equivalent closed form for `|v| >= dead_zone`:
//!
//! `|output| = (power_multiplier - minimum_power) / (1 - dead_zone) * (|v| - dead_zone) + minimum_power`

use tracing::debug;

use super::builder::{CurveBuilder, CurveSettings, CurveWarning};
use super::shape::Shape;
use super::{ControlCurve, CurveConfig};
use crate::error::Result;

/// A linear control curve.
///
/// # Examples
///
/// ```
/// use control_curves::{curves, ControlCurve};
///
/// let curve = curves::simple_linear();
/// assert_eq!(curve.get(0.2), 0.2);
/// assert_eq!(curve.get(-0.9), -0.9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearCurve {
    config: CurveConfig,
}

impl ControlCurve for LinearCurve {
    fn config(&self) -> &CurveConfig {
        &self.config
    }
}

impl Shape for LinearCurve {
    #[inline]
    fn raw(&self, excursion: f64) -> f64 {
        excursion
    }
}

/// Builder for a [`LinearCurve`].
#[derive(Debug, Clone, Default)]
pub struct LinearCurveBuilder {
    settings: CurveSettings,
}

impl LinearCurveBuilder {
    /// Creates a builder with the minimum power and dead zone set to 0 and the
    /// power multiplier set to 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CurveBuilder for LinearCurveBuilder {
    type Curve = LinearCurve;

    fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut CurveSettings {
        &mut self.settings
    }

    fn finish(self, config: CurveConfig, _warnings: &mut Vec<CurveWarning>) -> Result<LinearCurve> {
        debug!("Built linear curve: {:?}", config);
        Ok(LinearCurve { config })
    }
}
