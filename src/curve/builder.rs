//! # Curve Builder Module
//!
//! Fluent construction of control curves.
//!
//! Every builder carries the same [`CurveSettings`] and gets the shared
//! setters from [`CurveBuilder`]. Nothing is checked while setting values;
//! [`CurveBuilder::build`] validates the shared settings first and then hands
//! the validated [`CurveConfig`] to the builder's own `finish` step.
//!
//! ## Usage
//!
//! ```
//! use control_curves::{curves, ControlCurve, CurveBuilder, CurveWarning};
//!
//! let (curve, warnings) = curves::power(2)
//!     .with_dead_zone(0.1)
//!     .build_with_warnings()?;
//!
//! assert_eq!(warnings, vec![CurveWarning::EvenPower(2)]);
//! assert_eq!(curve.get(0.05), 0.0);
//! # Ok::<(), control_curves::CurveError>(())
//! ```

use std::fmt;

use tracing::warn;

use super::{ControlCurve, CurveConfig};
use crate::error::Result;

/// Unvalidated curve settings accumulated by a builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    /// Smallest output past the dead zone. Valid range 0.0 to <1.0.
    pub minimum_power: f64,
    /// Input threshold below which output is zero. Valid range 0.0 to <1.0.
    pub dead_zone: f64,
    /// Output at full deflection. Valid range >0.0 to 1.0.
    pub power_multiplier: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            minimum_power: 0.0,
            dead_zone: 0.0,
            power_multiplier: 1.0,
        }
    }
}

impl CurveSettings {
    /// Validates the settings into a [`CurveConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::OutOfRange`](crate::CurveError::OutOfRange) if any
    /// field is outside its valid range.
    pub fn validate(&self) -> Result<CurveConfig> {
        CurveConfig::new(self.minimum_power, self.dead_zone, self.power_multiplier)
    }
}

/// Non-fatal advisory raised while building a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveWarning {
    /// The power curve uses an even exponent.
    EvenPower(i32),
}

impl fmt::Display for CurveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenPower(power) => write!(
                f,
                "power curve uses even power {}; odd powers are recommended for drive curves",
                power
            ),
        }
    }
}

/// Builder for a specific kind of control curve.
///
/// Implementors expose their settings and a `finish` step; the setters and
/// the validating `build` come for free.
pub trait CurveBuilder: Sized {
    /// The curve produced by this builder.
    type Curve: ControlCurve;

    /// Returns the accumulated settings.
    fn settings(&self) -> &CurveSettings;

    /// Returns the accumulated settings for modification.
    fn settings_mut(&mut self) -> &mut CurveSettings;

    /// Builds the curve from an already validated configuration.
    ///
    /// Runs after the shared settings have been checked, so only settings
    /// specific to this builder need validating here. Advisories go into
    /// `warnings`.
    ///
    /// # Errors
    ///
    /// Returns an error if a builder-specific setting is invalid.
    fn finish(self, config: CurveConfig, warnings: &mut Vec<CurveWarning>) -> Result<Self::Curve>;

    /// Sets the minimum power, the smallest output that still moves the motor.
    ///
    /// Should be in the range 0.0 to <1.0.
    #[must_use]
    fn with_minimum_power(mut self, minimum_power: f64) -> Self {
        self.settings_mut().minimum_power = minimum_power;
        self
    }

    /// Sets the dead zone. Inputs smaller than this are treated as 0.
    ///
    /// Controller axes almost always drift a little, so a small dead zone is
    /// usually wanted. Should be in the range 0.0 to <1.0.
    #[must_use]
    fn with_dead_zone(mut self, dead_zone: f64) -> Self {
        self.settings_mut().dead_zone = dead_zone;
        self
    }

    /// Sets the power multiplier, the output at full deflection.
    ///
    /// Should be in the range >0.0 to 1.0.
    #[must_use]
    fn with_power_multiplier(mut self, power_multiplier: f64) -> Self {
        self.settings_mut().power_multiplier = power_multiplier;
        self
    }

    /// Builds the curve and returns any advisories instead of logging them.
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is invalid or outside its bounds.
    fn build_with_warnings(self) -> Result<(Self::Curve, Vec<CurveWarning>)> {
        let config = self.settings().validate()?;
        let mut warnings = Vec::new();
        let curve = self.finish(config, &mut warnings)?;
        Ok((curve, warnings))
    }

    /// Builds the curve, logging any advisories at warn level.
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is invalid or outside its bounds.
    fn build(self) -> Result<Self::Curve> {
        let (curve, warnings) = self.build_with_warnings()?;
        for warning in &warnings {
            warn!("{}", warning);
        }
        Ok(curve)
    }
}
